// Copyright 2026 the Callgrind Control Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Callgrind backend and host entry points for `callgrind_control`.
//!
//! The `callgrind` feature links the Valgrind client requests through `crabgrind`. Without it,
//! [`BuildBackend`] is [`UnlinkedBackend`](callgrind_control::UnlinkedBackend) and both entry
//! points only emit a debug diagnostic.
//!
//! Client requests are harmless outside Valgrind, so a `callgrind` build can still run natively.
//!
//! ## Example
//! ```
//! use callgrind_control::SUCCESS;
//! use callgrind_control_valgrind::{valgrind_callgrind_start, valgrind_callgrind_stop};
//!
//! assert_eq!(valgrind_callgrind_start(true), SUCCESS);
//! // code under measurement
//! assert_eq!(valgrind_callgrind_stop(), SUCCESS);
//! ```

#[cfg(feature = "callgrind")]
mod callgrind;
mod host;

#[cfg(feature = "callgrind")]
pub use callgrind::CallgrindBackend;
pub use host::{
    LINKED, BuildBackend, default_control, valgrind_callgrind_start, valgrind_callgrind_stop,
};
