// Copyright 2026 the Callgrind Control Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Start/stop facade over an optionally linked instrumentation profiler.
//!
//! [`ProfilerControl`] forwards `start`/`stop` requests to an [`InstrumentationBackend`]. When the
//! backend is not linked into the build, both operations degrade to a debug diagnostic and still
//! report [`SUCCESS`]. Neither operation has a failure path.
//!
//! This crate carries no profiler dependency itself; `callgrind_control_valgrind` provides the
//! Callgrind backend behind its `callgrind` feature.
//!
//! ## Example
//! ```
//! use callgrind_control::{ProfilerControl, SUCCESS, UnlinkedBackend};
//!
//! let mut control = ProfilerControl::new(UnlinkedBackend);
//! assert_eq!(control.start(true), SUCCESS);
//! assert_eq!(control.stop(), SUCCESS);
//! ```

mod backend;
mod control;
mod report;

pub use backend::{InstrumentationBackend, UnlinkedBackend};
pub use control::{ProfilerControl, SUCCESS, Status};
pub use report::{ConsoleReporter, Reporter};
