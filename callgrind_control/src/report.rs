// Copyright 2026 the Callgrind Control Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Output collaborator for control notices and diagnostics.

use std::io::Write;

/// Receives the messages [`ProfilerControl`](crate::ProfilerControl) produces.
///
/// Notices are user-facing and only emitted when a backend is linked. Diagnostics are debug-level
/// and only emitted when it is not.
pub trait Reporter {
    /// Human-readable progress notice.
    fn notice(&mut self, message: &str);

    /// Debug-level diagnostic about `backend`, labelled by
    /// [`InstrumentationBackend::name`](crate::InstrumentationBackend::name).
    fn diagnostic(&mut self, backend: &str, message: &str);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn notice(&mut self, message: &str) {
        (**self).notice(message);
    }

    fn diagnostic(&mut self, backend: &str, message: &str) {
        (**self).diagnostic(backend, message);
    }
}

/// Default reporter: notices go to stdout, diagnostics to `tracing` at debug level.
///
/// Diagnostics use target `callgrind_control` and carry the backend label in a `backend` field.
#[derive(Copy, Clone, Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn notice(&mut self, message: &str) {
        // A closed stdout must not turn a control call into a failure.
        let _ = writeln!(std::io::stdout().lock(), "{message}");
    }

    fn diagnostic(&mut self, backend: &str, message: &str) {
        tracing::debug!(target: "callgrind_control", backend, "{message}");
    }
}
