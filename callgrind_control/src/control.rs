// Copyright 2026 the Callgrind Control Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::backend::InstrumentationBackend;
use crate::report::{ConsoleReporter, Reporter};

/// Integer status returned to host callers.
pub type Status = i32;

/// The only status either operation returns.
pub const SUCCESS: Status = 0;

/// Start/stop facade over an [`InstrumentationBackend`].
///
/// The facade does not track whether instrumentation is active. Repeated `start` calls, or a
/// `stop` with no preceding `start`, are forwarded as-is and still return [`SUCCESS`].
pub struct ProfilerControl<B, R = ConsoleReporter> {
    backend: B,
    reporter: R,
}

impl<B: InstrumentationBackend> ProfilerControl<B, ConsoleReporter> {
    /// Create a control that reports to the console.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self::with_reporter(backend, ConsoleReporter)
    }
}

impl<B: InstrumentationBackend, R: Reporter> ProfilerControl<B, R> {
    /// Create a control with a custom reporter.
    #[must_use]
    pub fn with_reporter(backend: B, reporter: R) -> Self {
        Self { backend, reporter }
    }

    /// Begin instrumentation, optionally zeroing the backend's counters first.
    ///
    /// With no linked backend this only emits a diagnostic; `reset_counters` is ignored there.
    pub fn start(&mut self, reset_counters: bool) -> Status {
        if !self.backend.is_linked() {
            self.reporter.diagnostic(
                self.backend.name(),
                "NOT starting Valgrind callgrind instrumentation, not linked",
            );
            return SUCCESS;
        }
        self.reporter.notice("Starting callgrind instrumentation...");
        self.backend.begin();
        if reset_counters {
            self.reporter.notice("Zeroing callgrind stats.");
            self.backend.reset_counters();
        }
        SUCCESS
    }

    /// End instrumentation.
    pub fn stop(&mut self) -> Status {
        if !self.backend.is_linked() {
            self.reporter.diagnostic(
                self.backend.name(),
                "NOT stopping Valgrind callgrind instrumentation, not linked.",
            );
            return SUCCESS;
        }
        self.reporter
            .notice("Stopping Valgrind callgrind instrumentation...");
        self.backend.end();
        SUCCESS
    }

    /// Returns `true` if the wrapped backend drives a real profiler.
    #[must_use]
    pub fn is_linked(&self) -> bool {
        self.backend.is_linked()
    }

    /// Borrow the wrapped backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Borrow the reporter.
    #[must_use]
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Consume the control, returning its backend and reporter.
    #[must_use]
    pub fn into_parts(self) -> (B, R) {
        (self.backend, self.reporter)
    }
}

impl<B: InstrumentationBackend, R> std::fmt::Debug for ProfilerControl<B, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfilerControl")
            .field("backend", &self.backend.name())
            .field("linked", &self.backend.is_linked())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{ProfilerControl, SUCCESS};
    use crate::backend::{InstrumentationBackend, UnlinkedBackend};
    use crate::report::Reporter;

    /// Backend with a fixed linkage; call order is covered by the conformance suite.
    #[derive(Debug)]
    struct Stub(bool);

    impl InstrumentationBackend for Stub {
        fn name(&self) -> &'static str {
            "stub"
        }

        fn is_linked(&self) -> bool {
            self.0
        }

        fn begin(&mut self) {}

        fn end(&mut self) {}

        fn reset_counters(&mut self) {}
    }

    /// Every reporter call, rendered as `kind:backend:message`.
    #[derive(Debug, Default)]
    struct Transcript(Vec<String>);

    impl Reporter for Transcript {
        fn notice(&mut self, message: &str) {
            self.0.push(format!("notice::{message}"));
        }

        fn diagnostic(&mut self, backend: &str, message: &str) {
            self.0.push(format!("diagnostic:{backend}:{message}"));
        }
    }

    #[test]
    fn linked_branch_notice_texts() {
        let mut control = ProfilerControl::with_reporter(Stub(true), Transcript::default());
        assert_eq!(control.start(false), SUCCESS);
        assert_eq!(control.start(true), SUCCESS);
        assert_eq!(control.stop(), SUCCESS);

        assert_eq!(
            control.reporter().0,
            [
                "notice::Starting callgrind instrumentation...",
                "notice::Starting callgrind instrumentation...",
                "notice::Zeroing callgrind stats.",
                "notice::Stopping Valgrind callgrind instrumentation...",
            ]
        );
    }

    #[test]
    fn unlinked_branch_diagnostics_carry_backend_label() {
        let mut control = ProfilerControl::with_reporter(Stub(false), Transcript::default());
        assert_eq!(control.start(true), SUCCESS);
        assert_eq!(control.stop(), SUCCESS);

        let (_, transcript) = control.into_parts();
        assert_eq!(
            transcript.0,
            [
                "diagnostic:stub:NOT starting Valgrind callgrind instrumentation, not linked",
                "diagnostic:stub:NOT stopping Valgrind callgrind instrumentation, not linked.",
            ]
        );
    }

    #[test]
    fn debug_shows_backend_label() {
        let control = ProfilerControl::new(UnlinkedBackend);
        assert!(!control.is_linked(), "unlinked backend should be reported");
        let rendered = format!("{control:?}");
        assert!(rendered.contains("unlinked"), "debug output was {rendered}");
    }
}
