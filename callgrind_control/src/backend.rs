// Copyright 2026 the Callgrind Control Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend capability shared by linked and unlinked profilers.

/// A profiler that can toggle its instrumentation.
///
/// The backend owns the real instrumentation state. Callers may signal `begin` while already
/// instrumenting, or `end` before ever beginning; implementations treat those as no-ops.
pub trait InstrumentationBackend {
    /// Short label passed to [`Reporter::diagnostic`](crate::Reporter::diagnostic).
    fn name(&self) -> &'static str;

    /// Returns `true` if a real profiler is linked into this build.
    ///
    /// When `false`, [`ProfilerControl`](crate::ProfilerControl) never calls the signal methods.
    fn is_linked(&self) -> bool;

    /// Begin collecting instrumentation.
    fn begin(&mut self);

    /// Stop collecting instrumentation.
    fn end(&mut self);

    /// Zero the profiler's accumulated counters.
    fn reset_counters(&mut self);
}

impl<B: InstrumentationBackend + ?Sized> InstrumentationBackend for &mut B {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn is_linked(&self) -> bool {
        (**self).is_linked()
    }

    fn begin(&mut self) {
        (**self).begin();
    }

    fn end(&mut self) {
        (**self).end();
    }

    fn reset_counters(&mut self) {
        (**self).reset_counters();
    }
}

/// Backend used when no profiler is linked into the build.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UnlinkedBackend;

impl InstrumentationBackend for UnlinkedBackend {
    fn name(&self) -> &'static str {
        "unlinked"
    }

    fn is_linked(&self) -> bool {
        false
    }

    fn begin(&mut self) {}

    fn end(&mut self) {}

    fn reset_counters(&mut self) {}
}
