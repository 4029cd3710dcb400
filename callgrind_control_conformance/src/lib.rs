// Copyright 2026 the Callgrind Control Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording doubles for exercising `callgrind_control` without a profiler.

use callgrind_control::{InstrumentationBackend, Reporter};

/// A signal the facade sent to a [`RecordingBackend`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// `begin` was called.
    Started,
    /// `reset_counters` was called.
    StatsZeroed,
    /// `end` was called.
    Stopped,
}

/// Simulated backend that records every signal in call order.
#[derive(Clone, Debug, Default)]
pub struct RecordingBackend {
    linked: bool,
    events: Vec<Event>,
}

impl RecordingBackend {
    /// A backend that behaves as if the profiler were linked.
    #[must_use]
    pub fn linked() -> Self {
        Self {
            linked: true,
            events: Vec::new(),
        }
    }

    /// A backend that behaves as if the profiler were absent.
    #[must_use]
    pub fn unlinked() -> Self {
        Self::default()
    }

    /// Signals received so far.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

impl InstrumentationBackend for RecordingBackend {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn is_linked(&self) -> bool {
        self.linked
    }

    fn begin(&mut self) {
        self.events.push(Event::Started);
    }

    fn end(&mut self) {
        self.events.push(Event::Stopped);
    }

    fn reset_counters(&mut self) {
        self.events.push(Event::StatsZeroed);
    }
}

/// A diagnostic received by a [`RecordingReporter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Label of the backend the diagnostic is about.
    pub backend: String,
    /// Diagnostic text.
    pub message: String,
}

/// Reporter that keeps notices and diagnostics separately.
#[derive(Clone, Debug, Default)]
pub struct RecordingReporter {
    notices: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

impl RecordingReporter {
    /// Notices, in emission order.
    #[must_use]
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Diagnostics, in emission order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl Reporter for RecordingReporter {
    fn notice(&mut self, message: &str) {
        self.notices.push(message.into());
    }

    fn diagnostic(&mut self, backend: &str, message: &str) {
        self.diagnostics.push(Diagnostic {
            backend: backend.into(),
            message: message.into(),
        });
    }
}
