// Copyright 2026 the Callgrind Control Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use callgrind_control::InstrumentationBackend;

/// Backend that issues Callgrind client requests via `crabgrind`.
#[derive(Copy, Clone, Debug, Default)]
pub struct CallgrindBackend;

impl CallgrindBackend {
    /// Create a new backend.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl InstrumentationBackend for CallgrindBackend {
    fn name(&self) -> &'static str {
        "callgrind"
    }

    fn is_linked(&self) -> bool {
        true
    }

    fn begin(&mut self) {
        crabgrind::callgrind::start_instrumentation();
    }

    fn end(&mut self) {
        crabgrind::callgrind::stop_instrumentation();
    }

    fn reset_counters(&mut self) {
        crabgrind::callgrind::zero_stats();
    }
}
