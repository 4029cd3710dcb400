// Copyright 2026 the Callgrind Control Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entry points exposed to the host runtime.

use callgrind_control::{ConsoleReporter, ProfilerControl, Status};

/// Backend this build drives: [`CallgrindBackend`](crate::CallgrindBackend) with the `callgrind`
/// feature, [`UnlinkedBackend`](callgrind_control::UnlinkedBackend) without it.
#[cfg(feature = "callgrind")]
pub type BuildBackend = crate::callgrind::CallgrindBackend;

/// Backend this build drives: `CallgrindBackend` with the `callgrind` feature,
/// [`UnlinkedBackend`](callgrind_control::UnlinkedBackend) without it.
#[cfg(not(feature = "callgrind"))]
pub type BuildBackend = callgrind_control::UnlinkedBackend;

/// Whether this build links the Callgrind client requests.
pub const LINKED: bool = cfg!(feature = "callgrind");

/// Build the control used by the host entry points.
#[must_use]
pub fn default_control() -> ProfilerControl<BuildBackend, ConsoleReporter> {
    ProfilerControl::new(BuildBackend::default())
}

/// Start Callgrind instrumentation, zeroing its stats when `zero_stats` is set.
///
/// `zero_stats` defaults to `false`: hosts that expose it as an optional argument should pass
/// `false` when the caller omits it.
///
/// Always returns [`SUCCESS`](callgrind_control::SUCCESS).
pub fn valgrind_callgrind_start(zero_stats: bool) -> Status {
    default_control().start(zero_stats)
}

/// Stop Callgrind instrumentation.
///
/// Always returns [`SUCCESS`](callgrind_control::SUCCESS).
pub fn valgrind_callgrind_stop() -> Status {
    default_control().stop()
}

#[cfg(test)]
mod tests {
    use super::{LINKED, default_control, valgrind_callgrind_start, valgrind_callgrind_stop};
    use callgrind_control::SUCCESS;

    #[test]
    fn default_control_matches_build_linkage() {
        assert_eq!(default_control().is_linked(), LINKED);
    }

    #[test]
    fn stop_before_start_succeeds() {
        assert_eq!(valgrind_callgrind_stop(), SUCCESS);
    }

    #[test]
    fn start_with_default_flag_matches_explicit_false() {
        let mut omitted = default_control();
        assert_eq!(valgrind_callgrind_start(false), omitted.start(false));
        assert_eq!(valgrind_callgrind_stop(), SUCCESS);
    }

    #[test]
    fn repeated_start_succeeds() {
        assert_eq!(valgrind_callgrind_start(false), SUCCESS);
        assert_eq!(valgrind_callgrind_start(true), SUCCESS);
        assert_eq!(valgrind_callgrind_stop(), SUCCESS);
    }
}
