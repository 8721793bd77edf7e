//! Logging facilities for pulse-toggle.
//!
//! This module provides:
//! - Target names for filtering `tracing` output per subsystem
//! - Thin macros that pin the target for common log levels
//! - A performance span guard for profiling hot paths
//!
//! # Tracing Integration
//!
//! pulse-toggle uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("pulse_toggle::state=debug")
//!     .init();
//! ```

/// Span names used throughout pulse-toggle for tracing.
pub mod span_names {
    /// A full `set_checked` call chain.
    pub const TRANSITION: &str = "pulse_toggle::transition";
    /// One frame of animation stepping.
    pub const ADVANCE: &str = "pulse_toggle::advance";
    /// Checked-change listener dispatch.
    pub const NOTIFY: &str = "pulse_toggle::notify";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core primitives target.
    pub const CORE: &str = "pulse_toggle_core";
    /// Callback slot registration target.
    pub const SLOT: &str = "pulse_toggle_core::slot";
    /// Performance span target.
    pub const PERF: &str = "pulse_toggle::perf";
    /// State engine target (accepted and absorbed updates).
    pub const STATE: &str = "pulse_toggle::state";
    /// Animation lifecycle target (start, cancel, completion).
    pub const ANIMATION: &str = "pulse_toggle::animation";
    /// Pointer and click handling target.
    pub const INPUT: &str = "pulse_toggle::input";
    /// Feedback cue playback target.
    pub const FEEDBACK: &str = "pulse_toggle::feedback";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::trace_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` macros with consistent
/// target naming.
#[macro_export]
macro_rules! toggle_trace {
    (target: $target:expr, $($arg:tt)*) => {
        tracing::trace!(target: $target, $($arg)*)
    };
    ($($arg:tt)*) => {
        tracing::trace!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

#[macro_export]
macro_rules! toggle_debug {
    (target: $target:expr, $($arg:tt)*) => {
        tracing::debug!(target: $target, $($arg)*)
    };
    ($($arg:tt)*) => {
        tracing::debug!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

#[macro_export]
macro_rules! toggle_info {
    (target: $target:expr, $($arg:tt)*) => {
        tracing::info!(target: $target, $($arg)*)
    };
    ($($arg:tt)*) => {
        tracing::info!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

#[macro_export]
macro_rules! toggle_warn {
    (target: $target:expr, $($arg:tt)*) => {
        tracing::warn!(target: $target, $($arg)*)
    };
    ($($arg:tt)*) => {
        tracing::warn!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}
