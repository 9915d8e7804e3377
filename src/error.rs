//! Error type surfaced by the bridge.
//!
//! The bridge never synthesizes failures of its own: every error a consumer
//! observes on a stream is a [`PlatformError`] reported by the platform
//! location manager and passed through unchanged. There is no fatal error in
//! the core itself; the worst outcome is a dropped event when no consumer is
//! listening.

use thiserror::Error;

/// # Error reported by the platform location manager.
///
/// Carried inside [`Event::LocationError`](crate::Event::LocationError) and
/// the per-kind failure variants (region monitoring, beacon ranging), then
/// forwarded verbatim to every live stream whose filter accepts it.
///
/// Errors are reported, never retried, by the bridge; retry policy belongs to
/// the consumer.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The platform denied the request (missing or revoked authorization).
    #[error("authorization denied by the platform")]
    Denied,

    /// A location fix could not be acquired right now.
    ///
    /// Often intermittent; continuous streams stay live after receiving it.
    #[error("location fix unavailable")]
    FixUnavailable,

    /// Region monitoring failed for a platform-reported reason.
    #[error("region monitoring failure: {reason}")]
    MonitoringFailure {
        /// Platform-supplied description, passed through verbatim.
        reason: String,
    },

    /// Beacon ranging failed for a platform-reported reason.
    #[error("beacon ranging failure: {reason}")]
    RangingFailure {
        /// Platform-supplied description, passed through verbatim.
        reason: String,
    },

    /// Any other platform-reported error.
    #[error("platform error {code}: {message}")]
    Other {
        /// Platform-native error code.
        code: i32,
        /// Platform-supplied message.
        message: String,
    },
}

impl PlatformError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use locbridge::PlatformError;
    ///
    /// assert_eq!(PlatformError::FixUnavailable.as_label(), "fix_unavailable");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            PlatformError::Denied => "denied",
            PlatformError::FixUnavailable => "fix_unavailable",
            PlatformError::MonitoringFailure { .. } => "monitoring_failure",
            PlatformError::RangingFailure { .. } => "ranging_failure",
            PlatformError::Other { .. } => "other",
        }
    }
}
