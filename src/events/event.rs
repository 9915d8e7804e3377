//! # The closed set of platform notifications.
//!
//! [`Event`] enumerates every distinguishable notification the platform
//! location manager can deliver. The [`LocationDelegate`](crate::LocationDelegate)
//! produces exactly one `Event` per platform callback; the
//! [`EventBridge`](crate::EventBridge) delivers each one, unmodified, to every
//! registered task, which projects it into its own narrower stream-event type.
//!
//! There are no cross-variant invariants; each variant carries exactly its
//! payload. Events are immutable values: tasks receive a shared reference and
//! clone payloads into their own stream events.

use crate::error::PlatformError;
use crate::types::{
    AccuracyAuthorization, AuthorizationStatus, Beacon, BeaconConstraint, HeadingFix, LocationFix,
    Region, Visit,
};

/// A single platform notification, as mapped by the delegate.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// App-level authorization status changed.
    AuthorizationChanged(AuthorizationStatus),
    /// Granted accuracy level changed.
    AccuracyAuthorizationChanged(AccuracyAuthorization),
    /// Device-wide location services were enabled or disabled.
    LocationServicesEnabledChanged(bool),
    /// One or more new location fixes, in reporting order.
    LocationsReceived(Vec<LocationFix>),
    /// The platform failed to deliver location data.
    LocationError(PlatformError),
    /// A new heading fix.
    HeadingUpdated(HeadingFix),
    /// The platform paused location delivery (e.g. stationary device).
    UpdatesPaused,
    /// The platform resumed location delivery.
    UpdatesResumed,
    /// Monitoring failed, for one region or (if `region` is `None`) globally.
    RegionMonitoringFailed {
        /// The affected region, when the platform could attribute the failure.
        region: Option<Region>,
        /// The platform-reported error.
        error: PlatformError,
    },
    /// The device entered a monitored region.
    RegionEntered(Region),
    /// The device exited a monitored region.
    RegionExited(Region),
    /// Monitoring became active for a region.
    RegionMonitoringStarted(Region),
    /// The platform recorded a visit.
    VisitRecorded(Visit),
    /// A ranging pass completed for a constraint.
    BeaconsRanged {
        /// Beacons observed in this pass (may be empty).
        beacons: Vec<Beacon>,
        /// The constraint the pass was satisfying.
        constraint: BeaconConstraint,
    },
    /// Ranging failed for a constraint.
    BeaconRangingFailed {
        /// The constraint whose ranging failed.
        constraint: BeaconConstraint,
        /// The platform-reported error.
        error: PlatformError,
    },
}

impl Event {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            Event::AuthorizationChanged(_) => "authorization_changed",
            Event::AccuracyAuthorizationChanged(_) => "accuracy_authorization_changed",
            Event::LocationServicesEnabledChanged(_) => "location_services_enabled_changed",
            Event::LocationsReceived(_) => "locations_received",
            Event::LocationError(_) => "location_error",
            Event::HeadingUpdated(_) => "heading_updated",
            Event::UpdatesPaused => "updates_paused",
            Event::UpdatesResumed => "updates_resumed",
            Event::RegionMonitoringFailed { .. } => "region_monitoring_failed",
            Event::RegionEntered(_) => "region_entered",
            Event::RegionExited(_) => "region_exited",
            Event::RegionMonitoringStarted(_) => "region_monitoring_started",
            Event::VisitRecorded(_) => "visit_recorded",
            Event::BeaconsRanged { .. } => "beacons_ranged",
            Event::BeaconRangingFailed { .. } => "beacon_ranging_failed",
        }
    }

    /// True if this event carries a platform error.
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Event::LocationError(_)
                | Event::RegionMonitoringFailed { .. }
                | Event::BeaconRangingFailed { .. }
        )
    }
}
