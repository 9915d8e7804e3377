//! # LocationDelegate: the single platform callback sink.
//!
//! [`LocationDelegate`] is the one object registered with the platform
//! location manager. Each of its methods corresponds to exactly one platform
//! callback and performs a pure, allocation-only mapping to one [`Event`],
//! forwarded to the bridge.
//!
//! ## Rules
//! - **No business logic**: no filtering, no buffering, no side effects
//!   beyond the forward. Routing and projection live in the tasks.
//! - **Exactly one event per callback**: the mapping is exhaustive and 1:1.
//!   The platform's combined authorization callback is therefore split into
//!   three delegate methods here, one per resulting event.
//! - **Silent no-op once released**: the delegate holds only a `Weak`
//!   reference to the bridge; after the owning service is gone, callbacks
//!   are dropped without error.

use std::sync::Weak;

use tracing::trace;

use crate::error::PlatformError;
use crate::types::{
    AccuracyAuthorization, AuthorizationStatus, Beacon, BeaconConstraint, HeadingFix, LocationFix,
    Region, Visit,
};

use super::bridge::EventBridge;
use super::event::Event;

/// Stateless callback sink mapping platform callbacks to [`Event`]s.
#[derive(Clone)]
pub struct LocationDelegate {
    bridge: Weak<EventBridge>,
}

impl LocationDelegate {
    /// Creates a delegate forwarding to the given bridge.
    pub fn new(bridge: Weak<EventBridge>) -> Self {
        Self { bridge }
    }

    fn forward(&self, event: Event) {
        match self.bridge.upgrade() {
            Some(bridge) => bridge.dispatch_event(&event),
            None => trace!(event = event.as_label(), "bridge released, callback dropped"),
        }
    }

    // --- Authorization ---

    /// App-level authorization status changed.
    pub fn did_change_authorization(&self, status: AuthorizationStatus) {
        self.forward(Event::AuthorizationChanged(status));
    }

    /// Granted accuracy level changed.
    pub fn did_change_accuracy_authorization(&self, accuracy: AccuracyAuthorization) {
        self.forward(Event::AccuracyAuthorizationChanged(accuracy));
    }

    /// Device-wide location services toggled.
    pub fn did_change_location_services_enabled(&self, enabled: bool) {
        self.forward(Event::LocationServicesEnabledChanged(enabled));
    }

    // --- Location updates ---

    /// New location fixes arrived, in reporting order.
    pub fn did_update_locations(&self, locations: Vec<LocationFix>) {
        self.forward(Event::LocationsReceived(locations));
    }

    /// The platform failed to deliver location data.
    pub fn did_fail_with_error(&self, error: PlatformError) {
        self.forward(Event::LocationError(error));
    }

    // --- Heading updates ---

    /// A new heading fix arrived.
    pub fn did_update_heading(&self, heading: HeadingFix) {
        self.forward(Event::HeadingUpdated(heading));
    }

    // --- Pause/resume ---

    /// The platform paused location delivery.
    pub fn did_pause_location_updates(&self) {
        self.forward(Event::UpdatesPaused);
    }

    /// The platform resumed location delivery.
    pub fn did_resume_location_updates(&self) {
        self.forward(Event::UpdatesResumed);
    }

    // --- Region monitoring ---

    /// Monitoring failed for `region`, or globally when `region` is `None`.
    pub fn monitoring_did_fail(&self, region: Option<Region>, error: PlatformError) {
        self.forward(Event::RegionMonitoringFailed { region, error });
    }

    /// The device entered a monitored region.
    pub fn did_enter_region(&self, region: Region) {
        self.forward(Event::RegionEntered(region));
    }

    /// The device exited a monitored region.
    pub fn did_exit_region(&self, region: Region) {
        self.forward(Event::RegionExited(region));
    }

    /// Monitoring became active for a region.
    pub fn did_start_monitoring(&self, region: Region) {
        self.forward(Event::RegionMonitoringStarted(region));
    }

    // --- Visits ---

    /// The platform recorded a visit.
    pub fn did_visit(&self, visit: Visit) {
        self.forward(Event::VisitRecorded(visit));
    }

    // --- Beacon ranging ---

    /// A ranging pass completed for `constraint`.
    pub fn did_range_beacons(&self, beacons: Vec<Beacon>, constraint: BeaconConstraint) {
        self.forward(Event::BeaconsRanged { beacons, constraint });
    }

    /// Ranging failed for `constraint`.
    pub fn did_fail_ranging(&self, constraint: BeaconConstraint, error: PlatformError) {
        self.forward(Event::BeaconRangingFailed { constraint, error });
    }
}
