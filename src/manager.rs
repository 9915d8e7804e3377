//! # Platform location manager boundary.
//!
//! The underlying platform manager is an external collaborator: the bridge
//! only tells it to start/stop operations, request authorization, and apply
//! an options bundle. [`LocationManager`] is the seam for that capability;
//! implementations wrap the real platform object (or a fake, in tests).
//!
//! ## Contract
//! - All methods are fire-and-forget commands; none may block the caller.
//! - The manager delivers its notifications through the
//!   [`LocationDelegate`](crate::LocationDelegate) it was wired with, on its
//!   own callback thread.
//! - [`ManagerOptions`] is passed through uninterpreted: the bridge never
//!   reads it, the platform manager consumes whichever fields it recognizes.

use std::fmt;

use crate::types::{BeaconConstraint, Region};

/// Desired fix accuracy, as understood by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    /// Highest accuracy plus sensor fusion; navigation use.
    BestForNavigation,
    /// Best accuracy available.
    Best,
    /// Within ten meters.
    NearestTenMeters,
    /// Within a hundred meters.
    HundredMeters,
    /// Within a kilometer.
    Kilometer,
    /// Within three kilometers.
    ThreeKilometers,
    /// Coarse accuracy, honoring a reduced-accuracy grant.
    Reduced,
}

/// Activity hint the platform may use to tune fix delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityType {
    /// No particular activity.
    Other,
    /// Turn-by-turn automotive navigation.
    AutomotiveNavigation,
    /// Walking/running/cycling workouts.
    Fitness,
    /// Other vehicular navigation (boats, trains).
    OtherNavigation,
    /// Airborne activity.
    Airborne,
}

/// Opaque options bundle applied at request-start time.
///
/// Every field is optional; `None` leaves the manager's current setting
/// untouched. The bridge forwards this bundle without reading it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManagerOptions {
    /// Desired fix accuracy.
    pub accuracy: Option<Accuracy>,
    /// Minimum distance in meters between delivered fixes.
    pub distance_filter: Option<f64>,
    /// Activity hint.
    pub activity_type: Option<ActivityType>,
    /// Whether updates may continue in the background.
    pub allows_background_updates: Option<bool>,
    /// Whether the platform may pause delivery automatically.
    pub pauses_updates_automatically: Option<bool>,
}

impl ManagerOptions {
    /// Options bundle requesting a specific accuracy, everything else default.
    pub fn with_accuracy(accuracy: Accuracy) -> Self {
        Self {
            accuracy: Some(accuracy),
            ..Self::default()
        }
    }
}

/// # Opaque capability over the platform location manager.
///
/// One implementation is handed to the
/// [`LocationService`](crate::LocationService) at construction. Start/stop
/// pairs correspond 1:1 to the request kinds the service exposes.
pub trait LocationManager: Send + Sync + 'static {
    /// Asks the platform to prompt for (or re-evaluate) authorization.
    fn request_authorization(&self);

    /// Applies an options bundle (accuracy, distance filter, ...).
    fn apply_options(&self, options: &ManagerOptions);

    /// Begins continuous location delivery.
    fn start_updating_location(&self);
    /// Stops continuous location delivery.
    fn stop_updating_location(&self);

    /// Begins monitoring a region.
    fn start_monitoring_region(&self, region: &Region);
    /// Stops monitoring a region.
    fn stop_monitoring_region(&self, region: &Region);

    /// Begins ranging beacons for a constraint.
    fn start_ranging_beacons(&self, constraint: &BeaconConstraint);
    /// Stops ranging beacons for a constraint.
    fn stop_ranging_beacons(&self, constraint: &BeaconConstraint);

    /// Begins heading delivery.
    fn start_updating_heading(&self);
    /// Stops heading delivery.
    fn stop_updating_heading(&self);

    /// Begins visit monitoring.
    fn start_monitoring_visits(&self);
    /// Stops visit monitoring.
    fn stop_monitoring_visits(&self);
}

/// One-shot stop capability for a running platform operation.
///
/// Built by the service when it issues the matching start command; invoked at
/// most once, when the owning task is cancelled. Invocation is best-effort:
/// the platform's acknowledgment is not waited on.
pub struct Cancellable {
    stop: Box<dyn FnOnce() + Send>,
}

impl Cancellable {
    /// Wraps the stop command for a started operation.
    pub fn new(stop: impl FnOnce() + Send + 'static) -> Self {
        Self {
            stop: Box::new(stop),
        }
    }

    /// A cancellable with no underlying platform operation.
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    /// Issues the stop command, consuming the capability.
    pub fn cancel(self) {
        (self.stop)();
    }
}

impl fmt::Debug for Cancellable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Cancellable")
    }
}
