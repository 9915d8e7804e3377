//! # locbridge
//!
//! **locbridge** adapts a callback-based platform location-services API
//! (delegate-driven authorization changes, location fixes, region/beacon
//! monitoring, heading updates, visits) into an async, cancellable,
//! multi-consumer event-stream model.
//!
//! ## Architecture
//! ```text
//!  platform manager (external)
//!        │ callbacks, on its own thread
//!        ▼
//!  ┌──────────────────┐   one Event per callback, pure mapping
//!  │ LocationDelegate │──────────────────────────────┐
//!  └──────────────────┘                              ▼
//!                                     ┌───────────────────────────────┐
//!                                     │ EventBridge                   │
//!                                     │  - registry (TaskId → task)   │
//!                                     │  - dispatch_event: snapshot,  │
//!                                     │    deliver to every task      │
//!                                     └──────┬───────────┬────────────┘
//!                                            ▼           ▼
//!                                      ┌──────────┐ ┌──────────┐
//!                                      │ task #1  │ │ task #N  │   one per request:
//!                                      │ (filter/ │ │ (filter/ │   continuous, one-shot,
//!                                      │ project) │ │ project) │   region, beacon, heading,
//!                                      └────┬─────┘ └────┬─────┘   authorization, visits
//!                                           ▼            ▼
//!                                     EventStream   EventStream     (unbounded channels,
//!                                      consumer       consumer       cancel ⇒ end of stream
//!                                                                    + platform stop command)
//! ```
//!
//! ## Lifecycle
//! ```text
//! consumer request (e.g. stream_location_updates)
//!   ├─► manager.apply_options / manager.start_*            (platform start)
//!   ├─► task created: TaskId, outlet (open), Cancellable
//!   ├─► bridge.register(task)
//!   └─► EventStream handed to the consumer
//!
//! each platform callback
//!   └─► delegate maps to one Event ─► bridge.dispatch_event
//!         └─► every registered task: received_event
//!               └─► zero or one stream event pushed (never blocks)
//!
//! cancellation (consumer cancel / drop, service shutdown, or per-kind policy)
//!   └─► bridge.deregister(id) ─► task.did_cancelled
//!         ├─► outlet closed  (stream yields None after draining)
//!         └─► Cancellable fired (platform stop command, best-effort)
//! ```
//!
//! ## Features
//! | Area | Description | Key types / traits |
//! |---|---|---|
//! | **Events** | Closed union of platform notifications | [`Event`] |
//! | **Bridging** | Delegate sink + fan-out dispatcher | [`LocationDelegate`], [`EventBridge`] |
//! | **Subscriptions** | Per-kind cancellable streams | [`EventStream`], [`BridgedTask`] |
//! | **Platform seam** | Opaque manager capability + options | [`LocationManager`], [`ManagerOptions`], [`Cancellable`] |
//! | **Service** | Request entry points and shutdown | [`LocationService`] |
//! | **Errors** | Platform errors, passed through verbatim | [`PlatformError`] |
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use locbridge::{
//!     BeaconConstraint, LocationManager, LocationService, ManagerOptions, Region,
//! };
//!
//! struct NoopManager;
//!
//! impl LocationManager for NoopManager {
//!     fn request_authorization(&self) {}
//!     fn apply_options(&self, _options: &ManagerOptions) {}
//!     fn start_updating_location(&self) {}
//!     fn stop_updating_location(&self) {}
//!     fn start_monitoring_region(&self, _region: &Region) {}
//!     fn stop_monitoring_region(&self, _region: &Region) {}
//!     fn start_ranging_beacons(&self, _constraint: &BeaconConstraint) {}
//!     fn stop_ranging_beacons(&self, _constraint: &BeaconConstraint) {}
//!     fn start_updating_heading(&self) {}
//!     fn stop_updating_heading(&self) {}
//!     fn start_monitoring_visits(&self) {}
//!     fn stop_monitoring_visits(&self) {}
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let service = LocationService::new(Arc::new(NoopManager));
//!
//!     // Register this with the real platform manager so callbacks flow in.
//!     let _delegate = service.delegate();
//!
//!     let mut updates = service.stream_location_updates(None);
//!     while let Some(event) = updates.next().await {
//!         if let Some(fix) = event.location() {
//!             println!("fix: {:.4}, {:.4}", fix.coordinate.latitude, fix.coordinate.longitude);
//!         }
//!     }
//!     // Dropping `updates` (or the service) stops the platform operation.
//! }
//! ```

mod error;
mod events;
mod manager;
mod service;
mod tasks;
mod types;

// ---- Public re-exports ----

pub use error::PlatformError;
pub use events::{Event, EventBridge, LocationDelegate};
pub use manager::{Accuracy, ActivityType, Cancellable, LocationManager, ManagerOptions};
pub use service::LocationService;
pub use tasks::{
    AuthorizationEvent, AuthorizationStream, BeaconRangingEvent, BeaconRangingStream, BridgedTask,
    EventStream, HeadingEvent, HeadingStream, LocationUpdateEvent, LocationUpdateStream,
    RegionMonitoringEvent, RegionMonitoringStream, SingleLocationEvent, SingleLocationStream,
    TaskId, VisitEvent, VisitStream,
};
pub use types::{
    AccuracyAuthorization, AuthorizationStatus, Beacon, BeaconConstraint, Coordinate, HeadingFix,
    LocationFix, Proximity, Region, Visit,
};
