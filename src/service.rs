//! # LocationService: wires the platform manager to consumer streams.
//!
//! The service owns the [`EventBridge`] and the [`LocationManager`], hands
//! out the [`LocationDelegate`] for platform wiring, and exposes one entry
//! point per subscription kind. Each entry point:
//!
//! 1. applies the options bundle to the manager (when given),
//! 2. issues the platform start command,
//! 3. builds the matching stop-action ([`Cancellable`]),
//! 4. registers the task and returns its stream.
//!
//! ```text
//! platform manager ──callbacks──► LocationDelegate ──► EventBridge ──► tasks ──► EventStream
//!        ▲                                                                          │
//!        └────────────── start/stop commands (service + Cancellable) ◄──────────────┘
//! ```
//!
//! Ownership: the service owns the bridge; tasks, streams, and the delegate
//! hold only `Weak` back-references. Dropping the service cancels every live
//! task.

use std::sync::Arc;

use tracing::debug;

use crate::events::{EventBridge, LocationDelegate};
use crate::manager::{Cancellable, LocationManager, ManagerOptions};
use crate::tasks::{
    AuthorizationStream, AuthorizationTask, BeaconRangingStream, BeaconRangingTask,
    ContinuousUpdateTask, HeadingStream, HeadingUpdateTask, LocationUpdateStream,
    RegionMonitoringStream, RegionMonitoringTask, SingleLocationStream, SingleUpdateTask,
    VisitMonitoringTask, VisitStream,
};
use crate::types::{BeaconConstraint, Region};

/// Owner of the event bridge and the platform manager capability.
pub struct LocationService {
    bridge: Arc<EventBridge>,
    manager: Arc<dyn LocationManager>,
}

impl LocationService {
    /// Creates a service around a platform manager implementation.
    ///
    /// Wire the returned service's [`delegate`](LocationService::delegate)
    /// into the platform manager so callbacks reach the bridge.
    pub fn new(manager: Arc<dyn LocationManager>) -> Self {
        Self {
            bridge: EventBridge::new(),
            manager,
        }
    }

    /// The callback sink to register with the platform manager.
    #[must_use]
    pub fn delegate(&self) -> LocationDelegate {
        LocationDelegate::new(Arc::downgrade(&self.bridge))
    }

    /// Asks the platform to prompt for (or re-evaluate) authorization.
    pub fn request_authorization(&self) {
        self.manager.request_authorization();
    }

    /// Begins continuous location updates.
    pub fn stream_location_updates(&self, options: Option<&ManagerOptions>) -> LocationUpdateStream {
        self.apply(options);
        self.manager.start_updating_location();
        let manager = Arc::clone(&self.manager);
        ContinuousUpdateTask::stream(
            &self.bridge,
            Cancellable::new(move || manager.stop_updating_location()),
        )
    }

    /// Requests a single location fix.
    ///
    /// The returned stream yields at most one event (fix or failure) and then
    /// ends; the platform operation is stopped as part of that completion.
    pub fn request_location(&self, options: Option<&ManagerOptions>) -> SingleLocationStream {
        self.apply(options);
        self.manager.start_updating_location();
        let manager = Arc::clone(&self.manager);
        SingleUpdateTask::stream(
            &self.bridge,
            Cancellable::new(move || manager.stop_updating_location()),
        )
    }

    /// Begins monitoring a region.
    pub fn monitor_region(&self, region: Region) -> RegionMonitoringStream {
        self.manager.start_monitoring_region(&region);
        let manager = Arc::clone(&self.manager);
        let target = region.clone();
        RegionMonitoringTask::stream(
            &self.bridge,
            region,
            Cancellable::new(move || manager.stop_monitoring_region(&target)),
        )
    }

    /// Begins ranging beacons for a constraint.
    pub fn range_beacons(&self, constraint: BeaconConstraint) -> BeaconRangingStream {
        self.manager.start_ranging_beacons(&constraint);
        let manager = Arc::clone(&self.manager);
        let target = constraint.clone();
        BeaconRangingTask::stream(
            &self.bridge,
            constraint,
            Cancellable::new(move || manager.stop_ranging_beacons(&target)),
        )
    }

    /// Begins heading updates.
    pub fn stream_heading_updates(&self) -> HeadingStream {
        self.manager.start_updating_heading();
        let manager = Arc::clone(&self.manager);
        HeadingUpdateTask::stream(
            &self.bridge,
            Cancellable::new(move || manager.stop_updating_heading()),
        )
    }

    /// Streams authorization changes. No platform operation is started.
    pub fn stream_authorization(&self) -> AuthorizationStream {
        AuthorizationTask::stream(&self.bridge)
    }

    /// Begins visit monitoring.
    pub fn stream_visits(&self) -> VisitStream {
        self.manager.start_monitoring_visits();
        let manager = Arc::clone(&self.manager);
        VisitMonitoringTask::stream(
            &self.bridge,
            Cancellable::new(move || manager.stop_monitoring_visits()),
        )
    }

    /// Cancels every live subscription (their stop-actions included).
    pub fn shutdown(&self) {
        debug!(tasks = self.bridge.len(), "service shutting down");
        self.bridge.cancel_all();
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn active_tasks(&self) -> usize {
        self.bridge.len()
    }

    fn apply(&self, options: Option<&ManagerOptions>) {
        if let Some(options) = options {
            self.manager.apply_options(options);
        }
    }
}

impl Drop for LocationService {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use crate::manager::Accuracy;
    use crate::tasks::{LocationUpdateEvent, RegionMonitoringEvent};
    use crate::types::{Coordinate, LocationFix};

    use super::*;

    /// Records every command issued to the platform manager.
    #[derive(Default)]
    struct MockManager {
        commands: Mutex<Vec<String>>,
    }

    impl MockManager {
        fn record(&self, command: impl Into<String>) {
            self.commands.lock().push(command.into());
        }

        fn commands(&self) -> Vec<String> {
            self.commands.lock().clone()
        }
    }

    impl LocationManager for MockManager {
        fn request_authorization(&self) {
            self.record("request_authorization");
        }

        fn apply_options(&self, options: &ManagerOptions) {
            self.record(format!("apply_options accuracy={:?}", options.accuracy));
        }

        fn start_updating_location(&self) {
            self.record("start_updating_location");
        }

        fn stop_updating_location(&self) {
            self.record("stop_updating_location");
        }

        fn start_monitoring_region(&self, region: &Region) {
            self.record(format!("start_monitoring_region {}", region.identifier));
        }

        fn stop_monitoring_region(&self, region: &Region) {
            self.record(format!("stop_monitoring_region {}", region.identifier));
        }

        fn start_ranging_beacons(&self, constraint: &BeaconConstraint) {
            self.record(format!("start_ranging_beacons {}", constraint.uuid));
        }

        fn stop_ranging_beacons(&self, constraint: &BeaconConstraint) {
            self.record(format!("stop_ranging_beacons {}", constraint.uuid));
        }

        fn start_updating_heading(&self) {
            self.record("start_updating_heading");
        }

        fn stop_updating_heading(&self) {
            self.record("stop_updating_heading");
        }

        fn start_monitoring_visits(&self) {
            self.record("start_monitoring_visits");
        }

        fn stop_monitoring_visits(&self) {
            self.record("stop_monitoring_visits");
        }
    }

    fn service() -> (LocationService, Arc<MockManager>) {
        let manager = Arc::new(MockManager::default());
        (LocationService::new(manager.clone() as _), manager)
    }

    #[tokio::test]
    async fn test_continuous_request_starts_platform_and_cancel_stops_it() {
        let (service, manager) = service();
        let options = ManagerOptions::with_accuracy(Accuracy::Best);
        let stream = service.stream_location_updates(Some(&options));

        assert_eq!(
            manager.commands(),
            vec![
                "apply_options accuracy=Some(Best)".to_string(),
                "start_updating_location".to_string(),
            ]
        );

        stream.cancel();
        assert_eq!(
            manager.commands().last().map(String::as_str),
            Some("stop_updating_location")
        );
        assert_eq!(service.active_tasks(), 0);
    }

    #[tokio::test]
    async fn test_delegate_events_reach_a_service_created_stream() {
        let (service, _manager) = service();
        let delegate = service.delegate();
        let mut stream = service.stream_location_updates(None);

        let fix = LocationFix::at(51.5074, -0.1278);
        delegate.did_update_locations(vec![fix.clone()]);

        assert_eq!(
            stream.next().await,
            Some(LocationUpdateEvent::DidUpdateLocations(vec![fix]))
        );
    }

    #[tokio::test]
    async fn test_region_stop_action_names_the_region() {
        let (service, manager) = service();
        let region = Region::circular("warehouse", Coordinate::new(50.1109, 8.6821), 200.0);
        let mut stream = service.monitor_region(region.clone());

        let delegate = service.delegate();
        delegate.did_enter_region(region.clone());

        assert_eq!(
            stream.next().await,
            Some(RegionMonitoringEvent::DidEnter(region))
        );

        stream.cancel();
        assert!(manager
            .commands()
            .contains(&"stop_monitoring_region warehouse".to_string()));
    }

    #[tokio::test]
    async fn test_shutdown_cancels_every_live_subscription() {
        let (service, manager) = service();
        let mut updates = service.stream_location_updates(None);
        let mut heading = service.stream_heading_updates();
        let mut auth = service.stream_authorization();
        assert_eq!(service.active_tasks(), 3);

        service.shutdown();

        assert_eq!(service.active_tasks(), 0);
        assert_eq!(updates.next().await, None);
        assert_eq!(heading.next().await, None);
        assert_eq!(auth.next().await, None);

        let commands = manager.commands();
        assert!(commands.contains(&"stop_updating_location".to_string()));
        assert!(commands.contains(&"stop_updating_heading".to_string()));
    }

    #[tokio::test]
    async fn test_dropping_the_service_stops_platform_operations() {
        let (service, manager) = service();
        let stream = service.stream_location_updates(None);
        stream.detach();

        drop(service);
        assert!(manager
            .commands()
            .contains(&"stop_updating_location".to_string()));
    }

    #[tokio::test]
    async fn test_independent_streams_cancel_independently() {
        let (service, _manager) = service();
        let delegate = service.delegate();
        let mut first = service.stream_location_updates(None);
        let mut second = service.stream_location_updates(None);

        second.cancel();
        delegate.did_pause_location_updates();

        assert_eq!(first.next().await, Some(LocationUpdateEvent::DidPause));
        assert_eq!(second.next().await, None);
        assert_eq!(service.active_tasks(), 1);
    }
}
