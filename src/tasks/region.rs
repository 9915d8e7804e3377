//! # Region monitoring task.
//!
//! Filters region events down to the task's own region, identified by its
//! identifier string. A monitoring failure the platform could not attribute
//! to any region (`region: None`) passes the filter too — it may concern this
//! subscription.
//!
//! Monitoring failures do not end the stream: the platform may re-establish
//! monitoring, and the consumer decides whether to give up.

use std::sync::Arc;

use crate::error::PlatformError;
use crate::events::{Event, EventBridge};
use crate::manager::Cancellable;
use crate::types::Region;

use super::outlet::Outlet;
use super::stream::EventStream;
use super::task::{BridgedTask, TaskId};

/// Stream events of a region-monitoring subscription.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionMonitoringEvent {
    /// Monitoring became active for the region.
    DidStartMonitoring(Region),
    /// The device entered the region.
    DidEnter(Region),
    /// The device exited the region.
    DidExit(Region),
    /// Monitoring failed; `region` is `None` for unattributed failures.
    MonitoringDidFail {
        /// The affected region, when attributed.
        region: Option<Region>,
        /// The platform-reported error.
        error: PlatformError,
    },
}

/// Stream handle for region monitoring.
pub type RegionMonitoringStream = EventStream<RegionMonitoringEvent>;

pub(crate) struct RegionMonitoringTask {
    id: TaskId,
    region: Region,
    outlet: Outlet<RegionMonitoringEvent>,
}

impl RegionMonitoringTask {
    /// Registers a new region-monitoring task and returns its stream.
    pub(crate) fn stream(
        bridge: &Arc<EventBridge>,
        region: Region,
        cancellable: Cancellable,
    ) -> RegionMonitoringStream {
        let (outlet, rx) = Outlet::open(Some(cancellable));
        let task = Arc::new(Self {
            id: TaskId::next(),
            region,
            outlet,
        });
        let stream = EventStream::new(
            task.id,
            Arc::downgrade(bridge),
            rx,
            task.outlet.token().clone(),
        );
        bridge.register(task);
        stream
    }

    fn is_mine(&self, region: &Region) -> bool {
        self.region.same_target(region)
    }
}

impl BridgedTask for RegionMonitoringTask {
    fn id(&self) -> TaskId {
        self.id
    }

    fn received_event(&self, event: &Event) {
        match event {
            Event::RegionMonitoringStarted(region) if self.is_mine(region) => self
                .outlet
                .push(RegionMonitoringEvent::DidStartMonitoring(region.clone())),
            Event::RegionEntered(region) if self.is_mine(region) => self
                .outlet
                .push(RegionMonitoringEvent::DidEnter(region.clone())),
            Event::RegionExited(region) if self.is_mine(region) => self
                .outlet
                .push(RegionMonitoringEvent::DidExit(region.clone())),
            Event::RegionMonitoringFailed { region, error }
                if region.as_ref().map_or(true, |r| self.is_mine(r)) =>
            {
                self.outlet.push(RegionMonitoringEvent::MonitoringDidFail {
                    region: region.clone(),
                    error: error.clone(),
                });
            }
            _ => {}
        }
    }

    fn did_cancelled(&self) {
        self.outlet.finish();
    }
}

#[cfg(test)]
mod tests {
    use crate::types::Coordinate;

    use super::*;

    fn office() -> Region {
        Region::circular("office", Coordinate::new(47.3769, 8.5417), 100.0)
    }

    fn gym() -> Region {
        Region::circular("gym", Coordinate::new(47.39, 8.51), 50.0)
    }

    #[tokio::test]
    async fn test_only_the_tasks_region_passes_the_filter() {
        let bridge = EventBridge::new();
        let mut stream = RegionMonitoringTask::stream(&bridge, office(), Cancellable::noop());

        bridge.dispatch_event(&Event::RegionEntered(gym()));
        bridge.dispatch_event(&Event::RegionExited(gym()));
        bridge.dispatch_event(&Event::RegionEntered(office()));

        assert_eq!(
            stream.next().await,
            Some(RegionMonitoringEvent::DidEnter(office()))
        );
    }

    #[tokio::test]
    async fn test_start_enter_exit_sequence_is_preserved() {
        let bridge = EventBridge::new();
        let mut stream = RegionMonitoringTask::stream(&bridge, office(), Cancellable::noop());

        bridge.dispatch_event(&Event::RegionMonitoringStarted(office()));
        bridge.dispatch_event(&Event::RegionEntered(office()));
        bridge.dispatch_event(&Event::RegionExited(office()));

        assert_eq!(
            stream.next().await,
            Some(RegionMonitoringEvent::DidStartMonitoring(office()))
        );
        assert_eq!(
            stream.next().await,
            Some(RegionMonitoringEvent::DidEnter(office()))
        );
        assert_eq!(
            stream.next().await,
            Some(RegionMonitoringEvent::DidExit(office()))
        );
    }

    #[tokio::test]
    async fn test_unattributed_failure_passes_and_stream_stays_live() {
        let bridge = EventBridge::new();
        let mut stream = RegionMonitoringTask::stream(&bridge, office(), Cancellable::noop());

        let error = PlatformError::MonitoringFailure {
            reason: "region limit exceeded".into(),
        };
        bridge.dispatch_event(&Event::RegionMonitoringFailed {
            region: None,
            error: error.clone(),
        });

        assert_eq!(
            stream.next().await,
            Some(RegionMonitoringEvent::MonitoringDidFail {
                region: None,
                error
            })
        );
        assert_eq!(bridge.len(), 1, "failure does not end the subscription");
    }

    #[tokio::test]
    async fn test_failure_for_another_region_is_filtered_out() {
        let bridge = EventBridge::new();
        let mut stream = RegionMonitoringTask::stream(&bridge, office(), Cancellable::noop());

        bridge.dispatch_event(&Event::RegionMonitoringFailed {
            region: Some(gym()),
            error: PlatformError::MonitoringFailure {
                reason: "gps outage".into(),
            },
        });
        bridge.dispatch_event(&Event::RegionEntered(office()));

        assert_eq!(
            stream.next().await,
            Some(RegionMonitoringEvent::DidEnter(office()))
        );
    }
}
