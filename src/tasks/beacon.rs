//! # Beacon ranging task.
//!
//! Filters ranging events down to the task's own constraint (constraint
//! equality is the correlation key the platform reports with). Ranging
//! failures are reported and the subscription stays live.

use std::sync::Arc;

use crate::error::PlatformError;
use crate::events::{Event, EventBridge};
use crate::manager::Cancellable;
use crate::types::{Beacon, BeaconConstraint};

use super::outlet::Outlet;
use super::stream::EventStream;
use super::task::{BridgedTask, TaskId};

/// Stream events of a beacon-ranging subscription.
#[derive(Debug, Clone, PartialEq)]
pub enum BeaconRangingEvent {
    /// One ranging pass; the vector may be empty when nothing was in range.
    DidRange(Vec<Beacon>),
    /// Ranging failed for the constraint; the subscription stays live.
    DidFailRanging(PlatformError),
}

/// Stream handle for beacon ranging.
pub type BeaconRangingStream = EventStream<BeaconRangingEvent>;

pub(crate) struct BeaconRangingTask {
    id: TaskId,
    constraint: BeaconConstraint,
    outlet: Outlet<BeaconRangingEvent>,
}

impl BeaconRangingTask {
    /// Registers a new ranging task and returns its stream.
    pub(crate) fn stream(
        bridge: &Arc<EventBridge>,
        constraint: BeaconConstraint,
        cancellable: Cancellable,
    ) -> BeaconRangingStream {
        let (outlet, rx) = Outlet::open(Some(cancellable));
        let task = Arc::new(Self {
            id: TaskId::next(),
            constraint,
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
}

impl BridgedTask for BeaconRangingTask {
    fn id(&self) -> TaskId {
        self.id
    }

    fn received_event(&self, event: &Event) {
        match event {
            Event::BeaconsRanged { beacons, constraint } if *constraint == self.constraint => {
                self.outlet.push(BeaconRangingEvent::DidRange(beacons.clone()));
            }
            Event::BeaconRangingFailed { constraint, error } if *constraint == self.constraint => {
                self.outlet
                    .push(BeaconRangingEvent::DidFailRanging(error.clone()));
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
    use uuid::Uuid;

    use crate::types::Proximity;

    use super::*;

    fn fleet() -> BeaconConstraint {
        BeaconConstraint::uuid(Uuid::from_u128(0x1234)).with_major(7)
    }

    fn other_fleet() -> BeaconConstraint {
        BeaconConstraint::uuid(Uuid::from_u128(0x5678))
    }

    fn beacon(minor: u16) -> Beacon {
        Beacon {
            uuid: Uuid::from_u128(0x1234),
            major: 7,
            minor,
            proximity: Proximity::Near,
            accuracy: 1.5,
            rssi: -60,
        }
    }

    #[tokio::test]
    async fn test_only_the_tasks_constraint_passes_the_filter() {
        let bridge = EventBridge::new();
        let mut stream = BeaconRangingTask::stream(&bridge, fleet(), Cancellable::noop());

        bridge.dispatch_event(&Event::BeaconsRanged {
            beacons: vec![beacon(1)],
            constraint: other_fleet(),
        });
        bridge.dispatch_event(&Event::BeaconsRanged {
            beacons: vec![beacon(2), beacon(3)],
            constraint: fleet(),
        });

        assert_eq!(
            stream.next().await,
            Some(BeaconRangingEvent::DidRange(vec![beacon(2), beacon(3)]))
        );
    }

    #[tokio::test]
    async fn test_ranging_failure_is_reported_and_stream_stays_live() {
        let bridge = EventBridge::new();
        let mut stream = BeaconRangingTask::stream(&bridge, fleet(), Cancellable::noop());

        let error = PlatformError::RangingFailure {
            reason: "bluetooth off".into(),
        };
        bridge.dispatch_event(&Event::BeaconRangingFailed {
            constraint: fleet(),
            error: error.clone(),
        });

        assert_eq!(
            stream.next().await,
            Some(BeaconRangingEvent::DidFailRanging(error))
        );
        assert_eq!(bridge.len(), 1);

        bridge.dispatch_event(&Event::BeaconsRanged {
            beacons: vec![],
            constraint: fleet(),
        });
        assert_eq!(
            stream.next().await,
            Some(BeaconRangingEvent::DidRange(vec![]))
        );
    }
}
