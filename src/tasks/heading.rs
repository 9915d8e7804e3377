//! # Heading updates task.
//!
//! Projects heading fixes and location errors; errors do not end the stream.

use std::sync::Arc;

use crate::error::PlatformError;
use crate::events::{Event, EventBridge};
use crate::manager::Cancellable;
use crate::types::HeadingFix;

use super::outlet::Outlet;
use super::stream::EventStream;
use super::task::{BridgedTask, TaskId};

/// Stream events of a heading subscription.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadingEvent {
    /// A new heading fix.
    DidUpdateHeading(HeadingFix),
    /// A platform error; the subscription stays live.
    DidFail(PlatformError),
}

/// Stream handle for heading updates.
pub type HeadingStream = EventStream<HeadingEvent>;

pub(crate) struct HeadingUpdateTask {
    id: TaskId,
    outlet: Outlet<HeadingEvent>,
}

impl HeadingUpdateTask {
    /// Registers a new heading task and returns its stream.
    pub(crate) fn stream(bridge: &Arc<EventBridge>, cancellable: Cancellable) -> HeadingStream {
        let (outlet, rx) = Outlet::open(Some(cancellable));
        let task = Arc::new(Self {
            id: TaskId::next(),
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

impl BridgedTask for HeadingUpdateTask {
    fn id(&self) -> TaskId {
        self.id
    }

    fn received_event(&self, event: &Event) {
        match event {
            Event::HeadingUpdated(heading) => self
                .outlet
                .push(HeadingEvent::DidUpdateHeading(heading.clone())),
            Event::LocationError(error) => {
                self.outlet.push(HeadingEvent::DidFail(error.clone()))
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
    use std::time::SystemTime;

    use super::*;

    #[tokio::test]
    async fn test_heading_fixes_flow_and_locations_are_filtered_out() {
        let bridge = EventBridge::new();
        let mut stream = HeadingUpdateTask::stream(&bridge, Cancellable::noop());

        bridge.dispatch_event(&Event::LocationsReceived(vec![
            crate::types::LocationFix::at(1.0, 1.0),
        ]));

        let heading = HeadingFix {
            magnetic_heading: 92.0,
            true_heading: 90.5,
            heading_accuracy: 2.0,
            timestamp: SystemTime::now(),
        };
        bridge.dispatch_event(&Event::HeadingUpdated(heading.clone()));

        assert_eq!(
            stream.next().await,
            Some(HeadingEvent::DidUpdateHeading(heading))
        );
    }
}
