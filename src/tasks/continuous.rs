//! # Continuous location updates task.
//!
//! Projects bridge events into [`LocationUpdateEvent`]s:
//!
//! ```text
//! Event::UpdatesPaused        ──► DidPause
//! Event::UpdatesResumed       ──► DidResume
//! Event::LocationsReceived(v) ──► DidUpdateLocations(v)
//! Event::LocationError(e)     ──► DidFail(e)
//! anything else               ──► (no emission)
//! ```
//!
//! A `DidFail` does **not** end the stream: fix acquisition errors are often
//! intermittent and the platform may recover. Cancellation is consumer- or
//! service-driven only.

use std::sync::Arc;

use crate::error::PlatformError;
use crate::events::{Event, EventBridge};
use crate::manager::Cancellable;
use crate::types::LocationFix;

use super::outlet::Outlet;
use super::stream::EventStream;
use super::task::{BridgedTask, TaskId};

/// Stream events of a continuous location subscription.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationUpdateEvent {
    /// The platform paused delivery.
    DidPause,
    /// The platform resumed delivery.
    DidResume,
    /// New fixes, in reporting order.
    DidUpdateLocations(Vec<LocationFix>),
    /// A platform error; the subscription stays live.
    DidFail(PlatformError),
}

impl LocationUpdateEvent {
    /// The most recent fix carried by this event, if it is a location event.
    pub fn location(&self) -> Option<&LocationFix> {
        match self {
            LocationUpdateEvent::DidUpdateLocations(fixes) => fixes.last(),
            _ => None,
        }
    }
}

/// Stream handle for continuous location updates.
pub type LocationUpdateStream = EventStream<LocationUpdateEvent>;

pub(crate) struct ContinuousUpdateTask {
    id: TaskId,
    outlet: Outlet<LocationUpdateEvent>,
}

impl ContinuousUpdateTask {
    /// Registers a new continuous-updates task and returns its stream.
    pub(crate) fn stream(
        bridge: &Arc<EventBridge>,
        cancellable: Cancellable,
    ) -> LocationUpdateStream {
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

impl BridgedTask for ContinuousUpdateTask {
    fn id(&self) -> TaskId {
        self.id
    }

    fn received_event(&self, event: &Event) {
        match event {
            Event::UpdatesPaused => self.outlet.push(LocationUpdateEvent::DidPause),
            Event::UpdatesResumed => self.outlet.push(LocationUpdateEvent::DidResume),
            Event::LocationsReceived(fixes) => self
                .outlet
                .push(LocationUpdateEvent::DidUpdateLocations(fixes.clone())),
            Event::LocationError(error) => {
                self.outlet.push(LocationUpdateEvent::DidFail(error.clone()))
            }
            _ => {}
        }
    }

    fn did_cancelled(&self) {
        self.outlet.finish();
    }
}
