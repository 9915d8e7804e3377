//! # Visit monitoring task.
//!
//! Projects recorded visits and location errors; errors do not end the
//! stream (visit monitoring is a long-lived, platform-managed subscription).

use std::sync::Arc;

use crate::error::PlatformError;
use crate::events::{Event, EventBridge};
use crate::manager::Cancellable;
use crate::types::Visit;

use super::outlet::Outlet;
use super::stream::EventStream;
use super::task::{BridgedTask, TaskId};

/// Stream events of a visit subscription.
#[derive(Debug, Clone, PartialEq)]
pub enum VisitEvent {
    /// The platform recorded a visit.
    DidVisit(Visit),
    /// A platform error; the subscription stays live.
    DidFail(PlatformError),
}

/// Stream handle for visit monitoring.
pub type VisitStream = EventStream<VisitEvent>;

pub(crate) struct VisitMonitoringTask {
    id: TaskId,
    outlet: Outlet<VisitEvent>,
}

impl VisitMonitoringTask {
    /// Registers a new visit-monitoring task and returns its stream.
    pub(crate) fn stream(bridge: &Arc<EventBridge>, cancellable: Cancellable) -> VisitStream {
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

impl BridgedTask for VisitMonitoringTask {
    fn id(&self) -> TaskId {
        self.id
    }

    fn received_event(&self, event: &Event) {
        match event {
            Event::VisitRecorded(visit) => self.outlet.push(VisitEvent::DidVisit(visit.clone())),
            Event::LocationError(error) => self.outlet.push(VisitEvent::DidFail(error.clone())),
            _ => {}
        }
    }

    fn did_cancelled(&self) {
        self.outlet.finish();
    }
}
