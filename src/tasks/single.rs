//! # Single-shot location request task.
//!
//! Same projection as the continuous task for fixes and errors, but the task
//! finishes itself after its **first** emission of either kind: a one-shot
//! request is complete once it has an answer. Pause/resume notifications are
//! not part of a one-shot's vocabulary and are filtered out.

use std::sync::{Arc, Weak};

use crate::error::PlatformError;
use crate::events::{Event, EventBridge};
use crate::manager::Cancellable;
use crate::types::LocationFix;

use super::outlet::Outlet;
use super::stream::EventStream;
use super::task::{BridgedTask, TaskId};

/// Stream events of a single-shot location request.
///
/// At most one of these is ever observed per request, followed by end of
/// stream.
#[derive(Debug, Clone, PartialEq)]
pub enum SingleLocationEvent {
    /// The fixes that answered the request, in reporting order.
    DidUpdateLocations(Vec<LocationFix>),
    /// The request failed; one-shot requests end on their first error.
    DidFail(PlatformError),
}

impl SingleLocationEvent {
    /// The most recent fix carried by this event, if any.
    pub fn location(&self) -> Option<&LocationFix> {
        match self {
            SingleLocationEvent::DidUpdateLocations(fixes) => fixes.last(),
            SingleLocationEvent::DidFail(_) => None,
        }
    }
}

/// Stream handle for a single-shot location request.
pub type SingleLocationStream = EventStream<SingleLocationEvent>;

pub(crate) struct SingleUpdateTask {
    id: TaskId,
    bridge: Weak<EventBridge>,
    outlet: Outlet<SingleLocationEvent>,
}

impl SingleUpdateTask {
    /// Registers a new one-shot task and returns its stream.
    pub(crate) fn stream(
        bridge: &Arc<EventBridge>,
        cancellable: Cancellable,
    ) -> SingleLocationStream {
        let (outlet, rx) = Outlet::open(Some(cancellable));
        let task = Arc::new(Self {
            id: TaskId::next(),
            bridge: Arc::downgrade(bridge),
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

    /// Self-removal after the terminal emission.
    ///
    /// Deregistration runs `did_cancelled`, which closes the outlet and fires
    /// the stop-action; if the bridge is already gone, close directly.
    fn finish_now(&self) {
        match self.bridge.upgrade() {
            Some(bridge) => bridge.deregister(self.id),
            None => self.outlet.finish(),
        }
    }
}

impl BridgedTask for SingleUpdateTask {
    fn id(&self) -> TaskId {
        self.id
    }

    fn received_event(&self, event: &Event) {
        match event {
            Event::LocationsReceived(fixes) => {
                self.outlet
                    .push(SingleLocationEvent::DidUpdateLocations(fixes.clone()));
                self.finish_now();
            }
            Event::LocationError(error) => {
                self.outlet.push(SingleLocationEvent::DidFail(error.clone()));
                self.finish_now();
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
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[tokio::test]
    async fn test_first_fix_answers_and_ends_the_stream() {
        let stops = Arc::new(AtomicUsize::new(0));
        let counter = stops.clone();

        let bridge = EventBridge::new();
        let mut stream = SingleUpdateTask::stream(
            &bridge,
            Cancellable::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        let fix = LocationFix::at(59.3293, 18.0686);
        bridge.dispatch_event(&Event::LocationsReceived(vec![fix.clone()]));

        let event = stream.next().await.expect("the answer");
        assert_eq!(event.location(), Some(&fix));
        assert_eq!(stream.next().await, None, "one-shot ends after the answer");
        assert!(bridge.is_empty(), "task removed itself");
        assert_eq!(stops.load(Ordering::SeqCst), 1, "platform op stopped");
    }

    #[tokio::test]
    async fn test_first_error_ends_the_stream() {
        let bridge = EventBridge::new();
        let mut stream = SingleUpdateTask::stream(&bridge, Cancellable::noop());

        bridge.dispatch_event(&Event::LocationError(PlatformError::Denied));
        bridge.dispatch_event(&Event::LocationsReceived(vec![LocationFix::at(0.0, 0.0)]));

        assert_eq!(
            stream.next().await,
            Some(SingleLocationEvent::DidFail(PlatformError::Denied))
        );
        assert_eq!(stream.next().await, None, "nothing after the terminal error");
        assert!(bridge.is_empty());
    }

    #[tokio::test]
    async fn test_pause_resume_are_not_in_a_one_shots_vocabulary() {
        let bridge = EventBridge::new();
        let mut stream = SingleUpdateTask::stream(&bridge, Cancellable::noop());

        bridge.dispatch_event(&Event::UpdatesPaused);
        bridge.dispatch_event(&Event::UpdatesResumed);
        assert_eq!(bridge.len(), 1, "still waiting for an answer");

        let fix = LocationFix::at(35.6762, 139.6503);
        bridge.dispatch_event(&Event::LocationsReceived(vec![fix.clone()]));
        assert_eq!(
            stream.next().await,
            Some(SingleLocationEvent::DidUpdateLocations(vec![fix]))
        );
    }
}
