//! # Authorization changes task.
//!
//! Projects the three authorization-related events. No error variant reaches
//! this kind, so it has no failure policy; it ends only on cancellation.

use std::sync::Arc;

use crate::events::{Event, EventBridge};
use crate::types::{AccuracyAuthorization, AuthorizationStatus};

use super::outlet::Outlet;
use super::stream::EventStream;
use super::task::{BridgedTask, TaskId};

/// Stream events of an authorization subscription.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthorizationEvent {
    /// App-level authorization status changed.
    StatusChanged(AuthorizationStatus),
    /// Granted accuracy level changed.
    AccuracyChanged(AccuracyAuthorization),
    /// Device-wide location services toggled.
    ServicesEnabledChanged(bool),
}

/// Stream handle for authorization changes.
pub type AuthorizationStream = EventStream<AuthorizationEvent>;

pub(crate) struct AuthorizationTask {
    id: TaskId,
    outlet: Outlet<AuthorizationEvent>,
}

impl AuthorizationTask {
    /// Registers a new authorization task and returns its stream.
    ///
    /// No platform operation backs this kind, so there is no stop-action.
    pub(crate) fn stream(bridge: &Arc<EventBridge>) -> AuthorizationStream {
        let (outlet, rx) = Outlet::open(None);
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

impl BridgedTask for AuthorizationTask {
    fn id(&self) -> TaskId {
        self.id
    }

    fn received_event(&self, event: &Event) {
        match event {
            Event::AuthorizationChanged(status) => {
                self.outlet.push(AuthorizationEvent::StatusChanged(*status))
            }
            Event::AccuracyAuthorizationChanged(accuracy) => self
                .outlet
                .push(AuthorizationEvent::AccuracyChanged(*accuracy)),
            Event::LocationServicesEnabledChanged(enabled) => self
                .outlet
                .push(AuthorizationEvent::ServicesEnabledChanged(*enabled)),
            _ => {}
        }
    }

    fn did_cancelled(&self) {
        self.outlet.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_all_three_authorization_events_are_projected_in_order() {
        let bridge = EventBridge::new();
        let mut stream = AuthorizationTask::stream(&bridge);

        bridge.dispatch_event(&Event::AuthorizationChanged(
            AuthorizationStatus::AuthorizedAlways,
        ));
        bridge.dispatch_event(&Event::AccuracyAuthorizationChanged(
            AccuracyAuthorization::Reduced,
        ));
        bridge.dispatch_event(&Event::LocationServicesEnabledChanged(false));

        assert_eq!(
            stream.next().await,
            Some(AuthorizationEvent::StatusChanged(
                AuthorizationStatus::AuthorizedAlways
            ))
        );
        assert_eq!(
            stream.next().await,
            Some(AuthorizationEvent::AccuracyChanged(
                AccuracyAuthorization::Reduced
            ))
        );
        assert_eq!(
            stream.next().await,
            Some(AuthorizationEvent::ServicesEnabledChanged(false))
        );
    }
}
