//! # Bridged task trait and identity.
//!
//! A task is one logical subscription: it receives every [`Event`] from the
//! bridge, projects the ones its kind cares about into its own stream-event
//! type, and pushes them to its output channel. The common handle type used
//! by the bridge registry is `Arc<dyn BridgedTask>`.

use std::fmt;

use uuid::Uuid;

use crate::events::Event;

/// Process-unique identity of a bridged task, generated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Generates a fresh identity.
    pub(crate) fn next() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// # One logical subscription, as seen by the bridge.
///
/// Implementations are per-kind (continuous location, region monitoring,
/// beacon ranging, ...) but share the identical lifecycle contract:
///
/// - [`received_event`](BridgedTask::received_event) maps the incoming event
///   to zero or one stream event and pushes it if the output channel is still
///   open; with no channel attached the event is silently dropped. Called on
///   the platform callback thread; must not block.
/// - [`did_cancelled`](BridgedTask::did_cancelled) is invoked by the bridge
///   when the task is deregistered: it closes the output channel (end of
///   stream for the consumer) and fires the stop-action. Idempotent. After
///   it runs, `received_event` pushes nothing observable.
pub trait BridgedTask: Send + Sync + 'static {
    /// Stable identity used as the registry key.
    fn id(&self) -> TaskId;

    /// Delivers one bridge event to this task's filter.
    fn received_event(&self, event: &Event);

    /// Notifies the task it has been cancelled/deregistered.
    fn did_cancelled(&self);
}
