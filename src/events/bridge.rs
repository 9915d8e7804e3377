//! # EventBridge: fan-out dispatcher and cancellation registry.
//!
//! [`EventBridge`] is the hub between the platform-facing delegate and the
//! per-subscription tasks:
//!
//! ```text
//! Platform callback thread:                 Consumers (async):
//!   LocationDelegate
//!        │ dispatch_event(&Event)
//!        ▼
//!   EventBridge ── snapshot registry ──► task.received_event(&Event)
//!        │                                   │ filter/project
//!   register / deregister                    ▼
//!   (TaskId → Arc<dyn BridgedTask>)      outlet.push(StreamEvent) ──► EventStream
//! ```
//!
//! ## Rules
//! - **Non-blocking dispatch**: delivery pushes into unbounded channels; the
//!   platform callback thread never waits on a consumer.
//! - **Snapshot iteration**: `dispatch_event` clones the registered task list
//!   under the lock, then delivers outside it. A task registered during the
//!   current dispatch does not receive that event; a task may deregister
//!   itself (or any other) from inside `received_event` without disturbing
//!   delivery to the rest.
//! - **Idempotent mutation**: `register` with an already-known identity and
//!   `deregister` of an unknown identity are no-ops.
//! - **Cancellation notification**: a deregistered task is told via
//!   `did_cancelled` so it can close its stream and fire its stop-action;
//!   that happens before `deregister` returns, so nothing is observable on
//!   the task's stream afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::tasks::{BridgedTask, TaskId};

use super::event::Event;

/// Fan-out dispatcher owning the registry of live tasks.
///
/// One bridge exists per location-service instance. The service owns the
/// bridge; tasks and the delegate hold only `Weak` references back to it.
pub struct EventBridge {
    tasks: Mutex<HashMap<TaskId, Arc<dyn BridgedTask>>>,
}

impl EventBridge {
    /// Creates an empty bridge.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            tasks: Mutex::new(HashMap::new()),
        })
    }

    /// Registers a task for event delivery.
    ///
    /// Idempotent: registering an identity that is already present leaves the
    /// existing entry untouched.
    pub fn register(&self, task: Arc<dyn BridgedTask>) {
        let id = task.id();
        let mut tasks = self.tasks.lock();
        if tasks.contains_key(&id) {
            return;
        }
        tasks.insert(id, task);
        debug!(task = %id, live = tasks.len(), "task registered");
    }

    /// Removes a task and notifies it of cancellation.
    ///
    /// Idempotent: deregistering an unknown identity is a no-op. When an
    /// entry is removed, its `did_cancelled` runs before this returns, which
    /// closes the task's stream and invokes its platform stop-action.
    pub fn deregister(&self, id: TaskId) {
        let removed = self.tasks.lock().remove(&id);
        if let Some(task) = removed {
            debug!(task = %id, "task deregistered");
            task.did_cancelled();
        }
    }

    /// Delivers one event to every currently-registered task.
    ///
    /// The registry is snapshotted at dispatch start; delivery happens with
    /// the lock released, so tasks may mutate the registry mid-dispatch.
    pub fn dispatch_event(&self, event: &Event) {
        let snapshot: Vec<Arc<dyn BridgedTask>> = self.tasks.lock().values().cloned().collect();
        trace!(event = event.as_label(), tasks = snapshot.len(), "dispatching");
        for task in snapshot {
            task.received_event(event);
        }
    }

    /// Cancels every live task (service shutdown path).
    pub fn cancel_all(&self) {
        let drained: Vec<Arc<dyn BridgedTask>> = {
            let mut tasks = self.tasks.lock();
            tasks.drain().map(|(_, t)| t).collect()
        };
        if !drained.is_empty() {
            debug!(count = drained.len(), "cancelling all tasks");
        }
        for task in drained {
            task.did_cancelled();
        }
    }

    /// Number of live tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.lock().len()
    }

    /// True if no tasks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.lock().is_empty()
    }
}
