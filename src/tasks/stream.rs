//! # EventStream: the consumer-facing handle.
//!
//! One [`EventStream`] exists per logical request; it is the sole external
//! interface of a task. It yields the task's stream events asynchronously,
//! supports explicit cancellation, and cancels its task when dropped (a
//! consumer that stops listening stops the underlying platform operation,
//! unless it [`detach`](EventStream::detach)es first).

use std::pin::Pin;
use std::sync::Weak;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::events::EventBridge;

use super::task::TaskId;

/// Async, cancellable sequence of per-kind stream events.
///
/// The stream ends (yields `None`) once its task has been cancelled — by
/// [`cancel`](EventStream::cancel), by service shutdown, or by the task's own
/// per-kind completion policy — and all buffered events have been drained.
pub struct EventStream<E> {
    id: TaskId,
    bridge: Weak<EventBridge>,
    rx: mpsc::UnboundedReceiver<E>,
    token: CancellationToken,
    detached: bool,
}

impl<E> EventStream<E> {
    pub(crate) fn new(
        id: TaskId,
        bridge: Weak<EventBridge>,
        rx: mpsc::UnboundedReceiver<E>,
        token: CancellationToken,
    ) -> Self {
        Self {
            id,
            bridge,
            rx,
            token,
            detached: false,
        }
    }

    /// Identity of the underlying task.
    #[must_use]
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Waits for the next stream event; `None` once the stream has ended.
    pub async fn next(&mut self) -> Option<E> {
        self.rx.recv().await
    }

    /// Cancels the underlying task.
    ///
    /// Idempotent. On return the platform stop-action has been issued and no
    /// further events will be pushed; events already buffered remain readable
    /// until the stream yields `None`.
    pub fn cancel(&self) {
        if let Some(bridge) = self.bridge.upgrade() {
            bridge.deregister(self.id);
        }
    }

    /// Token cancelled when the task ends, for `select!`-style composition.
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// True once the underlying task has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Drops the handle without cancelling the task.
    ///
    /// The task keeps running with no channel attached; its events are
    /// silently dropped until it is cancelled through the service.
    pub fn detach(mut self) {
        self.detached = true;
    }
}

impl<E> Stream for EventStream<E> {
    type Item = E;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().rx.poll_recv(cx)
    }
}

impl<E> Drop for EventStream<E> {
    fn drop(&mut self) {
        if !self.detached {
            self.cancel();
        }
    }
}
