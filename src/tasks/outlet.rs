//! # Outlet: a task's two-phase output channel.
//!
//! Every task kind owns an [`Outlet`] bundling its stream-event sender, its
//! platform stop-action, and the cancelled-token it exposes to consumers.
//!
//! ## Rules
//! - **Two phases**: open (pushes flow to the consumer) and closed (pushes
//!   are silently dropped). Closing is one-way.
//! - **Non-blocking**: the channel is unbounded; a push never blocks the
//!   platform callback thread.
//! - **Finish is idempotent** and does three things exactly once: drops the
//!   sender (end-of-stream for the consumer), fires the stop-action, and
//!   cancels the token.

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::manager::Cancellable;

/// Output side of one task: sender, stop-action, cancelled-token.
pub(crate) struct Outlet<E> {
    sender: Mutex<Option<mpsc::UnboundedSender<E>>>,
    cancellable: Mutex<Option<Cancellable>>,
    token: CancellationToken,
}

impl<E> Outlet<E> {
    /// Creates an open outlet and the matching consumer receiver.
    pub(crate) fn open(cancellable: Option<Cancellable>) -> (Self, mpsc::UnboundedReceiver<E>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let outlet = Self {
            sender: Mutex::new(Some(tx)),
            cancellable: Mutex::new(cancellable),
            token: CancellationToken::new(),
        };
        (outlet, rx)
    }

    /// Pushes one stream event if the outlet is still open.
    ///
    /// A closed outlet (or a receiver that has been dropped) swallows the
    /// event; that is the contract, not an error.
    pub(crate) fn push(&self, event: E) {
        if let Some(tx) = self.sender.lock().as_ref() {
            let _ = tx.send(event);
        }
    }

    /// Closes the outlet: end-of-stream, stop-action, token cancellation.
    pub(crate) fn finish(&self) {
        self.sender.lock().take();
        if let Some(cancellable) = self.cancellable.lock().take() {
            cancellable.cancel();
        }
        self.token.cancel();
    }

    /// Token observed by the consumer handle; cancelled when the outlet closes.
    pub(crate) fn token(&self) -> &CancellationToken {
        &self.token
    }
}
