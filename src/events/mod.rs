//! Platform events: taxonomy, delegate adapter, and fan-out bridge.
//!
//! This module groups the event **data model** and the **delivery path** from
//! the platform location manager to the per-subscription tasks.
//!
//! ## Contents
//! - [`Event`] the closed union of platform notifications
//! - [`LocationDelegate`] the single callback sink (pure 1:1 mapping)
//! - [`EventBridge`] the dispatcher/registry fanning events out to tasks
//!
//! ## Quick reference
//! - **Producer**: the platform manager drives `LocationDelegate` on its own
//!   callback thread.
//! - **Consumers**: every registered [`BridgedTask`](crate::BridgedTask)
//!   gets each event once, via `EventBridge::dispatch_event`.

mod adapter;
mod bridge;
mod event;

pub use adapter::LocationDelegate;
pub use bridge::EventBridge;
pub use event::Event;
