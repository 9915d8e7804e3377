//! # Per-subscription tasks and their consumer streams.
//!
//! One task exists per logical request. All kinds share the identical
//! lifecycle contract ([`BridgedTask`]): receive every bridge event, project
//! the relevant ones into a kind-specific stream-event type, push to an
//! unbounded output channel, and close the channel (plus fire the platform
//! stop-action) on cancellation.
//!
//! ## Kinds
//! | Kind | Stream events | On platform error |
//! |---|---|---|
//! | continuous location | pause/resume/locations/fail | stays live |
//! | single-shot location | locations/fail | finishes itself (one-shot) |
//! | region monitoring | start/enter/exit/fail (filtered by region) | stays live |
//! | beacon ranging | ranged/fail (filtered by constraint) | stays live |
//! | heading | heading/fail | stays live |
//! | authorization | status/accuracy/services-enabled | n/a |
//! | visits | visit/fail | stays live |

mod authorization;
mod beacon;
mod continuous;
mod heading;
mod outlet;
mod region;
mod single;
mod stream;
mod task;
mod visits;

pub use authorization::{AuthorizationEvent, AuthorizationStream};
pub use beacon::{BeaconRangingEvent, BeaconRangingStream};
pub use continuous::{LocationUpdateEvent, LocationUpdateStream};
pub use heading::{HeadingEvent, HeadingStream};
pub use region::{RegionMonitoringEvent, RegionMonitoringStream};
pub use single::{SingleLocationEvent, SingleLocationStream};
pub use stream::EventStream;
pub use task::{BridgedTask, TaskId};
pub use visits::{VisitEvent, VisitStream};

pub(crate) use authorization::AuthorizationTask;
pub(crate) use beacon::BeaconRangingTask;
pub(crate) use continuous::ContinuousUpdateTask;
pub(crate) use heading::HeadingUpdateTask;
pub(crate) use region::RegionMonitoringTask;
pub(crate) use single::SingleUpdateTask;
pub(crate) use visits::VisitMonitoringTask;
