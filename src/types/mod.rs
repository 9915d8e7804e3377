//! # Payload value types carried by events.
//!
//! Plain, immutable value types mirroring what the platform location manager
//! reports: location and heading fixes, circular regions, visits, beacons and
//! their ranging constraints, and the authorization enums.
//!
//! None of these types carry behavior beyond small accessors; the bridge
//! treats them as opaque payloads and never interprets them.

mod auth;
mod beacon;
mod fix;
mod region;
mod visit;

pub use auth::{AccuracyAuthorization, AuthorizationStatus};
pub use beacon::{Beacon, BeaconConstraint, Proximity};
pub use fix::{Coordinate, HeadingFix, LocationFix};
pub use region::Region;
pub use visit::Visit;
