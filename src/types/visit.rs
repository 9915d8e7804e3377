//! Recorded visits.

use std::time::SystemTime;

use super::fix::Coordinate;

/// A place the device arrived at and (possibly) departed from.
///
/// `departure` is `None` while the platform considers the visit ongoing.
#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    /// Approximate center of the visited place.
    pub coordinate: Coordinate,
    /// Radius of uncertainty around the coordinate, in meters.
    pub horizontal_accuracy: f64,
    /// Arrival time.
    pub arrival: SystemTime,
    /// Departure time, once the visit has ended.
    pub departure: Option<SystemTime>,
}
