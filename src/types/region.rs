//! Monitored geographic regions.

use super::fix::Coordinate;

/// A circular geographic region monitored for entry/exit.
///
/// Identity for monitoring purposes is the `identifier` string: the platform
/// reports region events by identifier, and region-monitoring streams filter
/// on it. Two regions with the same identifier are the same subscription
/// target even if their geometry differs.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Caller-chosen identifier, unique per monitored region.
    pub identifier: String,
    /// Center of the region.
    pub center: Coordinate,
    /// Radius in meters.
    pub radius: f64,
}

impl Region {
    /// Creates a circular region.
    pub fn circular(identifier: impl Into<String>, center: Coordinate, radius: f64) -> Self {
        Self {
            identifier: identifier.into(),
            center,
            radius,
        }
    }

    /// True if `other` names the same monitored region.
    #[inline]
    pub fn same_target(&self, other: &Region) -> bool {
        self.identifier == other.identifier
    }
}
