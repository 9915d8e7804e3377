//! Beacons and ranging constraints.

use uuid::Uuid;

/// Perceived distance class of a ranged beacon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proximity {
    /// Distance could not be determined.
    Unknown,
    /// Within a few centimeters.
    Immediate,
    /// Within a couple of meters.
    Near,
    /// Detected but further away.
    Far,
}

/// Identity constraint a ranging request matches beacons against.
///
/// A constraint always pins the proximity UUID; major/minor narrow the match
/// when present. Constraint equality is what ties ranging callbacks back to
/// the request that started them, so it derives `Eq`/`Hash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BeaconConstraint {
    /// Proximity UUID shared by the beacon fleet.
    pub uuid: Uuid,
    /// Most-significant group value, if constrained.
    pub major: Option<u16>,
    /// Least-significant group value, if constrained.
    pub minor: Option<u16>,
}

impl BeaconConstraint {
    /// Constraint matching every beacon with the given proximity UUID.
    pub fn uuid(uuid: Uuid) -> Self {
        Self {
            uuid,
            major: None,
            minor: None,
        }
    }

    /// Narrows the constraint to a major group value.
    #[must_use]
    pub fn with_major(mut self, major: u16) -> Self {
        self.major = Some(major);
        self
    }

    /// Narrows the constraint to a minor group value.
    #[must_use]
    pub fn with_minor(mut self, minor: u16) -> Self {
        self.minor = Some(minor);
        self
    }

    /// True if `beacon` satisfies this constraint.
    pub fn matches(&self, beacon: &Beacon) -> bool {
        self.uuid == beacon.uuid
            && self.major.map_or(true, |m| m == beacon.major)
            && self.minor.map_or(true, |m| m == beacon.minor)
    }
}

/// A single ranged beacon observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Beacon {
    /// Proximity UUID of the beacon.
    pub uuid: Uuid,
    /// Most-significant group value.
    pub major: u16,
    /// Least-significant group value.
    pub minor: u16,
    /// Perceived distance class.
    pub proximity: Proximity,
    /// Estimated distance in meters (< 0 = invalid).
    pub accuracy: f64,
    /// Averaged received signal strength, in dBm (0 = unknown).
    pub rssi: i32,
}
