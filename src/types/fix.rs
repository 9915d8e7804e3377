//! Location and heading fixes.

use std::time::SystemTime;

/// Geographic coordinate (WGS-84 degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude/longitude degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// A single reported location sample.
///
/// Field semantics follow the platform's reporting conventions: negative
/// accuracy values mean "invalid/unknown", as do negative speed and course.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationFix {
    /// Reported coordinate.
    pub coordinate: Coordinate,
    /// Radius of uncertainty around the coordinate, in meters (< 0 = invalid).
    pub horizontal_accuracy: f64,
    /// Uncertainty of the altitude value, in meters (< 0 = invalid).
    pub vertical_accuracy: f64,
    /// Altitude above mean sea level, in meters.
    pub altitude: f64,
    /// Instantaneous ground speed, in m/s (< 0 = invalid).
    pub speed: f64,
    /// Direction of travel in degrees clockwise from true north (< 0 = invalid).
    pub course: f64,
    /// Wall-clock time the fix was determined.
    pub timestamp: SystemTime,
}

impl LocationFix {
    /// Creates a fix at the given coordinate with everything else unknown.
    ///
    /// Accuracy, speed and course are set to `-1.0` (the platform's
    /// "invalid" sentinel); the timestamp is the current wall-clock time.
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            coordinate: Coordinate::new(latitude, longitude),
            horizontal_accuracy: -1.0,
            vertical_accuracy: -1.0,
            altitude: 0.0,
            speed: -1.0,
            course: -1.0,
            timestamp: SystemTime::now(),
        }
    }

    /// True if the horizontal accuracy field holds a usable value.
    #[inline]
    pub fn has_valid_accuracy(&self) -> bool {
        self.horizontal_accuracy >= 0.0
    }
}

/// A single reported heading sample.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingFix {
    /// Heading relative to magnetic north, in degrees (0..360).
    pub magnetic_heading: f64,
    /// Heading relative to true north, in degrees (< 0 = invalid).
    pub true_heading: f64,
    /// Maximum deviation between the reported and actual heading, in degrees
    /// (< 0 = invalid).
    pub heading_accuracy: f64,
    /// Wall-clock time the heading was determined.
    pub timestamp: SystemTime,
}
