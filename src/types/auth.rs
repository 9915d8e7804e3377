//! Authorization state reported by the platform.

/// App-level location authorization status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationStatus {
    /// The user has not yet been asked.
    NotDetermined,
    /// Location services are restricted by device policy.
    Restricted,
    /// The user denied access.
    Denied,
    /// Authorized at all times, including in the background.
    AuthorizedAlways,
    /// Authorized only while the app is in use.
    AuthorizedWhenInUse,
}

impl AuthorizationStatus {
    /// True for either of the authorized states.
    #[inline]
    pub fn is_authorized(&self) -> bool {
        matches!(
            self,
            AuthorizationStatus::AuthorizedAlways | AuthorizationStatus::AuthorizedWhenInUse
        )
    }
}

/// Precision level the user granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccuracyAuthorization {
    /// Full-accuracy fixes.
    Full,
    /// Coarse fixes only.
    Reduced,
}
