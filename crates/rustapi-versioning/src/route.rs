//! A route binding paired with the versions it serves

use crate::error::Result;
use crate::interval::{Version, VersionInterval};

/// A binding that is only available within a [`VersionInterval`]
///
/// `B` is whatever the registration layer binds to a path and method,
/// usually a handler. It is carried as an opaque payload and never invoked
/// here.
///
/// # Example
///
/// ```rust
/// use rustapi_versioning::VersionedRoute;
///
/// let legacy = VersionedRoute::of("list_users_v1").with_removed_in(2)?;
/// let current = VersionedRoute::of("list_users_v2").with_valid_from(2)?;
///
/// assert!(legacy.contains(1)?);
/// assert!(current.contains(2)?);
/// # Ok::<(), rustapi_versioning::VersionError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionedRoute<B> {
    route: B,
    interval: VersionInterval,
}

impl<B> VersionedRoute<B> {
    /// Bind `route` to every version, starting from version 0
    pub fn of(route: B) -> Self {
        Self::new(route, VersionInterval::all())
    }

    pub fn new(route: B, interval: VersionInterval) -> Self {
        Self { route, interval }
    }

    /// The bound route
    pub fn route(&self) -> &B {
        &self.route
    }

    pub fn interval(&self) -> VersionInterval {
        self.interval
    }

    pub fn valid_from(&self) -> Version {
        self.interval.valid_from()
    }

    pub fn removed_in(&self) -> Option<Version> {
        self.interval.removed_in()
    }

    /// Same route, valid from `valid_from`
    pub fn with_valid_from(self, valid_from: Version) -> Result<Self> {
        let interval = self.interval.with_valid_from(valid_from)?;
        Ok(Self { interval, ..self })
    }

    /// Same route, removed in `removed_in`
    pub fn with_removed_in(self, removed_in: Version) -> Result<Self> {
        let interval = self.interval.with_removed_in(removed_in)?;
        Ok(Self { interval, ..self })
    }

    pub fn contains(&self, version: Version) -> Result<bool> {
        self.interval.contains(version)
    }

    pub fn into_parts(self) -> (B, VersionInterval) {
        (self.route, self.interval)
    }
}

impl<B> From<(B, VersionInterval)> for VersionedRoute<B> {
    fn from((route, interval): (B, VersionInterval)) -> Self {
        Self::new(route, interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VersionError;

    #[test]
    fn test_of_is_valid_from_zero() {
        let route = VersionedRoute::of("handler");
        assert_eq!(route.valid_from(), 0);
        assert_eq!(route.removed_in(), None);
        assert_eq!(*route.route(), "handler");
    }

    #[test]
    fn test_derivation_keeps_route() {
        let route = VersionedRoute::of("handler")
            .with_valid_from(2)
            .and_then(|r| r.with_removed_in(5))
            .unwrap();

        assert_eq!(*route.route(), "handler");
        assert_eq!(route.interval(), VersionInterval::new(2, Some(5)).unwrap());
        assert!(!route.contains(5).unwrap());
    }

    #[test]
    fn test_derivation_validates() {
        let err = VersionedRoute::of("handler")
            .with_removed_in(4)
            .and_then(|r| r.with_valid_from(4))
            .unwrap_err();
        assert_eq!(
            err,
            VersionError::InvalidRange {
                valid_from: 4,
                removed_in: Some(4)
            }
        );
    }

    #[test]
    fn test_clone_derives_independently() {
        let original = VersionedRoute::of(String::from("handler"));
        let derived = original.clone().with_valid_from(3).unwrap();

        assert_eq!(original.valid_from(), 0);
        assert_eq!(derived.valid_from(), 3);
    }

    #[test]
    fn test_from_tuple_and_into_parts() {
        let interval = VersionInterval::new(1, Some(2)).unwrap();
        let route: VersionedRoute<u8> = (7, interval).into();
        assert_eq!(route.into_parts(), (7, interval));
    }
}
