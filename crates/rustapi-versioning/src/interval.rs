//! Half-open API version intervals
//!
//! A [`VersionInterval`] describes the versions in which one binding of a
//! route is available: valid from `valid_from` inclusive, up to but not
//! including `removed_in`. Without `removed_in` the interval stays open up
//! to the latest version of the API.
//!
//! ```text
//! [0, 2)      versions 0 and 1
//! [2, latest) versions 2, 3, 4, ...
//! ```

use crate::error::{Result, VersionError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An integer API version
///
/// Signed so that a negative version coming from a caller can be rejected
/// with [`VersionError::InvalidVersion`].
pub type Version = i32;

/// Immutable `[valid_from, removed_in)` range of API versions
///
/// There are no mutating methods; the `with_*` methods return new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IntervalDef")]
pub struct VersionInterval {
    valid_from: Version,
    removed_in: Option<Version>,
}

impl VersionInterval {
    /// Create an interval, validating its bounds
    pub fn new(valid_from: Version, removed_in: Option<Version>) -> Result<Self> {
        let invalid = valid_from < 0 || removed_in.is_some_and(|end| end <= valid_from);
        if invalid {
            return Err(VersionError::InvalidRange {
                valid_from,
                removed_in,
            });
        }
        Ok(Self {
            valid_from,
            removed_in,
        })
    }

    /// Every version: `[0, latest)`
    pub const fn all() -> Self {
        Self {
            valid_from: 0,
            removed_in: None,
        }
    }

    /// Open-ended interval starting at `valid_from`
    pub fn from_version(valid_from: Version) -> Result<Self> {
        Self::new(valid_from, None)
    }

    /// The first version in which the binding is valid
    pub fn valid_from(&self) -> Version {
        self.valid_from
    }

    /// The first version in which the binding is no longer valid
    pub fn removed_in(&self) -> Option<Version> {
        self.removed_in
    }

    pub fn is_open_ended(&self) -> bool {
        self.removed_in.is_none()
    }

    /// Check whether `version` falls inside this interval
    pub fn contains(&self, version: Version) -> Result<bool> {
        if version < 0 {
            return Err(VersionError::InvalidVersion(version));
        }
        Ok(self.contains_unchecked(version))
    }

    pub(crate) fn contains_unchecked(&self, version: Version) -> bool {
        version >= self.valid_from && self.removed_in.map_or(true, |end| version < end)
    }

    /// Same interval, valid from another version
    pub fn with_valid_from(&self, valid_from: Version) -> Result<Self> {
        Self::new(valid_from, self.removed_in)
    }

    /// Same interval, removed in another version
    pub fn with_removed_in(&self, removed_in: Version) -> Result<Self> {
        Self::new(self.valid_from, Some(removed_in))
    }

    /// Check whether both intervals share at least one version
    ///
    /// Abutting intervals such as `[0, 5)` and `[5, 10)` do not overlap.
    pub fn overlaps(&self, other: &VersionInterval) -> bool {
        self.starts_before_end_of(other) && other.starts_before_end_of(self)
    }

    fn starts_before_end_of(&self, other: &VersionInterval) -> bool {
        other.removed_in.map_or(true, |end| self.valid_from < end)
    }
}

impl Default for VersionInterval {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for VersionInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.removed_in {
            Some(end) => write!(f, "[{}, {})", self.valid_from, end),
            None => write!(f, "[{}, latest)", self.valid_from),
        }
    }
}

/// Wire shape used when reading intervals from declarations
#[derive(Deserialize)]
struct IntervalDef {
    #[serde(default)]
    valid_from: Version,
    #[serde(default)]
    removed_in: Option<Version>,
}

impl TryFrom<IntervalDef> for VersionInterval {
    type Error = VersionError;

    fn try_from(def: IntervalDef) -> Result<Self> {
        Self::new(def.valid_from, def.removed_in)
    }
}
