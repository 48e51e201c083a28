//! Error types for version intervals and resolvers

use crate::interval::{Version, VersionInterval};
use std::fmt;
use thiserror::Error;

/// One side of an overlap reported by [`VersionError::OverlappingIntervals`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConflictingEntry {
    /// Position of the entry in the sequence passed to `build`
    pub position: usize,
    /// The interval the entry was declared with
    pub interval: VersionInterval,
}

impl fmt::Display for ConflictingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry #{} {}", self.position, self.interval)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// Bounds violate `valid_from >= 0` or `removed_in > valid_from`
    #[error("Invalid version range: valid_from={valid_from}, removed_in={}", display_bound(.removed_in))]
    InvalidRange {
        valid_from: Version,
        removed_in: Option<Version>,
    },

    #[error("Invalid API version: {0} (versions must be non-negative)")]
    InvalidVersion(Version),

    #[error("A versioned route needs at least one binding")]
    EmptyEntries,

    /// Two bindings of the same route claim at least one common version
    #[error("Overlapping version intervals: {first} and {second} both serve version {}", .second.interval.valid_from())]
    OverlappingIntervals {
        first: ConflictingEntry,
        second: ConflictingEntry,
    },
}

fn display_bound(bound: &Option<Version>) -> String {
    match bound {
        Some(v) => v.to_string(),
        None => "none".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, VersionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_message() {
        let err = VersionError::InvalidRange {
            valid_from: 5,
            removed_in: Some(3),
        };
        assert_eq!(
            err.to_string(),
            "Invalid version range: valid_from=5, removed_in=3"
        );

        let err = VersionError::InvalidRange {
            valid_from: -1,
            removed_in: None,
        };
        assert_eq!(
            err.to_string(),
            "Invalid version range: valid_from=-1, removed_in=none"
        );
    }

    #[test]
    fn test_overlap_message_names_both_entries() {
        let first = ConflictingEntry {
            position: 0,
            interval: VersionInterval::new(0, Some(5)).unwrap(),
        };
        let second = ConflictingEntry {
            position: 1,
            interval: VersionInterval::new(3, Some(8)).unwrap(),
        };
        let message = VersionError::OverlappingIntervals { first, second }.to_string();

        assert!(message.contains("entry #0 [0, 5)"), "{}", message);
        assert!(message.contains("entry #1 [3, 8)"), "{}", message);
        assert!(message.ends_with("version 3"), "{}", message);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<VersionError>();
    }
}
