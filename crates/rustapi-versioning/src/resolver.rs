//! Version resolution for a single logical route
//!
//! A [`VersionResolver`] owns every versioned binding of one route (one path
//! and method) and answers which binding serves a requested API version.
//!
//! # Conflict Detection
//!
//! Intervals are checked at build time. Two bindings that claim the same
//! version make the whole build fail, so a resolver never has to pick
//! between two candidates at request time.
//!
//! # Example
//!
//! ```rust
//! use rustapi_versioning::{VersionInterval, VersionResolver};
//!
//! let resolver = VersionResolver::builder()
//!     .route("get_user_v1", VersionInterval::new(0, Some(2))?)
//!     .route("get_user_v2", VersionInterval::from_version(2)?)
//!     .build()?;
//!
//! assert_eq!(resolver.resolve(1)?, Some(&"get_user_v1"));
//! assert_eq!(resolver.resolve(7)?, Some(&"get_user_v2"));
//! # Ok::<(), rustapi_versioning::VersionError>(())
//! ```

use crate::error::{ConflictingEntry, Result, VersionError};
use crate::interval::{Version, VersionInterval};
use crate::route::VersionedRoute;

/// Immutable set of non-overlapping versioned bindings for one route
///
/// Entries are kept sorted by `valid_from`, which lets [`resolve`] binary
/// search for the only candidate interval.
///
/// [`resolve`]: VersionResolver::resolve
#[derive(Debug, Clone)]
pub struct VersionResolver<B> {
    // Never empty, sorted by valid_from, pairwise disjoint
    entries: Vec<VersionedRoute<B>>,
}

impl<B> VersionResolver<B> {
    /// Start collecting bindings with a [`ResolverBuilder`]
    pub fn builder() -> ResolverBuilder<B> {
        ResolverBuilder::new()
    }

    /// Validate `entries` and build a resolver from them
    ///
    /// Fails with [`VersionError::EmptyEntries`] when there is nothing to
    /// resolve, and with [`VersionError::OverlappingIntervals`] when two
    /// entries claim a common version. Positions in the error refer to the
    /// order of `entries`.
    pub fn build<I, E>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<VersionedRoute<B>>,
    {
        let mut indexed: Vec<(usize, VersionedRoute<B>)> =
            entries.into_iter().map(Into::into).enumerate().collect();

        if indexed.is_empty() {
            tracing::warn!("Rejected version resolver without bindings");
            return Err(VersionError::EmptyEntries);
        }

        // Stable sort; equal lower bounds always overlap and are caught below.
        indexed.sort_by_key(|(_, entry)| entry.valid_from());

        // Sorted by lower bound, disjoint neighbours imply disjoint pairs.
        let conflict = indexed
            .windows(2)
            .find(|pair| pair[0].1.interval().overlaps(&pair[1].1.interval()));

        if let Some(pair) = conflict {
            let first = ConflictingEntry {
                position: pair[0].0,
                interval: pair[0].1.interval(),
            };
            let second = ConflictingEntry {
                position: pair[1].0,
                interval: pair[1].1.interval(),
            };
            tracing::warn!(
                first = %first,
                second = %second,
                "Rejected version resolver with overlapping intervals"
            );
            return Err(VersionError::OverlappingIntervals { first, second });
        }

        let entries: Vec<_> = indexed.into_iter().map(|(_, entry)| entry).collect();
        let resolver = Self { entries };

        tracing::debug!(
            entries = resolver.len(),
            latest = %resolver.latest().interval(),
            "Built version resolver"
        );

        Ok(resolver)
    }

    /// Find the binding serving `version`
    ///
    /// Returns `Ok(None)` when no registered interval covers the version.
    pub fn resolve(&self, version: Version) -> Result<Option<&B>> {
        Ok(self.resolve_entry(version)?.map(VersionedRoute::route))
    }

    /// Like [`resolve`](Self::resolve), but returns the binding together with
    /// its interval
    pub fn resolve_entry(&self, version: Version) -> Result<Option<&VersionedRoute<B>>> {
        if version < 0 {
            return Err(VersionError::InvalidVersion(version));
        }

        // The only candidate is the last entry starting at or before `version`.
        let upper = self
            .entries
            .partition_point(|entry| entry.valid_from() <= version);
        let found = upper
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
            .filter(|entry| entry.interval().contains_unchecked(version));

        tracing::trace!(version, matched = found.is_some(), "Resolved route version");

        Ok(found)
    }

    /// All bindings, ordered by ascending `valid_from`
    pub fn all_bindings(&self) -> impl ExactSizeIterator<Item = &B> + '_ {
        self.entries.iter().map(VersionedRoute::route)
    }

    /// All intervals, ordered by ascending `valid_from`
    pub fn intervals(&self) -> impl ExactSizeIterator<Item = VersionInterval> + '_ {
        self.entries.iter().map(VersionedRoute::interval)
    }

    /// The stored entries, ordered by ascending `valid_from`
    pub fn entries(&self) -> &[VersionedRoute<B>] {
        &self.entries
    }

    /// The entry with the highest `valid_from`
    pub fn latest(&self) -> &VersionedRoute<B> {
        // build never produces an empty resolver
        &self.entries[self.entries.len() - 1]
    }

    /// Number of versioned bindings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a resolver holds at least one binding
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<B> IntoIterator for VersionResolver<B> {
    type Item = VersionedRoute<B>;
    type IntoIter = std::vec::IntoIter<VersionedRoute<B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Collects versioned bindings before validating them into a
/// [`VersionResolver`]
#[derive(Debug, Clone)]
pub struct ResolverBuilder<B> {
    entries: Vec<VersionedRoute<B>>,
}

impl<B> ResolverBuilder<B> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a binding that serves the versions in `interval`
    pub fn route(mut self, binding: B, interval: VersionInterval) -> Self {
        self.entries.push(VersionedRoute::new(binding, interval));
        self
    }

    /// Add an already paired binding
    pub fn versioned(mut self, route: VersionedRoute<B>) -> Self {
        self.entries.push(route);
        self
    }

    /// Validate the collected bindings, see [`VersionResolver::build`]
    pub fn build(self) -> Result<VersionResolver<B>> {
        VersionResolver::build(self.entries)
    }
}

impl<B> Default for ResolverBuilder<B> {
    fn default() -> Self {
        Self::new()
    }
}
