//! Route-level API versioning for RustAPI
//!
//! A logical route (one path and method) may be served by different bindings
//! over the lifetime of an API. Each binding is valid within a half-open range
//! of integer API versions, `[valid_from, removed_in)`. This crate provides:
//!
//! - [`VersionInterval`]: the immutable version range value
//! - [`VersionedRoute`]: a binding paired with its range
//! - [`VersionResolver`]: the validated set of bindings for one route, which
//!   picks the single binding serving a requested version
//!
//! Extracting the version from a request and grouping bindings by path are
//! left to the caller.
//!
//! # Example
//!
//! ```rust
//! use rustapi_versioning::prelude::*;
//!
//! let resolver = VersionResolver::build([
//!     VersionedRoute::of("users_v1").with_removed_in(3)?,
//!     VersionedRoute::of("users_v3").with_valid_from(3)?,
//! ])?;
//!
//! assert_eq!(resolver.resolve(2)?, Some(&"users_v1"));
//! assert_eq!(resolver.resolve(3)?, Some(&"users_v3"));
//! # Ok::<(), VersionError>(())
//! ```

pub mod error;
mod interval;
mod resolver;
mod route;

pub use error::{ConflictingEntry, Result, VersionError};
pub use interval::{Version, VersionInterval};
pub use resolver::{ResolverBuilder, VersionResolver};
pub use route::VersionedRoute;

/// Commonly used types
pub mod prelude {
    pub use crate::error::VersionError;
    pub use crate::interval::{Version, VersionInterval};
    pub use crate::resolver::{ResolverBuilder, VersionResolver};
    pub use crate::route::VersionedRoute;
}
