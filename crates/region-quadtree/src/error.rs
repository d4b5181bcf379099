//! Quadtree error types.

use thiserror::Error;

use crate::Region;

/// Errors reported by region validation and tree construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuadTreeError {
    /// The region has zero or negative width or height.
    #[error("region {region} has no area")]
    EmptyRegion { region: Region },

    /// Node storage could not grow. The tree is left as it was before the
    /// failing node was created or subdivided.
    #[error("failed to allocate {requested} quadtree node(s)")]
    AllocationFailed { requested: usize },
}
