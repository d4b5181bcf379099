//! Region quadtree classifying an area into covered and uncovered cells.

mod error;
mod quad;
pub mod quadtree;
mod region;

pub use error::QuadTreeError;
pub use quad::{Quad, Quadrant};
pub use quadtree::{
    Ancestors, CollectingVisitor, InsertReport, Leaf, LeafVisitor, Leaves,
    LegacySplit, MidpointSplit, NodeId, QuadNode, QuadTree, QuadTreeConfig, Split, SplitRule,
    DEFAULT_MAX_DEPTH,
};
pub use region::{Coverage, Region};
