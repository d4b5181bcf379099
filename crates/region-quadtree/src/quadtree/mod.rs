//! Region quadtree for tracking rectangle coverage.
//!
//! This module provides a quadtree that recursively subdivides a root
//! region to record which parts of it are covered by inserted rectangles.
//! The tree enables:
//!
//! - Classifying every cell as fully covered (closed) or not (open)
//! - Lazy pre-order traversal of the resulting leaves
//! - Range queries that skip subtrees outside an area
//!
//! # Example
//!
//! ```
//! use region_quadtree::{CollectingVisitor, QuadTree, QuadTreeConfig, Region};
//!
//! let root = Region::new(200, 400, 200, 400);
//! let mut tree = QuadTree::with_config(root, QuadTreeConfig::unbounded())?;
//! tree.insert(Region::new(270, 300, 280, 300))?;
//!
//! let mut visitor = CollectingVisitor::new();
//! tree.traverse(&mut visitor);
//! assert_eq!(visitor.leaves().len(), tree.leaf_count());
//! # Ok::<(), region_quadtree::QuadTreeError>(())
//! ```
//!
//! # Architecture
//!
//! - [`QuadTree`]: Owns the node arena and implements insertion and traversal
//! - [`QuadNode`]: A region with its closed flag, parent link and children
//! - [`SplitRule`]: Strategy trait for placing the split point
//! - [`LeafVisitor`]: Visitor trait for consuming leaves

mod config;
mod node;
mod split;
mod tree;
mod visitor;

pub use config::{QuadTreeConfig, DEFAULT_MAX_DEPTH};
pub use node::{NodeId, QuadNode};
pub use split::{LegacySplit, MidpointSplit, Split, SplitRule};
pub use tree::{Ancestors, InsertReport, Leaf, Leaves, QuadTree};
pub use visitor::{CollectingVisitor, LeafVisitor};
