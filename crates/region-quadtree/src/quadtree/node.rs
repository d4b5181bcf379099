//! Quadtree node implementation.

use std::fmt;

use crate::{Quad, Region};

/// Handle to a node inside a [`QuadTree`](super::QuadTree).
///
/// Handles are plain indices into the tree's node storage. They stay valid
/// for the life of the tree (until [`reset`](super::QuadTree::reset)) since
/// nodes are never removed individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node of every tree.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in the tree's storage.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in the quadtree.
///
/// A node is either a leaf or has all four children; there is no way to
/// hold a partial set. Its region never changes after creation.
///
/// # Closed flag
///
/// `closed` is set when an inserted rectangle fully covers the node's
/// region and is never cleared. It describes coverage only while the node
/// is a leaf: closing an internal node leaves its descendants untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadNode {
    region: Region,
    closed: bool,
    depth: u32,

    /// Non-owning link back to the parent; `None` for the root.
    parent: Option<NodeId>,

    children: Option<Quad<NodeId>>,
}

impl QuadNode {
    /// Creates an open root leaf.
    pub(crate) fn root(region: Region) -> Self {
        Self {
            region,
            closed: false,
            depth: 0,
            parent: None,
            children: None,
        }
    }

    /// Creates an open leaf below `parent`.
    pub(crate) fn child(region: Region, parent: NodeId, depth: u32) -> Self {
        Self {
            region,
            closed: false,
            depth,
            parent: Some(parent),
            children: None,
        }
    }

    #[inline]
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Returns `true` if an inserted rectangle fully covered this node.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Distance from the root (the root has depth 0).
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> Option<&Quad<NodeId>> {
        self.children.as_ref()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Marks the node closed. Returns `true` if it was open before.
    pub(crate) fn close(&mut self) -> bool {
        !std::mem::replace(&mut self.closed, true)
    }

    /// Turns a leaf into an internal node.
    pub(crate) fn set_children(&mut self, children: Quad<NodeId>) {
        debug_assert!(self.children.is_none(), "quadtree node subdivided twice");
        self.children = Some(children);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_root_is_open_leaf() {
        let node = QuadNode::root(Region::new(0, 8, 0, 8));

        assert!(node.is_leaf());
        assert!(!node.is_closed());
        assert_eq!(node.depth(), 0);
        assert_eq!(node.parent(), None);
        assert!(node.children().is_none());
    }

    #[test]
    fn child_links_to_parent() {
        let node = QuadNode::child(Region::new(0, 4, 4, 8), NodeId::ROOT, 1);

        assert_eq!(node.parent(), Some(NodeId::ROOT));
        assert_eq!(node.depth(), 1);
        assert!(node.is_leaf());
    }

    #[test]
    fn close_is_sticky() {
        let mut node = QuadNode::root(Region::new(0, 8, 0, 8));

        assert!(node.close());
        assert!(node.is_closed());
        assert!(!node.close());
        assert!(node.is_closed());
    }

    #[test]
    fn set_children_makes_internal() {
        let mut node = QuadNode::root(Region::new(0, 8, 0, 8));
        let children = Quad::from_fn(|q| NodeId::new(q.index() + 1));
        node.set_children(children);

        assert!(!node.is_leaf());
        assert_eq!(node.children(), Some(&children));
    }

    #[test]
    fn node_id_display() {
        assert_eq!(NodeId::new(12).to_string(), "#12");
        assert_eq!(NodeId::ROOT.index(), 0);
    }
}
