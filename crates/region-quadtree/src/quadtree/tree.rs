//! Quadtree container, insertion and traversal.

use std::iter::FusedIterator;
use std::ops::AddAssign;

use tracing::{debug, trace, trace_span};

use crate::{Coverage, Quad, QuadTreeError, Quadrant, Region};

use super::config::QuadTreeConfig;
use super::node::{NodeId, QuadNode};
use super::split::SplitRule;
use super::visitor::LeafVisitor;

/// A region quadtree recording which parts of its area are covered.
///
/// The tree starts as a single open leaf spanning the root region. Each
/// inserted rectangle is classified against the nodes it reaches:
///
/// - nodes it does not overlap are left alone,
/// - nodes it fully covers are marked closed,
/// - nodes it partially covers are subdivided (if still open leaves) and
///   the rectangle is pushed down into all four children.
///
/// Reading the leaves afterwards gives a partition of the root region into
/// closed (covered) and open cells.
///
/// ```
/// use region_quadtree::{QuadTree, Region};
///
/// let mut tree = QuadTree::new(Region::new(0, 16, 0, 16))?;
/// tree.insert(Region::new(0, 8, 0, 8))?;
///
/// let closed: Vec<_> = tree.leaves().filter(|leaf| leaf.closed).collect();
/// assert_eq!(closed.len(), 1);
/// assert_eq!(closed[0].region, Region::new(0, 8, 0, 8));
/// # Ok::<(), region_quadtree::QuadTreeError>(())
/// ```
///
/// # Storage
///
/// Nodes live in a single arena owned by the tree and refer to each other by
/// [`NodeId`]. Children are always stored after their parent, and the parent
/// link is a plain index, so the whole structure is released at once when
/// the tree is dropped or [cleared](QuadTree::clear).
#[derive(Debug, Clone)]
pub struct QuadTree {
    nodes: Vec<QuadNode>,
    config: QuadTreeConfig,
}

/// What a single [`QuadTree::insert`] changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertReport {
    /// Leaves that were subdivided.
    pub divided: usize,
    /// Nodes that went from open to closed.
    pub closed: usize,
    /// Partially covered leaves left whole because of the depth limit.
    pub truncated: usize,
}

impl InsertReport {
    /// Returns `true` if the insertion changed the tree.
    pub fn changed(&self) -> bool {
        self.divided > 0 || self.closed > 0
    }
}

impl AddAssign for InsertReport {
    fn add_assign(&mut self, rhs: Self) {
        self.divided += rhs.divided;
        self.closed += rhs.closed;
        self.truncated += rhs.truncated;
    }
}

/// A leaf yielded by [`QuadTree::leaves`] and [`QuadTree::query_leaves`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leaf {
    pub id: NodeId,
    pub region: Region,
    pub closed: bool,
}

impl QuadTree {
    /// Creates a tree whose root is an open leaf spanning `region`, using
    /// the default [`QuadTreeConfig`].
    ///
    /// Returns [`QuadTreeError::EmptyRegion`] if `region` has no area.
    pub fn new(region: Region) -> Result<Self, QuadTreeError> {
        Self::with_config(region, QuadTreeConfig::default())
    }

    /// Creates a tree with explicit settings.
    pub fn with_config(region: Region, config: QuadTreeConfig) -> Result<Self, QuadTreeError> {
        let region = region.validated()?;

        let mut nodes = Vec::new();
        nodes
            .try_reserve(1)
            .map_err(|_| QuadTreeError::AllocationFailed { requested: 1 })?;
        nodes.push(QuadNode::root(region));

        debug!(%region, max_depth = ?config.max_depth, split = ?config.split, "created quadtree");
        Ok(Self { nodes, config })
    }

    /// The root region.
    #[inline]
    pub fn region(&self) -> &Region {
        self.nodes[NodeId::ROOT.index()].region()
    }

    #[inline]
    pub fn config(&self) -> &QuadTreeConfig {
        &self.config
    }

    #[inline]
    pub fn root(&self) -> &QuadNode {
        &self.nodes[NodeId::ROOT.index()]
    }

    /// Returns the node behind `id`, if it belongs to this tree.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&QuadNode> {
        self.nodes.get(id.index())
    }

    /// Returns the parent of `id`; `None` for the root or an unknown id.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(QuadNode::parent)
    }

    /// Returns the children of `id`; `None` for leaves or an unknown id.
    pub fn children(&self, id: NodeId) -> Option<Quad<NodeId>> {
        self.node(id).and_then(|node| node.children().copied())
    }

    /// Returns the child of `id` in `quadrant`; `None` for leaves or an
    /// unknown id.
    pub fn child(&self, id: NodeId, quadrant: Quadrant) -> Option<NodeId> {
        self.children(id).map(|children| children[quadrant])
    }

    /// Walks from the parent of `id` up to the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// Total number of nodes, internal and leaf.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// Number of leaves whose closed flag is set.
    pub fn closed_leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| node.is_leaf() && node.is_closed())
            .count()
    }

    /// Depth of the deepest node (0 for a lone root).
    pub fn depth(&self) -> u32 {
        self.nodes.iter().map(QuadNode::depth).max().unwrap_or(0)
    }

    /// Inserts a rectangle, closing every node it fully covers and
    /// subdividing the open leaves it partially covers.
    ///
    /// The rectangle is not validated; pass it through
    /// [`Region::try_new`] first if it comes from untrusted input.
    ///
    /// Closing an internal node does not touch its descendants, and a closed
    /// leaf is never subdivided: a later rectangle that only partly overlaps
    /// it leaves it whole and closed, rather than splitting it into four
    /// open leaves and closing only the covered ones.
    ///
    /// On [`QuadTreeError::AllocationFailed`] every node is still a leaf or
    /// has all four children, but the rectangle may have been applied to
    /// part of the tree only.
    pub fn insert(&mut self, rect: Region) -> Result<InsertReport, QuadTreeError> {
        let _span = trace_span!("insert", %rect).entered();

        let mut report = InsertReport::default();
        self.insert_node(NodeId::ROOT, &rect, &mut report)?;

        debug!(
            divided = report.divided,
            closed = report.closed,
            truncated = report.truncated,
            nodes = self.nodes.len(),
            "inserted rectangle"
        );
        Ok(report)
    }

    /// Inserts every rectangle in order, stopping at the first error.
    pub fn insert_all<I>(&mut self, rects: I) -> Result<InsertReport, QuadTreeError>
    where
        I: IntoIterator<Item = Region>,
    {
        let mut total = InsertReport::default();
        for rect in rects {
            total += self.insert(rect)?;
        }
        Ok(total)
    }

    /// Calls `visitor` for every leaf in NW, NE, SW, SE pre-order.
    pub fn traverse<V: LeafVisitor>(&self, visitor: &mut V) {
        for leaf in self.leaves() {
            visitor.visit(&leaf.region, leaf.closed);
        }
    }

    /// Lazily iterates every leaf in NW, NE, SW, SE pre-order.
    ///
    /// Each call starts a fresh walk from the root.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves::new(self, None)
    }

    /// Calls `visitor` for the leaves reachable through nodes that
    /// intersect `area`, in the same order as [`QuadTree::traverse`].
    ///
    /// A subtree is skipped as soon as its region fails
    /// [`Region::intersects`] against `area`.
    pub fn query<V: LeafVisitor>(&self, area: &Region, visitor: &mut V) {
        for leaf in self.query_leaves(area) {
            visitor.visit(&leaf.region, leaf.closed);
        }
    }

    /// Lazy form of [`QuadTree::query`].
    pub fn query_leaves(&self, area: &Region) -> Leaves<'_> {
        Leaves::new(self, Some(*area))
    }

    /// Discards every node and restores a single open root leaf over the
    /// same region, keeping the configuration.
    pub fn reset(&mut self) {
        let region = *self.region();
        self.nodes.truncate(1);
        self.nodes[NodeId::ROOT.index()] = QuadNode::root(region);
        debug!(%region, "reset quadtree");
    }

    /// Tears the tree down, releasing children before their parents.
    ///
    /// Consuming `self` means no node of the tree can be used afterwards;
    /// on an `Option<QuadTree>` use `take()` to make this idempotent.
    pub fn clear(mut self) {
        let released = self.nodes.len();
        // Children are always stored after their parent, so popping from the
        // back releases every subtree before its root.
        while self.nodes.pop().is_some() {}
        debug!(released, "cleared quadtree");
    }

    fn insert_node(
        &mut self,
        id: NodeId,
        rect: &Region,
        report: &mut InsertReport,
    ) -> Result<(), QuadTreeError> {
        let node = &self.nodes[id.index()];
        let coverage = node.region().classify(rect);
        let children = node.children().copied();
        let (closed, depth) = (node.is_closed(), node.depth());

        match coverage {
            Coverage::None => Ok(()),
            Coverage::Full => {
                if self.nodes[id.index()].close() {
                    report.closed += 1;
                    trace!(node = %id, "closed");
                }
                Ok(())
            }
            Coverage::Partial => {
                let children = match children {
                    Some(children) => children,
                    None if closed => return Ok(()),
                    None if !self.config.can_divide(depth) => {
                        report.truncated += 1;
                        trace!(node = %id, depth, "depth limit reached");
                        return Ok(());
                    }
                    None => {
                        let children = self.divide(id)?;
                        report.divided += 1;
                        children
                    }
                };

                for child in children {
                    // A child the rectangle does not touch classifies as `None`.
                    if self.nodes[child.index()].region().intersects(rect) {
                        self.insert_node(child, rect, report)?;
                    }
                }
                Ok(())
            }
        }
    }

    /// Subdivides an open leaf into four open leaves.
    ///
    /// Space for all four children is reserved up front, so on failure the
    /// node is still a leaf.
    fn divide(&mut self, id: NodeId) -> Result<Quad<NodeId>, QuadTreeError> {
        let node = &self.nodes[id.index()];
        debug_assert!(node.is_leaf() && !node.is_closed());

        let region = *node.region();
        let depth = node.depth() + 1;
        let at = self.config.split.split_point(&region);

        self.nodes
            .try_reserve(4)
            .map_err(|_| QuadTreeError::AllocationFailed { requested: 4 })?;

        let base = self.nodes.len();
        self.nodes.extend(
            region
                .split_at(at)
                .into_iter()
                .map(|child| QuadNode::child(child, id, depth)),
        );

        let children = Quad::from_fn(|q| NodeId::new(base + q.index()));
        self.nodes[id.index()].set_children(children);

        trace!(node = %id, %region, x = at.x, y = at.y, "divided");
        Ok(children)
    }
}

/// Lazy pre-order iterator over leaves, created by [`QuadTree::leaves`]
/// and [`QuadTree::query_leaves`].
#[derive(Debug, Clone)]
pub struct Leaves<'a> {
    tree: &'a QuadTree,
    stack: Vec<NodeId>,
    area: Option<Region>,
}

impl<'a> Leaves<'a> {
    fn new(tree: &'a QuadTree, area: Option<Region>) -> Self {
        let mut stack = Vec::new();
        if admits(tree, area.as_ref(), NodeId::ROOT) {
            stack.push(NodeId::ROOT);
        }
        Self { tree, stack, area }
    }
}

fn admits(tree: &QuadTree, area: Option<&Region>, id: NodeId) -> bool {
    area.is_none_or(|area| tree.nodes[id.index()].region().intersects(area))
}

impl Iterator for Leaves<'_> {
    type Item = Leaf;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let area = self.area;

        while let Some(id) = self.stack.pop() {
            let node = &tree.nodes[id.index()];
            match node.children() {
                None => {
                    return Some(Leaf {
                        id,
                        region: *node.region(),
                        closed: node.is_closed(),
                    });
                }
                Some(children) => {
                    // Reversed so NW comes off the stack first.
                    self.stack.extend(
                        children
                            .iter()
                            .rev()
                            .copied()
                            .filter(|&child| admits(tree, area.as_ref(), child)),
                    );
                }
            }
        }
        None
    }
}

impl FusedIterator for Leaves<'_> {}

/// Iterator from a node's parent up to the root, created by
/// [`QuadTree::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    tree: &'a QuadTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

impl FusedIterator for Ancestors<'_> {}
