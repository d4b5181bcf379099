//! Leaf visitors.
//!
//! [`QuadTree::traverse`](crate::QuadTree::traverse) and
//! [`QuadTree::query`](crate::QuadTree::query) hand each leaf to a
//! [`LeafVisitor`] as `(region, closed)`, in NW, NE, SW, SE pre-order.
//! Any `FnMut(&Region, bool)` closure is a visitor.

use crate::Region;

/// Receives the leaves of a traversal.
pub trait LeafVisitor {
    /// Called once per leaf with its region and closed flag.
    fn visit(&mut self, region: &Region, closed: bool);
}

impl<F> LeafVisitor for F
where
    F: FnMut(&Region, bool),
{
    #[inline]
    fn visit(&mut self, region: &Region, closed: bool) {
        self(region, closed);
    }
}

/// Records every leaf it is given, in visiting order.
#[derive(Debug, Default)]
pub struct CollectingVisitor {
    collected: Vec<(Region, bool)>,
}

impl CollectingVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_leaves(self) -> Vec<(Region, bool)> {
        self.collected
    }

    pub fn leaves(&self) -> &[(Region, bool)] {
        &self.collected
    }

    /// Regions of the recorded closed leaves.
    pub fn closed_regions(&self) -> impl Iterator<Item = &Region> {
        self.collected
            .iter()
            .filter_map(|(region, closed)| closed.then_some(region))
    }
}

impl LeafVisitor for CollectingVisitor {
    fn visit(&mut self, region: &Region, closed: bool) {
        self.collected.push((*region, closed));
    }
}
