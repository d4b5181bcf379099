//! Axis-aligned integer regions and the relations between them.

use std::fmt;

use nalgebra::{Point2, Vector2};

use crate::{Quad, QuadTreeError};

/// How much of a node's region an inserted rectangle covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coverage {
    /// The regions do not overlap (sharing an edge does not count)
    None,
    /// The node's region lies entirely inside the rectangle
    Full,
    /// The regions overlap without full containment
    Partial,
}

/// An axis-aligned rectangle with integer bounds.
///
/// `left`/`right` bound the x axis and `bottom`/`top` bound the y axis, with
/// y increasing upwards. Regions handed to a [`QuadTree`](crate::QuadTree)
/// must have `left < right` and `bottom < top`; use [`Region::try_new`] to
/// check that. Regions produced by subdivision of odd spans can be
/// degenerate and are kept as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    left: i32,
    right: i32,
    bottom: i32,
    top: i32,
}

impl Region {
    /// Creates a region without checking its extent.
    pub const fn new(left: i32, right: i32, bottom: i32, top: i32) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Creates a region, rejecting zero or negative width and height.
    pub fn try_new(left: i32, right: i32, bottom: i32, top: i32) -> Result<Self, QuadTreeError> {
        Self::new(left, right, bottom, top).validated()
    }

    /// Creates a region from its bottom-left and top-right corners.
    pub fn from_corners(min: Point2<i32>, max: Point2<i32>) -> Self {
        Self::new(min.x, max.x, min.y, max.y)
    }

    /// Returns `self` if it has a positive width and height.
    pub fn validated(self) -> Result<Self, QuadTreeError> {
        if self.is_empty() {
            Err(QuadTreeError::EmptyRegion { region: self })
        } else {
            Ok(self)
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.left
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.right
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.top
    }

    /// Bottom-left corner.
    #[inline]
    pub fn min(&self) -> Point2<i32> {
        Point2::new(self.left, self.bottom)
    }

    /// Top-right corner.
    #[inline]
    pub fn max(&self) -> Point2<i32> {
        Point2::new(self.right, self.top)
    }

    /// Extent along both axes. Negative components mean an inverted region.
    pub fn size(&self) -> Vector2<i64> {
        Vector2::new(self.width(), self.height())
    }

    /// `right - left`, widened so that any pair of `i32` bounds fits.
    #[inline]
    pub fn width(&self) -> i64 {
        i64::from(self.right) - i64::from(self.left)
    }

    /// `top - bottom`, widened like [`Region::width`].
    #[inline]
    pub fn height(&self) -> i64 {
        i64::from(self.top) - i64::from(self.bottom)
    }

    /// Area of the region, zero for degenerate regions.
    pub fn area(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        self.width().unsigned_abs() * self.height().unsigned_abs()
    }

    /// Returns `true` if the region has no positive width or height.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.bottom >= self.top
    }

    /// Tests whether two regions overlap, counting shared edges and corners.
    ///
    /// This uses closed bounds, so it is looser than [`Region::classify`]:
    /// regions that only touch intersect here but classify as
    /// [`Coverage::None`]. A region that does not intersect another always
    /// classifies as [`Coverage::None`] against it.
    pub fn intersects(&self, other: &Region) -> bool {
        !(other.left > self.right
            || other.right < self.left
            || other.top < self.bottom
            || other.bottom > self.top)
    }

    /// Classifies how much of `self` is covered by `object`.
    ///
    /// Overlap uses open bounds (touching edges are [`Coverage::None`]);
    /// containment uses closed bounds.
    pub fn classify(&self, object: &Region) -> Coverage {
        if self.left >= object.right
            || self.right <= object.left
            || self.top <= object.bottom
            || self.bottom >= object.top
        {
            return Coverage::None;
        }

        if self.left >= object.left
            && self.right <= object.right
            && self.bottom >= object.bottom
            && self.top <= object.top
        {
            Coverage::Full
        } else {
            Coverage::Partial
        }
    }

    /// Splits the region into four quadrants meeting at `at`.
    ///
    /// The split point is not clamped to the region, so a point on or past
    /// an edge yields degenerate quadrants.
    pub fn split_at(&self, at: Point2<i32>) -> Quad<Region> {
        Quad {
            nw: Region::new(self.left, at.x, at.y, self.top),
            ne: Region::new(at.x, self.right, at.y, self.top),
            sw: Region::new(self.left, at.x, self.bottom, at.y),
            se: Region::new(at.x, self.right, self.bottom, at.y),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.right, self.bottom, self.top
        )
    }
}
