//! Split point rules for subdividing a region.
//!
//! The split point decides where the four children of a node meet. The
//! default, [`LegacySplit`], reproduces the layout of existing quadtree
//! output exactly, including its uneven treatment of odd spans.

use nalgebra::Point2;

use crate::Region;

/// Strategy for choosing where a region is divided into quadrants.
pub trait SplitRule {
    /// Returns the point where the four quadrants of `region` meet.
    fn split_point(&self, region: &Region) -> Point2<i32>;
}

/// The split used by existing quadtree layouts.
///
/// - x: `left + (span / 2 + span % 2)`, so odd spans give the west half the
///   larger share.
/// - y: `bottom + (span / 2 - span % 2)`, so odd spans move the boundary one
///   unit below the midpoint.
///
/// Division truncates toward zero. On a span of one unit the y split lands
/// outside the region and produces an inverted south quadrant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegacySplit;

impl SplitRule for LegacySplit {
    fn split_point(&self, region: &Region) -> Point2<i32> {
        let span_x = i64::from(region.right()) - i64::from(region.left());
        let span_y = i64::from(region.top()) - i64::from(region.bottom());

        let x = i64::from(region.left()) + (span_x / 2 + span_x % 2);
        let y = i64::from(region.bottom()) + (span_y / 2 - span_y % 2);

        Point2::new(saturate(x), saturate(y))
    }
}

/// Symmetric split at the floor of the midpoint on both axes.
///
/// Does not reproduce [`LegacySplit`] layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MidpointSplit;

impl SplitRule for MidpointSplit {
    fn split_point(&self, region: &Region) -> Point2<i32> {
        let mid = |lo: i32, hi: i32| saturate((i64::from(lo) + i64::from(hi)).div_euclid(2));
        Point2::new(
            mid(region.left(), region.right()),
            mid(region.bottom(), region.top()),
        )
    }
}

/// Selects one of the built-in split rules, for use in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Split {
    #[default]
    Legacy,
    Midpoint,
}

impl SplitRule for Split {
    fn split_point(&self, region: &Region) -> Point2<i32> {
        match self {
            Self::Legacy => LegacySplit.split_point(region),
            Self::Midpoint => MidpointSplit.split_point(region),
        }
    }
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
