//! Tree construction settings.

use super::split::Split;

/// Default cap on subdivision depth.
///
/// Enough to resolve single units on a root spanning 65536 along each
/// axis. Rectangles that never line up with a split boundary can double
/// the number of nodes with every level, so the cap also bounds memory.
pub const DEFAULT_MAX_DEPTH: u32 = 16;

/// Settings that shape how a [`QuadTree`](super::QuadTree) subdivides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct QuadTreeConfig {
    /// Deepest level at which a leaf may still be subdivided (root is 0).
    /// `None` subdivides without limit.
    pub max_depth: Option<u32>,

    /// Rule for placing the split point of a subdivided region.
    pub split: Split,
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            split: Split::Legacy,
        }
    }
}

impl QuadTreeConfig {
    /// Legacy split with no depth limit.
    ///
    /// Some rectangles make an unlimited tree recurse until the stack
    /// overflows, so only use this with input known to terminate.
    pub fn unbounded() -> Self {
        Self {
            max_depth: None,
            ..Self::default()
        }
    }

    /// Sets the deepest level that may be subdivided.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Sets the split rule.
    pub fn with_split(mut self, split: Split) -> Self {
        self.split = split;
        self
    }

    /// Returns `true` if a leaf at `depth` may be subdivided.
    #[inline]
    pub fn can_divide(&self, depth: u32) -> bool {
        self.max_depth.is_none_or(|max| depth < max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_legacy_and_bounded() {
        let config = QuadTreeConfig::default();
        assert_eq!(config.max_depth, Some(DEFAULT_MAX_DEPTH));
        assert_eq!(config.split, Split::Legacy);
    }

    #[test]
    fn depth_limit() {
        let config = QuadTreeConfig::default().with_max_depth(2);
        assert!(config.can_divide(0));
        assert!(config.can_divide(1));
        assert!(!config.can_divide(2));

        let config = QuadTreeConfig::unbounded();
        assert!(config.can_divide(u32::MAX));
    }

    #[test]
    fn builder_sets_split() {
        let config = QuadTreeConfig::unbounded().with_split(Split::Midpoint);
        assert_eq!(config.split, Split::Midpoint);
        assert_eq!(config.max_depth, None);
    }
}
