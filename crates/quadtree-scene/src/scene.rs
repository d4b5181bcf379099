//! Scene files: a root region and the rectangles to insert into it.

use std::path::Path;

use anyhow::Context;
use region_quadtree::{InsertReport, QuadTree, QuadTreeConfig, QuadTreeError, Region, Split};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Errors found while validating or building a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid scene file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid root region")]
    InvalidRoot(#[source] QuadTreeError),

    #[error("invalid rectangle at index {index}")]
    InvalidRect {
        index: usize,
        #[source]
        source: QuadTreeError,
    },

    #[error("`max_depth` and `unbounded = true` cannot both be set")]
    ConflictingDepth,

    #[error("failed to build quadtree")]
    Tree(#[from] QuadTreeError),
}

/// A root region plus the rectangles inserted into it, in order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Scene {
    pub root: Region,
    #[serde(default)]
    pub rects: Vec<Region>,
    #[serde(default)]
    pub tree: TreeSettings,
}

/// The `[tree]` table of a scene file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TreeSettings {
    /// Overrides the default depth limit.
    pub max_depth: Option<u32>,
    /// Removes the depth limit.
    pub unbounded: bool,
    pub split: Split,
}

impl TreeSettings {
    /// Converts the settings into a tree configuration.
    pub fn to_config(&self) -> Result<QuadTreeConfig, SceneError> {
        let config = QuadTreeConfig::default().with_split(self.split);
        match (self.unbounded, self.max_depth) {
            (true, Some(_)) => Err(SceneError::ConflictingDepth),
            (true, None) => Ok(QuadTreeConfig {
                max_depth: None,
                ..config
            }),
            (false, Some(depth)) => Ok(config.with_max_depth(depth)),
            (false, None) => Ok(config),
        }
    }
}

impl Scene {
    /// The built-in scene: three rectangles over a 200x200 root.
    pub fn reference() -> Self {
        Self {
            root: Region::new(200, 400, 200, 400),
            rects: vec![
                Region::new(270, 300, 280, 300),
                Region::new(200, 240, 200, 240),
                Region::new(350, 400, 350, 400),
            ],
            tree: TreeSettings::default(),
        }
    }

    /// Parses and validates a scene from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, SceneError> {
        let scene: Scene = toml::from_str(text)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Reads, parses and validates a scene file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scene file {}", path.display()))?;
        let scene = Self::from_toml(&text)
            .with_context(|| format!("failed to load scene file {}", path.display()))?;

        info!(path = %path.display(), rects = scene.rects.len(), "loaded scene");
        Ok(scene)
    }

    /// Checks that the root and every rectangle have a positive extent, and
    /// that the tree settings are consistent.
    pub fn validate(&self) -> Result<(), SceneError> {
        self.root.validated().map_err(SceneError::InvalidRoot)?;
        for (index, rect) in self.rects.iter().enumerate() {
            rect.validated()
                .map_err(|source| SceneError::InvalidRect { index, source })?;
        }
        self.tree.to_config()?;
        Ok(())
    }

    /// Builds a tree over the root and inserts every rectangle in order.
    pub fn build(&self) -> Result<(QuadTree, InsertReport), SceneError> {
        self.validate()?;

        let mut tree = QuadTree::with_config(self.root, self.tree.to_config()?)?;
        let mut total = InsertReport::default();
        for (index, rect) in self.rects.iter().enumerate() {
            let report = tree.insert(*rect)?;
            debug!(index, %rect, closed = report.closed, divided = report.divided, "inserted");
            total += report;
        }
        Ok((tree, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &str = include_str!("../scenes/reference.toml");

    #[test]
    fn reference_file_matches_builtin() {
        let scene = Scene::from_toml(REFERENCE).unwrap();
        assert_eq!(scene, Scene::reference());
    }

    #[test]
    fn builds_reference_scene() {
        let (tree, report) = Scene::reference().build().unwrap();

        assert_eq!(tree.leaf_count(), 508);
        assert_eq!(tree.closed_leaf_count(), 234);
        assert_eq!(report.truncated, 0);
    }

    #[test]
    fn tree_settings() {
        let scene = Scene::from_toml(
            r#"
            root = { left = 0, right = 64, bottom = 0, top = 64 }

            [tree]
            max_depth = 4
            split = "midpoint"
            "#,
        )
        .unwrap();

        assert!(scene.rects.is_empty());
        let config = scene.tree.to_config().unwrap();
        assert_eq!(config.max_depth, Some(4));
        assert_eq!(config.split, Split::Midpoint);
    }

    #[test]
    fn unbounded_setting() {
        let settings = TreeSettings {
            unbounded: true,
            ..TreeSettings::default()
        };
        assert_eq!(settings.to_config().unwrap().max_depth, None);

        let settings = TreeSettings {
            unbounded: true,
            max_depth: Some(3),
            ..TreeSettings::default()
        };
        assert!(matches!(
            settings.to_config(),
            Err(SceneError::ConflictingDepth)
        ));
    }

    #[test]
    fn rejects_empty_rectangle() {
        let err = Scene::from_toml(
            r#"
            root = { left = 0, right = 10, bottom = 0, top = 10 }
            rects = [
                { left = 1, right = 2, bottom = 1, top = 2 },
                { left = 5, right = 5, bottom = 0, top = 3 },
            ]
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, SceneError::InvalidRect { index: 1, .. }));
    }

    #[test]
    fn rejects_empty_root() {
        let err = Scene::from_toml("root = { left = 0, right = 10, bottom = 4, top = 4 }")
            .unwrap_err();
        assert!(matches!(err, SceneError::InvalidRoot(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = Scene::from_toml("root = 3").unwrap_err();
        assert!(matches!(err, SceneError::Parse(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Scene::load("does/not/exist.toml").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
