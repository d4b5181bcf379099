//! Headless front-end for region quadtrees: loads scenes and prints leaves.

pub mod cli;
pub mod report;
pub mod scene;

pub use cli::Args;
pub use report::{LeafPrinter, Summary};
pub use scene::{Scene, SceneError, TreeSettings};
