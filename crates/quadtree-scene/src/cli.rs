//! Command-line arguments of the `quadtree-scene` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use region_quadtree::Split;

use crate::scene::TreeSettings;

/// Builds a region quadtree from a scene file and prints its leaves.
#[derive(Debug, Parser)]
#[command(name = "quadtree-scene", version, about)]
pub struct Args {
    /// Scene file to load; the built-in reference scene is used if omitted.
    pub scene: Option<PathBuf>,

    /// Maximum subdivision depth, overriding the scene's `[tree]` table.
    #[arg(long, value_name = "DEPTH", conflicts_with = "unbounded")]
    pub max_depth: Option<u32>,

    /// Subdivide without a depth limit.
    #[arg(long)]
    pub unbounded: bool,

    /// Split point rule, overriding the scene's `[tree]` table.
    #[arg(long, value_enum)]
    pub split: Option<SplitArg>,

    /// Print only the summary line, not the leaves.
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SplitArg {
    Legacy,
    Midpoint,
}

impl From<SplitArg> for Split {
    fn from(arg: SplitArg) -> Self {
        match arg {
            SplitArg::Legacy => Split::Legacy,
            SplitArg::Midpoint => Split::Midpoint,
        }
    }
}

impl Args {
    /// Applies the depth and split flags on top of a scene's settings.
    pub fn apply(&self, settings: &mut TreeSettings) {
        if let Some(depth) = self.max_depth {
            settings.max_depth = Some(depth);
            settings.unbounded = false;
        }
        if self.unbounded {
            settings.max_depth = None;
            settings.unbounded = true;
        }
        if let Some(split) = self.split {
            settings.split = split.into();
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_arguments_uses_reference_scene() {
        let args = Args::try_parse_from(["quadtree-scene"]).unwrap();
        assert_eq!(args.scene, None);
        assert_eq!(args.max_depth, None);
        assert!(!args.unbounded);
        assert!(!args.quiet);
    }

    #[test]
    fn parses_scene_and_overrides() {
        let args = Args::try_parse_from([
            "quadtree-scene",
            "scenes/reference.toml",
            "--max-depth",
            "6",
            "--split",
            "midpoint",
            "-q",
        ])
        .unwrap();

        assert_eq!(args.scene, Some(PathBuf::from("scenes/reference.toml")));
        assert_eq!(args.max_depth, Some(6));
        assert_eq!(args.split, Some(SplitArg::Midpoint));
        assert!(args.quiet);
    }

    #[test]
    fn help_is_not_a_scene_path() {
        let err = Args::try_parse_from(["quadtree-scene", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn rejects_extra_arguments() {
        let err = Args::try_parse_from(["quadtree-scene", "a.toml", "b.toml"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn rejects_unknown_flags_and_values() {
        let err = Args::try_parse_from(["quadtree-scene", "--depth", "3"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        let err = Args::try_parse_from(["quadtree-scene", "--split", "golden"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn depth_flags_conflict() {
        let err = Args::try_parse_from(["quadtree-scene", "--max-depth", "3", "--unbounded"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn flags_override_scene_settings() {
        let mut settings = TreeSettings {
            max_depth: Some(4),
            ..TreeSettings::default()
        };

        let args = Args::try_parse_from(["quadtree-scene", "--unbounded"]).unwrap();
        args.apply(&mut settings);
        assert_eq!(settings.to_config().unwrap().max_depth, None);

        let args = Args::try_parse_from(["quadtree-scene", "--max-depth", "2", "--split", "midpoint"])
            .unwrap();
        args.apply(&mut settings);
        let config = settings.to_config().unwrap();
        assert_eq!(config.max_depth, Some(2));
        assert_eq!(config.split, Split::Midpoint);
    }

    #[test]
    fn no_flags_keep_scene_settings() {
        let mut settings = TreeSettings {
            max_depth: Some(4),
            split: Split::Midpoint,
            ..TreeSettings::default()
        };
        let before = settings.clone();

        Args::try_parse_from(["quadtree-scene"]).unwrap().apply(&mut settings);
        assert_eq!(settings, before);
    }
}
