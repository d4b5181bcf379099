use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use quadtree_scene::{Args, LeafPrinter, Scene, Summary};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut scene = match &args.scene {
        Some(path) => Scene::load(path)?,
        None => {
            info!("no scene file given, using the reference scene");
            Scene::reference()
        }
    };
    args.apply(&mut scene.tree);

    let (tree, report) = scene.build()?;
    let summary = Summary::of(&tree);
    info!(
        rects = scene.rects.len(),
        divided = report.divided,
        truncated = report.truncated,
        leaves = summary.leaves,
        closed = summary.closed,
        depth = summary.depth,
        covered = summary.covered,
        "built quadtree"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if !args.quiet {
        let mut printer = LeafPrinter::new(out);
        tree.traverse(&mut printer);
        out = printer.finish().context("failed to write leaves")?;
    }
    writeln!(out, "{summary}")?;
    out.flush()?;

    tree.clear();
    Ok(())
}
