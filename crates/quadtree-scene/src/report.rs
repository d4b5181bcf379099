//! Text output for the leaves of a tree.

use std::fmt;
use std::io::{self, Write};

use region_quadtree::{LeafVisitor, QuadTree, Region};

/// Visitor that writes one line per leaf:
/// `closed|open left right bottom top`.
///
/// The first write error is kept and returned by [`LeafPrinter::finish`];
/// later leaves are skipped.
#[derive(Debug)]
pub struct LeafPrinter<W: Write> {
    out: W,
    error: Option<io::Error>,
    written: usize,
}

impl<W: Write> LeafPrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            error: None,
            written: 0,
        }
    }

    /// Number of leaves written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Returns the writer, or the first error hit while writing.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }
}

impl<W: Write> LeafVisitor for LeafPrinter<W> {
    fn visit(&mut self, region: &Region, closed: bool) {
        if self.error.is_some() {
            return;
        }

        let state = if closed { "closed" } else { "open" };
        let result = writeln!(
            self.out,
            "{state} {} {} {} {}",
            region.left(),
            region.right(),
            region.bottom(),
            region.top()
        );
        match result {
            Ok(()) => self.written += 1,
            Err(err) => self.error = Some(err),
        }
    }
}

/// Leaf and node counts of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub leaves: usize,
    pub closed: usize,
    pub nodes: usize,
    pub depth: u32,
    /// Summed area of the closed leaves.
    pub covered: u64,
}

impl Summary {
    pub fn of(tree: &QuadTree) -> Self {
        let mut covered = 0;
        tree.traverse(&mut |region: &Region, closed: bool| {
            if closed {
                covered += region.area();
            }
        });

        Self {
            leaves: tree.leaf_count(),
            closed: tree.closed_leaf_count(),
            nodes: tree.node_count(),
            depth: tree.depth(),
            covered,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "leaves: {} (closed: {}, open: {}), nodes: {}, depth: {}, covered: {}",
            self.leaves,
            self.closed,
            self.leaves - self.closed,
            self.nodes,
            self.depth,
            self.covered
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_one_line_per_leaf() {
        let mut tree = QuadTree::new(Region::new(0, 16, 0, 16)).unwrap();
        tree.insert(Region::new(0, 8, 0, 8)).unwrap();

        let mut printer = LeafPrinter::new(Vec::new());
        tree.traverse(&mut printer);
        assert_eq!(printer.written(), 4);

        let text = String::from_utf8(printer.finish().unwrap()).unwrap();
        assert_eq!(
            text,
            "open 0 8 8 16\nopen 8 16 8 16\nclosed 0 8 0 8\nopen 8 16 0 8\n"
        );
    }

    #[derive(Debug)]
    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn keeps_first_write_error() {
        let tree = QuadTree::new(Region::new(0, 16, 0, 16)).unwrap();

        let mut printer = LeafPrinter::new(FailingWriter);
        tree.traverse(&mut printer);

        assert_eq!(printer.written(), 0);
        assert_eq!(printer.finish().unwrap_err().to_string(), "closed pipe");
    }

    #[test]
    fn summary_display() {
        let mut tree = QuadTree::new(Region::new(0, 16, 0, 16)).unwrap();
        tree.insert(Region::new(0, 8, 0, 8)).unwrap();

        let summary = Summary::of(&tree);
        assert_eq!(
            summary,
            Summary {
                leaves: 4,
                closed: 1,
                nodes: 5,
                depth: 1,
                covered: 64
            }
        );
        assert_eq!(
            summary.to_string(),
            "leaves: 4 (closed: 1, open: 3), nodes: 5, depth: 1, covered: 64"
        );
    }
}
