//! Graphviz DOT export of laid-out outcome trees.

use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::domain::{LayoutParams, OutcomeGraphView, TreeLayout};
use crate::infrastructure::traits::{FileSystem, Renderer};

/// Points per inch, used to turn marker areas into node widths.
const POINTS_PER_INCH: f64 = 72.0;

/// Writes a DOT digraph with fixed node positions (`neato -n` friendly).
pub struct DotRenderer {
    fs: Arc<dyn FileSystem>,
    params: LayoutParams,
}

impl DotRenderer {
    pub fn new(fs: Arc<dyn FileSystem>, params: LayoutParams) -> Self {
        Self { fs, params }
    }

    /// Produce the DOT document without touching the filesystem.
    pub fn to_dot(&self, graph: &dyn OutcomeGraphView, title: &str) -> String {
        let layout = TreeLayout::compute(graph, &self.params);
        let mut out = String::from("digraph probability_tree {\n");
        out.push_str(&format!(
            "  graph [label=\"{}\", labelloc=t, fontsize=18, fontname=\"bold\"];\n",
            escape(title)
        ));
        out.push_str(
            "  node [shape=circle, style=filled, color=black, penwidth=1.5, fontsize=7];\n",
        );
        out.push_str(
            "  edge [color=gray, arrowhead=vee, penwidth=2, fontsize=6, fontcolor=darkblue];\n",
        );

        for node in &layout.nodes {
            let width = node.size.sqrt() / POINTS_PER_INCH;
            out.push_str(&format!(
                "  \"{}\" [label=\"{}\", pos=\"{:.3},{:.3}!\", fillcolor={}, width={:.3}];\n",
                escape(&node.label),
                escape(&node.display),
                node.x,
                node.y,
                node.role.color(),
                width
            ));
        }

        for edge in graph.edges() {
            out.push_str(&format!(
                "  \"{}\" -> \"{}\" [label=\"{}\"];\n",
                escape(edge.from),
                escape(edge.to),
                escape(edge.label)
            ));
        }

        out.push_str("}\n");
        out
    }
}

impl Renderer for DotRenderer {
    fn extension(&self) -> &'static str {
        "dot"
    }

    #[instrument(level = "debug", skip(self, graph))]
    fn render(&self, graph: &dyn OutcomeGraphView, title: &str, path: &Path) -> io::Result<()> {
        let dot = self.to_dot(graph, title);
        self.fs.ensure_parent(path)?;
        self.fs.write(path, &dot)?;
        debug!("wrote {} bytes to {}", dot.len(), path.display());
        Ok(())
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
