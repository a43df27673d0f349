//! Console rendering of outcome trees via termtree.

use termtree::Tree;
use tracing::instrument;

use crate::domain::{NodeData, OutcomeGraph, OutcomeGraphView};

pub trait TreeNodeConvert {
    fn to_tree_string(&self, precision: usize) -> Tree<String>;
}

impl TreeNodeConvert for OutcomeGraph {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self, precision: usize) -> Tree<String> {
        let Some(root) = self.root() else {
            return Tree::new("Empty tree".to_string());
        };

        fn build_tree(
            graph: &OutcomeGraph,
            node: &NodeData,
            parent_tree: &mut Tree<String>,
            precision: usize,
        ) {
            for (edge, child) in graph.children(&node.label) {
                let mut child_tree = Tree::new(format!(
                    "{}: {} (P={:.*})",
                    edge, child.label, precision, child.probability
                ));
                build_tree(graph, child, &mut child_tree, precision);
                parent_tree.push(child_tree);
            }
        }

        let mut tree = Tree::new(format!(
            "{} (P={:.*})",
            root.label, precision, root.probability
        ));
        build_tree(self, root, &mut tree, precision);
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CoinTreeBuilder, TreeBuilder};

    #[test]
    fn given_one_flip_when_rendering_then_lists_both_sides() {
        let graph = CoinTreeBuilder::new(1).unwrap().build().unwrap();

        let text = graph.to_tree_string(2).to_string();

        assert!(text.starts_with("Start (P=1.00)"));
        assert!(text.contains("Heads (0.5): H (P=0.50)"));
        assert!(text.contains("Tails (0.5): T (P=0.50)"));
    }

    #[test]
    fn given_empty_graph_when_rendering_then_placeholder() {
        let graph = OutcomeGraph::new();
        assert_eq!(graph.to_tree_string(4).to_string().trim_end(), "Empty tree");
    }
}
