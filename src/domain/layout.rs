//! Level-based layout for drawing outcome trees.
//!
//! Nodes are grouped by depth and spread horizontally around the vertical
//! axis; every level sits one `vertical_spacing` below its parent level.

use std::collections::BTreeMap;

use tracing::instrument;

use crate::domain::graph::{NodeData, OutcomeGraphView};

/// Parameters for coordinate, size and label computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub horizontal_spacing: f64,
    pub vertical_spacing: f64,
    pub size_scale: f64,
    pub size_offset: f64,
    /// Decimal places of the probability shown in node labels
    pub precision: usize,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            horizontal_spacing: 1.5,
            vertical_spacing: 2.5,
            size_scale: 2000.0,
            size_offset: 500.0,
            precision: 4,
        }
    }
}

/// Position of a node in the tree, which drives its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Root,
    Intermediate,
    Leaf,
}

impl NodeRole {
    pub fn color(self) -> &'static str {
        match self {
            NodeRole::Root => "lightgreen",
            NodeRole::Intermediate => "lightblue",
            NodeRole::Leaf => "lightcoral",
        }
    }
}

/// Drawing information for one node.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub role: NodeRole,
    pub size: f64,
    pub display: String,
}

/// Drawing information for a whole tree, nodes in graph insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TreeLayout {
    pub nodes: Vec<PlacedNode>,
}

impl TreeLayout {
    /// Compute positions, roles, sizes and labels for every node of `graph`.
    #[instrument(level = "debug", skip(graph))]
    pub fn compute<G: OutcomeGraphView + ?Sized>(graph: &G, params: &LayoutParams) -> Self {
        let mut levels: BTreeMap<usize, Vec<&NodeData>> = BTreeMap::new();
        for node in graph.nodes() {
            levels.entry(node.depth).or_default().push(node);
        }

        let mut positions = BTreeMap::new();
        for (depth, nodes) in &levels {
            let width = nodes.len() as f64;
            for (i, node) in nodes.iter().enumerate() {
                let x = (i as f64 - width / 2.0) * params.horizontal_spacing;
                let y = -(*depth as f64) * params.vertical_spacing;
                positions.insert(node.label.as_str(), (x, y));
            }
        }

        let nodes = graph
            .nodes()
            .map(|node| {
                let role = role_of(graph, node);
                let (x, y) = positions.get(node.label.as_str()).copied().unwrap_or_default();
                PlacedNode {
                    label: node.label.clone(),
                    x,
                    y,
                    role,
                    size: node.probability * params.size_scale + params.size_offset,
                    display: display_label(node, params.precision),
                }
            })
            .collect();

        Self { nodes }
    }

    pub fn get(&self, label: &str) -> Option<&PlacedNode> {
        self.nodes.iter().find(|n| n.label == label)
    }
}

fn role_of<G: OutcomeGraphView + ?Sized>(graph: &G, node: &NodeData) -> NodeRole {
    if node.is_root() {
        NodeRole::Root
    } else if graph.out_degree(&node.label) == Some(0) {
        NodeRole::Leaf
    } else {
        NodeRole::Intermediate
    }
}

/// Two-line label: outcome and its probability.
pub fn display_label(node: &NodeData, precision: usize) -> String {
    if node.is_root() {
        format!("{}\nP=1.0", node.label)
    } else {
        format!("{}\nP={:.*}", node.label, precision, node.probability)
    }
}
