//! Outcome graph model and the capability traits the core depends on.
//!
//! Builders only need [`OutcomeGraphBuilder`]; the analyzer, layout and
//! renderers only need [`OutcomeGraphView`]. The arena-backed
//! [`OutcomeGraph`](crate::domain::OutcomeGraph) implements both.

use std::fmt;

use crate::domain::error::DomainResult;

/// Label of the sentinel root node.
pub const ROOT_LABEL: &str = "Start";

/// Attributes attached to a node when it is added to a graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeAttrs {
    /// Cumulative probability of reaching this node from the root
    pub probability: f64,
    /// Number of edges between the root and this node
    pub depth: usize,
    /// Sum of the pips (dice leaves only)
    pub sum_value: Option<u32>,
}

impl NodeAttrs {
    pub fn new(probability: f64, depth: usize) -> Self {
        Self {
            probability,
            depth,
            sum_value: None,
        }
    }

    pub fn with_sum(mut self, sum_value: u32) -> Self {
        self.sum_value = Some(sum_value);
        self
    }

    /// Attributes of the root node.
    pub fn root() -> Self {
        Self::new(1.0, 0)
    }
}

/// Data payload of a node: its label and attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    pub label: String,
    pub probability: f64,
    pub depth: usize,
    pub sum_value: Option<u32>,
}

impl NodeData {
    pub fn new(label: impl Into<String>, attrs: NodeAttrs) -> Self {
        Self {
            label: label.into(),
            probability: attrs.probability,
            depth: attrs.depth,
            sum_value: attrs.sum_value,
        }
    }

    pub fn is_root(&self) -> bool {
        self.label == ROOT_LABEL
    }
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (P={:.4})", self.label, self.probability)
    }
}

/// Borrowed view of one directed, labeled edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRef<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub label: &'a str,
}

/// Write side of the graph capability: used by the tree builders.
pub trait OutcomeGraphBuilder {
    /// Add a node with the given attributes. Labels are unique.
    fn add_node(&mut self, label: &str, attrs: NodeAttrs) -> DomainResult<()>;

    /// Add a directed edge `from -> to` carrying a human-readable label.
    fn add_edge(&mut self, from: &str, to: &str, label: &str) -> DomainResult<()>;
}

/// Read side of the graph capability: used by analyzer, layout and renderers.
pub trait OutcomeGraphView {
    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// All nodes in insertion order.
    fn nodes(&self) -> Box<dyn Iterator<Item = &NodeData> + '_>;

    /// All edges, grouped by source node in insertion order.
    fn edges(&self) -> Box<dyn Iterator<Item = EdgeRef<'_>> + '_>;

    fn node(&self, label: &str) -> Option<&NodeData>;

    /// Children of a node in insertion order, paired with the edge label.
    fn children(&self, label: &str) -> Vec<(&str, &NodeData)>;

    /// Number of outgoing edges, `None` for an unknown node.
    fn out_degree(&self, label: &str) -> Option<usize>;

    /// Label of the single incoming edge, `None` for the root or unknown nodes.
    fn incoming_label(&self, label: &str) -> Option<&str>;

    fn is_acyclic(&self) -> bool;

    /// Number of edges on the longest path, `None` if the graph has a cycle.
    fn longest_path_len(&self) -> Option<usize>;

    /// Nodes without outgoing edges, in insertion order.
    fn leaves(&self) -> Vec<&NodeData> {
        self.nodes()
            .filter(|n| self.out_degree(&n.label) == Some(0))
            .collect()
    }
}
