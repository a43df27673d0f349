//! Aggregate statistics over a finished outcome tree.

use std::collections::BTreeMap;
use std::fmt;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::domain::builder::CoinSide;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::graph::{NodeData, OutcomeGraphView};

/// Discriminates the experiment a tree was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeKind {
    Coin,
    Dice,
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeKind::Coin => write!(f, "coin"),
            TreeKind::Dice => write!(f, "dice"),
        }
    }
}

/// Number of leaves sharing a value and their share of all leaves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frequency {
    pub count: usize,
    pub probability: f64,
}

impl Frequency {
    fn of(count: usize, total: usize) -> Self {
        let probability = if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        };
        Self { count, probability }
    }
}

/// Summary statistics of an outcome tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeReport {
    pub kind: TreeKind,
    pub node_count: usize,
    pub edge_count: usize,
    pub leaf_count: usize,
    /// Longest root-to-leaf path in edges
    pub height: usize,
    pub acyclic: bool,
    /// Leaf sum distribution in ascending sum order (dice trees only)
    pub sum_distribution: Option<BTreeMap<u32, Frequency>>,
}

/// Computes [`TreeReport`]s and outcome queries over any graph view.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeAnalyzer;

impl TreeAnalyzer {
    pub fn new() -> Self {
        Self
    }

    #[instrument(level = "debug", skip(self, graph))]
    pub fn analyze<G: OutcomeGraphView + ?Sized>(
        &self,
        graph: &G,
        kind: TreeKind,
    ) -> DomainResult<TreeReport> {
        let leaves = graph.leaves();
        // The graph is a tree by construction, so the deepest node bounds the longest path.
        let height = graph.nodes().map(|n| n.depth).max().unwrap_or(0);

        let sum_distribution = match kind {
            TreeKind::Coin => None,
            TreeKind::Dice => Some(sum_distribution(&leaves)?),
        };

        let report = TreeReport {
            kind,
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            leaf_count: leaves.len(),
            height,
            acyclic: graph.is_acyclic(),
            sum_distribution,
        };
        debug!(
            "analyzed {} tree: {} nodes, {} leaves",
            kind, report.node_count, report.leaf_count
        );
        Ok(report)
    }

    /// Labels of all complete outcomes, in construction order.
    pub fn sample_space<G: OutcomeGraphView + ?Sized>(&self, graph: &G) -> Vec<String> {
        graph.leaves().into_iter().map(|n| n.label.clone()).collect()
    }

    /// Number of leaves with exactly `k` heads, for every `k` from 0 to the tree height.
    #[instrument(level = "debug", skip(self, graph))]
    pub fn heads_distribution<G: OutcomeGraphView + ?Sized>(
        &self,
        graph: &G,
    ) -> BTreeMap<usize, Frequency> {
        let leaves = graph.leaves();
        let max_heads = leaves.iter().map(|n| n.depth).max().unwrap_or(0);
        let counts = leaves
            .iter()
            .map(|n| {
                n.label
                    .chars()
                    .filter(|&c| c == CoinSide::Heads.code())
                    .count()
            })
            .counts();

        (0..=max_heads)
            .map(|k| {
                let count = counts.get(&k).copied().unwrap_or(0);
                (k, Frequency::of(count, leaves.len()))
            })
            .collect()
    }

    /// Total probability of the leaves matching `event`.
    pub fn event_probability<G, F>(&self, graph: &G, event: F) -> f64
    where
        G: OutcomeGraphView + ?Sized,
        F: Fn(&NodeData) -> bool,
    {
        graph
            .leaves()
            .into_iter()
            .filter(|leaf| event(leaf))
            .map(|leaf| leaf.probability)
            .sum()
    }
}

fn sum_distribution(leaves: &[&NodeData]) -> DomainResult<BTreeMap<u32, Frequency>> {
    let sums = leaves
        .iter()
        .map(|leaf| {
            leaf.sum_value
                .ok_or_else(|| DomainError::MissingSumValue(leaf.label.clone()))
        })
        .collect::<DomainResult<Vec<u32>>>()?;

    Ok(sums
        .into_iter()
        .counts()
        .into_iter()
        .map(|(sum, count)| (sum, Frequency::of(count, leaves.len())))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::arena::OutcomeGraph;
    use crate::domain::graph::{NodeAttrs, OutcomeGraphBuilder, ROOT_LABEL};

    #[test]
    fn given_root_only_when_analyzing_then_root_is_the_leaf() {
        let mut graph = OutcomeGraph::new();
        graph.add_node(ROOT_LABEL, NodeAttrs::root()).unwrap();

        let report = TreeAnalyzer::new().analyze(&graph, TreeKind::Coin).unwrap();

        assert_eq!(report.node_count, 1);
        assert_eq!(report.edge_count, 0);
        assert_eq!(report.leaf_count, 1);
        assert_eq!(report.height, 0);
        assert!(report.sum_distribution.is_none());
    }

    #[test]
    fn given_leaf_without_sum_when_dice_report_then_missing_sum_value() {
        let mut graph = OutcomeGraph::new();
        graph.add_node(ROOT_LABEL, NodeAttrs::root()).unwrap();
        graph.add_node("1", NodeAttrs::new(1.0, 1)).unwrap();
        graph.add_edge(ROOT_LABEL, "1", "1 (1)").unwrap();

        let result = TreeAnalyzer::new().analyze(&graph, TreeKind::Dice);

        assert_eq!(result, Err(DomainError::MissingSumValue("1".to_string())));
    }

    #[test]
    fn given_empty_leaf_set_when_computing_frequency_then_zero() {
        assert_eq!(Frequency::of(0, 0).probability, 0.0);
    }
}
