//! Console presentation of scenario results.

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::application::services::ScenarioOutcome;
use crate::cli::output;
use crate::cli::tree_view::TreeNodeConvert;
use crate::domain::{Frequency, OutcomeGraphView, TreeAnalyzer};

/// Sample spaces larger than this are summarised instead of listed.
const MAX_LISTED_OUTCOMES: usize = 32;

pub fn print_artifact(outcome: &ScenarioOutcome) {
    if let Some(path) = &outcome.artifact {
        output::success(&format!("Tree exported: {}", path.display()));
    }
}

pub fn print_tree(outcome: &ScenarioOutcome, precision: usize) {
    output::header("TREE:");
    output::info(&outcome.graph.to_tree_string(precision));
}

pub fn print_report(outcome: &ScenarioOutcome, precision: usize) {
    let report = &outcome.report;
    output::header("GRAPH ANALYSIS:");
    output::bullet(&format!("Total nodes: {}", report.node_count));
    output::bullet(&format!("Total edges: {}", report.edge_count));
    output::bullet(&format!("Leaf nodes (final outcomes): {}", report.leaf_count));
    if report.acyclic {
        output::bullet(&format!("Tree height: {}", report.height));
    }

    if let Some(distribution) = &report.sum_distribution {
        output::header("SUM DISTRIBUTION:");
        for (sum, freq) in distribution {
            output::bullet(&format!(
                "Sum = {}: {} ways, P = {:.*}",
                sum, freq.count, precision, freq.probability
            ));
        }
    }
}

pub fn print_sample_space(analyzer: &TreeAnalyzer, outcome: &ScenarioOutcome) {
    let outcomes = analyzer.sample_space(&outcome.graph);
    output::header("SAMPLE SPACE:");
    if outcomes.len() <= MAX_LISTED_OUTCOMES {
        output::detail(&format!("Ω = {{{}}}", outcomes.iter().join(", ")));
    } else {
        output::detail(&format!(
            "Ω = {{{}, ...}}",
            outcomes.iter().take(MAX_LISTED_OUTCOMES).join(", ")
        ));
    }
    output::detail(&format!("|Ω| = {} outcomes", outcomes.len()));
}

pub fn print_heads_distribution(
    analyzer: &TreeAnalyzer,
    outcome: &ScenarioOutcome,
    precision: usize,
) {
    let distribution: BTreeMap<usize, Frequency> = analyzer.heads_distribution(&outcome.graph);
    let total = outcome.report.leaf_count;
    output::header("HEADS DISTRIBUTION:");
    for (heads, freq) in distribution {
        output::bullet(&format!(
            "{} head(s): {}/{} = {:.*}",
            heads, freq.count, total, precision, freq.probability
        ));
    }
}

pub fn print_notable_dice(analyzer: &TreeAnalyzer, outcome: &ScenarioOutcome, precision: usize) {
    let graph = &outcome.graph;
    let total = graph.leaves().len();
    let sum_is = |target: u32| move |sum: Option<u32>| sum == Some(target);

    let events: [(&str, Box<dyn Fn(Option<u32>) -> bool>); 4] = [
        ("P(sum = 7)", Box::new(sum_is(7))),
        ("P(sum = 2)", Box::new(sum_is(2))),
        ("P(sum = 12)", Box::new(sum_is(12))),
        ("P(sum even)", Box::new(|sum: Option<u32>| sum.is_some_and(|s| s % 2 == 0))),
    ];

    output::header("NOTABLE PROBABILITIES:");
    for (name, event) in events {
        let probability = analyzer.event_probability(graph, |leaf| event(leaf.sum_value));
        let ways = (probability * total as f64).round() as usize;
        output::bullet(&format!(
            "{}: {}/{} = {:.*}",
            name, ways, total, precision, probability
        ));
    }
}
