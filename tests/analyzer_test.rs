//! Tests for TreeAnalyzer over built coin and dice trees

use rstest::rstest;

use probtree::domain::{
    CoinTreeBuilder, DiceTreeBuilder, DomainError, OutcomeGraph, TreeAnalyzer, TreeBuilder,
    TreeKind,
};
use probtree::util::testing;

const EPSILON: f64 = 1e-9;

fn coin_tree(flips: i64) -> OutcomeGraph {
    CoinTreeBuilder::new(flips).unwrap().build().unwrap()
}

fn dice_tree() -> OutcomeGraph {
    DiceTreeBuilder::new().build().unwrap()
}

// ============================================================
// Reports
// ============================================================

#[test]
fn given_two_flips_when_analyzing_then_reports_shape() {
    testing::init_test_setup();
    // Arrange
    let graph = coin_tree(2);

    // Act
    let report = TreeAnalyzer::new().analyze(&graph, TreeKind::Coin).unwrap();

    // Assert
    assert_eq!(report.kind, TreeKind::Coin);
    assert_eq!(report.node_count, 7);
    assert_eq!(report.edge_count, 6);
    assert_eq!(report.leaf_count, 4);
    assert_eq!(report.height, 2);
    assert!(report.acyclic);
    assert!(report.sum_distribution.is_none());
}

#[rstest]
#[case(1, 3, 2)]
#[case(3, 15, 8)]
#[case(4, 31, 16)]
fn given_flips_when_analyzing_then_counts_follow_powers_of_two(
    #[case] flips: i64,
    #[case] nodes: usize,
    #[case] leaves: usize,
) {
    // Act
    let report = TreeAnalyzer::new()
        .analyze(&coin_tree(flips), TreeKind::Coin)
        .unwrap();

    // Assert
    assert_eq!(report.node_count, nodes);
    assert_eq!(report.edge_count, nodes - 1);
    assert_eq!(report.leaf_count, leaves);
    assert_eq!(report.height, flips as usize);
}

#[test]
fn given_dice_when_analyzing_then_reports_sum_distribution() {
    testing::init_test_setup();
    // Act
    let report = TreeAnalyzer::new().analyze(&dice_tree(), TreeKind::Dice).unwrap();

    // Assert
    assert_eq!(report.node_count, 43);
    assert_eq!(report.edge_count, 42);
    assert_eq!(report.leaf_count, 36);
    assert_eq!(report.height, 2);

    let dist = report.sum_distribution.expect("dice report has sums");
    let sums: Vec<u32> = dist.keys().copied().collect();
    assert_eq!(sums, (2..=12).collect::<Vec<u32>>());

    let counts: Vec<usize> = dist.values().map(|f| f.count).collect();
    assert_eq!(counts, vec![1, 2, 3, 4, 5, 6, 5, 4, 3, 2, 1]);

    assert!((dist[&7].probability - 6.0 / 36.0).abs() < EPSILON);
    assert!((dist[&2].probability - 1.0 / 36.0).abs() < EPSILON);
    assert!((dist[&12].probability - 1.0 / 36.0).abs() < EPSILON);
    let total: f64 = dist.values().map(|f| f.probability).sum();
    assert!((total - 1.0).abs() < EPSILON);
}

#[test]
fn given_coin_tree_when_dice_report_then_missing_sum_value() {
    // Act
    let result = TreeAnalyzer::new().analyze(&coin_tree(1), TreeKind::Dice);

    // Assert
    assert!(matches!(result, Err(DomainError::MissingSumValue(label)) if label == "H"));
}

// ============================================================
// Outcome queries
// ============================================================

#[test]
fn given_three_flips_when_sample_space_then_lists_sequences_in_order() {
    // Act
    let outcomes = TreeAnalyzer::new().sample_space(&coin_tree(3));

    // Assert
    assert_eq!(
        outcomes,
        vec!["HHH", "HHT", "HTH", "HTT", "THH", "THT", "TTH", "TTT"]
    );
}

#[test]
fn given_dice_when_sample_space_then_pairs_in_roll_order() {
    // Act
    let outcomes = TreeAnalyzer::new().sample_space(&dice_tree());

    // Assert
    assert_eq!(outcomes.len(), 36);
    assert_eq!(outcomes.first().map(String::as_str), Some("1,1"));
    assert_eq!(outcomes.get(1).map(String::as_str), Some("1,2"));
    assert_eq!(outcomes.last().map(String::as_str), Some("6,6"));
}

#[rstest]
#[case(0, vec![1])]
#[case(1, vec![1, 1])]
#[case(3, vec![1, 3, 3, 1])]
#[case(4, vec![1, 4, 6, 4, 1])]
fn given_flips_when_heads_distribution_then_binomial_counts(
    #[case] flips: i64,
    #[case] expected: Vec<usize>,
) {
    // Act
    let dist = TreeAnalyzer::new().heads_distribution(&coin_tree(flips));

    // Assert
    let counts: Vec<usize> = dist.values().map(|f| f.count).collect();
    assert_eq!(counts, expected);
    let total: f64 = dist.values().map(|f| f.probability).sum();
    assert!((total - 1.0).abs() < EPSILON);
}

#[test]
fn given_dice_when_event_probability_then_sums_matching_leaves() {
    // Arrange
    let graph = dice_tree();
    let analyzer = TreeAnalyzer::new();

    // Act
    let seven = analyzer.event_probability(&graph, |n| n.sum_value == Some(7));
    let even = analyzer.event_probability(&graph, |n| n.sum_value.is_some_and(|s| s % 2 == 0));
    let doubles = analyzer.event_probability(&graph, |n| {
        let mut faces = n.label.split(',');
        faces.next() == faces.next()
    });

    // Assert
    assert!((seven - 1.0 / 6.0).abs() < EPSILON);
    assert!((even - 0.5).abs() < EPSILON);
    assert!((doubles - 1.0 / 6.0).abs() < EPSILON);
}

#[test]
fn given_coin_tree_when_event_probability_then_matches_leaf_labels() {
    // Arrange
    let graph = coin_tree(2);

    // Act
    let at_least_one_head =
        TreeAnalyzer::new().event_probability(&graph, |n| n.label.contains('H'));
    let impossible = TreeAnalyzer::new().event_probability(&graph, |_| false);

    // Assert
    assert!((at_least_one_head - 0.75).abs() < EPSILON);
    assert_eq!(impossible, 0.0);
}
