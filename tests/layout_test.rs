//! Tests for TreeLayout positions, roles, sizes and labels

use probtree::domain::{
    CoinTreeBuilder, DiceTreeBuilder, LayoutParams, NodeRole, TreeBuilder, TreeLayout, ROOT_LABEL,
};

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn given_two_flips_when_computing_layout_then_levels_spread_around_axis() {
    // Arrange
    let graph = CoinTreeBuilder::new(2).unwrap().build().unwrap();

    // Act
    let layout = TreeLayout::compute(&graph, &LayoutParams::default());

    // Assert
    assert_eq!(layout.nodes.len(), 7);

    let root = layout.get(ROOT_LABEL).unwrap();
    assert_close(root.x, -0.75);
    assert_close(root.y, 0.0);

    let expected = [
        ("H", -1.5, -2.5),
        ("T", 0.0, -2.5),
        ("HH", -3.0, -5.0),
        ("HT", -1.5, -5.0),
        ("TH", 0.0, -5.0),
        ("TT", 1.5, -5.0),
    ];
    for (label, x, y) in expected {
        let node = layout.get(label).unwrap();
        assert_close(node.x, x);
        assert_close(node.y, y);
    }
}

#[test]
fn given_two_flips_when_computing_layout_then_roles_and_colors_assigned() {
    // Arrange
    let graph = CoinTreeBuilder::new(2).unwrap().build().unwrap();

    // Act
    let layout = TreeLayout::compute(&graph, &LayoutParams::default());

    // Assert
    assert_eq!(layout.get(ROOT_LABEL).unwrap().role, NodeRole::Root);
    assert_eq!(layout.get("H").unwrap().role, NodeRole::Intermediate);
    assert_eq!(layout.get("TT").unwrap().role, NodeRole::Leaf);
    assert_eq!(NodeRole::Root.color(), "lightgreen");
    assert_eq!(NodeRole::Intermediate.color(), "lightblue");
    assert_eq!(NodeRole::Leaf.color(), "lightcoral");
}

#[test]
fn given_default_params_when_computing_sizes_then_scale_with_probability() {
    // Arrange
    let graph = CoinTreeBuilder::new(2).unwrap().build().unwrap();

    // Act
    let layout = TreeLayout::compute(&graph, &LayoutParams::default());

    // Assert
    assert_close(layout.get(ROOT_LABEL).unwrap().size, 2500.0);
    assert_close(layout.get("H").unwrap().size, 1500.0);
    assert_close(layout.get("HT").unwrap().size, 1000.0);
}

#[test]
fn given_custom_precision_when_computing_layout_then_labels_follow() {
    // Arrange
    let graph = DiceTreeBuilder::new().build().unwrap();
    let params = LayoutParams {
        precision: 2,
        ..LayoutParams::default()
    };

    // Act
    let layout = TreeLayout::compute(&graph, &params);

    // Assert
    assert_eq!(layout.get(ROOT_LABEL).unwrap().display, "Start\nP=1.0");
    assert_eq!(layout.get("3").unwrap().display, "3\nP=0.17");
    assert_eq!(layout.get("3,4").unwrap().display, "3,4\nP=0.03");
}

#[test]
fn given_root_only_when_computing_layout_then_single_root_node() {
    // Arrange
    let graph = CoinTreeBuilder::new(0).unwrap().build().unwrap();

    // Act
    let layout = TreeLayout::compute(&graph, &LayoutParams::default());

    // Assert
    assert_eq!(layout.nodes.len(), 1);
    assert_eq!(layout.nodes[0].role, NodeRole::Root);
}
