//! Tests for ScenarioService wired through the ServiceContainer

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use rstest::rstest;
use tempfile::TempDir;

use probtree::application::services::Scenario;
use probtree::application::ApplicationError;
use probtree::config::Settings;
use probtree::domain::{DomainError, OutcomeGraphView, TreeKind};
use probtree::infrastructure::di::ServiceContainer;
use probtree::infrastructure::traits::{RealFileSystem, Renderer};
use probtree::util::testing;

/// Renderer double recording every call.
#[derive(Default)]
struct RecordingRenderer {
    calls: Mutex<Vec<(String, PathBuf, usize)>>,
    fail: bool,
}

impl Renderer for RecordingRenderer {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, graph: &dyn OutcomeGraphView, title: &str, path: &Path) -> io::Result<()> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        self.calls
            .lock()
            .unwrap()
            .push((title.to_string(), path.to_path_buf(), graph.node_count()));
        Ok(())
    }
}

fn settings_in(dir: &Path) -> Settings {
    Settings {
        output_dir: dir.to_path_buf(),
        ..Settings::default()
    }
}

#[test]
fn given_coin_scenario_when_running_then_exports_dot_file() {
    testing::init_test_setup();
    // Arrange
    let temp = TempDir::new().unwrap();
    let container = ServiceContainer::new(settings_in(temp.path()));

    // Act
    let outcome = container.scenarios().run(Scenario::Coins(2)).unwrap();

    // Assert
    let expected = temp.path().join("coin_tree_2.dot");
    assert_eq!(outcome.artifact.as_deref(), Some(expected.as_path()));
    assert!(expected.exists());
    assert_eq!(outcome.report.kind, TreeKind::Coin);
    assert_eq!(outcome.report.leaf_count, 4);
    assert_eq!(outcome.graph.node_count(), 7);
}

#[test]
fn given_dice_scenario_when_running_then_exports_dice_tree() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let container = ServiceContainer::new(settings_in(temp.path()));

    // Act
    let outcome = container.scenarios().run(Scenario::Dice).unwrap();

    // Assert
    assert!(temp.path().join("dice_tree.dot").exists());
    let dist = outcome.report.sum_distribution.expect("dice sums");
    assert_eq!(dist[&7].count, 6);
}

#[test]
fn given_render_disabled_when_running_then_no_artifact() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let settings = Settings {
        render: false,
        ..settings_in(temp.path())
    };
    let renderer = Arc::new(RecordingRenderer::default());
    let container =
        ServiceContainer::with_deps(settings, Arc::new(RealFileSystem), renderer.clone());

    // Act
    let outcome = container.scenarios().run(Scenario::Coins(3)).unwrap();

    // Assert
    assert!(outcome.artifact.is_none());
    assert!(renderer.calls.lock().unwrap().is_empty());
    assert_eq!(outcome.report.leaf_count, 8);
}

#[test]
fn given_custom_renderer_when_running_then_receives_title_and_path() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let renderer = Arc::new(RecordingRenderer::default());
    let container = ServiceContainer::with_deps(
        settings_in(temp.path()),
        Arc::new(RealFileSystem),
        renderer.clone(),
    );

    // Act
    container.scenarios().run(Scenario::Coins(1)).unwrap();

    // Assert
    let calls = renderer.calls.lock().unwrap();
    assert_eq!(
        *calls,
        vec![(
            "Probability Tree - 1 Coin Flip".to_string(),
            temp.path().join("coin_tree_1.txt"),
            3
        )]
    );
}

#[test]
fn given_failing_renderer_when_running_then_operation_failed() {
    // Arrange
    let renderer = Arc::new(RecordingRenderer {
        fail: true,
        ..RecordingRenderer::default()
    });
    let container =
        ServiceContainer::with_deps(Settings::default(), Arc::new(RealFileSystem), renderer);

    // Act
    let result = container.scenarios().run(Scenario::Dice);

    // Assert
    match result {
        Err(ApplicationError::OperationFailed { context, .. }) => {
            assert!(context.contains("dice_tree.txt"), "context: {context}");
        }
        other => panic!("expected OperationFailed, got {other:?}"),
    }
}

#[rstest]
#[case(17)]
#[case(64)]
fn given_flips_above_limit_when_building_then_limit_exceeded(#[case] flips: i64) {
    // Arrange
    let container = ServiceContainer::new(Settings::default());

    // Act
    let result = container.scenarios().build(Scenario::Coins(flips));

    // Assert
    assert!(matches!(
        result,
        Err(ApplicationError::LimitExceeded { value, limit: 16, .. }) if value == flips
    ));
}

#[test]
fn given_negative_flips_when_running_then_invalid_argument() {
    // Arrange
    let container = ServiceContainer::new(Settings::default());

    // Act
    let result = container.scenarios().run(Scenario::Coins(-3));

    // Assert
    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::InvalidArgument(_)))
    ));
}

#[rstest]
#[case(Scenario::Coins(1), "Probability Tree - 1 Coin Flip", "coin_tree_1")]
#[case(Scenario::Coins(3), "Probability Tree - 3 Coin Flips", "coin_tree_3")]
#[case(Scenario::Dice, "Probability Tree - 2 Dice Rolls", "dice_tree")]
fn given_scenario_when_naming_then_title_and_stem(
    #[case] scenario: Scenario,
    #[case] title: &str,
    #[case] stem: &str,
) {
    assert_eq!(scenario.title(), title);
    assert_eq!(scenario.file_stem(), stem);
}
