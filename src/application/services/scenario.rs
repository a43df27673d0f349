//! Scenario service
//!
//! Runs one probability experiment end to end: build the outcome tree,
//! analyze it and export it through the configured renderer.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{
    CoinTreeBuilder, DiceTreeBuilder, OutcomeGraph, TreeAnalyzer, TreeBuilder, TreeKind,
    TreeReport,
};
use crate::infrastructure::traits::Renderer;

/// A named probability experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Sequential flips of a fair coin
    Coins(i64),
    /// Two sequential rolls of a six-sided die
    Dice,
}

impl Scenario {
    pub fn kind(&self) -> TreeKind {
        match self {
            Scenario::Coins(_) => TreeKind::Coin,
            Scenario::Dice => TreeKind::Dice,
        }
    }

    /// Heading used for exported drawings.
    pub fn title(&self) -> String {
        match self {
            Scenario::Coins(1) => "Probability Tree - 1 Coin Flip".to_string(),
            Scenario::Coins(n) => format!("Probability Tree - {n} Coin Flips"),
            Scenario::Dice => "Probability Tree - 2 Dice Rolls".to_string(),
        }
    }

    /// File name without extension for exported drawings.
    pub fn file_stem(&self) -> String {
        match self {
            Scenario::Coins(n) => format!("coin_tree_{n}"),
            Scenario::Dice => "dice_tree".to_string(),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scenario::Coins(n) => write!(f, "{n} coin flip(s)"),
            Scenario::Dice => write!(f, "2 dice rolls"),
        }
    }
}

/// Everything produced by one scenario run.
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub graph: OutcomeGraph,
    pub report: TreeReport,
    /// Exported file, None when rendering is disabled
    pub artifact: Option<PathBuf>,
}

/// Service orchestrating build, analysis and export of probability trees.
pub struct ScenarioService {
    settings: Arc<Settings>,
    renderer: Arc<dyn Renderer>,
    analyzer: TreeAnalyzer,
}

impl ScenarioService {
    /// Create a new scenario service.
    pub fn new(settings: Arc<Settings>, renderer: Arc<dyn Renderer>) -> Self {
        Self {
            settings,
            renderer,
            analyzer: TreeAnalyzer::new(),
        }
    }

    pub fn analyzer(&self) -> &TreeAnalyzer {
        &self.analyzer
    }

    /// Build the outcome tree of a scenario without analyzing or exporting it.
    #[instrument(level = "debug", skip(self))]
    pub fn build(&self, scenario: Scenario) -> ApplicationResult<OutcomeGraph> {
        let graph = match scenario {
            Scenario::Coins(flips) => {
                let builder = CoinTreeBuilder::new(flips)?;
                if builder.num_flips() > self.settings.max_flips {
                    return Err(ApplicationError::LimitExceeded {
                        what: "number of flips".to_string(),
                        value: flips,
                        limit: self.settings.max_flips,
                    });
                }
                builder.build()?
            }
            Scenario::Dice => DiceTreeBuilder::new().build()?,
        };
        graph.validate_tree()?;
        Ok(graph)
    }

    /// Target path of the exported drawing for a scenario.
    pub fn artifact_path(&self, scenario: Scenario) -> PathBuf {
        self.settings.output_dir.join(format!(
            "{}.{}",
            scenario.file_stem(),
            self.renderer.extension()
        ))
    }

    /// Build, analyze and (if enabled) export a scenario.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&self, scenario: Scenario) -> ApplicationResult<ScenarioOutcome> {
        let graph = self.build(scenario)?;
        let report = self.analyzer.analyze(&graph, scenario.kind())?;
        debug!("report: {:?}", report);

        let artifact = if self.settings.render {
            let path = self.artifact_path(scenario);
            self.renderer
                .render(&graph, &scenario.title(), &path)
                .with_path_context("render tree", &path)?;
            info!("exported {} to {}", scenario, path.display());
            Some(path)
        } else {
            None
        };

        Ok(ScenarioOutcome {
            scenario,
            graph,
            report,
            artifact,
        })
    }
}
