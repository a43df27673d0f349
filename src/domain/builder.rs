//! Tree builders enumerating every outcome path of a random experiment.

use tracing::{debug, instrument};

use crate::domain::arena::OutcomeGraph;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::graph::{NodeAttrs, OutcomeGraphBuilder, ROOT_LABEL};

/// Probability of each side of a fair coin.
pub const COIN_SIDE_PROBABILITY: f64 = 0.5;

/// Number of faces of a die.
pub const DIE_FACES: u32 = 6;

/// Result type for tree construction.
pub type TreeResult<T> = DomainResult<T>;

/// Common interface of the outcome tree builders.
pub trait TreeBuilder {
    /// Write the full tree into any graph implementing the builder capability.
    fn build_into<G: OutcomeGraphBuilder>(&self, graph: &mut G) -> TreeResult<()>;

    /// Build the tree into a fresh arena-backed graph.
    fn build(&self) -> TreeResult<OutcomeGraph> {
        let mut graph = OutcomeGraph::new();
        self.build_into(&mut graph)?;
        Ok(graph)
    }
}

/// One side of a coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinSide {
    Heads,
    Tails,
}

impl CoinSide {
    pub const ALL: [CoinSide; 2] = [CoinSide::Heads, CoinSide::Tails];

    /// Single-letter code appended to the outcome label.
    pub fn code(self) -> char {
        match self {
            CoinSide::Heads => 'H',
            CoinSide::Tails => 'T',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CoinSide::Heads => "Heads",
            CoinSide::Tails => "Tails",
        }
    }

    fn edge_label(self) -> String {
        format!("{} ({})", self.name(), COIN_SIDE_PROBABILITY)
    }
}

/// Builds the tree of all head/tail sequences of a fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinTreeBuilder {
    num_flips: u32,
}

impl CoinTreeBuilder {
    /// Create a builder for `num_flips` sequential flips.
    ///
    /// Negative counts and counts beyond `u32::MAX` are rejected with
    /// [`DomainError::InvalidArgument`].
    pub fn new(num_flips: i64) -> TreeResult<Self> {
        if num_flips < 0 {
            return Err(DomainError::InvalidArgument(format!(
                "number of flips must be a non-negative integer, got {num_flips}"
            )));
        }
        let num_flips = u32::try_from(num_flips).map_err(|_| {
            DomainError::InvalidArgument(format!(
                "number of flips must be at most {}, got {num_flips}",
                u32::MAX
            ))
        })?;
        Ok(Self { num_flips })
    }

    pub fn num_flips(&self) -> u32 {
        self.num_flips
    }

    /// Depth-first expansion: the heads branch is fully built before tails.
    fn expand<G: OutcomeGraphBuilder>(
        &self,
        graph: &mut G,
        parent: &str,
        prefix: &str,
        depth: u32,
        probability: f64,
    ) -> TreeResult<()> {
        if depth == self.num_flips {
            return Ok(());
        }

        for side in CoinSide::ALL {
            let label = format!("{prefix}{}", side.code());
            let child_probability = probability * COIN_SIDE_PROBABILITY;
            graph.add_node(
                &label,
                NodeAttrs::new(child_probability, depth as usize + 1),
            )?;
            graph.add_edge(parent, &label, &side.edge_label())?;
            self.expand(graph, &label, &label, depth + 1, child_probability)?;
        }
        Ok(())
    }
}

impl TreeBuilder for CoinTreeBuilder {
    #[instrument(level = "debug", skip(graph))]
    fn build_into<G: OutcomeGraphBuilder>(&self, graph: &mut G) -> TreeResult<()> {
        graph.add_node(ROOT_LABEL, NodeAttrs::root())?;
        self.expand(graph, ROOT_LABEL, "", 0, 1.0)?;
        debug!("coin tree with {} flips built", self.num_flips);
        Ok(())
    }
}

/// Builds the tree of two sequential rolls of a six-sided die.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiceTreeBuilder;

impl DiceTreeBuilder {
    pub fn new() -> Self {
        Self
    }
}

fn roll_label(face: u32) -> String {
    format!("{face} (1/{DIE_FACES})")
}

impl TreeBuilder for DiceTreeBuilder {
    #[instrument(level = "debug", skip(graph))]
    fn build_into<G: OutcomeGraphBuilder>(&self, graph: &mut G) -> TreeResult<()> {
        let face_probability = 1.0 / f64::from(DIE_FACES);
        graph.add_node(ROOT_LABEL, NodeAttrs::root())?;

        for first in 1..=DIE_FACES {
            let first_label = first.to_string();
            graph.add_node(&first_label, NodeAttrs::new(face_probability, 1))?;
            graph.add_edge(ROOT_LABEL, &first_label, &roll_label(first))?;

            for second in 1..=DIE_FACES {
                let leaf_label = format!("{first},{second}");
                let attrs = NodeAttrs::new(face_probability * face_probability, 2)
                    .with_sum(first + second);
                graph.add_node(&leaf_label, attrs)?;
                graph.add_edge(&first_label, &leaf_label, &roll_label(second))?;
            }
        }
        debug!("dice tree built");
        Ok(())
    }
}
