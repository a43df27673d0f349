//! Domain layer: outcome graph, tree builders, analysis and layout
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod analyzer;
pub mod arena;
pub mod builder;
pub mod error;
pub mod graph;
pub mod layout;

pub use analyzer::{Frequency, TreeAnalyzer, TreeKind, TreeReport};
pub use arena::OutcomeGraph;
pub use builder::{CoinSide, CoinTreeBuilder, DiceTreeBuilder, TreeBuilder};
pub use error::{DomainError, DomainResult};
pub use graph::{EdgeRef, NodeAttrs, NodeData, OutcomeGraphBuilder, OutcomeGraphView, ROOT_LABEL};
pub use layout::{LayoutParams, NodeRole, PlacedNode, TreeLayout};
