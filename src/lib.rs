//! Probability trees for coin flips and dice rolls.
//!
//! The crate is layered like a small service:
//! - [`domain`]: outcome graph, tree builders, analyzer and layout (no I/O)
//! - [`application`]: scenario service orchestrating build, analysis and export
//! - [`infrastructure`]: filesystem and renderer implementations, DI container
//! - [`cli`]: argument parsing, interactive menu and console presentation
//!
//! ```
//! use probtree::domain::{CoinTreeBuilder, TreeAnalyzer, TreeBuilder, TreeKind};
//!
//! let graph = CoinTreeBuilder::new(2)?.build()?;
//! let report = TreeAnalyzer::new().analyze(&graph, TreeKind::Coin)?;
//! assert_eq!(report.leaf_count, 4);
//! # Ok::<(), probtree::domain::DomainError>(())
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
