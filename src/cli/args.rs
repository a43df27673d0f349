//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

/// Probability trees for coin flips and dice rolls
#[derive(Parser, Debug)]
#[command(name = "probtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Directory for exported tree files
    #[arg(short, long, global = true, value_hint = ValueHint::DirPath)]
    pub output_dir: Option<PathBuf>,

    /// Config file (layered over the global config)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu (default without subcommand)
    Menu,

    /// Coin flip tree
    Coins {
        /// Number of flips
        #[arg(short = 'n', long, default_value_t = 2, allow_negative_numbers = true)]
        flips: i64,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Two dice tree
    Dice {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Output switches shared by the tree commands.
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewArgs {
    /// Print the tree to stdout
    #[arg(long)]
    pub tree: bool,

    /// Skip the file export
    #[arg(long)]
    pub no_render: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create global config template
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show config paths
    Path,
}
