//! Interactive menu: read one selection and run the matching scenario.

use std::io::BufRead;

use tracing::{debug, instrument};

use crate::application::services::Scenario;
use crate::cli::error::CliResult;
use crate::cli::{output, present};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    TwoCoins,
    ThreeCoins,
    TwoDice,
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection; surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::TwoCoins),
            "2" => Some(MenuChoice::ThreeCoins),
            "3" => Some(MenuChoice::TwoDice),
            "0" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn scenario(self) -> Option<Scenario> {
        match self {
            MenuChoice::TwoCoins => Some(Scenario::Coins(2)),
            MenuChoice::ThreeCoins => Some(Scenario::Coins(3)),
            MenuChoice::TwoDice => Some(Scenario::Dice),
            MenuChoice::Exit => None,
        }
    }
}

fn print_banner() {
    output::rule();
    output::info("  PROBABILITY TREES");
    output::rule();
    output::info("\n1. Flip 2 coins");
    output::info("2. Flip 3 coins");
    output::info("3. Roll 2 dice");
    output::info("\n0. Exit");
    output::rule();
}

/// Show the menu, read one selection from `input` and run it.
///
/// Scenario failures are reported but never turn into an error: the menu
/// always finishes normally. Undecodable bytes count as an invalid choice;
/// only failing to read the selection is an error.
#[instrument(level = "debug", skip(container, input))]
pub fn run_menu<R: BufRead>(container: &ServiceContainer, input: &mut R) -> CliResult<()> {
    print_banner();
    output::prompt("\nChoose an option (0-3):");

    let mut raw = Vec::new();
    input
        .read_until(b'\n', &mut raw)
        .map_err(|e| InfraError::io("read menu selection", e))?;
    let line = String::from_utf8_lossy(&raw);
    debug!("menu selection: {:?}", line.trim());

    match MenuChoice::parse(&line) {
        Some(MenuChoice::Exit) => output::info("\nGoodbye!"),
        Some(choice) => {
            if let Some(scenario) = choice.scenario() {
                run_choice(container, choice, scenario);
            }
        }
        None => output::info("Invalid option"),
    }

    output::info("");
    output::rule();
    Ok(())
}

fn run_choice(container: &ServiceContainer, choice: MenuChoice, scenario: Scenario) {
    output::info(&format!("\nGenerating tree for {}...", scenario));
    let service = container.scenarios();
    let precision = container.settings.precision;

    let outcome = match service.run(scenario) {
        Ok(outcome) => outcome,
        Err(e) => {
            output::error(&e);
            return;
        }
    };

    present::print_artifact(&outcome);
    present::print_report(&outcome, precision);
    match choice {
        MenuChoice::TwoCoins => present::print_sample_space(service.analyzer(), &outcome),
        MenuChoice::ThreeCoins => {
            present::print_heads_distribution(service.analyzer(), &outcome, precision)
        }
        MenuChoice::TwoDice => present::print_notable_dice(service.analyzer(), &outcome, precision),
        MenuChoice::Exit => {}
    }
}
