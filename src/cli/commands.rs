use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::Scenario;
use crate::cli::args::{Cli, Commands, ConfigCommands, ViewArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::{menu, output, present};
use crate::config::{global_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        Some(Commands::Config { command }) => _config(cli, command),
        Some(Commands::Coins { flips, view }) => {
            let container = build_container(cli, view)?;
            _coins(&container, *flips, view)
        }
        Some(Commands::Dice { view }) => {
            let container = build_container(cli, view)?;
            _dice(&container, view)
        }
        Some(Commands::Menu) | None => {
            let container = build_container(cli, &ViewArgs::default())?;
            menu::run_menu(&container, &mut io::stdin().lock())
        }
    }
}

/// Load settings and apply the command line overrides on top.
pub fn load_settings(cli: &Cli, view: &ViewArgs) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.output_dir {
        settings.output_dir = dir.clone();
    }
    if view.no_render {
        settings.render = false;
    }
    debug!("settings: {:?}", settings);
    Ok(settings)
}

fn build_container(cli: &Cli, view: &ViewArgs) -> CliResult<ServiceContainer> {
    Ok(ServiceContainer::new(load_settings(cli, view)?))
}

#[instrument(skip(container))]
fn _coins(container: &ServiceContainer, flips: i64, view: &ViewArgs) -> CliResult<()> {
    let service = container.scenarios();
    let precision = container.settings.precision;
    let outcome = service.run(Scenario::Coins(flips))?;

    present::print_artifact(&outcome);
    if view.tree {
        present::print_tree(&outcome, precision);
    }
    present::print_report(&outcome, precision);
    present::print_sample_space(service.analyzer(), &outcome);
    present::print_heads_distribution(service.analyzer(), &outcome, precision);
    Ok(())
}

#[instrument(skip(container))]
fn _dice(container: &ServiceContainer, view: &ViewArgs) -> CliResult<()> {
    let service = container.scenarios();
    let precision = container.settings.precision;
    let outcome = service.run(Scenario::Dice)?;

    present::print_artifact(&outcome);
    if view.tree {
        present::print_tree(&outcome, precision);
    }
    present::print_report(&outcome, precision);
    present::print_notable_dice(service.analyzer(), &outcome, precision);
    Ok(())
}

#[instrument(skip(cli))]
fn _config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli, &ViewArgs::default())?;
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::info(&format!("global: {}", path.display())),
                None => output::warning("no home directory, global config unavailable"),
            }
            if let Some(path) = &cli.config {
                output::info(&format!("file:   {}", path.display()));
            }
            Ok(())
        }
        ConfigCommands::Init { force } => {
            let path = global_config_path()
                .ok_or_else(|| CliError::Usage("cannot determine config directory".to_string()))?;
            let container = ServiceContainer::new(Settings::default());
            if container.fs.exists(&path) && !force {
                return Err(CliError::InvalidArgs(format!(
                    "config already exists: {} (use --force to overwrite)",
                    path.display()
                )));
            }
            container
                .fs
                .ensure_parent(&path)
                .and_then(|_| container.fs.write(&path, &Settings::template()))
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::success(&format!("Created {}", path.display()));
            Ok(())
        }
    }
}
