//! Command dispatch for the course planner

use std::io;
use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::catalog::load_catalog;
use crate::config::Settings;
use crate::domain::{Course, CourseTree};

use super::args::{Cli, Commands, ConfigCommands};
use super::error::CliResult;
use super::output;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::List) => list(cli),
        Some(Commands::Show { course }) => show(cli, course),
        Some(Commands::Remove { course }) => remove(cli, course),
        Some(Commands::Tree) => tree(cli),
        Some(Commands::Config { command }) => config(command),
        Some(Commands::Completion { shell }) => completion(*shell),
        None => Ok(()),
    }
}

/// Resolve the catalog path: `--file` wins over the configured default.
fn catalog_path(cli: &Cli) -> CliResult<PathBuf> {
    match &cli.file {
        Some(file) => Ok(file.clone()),
        None => Ok(Settings::load()?.catalog),
    }
}

fn load(cli: &Cli) -> CliResult<CourseTree> {
    let path = catalog_path(cli)?;
    let tree = load_catalog(&path)?;
    debug!("{} courses loaded from {}", tree.len(), path.display());
    Ok(tree)
}

/// Course numbers are stored upper-case; user input is matched
/// case-insensitively.
fn normalize_number(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

fn print_course(course: &Course) {
    output::info(course);
    if !course.prerequisites.is_empty() {
        output::info(&format!(
            "Prerequisites: {}",
            course.prerequisites.iter().join(", ")
        ));
    }
}

#[instrument(skip(cli))]
fn list(cli: &Cli) -> CliResult<()> {
    let tree = load(cli)?;
    for course in tree.iter() {
        print_course(course);
    }
    Ok(())
}

#[instrument(skip(cli))]
fn show(cli: &Cli, course: &str) -> CliResult<()> {
    let tree = load(cli)?;
    let number = normalize_number(course);
    match tree.search(&number) {
        Some(found) => print_course(found),
        None => output::info(&format!("{} not found.", number)),
    }
    Ok(())
}

#[instrument(skip(cli))]
fn remove(cli: &Cli, course: &str) -> CliResult<()> {
    let mut tree = load(cli)?;
    let number = normalize_number(course);
    tree.remove(&number);
    for course in tree.iter() {
        print_course(course);
    }
    Ok(())
}

#[instrument(skip(cli))]
fn tree(cli: &Cli) -> CliResult<()> {
    let tree = load(cli)?;
    match tree.to_display_tree() {
        Some(rendered) => output::info(&rendered),
        None => output::warning("catalog is empty"),
    }
    Ok(())
}

fn config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            output::info(&toml::to_string_pretty(&settings)?);
        }
        ConfigCommands::Path => match Settings::global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no configuration directory on this platform"),
        },
    }
    Ok(())
}

fn completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_mixed_case_input_when_normalizing_then_upper_cased_and_trimmed() {
        assert_eq!(normalize_number(" csci300 "), "CSCI300");
        assert_eq!(normalize_number("MATH201"), "MATH201");
    }
}
