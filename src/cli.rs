//! Command-line interface implementation for scaffold.
//! Provides argument parsing with clap and turns the parsed arguments into a
//! validated project configuration.

use crate::config::{validate_project_name, ProjectConfig, ProjectType};
use crate::constants::DEFAULT_LICENSE;
use crate::error::Result;
use crate::prompt::Prompter;
use clap::{Parser, Subcommand};
use log::debug;
use std::path::PathBuf;

/// Command-line arguments structure for scaffold.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "A project scaffolding tool for Go projects",
    long_about = "Scaffold creates new Go projects following the golang-standards/project-layout \
                  structure, with the standard directories and boilerplate files in place."
)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Go project
    ///
    /// If no project name is provided, interactive mode is used.
    New(NewArgs),
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Name of the project directory and binary
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Go module path (e.g. github.com/user/project)
    #[arg(short, long, default_value = "")]
    pub module_path: String,

    /// Author name
    #[arg(short, long, default_value = "")]
    pub author: String,

    /// License type
    #[arg(short, long, default_value = DEFAULT_LICENSE)]
    pub license: String,

    /// Project type (cli, library, service)
    #[arg(short = 't', long = "type", value_name = "TYPE", default_value = "cli")]
    pub project_type: String,

    /// Preview what would be created without creating anything
    #[arg(long)]
    pub dry_run: bool,

    /// Use interactive mode to configure the project
    #[arg(short, long)]
    pub interactive: bool,

    /// Directory of templates to use instead of the built-in set
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,
}

/// Parses command line arguments and returns the Args structure.
///
/// Exits through clap's default error handling on invalid arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Builds the final project configuration from the `new` arguments.
///
/// The project name is validated as soon as it is known: right away when it
/// was passed as an argument, otherwise after the prompter collected it.
/// Without a project name interactive mode is forced. Outside interactive mode
/// the project type must be one of the known types.
///
/// # Errors
/// * `Error::ValidationError` for an invalid project name
/// * `Error::InvalidProjectTypeError` for an unknown type in non-interactive mode
/// * `Error::PromptError` if the interactive prompt is aborted
pub fn resolve_config(args: &NewArgs, prompter: &dyn Prompter) -> Result<ProjectConfig> {
    if let Some(name) = &args.project_name {
        validate_project_name(name)?;
    }
    let interactive = args.interactive || args.project_name.is_none();

    let project_type = if interactive {
        ProjectType::from_str_lossy(&args.project_type)
    } else {
        args.project_type.parse()?
    };

    let mut config = ProjectConfig {
        project_name: args.project_name.clone().unwrap_or_default(),
        module_path: args.module_path.clone(),
        author: args.author.clone(),
        license: args.license.clone(),
        project_type,
    };

    if interactive {
        debug!("Collecting project configuration interactively.");
        config = prompter.fill(config)?;
        if args.project_name.is_none() {
            validate_project_name(&config.project_name)?;
        }
    }
    config.apply_defaults();

    Ok(config)
}
