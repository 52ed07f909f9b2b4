//! scaffold's main application entry point.
//! Parses the command line, gathers the project configuration and runs the
//! generator.

use scaffold::{
    cli::{get_args, resolve_config, Command, NewArgs},
    error::{default_error_handler, Result},
    generator::{Generator, Outcome, Preview},
    logger::init_logger,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
    template::{EmbeddedTemplates, LocalTemplates, TemplateSource},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    let result = match args.command {
        Command::New(new_args) => run_new(new_args),
    };
    if let Err(err) = result {
        default_error_handler(err);
    }
}

/// Runs the `new` command.
///
/// # Flow
/// 1. Resolves and validates the project configuration
/// 2. Selects the template source
/// 3. Generates or previews the project in the current directory
/// 4. Prints the next steps after a real run
fn run_new(args: NewArgs) -> Result<()> {
    let prompter = DialoguerPrompter::new();
    let config = resolve_config(&args, &prompter)?;

    let templates: Box<dyn TemplateSource> = match &args.templates {
        Some(dir) => Box::new(LocalTemplates::new(dir)?),
        None => Box::new(EmbeddedTemplates::new()),
    };
    let renderer = MiniJinjaRenderer::new();

    let cwd = std::env::current_dir()?;
    let generator = Generator::new(&config, cwd, args.dry_run, &*templates, &renderer);

    match generator.generate()? {
        Outcome::Previewed(plan) => {
            println!("Dry run mode - no files will be created\n");
            println!("{}", Preview::new(&config, &plan));
        }
        Outcome::Created(path) => {
            let name = &config.project_name;
            println!("✓ Project {name} created successfully at {}", path.display());
            println!("\nNext steps:");
            println!("  cd {}", config.project_name);
            println!("  make deps");
            println!("  make build");
            println!("  make run");
        }
    }

    Ok(())
}
