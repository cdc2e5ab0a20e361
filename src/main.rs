mod defaults;
mod prompt;
mod report;
mod storage;
mod traefik;
mod validation;
mod wizard;

use crate::defaults::{Defaults, DefaultsError};
use crate::prompt::{DialoguerPrompter, LinePrompter, PromptError};
use crate::report::{ConsoleReporter, Reporter};
use crate::wizard::Wizard;
use clap::Parser;
use log::{debug, info};
use std::error::Error as _;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::exit;
use thiserror::Error;

/// Interactive generator for Traefik docker-compose labels.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// YAML file overriding the built-in defaults
    #[arg(long, value_name = "FILE")]
    defaults: Option<PathBuf>,

    /// Disable colours
    #[arg(long)]
    plain: bool,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Defaults(#[from] DefaultsError),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

fn run(args: &Args, reporter: &mut ConsoleReporter) -> Result<(), AppError> {
    let defaults = match &args.defaults {
        Some(path) => Defaults::read_from_file(path)?,
        None => Defaults::default(),
    };

    // dialoguer refuses to read unless both ends are a terminal
    if io::stdin().is_terminal() && console::Term::stderr().is_term() {
        let mut prompter = DialoguerPrompter::new(!args.plain);
        Wizard::new(&mut prompter, reporter, &defaults).run()?;
    } else {
        info!("Input is not a terminal, reading plain lines");
        let mut prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
        Wizard::new(&mut prompter, reporter, &defaults).run()?;
    }
    Ok(())
}

/// Prints the error and each underlying cause on its own line.
fn report_fatal(reporter: &mut impl Reporter, e: &AppError) {
    reporter.failure("\nERROR: something went wrong!");
    reporter.failure(&format!("   {}", e));

    let mut source = e.source();
    while let Some(cause) = source {
        reporter.hint(&format!("   caused by: {}", cause));
        source = cause.source();
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.plain {
        colored::control::set_override(false);
    }

    info!("Starting Traefik label generator");
    let mut reporter = ConsoleReporter;

    if let Err(e) = run(&args, &mut reporter) {
        debug!("Fatal error: {:?}", e);
        report_fatal(&mut reporter, &e);
        exit(1);
    }
}
