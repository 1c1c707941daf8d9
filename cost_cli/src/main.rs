//! # Equicost CLI
//!
//! Console front end for `cost_core`.
//!
//! - `equicost` - interactive menu
//! - `equicost eval <PATH|->` - price an equipment item or estimate from JSON
//! - `equicost tables` - list factor tables
//! - `equicost equations` - correlation reference as Markdown
//!
//! Logging goes to stderr; `EQUICOST_LOG` overrides `--verbose`/`--quiet`.

use std::io;

use clap::Parser;
use cost_core::CostError;

mod cli;
mod commands;
mod interactive;
mod output;

use cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();
    let format = cli.format;

    if let Err(error) = run(cli) {
        match (error.downcast_ref::<CostError>(), format) {
            (Some(engine), OutputFormat::Json) => {
                let _ = output::engine_error(&mut io::stderr(), engine);
            }
            _ => eprintln!("equicost error: {error:#}"),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing(cli.quiet, cli.verbose)?;
    let policy = cli.lookup_policy();
    let mut stdout = io::stdout().lock();

    match cli.command {
        None => {
            let stdin = io::stdin().lock();
            interactive::Session::new(stdin, stdout, policy).run()
        }
        Some(Commands::Eval { path }) => {
            let text = commands::read_source(&path)?;
            let document = commands::parse_document(&text)?;
            commands::eval(&mut stdout, document, cli.format, policy)
        }
        Some(Commands::Tables) => commands::tables(&mut stdout, cli.format),
        Some(Commands::Equations) => commands::equations(&mut stdout),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("EQUICOST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
