//! motheme CLI: update / themes / apply / clear / current / create / remove.
//!
//! Logging: `--verbose` enables `motheme=debug`; `RUST_LOG` overrides.

mod cli;

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use motheme::{
    Reporter, load_settings, run_apply, run_clear, run_create, run_current, run_remove,
    run_themes, run_update,
};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "motheme=debug"
        } else {
            "motheme=warn"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let settings = load_settings(cli.conf.as_deref());

    match cli.command {
        Command::Update => {
            let mut reporter = Reporter::new(io::stdout(), false);
            run_update(&settings, &mut reporter).await
        }
        Command::Themes => run_themes(&settings, &mut Reporter::new(io::stdout(), false)),
        Command::Apply {
            theme,
            files,
            dry_run,
        } => {
            let mut reporter = Reporter::new(io::stdout(), files.quiet);
            run_apply(&settings, &theme, &files.selection(), dry_run, &mut reporter).map(|_| ())
        }
        Command::Clear { files, dry_run } => {
            let mut reporter = Reporter::new(io::stdout(), files.quiet);
            run_clear(&settings, &files.selection(), dry_run, &mut reporter).map(|_| ())
        }
        Command::Current { files } => {
            let mut reporter = Reporter::new(io::stdout(), files.quiet);
            run_current(&settings, &files.selection(), &mut reporter).map(|_| ())
        }
        Command::Create { reference, name } => {
            let mut reporter = Reporter::new(io::stdout(), false);
            run_create(&settings, &reference, &name, &mut reporter).map(|_| ())
        }
        Command::Remove { themes, yes } => {
            let mut reporter = Reporter::new(io::stdout(), false);
            let mut input = io::stdin().lock();
            run_remove(&settings, &themes, yes, &mut input, &mut reporter).map(|_| ())
        }
    }
}
