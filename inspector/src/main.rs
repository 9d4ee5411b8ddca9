//! Check one predicate against a recorded in-toto link.
//!
//! Exits `0` when the predicate holds, `1` when it does not, and a higher
//! status when the check could not run (see `link_inspect::exit_codes`).

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use link_inspect::exit_codes;
use link_inspect::inspect::{InspectRequest, inspect};
use link_inspect::io::config::load_config;
use link_inspect::io::link_store::LinkFileSource;
use link_inspect::logging;
use link_inspect::report::{Outcome, OutputFormat, render, write_rendered};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "link-inspect",
    version,
    about = "Check a predicate against the byproducts or return value of an in-toto link"
)]
struct Cli {
    /// Link metadata file to inspect.
    #[arg(short, long)]
    link: PathBuf,

    /// Field to inspect: stdout, stderr, or exit-code.
    #[arg(short, long)]
    field: String,

    /// Text fields: is, is-not, contains, contains-not.
    /// Exit code: eq, ne, lt, le, gt, ge (read as "exit code <op> reference").
    #[arg(short = 'p', long = "op", allow_hyphen_values = true)]
    operator: String,

    /// Value to compare against; must be an integer for exit-code.
    #[arg(short, long, allow_hyphen_values = true)]
    reference: String,

    /// Output format. Defaults to the config file setting, then `text`.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Print nothing; report only through the exit status.
    #[arg(short, long)]
    quiet: bool,

    /// Debug diagnostics on stderr (ignored when RUST_LOG is set).
    #[arg(short, long)]
    verbose: bool,

    /// TOML config file.
    #[arg(long, env = "LINK_INSPECT_CONFIG")]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID_INPUT
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<i32> {
    let request = InspectRequest {
        link: &cli.link,
        field: &cli.field,
        operator: &cli.operator,
        reference: &cli.reference,
    };

    let (outcome, format) = match load_config(cli.config.as_deref()) {
        Ok(config) => {
            let source = LinkFileSource::from_config(&config);
            (inspect(&source, &request), cli.format.unwrap_or(config.format))
        }
        Err(err) => (
            Outcome::EvaluationError(err),
            cli.format.unwrap_or_default(),
        ),
    };
    debug!(outcome = ?outcome, exit_code = outcome.exit_code(), "inspection finished");

    if !cli.quiet {
        let rendered = render(&outcome, &request, format).context("render outcome")?;
        write_rendered(&rendered, &mut io::stdout().lock(), &mut io::stderr().lock())
            .context("write outcome")?;
    }
    Ok(outcome.exit_code())
}
