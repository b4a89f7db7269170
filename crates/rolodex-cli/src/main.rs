mod commands;
mod error;
mod session;
mod util;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::error::{exit_code_for, report_error};
use crate::session::{load_book, Session};
use rolodex_config as config;
use rolodex_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(name = "rolodex", version, about = "Address book with weekly birthday reminders")]
struct Cli {
    /// Address book file (overrides the config file and the default location)
    #[arg(long)]
    book_path: Option<PathBuf>,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Reference date for the birthdays report, YYYY-MM-DD
    #[arg(long, value_name = "DATE")]
    today: Option<String>,
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        book_path,
        config: config_path,
        today,
        verbose: _,
    } = cli;

    let app_config = config::load(config_path).with_context(|| "load config")?;
    match app_config.source() {
        Some(path) => debug!(path = %path.display(), "config loaded"),
        None => debug!("no config file, using defaults"),
    }

    let today = match today {
        Some(raw) => util::parse_date_flag(&raw)?,
        None => util::today(),
    };

    let custom = app_config
        .select_book_path(book_path)
        .with_context(|| "resolve address book path")?;
    let book_path =
        paths::resolve_book_path(custom).with_context(|| "resolve address book path")?;
    debug!(path = %book_path.display(), "address book path resolved");

    let store = Store::open(&book_path);
    let book = load_book(&store)?;

    let mut session = Session::new(&store, book, today);
    session.run(io::stdin().lock(), io::stdout().lock())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
