//! Browse person records as a filterable, sortable, paginated table.
//!
//! Records are read once from a JSON file (`users.json` by default, or the
//! path in `roster.toml`). Each subcommand drives a single view session.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use roster::browse::run_browse;
use roster::controller::ViewController;
use roster::core::types::{ALL, Country, FilterCriteria, Selection, SortKey};
use roster::exit_codes;
use roster::io::config::{CONFIG_FILE, RosterConfig, load_config, write_config};
use roster::io::render::{TableRenderer, render_json};
use roster::io::source::load_or_empty;
use roster::logging;
use roster::record::Gender;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Browse person records with filters, sorting and pagination"
)]
struct Cli {
    /// Config file to read.
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Record source JSON file (overrides `source.path` from the config).
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print one page of the table.
    View {
        /// `All`, `male` or `female`.
        #[arg(long, default_value = ALL)]
        gender: Selection<Gender>,
        /// `All` or an `address.state` value present in the records.
        #[arg(long, default_value = ALL)]
        country: Selection<Country>,
        /// Click the header for KEY; repeat to toggle (`--sort age --sort age` is descending).
        #[arg(long = "sort", value_name = "KEY")]
        sort: Vec<SortKey>,
        /// 1-based page number; clamped into `1..=total pages`.
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Print the derived view as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// List the country filter options.
    Countries,
    /// Read actions from stdin and re-render after each one.
    Browse,
    /// Write a default config file at `--config` if missing.
    Init {
        /// Overwrite an existing config.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    // clap's own usage-error code (2) would collide with EMPTY.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print().context("print usage")?;
            return Ok(if err.use_stderr() {
                exit_codes::INVALID
            } else {
                exit_codes::OK
            });
        }
    };
    match cli.command {
        Command::View {
            gender,
            country,
            sort,
            page,
            json,
        } => cmd_view(
            &mut load_session(&cli.config, cli.source)?,
            FilterCriteria { gender, country },
            &sort,
            page,
            json,
        ),
        Command::Countries => cmd_countries(&load_session(&cli.config, cli.source)?),
        Command::Browse => cmd_browse(&mut load_session(&cli.config, cli.source)?),
        Command::Init { force } => cmd_init(&cli.config, force),
    }
}

fn load_session(config_path: &Path, source_override: Option<PathBuf>) -> Result<ViewController> {
    let cfg = load_config(config_path).context("load config")?;
    let source = source_override.unwrap_or_else(|| cfg.source.path.clone());
    let records = load_or_empty(&source, cfg.source.strict)?;
    info!(
        source = %source.display(),
        records = records.len(),
        page_size = cfg.page_size,
        "session loaded"
    );
    Ok(ViewController::with_records(records, cfg.page_size))
}

fn cmd_view(
    controller: &mut ViewController,
    criteria: FilterCriteria,
    sort: &[SortKey],
    page: usize,
    json: bool,
) -> Result<i32> {
    controller.set_filter(criteria);
    for key in sort {
        controller.request_sort(*key);
    }
    controller.paginate(page);

    let view = controller.view();
    if json {
        print!("{}", render_json(view)?);
    } else {
        println!("{}", TableRenderer::new().render(view, controller.state())?);
    }

    if view.is_empty() {
        return Ok(exit_codes::EMPTY);
    }
    Ok(exit_codes::OK)
}

/// Write the default config to `path`. An existing file is kept unless `force`.
fn cmd_init(path: &Path, force: bool) -> Result<i32> {
    if path.exists() && !force {
        println!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
        return Ok(exit_codes::OK);
    }
    write_config(path, &RosterConfig::default())
        .with_context(|| format!("write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(exit_codes::OK)
}

fn cmd_countries(controller: &ViewController) -> Result<i32> {
    println!("{}", ALL);
    for country in &controller.view().available_countries {
        println!("{}", country);
    }
    Ok(exit_codes::OK)
}

fn cmd_browse(controller: &mut ViewController) -> Result<i32> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run_browse(controller, &TableRenderer::new(), stdin.lock(), &mut stdout)?;
    Ok(exit_codes::OK)
}
