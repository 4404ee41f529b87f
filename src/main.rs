use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use typepass::api;
use typepass::config::{ComposerParams, TableParams};
use typepass::cost::BigramCostTable;
use typepass::error::TpResult;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Composes passphrases that are easy to type", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with composer params; explicit flags override it.
    #[arg(global = true, short, long)]
    config: Option<PathBuf>,

    /// Directory of cached bigram tables, one JSON file per topology and cap.
    /// Missing tables are built and written there.
    #[arg(global = true, long)]
    table_cache: Option<PathBuf>,

    /// More logging (-v debug, -vv trace). RUST_LOG wins when set.
    #[arg(global = true, short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(global = true, short, long, default_value_t = false)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compose a passphrase from a vocabulary.
    Generate(cmd::generate::GenerateArgs),
    /// Print or export the bigram cost table.
    Table(cmd::table::TableArgs),
    /// Report the typing cost of phrases.
    Cost(cmd::cost::CostArgs),
}

fn init_logging(verbose: u8, quiet: bool) {
    let default = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_params(
    cli_params: &ComposerParams,
    config: Option<&Path>,
    sub_matches: &ArgMatches,
) -> TpResult<ComposerParams> {
    let Some(path) = config else {
        return Ok(cli_params.clone());
    };

    info!("⚙️  Loading params from {:?}", path);
    let mut params = ComposerParams::load_from_file(path)?;
    params.merge_from_cli(cli_params, sub_matches);
    Ok(params)
}

/// Same as [`resolve_params`] for commands that only need a bigram table.
fn resolve_table_params(
    cli_params: &TableParams,
    config: Option<&Path>,
    sub_matches: &ArgMatches,
) -> TpResult<TableParams> {
    let Some(path) = config else {
        return Ok(*cli_params);
    };

    info!("⚙️  Loading params from {:?}", path);
    let mut params = ComposerParams::load_from_file(path)?.table;
    params.merge_from_cli(cli_params, sub_matches);
    Ok(params)
}

fn cost_table(cli: &Cli, params: &TableParams) -> TpResult<BigramCostTable> {
    api::load_or_build_cost_table(params.topology, params.path_cap, cli.table_cache.as_deref())
}

fn run(cli: &Cli, matches: &ArgMatches) -> TpResult<()> {
    // Subcommand-level args live in the subcommand's matches, not the root.
    let sub_matches = matches.subcommand().map(|(_, m)| m).unwrap_or(matches);
    let config = cli.config.as_deref();

    match &cli.command {
        Commands::Generate(args) => {
            let params = resolve_params(&args.params, config, sub_matches)?;
            let table = cost_table(cli, &params.table)?;
            cmd::generate::run(args, &params, &table)
        }
        Commands::Table(args) => {
            let params = resolve_table_params(&args.table, config, sub_matches)?;
            let table = cost_table(cli, &params)?;
            cmd::table::run(args, &params, &table)
        }
        Commands::Cost(args) => {
            let params = resolve_table_params(&args.table, config, sub_matches)?;
            let table = cost_table(cli, &params)?;
            cmd::cost::run(args, &table)
        }
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(&cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}
