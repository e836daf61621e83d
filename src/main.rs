use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::{Map, Value};

use cache_warmup::config::CACHE_WARMUP_CONFIG;
use cache_warmup::logging::init_logger;
use cache_warmup::repository::{initialize_db, open_connection};
use cache_warmup::strategies::install_strategy_registry;
use cache_warmup::tags::materialize::materialize_implicit_tags;
use cache_warmup::warmup::{cache_warmup, TASK_NAME};

#[derive(Parser)]
#[command(author, version, about = "Warms chart caches of a BI platform")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one warmup with the named strategy and print the report as json
    Warmup {
        /// e.g. `dummy`, `TopNDashboards`, `dashboard_tags`
        strategy: String,
        /// keyword arguments for the strategy, as a json object
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// Tag every existing chart, dashboard, and saved query with its implicit tags
    MaterializeTags,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_logger(&CACHE_WARMUP_CONFIG.log) {
        eprintln!("Failed to set up logging: {e}");
        return ExitCode::FAILURE;
    }
    install_strategy_registry(Vec::new());
    match cli.cmd {
        Command::Warmup { strategy, params } => warmup(&strategy, &params),
        Command::MaterializeTags => materialize(),
    }
}

fn warmup(strategy: &str, params: &str) -> ExitCode {
    let params: Map<String, Value> = match serde_json::from_str(params) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::error!("Strategy params must be a json object: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Starting {TASK_NAME} with strategy {strategy}");
    let outcome = cache_warmup(strategy, params);
    match serde_json::to_string(&outcome) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize warmup outcome: {e}");
            ExitCode::FAILURE
        }
    }
}

fn materialize() -> ExitCode {
    if let Err(e) = initialize_db() {
        log::error!("Failed to initialize the metadata database: {e:?}");
        return ExitCode::FAILURE;
    }
    let mut con = open_connection();
    let res = materialize_implicit_tags(&mut con);
    if let Err((_, e)) = con.close() {
        log::warn!("Failed to close connection: {e:?}");
    }
    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
