//! Runs a strategy and fetches every url it returns.

use std::backtrace::Backtrace;

use serde::Serialize;

use crate::config::{WarmupTargetConfig, CACHE_WARMUP_CONFIG};
use crate::model::error::strategy_errors::LoadStrategyError;
use crate::repository::{MetadataStore, ReadSession};
use crate::strategies::{strategy_registry, Strategy, StrategyParams, StrategyRegistry, WarmupContext};

pub mod fetcher;


pub use fetcher::{ReqwestFetcher, UrlFetcher};

/// the name the warmup task is scheduled under
pub static TASK_NAME: &str = "cache-warmup";

/// which urls were warmed and which couldn't be reached
#[derive(Serialize, Debug, PartialEq, Default)]
pub struct WarmupReport {
    pub success: Vec<String>,
    pub errors: Vec<String>,
}

/// what a warmup run hands back to the scheduler
#[derive(Serialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum WarmupOutcome {
    Report(WarmupReport),
    /// the strategy couldn't be loaded, holds the reason
    Failed(String),
}

/// warms the urls of the strategy registered as `strategy_name`, using the installed registry and the global config.
///
/// The strategy is loaded before the metadata store is touched, so a bad name or bad params always come back as
/// [`WarmupOutcome::Failed`]. Only a loaded strategy gets a fresh read-only session
pub fn cache_warmup(strategy_name: &str, params: StrategyParams) -> WarmupOutcome {
    let strategy = match load_strategy(strategy_registry(), strategy_name, &params) {
        Ok(strategy) => strategy,
        Err(failed) => return failed,
    };
    let session = match ReadSession::open() {
        Ok(session) => session,
        Err(e) => {
            log::error!("Failed to open the metadata store for {TASK_NAME}: {e:?}");
            return WarmupOutcome::Report(WarmupReport::default());
        }
    };
    let store = session.store();
    warm_urls(
        strategy.as_ref(),
        &store,
        &CACHE_WARMUP_CONFIG.warmup,
        &ReqwestFetcher::new(),
    )
}

/// loads the strategy, asks it for urls, and fetches them one at a time in order.
///
/// Never fails: strategies that can't be loaded come back as [`WarmupOutcome::Failed`], and everything past that
/// point ends up in the report
pub fn run_warmup(
    registry: &StrategyRegistry,
    strategy_name: &str,
    params: &StrategyParams,
    store: &dyn MetadataStore,
    target: &WarmupTargetConfig,
    fetcher: &dyn UrlFetcher,
) -> WarmupOutcome {
    match load_strategy(registry, strategy_name, params) {
        Ok(strategy) => warm_urls(strategy.as_ref(), store, target, fetcher),
        Err(failed) => failed,
    }
}

fn load_strategy(
    registry: &StrategyRegistry,
    strategy_name: &str,
    params: &StrategyParams,
) -> Result<Box<dyn Strategy>, WarmupOutcome> {
    log::info!("Loading strategy {strategy_name}");
    match registry.load(strategy_name, params) {
        Ok(strategy) => {
            log::info!("Loaded strategy {} with {params:?}", strategy.name());
            Ok(strategy)
        }
        Err(LoadStrategyError::NotFound(name)) => {
            let message = format!("No strategy {name} found!");
            log::error!("{message}");
            Err(WarmupOutcome::Failed(message))
        }
        Err(LoadStrategyError::Construction(e)) => {
            log::error!(
                "Failed to construct strategy {strategy_name} with {params:?}: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(WarmupOutcome::Failed("Error loading strategy!".to_string()))
        }
    }
}

fn warm_urls(
    strategy: &dyn Strategy,
    store: &dyn MetadataStore,
    target: &WarmupTargetConfig,
    fetcher: &dyn UrlFetcher,
) -> WarmupOutcome {
    let ctx = WarmupContext { store, target };
    let urls = match strategy.get_urls(&ctx) {
        Ok(urls) => urls,
        Err(e) => {
            log::error!(
                "Strategy {} failed to list urls: {e:?}",
                strategy.name()
            );
            return WarmupOutcome::Report(WarmupReport::default());
        }
    };

    let mut report = WarmupReport::default();
    for url in urls {
        log::info!("Fetching {url}");
        match fetcher.fetch(&url) {
            Ok(()) => report.success.push(url),
            Err(e) => {
                log::error!("Error warming up cache for {url}: {e:?}");
                report.errors.push(url);
            }
        }
    }
    WarmupOutcome::Report(report)
}
