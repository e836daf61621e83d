pub mod config;
pub mod filters;
pub mod logging;
pub mod model;
pub mod repository;
pub mod service;
pub mod strategies;
pub mod tags;
pub mod urls;
pub mod warmup;

#[cfg(test)]
mod test;

pub use warmup::{cache_warmup, run_warmup, WarmupOutcome, WarmupReport};
