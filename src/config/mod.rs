use config::{Config, Environment, File};
use once_cell::sync::Lazy;
use serde::Deserialize;

/// where the warmed chart urls point to
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct WarmupTargetConfig {
    #[serde(default = "default_scheme")]
    pub scheme: String,
    /// required to build any url, but a missing value is only an error once a strategy needs it
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct DbConfig {
    pub location: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// if present, log lines are written here in addition to stdout
    pub file: Option<String>,
}

/// config properties for the whole of this application
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CacheWarmupConfig {
    #[serde(default = "default_warmup_target")]
    pub warmup: WarmupTargetConfig,
    #[serde(default = "default_db_config")]
    pub database: DbConfig,
    #[serde(default = "default_log_config")]
    pub log: LogConfig,
}

fn default_scheme() -> String {
    "http".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_warmup_target() -> WarmupTargetConfig {
    WarmupTargetConfig {
        scheme: default_scheme(),
        host: None,
        port: None,
    }
}

fn default_db_config() -> DbConfig {
    DbConfig {
        location: "./superset.sqlite".to_string(),
    }
}

fn default_log_config() -> LogConfig {
    LogConfig {
        level: default_log_level(),
        file: None,
    }
}

/// Parses the config file located at ./CacheWarmup.toml, if it exists, with
/// `CACHE_WARMUP__<SECTION>__<KEY>` environment variables layered on top.
///
/// Anything that can't be deserialized falls back to [`CONFIG_DEFAULT`]
pub fn parse_config() -> CacheWarmupConfig {
    let settings = Config::builder()
        .add_source(File::with_name("./CacheWarmup.toml").required(false))
        .add_source(
            Environment::with_prefix("CACHE_WARMUP")
                .prefix_separator("__")
                .separator("__"),
        )
        .build();
    let settings = match settings {
        Ok(s) => s,
        Err(e) => {
            log::error!("Failed to read config sources. Exception is {e}");
            return CONFIG_DEFAULT.clone();
        }
    };
    match settings.try_deserialize::<CacheWarmupConfig>() {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("Failed to parse config, continuing with defaults. Exception is {e}");
            CONFIG_DEFAULT.clone()
        }
    }
}

/// global variable for config, that way it doesn't need to be repeatedly parsed
pub static CACHE_WARMUP_CONFIG: Lazy<CacheWarmupConfig> = Lazy::new(parse_config);

static CONFIG_DEFAULT: Lazy<CacheWarmupConfig> = Lazy::new(|| CacheWarmupConfig {
    warmup: default_warmup_target(),
    database: default_db_config(),
    log: default_log_config(),
});
