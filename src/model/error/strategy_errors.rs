use crate::model::error::metadata_errors::MetadataError;
use crate::model::error::url_errors::UrlConfigError;

/// a strategy rejected the parameters it was constructed with
#[derive(PartialEq, Debug)]
pub enum StrategyConstructionError {
    /// unknown, missing, or mistyped keyword arguments
    InvalidParams(String),
    /// `since` isn't a human readable instant we understand
    InvalidSince(String),
    /// `top_n` must be at least 1
    InvalidTopN,
}

/// a strategy failed while enumerating urls
#[derive(PartialEq, Debug)]
pub enum StrategyError {
    Metadata(MetadataError),
    Config(UrlConfigError),
}

impl From<MetadataError> for StrategyError {
    fn from(value: MetadataError) -> Self {
        Self::Metadata(value)
    }
}

impl From<UrlConfigError> for StrategyError {
    fn from(value: UrlConfigError) -> Self {
        Self::Config(value)
    }
}

#[derive(PartialEq, Debug)]
pub enum LoadStrategyError {
    /// no strategy is registered under the requested name
    NotFound(String),
    Construction(StrategyConstructionError),
}
