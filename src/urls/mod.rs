use url::Url;

use crate::config::WarmupTargetConfig;
use crate::model::error::url_errors::UrlConfigError;
use crate::model::filters::ExtraFilter;
use crate::model::Chart;

/// turns charts into absolute urls on the configured warmup target
#[derive(Debug, Clone, PartialEq)]
pub struct UrlBuilder {
    base: String,
}

impl UrlBuilder {
    /// fails if the host or port isn't configured, or if they don't make a valid url together with the scheme
    pub fn from_config(config: &WarmupTargetConfig) -> Result<UrlBuilder, UrlConfigError> {
        let host = match config.host.as_deref().map(str::trim) {
            Some(host) if !host.is_empty() => host,
            _ => {
                log::error!("warmup.host is not configured, can't build chart urls");
                return Err(UrlConfigError::MissingHost);
            }
        };
        let Some(port) = config.port else {
            log::error!("warmup.port is not configured, can't build chart urls");
            return Err(UrlConfigError::MissingPort);
        };
        let base = format!("{}://{host}:{port}", config.scheme);
        match Url::parse(&base) {
            Ok(parsed) if parsed.host_str().is_some() => Ok(UrlBuilder { base }),
            Ok(_) => {
                log::error!("Warmup target {base} has no host");
                Err(UrlConfigError::InvalidUrl(base))
            }
            Err(e) => {
                log::error!("Warmup target {base} is not a valid url: {e}");
                Err(UrlConfigError::InvalidUrl(base))
            }
        }
    }

    /// `<scheme>://<host>:<port>` with no trailing slash
    pub fn base(&self) -> &str {
        &self.base
    }

    /// the absolute url that renders `chart` with `extra_filters` applied
    pub fn build(&self, chart: &Chart, extra_filters: &[ExtraFilter]) -> String {
        format!("{}{}", self.base, chart.get_explore_url(extra_filters))
    }
}
