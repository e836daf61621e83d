//! The strategies that decide which chart urls a warmup run fetches, and the registry they're looked up in.

use once_cell::sync::OnceCell;

use crate::config::WarmupTargetConfig;
use crate::model::error::strategy_errors::{LoadStrategyError, StrategyConstructionError, StrategyError};
use crate::repository::MetadataStore;
use crate::urls::UrlBuilder;

pub mod dashboard_tags;
pub mod dummy;
pub mod params;
pub mod since;
pub mod top_n_dashboards;

#[cfg(test)]
mod tests;

pub use dashboard_tags::DashboardTags;
pub use dummy::Dummy;
pub use params::StrategyParams;
pub use top_n_dashboards::TopNDashboards;

/// everything a strategy can read while it enumerates urls
pub struct WarmupContext<'a> {
    pub store: &'a dyn MetadataStore,
    pub target: &'a WarmupTargetConfig,
}

impl WarmupContext<'_> {
    pub fn url_builder(&self) -> Result<UrlBuilder, StrategyError> {
        Ok(UrlBuilder::from_config(self.target)?)
    }
}

pub trait Strategy {
    /// the snake case name the strategy is registered under
    fn name(&self) -> &'static str;

    /// the absolute urls to warm, in the order they should be fetched
    fn get_urls(&self, ctx: &WarmupContext) -> Result<Vec<String>, StrategyError>;
}

/// builds a strategy from its keyword arguments
pub type StrategyFactory =
    fn(&StrategyParams) -> Result<Box<dyn Strategy>, StrategyConstructionError>;

#[derive(Clone, Copy)]
pub struct StrategyDescriptor {
    /// snake case name, e.g. `top_n_dashboards`
    pub name: &'static str,
    /// class style name, e.g. `TopNDashboards`
    pub class_name: &'static str,
    pub factory: StrategyFactory,
}

impl StrategyDescriptor {
    fn matches(&self, name: &str) -> bool {
        self.name == name || self.class_name == name
    }
}

pub struct StrategyRegistry {
    descriptors: Vec<StrategyDescriptor>,
}

impl StrategyRegistry {
    /// `dummy`, `top_n_dashboards`, and `dashboard_tags`
    pub fn builtin() -> Self {
        Self {
            descriptors: vec![
                StrategyDescriptor {
                    name: Dummy::NAME,
                    class_name: Dummy::CLASS_NAME,
                    factory: Dummy::from_params,
                },
                StrategyDescriptor {
                    name: TopNDashboards::NAME,
                    class_name: TopNDashboards::CLASS_NAME,
                    factory: TopNDashboards::from_params,
                },
                StrategyDescriptor {
                    name: DashboardTags::NAME,
                    class_name: DashboardTags::CLASS_NAME,
                    factory: DashboardTags::from_params,
                },
            ],
        }
    }

    /// the built in strategies plus `extra`. An extra strategy registered under a built in name replaces it
    pub fn with_extra(extra: Vec<StrategyDescriptor>) -> Self {
        let mut registry = Self::builtin();
        registry.descriptors.extend(extra);
        registry
    }

    /// looks a strategy up by either of its names. Later registrations win
    pub fn find(&self, name: &str) -> Option<&StrategyDescriptor> {
        self.descriptors.iter().rev().find(|it| it.matches(name))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.descriptors.iter().map(|it| it.name).collect()
    }

    /// finds the strategy registered as `name` and constructs it with `params`
    pub fn load(
        &self,
        name: &str,
        params: &StrategyParams,
    ) -> Result<Box<dyn Strategy>, LoadStrategyError> {
        let descriptor = self
            .find(name)
            .ok_or_else(|| LoadStrategyError::NotFound(name.to_string()))?;
        (descriptor.factory)(params).map_err(LoadStrategyError::Construction)
    }
}

static STRATEGY_REGISTRY: OnceCell<StrategyRegistry> = OnceCell::new();

/// sets up the process wide registry with the built in strategies plus `extra`. Only the first call (or the first
/// [`strategy_registry`] lookup) has any effect; returns false if the registry was already set up
pub fn install_strategy_registry(extra: Vec<StrategyDescriptor>) -> bool {
    let installed = STRATEGY_REGISTRY.set(StrategyRegistry::with_extra(extra)).is_ok();
    if !installed {
        log::warn!("Strategy registry was already installed, ignoring extra strategies");
    }
    installed
}

/// the process wide registry, falling back to only the built in strategies if none was installed
pub fn strategy_registry() -> &'static StrategyRegistry {
    STRATEGY_REGISTRY.get_or_init(StrategyRegistry::builtin)
}
