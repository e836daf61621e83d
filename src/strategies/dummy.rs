use crate::model::error::strategy_errors::{StrategyConstructionError, StrategyError};
use crate::strategies::params::{parse_params, DummyParams, StrategyParams};
use crate::strategies::{Strategy, WarmupContext};

/// warms every chart in the store, without any dashboard filters
#[derive(Debug, Default)]
pub struct Dummy;

impl Dummy {
    pub const NAME: &'static str = "dummy";
    pub const CLASS_NAME: &'static str = "Dummy";

    pub fn from_params(params: &StrategyParams) -> Result<Box<dyn Strategy>, StrategyConstructionError> {
        let _: DummyParams = parse_params(Self::NAME, params)?;
        Ok(Box::new(Dummy))
    }
}

impl Strategy for Dummy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn get_urls(&self, ctx: &WarmupContext) -> Result<Vec<String>, StrategyError> {
        let builder = ctx.url_builder()?;
        let charts = ctx.store.list_all_charts()?;
        Ok(charts.iter().map(|chart| builder.build(chart, &[])).collect())
    }
}
