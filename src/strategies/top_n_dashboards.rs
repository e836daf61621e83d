use chrono::{NaiveDateTime, Utc};

use crate::filters::get_dashboard_extra_filters;
use crate::model::error::strategy_errors::{StrategyConstructionError, StrategyError};
use crate::strategies::params::{parse_params, StrategyParams, TopNDashboardsParams};
use crate::strategies::since::parse_human_datetime;
use crate::strategies::{Strategy, WarmupContext};

/// warms every chart of the `top_n` most viewed dashboards since `since`, with each dashboard's default filters
/// applied to its charts.
///
/// A chart that's on two of the dashboards is warmed once per dashboard
#[derive(Debug, PartialEq)]
pub struct TopNDashboards {
    top_n: u32,
    since: NaiveDateTime,
}

impl TopNDashboards {
    pub const NAME: &'static str = "top_n_dashboards";
    pub const CLASS_NAME: &'static str = "TopNDashboards";

    /// `since` is resolved against `now` right away, so the window doesn't move while the strategy runs
    pub fn new(top_n: u32, since: &str, now: NaiveDateTime) -> Result<Self, StrategyConstructionError> {
        if top_n == 0 {
            log::error!("top_n must be at least 1");
            return Err(StrategyConstructionError::InvalidTopN);
        }
        let since = parse_human_datetime(since, now).map_err(|e| {
            log::error!("Failed to parse since for {}: {e:?}", Self::NAME);
            e
        })?;
        Ok(Self { top_n, since })
    }

    pub fn from_params(params: &StrategyParams) -> Result<Box<dyn Strategy>, StrategyConstructionError> {
        let parsed: TopNDashboardsParams = parse_params(Self::NAME, params)?;
        let strategy = Self::new(parsed.top_n, &parsed.since, Utc::now().naive_utc())?;
        Ok(Box::new(strategy))
    }

    pub fn since(&self) -> NaiveDateTime {
        self.since
    }
}

impl Strategy for TopNDashboards {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn get_urls(&self, ctx: &WarmupContext) -> Result<Vec<String>, StrategyError> {
        let builder = ctx.url_builder()?;
        let dashboard_ids = ctx.store.top_dashboard_ids(self.since, self.top_n)?;
        let dashboards = ctx.store.list_dashboards_by_id(&dashboard_ids)?;
        let mut urls = Vec::new();
        for dashboard in &dashboards {
            for chart in &dashboard.slices {
                let filters = get_dashboard_extra_filters(chart.id, dashboard).map_err(|e| {
                    log::error!(
                        "Failed to resolve filters of dashboard {} for chart {}: {e:?}",
                        dashboard.id,
                        chart.id
                    );
                    e
                })?;
                urls.push(builder.build(chart, &filters));
            }
        }
        Ok(urls)
    }
}
