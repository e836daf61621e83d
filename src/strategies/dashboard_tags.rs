use crate::model::error::strategy_errors::{StrategyConstructionError, StrategyError};
use crate::strategies::params::{parse_params, DashboardTagsParams, StrategyParams};
use crate::strategies::{Strategy, WarmupContext};
use crate::tags::ObjectType;

/// warms the charts of every dashboard tagged with one of `tags`, then every chart tagged with one of them.
/// Dashboard default filters are not applied, and nothing is deduplicated
#[derive(Debug, PartialEq)]
pub struct DashboardTags {
    tags: Vec<String>,
}

impl DashboardTags {
    pub const NAME: &'static str = "dashboard_tags";
    pub const CLASS_NAME: &'static str = "DashboardTags";

    pub fn new(tags: Vec<String>) -> Self {
        Self { tags }
    }

    pub fn from_params(params: &StrategyParams) -> Result<Box<dyn Strategy>, StrategyConstructionError> {
        let parsed: DashboardTagsParams = parse_params(Self::NAME, params)?;
        Ok(Box::new(Self::new(parsed.tags)))
    }
}

fn ids_of(objects: Vec<(ObjectType, u32)>, object_type: ObjectType) -> Vec<u32> {
    objects
        .into_iter()
        .filter(|(kind, _)| *kind == object_type)
        .map(|(_, id)| id)
        .collect()
}

impl Strategy for DashboardTags {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn get_urls(&self, ctx: &WarmupContext) -> Result<Vec<String>, StrategyError> {
        if self.tags.is_empty() {
            return Ok(Vec::new());
        }
        let builder = ctx.url_builder()?;
        let mut urls = Vec::new();

        let tagged_dashboards = ctx
            .store
            .tagged_objects_for_tags(&self.tags, &[ObjectType::Dashboard])?;
        let dashboards = ctx
            .store
            .list_dashboards_by_id(&ids_of(tagged_dashboards, ObjectType::Dashboard))?;
        for dashboard in &dashboards {
            urls.extend(dashboard.slices.iter().map(|chart| builder.build(chart, &[])));
        }

        let tagged_charts = ctx.store.tagged_objects_for_tags(&self.tags, &[ObjectType::Chart])?;
        let charts = ctx
            .store
            .list_charts_by_id(&ids_of(tagged_charts, ObjectType::Chart))?;
        urls.extend(charts.iter().map(|chart| builder.build(chart, &[])));
        Ok(urls)
    }
}
