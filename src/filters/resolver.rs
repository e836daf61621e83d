use crate::filters::layout::DashboardLayout;
use crate::filters::scopes::DashboardMetadata;
use crate::model::error::metadata_errors::MetadataError;
use crate::model::filters::ExtraFilter;
use crate::model::Dashboard;

/// computes the default filters of `dashboard` that apply to the chart with `chart_id`.
///
/// Filters come out in the order the dashboard stores them: by filter widget, then by filter key within the widget.
/// A filter applies when the chart sits under one of the filter's scope roots in the dashboard layout and the chart
/// isn't listed as immune to it. Values are passed through untouched, empty ones included
pub fn get_dashboard_extra_filters(
    chart_id: u32,
    dashboard: &Dashboard,
) -> Result<Vec<ExtraFilter>, MetadataError> {
    let metadata = DashboardMetadata::parse(dashboard.json_metadata.as_deref())?;
    if metadata.default_filters.is_empty() {
        return Ok(Vec::new());
    }
    let layout = DashboardLayout::parse(dashboard.position_json.as_deref())?;
    let mut filters = Vec::new();
    for (filter_id, values) in metadata.default_filters.iter() {
        for (key, value) in values.iter() {
            let scope = metadata.scope_for(filter_id, key);
            if scope.immune.contains(&chart_id) {
                continue;
            }
            if layout.is_chart_in_scope(chart_id, &scope.scope) {
                filters.push(ExtraFilter::for_key(key, value.clone()));
            }
        }
    }
    Ok(filters)
}
