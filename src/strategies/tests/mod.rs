mod dashboard_tags;

use serde_json::Value;

use crate::config::WarmupTargetConfig;
use crate::model::Chart;
use crate::strategies::StrategyParams;

fn target() -> WarmupTargetConfig {
    WarmupTargetConfig {
        scheme: "http".to_string(),
        host: Some("h".to_string()),
        port: Some(80),
    }
}

fn url_for(chart: &Chart) -> String {
    format!("http://h:80{}", chart.get_explore_url(&[]))
}

fn params(value: Value) -> StrategyParams {
    match value {
        Value::Object(map) => map,
        _ => panic!("params must be an object"),
    }
}
