use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::model::error::strategy_errors::StrategyConstructionError;

/// the keyword arguments a strategy is constructed with
pub type StrategyParams = Map<String, Value>;

/// deserializes `params` into the parameter struct of `strategy`, logging why it was rejected if it doesn't fit
pub fn parse_params<T: DeserializeOwned>(
    strategy: &str,
    params: &StrategyParams,
) -> Result<T, StrategyConstructionError> {
    serde_json::from_value(Value::Object(params.clone())).map_err(|e| {
        log::error!("Invalid parameters {params:?} for strategy {strategy}: {e}");
        StrategyConstructionError::InvalidParams(e.to_string())
    })
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DummyParams {}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TopNDashboardsParams {
    #[serde(default = "default_top_n")]
    pub top_n: u32,
    #[serde(default = "default_since")]
    pub since: String,
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DashboardTagsParams {
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_top_n() -> u32 {
    5
}

fn default_since() -> String {
    "7 days ago".to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn params(value: Value) -> StrategyParams {
        match value {
            Value::Object(map) => map,
            _ => panic!("params must be an object"),
        }
    }

    #[test]
    fn top_n_defaults() {
        let parsed: TopNDashboardsParams = parse_params("top_n_dashboards", &Map::new()).unwrap();
        assert_eq!(
            TopNDashboardsParams {
                top_n: 5,
                since: "7 days ago".to_string(),
            },
            parsed
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let res = parse_params::<DummyParams>("dummy", &params(json!({"top_n": 3})));
        assert!(matches!(res, Err(StrategyConstructionError::InvalidParams(_))));
        let res = parse_params::<DashboardTagsParams>("dashboard_tags", &params(json!({"tag": ["a"]})));
        assert!(matches!(res, Err(StrategyConstructionError::InvalidParams(_))));
    }

    #[test]
    fn mistyped_fields_are_rejected() {
        let res = parse_params::<TopNDashboardsParams>("top_n_dashboards", &params(json!({"top_n": -1})));
        assert!(matches!(res, Err(StrategyConstructionError::InvalidParams(_))));
        let res = parse_params::<DashboardTagsParams>("dashboard_tags", &params(json!({"tags": "a"})));
        assert!(matches!(res, Err(StrategyConstructionError::InvalidParams(_))));
    }
}
