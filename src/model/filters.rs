use serde::Serialize;
use serde_json::Value;

/// the filter key reserved for a dashboard's time range
pub static TIME_RANGE_KEY: &str = "__time_range";

#[derive(Serialize, Debug, PartialEq, Eq, Copy, Clone)]
pub enum FilterOperator {
    #[serde(rename = "in")]
    In,
    #[serde(rename = "==")]
    Equals,
}

/// a filter added on top of a chart's own query when it's rendered, `{col, op, val}`
#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct ExtraFilter {
    pub col: String,
    pub op: FilterOperator,
    pub val: Value,
}

impl ExtraFilter {
    /// `__time_range` is compared with `==`, every other column uses `in`
    pub fn for_key(key: &str, val: Value) -> Self {
        let op = if key == TIME_RANGE_KEY {
            FilterOperator::Equals
        } else {
            FilterOperator::In
        };
        Self {
            col: key.to_string(),
            op,
            val,
        }
    }
}
