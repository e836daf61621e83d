use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::filters::layout::ROOT_ID;
use crate::model::error::metadata_errors::MetadataError;

/// where one filter key of one filter widget applies
#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct FilterScope {
    /// layout node ids whose subtrees the filter applies to
    #[serde(default = "root_scope")]
    pub scope: Vec<String>,
    /// charts inside the scope that opt out of the filter
    #[serde(default)]
    pub immune: Vec<u32>,
}

impl Default for FilterScope {
    fn default() -> Self {
        Self {
            scope: root_scope(),
            immune: Vec::new(),
        }
    }
}

fn root_scope() -> Vec<String> {
    vec![ROOT_ID.to_string()]
}

/// filter widget id -> filter key -> value, in the order the dashboard stores them
pub type DefaultFilters = IndexMap<String, IndexMap<String, Value>>;

/// filter widget id -> filter key -> scope
pub type FilterScopes = HashMap<String, HashMap<String, FilterScope>>;

#[derive(Deserialize, Default)]
struct RawDashboardMetadata {
    #[serde(default)]
    default_filters: Value,
    #[serde(default)]
    filter_scopes: Option<FilterScopes>,
}

/// the filter related parts of a dashboard's `json_metadata`
#[derive(Debug, Default, PartialEq)]
pub struct DashboardMetadata {
    pub default_filters: DefaultFilters,
    pub filter_scopes: FilterScopes,
}

impl DashboardMetadata {
    /// parses a dashboard's metadata json. Blank or missing metadata has no filters.
    ///
    /// `default_filters` is accepted either as an object or as a string holding json, which is how the platform
    /// has historically stored it
    pub fn parse(json_metadata: Option<&str>) -> Result<Self, MetadataError> {
        let raw: RawDashboardMetadata = match json_metadata.map(str::trim) {
            None | Some("") | Some("null") => RawDashboardMetadata::default(),
            Some(raw) => serde_json::from_str(raw)
                .map_err(|e| MetadataError::MalformedJson(format!("json_metadata: {e}")))?,
        };
        let default_filters: DefaultFilters = match raw.default_filters {
            Value::Null => IndexMap::new(),
            Value::String(encoded) if encoded.trim().is_empty() => IndexMap::new(),
            Value::String(encoded) => serde_json::from_str::<Option<DefaultFilters>>(&encoded)
                .map_err(|e| MetadataError::MalformedJson(format!("default_filters: {e}")))?
                .unwrap_or_default(),
            other => serde_json::from_value(other)
                .map_err(|e| MetadataError::MalformedJson(format!("default_filters: {e}")))?,
        };
        Ok(Self {
            default_filters,
            filter_scopes: raw.filter_scopes.unwrap_or_default(),
        })
    }

    /// the scope of `filter_key` on `filter_id`, defaulting to the whole dashboard with nothing immune
    pub fn scope_for(&self, filter_id: &str, filter_key: &str) -> FilterScope {
        self.filter_scopes
            .get(filter_id)
            .and_then(|keys| keys.get(filter_key))
            .cloned()
            .unwrap_or_default()
    }
}
