use serde::Serialize;
use serde_json::{json, Value};
use url::form_urlencoded;

use crate::model::filters::ExtraFilter;
use crate::tags::{ObjectType, Taggable};

/// the path charts are rendered from
pub static EXPLORE_BASE_PATH: &str = "/superset/explore";

/// represents a row in the slices table, along with its owners
#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
pub struct Chart {
    /// 0 when the chart hasn't been saved yet
    pub id: u32,
    pub slice_name: String,
    pub owners: Vec<u32>,
    pub datasource_id: Option<u32>,
    pub datasource_type: Option<String>,
    pub viz_type: Option<String>,
}

impl Chart {
    /// builds the relative path that renders this chart.
    ///
    /// the form data always carries `slice_id`; `extra_filters` is only added when there are filters to apply
    pub fn get_explore_url(&self, extra_filters: &[ExtraFilter]) -> String {
        let mut form_data = json!({ "slice_id": self.id });
        if !extra_filters.is_empty() {
            if let Value::Object(map) = &mut form_data {
                map.insert("extra_filters".to_string(), json!(extra_filters));
            }
        }
        let encoded: String = form_urlencoded::byte_serialize(form_data.to_string().as_bytes()).collect();
        format!("{EXPLORE_BASE_PATH}/?form_data={encoded}")
    }
}

impl Taggable for Chart {
    const OBJECT_TYPE: ObjectType = ObjectType::Chart;

    fn object_id(&self) -> u32 {
        self.id
    }

    fn owner_ids(&self) -> Vec<u32> {
        self.owners.clone()
    }
}
