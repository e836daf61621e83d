use serde::Serialize;

use crate::model::chart::Chart;
use crate::tags::{ObjectType, Taggable};

/// represents a row in the dashboards table, with its member charts already loaded
#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
pub struct Dashboard {
    /// 0 when the dashboard hasn't been saved yet
    pub id: u32,
    pub dashboard_title: String,
    pub owners: Vec<u32>,
    /// raw layout json, a map of layout node id to node
    pub position_json: Option<String>,
    /// raw metadata json, holds `default_filters` and `filter_scopes`
    pub json_metadata: Option<String>,
    /// in membership order
    pub slices: Vec<Chart>,
}

impl Taggable for Dashboard {
    const OBJECT_TYPE: ObjectType = ObjectType::Dashboard;

    fn object_id(&self) -> u32 {
        self.id
    }

    fn owner_ids(&self) -> Vec<u32> {
        self.owners.clone()
    }
}
