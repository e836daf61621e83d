use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::model::error::metadata_errors::MetadataError;

/// the id that stands for the whole dashboard in filter scopes
pub static ROOT_ID: &str = "ROOT_ID";

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum LayoutNodeKind {
    Root,
    Grid,
    Tabs,
    Tab,
    Row,
    Column,
    Chart,
    Header,
    Markdown,
    Divider,
    Other(String),
}

impl From<&str> for LayoutNodeKind {
    fn from(value: &str) -> Self {
        match value {
            "ROOT" => Self::Root,
            "GRID" => Self::Grid,
            "TABS" => Self::Tabs,
            "TAB" => Self::Tab,
            "ROW" => Self::Row,
            "COLUMN" => Self::Column,
            "CHART" => Self::Chart,
            "HEADER" => Self::Header,
            "MARKDOWN" => Self::Markdown,
            "DIVIDER" => Self::Divider,
            other => Self::Other(other.to_string()),
        }
    }
}

/// one positioned widget of a dashboard
#[derive(Debug, PartialEq, Clone)]
pub struct LayoutNode {
    pub kind: LayoutNodeKind,
    pub id: String,
    pub children: Vec<String>,
    /// only set on chart nodes
    pub chart_id: Option<u32>,
}

#[derive(Deserialize)]
struct RawLayoutNode {
    #[serde(rename = "type")]
    kind: String,
    id: String,
    #[serde(default)]
    children: Vec<String>,
    #[serde(default)]
    meta: Map<String, Value>,
}

impl From<RawLayoutNode> for LayoutNode {
    fn from(raw: RawLayoutNode) -> Self {
        let kind = LayoutNodeKind::from(raw.kind.as_str());
        let chart_id = raw
            .meta
            .get("chartId")
            .and_then(Value::as_u64)
            .and_then(|id| u32::try_from(id).ok());
        Self {
            kind,
            id: raw.id,
            children: raw.children,
            chart_id,
        }
    }
}

/// the parsed `position_json` of a dashboard
#[derive(Debug, Default, PartialEq)]
pub struct DashboardLayout {
    nodes: HashMap<String, LayoutNode>,
}

impl DashboardLayout {
    /// parses a dashboard's layout json. Blank or missing layouts are empty.
    ///
    /// Entries that aren't objects (like `DASHBOARD_VERSION_KEY`) are skipped, but an object that isn't a valid
    /// node fails the whole parse
    pub fn parse(position_json: Option<&str>) -> Result<Self, MetadataError> {
        let raw = match position_json.map(str::trim) {
            None | Some("") | Some("null") => return Ok(Self::default()),
            Some(raw) => raw,
        };
        let entries: Map<String, Value> = serde_json::from_str(raw)
            .map_err(|e| MetadataError::MalformedJson(format!("position_json: {e}")))?;
        let mut nodes = HashMap::new();
        for (key, value) in entries {
            if !value.is_object() {
                continue;
            }
            let node: RawLayoutNode = serde_json::from_value(value).map_err(|e| {
                MetadataError::MalformedJson(format!("position_json node {key}: {e}"))
            })?;
            nodes.insert(key, LayoutNode::from(node));
        }
        Ok(Self { nodes })
    }

    pub fn get(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.get(id)
    }

    /// ids of `root` and every node reachable from it through `children`. Unknown roots give an empty set
    pub fn subtree(&self, root: &str) -> HashSet<&str> {
        let mut visited: HashSet<&str> = HashSet::new();
        let Some((root_id, _)) = self.nodes.get_key_value(root) else {
            return visited;
        };
        let mut pending: Vec<&str> = vec![root_id.as_str()];
        while let Some(id) = pending.pop() {
            // cycles end here
            if !visited.insert(id) {
                continue;
            }
            if let Some(node) = self.nodes.get(id) {
                pending.extend(node.children.iter().map(String::as_str));
            }
        }
        visited
    }

    /// ids of the chart nodes that render `chart_id`
    pub fn chart_node_ids(&self, chart_id: u32) -> Vec<&str> {
        self.nodes
            .values()
            .filter(|node| node.kind == LayoutNodeKind::Chart && node.chart_id == Some(chart_id))
            .map(|node| node.id.as_str())
            .collect()
    }

    /// whether `chart_id` sits under any of `scope` ([`ROOT_ID`] covers the whole dashboard)
    pub fn is_chart_in_scope(&self, chart_id: u32, scope: &[String]) -> bool {
        if scope.iter().any(|root| root == ROOT_ID) {
            return true;
        }
        let chart_nodes = self.chart_node_ids(chart_id);
        if chart_nodes.is_empty() {
            return false;
        }
        scope.iter().any(|root| {
            let subtree = self.subtree(root);
            chart_nodes.iter().any(|id| subtree.contains(id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static LAYOUT: &str = r#"{
        "DASHBOARD_VERSION_KEY": "v2",
        "ROOT_ID": {"type": "ROOT", "id": "ROOT_ID", "children": ["GRID_ID"]},
        "GRID_ID": {"type": "GRID", "id": "GRID_ID", "children": ["ROW-1", "ROW-2"]},
        "ROW-1": {"type": "ROW", "id": "ROW-1", "children": ["CHART-1"], "meta": {"background": "BACKGROUND_TRANSPARENT"}},
        "ROW-2": {"type": "ROW", "id": "ROW-2", "children": ["CHART-2"]},
        "CHART-1": {"type": "CHART", "id": "CHART-1", "children": [], "meta": {"chartId": 1, "width": 4}},
        "CHART-2": {"type": "CHART", "id": "CHART-2", "children": [], "meta": {"chartId": 2}}
    }"#;

    #[test]
    fn parse_skips_version_key() {
        let layout = DashboardLayout::parse(Some(LAYOUT)).unwrap();
        assert!(layout.get("DASHBOARD_VERSION_KEY").is_none());
        assert_eq!(
            Some(&LayoutNode {
                kind: LayoutNodeKind::Chart,
                id: "CHART-1".to_string(),
                children: vec![],
                chart_id: Some(1),
            }),
            layout.get("CHART-1")
        );
    }

    #[test]
    fn parse_blank_layout_is_empty() {
        assert_eq!(DashboardLayout::default(), DashboardLayout::parse(None).unwrap());
        assert_eq!(DashboardLayout::default(), DashboardLayout::parse(Some("  ")).unwrap());
    }

    #[test]
    fn parse_rejects_invalid_json() {
        let res = DashboardLayout::parse(Some("{not json"));
        assert!(matches!(res, Err(MetadataError::MalformedJson(_))));
    }

    #[test]
    fn parse_rejects_node_without_type() {
        let res = DashboardLayout::parse(Some(r#"{"ROW-1": {"id": "ROW-1"}}"#));
        assert!(matches!(res, Err(MetadataError::MalformedJson(_))));
    }

    #[test]
    fn subtree_follows_children() {
        let layout = DashboardLayout::parse(Some(LAYOUT)).unwrap();
        let subtree = layout.subtree("ROW-1");
        assert_eq!(HashSet::from(["ROW-1", "CHART-1"]), subtree);
    }

    #[test]
    fn subtree_of_unknown_node_is_empty() {
        let layout = DashboardLayout::parse(Some(LAYOUT)).unwrap();
        assert!(layout.subtree("ROW-9").is_empty());
    }

    #[test]
    fn subtree_stops_on_cycles() {
        let layout = DashboardLayout::parse(Some(
            r#"{
                "ROW-1": {"type": "ROW", "id": "ROW-1", "children": ["ROW-2"]},
                "ROW-2": {"type": "ROW", "id": "ROW-2", "children": ["ROW-1", "CHART-1"]},
                "CHART-1": {"type": "CHART", "id": "CHART-1", "meta": {"chartId": 1}}
            }"#,
        ))
        .unwrap();
        assert_eq!(HashSet::from(["ROW-1", "ROW-2", "CHART-1"]), layout.subtree("ROW-1"));
        assert!(layout.is_chart_in_scope(1, &["ROW-2".to_string()]));
    }

    #[test]
    fn is_chart_in_scope_checks_subtrees() {
        let layout = DashboardLayout::parse(Some(LAYOUT)).unwrap();
        assert!(layout.is_chart_in_scope(1, &["ROW-1".to_string()]));
        assert!(!layout.is_chart_in_scope(2, &["ROW-1".to_string()]));
        assert!(layout.is_chart_in_scope(2, &["ROW-1".to_string(), "ROW-2".to_string()]));
        assert!(!layout.is_chart_in_scope(3, &["GRID_ID".to_string()]));
    }

    #[test]
    fn root_scope_covers_charts_missing_from_layout() {
        let layout = DashboardLayout::default();
        assert!(layout.is_chart_in_scope(42, &[ROOT_ID.to_string()]));
    }
}
