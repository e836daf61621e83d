use serde_json::json;

use super::{params, target, url_for};
use crate::model::error::strategy_errors::StrategyConstructionError;
use crate::model::Dashboard;
use crate::repository::{open_connection, SqliteMetadataStore};
use crate::strategies::{DashboardTags, Strategy, WarmupContext};
use crate::tags::ObjectType;
use crate::test::{
    cleanup, create_chart_db_entry, create_custom_tag, create_dashboard_db_entry, dashboard,
    refresh_db,
};

fn get_urls(strategy: &DashboardTags) -> Vec<String> {
    let con = open_connection();
    let store = SqliteMetadataStore::new(&con);
    let target = target();
    let urls = strategy
        .get_urls(&WarmupContext { store: &store, target: &target })
        .unwrap();
    drop(store);
    con.close().unwrap();
    urls
}

fn tags(names: &[&str]) -> DashboardTags {
    DashboardTags::new(names.iter().map(|it| it.to_string()).collect())
}

#[test]
fn empty_tags_give_no_urls() {
    let strategy = DashboardTags::from_params(&params(json!({}))).unwrap();
    // no database exists for this thread, so this only passes if the store is never touched
    let con = rusqlite::Connection::open_in_memory().unwrap();
    let store = SqliteMetadataStore::new(&con);
    let target = target();
    let urls = strategy
        .get_urls(&WarmupContext { store: &store, target: &target })
        .unwrap();
    assert!(urls.is_empty());
}

#[test]
fn tag_without_objects() {
    refresh_db();
    create_chart_db_entry("chart", vec![]);
    create_custom_tag("tag1", &[]);
    assert!(get_urls(&tags(&["tag1"])).is_empty());
    cleanup();
}

#[test]
fn tagged_dashboard_expands_to_its_charts() {
    refresh_db();
    let c1 = create_chart_db_entry("c1", vec![]);
    let c2 = create_chart_db_entry("c2", vec![]);
    let metadata = json!({"default_filters": {"1": {"region": ["EU"]}}}).to_string();
    let saved = create_dashboard_db_entry(Dashboard {
        json_metadata: Some(metadata),
        ..dashboard("d", vec![], vec![c1.clone(), c2.clone()])
    });
    create_custom_tag("tag1", &[(ObjectType::Dashboard, saved.id)]);
    // default filters are not applied by this strategy
    assert_eq!(vec![url_for(&c1), url_for(&c2)], get_urls(&tags(&["tag1"])));
    cleanup();
}

#[test]
fn dashboards_come_before_charts_without_deduplication() {
    refresh_db();
    let c1 = create_chart_db_entry("c1", vec![]);
    let c2 = create_chart_db_entry("c2", vec![]);
    let c3 = create_chart_db_entry("c3", vec![]);
    let saved = create_dashboard_db_entry(dashboard("d", vec![], vec![c1.clone()]));
    create_custom_tag("tag1", &[(ObjectType::Chart, c3.id), (ObjectType::Dashboard, saved.id)]);
    create_custom_tag("tag2", &[(ObjectType::Chart, c1.id), (ObjectType::Query, c2.id)]);
    let urls = get_urls(&tags(&["tag1", "tag2"]));
    assert_eq!(vec![url_for(&c1), url_for(&c3), url_for(&c1)], urls);
    cleanup();
}

#[test]
fn unknown_tags_match_nothing() {
    refresh_db();
    let chart = create_chart_db_entry("c1", vec![]);
    create_custom_tag("tag1", &[(ObjectType::Chart, chart.id)]);
    assert!(get_urls(&tags(&["other"])).is_empty());
    cleanup();
}

#[test]
fn rejects_unknown_params() {
    let res = DashboardTags::from_params(&params(json!({"tags": ["a"], "top_n": 3})));
    assert!(matches!(res, Err(StrategyConstructionError::InvalidParams(_))));
}
