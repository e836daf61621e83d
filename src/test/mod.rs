use std::fs::remove_file;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::model::events::ViewEvent;
use crate::model::{Chart, Dashboard};
use crate::repository::{chart_repository, dashboard_repository, event_repository, initialize_db, open_connection};
use crate::tags::repository as tag_repository;
use crate::tags::{ObjectType, TagType};

#[cfg(test)]
pub fn refresh_db() {
    let thread_name = current_thread_name();
    remove_file(Path::new(format!("{thread_name}.sqlite").as_str())).unwrap_or(());
    initialize_db().unwrap();
}

#[cfg(test)]
pub fn current_thread_name() -> String {
    let current_thread = std::thread::current();
    current_thread.name().unwrap().to_string()
}

#[cfg(test)]
pub fn cleanup() {
    let thread_name = current_thread_name();
    remove_file(Path::new(format!("{thread_name}.sqlite").as_str())).unwrap_or(());
}

/// an unsaved chart with no datasource
#[cfg(test)]
pub fn chart(name: &str, owners: Vec<u32>) -> Chart {
    Chart {
        id: 0,
        slice_name: name.to_string(),
        owners,
        datasource_id: Some(1),
        datasource_type: Some("table".to_string()),
        viz_type: Some("table".to_string()),
    }
}

/// an unsaved dashboard with no layout or metadata
#[cfg(test)]
pub fn dashboard(title: &str, owners: Vec<u32>, slices: Vec<Chart>) -> Dashboard {
    Dashboard {
        id: 0,
        dashboard_title: title.to_string(),
        owners,
        position_json: None,
        json_metadata: None,
        slices,
    }
}

/// saves the chart without firing any tag hooks, returning it with its new id
#[cfg(test)]
pub fn create_chart_db_entry(name: &str, owners: Vec<u32>) -> Chart {
    let connection = open_connection();
    let unsaved = chart(name, owners);
    let id = chart_repository::create_chart(&unsaved, &connection).unwrap();
    connection.close().unwrap();
    Chart { id, ..unsaved }
}

/// saves the dashboard without firing any tag hooks, returning it with its new id
#[cfg(test)]
pub fn create_dashboard_db_entry(dashboard: Dashboard) -> Dashboard {
    let connection = open_connection();
    let id = dashboard_repository::create_dashboard(&dashboard, &connection).unwrap();
    connection.close().unwrap();
    Dashboard { id, ..dashboard }
}

/// records `count` views of the dashboard, all at `dttm`
#[cfg(test)]
pub fn create_dashboard_views(dashboard_id: u32, count: u32, dttm: NaiveDateTime) {
    let connection = open_connection();
    for user in 0..count {
        event_repository::create_dashboard_view(
            &ViewEvent {
                dashboard_id,
                user_id: Some(user),
                dttm,
            },
            &connection,
        )
        .unwrap();
    }
    connection.close().unwrap();
}

/// creates a custom tag with `name` and links it to every one of `objects`, in order
#[cfg(test)]
pub fn create_custom_tag(name: &str, objects: &[(ObjectType, u32)]) -> u32 {
    let connection = open_connection();
    let tag = tag_repository::create_tag(name, TagType::Custom, &connection).unwrap();
    for (object_type, object_id) in objects {
        tag_repository::add_tagged_object(
            tag.id,
            *object_type,
            *object_id,
            chrono::Utc::now().naive_utc(),
            &connection,
        )
        .unwrap();
    }
    connection.close().unwrap();
    tag.id
}
