use rusqlite::Connection;

use crate::model::error::object_errors::ObjectWriteError;
use crate::model::events::ViewEvent;
use crate::model::Dashboard;
use crate::repository::{dashboard_repository, event_repository};
use crate::service::{log_db_error, log_lookup_error};
use crate::tags::service as tag_service;

/// saves the dashboard, its owners, and its chart memberships, tagging it with its type and owners.
///
/// returns the id of the saved dashboard
pub fn save_dashboard(dashboard: &Dashboard, con: &mut Connection) -> Result<u32, ObjectWriteError> {
    let tx = con
        .transaction()
        .map_err(|e| log_db_error("begin transaction", e))?;
    let id = dashboard_repository::create_dashboard(dashboard, &tx).map_err(|e| {
        log_db_error(
            &format!("save dashboard {}", dashboard.dashboard_title),
            e,
        )
    })?;
    let saved = Dashboard {
        id,
        ..dashboard.clone()
    };
    tag_service::after_insert(&saved, &tx)?;
    tx.commit()
        .map_err(|e| log_db_error(&format!("commit dashboard {id}"), e))?;
    Ok(id)
}

/// replaces the dashboard's owners, and its owner tags along with them
pub fn update_dashboard_owners(
    dashboard_id: u32,
    owners: &[u32],
    con: &mut Connection,
) -> Result<(), ObjectWriteError> {
    let tx = con
        .transaction()
        .map_err(|e| log_db_error("begin transaction", e))?;
    let dashboard = find_dashboard(dashboard_id, &tx)?;
    dashboard_repository::set_owners(dashboard_id, owners, &tx)
        .map_err(|e| log_db_error(&format!("set owners of dashboard {dashboard_id}"), e))?;
    let updated = Dashboard {
        owners: owners.to_vec(),
        ..dashboard
    };
    tag_service::after_update(&updated, &tx)?;
    tx.commit()
        .map_err(|e| log_db_error(&format!("commit dashboard {dashboard_id}"), e))
}

/// deletes the dashboard and every tag link on it. Its charts are left alone
pub fn delete_dashboard(dashboard_id: u32, con: &mut Connection) -> Result<(), ObjectWriteError> {
    let tx = con
        .transaction()
        .map_err(|e| log_db_error("begin transaction", e))?;
    let dashboard = find_dashboard(dashboard_id, &tx)?;
    dashboard_repository::delete_dashboard(dashboard_id, &tx)
        .map_err(|e| log_db_error(&format!("delete dashboard {dashboard_id}"), e))?;
    tag_service::after_delete(&dashboard, &tx)?;
    tx.commit().map_err(|e| {
        log_db_error(
            &format!("commit deletion of dashboard {dashboard_id}"),
            e,
        )
    })
}

/// records a user opening a dashboard
pub fn record_dashboard_view(view: &ViewEvent, con: &Connection) -> Result<(), ObjectWriteError> {
    event_repository::create_dashboard_view(view, con).map_err(|e| {
        log_db_error(
            &format!("record view of dashboard {}", view.dashboard_id),
            e,
        )
    })
}

fn find_dashboard(dashboard_id: u32, con: &Connection) -> Result<Dashboard, ObjectWriteError> {
    let mut found = dashboard_repository::get_dashboards_by_ids(&[dashboard_id], con)
        .map_err(|e| log_db_error(&format!("get dashboard {dashboard_id}"), e))?;
    match found.pop() {
        Some(dashboard) => Ok(dashboard),
        None => Err(log_lookup_error(
            &format!("find dashboard {dashboard_id}"),
            rusqlite::Error::QueryReturnedNoRows,
        )),
    }
}
