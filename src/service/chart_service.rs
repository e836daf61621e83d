use rusqlite::Connection;

use crate::model::error::object_errors::ObjectWriteError;
use crate::model::Chart;
use crate::repository::chart_repository;
use crate::service::{log_db_error, log_lookup_error};
use crate::tags::service as tag_service;

/// saves the chart and its owners, tagging it with its type and owners.
///
/// returns the id of the saved chart
pub fn save_chart(chart: &Chart, con: &mut Connection) -> Result<u32, ObjectWriteError> {
    let tx = con
        .transaction()
        .map_err(|e| log_db_error("begin transaction", e))?;
    let id = chart_repository::create_chart(chart, &tx)
        .map_err(|e| log_db_error(&format!("save chart {}", chart.slice_name), e))?;
    let saved = Chart {
        id,
        ..chart.clone()
    };
    tag_service::after_insert(&saved, &tx)?;
    tx.commit()
        .map_err(|e| log_db_error(&format!("commit chart {id}"), e))?;
    Ok(id)
}

/// replaces the chart's owners, and its owner tags along with them
pub fn update_chart_owners(
    chart_id: u32,
    owners: &[u32],
    con: &mut Connection,
) -> Result<(), ObjectWriteError> {
    let tx = con
        .transaction()
        .map_err(|e| log_db_error("begin transaction", e))?;
    let chart = chart_repository::get_chart(chart_id, &tx)
        .map_err(|e| log_lookup_error(&format!("update owners of chart {chart_id}"), e))?;
    chart_repository::set_owners(chart_id, owners, &tx)
        .map_err(|e| log_db_error(&format!("set owners of chart {chart_id}"), e))?;
    let updated = Chart {
        owners: owners.to_vec(),
        ..chart
    };
    tag_service::after_update(&updated, &tx)?;
    tx.commit()
        .map_err(|e| log_db_error(&format!("commit chart {chart_id}"), e))
}

/// deletes the chart and every tag link on it
pub fn delete_chart(chart_id: u32, con: &mut Connection) -> Result<(), ObjectWriteError> {
    let tx = con
        .transaction()
        .map_err(|e| log_db_error("begin transaction", e))?;
    let chart = chart_repository::get_chart(chart_id, &tx)
        .map_err(|e| log_lookup_error(&format!("delete chart {chart_id}"), e))?;
    chart_repository::delete_chart(chart_id, &tx)
        .map_err(|e| log_db_error(&format!("delete chart {chart_id}"), e))?;
    tag_service::after_delete(&chart, &tx)?;
    tx.commit()
        .map_err(|e| log_db_error(&format!("commit deletion of chart {chart_id}"), e))
}
