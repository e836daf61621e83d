use rusqlite::Connection;

use crate::model::error::object_errors::ObjectWriteError;
use crate::model::SavedQuery;
use crate::repository::saved_query_repository;
use crate::service::{log_db_error, log_lookup_error};
use crate::tags::service as tag_service;

/// returns the id of the saved query
pub fn save_saved_query(query: &SavedQuery, con: &mut Connection) -> Result<u32, ObjectWriteError> {
    let tx = con
        .transaction()
        .map_err(|e| log_db_error("begin transaction", e))?;
    let id = saved_query_repository::create_saved_query(query, &tx)
        .map_err(|e| log_db_error(&format!("save query {}", query.label), e))?;
    let saved = SavedQuery {
        id,
        ..query.clone()
    };
    tag_service::after_insert(&saved, &tx)?;
    tx.commit()
        .map_err(|e| log_db_error(&format!("commit saved query {id}"), e))?;
    Ok(id)
}

pub fn delete_saved_query(id: u32, con: &mut Connection) -> Result<(), ObjectWriteError> {
    let tx = con
        .transaction()
        .map_err(|e| log_db_error("begin transaction", e))?;
    let query = saved_query_repository::get_saved_query(id, &tx)
        .map_err(|e| log_lookup_error(&format!("delete saved query {id}"), e))?;
    saved_query_repository::delete_saved_query(id, &tx)
        .map_err(|e| log_db_error(&format!("delete saved query {id}"), e))?;
    tag_service::after_delete(&query, &tx)?;
    tx.commit()
        .map_err(|e| log_db_error(&format!("commit deletion of saved query {id}"), e))
}
