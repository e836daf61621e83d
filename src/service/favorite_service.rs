use chrono::Utc;
use rusqlite::Connection;

use crate::model::error::object_errors::ObjectWriteError;
use crate::model::events::FavoriteEvent;
use crate::repository::event_repository;
use crate::service::log_db_error;
use crate::tags::service as tag_service;

/// stars the object for the user and tags it `favorited_by:<user id>`.
///
/// fails without saving anything if the favorite's class name isn't a taggable object type
pub fn add_favorite(favorite: &FavoriteEvent, con: &mut Connection) -> Result<(), ObjectWriteError> {
    let tx = con
        .transaction()
        .map_err(|e| log_db_error("begin transaction", e))?;
    event_repository::create_favorite(favorite, Utc::now().naive_utc(), &tx)
        .map_err(|e| log_db_error(&format!("save favorite {favorite:?}"), e))?;
    if let Err(e) = tag_service::after_favorite_insert(favorite, &tx) {
        log::error!("Rejecting favorite {favorite:?}, its tag could not be applied: {e:?}");
        return Err(e.into());
    }
    tx.commit()
        .map_err(|e| log_db_error(&format!("commit favorite {favorite:?}"), e))
}

/// un-stars the object and removes the matching `favorited_by:<user id>` tag link
pub fn remove_favorite(
    favorite: &FavoriteEvent,
    con: &mut Connection,
) -> Result<(), ObjectWriteError> {
    let tx = con
        .transaction()
        .map_err(|e| log_db_error("begin transaction", e))?;
    event_repository::delete_favorite(favorite, &tx)
        .map_err(|e| log_db_error(&format!("delete favorite {favorite:?}"), e))?;
    tag_service::after_favorite_delete(favorite, &tx)?;
    tx.commit()
        .map_err(|e| log_db_error(&format!("commit favorite removal {favorite:?}"), e))
}
