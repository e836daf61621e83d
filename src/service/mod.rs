//! The platform's write operations on charts, dashboards, saved queries, and favorites.
//!
//! Each one runs the row change and its implicit tag hook in the same transaction.

use std::backtrace::Backtrace;

use crate::model::error::object_errors::ObjectWriteError;

pub mod chart_service;
pub mod dashboard_service;
pub mod favorite_service;
pub mod saved_query_service;

#[cfg(test)]
mod tests;

fn log_db_error(action: &str, e: rusqlite::Error) -> ObjectWriteError {
    log::error!(
        "Failed to {action}! Error is {e:?}\n{}",
        Backtrace::force_capture()
    );
    ObjectWriteError::DbError
}

/// like [`log_db_error`], but a missing row is reported as [`ObjectWriteError::NotFound`]
fn log_lookup_error(action: &str, e: rusqlite::Error) -> ObjectWriteError {
    if e == rusqlite::Error::QueryReturnedNoRows {
        log::error!("Failed to {action}, because it does not exist!");
        ObjectWriteError::NotFound
    } else {
        log_db_error(action, e)
    }
}
