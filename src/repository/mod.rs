use std::backtrace::Backtrace;
use std::path::Path;

use chrono::NaiveDateTime;
use rusqlite::{Connection, OpenFlags, Result};

use crate::model::error::metadata_errors::MetadataError;
use crate::model::{Chart, Dashboard};
use crate::tags::{self, ObjectType, Tag};

pub mod chart_repository;
pub mod dashboard_repository;
pub mod event_repository;
pub mod saved_query_repository;

#[cfg(test)]
mod tests;

/// where the metadata database lives
#[cfg(not(test))]
pub fn database_path() -> String {
    crate::config::CACHE_WARMUP_CONFIG.database.location.clone()
}

#[cfg(test)]
pub fn database_path() -> String {
    format!("{}.sqlite", crate::test::current_thread_name())
}

/// creates a new read-write connection and returns it, but panics if the connection could not be created
pub fn open_connection() -> Connection {
    let path = database_path();
    match open_with_flags(&path, OpenFlags::default()) {
        Ok(con) => con,
        Err(error) => panic!("Failed to get a connection to the database at {path}!: {error}"),
    }
}

fn open_with_flags(path: &str, flags: OpenFlags) -> Result<Connection> {
    let con = Connection::open_with_flags(Path::new(path), flags)?;
    con.pragma_update(None, "foreign_keys", "ON")?;
    rusqlite::vtab::array::load_module(&con)?;
    Ok(con)
}

/// returns the current version of the database schema
pub fn get_version(con: &Connection) -> Result<String> {
    con.query_row(
        include_str!("../assets/queries/metadata/get_database_version.sql"),
        [],
        |row| row.get(0),
    )
}

/// runs init.sql on the database if the schema hasn't been created yet
pub fn initialize_db() -> Result<()> {
    let con = open_connection();
    if get_version(&con).is_err() {
        log::info!("No schema version found, creating metadata tables");
        con.execute_batch(include_str!("../assets/init.sql"))?;
    }
    con.close().map_err(|(_, e)| e)
}

/// the read-only queries the cache warmup needs from the metadata store
pub trait MetadataStore {
    /// every chart, ordered by id
    fn list_all_charts(&self) -> Result<Vec<Chart>, MetadataError>;

    /// the charts with the passed ids, in the same order. Unknown ids are skipped
    fn list_charts_by_id(&self, ids: &[u32]) -> Result<Vec<Chart>, MetadataError>;

    /// the dashboards with the passed ids, in the same order, with their member charts loaded
    fn list_dashboards_by_id(&self, ids: &[u32]) -> Result<Vec<Dashboard>, MetadataError>;

    /// the most viewed dashboards since `since`, most viewed first
    fn top_dashboard_ids(&self, since: NaiveDateTime, limit: u32)
        -> Result<Vec<u32>, MetadataError>;

    /// every object of one of `object_types` tagged with any of `tag_names`. Not deduplicated
    fn tagged_objects_for_tags(
        &self,
        tag_names: &[String],
        object_types: &[ObjectType],
    ) -> Result<Vec<(ObjectType, u32)>, MetadataError>;

    fn tags_for_object(
        &self,
        object_type: ObjectType,
        object_id: u32,
    ) -> Result<Vec<Tag>, MetadataError>;
}

/// [`MetadataStore`] backed by a sqlite connection. Callers are responsible for the connection's lifetime
pub struct SqliteMetadataStore<'a> {
    con: &'a Connection,
}

impl<'a> SqliteMetadataStore<'a> {
    pub fn new(con: &'a Connection) -> Self {
        Self { con }
    }
}

/// logs the database failure and converts it to a [`MetadataError`]
fn db_error(action: &str, e: rusqlite::Error) -> MetadataError {
    log::error!(
        "Failed to {action}! Error is {e:?}\n{}",
        Backtrace::force_capture()
    );
    MetadataError::DbError
}

impl MetadataStore for SqliteMetadataStore<'_> {
    fn list_all_charts(&self) -> Result<Vec<Chart>, MetadataError> {
        chart_repository::get_all_charts(self.con).map_err(|e| db_error("list all charts", e))
    }

    fn list_charts_by_id(&self, ids: &[u32]) -> Result<Vec<Chart>, MetadataError> {
        chart_repository::get_charts_by_ids(ids, self.con)
            .map_err(|e| db_error(&format!("list charts {ids:?}"), e))
    }

    fn list_dashboards_by_id(&self, ids: &[u32]) -> Result<Vec<Dashboard>, MetadataError> {
        dashboard_repository::get_dashboards_by_ids(ids, self.con)
            .map_err(|e| db_error(&format!("list dashboards {ids:?}"), e))
    }

    fn top_dashboard_ids(
        &self,
        since: NaiveDateTime,
        limit: u32,
    ) -> Result<Vec<u32>, MetadataError> {
        event_repository::get_top_dashboard_ids(since, limit, self.con)
            .map_err(|e| db_error(&format!("get top {limit} dashboards since {since}"), e))
    }

    fn tagged_objects_for_tags(
        &self,
        tag_names: &[String],
        object_types: &[ObjectType],
    ) -> Result<Vec<(ObjectType, u32)>, MetadataError> {
        tags::repository::get_tagged_objects_for_tags(tag_names, object_types, self.con)
            .map_err(|e| db_error(&format!("get objects tagged with {tag_names:?}"), e))
    }

    fn tags_for_object(
        &self,
        object_type: ObjectType,
        object_id: u32,
    ) -> Result<Vec<Tag>, MetadataError> {
        tags::repository::get_tags_for_object(object_type, object_id, self.con)
            .map_err(|e| db_error(&format!("get tags for {object_type} {object_id}"), e))
    }
}

/// a read-only connection with an open read transaction, used for a single warmup run.
///
/// The transaction is rolled back when this is dropped, and the connection closed right after
pub struct ReadSession {
    con: Connection,
}

impl ReadSession {
    /// opens a read-only session against [`database_path`]
    pub fn open() -> Result<Self, MetadataError> {
        Self::open_at(&database_path())
    }

    pub fn open_at(path: &str) -> Result<Self, MetadataError> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let con = open_with_flags(path, flags)
            .map_err(|e| db_error(&format!("open a read session on {path}"), e))?;
        con.execute_batch("begin deferred")
            .map_err(|e| db_error("begin the read transaction", e))?;
        Ok(Self { con })
    }

    pub fn store(&self) -> SqliteMetadataStore<'_> {
        SqliteMetadataStore::new(&self.con)
    }
}

impl Drop for ReadSession {
    fn drop(&mut self) {
        if let Err(e) = self.con.execute_batch("rollback") {
            log::warn!("Failed to end read transaction: {e:?}");
        }
    }
}
