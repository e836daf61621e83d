use rusqlite::Connection;

use crate::model::SavedQuery;
use crate::repository::chart_repository::id_or_null;

/// returns the id of the created query
pub fn create_saved_query(query: &SavedQuery, con: &Connection) -> Result<u32, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/saved_queries/create_saved_query.sql"
    ))?;
    let id = pst.insert(rusqlite::params![
        id_or_null(query.id),
        query.label,
        query.user_id,
        query.sql
    ])? as u32;
    Ok(id)
}

pub fn get_saved_query(id: u32, con: &Connection) -> Result<SavedQuery, rusqlite::Error> {
    con.query_row(
        include_str!("../assets/queries/saved_queries/get_saved_query.sql"),
        rusqlite::params![id],
        |row| {
            Ok(SavedQuery {
                id: row.get(0)?,
                label: row.get(1)?,
                user_id: row.get(2)?,
                sql: row.get(3)?,
            })
        },
    )
}

pub fn delete_saved_query(id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    con.execute(
        include_str!("../assets/queries/saved_queries/delete_saved_query.sql"),
        rusqlite::params![id],
    )?;
    Ok(())
}
