use chrono::NaiveDateTime;
use rusqlite::Connection;

use crate::model::events::{FavoriteEvent, ViewEvent};

pub fn create_dashboard_view(view: &ViewEvent, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/events/create_dashboard_view.sql"
    ))?;
    pst.execute(rusqlite::params![view.dashboard_id, view.user_id, view.dttm])?;
    Ok(())
}

/// the ids of the `limit` most viewed dashboards since `since`, most viewed first.
/// Dashboards with the same number of views are ordered by id descending
pub fn get_top_dashboard_ids(
    since: NaiveDateTime,
    limit: u32,
    con: &Connection,
) -> Result<Vec<u32>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/events/get_top_dashboard_ids.sql"
    ))?;
    let rows = pst.query_map(rusqlite::params![since, limit], |row| row.get(0))?;
    let mut ids: Vec<u32> = Vec::new();
    for id in rows {
        ids.push(id?);
    }
    Ok(ids)
}

pub fn create_favorite(
    favorite: &FavoriteEvent,
    dttm: NaiveDateTime,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/events/create_favorite.sql"))?;
    pst.execute(rusqlite::params![
        favorite.user_id,
        favorite.class_name,
        favorite.obj_id,
        dttm
    ])?;
    Ok(())
}

/// returns the number of removed rows
pub fn delete_favorite(favorite: &FavoriteEvent, con: &Connection) -> Result<usize, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/events/delete_favorite.sql"))?;
    pst.execute(rusqlite::params![
        favorite.user_id,
        favorite.class_name,
        favorite.obj_id
    ])
}
