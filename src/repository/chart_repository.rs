use std::rc::Rc;

use rusqlite::types::Value;
use rusqlite::{Connection, Row};

use crate::model::Chart;

/// creates a new chart and its owner rows. If `chart.id` is 0 the database assigns one.
///
/// returns the id of the chart
pub fn create_chart(chart: &Chart, con: &Connection) -> Result<u32, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/charts/create_chart.sql"))?;
    let id = pst.insert(rusqlite::params![
        id_or_null(chart.id),
        chart.slice_name,
        chart.datasource_id,
        chart.datasource_type,
        chart.viz_type
    ])? as u32;
    set_owners(id, &chart.owners, con)?;
    Ok(id)
}

/// replaces the owners of the chart with `owners`
pub fn set_owners(chart_id: u32, owners: &[u32], con: &Connection) -> Result<(), rusqlite::Error> {
    con.execute(
        include_str!("../assets/queries/charts/remove_owners.sql"),
        rusqlite::params![chart_id],
    )?;
    let mut pst = con.prepare(include_str!("../assets/queries/charts/add_owner.sql"))?;
    for owner in owners {
        pst.execute(rusqlite::params![chart_id, owner])?;
    }
    Ok(())
}

pub fn delete_chart(id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/charts/delete_chart.sql"))?;
    pst.execute(rusqlite::params![id])?;
    Ok(())
}

/// retrieves a single chart, failing with [`rusqlite::Error::QueryReturnedNoRows`] if it doesn't exist
pub fn get_chart(id: u32, con: &Connection) -> Result<Chart, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/charts/get_chart.sql"))?;
    pst.query_row(rusqlite::params![id], chart_mapper)
}

/// retrieves every chart, ordered by id
pub fn get_all_charts(con: &Connection) -> Result<Vec<Chart>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/charts/get_all_charts.sql"))?;
    let rows = pst.query_map([], chart_mapper)?;
    let mut charts: Vec<Chart> = Vec::new();
    for chart in rows {
        charts.push(chart?);
    }
    Ok(charts)
}

/// retrieves the charts with the passed ids, in the order of `ids`. Missing ids are skipped
pub fn get_charts_by_ids(ids: &[u32], con: &Connection) -> Result<Vec<Chart>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/charts/get_charts_by_ids.sql"))?;
    let rows = pst.query_map(rusqlite::params![id_array(ids)], chart_mapper)?;
    let mut found: Vec<Chart> = Vec::new();
    for chart in rows {
        found.push(chart?);
    }
    Ok(ids
        .iter()
        .filter_map(|id| found.iter().find(|chart| chart.id == *id).cloned())
        .collect())
}

pub fn get_owners(chart_id: u32, con: &Connection) -> Result<Vec<u32>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/charts/get_owners.sql"))?;
    let rows = pst.query_map(rusqlite::params![chart_id], |row| row.get(0))?;
    rows.collect()
}

/// maps a row starting at column `offset` with the layout of `get_all_charts.sql`
pub(crate) fn map_chart_at(row: &Row, offset: usize) -> Result<Chart, rusqlite::Error> {
    let owners: Option<String> = row.get(offset + 5)?;
    Ok(Chart {
        id: row.get(offset)?,
        slice_name: row.get(offset + 1)?,
        datasource_id: row.get(offset + 2)?,
        datasource_type: row.get(offset + 3)?,
        viz_type: row.get(offset + 4)?,
        owners: parse_id_list(owners),
    })
}

fn chart_mapper(row: &Row) -> Result<Chart, rusqlite::Error> {
    map_chart_at(row, 0)
}

/// parses the output of `group_concat` over id columns
pub(crate) fn parse_id_list(list: Option<String>) -> Vec<u32> {
    let mut ids: Vec<u32> = list
        .unwrap_or_default()
        .split(',')
        .filter_map(|it| it.trim().parse().ok())
        .collect();
    ids.sort_unstable();
    ids
}

/// turns a list of ids into a parameter usable with `rarray(?)`
pub(crate) fn id_array(ids: &[u32]) -> Rc<Vec<Value>> {
    Rc::new(ids.iter().map(|id| Value::Integer(i64::from(*id))).collect())
}

/// 0 means "let the database pick"
pub(crate) fn id_or_null(id: u32) -> Option<u32> {
    if id == 0 {
        None
    } else {
        Some(id)
    }
}
