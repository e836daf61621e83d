use std::collections::HashMap;

use rusqlite::{Connection, Row};

use crate::model::{Chart, Dashboard};
use crate::repository::chart_repository::{id_array, id_or_null, map_chart_at, parse_id_list};

/// creates a new dashboard along with its owners and chart memberships (in the order of `dashboard.slices`).
/// The member charts must already exist.
///
/// returns the id of the dashboard
pub fn create_dashboard(dashboard: &Dashboard, con: &Connection) -> Result<u32, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/dashboards/create_dashboard.sql"
    ))?;
    let id = pst.insert(rusqlite::params![
        id_or_null(dashboard.id),
        dashboard.dashboard_title,
        dashboard.position_json,
        dashboard.json_metadata
    ])? as u32;
    set_owners(id, &dashboard.owners, con)?;
    let mut add_slice = con.prepare(include_str!("../assets/queries/dashboards/add_slice.sql"))?;
    for chart in &dashboard.slices {
        add_slice.execute(rusqlite::params![id, chart.id])?;
    }
    Ok(id)
}

/// replaces the owners of the dashboard with `owners`
pub fn set_owners(
    dashboard_id: u32,
    owners: &[u32],
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    con.execute(
        include_str!("../assets/queries/dashboards/remove_owners.sql"),
        rusqlite::params![dashboard_id],
    )?;
    let mut pst = con.prepare(include_str!("../assets/queries/dashboards/add_owner.sql"))?;
    for owner in owners {
        pst.execute(rusqlite::params![dashboard_id, owner])?;
    }
    Ok(())
}

pub fn delete_dashboard(id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/dashboards/delete_dashboard.sql"
    ))?;
    pst.execute(rusqlite::params![id])?;
    Ok(())
}

pub fn get_owners(dashboard_id: u32, con: &Connection) -> Result<Vec<u32>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/dashboards/get_owners.sql"))?;
    let rows = pst.query_map(rusqlite::params![dashboard_id], |row| row.get(0))?;
    rows.collect()
}

/// retrieves the dashboards with the passed ids in the order of `ids`, skipping any that don't exist.
///
/// Member charts for every dashboard are pulled in a single extra query rather than one per dashboard
pub fn get_dashboards_by_ids(
    ids: &[u32],
    con: &Connection,
) -> Result<Vec<Dashboard>, rusqlite::Error> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let mut pst = con.prepare(include_str!(
        "../assets/queries/dashboards/get_dashboards_by_ids.sql"
    ))?;
    let rows = pst.query_map(rusqlite::params![id_array(ids)], dashboard_mapper)?;
    let mut found: HashMap<u32, Dashboard> = HashMap::new();
    for dashboard in rows {
        let dashboard = dashboard?;
        found.insert(dashboard.id, dashboard);
    }

    let mut slices_pst = con.prepare(include_str!(
        "../assets/queries/dashboards/get_slices_for_dashboards.sql"
    ))?;
    let slice_rows = slices_pst.query_map(rusqlite::params![id_array(ids)], |row| {
        let dashboard_id: u32 = row.get(0)?;
        let chart: Chart = map_chart_at(row, 1)?;
        Ok((dashboard_id, chart))
    })?;
    for slice in slice_rows {
        let (dashboard_id, chart) = slice?;
        if let Some(dashboard) = found.get_mut(&dashboard_id) {
            dashboard.slices.push(chart);
        }
    }

    let mut ordered: Vec<Dashboard> = Vec::with_capacity(found.len());
    for id in ids {
        // the same id can be requested more than once
        if let Some(dashboard) = found.get(id) {
            ordered.push(dashboard.clone());
        }
    }
    Ok(ordered)
}

fn dashboard_mapper(row: &Row) -> Result<Dashboard, rusqlite::Error> {
    let owners: Option<String> = row.get(4)?;
    Ok(Dashboard {
        id: row.get(0)?,
        dashboard_title: row.get(1)?,
        position_json: row.get(2)?,
        json_metadata: row.get(3)?,
        owners: parse_id_list(owners),
        slices: Vec::new(),
    })
}
