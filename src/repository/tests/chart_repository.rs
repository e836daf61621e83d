mod get_charts_tests {
    use crate::repository::chart_repository::{get_all_charts, get_chart, get_charts_by_ids};
    use crate::repository::open_connection;
    use crate::test::{cleanup, create_chart_db_entry, refresh_db};

    #[test]
    fn get_all_charts_orders_by_id() {
        refresh_db();
        let first = create_chart_db_entry("first", vec![2, 1]);
        let second = create_chart_db_entry("second", vec![]);
        let con = open_connection();
        let charts = get_all_charts(&con).unwrap();
        con.close().unwrap();
        assert_eq!(vec![first.id, second.id], charts.iter().map(|c| c.id).collect::<Vec<u32>>());
        assert_eq!(vec![1, 2], charts[0].owners);
        assert!(charts[1].owners.is_empty());
        cleanup();
    }

    #[test]
    fn get_all_charts_empty() {
        refresh_db();
        let con = open_connection();
        assert!(get_all_charts(&con).unwrap().is_empty());
        con.close().unwrap();
        cleanup();
    }

    #[test]
    fn get_charts_by_ids_keeps_requested_order() {
        refresh_db();
        let a = create_chart_db_entry("a", vec![]);
        create_chart_db_entry("b", vec![]);
        let c = create_chart_db_entry("c", vec![]);
        let con = open_connection();
        let charts = get_charts_by_ids(&[c.id, 99, a.id, c.id], &con).unwrap();
        con.close().unwrap();
        assert_eq!(vec![c.clone(), a, c], charts);
        cleanup();
    }

    #[test]
    fn get_chart_not_found() {
        refresh_db();
        let con = open_connection();
        let res = get_chart(4, &con);
        con.close().unwrap();
        assert_eq!(Err(rusqlite::Error::QueryReturnedNoRows), res);
        cleanup();
    }
}

mod set_owners_tests {
    use crate::repository::chart_repository::{get_owners, set_owners};
    use crate::repository::open_connection;
    use crate::test::{cleanup, create_chart_db_entry, refresh_db};

    #[test]
    fn set_owners_replaces_existing() {
        refresh_db();
        let chart = create_chart_db_entry("chart", vec![1, 2]);
        let con = open_connection();
        set_owners(chart.id, &[2, 3], &con).unwrap();
        let owners = get_owners(chart.id, &con).unwrap();
        con.close().unwrap();
        assert_eq!(vec![2, 3], owners);
        cleanup();
    }
}
