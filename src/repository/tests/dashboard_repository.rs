mod get_dashboards_by_ids_tests {
    use crate::repository::dashboard_repository::get_dashboards_by_ids;
    use crate::repository::open_connection;
    use crate::test::{cleanup, create_chart_db_entry, create_dashboard_db_entry, dashboard, refresh_db};

    #[test]
    fn loads_member_charts_in_membership_order() {
        refresh_db();
        let first = create_chart_db_entry("first", vec![]);
        let second = create_chart_db_entry("second", vec![7]);
        let saved = create_dashboard_db_entry(dashboard(
            "dash",
            vec![3],
            vec![second.clone(), first.clone()],
        ));
        let con = open_connection();
        let found = get_dashboards_by_ids(&[saved.id], &con).unwrap();
        con.close().unwrap();
        assert_eq!(1, found.len());
        assert_eq!(vec![second, first], found[0].slices);
        assert_eq!(vec![3], found[0].owners);
        assert_eq!("dash", found[0].dashboard_title);
        cleanup();
    }

    #[test]
    fn keeps_requested_order_and_skips_missing() {
        refresh_db();
        let chart = create_chart_db_entry("shared", vec![]);
        let one = create_dashboard_db_entry(dashboard("one", vec![], vec![chart.clone()]));
        let two = create_dashboard_db_entry(dashboard("two", vec![], vec![chart.clone()]));
        let empty = create_dashboard_db_entry(dashboard("empty", vec![], vec![]));
        let con = open_connection();
        let found = get_dashboards_by_ids(&[two.id, 42, empty.id, one.id], &con).unwrap();
        con.close().unwrap();
        let titles: Vec<&str> = found.iter().map(|d| d.dashboard_title.as_str()).collect();
        assert_eq!(vec!["two", "empty", "one"], titles);
        assert_eq!(vec![chart.clone()], found[0].slices);
        assert!(found[1].slices.is_empty());
        assert_eq!(vec![chart], found[2].slices);
        cleanup();
    }

    #[test]
    fn empty_ids() {
        refresh_db();
        let con = open_connection();
        assert!(get_dashboards_by_ids(&[], &con).unwrap().is_empty());
        con.close().unwrap();
        cleanup();
    }
}

mod delete_dashboard_tests {
    use crate::repository::chart_repository::get_all_charts;
    use crate::repository::dashboard_repository::{delete_dashboard, get_dashboards_by_ids, get_owners};
    use crate::repository::open_connection;
    use crate::test::{cleanup, create_chart_db_entry, create_dashboard_db_entry, dashboard, refresh_db};

    #[test]
    fn delete_dashboard_keeps_charts() {
        refresh_db();
        let chart = create_chart_db_entry("chart", vec![]);
        let saved = create_dashboard_db_entry(dashboard("dash", vec![1], vec![chart.clone()]));
        let con = open_connection();
        delete_dashboard(saved.id, &con).unwrap();
        assert!(get_dashboards_by_ids(&[saved.id], &con).unwrap().is_empty());
        assert!(get_owners(saved.id, &con).unwrap().is_empty());
        assert_eq!(vec![chart], get_all_charts(&con).unwrap());
        con.close().unwrap();
        cleanup();
    }
}
