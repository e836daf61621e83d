mod read_session_tests {
    use crate::model::error::metadata_errors::MetadataError;
    use crate::repository::{MetadataStore, ReadSession};
    use crate::test::{cleanup, create_chart_db_entry, refresh_db};

    #[test]
    fn store_reads_existing_data() {
        refresh_db();
        let chart = create_chart_db_entry("chart", vec![1]);
        let session = ReadSession::open().unwrap();
        let charts = session.store().list_all_charts().unwrap();
        assert_eq!(vec![chart], charts);
        drop(session);
        cleanup();
    }

    #[test]
    fn session_is_read_only() {
        refresh_db();
        let session = ReadSession::open().unwrap();
        let res = session
            .con
            .execute("insert into slices (slice_name) values ('nope')", []);
        assert!(res.is_err());
        drop(session);
        cleanup();
    }

    #[test]
    fn open_fails_for_missing_database() {
        let res = ReadSession::open_at("./this_database_does_not_exist.sqlite");
        assert!(matches!(res, Err(MetadataError::DbError)));
    }
}

mod sqlite_metadata_store_tests {
    use crate::model::error::metadata_errors::MetadataError;
    use crate::repository::{open_connection, MetadataStore, SqliteMetadataStore};
    use crate::tags::ObjectType;
    use crate::test::{cleanup, create_chart_db_entry, create_custom_tag, refresh_db};

    #[test]
    fn tagged_objects_for_tags_filters_types_in_insertion_order() {
        refresh_db();
        create_custom_tag(
            "tag1",
            &[
                (ObjectType::Chart, 3),
                (ObjectType::Dashboard, 1),
                (ObjectType::Query, 8),
                (ObjectType::Chart, 2),
            ],
        );
        create_custom_tag("tag2", &[(ObjectType::Chart, 3)]);
        let con = open_connection();
        let store = SqliteMetadataStore::new(&con);
        let charts = store
            .tagged_objects_for_tags(&["tag1".to_string(), "tag2".to_string()], &[ObjectType::Chart])
            .unwrap();
        let all = store
            .tagged_objects_for_tags(&["tag1".to_string()], &[ObjectType::Chart, ObjectType::Dashboard])
            .unwrap();
        let none = store.tagged_objects_for_tags(&[], &[ObjectType::Chart]).unwrap();
        drop(store);
        con.close().unwrap();
        assert_eq!(
            vec![(ObjectType::Chart, 3), (ObjectType::Chart, 2), (ObjectType::Chart, 3)],
            charts
        );
        assert_eq!(
            vec![(ObjectType::Chart, 3), (ObjectType::Dashboard, 1), (ObjectType::Chart, 2)],
            all
        );
        assert!(none.is_empty());
        cleanup();
    }

    #[test]
    fn list_charts_by_id() {
        refresh_db();
        let a = create_chart_db_entry("a", vec![]);
        let b = create_chart_db_entry("b", vec![]);
        let con = open_connection();
        let store = SqliteMetadataStore::new(&con);
        assert_eq!(vec![b, a], store.list_charts_by_id(&[2, 1]).unwrap());
        drop(store);
        con.close().unwrap();
        cleanup();
    }

    #[test]
    fn database_errors_become_db_error() {
        refresh_db();
        let con = open_connection();
        con.execute_batch("drop table dashboard_views").unwrap();
        let store = SqliteMetadataStore::new(&con);
        let res = store.top_dashboard_ids(chrono::Utc::now().naive_utc(), 5);
        drop(store);
        con.close().unwrap();
        assert_eq!(Err(MetadataError::DbError), res);
        cleanup();
    }
}
