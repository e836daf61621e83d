use crate::model::SavedQuery;
use crate::repository::open_connection;
use crate::service::saved_query_service::{delete_saved_query, save_saved_query};
use crate::tags::repository::{get_tagged_objects_for_object, get_tags_for_object};
use crate::tags::ObjectType;
use crate::test::{cleanup, refresh_db};

#[test]
fn saved_query_lifecycle_tags() {
    refresh_db();
    let mut con = open_connection();
    let id = save_saved_query(
        &SavedQuery {
            id: 0,
            label: "revenue".to_string(),
            user_id: 6,
            sql: "select sum(amount) from sales".to_string(),
        },
        &mut con,
    )
    .unwrap();
    let tags: Vec<String> = get_tags_for_object(ObjectType::Query, id, &con)
        .unwrap()
        .into_iter()
        .map(|tag| tag.name)
        .collect();
    assert_eq!(vec!["type:query", "owner:6"], tags);
    delete_saved_query(id, &mut con).unwrap();
    let links = get_tagged_objects_for_object(ObjectType::Query, id, &con).unwrap();
    con.close().unwrap();
    assert!(links.is_empty());
    cleanup();
}
