
use crate::repository::open_connection;
use crate::tags::repository::get_tags_for_object;
use crate::tags::{ObjectType, TagType};

/// names of every tag of `tag_type` on the object, sorted
fn tag_names(object_type: ObjectType, object_id: u32, tag_type: TagType) -> Vec<String> {
    let con = open_connection();
    let mut names: Vec<String> = get_tags_for_object(object_type, object_id, &con)
        .unwrap()
        .into_iter()
        .filter(|tag| tag.tag_type == tag_type)
        .map(|tag| tag.name)
        .collect();
    con.close().unwrap();
    names.sort();
    names
}
