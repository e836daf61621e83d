use std::backtrace::Backtrace;
use std::rc::Rc;

use chrono::NaiveDateTime;
use rusqlite::types::Value;
use rusqlite::{Connection, Row};

use crate::tags::{ObjectType, Tag, TagType, TaggedObject};

/// creates a new tag in the database. This does not check if the tag already exists,
/// so the caller must check that themselves
pub fn create_tag(name: &str, tag_type: TagType, con: &Connection) -> Result<Tag, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/tags/create_tag.sql"))?;
    let id = pst.insert(rusqlite::params![name, tag_type])? as u32;
    Ok(Tag {
        id,
        name: name.to_string(),
        tag_type,
    })
}

/// searches for the tag with exactly this name and type.
///
/// if `None` is returned, that means there was no match
pub fn get_tag_by_name(
    name: &str,
    tag_type: TagType,
    con: &Connection,
) -> Result<Option<Tag>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/tags/get_by_name.sql"))?;
    match pst.query_row(rusqlite::params![name, tag_type], tag_mapper) {
        Ok(tag) => Ok(Some(tag)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => {
            log::error!(
                "Failed to get tag by name {name}, error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(e)
        }
    }
}

/// links the tag to the object. The caller needs to make sure the link doesn't already exist
pub fn add_tagged_object(
    tag_id: u32,
    object_type: ObjectType,
    object_id: u32,
    created_on: NaiveDateTime,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/tags/add_tagged_object.sql"))?;
    pst.execute(rusqlite::params![tag_id, object_id, object_type, created_on])?;
    Ok(())
}

pub fn tagged_object_exists(
    tag_id: u32,
    object_type: ObjectType,
    object_id: u32,
    con: &Connection,
) -> Result<bool, rusqlite::Error> {
    con.query_row(
        include_str!("../assets/queries/tags/tagged_object_exists.sql"),
        rusqlite::params![tag_id, object_id, object_type],
        |row| row.get(0),
    )
}

/// removes the link between one tag and one object
pub fn delete_tagged_object(
    tag_id: u32,
    object_type: ObjectType,
    object_id: u32,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/tags/delete_tagged_object.sql"
    ))?;
    pst.execute(rusqlite::params![tag_id, object_id, object_type])?;
    Ok(())
}

/// removes every tag link on the object
pub fn delete_tagged_objects_for_object(
    object_type: ObjectType,
    object_id: u32,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/tags/delete_tagged_objects_for_object.sql"
    ))?;
    pst.execute(rusqlite::params![object_id, object_type])?;
    Ok(())
}

/// removes the links on the object whose tag is of `tag_type`
pub fn delete_tagged_objects_by_tag_type(
    object_type: ObjectType,
    object_id: u32,
    tag_type: TagType,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/tags/delete_tagged_objects_by_tag_type.sql"
    ))?;
    pst.execute(rusqlite::params![object_id, object_type, tag_type])?;
    Ok(())
}

/// every tag on the object, in the order they were added
pub fn get_tags_for_object(
    object_type: ObjectType,
    object_id: u32,
    con: &Connection,
) -> Result<Vec<Tag>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/tags/get_tags_for_object.sql"))?;
    let rows = pst.query_map(rusqlite::params![object_id, object_type], tag_mapper)?;
    let mut tags: Vec<Tag> = Vec::new();
    for tag in rows {
        tags.push(tag?);
    }
    Ok(tags)
}

pub fn get_tagged_objects_for_object(
    object_type: ObjectType,
    object_id: u32,
    con: &Connection,
) -> Result<Vec<TaggedObject>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/tags/get_tagged_objects_for_object.sql"
    ))?;
    let rows = pst.query_map(rusqlite::params![object_id, object_type], tagged_object_mapper)?;
    let mut tagged: Vec<TaggedObject> = Vec::new();
    for tagged_object in rows {
        tagged.push(tagged_object?);
    }
    Ok(tagged)
}

/// every (object type, object id) pair tagged with any of `tag_names`, limited to `object_types`.
///
/// an object with two matching tags shows up twice
pub fn get_tagged_objects_for_tags(
    tag_names: &[String],
    object_types: &[ObjectType],
    con: &Connection,
) -> Result<Vec<(ObjectType, u32)>, rusqlite::Error> {
    if tag_names.is_empty() || object_types.is_empty() {
        return Ok(Vec::new());
    }
    let names: Rc<Vec<Value>> = Rc::new(
        tag_names
            .iter()
            .map(|name| Value::Text(name.clone()))
            .collect(),
    );
    let types: Rc<Vec<Value>> = Rc::new(
        object_types
            .iter()
            .map(|it| Value::Text(it.as_str().to_string()))
            .collect(),
    );
    let mut pst = con.prepare(include_str!(
        "../assets/queries/tags/get_tagged_objects_for_tags.sql"
    ))?;
    let rows = pst.query_map(rusqlite::params![names, types], |row| {
        Ok((row.get(0)?, row.get(1)?))
    })?;
    let mut objects: Vec<(ObjectType, u32)> = Vec::new();
    for object in rows {
        objects.push(object?);
    }
    Ok(objects)
}

fn tag_mapper(row: &Row) -> Result<Tag, rusqlite::Error> {
    Ok(Tag {
        id: row.get(0)?,
        name: row.get(1)?,
        tag_type: row.get(2)?,
    })
}

fn tagged_object_mapper(row: &Row) -> Result<TaggedObject, rusqlite::Error> {
    Ok(TaggedObject {
        id: row.get(0)?,
        tag_id: row.get(1)?,
        object_id: row.get(2)?,
        object_type: row.get(3)?,
        created_on: row.get(4)?,
    })
}
