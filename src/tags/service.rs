//! Hooks that keep the implicit `type:`, `owner:`, and `favorited_by:` tags in sync with the objects they describe.
//!
//! Every hook runs on the connection (or transaction) of the write that fired it, so the object change and its
//! tag changes are committed or rolled back together.

use std::backtrace::Backtrace;
use std::collections::BTreeSet;

use chrono::Utc;
use rusqlite::Connection;

use crate::model::error::tag_errors::{MappingError, TagTriggerError};
use crate::model::events::FavoriteEvent;
use crate::tags::repository as tag_repository;
use crate::tags::{ObjectType, Tag, TagType, Taggable};

/// maps the platform's model class names to the object types they're tagged as. Case insensitive
pub fn class_to_object_type(class_name: &str) -> Result<ObjectType, MappingError> {
    match class_name.to_ascii_lowercase().as_str() {
        "slice" => Ok(ObjectType::Chart),
        "dashboard" => Ok(ObjectType::Dashboard),
        "query" => Ok(ObjectType::Query),
        _ => Err(MappingError::UnknownClassName(class_name.to_string())),
    }
}

/// returns the tag with this name and type, creating it if it doesn't exist yet
pub fn get_or_create_tag(
    name: &str,
    tag_type: TagType,
    con: &Connection,
) -> Result<Tag, TagTriggerError> {
    let existing = tag_repository::get_tag_by_name(name, tag_type, con)
        .map_err(|e| log_db_error(&format!("look up tag {name}"), e))?;
    match existing {
        Some(tag) => Ok(tag),
        None => tag_repository::create_tag(name, tag_type, con)
            .map_err(|e| log_db_error(&format!("create tag {name}"), e)),
    }
}

/// tags a freshly inserted object with `type:<object type>` and one `owner:<id>` per owner
pub fn after_insert<T: Taggable>(target: &T, con: &Connection) -> Result<(), TagTriggerError> {
    let type_tag = get_or_create_tag(&TagType::Type.tag_name(T::OBJECT_TYPE), TagType::Type, con)?;
    link(&type_tag, T::OBJECT_TYPE, target.object_id(), con)?;
    add_owner_tags(target, con)
}

/// re-creates the owner tags of the object if its owners no longer match them
pub fn after_update<T: Taggable>(target: &T, con: &Connection) -> Result<(), TagTriggerError> {
    let object_id = target.object_id();
    let current: BTreeSet<String> = tag_repository::get_tags_for_object(T::OBJECT_TYPE, object_id, con)
        .map_err(|e| log_db_error(&format!("get tags for {} {object_id}", T::OBJECT_TYPE), e))?
        .into_iter()
        .filter(|tag| tag.tag_type == TagType::Owner)
        .map(|tag| tag.name)
        .collect();
    let expected: BTreeSet<String> = target
        .owner_ids()
        .into_iter()
        .map(|owner| TagType::Owner.tag_name(owner))
        .collect();
    if current == expected {
        return Ok(());
    }
    tag_repository::delete_tagged_objects_by_tag_type(T::OBJECT_TYPE, object_id, TagType::Owner, con)
        .map_err(|e| {
            log_db_error(
                &format!("remove owner tags from {} {object_id}", T::OBJECT_TYPE),
                e,
            )
        })?;
    add_owner_tags(target, con)
}

/// removes every tag link on the deleted object. The tags themselves stay
pub fn after_delete<T: Taggable>(target: &T, con: &Connection) -> Result<(), TagTriggerError> {
    let object_id = target.object_id();
    tag_repository::delete_tagged_objects_for_object(T::OBJECT_TYPE, object_id, con).map_err(|e| {
        log_db_error(
            &format!("remove tags from {} {object_id}", T::OBJECT_TYPE),
            e,
        )
    })
}

/// tags the starred object with `favorited_by:<user id>`
pub fn after_favorite_insert(
    favorite: &FavoriteEvent,
    con: &Connection,
) -> Result<(), TagTriggerError> {
    let object_type = class_to_object_type(&favorite.class_name)?;
    let tag = get_or_create_tag(
        &TagType::FavoritedBy.tag_name(favorite.user_id),
        TagType::FavoritedBy,
        con,
    )?;
    let already_tagged = tag_repository::tagged_object_exists(tag.id, object_type, favorite.obj_id, con)
        .map_err(|e| log_db_error(&format!("check tag {} on {object_type}", tag.name), e))?;
    if already_tagged {
        return Ok(());
    }
    link(&tag, object_type, favorite.obj_id, con)
}

/// removes the `favorited_by:<user id>` link for the un-starred object
pub fn after_favorite_delete(
    favorite: &FavoriteEvent,
    con: &Connection,
) -> Result<(), TagTriggerError> {
    let object_type = class_to_object_type(&favorite.class_name)?;
    let name = TagType::FavoritedBy.tag_name(favorite.user_id);
    let tag = tag_repository::get_tag_by_name(&name, TagType::FavoritedBy, con)
        .map_err(|e| log_db_error(&format!("look up tag {name}"), e))?;
    match tag {
        Some(tag) => tag_repository::delete_tagged_object(tag.id, object_type, favorite.obj_id, con)
            .map_err(|e| {
                log_db_error(
                    &format!("remove tag {name} from {object_type} {}", favorite.obj_id),
                    e,
                )
            }),
        // the favorite was never tagged, nothing to remove
        None => Ok(()),
    }
}

fn add_owner_tags<T: Taggable>(target: &T, con: &Connection) -> Result<(), TagTriggerError> {
    let owners: BTreeSet<u32> = target.owner_ids().into_iter().collect();
    for owner in owners {
        let tag = get_or_create_tag(&TagType::Owner.tag_name(owner), TagType::Owner, con)?;
        link(&tag, T::OBJECT_TYPE, target.object_id(), con)?;
    }
    Ok(())
}

fn link(
    tag: &Tag,
    object_type: ObjectType,
    object_id: u32,
    con: &Connection,
) -> Result<(), TagTriggerError> {
    tag_repository::add_tagged_object(tag.id, object_type, object_id, Utc::now().naive_utc(), con)
        .map_err(|e| {
            log_db_error(
                &format!("tag {object_type} {object_id} with {}", tag.name),
                e,
            )
        })
}

fn log_db_error(action: &str, e: rusqlite::Error) -> TagTriggerError {
    log::error!(
        "Failed to {action}! Error is {e:?}\n{}",
        Backtrace::force_capture()
    );
    TagTriggerError::DbError
}
