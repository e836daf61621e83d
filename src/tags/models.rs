use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::ToSql;
use serde::Serialize;

/// lists the different kinds of tags that can exist on a chart, dashboard, or saved query
#[derive(Serialize, Debug, Eq, PartialEq, Hash, Copy, Clone)]
#[serde(rename_all = "snake_case")]
pub enum TagType {
    /// the tag was set by a user through the platform
    Custom,
    /// `type:<object type>`, one per object
    Type,
    /// `owner:<user id>`, one per owner of an object
    Owner,
    /// `favorited_by:<user id>`, one per user that starred an object
    FavoritedBy,
}

impl TagType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Type => "type",
            Self::Owner => "owner",
            Self::FavoritedBy => "favorited_by",
        }
    }

    /// the name of the implicit tag of this type for `value`, e.g. `owner:3`
    pub fn tag_name(&self, value: impl Display) -> String {
        format!("{}:{value}", self.as_str())
    }
}

impl ToSql for TagType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for TagType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "custom" => Ok(Self::Custom),
            "type" => Ok(Self::Type),
            "owner" => Ok(Self::Owner),
            "favorited_by" => Ok(Self::FavoritedBy),
            other => {
                log::warn!("tag type from database {other} does not match any TagType");
                Err(FromSqlError::InvalidType)
            }
        }
    }
}

/// the kinds of objects that can be tagged
#[derive(Serialize, Debug, Eq, PartialEq, PartialOrd, Ord, Hash, Copy, Clone)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Query,
    Chart,
    Dashboard,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Chart => "chart",
            Self::Dashboard => "dashboard",
        }
    }
}

impl Display for ObjectType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSql for ObjectType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for ObjectType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "query" => Ok(Self::Query),
            "chart" => Ok(Self::Chart),
            "dashboard" => Ok(Self::Dashboard),
            other => {
                log::warn!("object type from database {other} does not match any ObjectType");
                Err(FromSqlError::InvalidType)
            }
        }
    }
}

/// represents a tag in the tag table of the database. When referencing a tag _on_ an object, use [`TaggedObject`] instead
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Tag {
    pub id: u32,
    /// unique together with `tag_type`
    pub name: String,
    pub tag_type: TagType,
}

/// a link between a tag and a chart, dashboard, or saved query.
///
/// `object_id` points into a different table depending on `object_type`
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TaggedObject {
    pub id: u32,
    pub tag_id: u32,
    pub object_id: u32,
    pub object_type: ObjectType,
    /// when the link was created
    pub created_on: NaiveDateTime,
}

/// anything that receives implicit `type:` and `owner:` tags when it's written
pub trait Taggable {
    const OBJECT_TYPE: ObjectType;

    fn object_id(&self) -> u32;

    fn owner_ids(&self) -> Vec<u32>;
}
