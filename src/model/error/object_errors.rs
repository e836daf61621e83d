use crate::model::error::tag_errors::{MappingError, TagTriggerError};

/// failures saving, updating, or deleting charts, dashboards, saved queries, or favorites
#[derive(PartialEq, Debug)]
pub enum ObjectWriteError {
    /// an error with the database
    DbError,
    /// no object with the passed id exists
    NotFound,
    /// the write's tag hook rejected it
    Mapping(MappingError),
}

impl From<TagTriggerError> for ObjectWriteError {
    fn from(value: TagTriggerError) -> Self {
        match value {
            TagTriggerError::DbError => Self::DbError,
            TagTriggerError::Mapping(e) => Self::Mapping(e),
        }
    }
}
