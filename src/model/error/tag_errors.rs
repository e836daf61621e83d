/// a favorite's class name doesn't correspond to a taggable object type
#[derive(PartialEq, Debug)]
pub enum MappingError {
    UnknownClassName(String),
}

/// an implicit tag hook failed. The write that fired it must be rolled back
#[derive(PartialEq, Debug)]
pub enum TagTriggerError {
    /// an error with the database
    DbError,
    Mapping(MappingError),
}

impl From<MappingError> for TagTriggerError {
    fn from(value: MappingError) -> Self {
        Self::Mapping(value)
    }
}
