/// failures reading from the metadata store, or making sense of what was read
#[derive(PartialEq, Debug)]
pub enum MetadataError {
    /// the query failed to run, or the session couldn't be opened
    DbError,
    /// a dashboard's layout or metadata json couldn't be parsed. Holds which blob and why
    MalformedJson(String),
}
