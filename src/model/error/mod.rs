pub mod fetch_errors;
pub mod metadata_errors;
pub mod object_errors;
pub mod strategy_errors;
pub mod tag_errors;
pub mod url_errors;
