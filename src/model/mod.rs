pub mod chart;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod filters;
pub mod saved_query;

pub use chart::Chart;
pub use dashboard::Dashboard;
pub use saved_query::SavedQuery;
