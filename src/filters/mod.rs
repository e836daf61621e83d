//! Works out which of a dashboard's default filters apply to each of its charts.

pub mod layout;
pub mod resolver;
pub mod scopes;


pub use resolver::get_dashboard_extra_filters;
