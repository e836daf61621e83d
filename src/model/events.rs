use chrono::NaiveDateTime;

/// a user opening a dashboard
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ViewEvent {
    pub dashboard_id: u32,
    pub user_id: Option<u32>,
    pub dttm: NaiveDateTime,
}

/// a user starring an object. `class_name` is the platform's model name (`slice`, `Dashboard`, `query`...)
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FavoriteEvent {
    pub user_id: u32,
    pub obj_id: u32,
    pub class_name: String,
}
