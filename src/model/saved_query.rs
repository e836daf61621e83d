use serde::Serialize;

use crate::tags::{ObjectType, Taggable};

/// a saved sql query. Only relevant here because it gets implicit tags
#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
pub struct SavedQuery {
    pub id: u32,
    pub label: String,
    /// saved queries have exactly one owner
    pub user_id: u32,
    pub sql: String,
}

impl Taggable for SavedQuery {
    const OBJECT_TYPE: ObjectType = ObjectType::Query;

    fn object_id(&self) -> u32 {
        self.id
    }

    fn owner_ids(&self) -> Vec<u32> {
        vec![self.user_id]
    }
}
