//! Comment model

use serde::{Deserialize, Serialize};

/// A free-text reply attached to one entry by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    /// Not checked against the entry collection
    pub entry_id: i64,
    pub content: String,
    pub date: String,
}
