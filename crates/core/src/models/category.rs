use serde::{Deserialize, Serialize};

use super::transaction::TransactionType;

/// A user- or system-defined label partitioning transactions by type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: TransactionType,
    /// System-seeded categories cannot be edited or deleted.
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

/// Body for creating or renaming a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: TransactionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}
