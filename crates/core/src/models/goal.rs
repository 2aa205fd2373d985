use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a savings goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalStatus {
    #[default]
    InProgress,
    Completed,
    Cancelled,
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoalStatus::InProgress => write!(f, "IN_PROGRESS"),
            GoalStatus::Completed => write!(f, "COMPLETED"),
            GoalStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// A savings target tracked by current vs. target amount.
///
/// The backend names the deadline `targetDate` and the category `type`;
/// both spellings are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: i64,
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub target_amount: f64,
    pub current_amount: f64,

    #[serde(alias = "targetDate")]
    pub deadline: NaiveDate,

    #[serde(alias = "type", default)]
    pub category: String,

    #[serde(default)]
    pub status: GoalStatus,
}

impl Goal {
    /// Amount still missing to reach the target, never negative.
    pub fn remaining(&self) -> f64 {
        (self.target_amount - self.current_amount).max(0.0)
    }

    pub fn is_reached(&self) -> bool {
        self.current_amount >= self.target_amount
    }
}

/// Body for creating or replacing a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: NaiveDate,
    pub category: String,
}
