use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationErrors;

use super::transaction::TransactionType;

/// Type selector for report filters. `All` disables the type filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportType {
    Income,
    Expense,
    #[default]
    All,
}

impl From<TransactionType> for ReportType {
    fn from(t: TransactionType) -> Self {
        match t {
            TransactionType::Income => ReportType::Income,
            TransactionType::Expense => ReportType::Expense,
        }
    }
}

/// Filter body shared by every report and export endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub report_type: Option<ReportType>,
}

impl ReportFilter {
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_type(mut self, report_type: ReportType) -> Self {
        self.report_type = Some(report_type);
        self
    }

    /// A range whose start lies after its end is rejected before sending.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                errors.push(
                    "startDate",
                    format!("start date ({start}) must not be after end date ({end})"),
                );
            }
        }
        if let Some(category) = &self.category {
            if category.trim().is_empty() {
                errors.push("category", "category filter must not be blank");
            }
        }
        errors.into_result(())
    }
}

/// One row of the backend's per-category breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: String,
    pub total_amount: f64,
    pub transaction_count: u64,
    #[serde(rename = "type")]
    pub category_type: TransactionType,
}

/// Report summary as computed by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub total_transactions: u64,
    #[serde(default)]
    pub category_breakdown: Vec<CategorySummary>,
}

/// A downloaded export (CSV or PDF).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}
