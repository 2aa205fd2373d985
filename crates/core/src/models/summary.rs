use serde::{Deserialize, Serialize};

use super::category::Category;

/// Per-category sums, kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    entries: Vec<(String, f64)>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `category`, appending the category if it is new.
    pub fn add(&mut self, category: &str, amount: f64) {
        match self.entries.iter_mut().find(|(name, _)| name == category) {
            Some((_, total)) => *total += amount,
            None => self.entries.push((category.to_string(), amount)),
        }
    }

    #[must_use]
    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, total)| *total)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum over every category.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, total)| total).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, total)| (name.as_str(), *total))
    }
}

impl<S: AsRef<str>> FromIterator<(S, f64)> for CategoryTotals {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut totals = CategoryTotals::new();
        for (name, amount) in iter {
            totals.add(name.as_ref(), amount);
        }
        totals
    }
}

/// Income and expense sums for one month bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// Display label, e.g. `jan.` or `jan./2024`
    pub month: String,
    pub income: f64,
    pub expense: f64,
}

impl MonthlyTotals {
    pub fn new(month: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            income: 0.0,
            expense: 0.0,
        }
    }

    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }
}

/// Totals shown on the dashboard cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_income: f64,
    pub total_expense: f64,
    /// total_income - total_expense
    pub total_balance: f64,
    pub financing_count: usize,
}

/// Report header totals, reshaped from the backend's category breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTotals {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub total_transactions: u64,
}

/// Header of the transaction list: sums and counts per type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionTotals {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub income_count: usize,
    pub expense_count: usize,
}

/// Aggregate over all financings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingTotals {
    pub total_financed: f64,
    pub total_remaining: f64,
    pub total_paid: f64,
    pub total_monthly: f64,
    pub count: usize,
}

/// Categories split the way the categories page lists them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryGroups<'a> {
    pub income: Vec<&'a Category>,
    pub expense: Vec<&'a Category>,
    /// User-created (non-default) categories of either type
    pub custom: Vec<&'a Category>,
}
