use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::financing::{Financing, Payment};
use super::goal::Goal;
use super::transaction::Transaction;

/// The last fully-fetched copy of every entity list.
///
/// Lists are only ever replaced wholesale after a fetch resolves; derived
/// views are always computed over one consistent snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub transactions: Vec<Transaction>,
    pub financings: Vec<Financing>,
    pub goals: Vec<Goal>,
    pub categories: Vec<Category>,
    /// Payments per financing id, for the financings whose payments were loaded
    #[serde(default)]
    pub payments: HashMap<i64, Vec<Payment>>,
}

impl Snapshot {
    pub fn financing(&self, id: i64) -> Option<&Financing> {
        self.financings.iter().find(|f| f.id == id)
    }

    pub fn goal(&self, id: i64) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn category(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn transaction(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Loaded payments of one financing; empty if never loaded.
    pub fn payments_of(&self, financing_id: i64) -> &[Payment] {
        self.payments
            .get(&financing_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
            && self.financings.is_empty()
            && self.goals.is_empty()
            && self.categories.is_empty()
    }
}
