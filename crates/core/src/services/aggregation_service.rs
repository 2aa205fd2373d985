use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;

use crate::models::summary::{CategoryTotals, MonthlyTotals};
use crate::models::transaction::{Transaction, TransactionType};
use crate::services::format::month_label;

/// Groups transactions and sums their amounts per group.
///
/// Every function is pure: same input, same output, no I/O.
pub struct AggregationService;

impl AggregationService {
    /// Sum amounts per category for one transaction type.
    /// Categories appear in the order they are first seen.
    pub fn by_category(
        transactions: &[Transaction],
        transaction_type: TransactionType,
    ) -> CategoryTotals {
        let mut totals = CategoryTotals::new();
        for t in transactions
            .iter()
            .filter(|t| t.transaction_type == transaction_type)
        {
            totals.add(&t.category, t.amount);
        }
        totals
    }

    /// Income and expense per short month label (`jan.`, `fev.`, …).
    ///
    /// Buckets are ordered by first occurrence in the input, not by date.
    /// The year is ignored: March 2023 and March 2024 share one bucket.
    /// Use [`AggregationService::by_year_month`] when that matters.
    pub fn by_month(transactions: &[Transaction]) -> Vec<MonthlyTotals> {
        let mut buckets: Vec<MonthlyTotals> = Vec::new();
        let mut index: HashMap<&'static str, usize> = HashMap::new();

        for t in transactions {
            let label = month_label(t.date);
            let i = *index.entry(label).or_insert_with(|| {
                buckets.push(MonthlyTotals::new(label));
                buckets.len() - 1
            });
            accumulate(&mut buckets[i], t);
        }

        buckets
    }

    /// Income and expense per calendar month, oldest first.
    /// Labels carry the year: `mar./2024`.
    pub fn by_year_month(transactions: &[Transaction]) -> Vec<MonthlyTotals> {
        let mut buckets: BTreeMap<(i32, u32), MonthlyTotals> = BTreeMap::new();

        for t in transactions {
            let key = (t.date.year(), t.date.month());
            let bucket = buckets.entry(key).or_insert_with(|| {
                MonthlyTotals::new(format!("{}/{}", month_label(t.date), key.0))
            });
            accumulate(bucket, t);
        }

        buckets.into_values().collect()
    }

    /// Keep only transactions of the given type; `None` keeps everything.
    pub fn filter_by_type(
        transactions: &[Transaction],
        transaction_type: Option<TransactionType>,
    ) -> Vec<&Transaction> {
        transactions
            .iter()
            .filter(|t| transaction_type.map_or(true, |tt| t.transaction_type == tt))
            .collect()
    }

    /// Sum of amounts for one type.
    pub fn total_of(transactions: &[Transaction], transaction_type: TransactionType) -> f64 {
        transactions
            .iter()
            .filter(|t| t.transaction_type == transaction_type)
            .map(|t| t.amount)
            .sum()
    }
}

fn accumulate(bucket: &mut MonthlyTotals, t: &Transaction) {
    match t.transaction_type {
        TransactionType::Income => bucket.income += t.amount,
        TransactionType::Expense => bucket.expense += t.amount,
    }
}
