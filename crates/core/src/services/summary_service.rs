use crate::models::category::Category;
use crate::models::financing::Financing;
use crate::models::report::CategorySummary;
use crate::models::summary::{
    CategoryGroups, DashboardSummary, FinancingTotals, ReportTotals, TransactionTotals,
};
use crate::models::transaction::{Transaction, TransactionType};
use crate::services::aggregation_service::AggregationService;

/// Builds the totals shown on dashboard, report and list headers.
pub struct SummaryService;

impl SummaryService {
    /// Dashboard cards: income, expense, balance and number of financings.
    pub fn build_dashboard_summary(
        transactions: &[Transaction],
        financings: &[Financing],
    ) -> DashboardSummary {
        let total_income = AggregationService::total_of(transactions, TransactionType::Income);
        let total_expense = AggregationService::total_of(transactions, TransactionType::Expense);

        DashboardSummary {
            total_income,
            total_expense,
            total_balance: total_income - total_expense,
            financing_count: financings.len(),
        }
    }

    /// Report header, reshaped from the backend's per-category breakdown.
    pub fn build_report_summary(category_breakdown: &[CategorySummary]) -> ReportTotals {
        let mut totals = ReportTotals::default();
        for row in category_breakdown {
            match row.category_type {
                TransactionType::Income => totals.total_income += row.total_amount,
                TransactionType::Expense => totals.total_expense += row.total_amount,
            }
            totals.total_transactions += row.transaction_count;
        }
        totals.balance = totals.total_income - totals.total_expense;
        totals
    }

    /// Transaction list header: sums and counts per type.
    pub fn build_transaction_totals(transactions: &[Transaction]) -> TransactionTotals {
        let mut totals = TransactionTotals::default();
        for t in transactions {
            match t.transaction_type {
                TransactionType::Income => {
                    totals.total_income += t.amount;
                    totals.income_count += 1;
                }
                TransactionType::Expense => {
                    totals.total_expense += t.amount;
                    totals.expense_count += 1;
                }
            }
        }
        totals.balance = totals.total_income - totals.total_expense;
        totals
    }

    pub fn build_financing_totals(financings: &[Financing]) -> FinancingTotals {
        let mut totals = FinancingTotals {
            count: financings.len(),
            ..FinancingTotals::default()
        };
        for f in financings {
            totals.total_financed += f.total_amount;
            totals.total_remaining += f.remaining_amount;
            totals.total_monthly += f.monthly_payment;
        }
        totals.total_paid = totals.total_financed - totals.total_remaining;
        totals
    }

    /// Split categories into income, expense and user-created groups.
    /// A custom category shows up in its type group too.
    pub fn split_categories(categories: &[Category]) -> CategoryGroups<'_> {
        let mut groups = CategoryGroups::default();
        for c in categories {
            match c.category_type {
                TransactionType::Income => groups.income.push(c),
                TransactionType::Expense => groups.expense.push(c),
            }
            if !c.is_default {
                groups.custom.push(c);
            }
        }
        groups
    }
}
