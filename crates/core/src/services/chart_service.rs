use crate::models::chart::{MonthlyBar, PieSlice};
use crate::models::report::{CategorySummary, ReportSummary};
use crate::models::summary::{CategoryTotals, MonthlyTotals};
use crate::models::transaction::TransactionType;

/// Label of the income slice in the income-vs-expense comparison.
pub const INCOME_LABEL: &str = "Receitas";
/// Label of the expense slice in the income-vs-expense comparison.
pub const EXPENSE_LABEL: &str = "Despesas";

/// Reshapes aggregates into chart-ready series.
///
/// No business logic lives here: one output entry per input group, same order.
/// Empty input gives an empty series; the renderer shows its own placeholder.
pub struct ChartService;

impl ChartService {
    pub fn to_pie_series(category_totals: &CategoryTotals) -> Vec<PieSlice> {
        category_totals
            .iter()
            .map(|(name, value)| PieSlice {
                name: name.to_string(),
                value,
            })
            .collect()
    }

    pub fn to_bar_series(monthly_totals: &[MonthlyTotals]) -> Vec<MonthlyBar> {
        monthly_totals
            .iter()
            .map(|m| MonthlyBar {
                month: m.month.clone(),
                income: m.income,
                expense: m.expense,
            })
            .collect()
    }

    /// Pie series for one type, taken from the backend's report breakdown.
    pub fn report_pie_series(
        breakdown: &[CategorySummary],
        category_type: TransactionType,
    ) -> Vec<PieSlice> {
        breakdown
            .iter()
            .filter(|row| row.category_type == category_type)
            .map(|row| PieSlice {
                name: row.category.clone(),
                value: row.total_amount,
            })
            .collect()
    }

    /// Two slices: total income vs. total expense of a report.
    pub fn comparison_series(report: &ReportSummary) -> Vec<PieSlice> {
        vec![
            PieSlice {
                name: INCOME_LABEL.to_string(),
                value: report.total_income,
            },
            PieSlice {
                name: EXPENSE_LABEL.to_string(),
                value: report.total_expense,
            },
        ]
    }
}
