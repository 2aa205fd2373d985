// ═══════════════════════════════════════════════════════════════════
// Service Tests: formatters, progress, AggregationService,
// SummaryService, ChartService
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;

use quick_finance_core::models::category::Category;
use quick_finance_core::models::financing::{Financing, FinancingType};
use quick_finance_core::models::report::{CategorySummary, ReportSummary};
use quick_finance_core::models::summary::{CategoryTotals, MonthlyTotals};
use quick_finance_core::models::transaction::{Transaction, TransactionType};
use quick_finance_core::services::aggregation_service::AggregationService;
use quick_finance_core::services::chart_service::ChartService;
use quick_finance_core::services::format::{
    format_currency, format_date, format_naive_date, format_percent, month_label, INVALID_DATE,
};
use quick_finance_core::services::progress::{bar_width, financing_progress, goal_progress};
use quick_finance_core::services::summary_service::SummaryService;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn tx(id: i64, t: TransactionType, category: &str, amount: f64, date: NaiveDate) -> Transaction {
    Transaction {
        id,
        transaction_type: t,
        amount,
        category: category.to_string(),
        description: format!("tx {id}"),
        date,
    }
}

fn income(id: i64, category: &str, amount: f64, date: NaiveDate) -> Transaction {
    tx(id, TransactionType::Income, category, amount, date)
}

fn expense(id: i64, category: &str, amount: f64, date: NaiveDate) -> Transaction {
    tx(id, TransactionType::Expense, category, amount, date)
}

fn financing(id: i64, total: f64, remaining: f64, monthly: f64) -> Financing {
    Financing {
        id,
        name: format!("Financing {id}"),
        total_amount: total,
        remaining_amount: remaining,
        monthly_payment: monthly,
        financing_type: FinancingType::Loan,
        end_date: d(2030, 1, 1),
    }
}

fn category(id: i64, name: &str, t: TransactionType, is_default: bool) -> Category {
    Category {
        id,
        name: name.to_string(),
        category_type: t,
        is_default,
        parent_id: None,
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Formatters
// ═══════════════════════════════════════════════════════════════════

mod formatters {
    use super::*;

    #[test]
    fn currency_uses_brazilian_grouping() {
        let s = format_currency(1234.5);
        assert!(s.contains("R$"));
        assert!(s.contains("1.234,50"));
        assert_eq!(s, "R$\u{a0}1.234,50");
    }

    #[test]
    fn currency_small_and_zero() {
        assert_eq!(format_currency(0.0), "R$\u{a0}0,00");
        assert_eq!(format_currency(0.5), "R$\u{a0}0,50");
        assert_eq!(format_currency(7.0), "R$\u{a0}7,00");
    }

    #[test]
    fn currency_millions() {
        assert_eq!(format_currency(1_234_567.891), "R$\u{a0}1.234.567,89");
    }

    #[test]
    fn currency_negative() {
        assert_eq!(format_currency(-250.0), "-R$\u{a0}250,00");
    }

    #[test]
    fn currency_negative_rounding_to_zero_has_no_sign() {
        assert_eq!(format_currency(-0.001), "R$\u{a0}0,00");
    }

    #[test]
    fn currency_non_finite() {
        assert_eq!(format_currency(f64::NAN), "R$\u{a0}NaN");
        assert_eq!(format_currency(f64::INFINITY), "R$\u{a0}∞");
        assert_eq!(format_currency(f64::NEG_INFINITY), "-R$\u{a0}∞");
    }

    #[test]
    fn date_iso_to_brazilian() {
        assert_eq!(format_date("2024-03-07"), "07/03/2024");
        assert_eq!(format_date("2024-12-31T10:00:00Z"), "31/12/2024");
    }

    #[test]
    fn date_invalid_falls_back() {
        assert_eq!(format_date("not a date"), INVALID_DATE);
        assert_eq!(format_date(""), INVALID_DATE);
        assert_eq!(format_date("2024-02-30"), INVALID_DATE);
    }

    #[test]
    fn naive_date() {
        assert_eq!(format_naive_date(d(2025, 1, 5)), "05/01/2025");
    }

    #[test]
    fn percent_one_decimal() {
        assert_eq!(format_percent(33.333), "33.3%");
        assert_eq!(format_percent(100.0), "100.0%");
    }

    #[test]
    fn month_labels() {
        assert_eq!(month_label(d(2024, 1, 10)), "jan.");
        assert_eq!(month_label(d(2024, 2, 10)), "fev.");
        assert_eq!(month_label(d(2024, 9, 10)), "set.");
        assert_eq!(month_label(d(2024, 12, 10)), "dez.");
    }

    #[test]
    fn formatters_are_idempotent() {
        assert_eq!(format_currency(99.99), format_currency(99.99));
        assert_eq!(format_date("2024-05-01"), format_date("2024-05-01"));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Progress
// ═══════════════════════════════════════════════════════════════════

mod progress {
    use super::*;

    #[test]
    fn financing_nothing_paid_is_zero() {
        for total in [1.0, 500.0, 12_345.67] {
            assert_eq!(financing_progress(total, total), 0.0);
        }
    }

    #[test]
    fn financing_fully_paid_is_hundred() {
        for total in [1.0, 500.0, 12_345.67] {
            assert_eq!(financing_progress(total, 0.0), 100.0);
        }
    }

    #[test]
    fn financing_partial() {
        assert!((financing_progress(1000.0, 250.0) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn financing_is_not_clamped() {
        assert!(financing_progress(100.0, 150.0) < 0.0);
        assert!(financing_progress(100.0, -50.0) > 100.0);
    }

    #[test]
    fn financing_zero_total_is_zero() {
        assert_eq!(financing_progress(0.0, 0.0), 0.0);
        assert_eq!(financing_progress(0.0, 10.0), 0.0);
    }

    #[test]
    fn goal_reached_or_exceeded_is_exactly_hundred() {
        assert_eq!(goal_progress(500.0, 500.0), 100.0);
        assert_eq!(goal_progress(900.0, 500.0), 100.0);
    }

    #[test]
    fn goal_partial() {
        assert!((goal_progress(250.0, 1000.0) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn goal_zero_target_is_zero() {
        assert_eq!(goal_progress(0.0, 0.0), 0.0);
        assert_eq!(goal_progress(100.0, 0.0), 0.0);
    }

    #[test]
    fn goal_negative_target_is_zero() {
        assert_eq!(goal_progress(50.0, -100.0), 0.0);
        assert_eq!(goal_progress(-50.0, -100.0), 0.0);
    }

    #[test]
    fn bar_width_is_clamped() {
        assert_eq!(bar_width(-20.0), 0.0);
        assert_eq!(bar_width(42.0), 42.0);
        assert_eq!(bar_width(250.0), 100.0);
        assert_eq!(bar_width(f64::NAN), 0.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  AggregationService
// ═══════════════════════════════════════════════════════════════════

mod aggregation {
    use super::*;

    #[test]
    fn by_category_filters_and_sums() {
        let txs = vec![
            expense(1, "Food", 50.0, d(2024, 1, 1)),
            expense(2, "Food", 30.0, d(2024, 1, 2)),
            income(3, "Salary", 1000.0, d(2024, 1, 3)),
        ];
        let totals = AggregationService::by_category(&txs, TransactionType::Expense);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals.get("Food"), Some(80.0));
        assert_eq!(totals.get("Salary"), None);
    }

    #[test]
    fn by_category_keeps_first_seen_order() {
        let txs = vec![
            expense(1, "Transporte", 10.0, d(2024, 1, 1)),
            expense(2, "Alimentação", 20.0, d(2024, 1, 2)),
            expense(3, "Transporte", 5.0, d(2024, 1, 3)),
            expense(4, "Moradia", 900.0, d(2024, 1, 4)),
        ];
        let totals = AggregationService::by_category(&txs, TransactionType::Expense);
        let names: Vec<&str> = totals.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Transporte", "Alimentação", "Moradia"]);
        assert_eq!(totals.get("Transporte"), Some(15.0));
        assert!((totals.total() - 935.0).abs() < 1e-9);
    }

    #[test]
    fn by_category_empty() {
        let totals = AggregationService::by_category(&[], TransactionType::Income);
        assert!(totals.is_empty());
    }

    #[test]
    fn by_month_empty() {
        assert!(AggregationService::by_month(&[]).is_empty());
    }

    #[test]
    fn by_month_first_occurrence_order() {
        let txs = vec![
            income(1, "Salary", 1000.0, d(2024, 3, 5)),
            expense(2, "Food", 200.0, d(2024, 1, 10)),
            expense(3, "Food", 50.0, d(2024, 3, 20)),
            income(4, "Freelance", 300.0, d(2024, 1, 15)),
        ];
        let months = AggregationService::by_month(&txs);
        assert_eq!(months.len(), 2);
        assert_eq!(months[0].month, "mar.");
        assert_eq!(months[0].income, 1000.0);
        assert_eq!(months[0].expense, 50.0);
        assert_eq!(months[1].month, "jan.");
        assert_eq!(months[1].income, 300.0);
        assert_eq!(months[1].expense, 200.0);
    }

    #[test]
    fn by_month_merges_same_month_across_years() {
        let txs = vec![
            expense(1, "Food", 10.0, d(2023, 5, 1)),
            expense(2, "Food", 20.0, d(2024, 5, 1)),
        ];
        let months = AggregationService::by_month(&txs);
        assert_eq!(months.len(), 1);
        assert_eq!(months[0].expense, 30.0);
    }

    #[test]
    fn by_year_month_separates_years_and_sorts() {
        let txs = vec![
            expense(1, "Food", 20.0, d(2024, 5, 1)),
            expense(2, "Food", 10.0, d(2023, 5, 1)),
            income(3, "Salary", 100.0, d(2023, 12, 1)),
        ];
        let months = AggregationService::by_year_month(&txs);
        let labels: Vec<&str> = months.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(labels, vec!["mai./2023", "dez./2023", "mai./2024"]);
        assert_eq!(months[0].expense, 10.0);
        assert_eq!(months[1].income, 100.0);
    }

    #[test]
    fn filter_by_type() {
        let txs = vec![
            income(1, "Salary", 1000.0, d(2024, 1, 1)),
            expense(2, "Food", 30.0, d(2024, 1, 2)),
        ];
        assert_eq!(AggregationService::filter_by_type(&txs, None).len(), 2);
        let only_income = AggregationService::filter_by_type(&txs, Some(TransactionType::Income));
        assert_eq!(only_income.len(), 1);
        assert_eq!(only_income[0].id, 1);
    }

    #[test]
    fn aggregations_are_idempotent() {
        let txs = vec![
            income(1, "Salary", 1000.0, d(2024, 1, 1)),
            expense(2, "Food", 30.0, d(2024, 2, 2)),
        ];
        assert_eq!(
            AggregationService::by_category(&txs, TransactionType::Expense),
            AggregationService::by_category(&txs, TransactionType::Expense)
        );
        assert_eq!(AggregationService::by_month(&txs), AggregationService::by_month(&txs));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  SummaryService
// ═══════════════════════════════════════════════════════════════════

mod summary {
    use super::*;

    #[test]
    fn dashboard_summary() {
        let txs = vec![
            income(1, "Salary", 100.0, d(2024, 1, 1)),
            income(2, "Freelance", 200.0, d(2024, 1, 2)),
            expense(3, "Food", 50.0, d(2024, 1, 3)),
        ];
        let financings = vec![financing(1, 1000.0, 500.0, 100.0), financing(2, 50.0, 0.0, 5.0)];
        let s = SummaryService::build_dashboard_summary(&txs, &financings);
        assert_eq!(s.total_income, 300.0);
        assert_eq!(s.total_expense, 50.0);
        assert_eq!(s.total_balance, 250.0);
        assert_eq!(s.financing_count, 2);
    }

    #[test]
    fn dashboard_summary_empty() {
        let s = SummaryService::build_dashboard_summary(&[], &[]);
        assert_eq!(s.total_income, 0.0);
        assert_eq!(s.total_expense, 0.0);
        assert_eq!(s.total_balance, 0.0);
        assert_eq!(s.financing_count, 0);
    }

    #[test]
    fn report_summary_from_breakdown() {
        let breakdown = vec![
            CategorySummary {
                category: "Salário".into(),
                total_amount: 5000.0,
                transaction_count: 1,
                category_type: TransactionType::Income,
            },
            CategorySummary {
                category: "Alimentação".into(),
                total_amount: 800.0,
                transaction_count: 12,
                category_type: TransactionType::Expense,
            },
            CategorySummary {
                category: "Moradia".into(),
                total_amount: 1500.0,
                transaction_count: 1,
                category_type: TransactionType::Expense,
            },
        ];
        let totals = SummaryService::build_report_summary(&breakdown);
        assert_eq!(totals.total_income, 5000.0);
        assert_eq!(totals.total_expense, 2300.0);
        assert_eq!(totals.balance, 2700.0);
        assert_eq!(totals.total_transactions, 14);
    }

    #[test]
    fn transaction_totals_counts_per_type() {
        let txs = vec![
            income(1, "Salary", 100.0, d(2024, 1, 1)),
            expense(2, "Food", 30.0, d(2024, 1, 2)),
            expense(3, "Food", 20.0, d(2024, 1, 3)),
        ];
        let t = SummaryService::build_transaction_totals(&txs);
        assert_eq!(t.income_count, 1);
        assert_eq!(t.expense_count, 2);
        assert_eq!(t.total_expense, 50.0);
        assert_eq!(t.balance, 50.0);
    }

    #[test]
    fn financing_totals() {
        let financings = vec![financing(1, 1000.0, 400.0, 100.0), financing(2, 500.0, 500.0, 50.0)];
        let t = SummaryService::build_financing_totals(&financings);
        assert_eq!(t.count, 2);
        assert_eq!(t.total_financed, 1500.0);
        assert_eq!(t.total_remaining, 900.0);
        assert_eq!(t.total_paid, 600.0);
        assert_eq!(t.total_monthly, 150.0);
    }

    #[test]
    fn split_categories() {
        let cats = vec![
            category(1, "Salário", TransactionType::Income, true),
            category(2, "Alimentação", TransactionType::Expense, true),
            category(3, "Pets", TransactionType::Expense, false),
        ];
        let groups = SummaryService::split_categories(&cats);
        assert_eq!(groups.income.len(), 1);
        assert_eq!(groups.expense.len(), 2);
        assert_eq!(groups.custom.len(), 1);
        assert_eq!(groups.custom[0].name, "Pets");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ChartService
// ═══════════════════════════════════════════════════════════════════

mod chart {
    use super::*;

    #[test]
    fn pie_series_empty() {
        assert!(ChartService::to_pie_series(&CategoryTotals::new()).is_empty());
    }

    #[test]
    fn pie_series_keeps_order_and_length() {
        let totals: CategoryTotals = vec![("Food", 80.0), ("Rent", 900.0)].into_iter().collect();
        let pie = ChartService::to_pie_series(&totals);
        assert_eq!(pie.len(), 2);
        assert_eq!(pie[0].name, "Food");
        assert_eq!(pie[0].value, 80.0);
        assert_eq!(pie[1].name, "Rent");
    }

    #[test]
    fn bar_series_matches_input() {
        let mut jan = MonthlyTotals::new("jan.");
        jan.income = 100.0;
        jan.expense = 40.0;
        let bars = ChartService::to_bar_series(&[jan]);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].month, "jan.");
        assert_eq!(bars[0].income, 100.0);
        assert_eq!(bars[0].expense, 40.0);
        assert!(ChartService::to_bar_series(&[]).is_empty());
    }

    #[test]
    fn report_pies_and_comparison() {
        let report = ReportSummary {
            total_income: 5000.0,
            total_expense: 800.0,
            balance: 4200.0,
            total_transactions: 3,
            category_breakdown: vec![
                CategorySummary {
                    category: "Salário".into(),
                    total_amount: 5000.0,
                    transaction_count: 1,
                    category_type: TransactionType::Income,
                },
                CategorySummary {
                    category: "Alimentação".into(),
                    total_amount: 800.0,
                    transaction_count: 2,
                    category_type: TransactionType::Expense,
                },
            ],
        };
        let income_pie =
            ChartService::report_pie_series(&report.category_breakdown, TransactionType::Income);
        assert_eq!(income_pie.len(), 1);
        assert_eq!(income_pie[0].name, "Salário");

        let cmp = ChartService::comparison_series(&report);
        assert_eq!(cmp[0].name, "Receitas");
        assert_eq!(cmp[0].value, 5000.0);
        assert_eq!(cmp[1].name, "Despesas");
        assert_eq!(cmp[1].value, 800.0);
    }
}
