//! Endpoint paths, relative to [`ApiConfig::base_url`](super::config::ApiConfig).

use crate::models::transaction::TransactionType;

pub const LOGIN: &str = "/auth/login";
pub const REGISTER: &str = "/auth/register";
pub const LOGOUT: &str = "/auth/logout";
pub const REFRESH_TOKEN: &str = "/auth/refresh";
pub const ME: &str = "/auth/me";

pub const TRANSACTIONS: &str = "/transactions";
pub const FINANCINGS: &str = "/financings";
pub const GOALS: &str = "/goals";
pub const CATEGORIES: &str = "/categories";
pub const CATEGORIES_INITIALIZE: &str = "/categories/initialize";

pub const REPORT_SUMMARY: &str = "/reports/summary";
pub const REPORT_TRANSACTIONS: &str = "/reports/transactions";
pub const EXPORT_TRANSACTIONS_CSV: &str = "/reports/export/transactions/csv";
pub const EXPORT_FINANCINGS_CSV: &str = "/reports/export/financings/csv";
pub const EXPORT_PDF: &str = "/reports/export/pdf";

pub fn transaction(id: i64) -> String {
    format!("{TRANSACTIONS}/{id}")
}

pub fn financing(id: i64) -> String {
    format!("{FINANCINGS}/{id}")
}

pub fn payments(financing_id: i64) -> String {
    format!("{FINANCINGS}/{financing_id}/payments")
}

pub fn payment(financing_id: i64, payment_id: i64) -> String {
    format!("{FINANCINGS}/{financing_id}/payments/{payment_id}")
}

pub fn goal(id: i64) -> String {
    format!("{GOALS}/{id}")
}

pub fn goal_add(id: i64) -> String {
    format!("{GOALS}/{id}/add")
}

pub fn goal_complete(id: i64) -> String {
    format!("{GOALS}/{id}/complete")
}

pub fn category(id: i64) -> String {
    format!("{CATEGORIES}/{id}")
}

pub fn categories_by_type(category_type: TransactionType) -> String {
    format!("{CATEGORIES}/type/{}", category_type.as_str())
}
