use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::auth::{AuthResponse, LoginRequest, RegisterRequest, User};
use crate::models::category::{Category, CategoryRequest};
use crate::models::financing::{Financing, FinancingRequest, Payment, PaymentRequest};
use crate::models::goal::{Goal, GoalRequest};
use crate::models::report::{ExportFile, ReportFilter, ReportSummary};
use crate::models::transaction::{Transaction, TransactionRequest, TransactionType};

use super::token::AuthToken;

// One trait per backend resource. `HttpClient` implements all of them;
// tests swap in in-memory fakes. Authenticated calls take the token
// explicitly, nothing is read from ambient state.

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AuthApi: Send + Sync {
    async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, CoreError>;

    async fn register(&self, user: &RegisterRequest) -> Result<AuthResponse, CoreError>;

    async fn logout(&self, token: &AuthToken) -> Result<(), CoreError>;

    /// Exchange a refresh token for a new session.
    async fn refresh(&self, refresh_token: &str) -> Result<AuthResponse, CoreError>;

    /// The user the token belongs to.
    async fn me(&self, token: &AuthToken) -> Result<User, CoreError>;
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait TransactionsApi: Send + Sync {
    async fn list_transactions(&self, token: &AuthToken) -> Result<Vec<Transaction>, CoreError>;

    async fn create_transaction(
        &self,
        token: &AuthToken,
        transaction: &TransactionRequest,
    ) -> Result<Transaction, CoreError>;

    async fn update_transaction(
        &self,
        token: &AuthToken,
        id: i64,
        transaction: &TransactionRequest,
    ) -> Result<Transaction, CoreError>;

    async fn delete_transaction(&self, token: &AuthToken, id: i64) -> Result<(), CoreError>;
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait FinancingsApi: Send + Sync {
    async fn list_financings(&self, token: &AuthToken) -> Result<Vec<Financing>, CoreError>;

    async fn get_financing(&self, token: &AuthToken, id: i64) -> Result<Financing, CoreError>;

    async fn create_financing(
        &self,
        token: &AuthToken,
        financing: &FinancingRequest,
    ) -> Result<Financing, CoreError>;

    async fn update_financing(
        &self,
        token: &AuthToken,
        id: i64,
        financing: &FinancingRequest,
    ) -> Result<Financing, CoreError>;

    async fn delete_financing(&self, token: &AuthToken, id: i64) -> Result<(), CoreError>;

    async fn list_payments(
        &self,
        token: &AuthToken,
        financing_id: i64,
    ) -> Result<Vec<Payment>, CoreError>;

    async fn create_payment(
        &self,
        token: &AuthToken,
        financing_id: i64,
        payment: &PaymentRequest,
    ) -> Result<Payment, CoreError>;

    async fn delete_payment(
        &self,
        token: &AuthToken,
        financing_id: i64,
        payment_id: i64,
    ) -> Result<(), CoreError>;
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait GoalsApi: Send + Sync {
    async fn list_goals(&self, token: &AuthToken) -> Result<Vec<Goal>, CoreError>;

    async fn get_goal(&self, token: &AuthToken, id: i64) -> Result<Goal, CoreError>;

    async fn create_goal(&self, token: &AuthToken, goal: &GoalRequest) -> Result<Goal, CoreError>;

    async fn update_goal(
        &self,
        token: &AuthToken,
        id: i64,
        goal: &GoalRequest,
    ) -> Result<Goal, CoreError>;

    async fn delete_goal(&self, token: &AuthToken, id: i64) -> Result<(), CoreError>;

    /// Add `amount` to the goal's current amount.
    async fn add_to_goal(&self, token: &AuthToken, id: i64, amount: f64)
        -> Result<Goal, CoreError>;

    async fn complete_goal(&self, token: &AuthToken, id: i64) -> Result<Goal, CoreError>;
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CategoriesApi: Send + Sync {
    async fn list_categories(&self, token: &AuthToken) -> Result<Vec<Category>, CoreError>;

    async fn list_categories_by_type(
        &self,
        token: &AuthToken,
        category_type: TransactionType,
    ) -> Result<Vec<Category>, CoreError>;

    async fn get_category(&self, token: &AuthToken, id: i64) -> Result<Category, CoreError>;

    async fn create_category(
        &self,
        token: &AuthToken,
        category: &CategoryRequest,
    ) -> Result<Category, CoreError>;

    async fn update_category(
        &self,
        token: &AuthToken,
        id: i64,
        category: &CategoryRequest,
    ) -> Result<Category, CoreError>;

    async fn delete_category(&self, token: &AuthToken, id: i64) -> Result<(), CoreError>;

    /// Seed the system default categories for the user.
    async fn initialize_default_categories(&self, token: &AuthToken) -> Result<(), CoreError>;
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ReportsApi: Send + Sync {
    async fn report_summary(
        &self,
        token: &AuthToken,
        filter: &ReportFilter,
    ) -> Result<ReportSummary, CoreError>;

    async fn report_transactions(
        &self,
        token: &AuthToken,
        filter: &ReportFilter,
    ) -> Result<Vec<Transaction>, CoreError>;

    async fn export_transactions_csv(
        &self,
        token: &AuthToken,
        filter: &ReportFilter,
    ) -> Result<ExportFile, CoreError>;

    async fn export_financings_csv(&self, token: &AuthToken) -> Result<ExportFile, CoreError>;

    async fn export_pdf(
        &self,
        token: &AuthToken,
        filter: &ReportFilter,
    ) -> Result<ExportFile, CoreError>;
}

/// Everything the [`QuickFinance`](crate::QuickFinance) facade needs.
pub trait FinanceApi:
    AuthApi + TransactionsApi + FinancingsApi + GoalsApi + CategoriesApi + ReportsApi
{
}

impl<T> FinanceApi for T where
    T: AuthApi + TransactionsApi + FinancingsApi + GoalsApi + CategoriesApi + ReportsApi
{
}
