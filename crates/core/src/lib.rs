pub mod api;
pub mod errors;
pub mod forms;
pub mod models;
pub mod services;

use std::sync::Once;

use api::config::ApiConfig;
use api::http::HttpClient;
use api::token::{save_session, AuthToken, Session, TokenStore, REFRESH_TOKEN_KEY};
use api::traits::FinanceApi;
use forms::{
    AddToGoalForm, CategoryForm, FinancingForm, GoalForm, LoginForm, PaymentForm, RegisterForm,
    TransactionForm,
};
use models::{
    auth::User,
    category::Category,
    chart::{MonthlyBar, PieSlice},
    financing::{Financing, Payment},
    goal::Goal,
    report::{ExportFile, ReportFilter, ReportSummary},
    snapshot::Snapshot,
    summary::{CategoryGroups, DashboardSummary, FinancingTotals, TransactionTotals},
    transaction::{Transaction, TransactionType},
};
use services::{
    aggregation_service::AggregationService, chart_service::ChartService, progress,
    summary_service::SummaryService,
};

use errors::CoreError;

static INIT_TRACING: Once = Once::new();

/// Install a global `tracing` subscriber (fmt + `RUST_LOG` filter) once.
/// Later calls do nothing.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("quick_finance_core=info"));
        // A host application may already own the global subscriber.
        let _ = fmt().with_env_filter(filter).try_init();
    });
}

/// Main entry point for the Quick Finance core library.
///
/// Holds the backend client and the last fetched [`Snapshot`]. Every mutation
/// goes to the backend first and then reloads the affected list wholesale;
/// derived views are computed from the snapshot only.
#[must_use]
pub struct QuickFinance<A: FinanceApi> {
    api: A,
    snapshot: Snapshot,
}

impl<A: FinanceApi> std::fmt::Debug for QuickFinance<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuickFinance")
            .field("transactions", &self.snapshot.transactions.len())
            .field("financings", &self.snapshot.financings.len())
            .field("goals", &self.snapshot.goals.len())
            .field("categories", &self.snapshot.categories.len())
            .finish()
    }
}

impl QuickFinance<HttpClient> {
    /// Facade talking to the real backend described by `config`.
    pub fn with_config(config: ApiConfig) -> Self {
        Self::new(HttpClient::new(config))
    }
}

impl<A: FinanceApi> QuickFinance<A> {
    /// Facade over any backend implementation, starting with an empty snapshot.
    pub fn new(api: A) -> Self {
        Self {
            api,
            snapshot: Snapshot::default(),
        }
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// The data every derived view is computed from.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    // ── Session ─────────────────────────────────────────────────────

    /// Log in and save the returned tokens into `store`.
    pub async fn login(
        &self,
        store: &mut dyn TokenStore,
        form: &LoginForm,
    ) -> Result<Session, CoreError> {
        let credentials = form.parse()?;
        let auth = self.api.login(&credentials).await?;
        let token = save_session(store, &auth);
        tracing::info!(user = %auth.user.email, "logged in");
        Ok(Session {
            user: auth.user,
            token,
        })
    }

    /// Create an account; the backend logs the new user in directly.
    pub async fn register(
        &self,
        store: &mut dyn TokenStore,
        form: &RegisterForm,
    ) -> Result<Session, CoreError> {
        let request = form.parse()?;
        let auth = self.api.register(&request).await?;
        let token = save_session(store, &auth);
        tracing::info!(user = %auth.user.email, "registered");
        Ok(Session {
            user: auth.user,
            token,
        })
    }

    /// Exchange the stored refresh token for a new session.
    pub async fn refresh_session(&self, store: &mut dyn TokenStore) -> Result<Session, CoreError> {
        let refresh_token = store.get(REFRESH_TOKEN_KEY).ok_or(CoreError::MissingToken)?;
        let auth = self.api.refresh(&refresh_token).await?;
        let token = save_session(store, &auth);
        Ok(Session {
            user: auth.user,
            token,
        })
    }

    pub async fn current_user(&self, token: &AuthToken) -> Result<User, CoreError> {
        self.api.me(token).await
    }

    /// Log out on the backend, then forget the stored tokens and the snapshot.
    ///
    /// Local state is cleared even when the backend call fails; the backend
    /// error is still returned.
    pub async fn logout(
        &mut self,
        store: &mut dyn TokenStore,
        token: &AuthToken,
    ) -> Result<(), CoreError> {
        let result = self.api.logout(token).await;
        store.clear();
        self.snapshot = Snapshot::default();
        result
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// Reload every entity list.
    pub async fn refresh_all(&mut self, token: &AuthToken) -> Result<(), CoreError> {
        self.refresh_transactions(token).await?;
        self.refresh_financings(token).await?;
        self.refresh_goals(token).await?;
        self.refresh_categories(token).await?;
        Ok(())
    }

    pub async fn refresh_transactions(&mut self, token: &AuthToken) -> Result<(), CoreError> {
        let transactions = self.api.list_transactions(token).await?;
        tracing::info!(count = transactions.len(), "transactions loaded");
        self.snapshot.transactions = transactions;
        Ok(())
    }

    pub async fn refresh_financings(&mut self, token: &AuthToken) -> Result<(), CoreError> {
        let financings = self.api.list_financings(token).await?;
        tracing::info!(count = financings.len(), "financings loaded");
        // Payments of financings that no longer exist are dropped.
        self.snapshot
            .payments
            .retain(|id, _| financings.iter().any(|f| f.id == *id));
        self.snapshot.financings = financings;
        Ok(())
    }

    pub async fn refresh_goals(&mut self, token: &AuthToken) -> Result<(), CoreError> {
        let goals = self.api.list_goals(token).await?;
        tracing::info!(count = goals.len(), "goals loaded");
        self.snapshot.goals = goals;
        Ok(())
    }

    pub async fn refresh_categories(&mut self, token: &AuthToken) -> Result<(), CoreError> {
        let categories = self.api.list_categories(token).await?;
        tracing::info!(count = categories.len(), "categories loaded");
        self.snapshot.categories = categories;
        Ok(())
    }

    /// Load (or reload) the payments of one financing.
    pub async fn refresh_payments(
        &mut self,
        token: &AuthToken,
        financing_id: i64,
    ) -> Result<&[Payment], CoreError> {
        let payments = self.api.list_payments(token, financing_id).await?;
        tracing::debug!(financing_id, count = payments.len(), "payments loaded");
        self.snapshot.payments.insert(financing_id, payments);
        Ok(self.snapshot.payments_of(financing_id))
    }

    // ── Transactions ────────────────────────────────────────────────

    pub async fn add_transaction(
        &mut self,
        token: &AuthToken,
        form: &TransactionForm,
    ) -> Result<Transaction, CoreError> {
        let request = form.parse()?;
        let created = self.api.create_transaction(token, &request).await?;
        self.refresh_transactions(token).await?;
        Ok(created)
    }

    pub async fn update_transaction(
        &mut self,
        token: &AuthToken,
        id: i64,
        form: &TransactionForm,
    ) -> Result<Transaction, CoreError> {
        let request = form.parse()?;
        let updated = self.api.update_transaction(token, id, &request).await?;
        self.refresh_transactions(token).await?;
        Ok(updated)
    }

    pub async fn delete_transaction(&mut self, token: &AuthToken, id: i64) -> Result<(), CoreError> {
        self.api.delete_transaction(token, id).await?;
        self.refresh_transactions(token).await
    }

    // ── Financings & payments ───────────────────────────────────────

    pub async fn add_financing(
        &mut self,
        token: &AuthToken,
        form: &FinancingForm,
    ) -> Result<Financing, CoreError> {
        let request = form.parse()?;
        let created = self.api.create_financing(token, &request).await?;
        self.refresh_financings(token).await?;
        Ok(created)
    }

    pub async fn update_financing(
        &mut self,
        token: &AuthToken,
        id: i64,
        form: &FinancingForm,
    ) -> Result<Financing, CoreError> {
        let request = form.parse()?;
        let updated = self.api.update_financing(token, id, &request).await?;
        self.refresh_financings(token).await?;
        Ok(updated)
    }

    pub async fn delete_financing(&mut self, token: &AuthToken, id: i64) -> Result<(), CoreError> {
        self.api.delete_financing(token, id).await?;
        self.refresh_financings(token).await
    }

    /// Record a payment, then reload the payments and the financings
    /// (the backend owns the remaining balance).
    pub async fn add_payment(
        &mut self,
        token: &AuthToken,
        financing_id: i64,
        form: &PaymentForm,
    ) -> Result<Payment, CoreError> {
        let request = form.parse()?;
        let created = self.api.create_payment(token, financing_id, &request).await?;
        self.refresh_financings(token).await?;
        self.refresh_payments(token, financing_id).await?;
        Ok(created)
    }

    pub async fn delete_payment(
        &mut self,
        token: &AuthToken,
        financing_id: i64,
        payment_id: i64,
    ) -> Result<(), CoreError> {
        self.api.delete_payment(token, financing_id, payment_id).await?;
        self.refresh_financings(token).await?;
        self.refresh_payments(token, financing_id).await?;
        Ok(())
    }

    // ── Goals ───────────────────────────────────────────────────────

    pub async fn add_goal(&mut self, token: &AuthToken, form: &GoalForm) -> Result<Goal, CoreError> {
        let request = form.parse()?;
        let created = self.api.create_goal(token, &request).await?;
        self.refresh_goals(token).await?;
        Ok(created)
    }

    pub async fn update_goal(
        &mut self,
        token: &AuthToken,
        id: i64,
        form: &GoalForm,
    ) -> Result<Goal, CoreError> {
        let request = form.parse()?;
        let updated = self.api.update_goal(token, id, &request).await?;
        self.refresh_goals(token).await?;
        Ok(updated)
    }

    pub async fn delete_goal(&mut self, token: &AuthToken, id: i64) -> Result<(), CoreError> {
        self.api.delete_goal(token, id).await?;
        self.refresh_goals(token).await
    }

    /// Add money to a goal's current amount.
    pub async fn add_to_goal(
        &mut self,
        token: &AuthToken,
        id: i64,
        form: &AddToGoalForm,
    ) -> Result<Goal, CoreError> {
        let amount = form.parse()?;
        let updated = self.api.add_to_goal(token, id, amount).await?;
        self.refresh_goals(token).await?;
        Ok(updated)
    }

    pub async fn complete_goal(&mut self, token: &AuthToken, id: i64) -> Result<Goal, CoreError> {
        let updated = self.api.complete_goal(token, id).await?;
        self.refresh_goals(token).await?;
        Ok(updated)
    }

    // ── Categories ──────────────────────────────────────────────────

    pub async fn add_category(
        &mut self,
        token: &AuthToken,
        form: &CategoryForm,
    ) -> Result<Category, CoreError> {
        let request = form.parse()?;
        let created = self.api.create_category(token, &request).await?;
        self.refresh_categories(token).await?;
        Ok(created)
    }

    /// Rename a category. Default categories are rejected without a request.
    pub async fn update_category(
        &mut self,
        token: &AuthToken,
        id: i64,
        form: &CategoryForm,
    ) -> Result<Category, CoreError> {
        self.ensure_mutable_category(id)?;
        let request = form.parse()?;
        let updated = self.api.update_category(token, id, &request).await?;
        self.refresh_categories(token).await?;
        Ok(updated)
    }

    /// Delete a category. Default categories are rejected without a request.
    pub async fn delete_category(&mut self, token: &AuthToken, id: i64) -> Result<(), CoreError> {
        self.ensure_mutable_category(id)?;
        self.api.delete_category(token, id).await?;
        self.refresh_categories(token).await
    }

    /// Seed the system default categories, then reload.
    pub async fn initialize_default_categories(&mut self, token: &AuthToken) -> Result<(), CoreError> {
        self.api.initialize_default_categories(token).await?;
        self.refresh_categories(token).await
    }

    // ── Reports ─────────────────────────────────────────────────────

    /// Backend-computed report; the filter is validated before sending.
    pub async fn report_summary(
        &self,
        token: &AuthToken,
        filter: &ReportFilter,
    ) -> Result<ReportSummary, CoreError> {
        filter.validate()?;
        self.api.report_summary(token, filter).await
    }

    pub async fn report_transactions(
        &self,
        token: &AuthToken,
        filter: &ReportFilter,
    ) -> Result<Vec<Transaction>, CoreError> {
        filter.validate()?;
        self.api.report_transactions(token, filter).await
    }

    pub async fn export_transactions_csv(
        &self,
        token: &AuthToken,
        filter: &ReportFilter,
    ) -> Result<ExportFile, CoreError> {
        filter.validate()?;
        self.api.export_transactions_csv(token, filter).await
    }

    pub async fn export_financings_csv(&self, token: &AuthToken) -> Result<ExportFile, CoreError> {
        self.api.export_financings_csv(token).await
    }

    pub async fn export_pdf(
        &self,
        token: &AuthToken,
        filter: &ReportFilter,
    ) -> Result<ExportFile, CoreError> {
        filter.validate()?;
        self.api.export_pdf(token, filter).await
    }

    // ── Derived views ───────────────────────────────────────────────

    #[must_use]
    pub fn dashboard_summary(&self) -> DashboardSummary {
        SummaryService::build_dashboard_summary(
            &self.snapshot.transactions,
            &self.snapshot.financings,
        )
    }

    #[must_use]
    pub fn transaction_totals(&self) -> TransactionTotals {
        SummaryService::build_transaction_totals(&self.snapshot.transactions)
    }

    #[must_use]
    pub fn financing_totals(&self) -> FinancingTotals {
        SummaryService::build_financing_totals(&self.snapshot.financings)
    }

    /// Transactions of one type, or all of them for `None`.
    #[must_use]
    pub fn transactions_of_type(&self, transaction_type: Option<TransactionType>) -> Vec<&Transaction> {
        AggregationService::filter_by_type(&self.snapshot.transactions, transaction_type)
    }

    /// Expenses per category, as pie slices.
    #[must_use]
    pub fn expense_pie(&self) -> Vec<PieSlice> {
        let totals =
            AggregationService::by_category(&self.snapshot.transactions, TransactionType::Expense);
        ChartService::to_pie_series(&totals)
    }

    /// Income per category, as pie slices.
    #[must_use]
    pub fn income_pie(&self) -> Vec<PieSlice> {
        let totals =
            AggregationService::by_category(&self.snapshot.transactions, TransactionType::Income);
        ChartService::to_pie_series(&totals)
    }

    /// Income vs. expense per month label, in first-seen order.
    #[must_use]
    pub fn monthly_bars(&self) -> Vec<MonthlyBar> {
        ChartService::to_bar_series(&AggregationService::by_month(&self.snapshot.transactions))
    }

    /// Income vs. expense per calendar month, oldest first.
    #[must_use]
    pub fn monthly_bars_by_year(&self) -> Vec<MonthlyBar> {
        ChartService::to_bar_series(&AggregationService::by_year_month(
            &self.snapshot.transactions,
        ))
    }

    /// Paid share of a financing, or `None` if it is not in the snapshot.
    #[must_use]
    pub fn financing_progress_of(&self, financing_id: i64) -> Option<f64> {
        self.snapshot
            .financing(financing_id)
            .map(|f| progress::financing_progress(f.total_amount, f.remaining_amount))
    }

    /// Reached share of a goal, or `None` if it is not in the snapshot.
    #[must_use]
    pub fn goal_progress_of(&self, goal_id: i64) -> Option<f64> {
        self.snapshot
            .goal(goal_id)
            .map(|g| progress::goal_progress(g.current_amount, g.target_amount))
    }

    #[must_use]
    pub fn category_groups(&self) -> CategoryGroups<'_> {
        SummaryService::split_categories(&self.snapshot.categories)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn ensure_mutable_category(&self, id: i64) -> Result<(), CoreError> {
        match self.snapshot.category(id) {
            Some(c) if c.is_default => Err(CoreError::ImmutableCategory(c.name.clone())),
            _ => Ok(()),
        }
    }
}
