use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::auth::{AuthResponse, LoginRequest, RegisterRequest, User};
use crate::models::category::{Category, CategoryRequest};
use crate::models::financing::{Financing, FinancingRequest, Payment, PaymentRequest};
use crate::models::goal::{Goal, GoalRequest};
use crate::models::report::{ExportFile, ReportFilter, ReportSummary};
use crate::models::transaction::{Transaction, TransactionRequest, TransactionType};

use super::config::ApiConfig;
use super::endpoints;
use super::token::AuthToken;
use super::traits::{
    AuthApi, CategoriesApi, FinancingsApi, GoalsApi, ReportsApi, TransactionsApi,
};

const JSON: &str = "application/json";
const CSV: &str = "text/csv;charset=utf-8";
const PDF: &str = "application/pdf";

/// Longest raw response body quoted back in an error message.
const MAX_ERROR_BODY_LEN: usize = 200;

/// REST client for the finance backend.
///
/// - **Config**: injected [`ApiConfig`] (base URL, timeout), no globals.
/// - **Auth**: `Authorization: Bearer <token>` from the token passed per call.
/// - **Errors**: non-2xx responses become [`CoreError`]; nothing is retried.
pub struct HttpClient {
    client: Client,
    config: ApiConfig,
}

impl HttpClient {
    pub fn new(config: ApiConfig) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_millis(config.timeout_ms));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            config,
        }
    }

    /// Client configured from `QFIN_API_URL` / `QFIN_API_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, CoreError> {
        Ok(Self::new(ApiConfig::from_env()?))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str, token: Option<&AuthToken>) -> RequestBuilder {
        debug!(%method, path, authenticated = token.is_some(), "backend request");
        let builder = self
            .client
            .request(method, self.config.url(path))
            .header(CONTENT_TYPE, JSON);
        match token {
            Some(token) => builder.header(AUTHORIZATION, token.header_value()),
            None => builder,
        }
    }

    /// Send and turn any non-2xx status into an error.
    async fn send(&self, builder: RequestBuilder) -> Result<Response, CoreError> {
        let response = builder.send().await?;
        let status = response.status().as_u16();
        if response.status().is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(status, &body);
        warn!(status, %message, "backend returned an error");
        Err(CoreError::from_status(status, message))
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, CoreError> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            CoreError::Deserialization(format!("Failed to parse backend response: {e}"))
        })
    }

    async fn call<B, T>(
        &self,
        method: Method,
        path: &str,
        token: Option<&AuthToken>,
        body: Option<&B>,
    ) -> Result<T, CoreError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let mut builder = self.request(method, path, token);
        if let Some(body) = body {
            builder = builder.body(encode(body)?);
        }
        let response = self.send(builder).await?;
        Self::read_json(response).await
    }

    /// Like `call`, for endpoints whose response body is ignored.
    async fn call_empty<B>(
        &self,
        method: Method,
        path: &str,
        token: Option<&AuthToken>,
        body: Option<&B>,
    ) -> Result<(), CoreError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let mut builder = self.request(method, path, token);
        if let Some(body) = body {
            builder = builder.body(encode(body)?);
        }
        self.send(builder).await?;
        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, token: &AuthToken) -> Result<T, CoreError> {
        self.call::<(), T>(Method::GET, path, Some(token), None).await
    }

    async fn download(
        &self,
        method: Method,
        path: &str,
        token: &AuthToken,
        filter: Option<&ReportFilter>,
        file_name: &str,
        default_mime: &str,
    ) -> Result<ExportFile, CoreError> {
        let mut builder = self.request(method, path, Some(token));
        if let Some(filter) = filter {
            builder = builder.body(encode(filter)?);
        }
        let response = self.send(builder).await?;
        let mime_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty() && !v.starts_with(JSON))
            .unwrap_or(default_mime)
            .to_string();
        let bytes = response.bytes().await?.to_vec();
        debug!(file_name, size = bytes.len(), "export downloaded");

        Ok(ExportFile {
            file_name: file_name.to_string(),
            mime_type,
            bytes,
        })
    }
}

/// JSON-encode a request body.
fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>, CoreError> {
    serde_json::to_vec(body)
        .map_err(|e| CoreError::Serialization(format!("Failed to encode request body: {e}")))
}

/// Human-readable message for a failed response.
///
/// Prefers the `message` or `error` field of a JSON body, then a short raw
/// body, then a generic text naming the status.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                if !text.trim().is_empty() {
                    return text.trim().to_string();
                }
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() && trimmed.len() <= MAX_ERROR_BODY_LEN && !trimmed.starts_with('{') {
        return trimmed.to_string();
    }
    format!("request failed with status {status}")
}

// ── Auth ────────────────────────────────────────────────────────────

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AuthApi for HttpClient {
    async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, CoreError> {
        self.call(Method::POST, endpoints::LOGIN, None, Some(credentials))
            .await
    }

    async fn register(&self, user: &RegisterRequest) -> Result<AuthResponse, CoreError> {
        self.call(Method::POST, endpoints::REGISTER, None, Some(user))
            .await
    }

    async fn logout(&self, token: &AuthToken) -> Result<(), CoreError> {
        self.call_empty::<()>(Method::POST, endpoints::LOGOUT, Some(token), None)
            .await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<AuthResponse, CoreError> {
        let body = serde_json::json!({ "refreshToken": refresh_token });
        self.call(Method::POST, endpoints::REFRESH_TOKEN, None, Some(&body))
            .await
    }

    async fn me(&self, token: &AuthToken) -> Result<User, CoreError> {
        self.get(endpoints::ME, token).await
    }
}

// ── Transactions ────────────────────────────────────────────────────

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl TransactionsApi for HttpClient {
    async fn list_transactions(&self, token: &AuthToken) -> Result<Vec<Transaction>, CoreError> {
        self.get(endpoints::TRANSACTIONS, token).await
    }

    async fn create_transaction(
        &self,
        token: &AuthToken,
        transaction: &TransactionRequest,
    ) -> Result<Transaction, CoreError> {
        self.call(Method::POST, endpoints::TRANSACTIONS, Some(token), Some(transaction))
            .await
    }

    async fn update_transaction(
        &self,
        token: &AuthToken,
        id: i64,
        transaction: &TransactionRequest,
    ) -> Result<Transaction, CoreError> {
        self.call(Method::PUT, &endpoints::transaction(id), Some(token), Some(transaction))
            .await
    }

    async fn delete_transaction(&self, token: &AuthToken, id: i64) -> Result<(), CoreError> {
        self.call_empty::<()>(Method::DELETE, &endpoints::transaction(id), Some(token), None)
            .await
    }
}

// ── Financings & payments ───────────────────────────────────────────

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl FinancingsApi for HttpClient {
    async fn list_financings(&self, token: &AuthToken) -> Result<Vec<Financing>, CoreError> {
        self.get(endpoints::FINANCINGS, token).await
    }

    async fn get_financing(&self, token: &AuthToken, id: i64) -> Result<Financing, CoreError> {
        self.get(&endpoints::financing(id), token).await
    }

    async fn create_financing(
        &self,
        token: &AuthToken,
        financing: &FinancingRequest,
    ) -> Result<Financing, CoreError> {
        self.call(Method::POST, endpoints::FINANCINGS, Some(token), Some(financing))
            .await
    }

    async fn update_financing(
        &self,
        token: &AuthToken,
        id: i64,
        financing: &FinancingRequest,
    ) -> Result<Financing, CoreError> {
        self.call(Method::PUT, &endpoints::financing(id), Some(token), Some(financing))
            .await
    }

    async fn delete_financing(&self, token: &AuthToken, id: i64) -> Result<(), CoreError> {
        self.call_empty::<()>(Method::DELETE, &endpoints::financing(id), Some(token), None)
            .await
    }

    async fn list_payments(
        &self,
        token: &AuthToken,
        financing_id: i64,
    ) -> Result<Vec<Payment>, CoreError> {
        let mut payments: Vec<Payment> = self.get(&endpoints::payments(financing_id), token).await?;
        for p in &mut payments {
            if p.financing_id == 0 {
                p.financing_id = financing_id;
            }
        }
        Ok(payments)
    }

    async fn create_payment(
        &self,
        token: &AuthToken,
        financing_id: i64,
        payment: &PaymentRequest,
    ) -> Result<Payment, CoreError> {
        let mut created: Payment = self
            .call(Method::POST, &endpoints::payments(financing_id), Some(token), Some(payment))
            .await?;
        if created.financing_id == 0 {
            created.financing_id = financing_id;
        }
        Ok(created)
    }

    async fn delete_payment(
        &self,
        token: &AuthToken,
        financing_id: i64,
        payment_id: i64,
    ) -> Result<(), CoreError> {
        self.call_empty::<()>(
            Method::DELETE,
            &endpoints::payment(financing_id, payment_id),
            Some(token),
            None,
        )
        .await
    }
}

// ── Goals ───────────────────────────────────────────────────────────

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl GoalsApi for HttpClient {
    async fn list_goals(&self, token: &AuthToken) -> Result<Vec<Goal>, CoreError> {
        self.get(endpoints::GOALS, token).await
    }

    async fn get_goal(&self, token: &AuthToken, id: i64) -> Result<Goal, CoreError> {
        self.get(&endpoints::goal(id), token).await
    }

    async fn create_goal(&self, token: &AuthToken, goal: &GoalRequest) -> Result<Goal, CoreError> {
        self.call(Method::POST, endpoints::GOALS, Some(token), Some(goal))
            .await
    }

    async fn update_goal(
        &self,
        token: &AuthToken,
        id: i64,
        goal: &GoalRequest,
    ) -> Result<Goal, CoreError> {
        self.call(Method::PUT, &endpoints::goal(id), Some(token), Some(goal))
            .await
    }

    async fn delete_goal(&self, token: &AuthToken, id: i64) -> Result<(), CoreError> {
        self.call_empty::<()>(Method::DELETE, &endpoints::goal(id), Some(token), None)
            .await
    }

    async fn add_to_goal(
        &self,
        token: &AuthToken,
        id: i64,
        amount: f64,
    ) -> Result<Goal, CoreError> {
        let body = serde_json::json!({ "amount": amount });
        self.call(Method::PATCH, &endpoints::goal_add(id), Some(token), Some(&body))
            .await
    }

    async fn complete_goal(&self, token: &AuthToken, id: i64) -> Result<Goal, CoreError> {
        self.call::<(), Goal>(Method::PATCH, &endpoints::goal_complete(id), Some(token), None)
            .await
    }
}

// ── Categories ──────────────────────────────────────────────────────

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CategoriesApi for HttpClient {
    async fn list_categories(&self, token: &AuthToken) -> Result<Vec<Category>, CoreError> {
        self.get(endpoints::CATEGORIES, token).await
    }

    async fn list_categories_by_type(
        &self,
        token: &AuthToken,
        category_type: TransactionType,
    ) -> Result<Vec<Category>, CoreError> {
        self.get(&endpoints::categories_by_type(category_type), token)
            .await
    }

    async fn get_category(&self, token: &AuthToken, id: i64) -> Result<Category, CoreError> {
        self.get(&endpoints::category(id), token).await
    }

    async fn create_category(
        &self,
        token: &AuthToken,
        category: &CategoryRequest,
    ) -> Result<Category, CoreError> {
        self.call(Method::POST, endpoints::CATEGORIES, Some(token), Some(category))
            .await
    }

    async fn update_category(
        &self,
        token: &AuthToken,
        id: i64,
        category: &CategoryRequest,
    ) -> Result<Category, CoreError> {
        self.call(Method::PUT, &endpoints::category(id), Some(token), Some(category))
            .await
    }

    async fn delete_category(&self, token: &AuthToken, id: i64) -> Result<(), CoreError> {
        self.call_empty::<()>(Method::DELETE, &endpoints::category(id), Some(token), None)
            .await
    }

    async fn initialize_default_categories(&self, token: &AuthToken) -> Result<(), CoreError> {
        self.call_empty::<()>(
            Method::POST,
            endpoints::CATEGORIES_INITIALIZE,
            Some(token),
            None,
        )
        .await
    }
}

// ── Reports & exports ───────────────────────────────────────────────

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ReportsApi for HttpClient {
    async fn report_summary(
        &self,
        token: &AuthToken,
        filter: &ReportFilter,
    ) -> Result<ReportSummary, CoreError> {
        self.call(Method::POST, endpoints::REPORT_SUMMARY, Some(token), Some(filter))
            .await
    }

    async fn report_transactions(
        &self,
        token: &AuthToken,
        filter: &ReportFilter,
    ) -> Result<Vec<Transaction>, CoreError> {
        self.call(Method::POST, endpoints::REPORT_TRANSACTIONS, Some(token), Some(filter))
            .await
    }

    async fn export_transactions_csv(
        &self,
        token: &AuthToken,
        filter: &ReportFilter,
    ) -> Result<ExportFile, CoreError> {
        self.download(
            Method::POST,
            endpoints::EXPORT_TRANSACTIONS_CSV,
            token,
            Some(filter),
            "transacoes.csv",
            CSV,
        )
        .await
    }

    async fn export_financings_csv(&self, token: &AuthToken) -> Result<ExportFile, CoreError> {
        self.download(
            Method::GET,
            endpoints::EXPORT_FINANCINGS_CSV,
            token,
            None,
            "financiamentos.csv",
            CSV,
        )
        .await
    }

    async fn export_pdf(
        &self,
        token: &AuthToken,
        filter: &ReportFilter,
    ) -> Result<ExportFile, CoreError> {
        self.download(
            Method::POST,
            endpoints::EXPORT_PDF,
            token,
            Some(filter),
            "relatorio.pdf",
            PDF,
        )
        .await
    }
}
