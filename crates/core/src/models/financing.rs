use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of installment obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinancingType {
    Loan,
    Mortgage,
    CarFinancing,
    PersonalLoan,
    StudentLoan,
    /// Anything the client does not recognize lands here.
    #[serde(other)]
    Other,
}

impl FinancingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinancingType::Loan => "LOAN",
            FinancingType::Mortgage => "MORTGAGE",
            FinancingType::CarFinancing => "CAR_FINANCING",
            FinancingType::PersonalLoan => "PERSONAL_LOAN",
            FinancingType::StudentLoan => "STUDENT_LOAN",
            FinancingType::Other => "OTHER",
        }
    }

    /// Parse a wire value, case-insensitively. Unknown values map to `Other`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "LOAN" => FinancingType::Loan,
            "MORTGAGE" => FinancingType::Mortgage,
            "CAR_FINANCING" => FinancingType::CarFinancing,
            "PERSONAL_LOAN" => FinancingType::PersonalLoan,
            "STUDENT_LOAN" => FinancingType::StudentLoan,
            _ => FinancingType::Other,
        }
    }
}

impl std::fmt::Display for FinancingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An installment debt tracked by total and remaining balance.
///
/// `remaining_amount` is maintained by the backend. Recording a payment
/// does not change it on the client until the financing list is reloaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Financing {
    pub id: i64,
    pub name: String,
    pub total_amount: f64,
    pub remaining_amount: f64,
    pub monthly_payment: f64,
    #[serde(rename = "type")]
    pub financing_type: FinancingType,
    pub end_date: NaiveDate,
}

impl Financing {
    /// `total_amount - remaining_amount`.
    pub fn amount_paid(&self) -> f64 {
        self.total_amount - self.remaining_amount
    }
}

/// Body for creating or replacing a financing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingRequest {
    pub name: String,
    pub total_amount: f64,
    pub remaining_amount: f64,
    pub monthly_payment: f64,
    #[serde(rename = "type")]
    pub financing_type: FinancingType,
    pub end_date: NaiveDate,
}

/// A payment recorded against a financing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    /// Back-reference only. Filled in by the client when the backend omits it.
    #[serde(default)]
    pub financing_id: i64,
    pub amount: f64,
    pub payment_date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body for recording a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub amount: f64,
    pub payment_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
