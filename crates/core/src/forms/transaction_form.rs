use crate::errors::ValidationErrors;
use crate::models::transaction::{TransactionRequest, TransactionType};

use super::{parse_amount, parse_date, required_text, AmountBound};

/// Raw input of the new/edit transaction form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionForm {
    pub transaction_type: TransactionType,
    pub amount: String,
    pub category: String,
    pub description: String,
    /// `YYYY-MM-DD`
    pub date: String,
}

impl TransactionForm {
    pub fn parse(&self) -> Result<TransactionRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let amount = parse_amount(&mut errors, "amount", &self.amount, AmountBound::Positive);
        let category = required_text(&mut errors, "category", &self.category);
        let description = required_text(&mut errors, "description", &self.description);
        let date = parse_date(&mut errors, "date", &self.date);

        match (amount, category, description, date) {
            (Some(amount), Some(category), Some(description), Some(date)) if errors.is_empty() => {
                Ok(TransactionRequest {
                    transaction_type: self.transaction_type,
                    amount,
                    category,
                    description,
                    date,
                })
            }
            _ => Err(errors),
        }
    }
}
