use crate::errors::ValidationErrors;
use crate::models::financing::{FinancingRequest, FinancingType, PaymentRequest};

use super::{optional_text, parse_amount, parse_date, required_text, AmountBound};

/// Raw input of the new/edit financing form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinancingForm {
    pub name: String,
    pub total_amount: String,
    pub remaining_amount: String,
    pub monthly_payment: String,
    /// Wire name of a [`FinancingType`]; unknown names become `OTHER`
    pub financing_type: String,
    pub end_date: String,
}

impl FinancingForm {
    pub fn parse(&self) -> Result<FinancingRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = required_text(&mut errors, "name", &self.name);
        let total = parse_amount(
            &mut errors,
            "totalAmount",
            &self.total_amount,
            AmountBound::Positive,
        );
        let remaining = parse_amount(
            &mut errors,
            "remainingAmount",
            &self.remaining_amount,
            AmountBound::NonNegative,
        );
        let monthly = parse_amount(
            &mut errors,
            "monthlyPayment",
            &self.monthly_payment,
            AmountBound::Positive,
        );
        let financing_type = required_text(&mut errors, "type", &self.financing_type)
            .map(|raw| FinancingType::parse(&raw));
        let end_date = parse_date(&mut errors, "endDate", &self.end_date);

        if let (Some(total), Some(remaining)) = (total, remaining) {
            if remaining > total {
                errors.push("remainingAmount", "must not exceed the total amount");
            }
        }

        match (name, total, remaining, monthly, financing_type, end_date) {
            (
                Some(name),
                Some(total_amount),
                Some(remaining_amount),
                Some(monthly_payment),
                Some(financing_type),
                Some(end_date),
            ) if errors.is_empty() => Ok(FinancingRequest {
                name,
                total_amount,
                remaining_amount,
                monthly_payment,
                financing_type,
                end_date,
            }),
            _ => Err(errors),
        }
    }
}

/// Raw input of the payment form shown under a financing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentForm {
    pub amount: String,
    pub payment_date: String,
    pub description: String,
}

impl PaymentForm {
    pub fn parse(&self) -> Result<PaymentRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let amount = parse_amount(&mut errors, "amount", &self.amount, AmountBound::Positive);
        let payment_date = parse_date(&mut errors, "paymentDate", &self.payment_date);

        match (amount, payment_date) {
            (Some(amount), Some(payment_date)) => Ok(PaymentRequest {
                amount,
                payment_date,
                description: optional_text(&self.description),
            }),
            _ => Err(errors),
        }
    }
}
