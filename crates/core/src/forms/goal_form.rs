use crate::errors::ValidationErrors;
use crate::models::goal::GoalRequest;

use super::{optional_text, parse_amount, parse_date, required_text, AmountBound};

/// Raw input of the new/edit goal form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalForm {
    pub name: String,
    pub description: String,
    pub target_amount: String,
    /// Blank means nothing saved yet.
    pub current_amount: String,
    pub deadline: String,
    pub category: String,
}

impl GoalForm {
    pub fn parse(&self) -> Result<GoalRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = required_text(&mut errors, "name", &self.name);
        let target = parse_amount(
            &mut errors,
            "targetAmount",
            &self.target_amount,
            AmountBound::Positive,
        );
        let current = if self.current_amount.trim().is_empty() {
            Some(0.0)
        } else {
            parse_amount(
                &mut errors,
                "currentAmount",
                &self.current_amount,
                AmountBound::NonNegative,
            )
        };
        let deadline = parse_date(&mut errors, "deadline", &self.deadline);
        let category = required_text(&mut errors, "category", &self.category);

        match (name, target, current, deadline, category) {
            (
                Some(name),
                Some(target_amount),
                Some(current_amount),
                Some(deadline),
                Some(category),
            ) => Ok(GoalRequest {
                name,
                description: optional_text(&self.description),
                target_amount,
                current_amount,
                deadline,
                category,
            }),
            _ => Err(errors),
        }
    }
}

/// Raw input of the "add to goal" dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddToGoalForm {
    pub amount: String,
}

impl AddToGoalForm {
    pub fn parse(&self) -> Result<f64, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        match parse_amount(&mut errors, "amount", &self.amount, AmountBound::Positive) {
            Some(amount) => Ok(amount),
            None => Err(errors),
        }
    }
}
