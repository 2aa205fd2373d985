use crate::errors::ValidationErrors;
use crate::models::category::CategoryRequest;
use crate::models::transaction::TransactionType;

use super::required_text;

/// Longest accepted category name, in characters.
pub const MAX_CATEGORY_NAME_LEN: usize = 50;

/// Raw input of the new/edit category form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
    pub category_type: TransactionType,
    pub parent_id: Option<i64>,
}

impl CategoryForm {
    pub fn parse(&self) -> Result<CategoryRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = required_text(&mut errors, "name", &self.name);
        if let Some(name) = &name {
            if name.chars().count() > MAX_CATEGORY_NAME_LEN {
                errors.push(
                    "name",
                    format!("must be at most {MAX_CATEGORY_NAME_LEN} characters"),
                );
            }
        }

        match name {
            Some(name) if errors.is_empty() => Ok(CategoryRequest {
                name,
                category_type: self.category_type,
                parent_id: self.parent_id,
            }),
            _ => Err(errors),
        }
    }
}
