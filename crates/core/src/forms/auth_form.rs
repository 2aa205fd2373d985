use crate::errors::ValidationErrors;
use crate::models::auth::{LoginRequest, RegisterRequest};

use super::required_text;

pub const MIN_NAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn parse(&self) -> Result<LoginRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let email = required_text(&mut errors, "email", &self.email);
        if self.password.is_empty() {
            errors.push("password", "is required");
        }
        match email {
            Some(email) if errors.is_empty() => Ok(LoginRequest {
                email,
                password: self.password.clone(),
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn parse(&self) -> Result<RegisterRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = required_text(&mut errors, "name", &self.name);
        if let Some(name) = &name {
            if name.chars().count() < MIN_NAME_LEN {
                errors.push("name", format!("must have at least {MIN_NAME_LEN} characters"));
            }
        }

        let email = required_text(&mut errors, "email", &self.email);
        if let Some(email) = &email {
            if !email.contains('@') {
                errors.push("email", "is not a valid e-mail address");
            }
        }

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(
                "password",
                format!("must have at least {MIN_PASSWORD_LEN} characters"),
            );
        }
        if self.password != self.confirm_password {
            errors.push("confirmPassword", "passwords do not match");
        }

        match (name, email) {
            (Some(name), Some(email)) if errors.is_empty() => Ok(RegisterRequest {
                name,
                email,
                password: self.password.clone(),
            }),
            _ => Err(errors),
        }
    }
}
