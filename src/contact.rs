//! Checks for the "Fala Connosco" contact form.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Messages are shown to the visitor as-is.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContactError {
    #[error("Por favor, preencha todos os campos.")]
    MissingFields,
    #[error("Por favor, informe um email válido.")]
    InvalidEmail,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// All three fields are required (blank counts as empty) and the email must
/// look like `user@host.tld`.
pub fn validate(name: &str, email: &str, message: &str) -> Result<(), ContactError> {
    if [name, email, message].iter().any(|field| field.trim().is_empty()) {
        return Err(ContactError::MissingFields);
    }
    if !is_valid_email(email.trim()) {
        return Err(ContactError::InvalidEmail);
    }
    Ok(())
}
