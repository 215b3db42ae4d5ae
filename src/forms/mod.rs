//! Form definitions backing the schedule screens.
//!
//! Forms carry raw user input. They check presence of required fields and
//! convert into domain payloads; the store itself never validates.

use thiserror::Error;
use validator::ValidationErrors;

pub mod appointment;
pub mod client;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid client id")]
    InvalidClientId,

    #[error("invalid name")]
    InvalidName,

    #[error("invalid date")]
    InvalidDate,

    #[error("invalid time")]
    InvalidTime,

    #[error("invalid status")]
    InvalidStatus,
}

/// Free text is kept as typed apart from surrounding whitespace. Escaping is
/// left to whatever renders it.
pub(crate) fn normalize_text(value: &str) -> String {
    value.trim().to_string()
}
