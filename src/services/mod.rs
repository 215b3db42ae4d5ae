//! Workflows consumed by the presentation layer.
//!
//! Services compose repository queries into view data and turn form input into
//! store mutations. Failures are logged here before being handed back.

use thiserror::Error;

pub mod appointment;
pub mod calendar;
pub mod client;
pub mod schedule;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    #[error("form error: {0}")]
    Form(String),

    #[error("type constraint violated: {0}")]
    TypeConstraint(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
