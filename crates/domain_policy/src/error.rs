//! Policy domain errors

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur when constructing a policy
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    #[error("Invalid cover period: {start} to {end}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },

    #[error("Invalid customer details: {0}")]
    InvalidCustomer(String),
}
