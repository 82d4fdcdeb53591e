//! Customer record embedded in a policy
//!
//! Customers are not independently addressable in the workbench; they travel
//! inside the policy that insures them. Contact details are validated when a
//! policy is built, not on every mutation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::CustomerId;

/// The insured customer on a policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Customer {
    /// Unique identifier
    pub id: CustomerId,
    /// Display name (person or organisation)
    #[validate(length(min = 1, message = "customer name must not be empty"))]
    pub name: String,
    /// Contact email
    #[validate(email(message = "invalid customer email"))]
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Postal address
    pub address: String,
}

impl Customer {
    /// Creates a customer with a fresh identifier
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: CustomerId::new_v7(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }
}
