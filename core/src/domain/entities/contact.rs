//! Contact entity representing a customer or supplier in a business's ledger.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the kind of contact in a business's ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    /// A customer buying from the business
    Customer,
    /// A supplier the business buys from
    Supplier,
}

/// Contact entity representing a customer or supplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier for the contact
    pub id: Uuid,

    /// Owning business
    pub business_id: Uuid,

    /// Display name
    pub name: String,

    /// Mobile number in local or E.164 form, absent for walk-in contacts
    pub mobile: Option<String>,

    /// Running ledger balance (amount currently due)
    pub balance: f64,

    /// Whether the contact is a customer or a supplier
    pub contact_type: ContactType,
}

impl Contact {
    /// Creates a new Contact instance with a zero balance and no mobile
    pub fn new(business_id: Uuid, name: impl Into<String>, contact_type: ContactType) -> Self {
        Self {
            id: Uuid::new_v4(),
            business_id,
            name: name.into(),
            mobile: None,
            balance: 0.0,
            contact_type,
        }
    }

    /// Sets the mobile number
    pub fn with_mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = Some(mobile.into());
        self
    }

    /// Sets the ledger balance
    pub fn with_balance(mut self, balance: f64) -> Self {
        self.balance = balance;
        self
    }

    /// Mobile number usable for dispatch, treating blank as missing
    pub fn mobile_number(&self) -> Option<&str> {
        self.mobile.as_deref().filter(|m| !m.is_empty())
    }
}
