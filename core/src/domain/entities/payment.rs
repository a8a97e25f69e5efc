//! Payment line recorded against a transaction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single payment recorded against a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Amount received (or refunded, for return lines)
    pub amount: f64,

    /// Payment method as recorded at the till (e.g. "cash", "bkash", "cheque")
    pub method: String,

    /// Cheque number when the method is cheque
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cheque_number: Option<String>,

    /// Whether this line reverses a payment (refund on a return)
    #[serde(default)]
    pub is_return: bool,

    /// When the payment was taken
    pub paid_on: DateTime<Utc>,
}

impl Payment {
    /// Creates a new payment line taken now
    pub fn new(amount: f64, method: impl Into<String>) -> Self {
        Self {
            amount,
            method: method.into(),
            cheque_number: None,
            is_return: false,
            paid_on: Utc::now(),
        }
    }

    /// Sets the cheque number
    pub fn with_cheque_number(mut self, cheque_number: impl Into<String>) -> Self {
        self.cheque_number = Some(cheque_number.into());
        self
    }

    /// Marks this line as a return (refund)
    pub fn as_return(mut self) -> Self {
        self.is_return = true;
        self
    }

    /// Sets the payment timestamp
    pub fn paid_at(mut self, paid_on: DateTime<Utc>) -> Self {
        self.paid_on = paid_on;
        self
    }
}
