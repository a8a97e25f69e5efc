//! Transaction entity (sale or sales return) with its payment lines and
//! shipping information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::contact::Contact;
use super::payment::Payment;

/// Transaction entity a notification can be built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier for the transaction
    pub id: Uuid,

    /// Owning business
    pub business_id: Uuid,

    /// Ledger contact the transaction belongs to
    pub contact_id: Uuid,

    /// Contact record when already loaded by the caller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    /// Invoice or reference number shown to the customer
    pub invoice_no: String,

    /// Grand total of the transaction (negative for sales returns)
    pub final_total: f64,

    /// Total amount paid so far
    pub total_paid: f64,

    /// Payment lines recorded against this transaction
    #[serde(default)]
    pub payment_lines: Vec<Payment>,

    /// When the transaction was entered
    pub transaction_date: DateTime<Utc>,

    /// Free-form shipping details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_details: Option<String>,

    /// Shipping address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,

    /// Shipping status slug (e.g. "ordered", "shipped", "delivered")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_status: Option<String>,

    /// Person the consignment was handed over to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_to: Option<String>,

    /// Extra per-business shipping fields, shown in entry order
    #[serde(default)]
    pub shipping_custom_fields: Vec<String>,
}

impl Transaction {
    /// Creates a new Transaction instance with no payments recorded
    pub fn new(
        business_id: Uuid,
        contact_id: Uuid,
        invoice_no: impl Into<String>,
        final_total: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            business_id,
            contact_id,
            contact: None,
            invoice_no: invoice_no.into(),
            final_total,
            total_paid: 0.0,
            payment_lines: Vec::new(),
            transaction_date: Utc::now(),
            shipping_details: None,
            shipping_address: None,
            shipping_status: None,
            delivered_to: None,
            shipping_custom_fields: Vec::new(),
        }
    }

    /// Attaches the already-loaded contact record
    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contact_id = contact.id;
        self.contact = Some(contact);
        self
    }

    /// Sets the total paid so far
    pub fn with_total_paid(mut self, total_paid: f64) -> Self {
        self.total_paid = total_paid;
        self
    }

    /// Records a payment line
    pub fn with_payment(mut self, payment: Payment) -> Self {
        self.payment_lines.push(payment);
        self
    }

    /// Sets the shipping status slug
    pub fn with_shipping_status(mut self, status: impl Into<String>) -> Self {
        self.shipping_status = Some(status.into());
        self
    }

    /// Latest non-return payment line, if any
    pub fn latest_payment(&self) -> Option<&Payment> {
        self.payment_lines
            .iter()
            .filter(|p| !p.is_return)
            .max_by_key(|p| p.paid_on)
    }
}
