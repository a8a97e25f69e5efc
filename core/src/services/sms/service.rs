//! Main SMS service implementation
//!
//! The single choke point every notification goes through. Public
//! operations never return an error: outcomes are structured results, or
//! booleans for the event builders, and failures are logged here. A failed
//! notification must never fail the business operation that triggered it.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use st_shared::utils::currency::format_taka;
use st_shared::utils::phone::mask_phone_number;

use crate::domain::entities::contact::Contact;
use crate::domain::entities::payment::Payment;
use crate::domain::entities::transaction::Transaction;
use crate::errors::{DomainError, SendError};
use crate::repositories::business::BusinessRepository;
use crate::repositories::contact::ContactRepository;

use super::config::SmsServiceConfig;
use super::templates::{self, BRAND_SUFFIX};
use super::traits::SmsTransport;
use super::types::{BulkDispatchResult, DispatchResult, SmsStats, TransportPayload};

/// SMS service for composing and dispatching transactional notifications
pub struct SmsService<B, C, T>
where
    B: BusinessRepository,
    C: ContactRepository,
    T: SmsTransport,
{
    /// Business lookup used by the configuration gate
    business_repository: Arc<B>,
    /// Contact lookup for late-loading transaction contacts
    contact_repository: Arc<C>,
    /// Transport collaborator that performs the actual delivery
    transport: Arc<T>,
    /// Service configuration
    config: SmsServiceConfig,
}

impl<B, C, T> SmsService<B, C, T>
where
    B: BusinessRepository,
    C: ContactRepository,
    T: SmsTransport,
{
    /// Create a new SMS service
    ///
    /// # Arguments
    ///
    /// * `business_repository` - Business lookup implementation
    /// * `contact_repository` - Contact lookup implementation
    /// * `transport` - Transport collaborator implementation
    /// * `config` - Service configuration
    pub fn new(
        business_repository: Arc<B>,
        contact_repository: Arc<C>,
        transport: Arc<T>,
        config: SmsServiceConfig,
    ) -> Self {
        Self {
            business_repository,
            contact_repository,
            transport,
            config,
        }
    }

    /// Dispatch one composed message
    ///
    /// This method:
    /// 1. Resolves the business and checks the configuration gate
    /// 2. Builds the transport payload from the business settings
    /// 3. Awaits the transport collaborator to completion
    /// 4. Converts every failure into a structured result
    ///
    /// An unconfigured business is a normal outcome, reported with the
    /// exact message "SMS not configured for this business" and logged at
    /// debug level only. Lookup and transport failures are logged at error
    /// level with the underlying detail. This method never returns an
    /// error and never panics.
    ///
    /// # Arguments
    ///
    /// * `mobile` - Destination mobile number
    /// * `message` - Final message text
    /// * `business_id` - Business whose settings gate and fund the send
    pub async fn send_sms(&self, mobile: &str, message: &str, business_id: Uuid) -> DispatchResult {
        match self.try_send(mobile, message, business_id).await {
            Ok(message_id) => {
                tracing::info!(
                    phone = %mask_phone_number(mobile),
                    business_id = %business_id,
                    transport = self.transport.name(),
                    message_id = %message_id,
                    event = "sms_sent",
                    "SMS handed to transport"
                );
                DispatchResult::sent(mobile, message)
            }
            Err(SendError::Unconfigured) => {
                tracing::debug!(
                    business_id = %business_id,
                    event = "sms_not_configured",
                    "SMS not configured for this business"
                );
                DispatchResult::failure(SendError::Unconfigured.to_string())
            }
            Err(err) => {
                tracing::error!(
                    phone = %mask_phone_number(mobile),
                    business_id = %business_id,
                    error = %err,
                    event = "sms_send_failed",
                    "SMS Service Error"
                );
                DispatchResult::failure(format!("Failed to send SMS: {}", err))
            }
        }
    }

    /// Check whether SMS sending is enabled and fully configured
    ///
    /// Fails closed: a missing business, a missing settings blob, or a
    /// repository error all yield `false`.
    pub async fn is_sms_configured(&self, business_id: Uuid) -> bool {
        match self.business_repository.find_by_id(business_id).await {
            Ok(Some(business)) => business.is_sms_configured(),
            Ok(None) => false,
            Err(err) => {
                tracing::error!(
                    business_id = %business_id,
                    error = %err,
                    event = "sms_config_check_failed",
                    "SMS Configuration Check Error"
                );
                false
            }
        }
    }

    /// SMS usage statistics for a business
    ///
    /// Extension point: only the configured flag is live, the counters
    /// wait on delivery-log persistence.
    pub async fn get_sms_stats(&self, business_id: Uuid) -> SmsStats {
        SmsStats {
            configured: self.is_sms_configured(business_id).await,
            total_sent: 0,
            failed_count: 0,
            last_sent: None,
        }
    }

    /// Send the welcome message to a new customer
    pub async fn send_welcome_sms(
        &self,
        customer_name: &str,
        mobile: &str,
        business_id: Uuid,
    ) -> DispatchResult {
        let variables =
            HashMap::from([("customer_name".to_string(), customer_name.to_string())]);
        let message = templates::render(templates::WELCOME_TEMPLATE, &variables);
        self.send_sms(mobile, &message, business_id).await
    }

    /// Send the welcome message to a new supplier
    pub async fn send_supplier_welcome_sms(
        &self,
        supplier_name: &str,
        mobile: &str,
        business_id: Uuid,
    ) -> DispatchResult {
        let variables =
            HashMap::from([("supplier_name".to_string(), supplier_name.to_string())]);
        let message = templates::render(templates::SUPPLIER_WELCOME_TEMPLATE, &variables);
        self.send_sms(mobile, &message, business_id).await
    }

    /// Send an order confirmation
    ///
    /// `total_amount` is inserted as given; callers format it beforehand.
    pub async fn send_order_confirmation_sms(
        &self,
        customer_name: &str,
        mobile: &str,
        order_number: &str,
        total_amount: &str,
        business_id: Uuid,
    ) -> DispatchResult {
        let variables = HashMap::from([
            ("customer_name".to_string(), customer_name.to_string()),
            ("order_number".to_string(), order_number.to_string()),
            ("total_amount".to_string(), total_amount.to_string()),
        ]);
        let message = templates::render(templates::ORDER_CONFIRMATION_TEMPLATE, &variables);
        self.send_sms(mobile, &message, business_id).await
    }

    /// Send a payment reminder
    ///
    /// `due_amount` is inserted as given; callers format it beforehand.
    pub async fn send_payment_reminder_sms(
        &self,
        customer_name: &str,
        mobile: &str,
        due_amount: &str,
        business_id: Uuid,
    ) -> DispatchResult {
        let variables = HashMap::from([
            ("customer_name".to_string(), customer_name.to_string()),
            ("due_amount".to_string(), due_amount.to_string()),
        ]);
        let message = templates::render(templates::PAYMENT_REMINDER_TEMPLATE, &variables);
        self.send_sms(mobile, &message, business_id).await
    }

    /// Send a one-time password
    pub async fn send_otp_sms(&self, mobile: &str, otp: &str, business_id: Uuid) -> DispatchResult {
        let variables = HashMap::from([("otp".to_string(), otp.to_string())]);
        let message = templates::render(templates::OTP_TEMPLATE, &variables);
        self.send_sms(mobile, &message, business_id).await
    }

    /// Render a caller-supplied template and dispatch it
    pub async fn send_custom_sms(
        &self,
        mobile: &str,
        template: &str,
        variables: &HashMap<String, String>,
        business_id: Uuid,
    ) -> DispatchResult {
        let message = templates::render(template, variables);
        self.send_sms(mobile, &message, business_id).await
    }

    /// Dispatch one message to many destinations
    ///
    /// Destinations are processed in input order with the configured
    /// pacing interval between consecutive sends. A failed destination
    /// does not halt the batch; every destination gets exactly one entry
    /// tagged with its number.
    pub async fn send_bulk_sms(
        &self,
        mobiles: &[String],
        message: &str,
        business_id: Uuid,
    ) -> Vec<BulkDispatchResult> {
        tracing::info!(
            business_id = %business_id,
            recipients = mobiles.len(),
            event = "bulk_sms_started",
            "Starting bulk SMS dispatch"
        );

        let mut results = Vec::with_capacity(mobiles.len());
        for (index, mobile) in mobiles.iter().enumerate() {
            // Pacing delay between sends to stay under provider rate limits
            if index > 0 {
                tokio::time::sleep(self.config.bulk_send_interval).await;
            }

            let result = self.send_sms(mobile, message, business_id).await;
            results.push(BulkDispatchResult {
                mobile: mobile.clone(),
                result,
            });
        }

        results
    }

    /// Notify a customer that their payment was received on a sale invoice
    ///
    /// Quotes the latest non-return payment line, falling back to the
    /// transaction's total paid when no line is recorded yet, and the
    /// contact's current balance as the outstanding due.
    pub async fn send_sale_invoice_sms(
        &self,
        transaction: &Transaction,
        business_id: Uuid,
    ) -> bool {
        match self.build_sale_invoice_sms(transaction, business_id).await {
            Ok(result) => result.success,
            Err(err) => {
                tracing::error!(
                    invoice_no = %transaction.invoice_no,
                    business_id = %business_id,
                    error = %err,
                    event = "sale_invoice_sms_failed",
                    "Sale invoice SMS failed"
                );
                false
            }
        }
    }

    /// Notify a customer about a newly entered sale
    pub async fn send_new_sale_sms(&self, transaction: &Transaction, business_id: Uuid) -> bool {
        match self.build_new_sale_sms(transaction, business_id).await {
            Ok(result) => result.success,
            Err(err) => {
                tracing::error!(
                    invoice_no = %transaction.invoice_no,
                    business_id = %business_id,
                    error = %err,
                    event = "new_sale_sms_failed",
                    "New sale SMS failed"
                );
                false
            }
        }
    }

    /// Notify a customer about a sales return
    pub async fn send_sales_return_sms(
        &self,
        transaction: &Transaction,
        business_id: Uuid,
    ) -> bool {
        match self.build_sales_return_sms(transaction, business_id).await {
            Ok(result) => result.success,
            Err(err) => {
                tracing::error!(
                    invoice_no = %transaction.invoice_no,
                    business_id = %business_id,
                    error = %err,
                    event = "sales_return_sms_failed",
                    "Sales return SMS failed"
                );
                false
            }
        }
    }

    /// Notify a supplier that a payment went out to them
    pub async fn send_supplier_payment_sms(
        &self,
        contact: &Contact,
        payment: &Payment,
        business_id: Uuid,
    ) -> bool {
        match self
            .build_supplier_payment_sms(contact, payment, business_id)
            .await
        {
            Ok(result) => result.success,
            Err(err) => {
                tracing::error!(
                    contact_id = %contact.id,
                    business_id = %business_id,
                    error = %err,
                    event = "supplier_payment_sms_failed",
                    "Supplier payment SMS failed"
                );
                false
            }
        }
    }

    /// Notify a customer that their order was shipped
    pub async fn send_shipping_sms(&self, transaction: &Transaction, business_id: Uuid) -> bool {
        match self.build_shipping_sms(transaction, business_id).await {
            Ok(result) => result.success,
            Err(err) => {
                tracing::error!(
                    invoice_no = %transaction.invoice_no,
                    business_id = %business_id,
                    error = %err,
                    event = "shipping_sms_failed",
                    "Shipping SMS failed"
                );
                false
            }
        }
    }

    /// Resolve the business, check the gate and hand over to the transport
    async fn try_send(
        &self,
        mobile: &str,
        message: &str,
        business_id: Uuid,
    ) -> Result<String, SendError> {
        let business = self
            .business_repository
            .find_by_id(business_id)
            .await?
            .ok_or(SendError::Unconfigured)?;

        let sms_settings = match business.sms_settings {
            Some(settings) if settings.is_configured() => settings,
            _ => return Err(SendError::Unconfigured),
        };

        let payload = TransportPayload {
            sms_settings,
            mobile_number: mobile.to_string(),
            sms_body: message.to_string(),
        };

        self.transport
            .send(&payload)
            .await
            .map_err(SendError::transport)
    }

    async fn build_sale_invoice_sms(
        &self,
        transaction: &Transaction,
        business_id: Uuid,
    ) -> Result<DispatchResult, SendError> {
        let contact = self.resolve_contact(transaction).await?;
        let mobile = require_mobile(&contact)?;

        let (payment_amount, payment_method) = match transaction.latest_payment() {
            Some(payment) => (payment.amount, capitalize(&payment.method)),
            None => (transaction.total_paid, "Cash".to_string()),
        };

        let message = format!(
            "Received: {} via {} | Current Due: {} {}",
            format_taka(payment_amount),
            payment_method,
            format_taka(contact.balance),
            BRAND_SUFFIX
        );

        Ok(self.send_sms(mobile, &message, business_id).await)
    }

    async fn build_new_sale_sms(
        &self,
        transaction: &Transaction,
        business_id: Uuid,
    ) -> Result<DispatchResult, SendError> {
        let contact = self.resolve_contact(transaction).await?;
        let mobile = require_mobile(&contact)?;

        // Balance before this sale was booked
        let current_balance = contact.balance;
        let transaction_amount = transaction.final_total;
        let prev_due = current_balance - transaction_amount;

        let message = format!(
            "Invoice#{} | Bill: {} | Prev Due: {} | Outstanding: {} {}",
            transaction.invoice_no,
            format_taka(transaction_amount),
            format_taka(prev_due),
            format_taka(current_balance),
            BRAND_SUFFIX
        );

        Ok(self.send_sms(mobile, &message, business_id).await)
    }

    async fn build_sales_return_sms(
        &self,
        transaction: &Transaction,
        business_id: Uuid,
    ) -> Result<DispatchResult, SendError> {
        let contact = self.resolve_contact(transaction).await?;
        let mobile = require_mobile(&contact)?;

        // Balance before the return was credited
        let current_balance = contact.balance;
        let return_amount = transaction.final_total.abs();
        let prev_due = current_balance + return_amount;

        let message = format!(
            "Return#{} | Returned: {} | Prev Due: {} | Outstanding: {} {}",
            transaction.invoice_no,
            format_taka(return_amount),
            format_taka(prev_due),
            format_taka(current_balance),
            BRAND_SUFFIX
        );

        Ok(self.send_sms(mobile, &message, business_id).await)
    }

    async fn build_supplier_payment_sms(
        &self,
        contact: &Contact,
        payment: &Payment,
        business_id: Uuid,
    ) -> Result<DispatchResult, SendError> {
        let mobile = require_mobile(contact)?;

        let payment_method = capitalize(&payment.method);
        let cheque_number = payment.cheque_number.as_deref().unwrap_or("N/A");

        let message = format!(
            "Paid: {} via {} | Cheque: {} | Current Due: {} {}",
            format_taka(payment.amount),
            payment_method,
            cheque_number,
            format_taka(contact.balance),
            BRAND_SUFFIX
        );

        Ok(self.send_sms(mobile, &message, business_id).await)
    }

    async fn build_shipping_sms(
        &self,
        transaction: &Transaction,
        business_id: Uuid,
    ) -> Result<DispatchResult, SendError> {
        let contact = self.resolve_contact(transaction).await?;
        let mobile = require_mobile(&contact)?;

        let mut shipping_info: Vec<String> = Vec::new();
        if let Some(details) = non_empty(&transaction.shipping_details) {
            shipping_info.push(details.to_string());
        }
        if let Some(address) = non_empty(&transaction.shipping_address) {
            shipping_info.push(address.to_string());
        }
        if let Some(status) = non_empty(&transaction.shipping_status) {
            shipping_info.push(format!("Status: {}", capitalize(status)));
        }
        if let Some(delivered_to) = non_empty(&transaction.delivered_to) {
            shipping_info.push(format!("Delivered to: {}", delivered_to));
        }
        for field in &transaction.shipping_custom_fields {
            if !field.is_empty() {
                shipping_info.push(field.clone());
            }
        }

        let shipping_details = if shipping_info.is_empty() {
            "Updated".to_string()
        } else {
            shipping_info.join(" | ")
        };

        let message = format!(
            "Your Product has been Sent. Shipping Details: {} | {}",
            shipping_details, BRAND_SUFFIX
        );

        Ok(self.send_sms(mobile, &message, business_id).await)
    }

    /// Contact attached to the transaction, late-loaded when missing
    async fn resolve_contact(&self, transaction: &Transaction) -> Result<Contact, SendError> {
        if let Some(contact) = &transaction.contact {
            return Ok(contact.clone());
        }

        let contact = self
            .contact_repository
            .find_by_id(transaction.contact_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "Contact".to_string(),
            })?;
        Ok(contact)
    }
}

/// Dispatchable mobile number of a contact, blank counts as missing
fn require_mobile(contact: &Contact) -> Result<&str, SendError> {
    contact
        .mobile_number()
        .ok_or_else(|| SendError::lookup(format!("contact {} has no mobile number", contact.id)))
}

/// Uppercase the first character, as recorded methods are lowercase slugs
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
