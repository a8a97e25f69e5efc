//! Business-bound notification facade
//!
//! Call sites that always act for one business hold an [`SmsNotifier`]
//! instead of threading the business id through every call. The bound id
//! is explicit at construction; there is no ambient fallback.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use st_shared::utils::currency::format_amount;

use crate::repositories::business::BusinessRepository;
use crate::repositories::contact::ContactRepository;

use super::service::SmsService;
use super::templates;
use super::traits::SmsTransport;
use super::types::DispatchResult;

/// Convenience facade over [`SmsService`] for a single business
pub struct SmsNotifier<B, C, T>
where
    B: BusinessRepository,
    C: ContactRepository,
    T: SmsTransport,
{
    service: Arc<SmsService<B, C, T>>,
    business_id: Uuid,
}

impl<B, C, T> SmsNotifier<B, C, T>
where
    B: BusinessRepository,
    C: ContactRepository,
    T: SmsTransport,
{
    /// Create a facade bound to one business
    ///
    /// # Arguments
    ///
    /// * `service` - Shared SMS service
    /// * `business_id` - Business every send is attributed to
    pub fn new(service: Arc<SmsService<B, C, T>>, business_id: Uuid) -> Self {
        Self {
            service,
            business_id,
        }
    }

    /// Business this facade is bound to
    pub fn business_id(&self) -> Uuid {
        self.business_id
    }

    /// Send an already composed message
    pub async fn send_sms(&self, mobile: &str, message: &str) -> DispatchResult {
        self.service.send_sms(mobile, message, self.business_id).await
    }

    /// Welcome a new customer
    pub async fn send_welcome_sms(&self, customer_name: &str, mobile: &str) -> DispatchResult {
        self.service
            .send_welcome_sms(customer_name, mobile, self.business_id)
            .await
    }

    /// Welcome a new supplier with the Bengali onboarding text
    pub async fn send_supplier_welcome_sms(
        &self,
        supplier_name: &str,
        mobile: &str,
    ) -> DispatchResult {
        let variables =
            HashMap::from([("supplier_name".to_string(), supplier_name.to_string())]);
        self.service
            .send_custom_sms(
                mobile,
                templates::SUPPLIER_WELCOME_BN_TEMPLATE,
                &variables,
                self.business_id,
            )
            .await
    }

    /// Confirm a received payment
    ///
    /// The cheque segment only appears for the `cheque` method with a
    /// non-empty cheque number. Amounts are formatted to two decimals
    /// here; callers pass raw values.
    pub async fn send_payment_confirmation_sms(
        &self,
        mobile: &str,
        amount: f64,
        method: &str,
        cheque_number: Option<&str>,
        total_due: f64,
    ) -> DispatchResult {
        let cheque_info = match cheque_number {
            Some(number) if method == "cheque" && !number.is_empty() => {
                format!(" | Cheque: {}", number)
            }
            _ => String::new(),
        };

        let variables = HashMap::from([
            ("amount".to_string(), format_amount(amount)),
            ("method".to_string(), method.to_string()),
            ("cheque_info".to_string(), cheque_info),
            ("total_due".to_string(), format_amount(total_due)),
        ]);
        self.service
            .send_custom_sms(
                mobile,
                templates::PAYMENT_CONFIRMATION_TEMPLATE,
                &variables,
                self.business_id,
            )
            .await
    }

    /// Confirm an order
    pub async fn send_order_confirmation_sms(
        &self,
        customer_name: &str,
        mobile: &str,
        order_number: &str,
        total_amount: &str,
    ) -> DispatchResult {
        self.service
            .send_order_confirmation_sms(
                customer_name,
                mobile,
                order_number,
                total_amount,
                self.business_id,
            )
            .await
    }

    /// Remind a customer of their outstanding due
    pub async fn send_payment_reminder_sms(
        &self,
        customer_name: &str,
        mobile: &str,
        due_amount: &str,
    ) -> DispatchResult {
        self.service
            .send_payment_reminder_sms(customer_name, mobile, due_amount, self.business_id)
            .await
    }

    /// Send a one-time password
    pub async fn send_otp_sms(&self, mobile: &str, otp: &str) -> DispatchResult {
        self.service.send_otp_sms(mobile, otp, self.business_id).await
    }

    /// Render a caller-supplied template and send it
    pub async fn send_custom_sms(
        &self,
        mobile: &str,
        template: &str,
        variables: &HashMap<String, String>,
    ) -> DispatchResult {
        self.service
            .send_custom_sms(mobile, template, variables, self.business_id)
            .await
    }

    /// Whether the bound business can send SMS at all
    pub async fn is_sms_configured(&self) -> bool {
        self.service.is_sms_configured(self.business_id).await
    }
}
