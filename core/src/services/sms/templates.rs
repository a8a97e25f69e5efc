//! Message templates and placeholder rendering
//!
//! The built-in template texts are user-facing and contractually exact,
//! punctuation and Bengali passages included. Note the suffix variants:
//! most transactional messages carry an en-dash before the brand name,
//! the confirmation/reminder/OTP templates a plain hyphen, and the OTP
//! template omits the hotline.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

/// Brand and hotline suffix appended to event-builder messages
pub const BRAND_SUFFIX: &str = "– WALL TOUCH, Hotline: 01712968571";

/// Welcome message for a newly added customer
pub const WELCOME_TEMPLATE: &str =
    "Welcome {customer_name}! You are Added To Our Customer List – WALL TOUCH, Hotline: 01712968571";

/// Welcome message for a newly added supplier
pub const SUPPLIER_WELCOME_TEMPLATE: &str =
    "Dear {supplier_name}, You are Added To Our Vendor List – WALL TOUCH, Hotline: 01712968571";

/// Bengali welcome message for a newly added supplier, used by the facade
pub const SUPPLIER_WELCOME_BN_TEMPLATE: &str =
    "Dear {supplier_name}, আপনি সফলভাবে আমাদের Vendor List-এ যুক্ত হয়েছেন। সহযোগিতার জন্য আন্তরিক ধন্যবাদ। – WALL TOUCH, Hotline: 01712968571";

/// Order confirmation with the order number and total
pub const ORDER_CONFIRMATION_TEMPLATE: &str =
    "Dear {customer_name}, আপনার অর্ডার #{order_number} নিশ্চিত করা হয়েছে। Total: {total_amount} টাকা। ধন্যবাদ! - WALL TOUCH, Hotline: 01712968571";

/// Reminder quoting the outstanding amount
pub const PAYMENT_REMINDER_TEMPLATE: &str =
    "Dear {customer_name}, আপনার {due_amount} টাকা বকেয়া রয়েছে। অনুগ্রহ করে শীঘ্রই পরিশোধ করুন। - WALL TOUCH, Hotline: 01712968571";

/// One-time password message with the fixed expiry and warning text
pub const OTP_TEMPLATE: &str =
    "Your OTP code is: {otp}. This code will expire in 5 minutes. Do not share this code with anyone. - WALL TOUCH";

/// Payment confirmation used by the facade; `{cheque_info}` is either
/// empty or a pre-built ` | Cheque: <number>` segment
pub const PAYMENT_CONFIRMATION_TEMPLATE: &str =
    "Paid: ৳{amount} via {method}{cheque_info} | Current Due: ৳{total_due} | পেমেন্ট প্রদান করা হয়েছে – WALL TOUCH, Hotline: 01712968571";

// Placeholder token, any non-brace key between braces
static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^{}]+)\}").unwrap());

/// Fill `{name}` placeholders from the variable map
///
/// Single pass over the template: tokens with a matching key are replaced
/// with the value's literal text, tokens without one are left verbatim,
/// and replacement values are never re-scanned, so a value containing
/// `{otherkey}` stays as-is. No numeric formatting happens here; callers
/// pre-format amounts.
pub fn render(template: &str, variables: &HashMap<String, String>) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures<'_>| {
            match variables.get(&caps[1]) {
                Some(value) => value.clone(),
                // Leave unmatched placeholders untouched
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
