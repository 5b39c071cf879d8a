//! Checkout session construction.
//!
//! [`SessionBuilder`] turns a validated [`CheckoutRequest`] and its
//! [`ResolvedPrice`] into a processor-neutral [`SessionCreateSpec`]. Both the
//! JSON and the HTML endpoints go through the same builder.

use std::collections::BTreeMap;

use crate::price::ResolvedPrice;
use crate::request::CheckoutRequest;

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "es";

/// Key of the buyer name custom field.
pub const BUYER_NAME_FIELD_KEY: &str = "buyer_name";

/// Default label of the buyer name custom field.
pub const DEFAULT_BUYER_NAME_LABEL: &str = "Nombre del comprador";

/// Session metadata. Keys are unique by construction.
pub type Metadata = BTreeMap<String, String>;

/// Checkout mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutMode {
    /// One-time payment.
    Payment,
}

impl CheckoutMode {
    /// Wire value of the mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Payment => "payment",
        }
    }
}

/// A single line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Price ID.
    pub price: String,
    /// Quantity.
    pub quantity: u32,
}

/// A free-text field the payer fills in on the checkout page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomField {
    /// Field key, echoed back on the completed session.
    pub key: String,
    /// Label shown to the payer.
    pub label: String,
}

/// Everything needed to create a checkout session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCreateSpec {
    /// Line items (always exactly one).
    pub line_items: Vec<LineItem>,
    /// Checkout mode.
    pub mode: CheckoutMode,
    /// Redirect after payment.
    pub success_url: String,
    /// Redirect when the payer backs out.
    pub cancel_url: String,
    /// Checkout page locale.
    pub locale: String,
    /// Metadata, present only when attendee names were supplied.
    pub metadata: Option<Metadata>,
    /// Custom text fields.
    pub custom_fields: Vec<CustomField>,
    /// Whether to ask the payer for a phone number.
    pub phone_number_collection: bool,
}

/// Builds [`SessionCreateSpec`]s with a fixed locale and buyer name label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionBuilder {
    locale: String,
    buyer_name_label: String,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE, DEFAULT_BUYER_NAME_LABEL)
    }
}

impl SessionBuilder {
    /// Create a builder.
    pub fn new(locale: impl Into<String>, buyer_name_label: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            buyer_name_label: buyer_name_label.into(),
        }
    }

    /// The configured locale.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Assemble the session creation request.
    ///
    /// `origin` is the base used for the default `/success` and `/cancel`
    /// redirects when the request does not carry its own.
    #[must_use]
    pub fn build(
        &self,
        request: &CheckoutRequest,
        price: &ResolvedPrice,
        origin: &str,
    ) -> SessionCreateSpec {
        let origin = origin.trim_end_matches('/');

        let success_url = request
            .success_url()
            .map_or_else(|| format!("{origin}/success"), str::to_string);
        let cancel_url = request
            .cancel_url()
            .map_or_else(|| format!("{origin}/cancel"), str::to_string);

        SessionCreateSpec {
            line_items: vec![LineItem {
                price: price.price_id.clone(),
                quantity: request.quantity(),
            }],
            mode: CheckoutMode::Payment,
            success_url,
            cancel_url,
            locale: self.locale.clone(),
            metadata: attendee_metadata(request),
            custom_fields: vec![CustomField {
                key: BUYER_NAME_FIELD_KEY.to_string(),
                label: self.buyer_name_label.clone(),
            }],
            phone_number_collection: true,
        }
    }
}

/// Metadata built from attendee names, or `None` when there are none.
///
/// `attendee_{n}` is keyed by ticket, so a ticket without a name leaves a
/// gap rather than shifting later attendees.
fn attendee_metadata(request: &CheckoutRequest) -> Option<Metadata> {
    let attendees = request.attendees();
    if attendees.is_empty() {
        return None;
    }

    let mut metadata = Metadata::new();
    metadata.insert("quantity".into(), request.quantity().to_string());
    metadata.insert("attendeeNames".into(), request.attendee_names().join(", "));
    for attendee in attendees {
        metadata.insert(format!("attendee_{}", attendee.ticket), attendee.name.clone());
    }

    Some(metadata)
}
