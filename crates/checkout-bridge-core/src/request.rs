//! Checkout request validation.

use crate::error::{CheckoutError, Result};

/// Quantity used when the caller does not send one.
pub const DEFAULT_QUANTITY: u32 = 1;

/// Name of the person attending on one ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendee {
    /// 1-based ticket position, never above the request quantity.
    pub ticket: u32,
    /// Trimmed, non-blank name.
    pub name: String,
}

/// A validated request to start a checkout.
///
/// Constructed per request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    product_id: String,
    quantity: u32,
    success_url: Option<String>,
    cancel_url: Option<String>,
    attendees: Vec<Attendee>,
}

impl CheckoutRequest {
    /// Create a request for `quantity` units of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Validation`] if the product ID is blank or the
    /// quantity is below 1.
    pub fn new(product_id: impl Into<String>, quantity: i64) -> Result<Self> {
        let product_id = product_id.into().trim().to_string();
        if product_id.is_empty() {
            return Err(CheckoutError::validation("productId is required"));
        }

        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q >= 1)
            .ok_or_else(|| CheckoutError::validation("quantity must be a positive integer"))?;

        Ok(Self {
            product_id,
            quantity,
            success_url: None,
            cancel_url: None,
            attendees: Vec::new(),
        })
    }

    /// Override the success redirect URL. Blank values are ignored.
    #[must_use]
    pub fn with_success_url(mut self, url: Option<String>) -> Self {
        self.success_url = non_blank(url);
        self
    }

    /// Override the cancel redirect URL. Blank values are ignored.
    #[must_use]
    pub fn with_cancel_url(mut self, url: Option<String>) -> Self {
        self.cancel_url = non_blank(url);
        self
    }

    /// Attach attendee names by position: the first name is ticket 1.
    ///
    /// Names past the quantity are ignored. A blank name leaves its ticket
    /// without an attendee; later names keep their positions.
    #[must_use]
    pub fn with_attendee_names<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tickets = 0..self.quantity;
        self.with_indexed_attendee_names(tickets.zip(names))
    }

    /// Attach attendee names keyed by 0-based ticket index.
    ///
    /// Indexes at or above the quantity and blank names are ignored. When an
    /// index repeats, the first name wins.
    #[must_use]
    pub fn with_indexed_attendee_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = (u32, S)>,
        S: Into<String>,
    {
        let quantity = self.quantity;
        let mut attendees: Vec<Attendee> = names
            .into_iter()
            .filter(|(index, _)| *index < quantity)
            .filter_map(|(index, name)| {
                non_blank(Some(name.into())).map(|name| Attendee {
                    ticket: index + 1,
                    name,
                })
            })
            .collect();
        attendees.sort_by_key(|attendee| attendee.ticket);
        attendees.dedup_by_key(|attendee| attendee.ticket);

        self.attendees = attendees;
        self
    }

    /// The product to check out.
    #[must_use]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Number of units.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Caller-supplied success URL.
    #[must_use]
    pub fn success_url(&self) -> Option<&str> {
        self.success_url.as_deref()
    }

    /// Caller-supplied cancel URL.
    #[must_use]
    pub fn cancel_url(&self) -> Option<&str> {
        self.cancel_url.as_deref()
    }

    /// Named attendees, ordered by ticket.
    #[must_use]
    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    /// Attendee names, ordered by ticket.
    #[must_use]
    pub fn attendee_names(&self) -> Vec<&str> {
        self.attendees.iter().map(|a| a.name.as_str()).collect()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
