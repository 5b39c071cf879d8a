//! Form body extraction for the HTML endpoint.
//!
//! Browsers post forms either as `multipart/form-data` or as
//! `application/x-www-form-urlencoded`; both are accepted and flattened into
//! the same field map. An unreadable body is rejected with the HTML error
//! page, so iframe callers still receive a message.

use std::collections::HashMap;

use async_trait::async_trait;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;

use checkout_bridge_core::{CheckoutError, CheckoutRequest, SessionResult, DEFAULT_QUANTITY};

use crate::respond::PostMessagePage;

/// Text fields of a posted form. The first value of a repeated name wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    fields: HashMap<String, String>,
}

impl FormFields {
    /// Look up a field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    fn insert(&mut self, name: String, value: String) {
        self.fields.entry(name).or_insert(value);
    }

    /// Turn the posted fields into a validated [`CheckoutRequest`].
    ///
    /// - `quantity` is read from its leading integer, so `"2.5"` is 2. A
    ///   value with no leading digits falls back to 1; a number below 1 is
    ///   rejected.
    /// - `attendeeName{i}` names the attendee on ticket `i + 1`, for `i`
    ///   below the quantity. Blank names leave their ticket unnamed.
    pub fn into_checkout_request(self) -> Result<CheckoutRequest, CheckoutError> {
        let product_id = self.get("productId").unwrap_or_default();
        let quantity = self
            .get("quantity")
            .and_then(leading_integer)
            .unwrap_or(i64::from(DEFAULT_QUANTITY));

        let attendees = self.fields.iter().filter_map(|(name, value)| {
            let index = attendee_index(name)?;
            Some((index, value.as_str()))
        });

        Ok(CheckoutRequest::new(product_id, quantity)?
            .with_success_url(self.get("successUrl").map(str::to_string))
            .with_cancel_url(self.get("cancelUrl").map(str::to_string))
            .with_indexed_attendee_names(attendees))
    }
}

/// Ticket index of an `attendeeName{i}` field. Only the canonical spelling
/// counts, so `attendeeName01` is not a second name for ticket 2.
fn attendee_index(name: &str) -> Option<u32> {
    let digits = name.strip_prefix("attendeeName")?;
    let index = digits.parse::<u32>().ok()?;
    (index.to_string() == digits).then_some(index)
}

/// The integer at the start of `value`, after optional whitespace and sign.
///
/// Digit runs too long for an `i64` saturate, which the quantity check then
/// rejects.
fn leading_integer(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let magnitude = rest[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

impl<K, V> FromIterator<(K, V)> for FormFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::default();
        for (name, value) in iter {
            fields.insert(name.into(), value.into());
        }
        fields
    }
}

#[async_trait]
impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = PostMessagePage;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if is_multipart {
            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| reject(&e.body_text()))?;

            let mut fields = Self::default();
            while let Some(field) = multipart
                .next_field()
                .await
                .map_err(|e| reject(&e.body_text()))?
            {
                let Some(name) = field.name().map(str::to_string) else {
                    continue;
                };
                let value = field
                    .text()
                    .await
                    .map_err(|e| reject(&e.body_text()))?;
                fields.insert(name, value);
            }
            return Ok(fields);
        }

        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
            .await
            .map_err(|e| reject(&e.body_text()))?;

        Ok(pairs.into_iter().collect())
    }
}

fn reject(reason: &str) -> PostMessagePage {
    tracing::debug!(reason = %reason, "Rejected checkout form body");
    PostMessagePage(SessionResult::from(Err(CheckoutError::validation(reason))))
}
