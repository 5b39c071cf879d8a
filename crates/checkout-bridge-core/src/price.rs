//! Active price selection.

use crate::error::{CheckoutError, Result};

/// Maximum number of active prices fetched per product.
pub const PRICE_LOOKUP_LIMIT: u32 = 10;

/// The price a checkout session is created against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPrice {
    /// Processor price ID.
    pub price_id: String,
}

impl ResolvedPrice {
    /// Pick the first price in the order the processor returned them.
    ///
    /// No currency or amount filtering is applied.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::NoActivePrice`] if `price_ids` is empty.
    pub fn first_of<I, S>(price_ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        price_ids
            .into_iter()
            .next()
            .map(|id| Self {
                price_id: id.into(),
            })
            .ok_or(CheckoutError::NoActivePrice)
    }
}
