//! HTTP request handlers.

pub mod checkout;
pub mod health;
pub mod landing;

pub use health::health;
pub use landing::landing;
