//! HTTP handlers

pub mod error;
pub mod health;
pub mod quotes;

pub use error::ApiError;
pub use health::health;
