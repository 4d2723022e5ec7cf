//! Quotebook Core Library
//!
//! Domain types, the error taxonomy and the storage port shared by every
//! Quotebook backend.

pub mod error;
pub mod ports;
pub mod types;

pub use error::{QuoteError, Result};
pub use ports::QuoteStore;
pub use types::{NewQuote, Quote, QuoteId};
