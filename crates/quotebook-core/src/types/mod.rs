//! Domain types

pub mod quote;

pub use quote::{NewQuote, Quote, QuoteId};
