//! Business logic services

pub mod quote_service;

pub use quote_service::QuoteService;
