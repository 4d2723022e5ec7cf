//! Storage trait for quote persistence

use crate::types::{NewQuote, Quote, QuoteId};
use crate::Result;
use async_trait::async_trait;

/// Quote store
///
/// Implementations own their full collection. Backends are not required to
/// agree on ordering or on deleting a missing id; see each implementation.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Persist a quote and return the id assigned to it.
    async fn create(&self, quote: NewQuote) -> Result<QuoteId>;

    /// Snapshot of every stored quote. Empty store yields an empty vec.
    async fn get_all(&self) -> Result<Vec<Quote>>;

    /// One uniformly chosen quote, or `NotFound` when the store is empty.
    async fn get_random(&self) -> Result<Quote>;

    /// Quotes whose author matches exactly (case-sensitive).
    async fn filter_by_author(&self, author: &str) -> Result<Vec<Quote>>;

    async fn delete(&self, id: QuoteId) -> Result<()>;
}
