//! Quote service: the single chokepoint between handlers and a store

use quotebook_core::{NewQuote, Quote, QuoteError, QuoteId, QuoteStore, Result};
use std::sync::Arc;
use tracing::{debug, info};

pub struct QuoteService {
    store: Arc<dyn QuoteStore>,
}

impl QuoteService {
    pub fn new(store: Arc<dyn QuoteStore>) -> Self {
        Self { store }
    }

    /// Create a quote. Fails with `InvalidInput` if author or text is empty.
    pub async fn create(&self, author: &str, text: &str) -> Result<QuoteId> {
        let quote = NewQuote::new(author, text);
        if !quote.is_valid() {
            debug!("Rejecting quote with empty field: author={:?}", author);
            return Err(QuoteError::InvalidInput);
        }

        let id = self.store.create(quote).await?;
        info!("Created quote: id={}, author={}", id, author);
        Ok(id)
    }

    pub async fn get_all(&self) -> Result<Vec<Quote>> {
        self.store.get_all().await
    }

    pub async fn get_random(&self) -> Result<Quote> {
        self.store.get_random().await
    }

    pub async fn filter_by_author(&self, author: &str) -> Result<Vec<Quote>> {
        self.store.filter_by_author(author).await
    }

    pub async fn delete(&self, id: QuoteId) -> Result<()> {
        self.store.delete(id).await?;
        info!("Deleted quote: id={}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use async_trait::async_trait;

    fn service() -> QuoteService {
        QuoteService::new(Arc::new(MemoryStore::new()))
    }

    /// Store whose every call fails like a broken database
    struct FailingStore;

    #[async_trait]
    impl QuoteStore for FailingStore {
        async fn create(&self, _quote: NewQuote) -> Result<QuoteId> {
            Err(QuoteError::Internal("disk I/O error".to_string()))
        }
        async fn get_all(&self) -> Result<Vec<Quote>> {
            Err(QuoteError::Internal("disk I/O error".to_string()))
        }
        async fn get_random(&self) -> Result<Quote> {
            Err(QuoteError::Internal("disk I/O error".to_string()))
        }
        async fn filter_by_author(&self, _author: &str) -> Result<Vec<Quote>> {
            Err(QuoteError::Internal("disk I/O error".to_string()))
        }
        async fn delete(&self, _id: QuoteId) -> Result<()> {
            Err(QuoteError::Internal("disk I/O error".to_string()))
        }
    }

    #[tokio::test]
    async fn test_create_rejects_empty_fields() {
        let svc = service();

        assert_eq!(svc.create("", "text").await, Err(QuoteError::InvalidInput));
        assert_eq!(svc.create("author", "").await, Err(QuoteError::InvalidInput));
        assert_eq!(svc.create("", "").await, Err(QuoteError::InvalidInput));

        // Nothing reached the store
        assert!(svc.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_crud_through_service() {
        let svc = service();

        assert_eq!(svc.create("A", "one").await.unwrap(), 1);
        assert_eq!(svc.create("B", "two").await.unwrap(), 2);
        assert_eq!(svc.get_all().await.unwrap().len(), 2);

        let by_a = svc.filter_by_author("A").await.unwrap();
        assert_eq!(by_a.len(), 1);
        assert_eq!(by_a[0].id, 1);

        svc.delete(1).await.unwrap();
        let remaining = svc.get_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
        assert_eq!(svc.get_random().await.unwrap().id, 2);
    }

    #[tokio::test]
    async fn test_store_errors_pass_through() {
        let svc = service();
        assert!(matches!(svc.get_random().await, Err(QuoteError::NotFound(_))));
        assert!(matches!(svc.delete(42).await, Err(QuoteError::NotFound(_))));

        let broken = QuoteService::new(Arc::new(FailingStore));
        let internal = QuoteError::Internal("disk I/O error".to_string());
        assert_eq!(broken.create("A", "one").await, Err(internal.clone()));
        assert_eq!(broken.get_all().await, Err(internal.clone()));
        assert_eq!(broken.filter_by_author("A").await, Err(internal.clone()));
        assert_eq!(broken.delete(1).await, Err(internal));
    }
}
