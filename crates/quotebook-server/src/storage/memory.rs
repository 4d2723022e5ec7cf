//! In-memory quote store guarded by a reader-writer lock

use async_trait::async_trait;
use quotebook_core::{NewQuote, Quote, QuoteError, QuoteId, QuoteStore, Result};
use rand::seq::SliceRandom;
use tokio::sync::RwLock;

/// Quotes kept in insertion order. Lost when the process exits.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

struct Inner {
    quotes: Vec<Quote>,
    next_id: QuoteId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                quotes: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteStore for MemoryStore {
    async fn create(&self, quote: NewQuote) -> Result<QuoteId> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        inner.quotes.push(Quote::new(id, quote));
        Ok(id)
    }

    async fn get_all(&self) -> Result<Vec<Quote>> {
        Ok(self.inner.read().await.quotes.clone())
    }

    async fn get_random(&self) -> Result<Quote> {
        let inner = self.inner.read().await;
        inner
            .quotes
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| QuoteError::NotFound("no quotes available".to_string()))
    }

    async fn filter_by_author(&self, author: &str) -> Result<Vec<Quote>> {
        let inner = self.inner.read().await;
        Ok(inner
            .quotes
            .iter()
            .filter(|q| q.author == author)
            .cloned()
            .collect())
    }

    /// Unlike the SQLite store, a missing id is an error here.
    async fn delete(&self, id: QuoteId) -> Result<()> {
        let mut inner = self.inner.write().await;
        let index = inner
            .quotes
            .iter()
            .position(|q| q.id == id)
            .ok_or_else(|| QuoteError::NotFound(format!("id {}", id)))?;
        inner.quotes.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_basic_operations() {
        let store = MemoryStore::new();

        // Starts empty
        assert!(store.get_all().await.unwrap().is_empty());

        let id1 = store.create(NewQuote::new("A", "first")).await.unwrap();
        let id2 = store.create(NewQuote::new("B", "second")).await.unwrap();
        assert_eq!((id1, id2), (1, 2));

        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].text, "first");
        assert_eq!(all[1].text, "second");

        let random = store.get_random().await.unwrap();
        assert!(random.id == 1 || random.id == 2);

        let by_a = store.filter_by_author("A").await.unwrap();
        assert_eq!(by_a.len(), 1);
        assert_eq!(by_a[0].author, "A");
    }

    #[tokio::test]
    async fn test_random_on_empty_store() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.get_random().await,
            Err(QuoteError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_filter_is_exact_and_ordered() {
        let store = MemoryStore::new();
        store.create(NewQuote::new("Ann", "1")).await.unwrap();
        store.create(NewQuote::new("ann", "2")).await.unwrap();
        store.create(NewQuote::new("Ann", "3")).await.unwrap();
        store.create(NewQuote::new("Anne", "4")).await.unwrap();

        let ids: Vec<_> = store
            .filter_by_author("Ann")
            .await
            .unwrap()
            .into_iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);

        assert!(store.filter_by_author("Nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryStore::new();
        for text in ["one", "two", "three"] {
            store.create(NewQuote::new("A", text)).await.unwrap();
        }

        assert!(matches!(
            store.delete(100).await,
            Err(QuoteError::NotFound(_))
        ));

        store.delete(2).await.unwrap();
        let ids: Vec<_> = store
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);

        // Already gone
        assert!(store.delete(2).await.is_err());
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let store = MemoryStore::new();
        store.create(NewQuote::new("A", "one")).await.unwrap();
        store.create(NewQuote::new("A", "two")).await.unwrap();
        store.delete(2).await.unwrap();
        store.delete(1).await.unwrap();

        assert_eq!(store.create(NewQuote::new("A", "three")).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_get_all_is_a_snapshot() {
        let store = MemoryStore::new();
        store.create(NewQuote::new("A", "one")).await.unwrap();

        let snapshot = store.get_all().await.unwrap();
        store.create(NewQuote::new("B", "two")).await.unwrap();

        assert_eq!(snapshot.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_get_unique_ids() {
        let store = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();

        for i in 0..64 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .create(NewQuote::new(format!("author-{}", i % 4), "text"))
                    .await
                    .unwrap()
            }));
        }

        let mut ids = HashSet::new();
        for handle in handles {
            assert!(ids.insert(handle.await.unwrap()));
        }

        let expected: HashSet<QuoteId> = (1..=64).collect();
        assert_eq!(ids, expected);
        assert_eq!(store.get_all().await.unwrap().len(), 64);
    }
}
