#[cfg(feature = "ssr")]
mod store_impl {
    use crate::models::review::Review;
    use leptos::logging::log;
    use std::collections::HashSet;
    use std::sync::Arc;
    use thiserror::Error;
    use tokio::sync::Mutex;

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::models::review::CategoryRatings;
        use chrono::{TimeZone, Utc};

        fn review(id: &str, listing_id: &str) -> Review {
            let created = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
            Review {
                id: id.to_string(),
                listing_id: listing_id.to_string(),
                listing_name: "Test listing".into(),
                author_id: "author-1".into(),
                author_name: "Test Author".into(),
                author_avatar: None,
                rating: 4.0,
                category_ratings: CategoryRatings {
                    cleanliness: 4,
                    location: 4,
                    price: 4,
                    facilities: 4,
                    safety: 4,
                },
                title: "Test review".into(),
                content: "Test content".into(),
                images: vec![],
                verified: true,
                helpful_count: 0,
                report_count: 0,
                created_at: created,
                updated_at: created,
                reservation_id: Some("res-1".into()),
            }
        }

        #[tokio::test]
        async fn test_append_prepends_newest_first() {
            log!("[TEST] Starting test_append_prepends_newest_first");
            let store = InMemoryReviewStore::new();
            store.append(review("first", "l1")).await.unwrap();
            store.append(review("second", "l1")).await.unwrap();

            let reviews = store.list().await.unwrap();
            assert_eq!(reviews.len(), 2);
            assert_eq!(reviews[0].id, "second");
            assert_eq!(reviews[1].id, "first");
            log!("[TEST] Prepend ordering - PASSED");
        }

        #[tokio::test]
        async fn test_listing_scoped_listing() {
            let store = InMemoryReviewStore::with_reviews(vec![
                review("a", "l1"),
                review("b", "l2"),
                review("c", "l1"),
            ]);

            let reviews = store.list_for_listing("l1").await.unwrap();
            assert_eq!(reviews.len(), 2);
            assert!(reviews.iter().all(|r| r.listing_id == "l1"));
        }

        #[tokio::test]
        async fn test_helpful_vote_counts_once_per_actor() {
            log!("[TEST] Starting test_helpful_vote_counts_once_per_actor");
            let store = InMemoryReviewStore::with_reviews(vec![review("a", "l1")]);

            // First vote counts
            assert!(store.mark_helpful("a", "viewer-1").await.unwrap());
            // Repeat vote from the same actor is a no-op
            assert!(!store.mark_helpful("a", "viewer-1").await.unwrap());
            // A different actor still counts
            assert!(store.mark_helpful("a", "viewer-2").await.unwrap());

            let reviews = store.list().await.unwrap();
            assert_eq!(reviews[0].helpful_count, 2);
            log!("[TEST] Helpful idempotency - PASSED");
        }

        #[tokio::test]
        async fn test_report_vote_counts_once_per_actor() {
            let store = InMemoryReviewStore::with_reviews(vec![review("a", "l1")]);

            assert!(store.report("a", "viewer-1").await.unwrap());
            assert!(!store.report("a", "viewer-1").await.unwrap());

            let reviews = store.list().await.unwrap();
            assert_eq!(reviews[0].report_count, 1);
            // Helpful votes are tracked separately from reports
            assert!(store.mark_helpful("a", "viewer-1").await.unwrap());
        }

        #[tokio::test]
        async fn test_unknown_review_is_an_error() {
            let store = InMemoryReviewStore::new();
            let err = store.mark_helpful("missing", "viewer-1").await.unwrap_err();
            assert!(matches!(err, ReviewStoreError::NotFound { .. }));
        }

        #[tokio::test]
        async fn test_list_returns_a_detached_copy() {
            let store = InMemoryReviewStore::with_reviews(vec![review("a", "l1")]);
            let mut snapshot = store.list().await.unwrap();
            snapshot.clear();
            assert_eq!(store.list().await.unwrap().len(), 1);
        }
    }

    #[derive(Error, Debug)]
    pub enum ReviewStoreError {
        #[error("review not found: {id}")]
        NotFound { id: String },
    }

    /// Repository seam for the review collection. The in-memory store below
    /// is the only implementation today; a persistent one would plug in here.
    #[allow(async_fn_in_trait)]
    pub trait ReviewStore {
        async fn list(&self) -> Result<Vec<Review>, ReviewStoreError>;
        async fn list_for_listing(&self, listing_id: &str)
            -> Result<Vec<Review>, ReviewStoreError>;
        async fn append(&self, review: Review) -> Result<(), ReviewStoreError>;
        /// Count a helpful vote for `review_id` on behalf of `actor_id`.
        /// Returns whether the vote counted; repeat votes from the same actor
        /// are a no-op.
        async fn mark_helpful(
            &self,
            review_id: &str,
            actor_id: &str,
        ) -> Result<bool, ReviewStoreError>;
        /// Same contract as `mark_helpful`, for the report counter.
        async fn report(&self, review_id: &str, actor_id: &str)
            -> Result<bool, ReviewStoreError>;
    }

    #[derive(Debug, Default)]
    struct StoreInner {
        reviews: Vec<Review>,
        helpful_votes: HashSet<(String, String)>,
        report_votes: HashSet<(String, String)>,
    }

    /// The mock-data array of the original front-end, behind a store
    /// interface. Reviews are never deleted; the only mutations are prepend
    /// and the two vote counters.
    #[derive(Debug, Default)]
    pub struct InMemoryReviewStore {
        inner: Arc<Mutex<StoreInner>>,
    }

    impl InMemoryReviewStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_reviews(reviews: Vec<Review>) -> Self {
            log!("[STORE] Seeding store with {} reviews", reviews.len());
            Self {
                inner: Arc::new(Mutex::new(StoreInner {
                    reviews,
                    ..StoreInner::default()
                })),
            }
        }
    }

    impl ReviewStore for InMemoryReviewStore {
        async fn list(&self) -> Result<Vec<Review>, ReviewStoreError> {
            let inner = self.inner.lock().await;
            Ok(inner.reviews.clone())
        }

        async fn list_for_listing(
            &self,
            listing_id: &str,
        ) -> Result<Vec<Review>, ReviewStoreError> {
            let inner = self.inner.lock().await;
            Ok(inner
                .reviews
                .iter()
                .filter(|review| review.listing_id == listing_id)
                .cloned()
                .collect())
        }

        async fn append(&self, review: Review) -> Result<(), ReviewStoreError> {
            let mut inner = self.inner.lock().await;
            log!("[STORE] Appending review {} for listing {}", review.id, review.listing_id);
            // Newest-first is an insertion-order guarantee, not a timestamp one
            inner.reviews.insert(0, review);
            Ok(())
        }

        async fn mark_helpful(
            &self,
            review_id: &str,
            actor_id: &str,
        ) -> Result<bool, ReviewStoreError> {
            let mut guard = self.inner.lock().await;
            let inner = &mut *guard;
            let review = inner
                .reviews
                .iter_mut()
                .find(|review| review.id == review_id)
                .ok_or_else(|| ReviewStoreError::NotFound {
                    id: review_id.to_string(),
                })?;

            if !inner
                .helpful_votes
                .insert((review_id.to_string(), actor_id.to_string()))
            {
                log!("[STORE] Duplicate helpful vote by {} on {}", actor_id, review_id);
                return Ok(false);
            }
            review.helpful_count += 1;
            Ok(true)
        }

        async fn report(
            &self,
            review_id: &str,
            actor_id: &str,
        ) -> Result<bool, ReviewStoreError> {
            let mut guard = self.inner.lock().await;
            let inner = &mut *guard;
            let review = inner
                .reviews
                .iter_mut()
                .find(|review| review.id == review_id)
                .ok_or_else(|| ReviewStoreError::NotFound {
                    id: review_id.to_string(),
                })?;

            if !inner
                .report_votes
                .insert((review_id.to_string(), actor_id.to_string()))
            {
                log!("[STORE] Duplicate report by {} on {}", actor_id, review_id);
                return Ok(false);
            }
            review.report_count += 1;
            Ok(true)
        }
    }
}

#[cfg(feature = "ssr")]
pub use store_impl::{InMemoryReviewStore, ReviewStore, ReviewStoreError};
