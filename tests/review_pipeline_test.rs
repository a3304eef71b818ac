//! End-to-end flow over the store and the aggregation pipeline: seed the
//! in-memory store with the mock collection, submit a review, vote, and
//! check the filtered views and statistics a page would render.

use chrono::Utc;
use roomware::aggregator::{compute_stats, filter_reviews};
use roomware::mock;
use roomware::models::review::{
    CategoryRatings, Review, ReviewFilter, SortBy,
};
use roomware::store::{InMemoryReviewStore, ReviewStore};

fn fresh_review(id: &str) -> Review {
    let now = Utc::now();
    Review {
        id: id.to_string(),
        listing_id: "listing-1".into(),
        listing_name: "Sunny loft near the river".into(),
        author_id: "user-new".into(),
        author_name: "New Guest".into(),
        author_avatar: None,
        rating: 5.0,
        category_ratings: CategoryRatings {
            cleanliness: 5,
            location: 5,
            price: 4,
            facilities: 5,
            safety: 5,
        },
        title: "Would book again".into(),
        content: "Everything worked, host was lovely.".into(),
        images: vec![],
        verified: true,
        helpful_count: 0,
        report_count: 0,
        created_at: now,
        updated_at: now,
        reservation_id: Some("res-3001".into()),
    }
}

// Goes through the trait rather than the concrete type, the way an
// alternative store backend would be driven.
async fn submit<S: ReviewStore>(store: &S, review: Review) {
    store.append(review).await.unwrap();
}

#[tokio::test]
async fn seeded_stats_match_the_mock_collection() {
    let store = InMemoryReviewStore::with_reviews(mock::sample_reviews());
    let reviews = store.list_for_listing("listing-1").await.unwrap();
    let stats = compute_stats(&reviews);

    // Seed ratings are [4.5, 4.0, 3.5, 2.0]
    assert_eq!(stats.total_count, 4);
    assert_eq!(stats.average_rating, 3.5);
    assert_eq!(stats.distribution, [0, 1, 0, 2, 1]);
}

#[tokio::test]
async fn submitted_review_lists_first_and_shifts_stats() {
    let store = InMemoryReviewStore::with_reviews(mock::sample_reviews());
    submit(&store, fresh_review("review-new")).await;

    let reviews = store.list_for_listing("listing-1").await.unwrap();
    assert_eq!(reviews.len(), 5);
    assert_eq!(reviews[0].id, "review-new");

    let stats = compute_stats(&reviews);
    assert_eq!(stats.total_count, 5);
    // mean of [5.0, 4.5, 4.0, 3.5, 2.0] = 3.8
    assert_eq!(stats.average_rating, 3.8);
}

#[tokio::test]
async fn verified_recent_view_over_the_store() {
    let store = InMemoryReviewStore::with_reviews(mock::sample_reviews());
    let reviews = store.list_for_listing("listing-1").await.unwrap();

    let filter = ReviewFilter {
        verified_only: true,
        sort_by: Some(SortBy::Recent),
        ..ReviewFilter::default()
    };
    let view = filter_reviews(&reviews, &filter);

    assert!(view.iter().all(|r| r.verified));
    assert!(view
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));
}

#[tokio::test]
async fn helpful_votes_feed_the_helpful_sort() {
    let store = InMemoryReviewStore::with_reviews(mock::sample_reviews());

    // Two distinct voters plus one duplicate that must not count
    assert!(store.mark_helpful("review-3", "viewer-1").await.unwrap());
    assert!(store.mark_helpful("review-3", "viewer-2").await.unwrap());
    assert!(!store.mark_helpful("review-3", "viewer-1").await.unwrap());

    let reviews = store.list_for_listing("listing-1").await.unwrap();
    let voted = reviews.iter().find(|r| r.id == "review-3").unwrap();
    assert_eq!(voted.helpful_count, 5);

    let filter = ReviewFilter {
        sort_by: Some(SortBy::Helpful),
        ..ReviewFilter::default()
    };
    let view = filter_reviews(&reviews, &filter);
    assert!(view
        .windows(2)
        .all(|pair| pair[0].helpful_count >= pair[1].helpful_count));
    assert_eq!(view[0].id, "review-1");
}
