#[cfg(feature = "ssr")]
use actix_web::{web, HttpResponse};
#[cfg(feature = "ssr")]
use crate::aggregator::{compute_stats, filter_reviews};
#[cfg(feature = "ssr")]
use crate::models::review::{
    CategoryRatings, RatingCategory, Review, ReviewFilter, SortBy,
};
#[cfg(feature = "ssr")]
use crate::store::{InMemoryReviewStore, ReviewStore, ReviewStoreError};
#[cfg(feature = "ssr")]
use chrono::Utc;
#[cfg(feature = "ssr")]
use leptos::logging::log;
#[cfg(feature = "ssr")]
use std::sync::Arc;
#[cfg(feature = "ssr")]
use uuid::Uuid;

#[cfg(feature = "ssr")]
use serde::{Deserialize, Serialize};

/// Filter criteria as they arrive on the query string, e.g.
/// `/api/listings/listing-1/reviews?min_rating=4&sort_by=rating`.
#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug)]
pub struct ReviewQuery {
    pub min_rating: Option<f64>,
    pub category: Option<RatingCategory>,
    pub verified_only: Option<bool>,
    pub sort_by: Option<SortBy>,
}

#[cfg(feature = "ssr")]
impl ReviewQuery {
    fn into_filter(self) -> ReviewFilter {
        ReviewFilter {
            min_rating: self.min_rating,
            category: self.category,
            verified_only: self.verified_only.unwrap_or(false),
            sort_by: self.sort_by,
        }
    }
}

#[cfg(feature = "ssr")]
#[derive(Serialize, Deserialize, Debug)]
pub struct ReviewRequest {
    pub listing_name: String,
    pub author_id: String,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub rating: f64,
    pub category_ratings: CategoryRatings,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub reservation_id: Option<String>,
}

#[cfg(feature = "ssr")]
#[derive(Serialize, Deserialize, Debug)]
pub struct VoteRequest {
    pub actor_id: String,
}

#[cfg(feature = "ssr")]
pub async fn get_reviews(
    store: web::Data<Arc<InMemoryReviewStore>>,
    path: web::Path<String>,
    query: web::Query<ReviewQuery>,
) -> HttpResponse {
    let listing_id = path.into_inner();
    let filter = query.into_inner().into_filter();

    match store.list_for_listing(&listing_id).await {
        Ok(reviews) => {
            let filtered = filter_reviews(&reviews, &filter);
            log!(
                "[API] Returning {} of {} reviews for listing {}",
                filtered.len(),
                reviews.len(),
                listing_id
            );
            HttpResponse::Ok().json(filtered)
        }
        Err(err) => {
            leptos::logging::error!("Failed to fetch reviews: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch reviews")
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn get_stats(
    store: web::Data<Arc<InMemoryReviewStore>>,
    path: web::Path<String>,
) -> HttpResponse {
    let listing_id = path.into_inner();
    match store.list_for_listing(&listing_id).await {
        Ok(reviews) => HttpResponse::Ok().json(compute_stats(&reviews)),
        Err(err) => {
            leptos::logging::error!("Failed to compute stats: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to compute stats")
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn create_review(
    store: web::Data<Arc<InMemoryReviewStore>>,
    path: web::Path<String>,
    request: web::Json<ReviewRequest>,
) -> HttpResponse {
    let listing_id = path.into_inner();
    let request = request.into_inner();
    log!(
        "[API] Received review for listing {} from {}",
        listing_id,
        request.author_id
    );

    let now = Utc::now();
    let review = Review {
        id: Uuid::new_v4().to_string(),
        listing_id,
        listing_name: request.listing_name,
        author_id: request.author_id,
        author_name: request.author_name,
        author_avatar: request.author_avatar,
        rating: request.rating,
        category_ratings: request.category_ratings,
        title: request.title,
        content: request.content,
        images: request.images,
        // Verification comes from the linked reservation, never from the form
        verified: request.reservation_id.is_some(),
        helpful_count: 0,
        report_count: 0,
        created_at: now,
        updated_at: now,
        reservation_id: request.reservation_id,
    };

    match store.append(review.clone()).await {
        Ok(()) => {
            log!("[API] Stored review {}", review.id);
            HttpResponse::Ok().json(review)
        }
        Err(err) => {
            log!("[API] Store error: {:?}", err);
            HttpResponse::BadRequest().body(format!("Store error: {}", err))
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn mark_review_helpful(
    store: web::Data<Arc<InMemoryReviewStore>>,
    path: web::Path<String>,
    request: web::Json<VoteRequest>,
) -> HttpResponse {
    let review_id = path.into_inner();
    match store.mark_helpful(&review_id, &request.actor_id).await {
        Ok(true) => HttpResponse::Ok().body("Vote counted"),
        Ok(false) => HttpResponse::Ok().body("Already voted"),
        Err(err @ ReviewStoreError::NotFound { .. }) => {
            HttpResponse::NotFound().body(format!("{}", err))
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn report_review(
    store: web::Data<Arc<InMemoryReviewStore>>,
    path: web::Path<String>,
    request: web::Json<VoteRequest>,
) -> HttpResponse {
    let review_id = path.into_inner();
    match store.report(&review_id, &request.actor_id).await {
        Ok(true) => HttpResponse::Ok().body("Report counted"),
        Ok(false) => HttpResponse::Ok().body("Already reported"),
        Err(err @ ReviewStoreError::NotFound { .. }) => {
            HttpResponse::NotFound().body(format!("{}", err))
        }
    }
}
