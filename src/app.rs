/// Main application entry point for RoomWare.
/// Wires the listing page together: the review collection signal, the filter
/// state, and the aggregation pipeline feeding the stats panel and list.
use leptos::*;
use leptos::logging::log;
use leptos_meta::{provide_meta_context, Stylesheet, Title};
use leptos_router::{Route, Router, Routes};
use std::collections::HashSet;

use chrono::Utc;
use gloo_net::http::Request;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::aggregator::{compute_stats, filter_reviews};
use crate::components::listing_header::ListingHeader;
use crate::components::review_filter::ReviewFilterBar;
use crate::components::review_form::ReviewForm;
use crate::components::reviews_list::ReviewsList;
use crate::components::stats_panel::StatsPanel;
use crate::mock::{self, CURRENT_USER_ID, CURRENT_USER_NAME};
use crate::models::review::{RatingCategory, Review, ReviewDraft, ReviewFilter, SortBy};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/roomware.css"/>
        <Title text="RoomWare"/>
        <Router>
            <main>
                <Routes>
                    <Route path="" view=ListingPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn ListingPage() -> impl IntoView {
    let listing = mock::sample_listing();
    let listing_id = listing.id.clone();
    let listing_name = listing.name.clone();

    // The review collection and the per-session vote bookkeeping. The
    // aggregation pipeline itself is pure; everything mutable lives here.
    let (reviews, set_reviews) = create_signal(mock::sample_reviews());
    let (helpful_voted, set_helpful_voted) = create_signal(HashSet::<String>::new());
    let (reported, set_reported) = create_signal(HashSet::<String>::new());

    let min_rating = create_rw_signal(None::<f64>);
    let category = create_rw_signal(None::<RatingCategory>);
    let verified_only = create_rw_signal(false);
    let sort_by = create_rw_signal(None::<SortBy>);

    let filtered = create_memo(move |_| {
        let filter = ReviewFilter {
            min_rating: min_rating.get(),
            category: category.get(),
            verified_only: verified_only.get(),
            sort_by: sort_by.get(),
        };
        filter_reviews(&reviews.get(), &filter)
    });
    // Stats always cover the full collection, not the filtered view
    let stats = create_memo(move |_| compute_stats(&reviews.get()));

    let add_review = {
        let listing_id = listing_id.clone();
        let listing_name = listing_name.clone();
        move |draft: ReviewDraft| {
            let now = Utc::now();
            set_reviews.update(|reviews| {
                reviews.insert(
                    0,
                    Review {
                        id: Uuid::new_v4().to_string(),
                        listing_id: listing_id.clone(),
                        listing_name: listing_name.clone(),
                        author_id: CURRENT_USER_ID.to_string(),
                        author_name: CURRENT_USER_NAME.to_string(),
                        author_avatar: None,
                        rating: draft.rating,
                        category_ratings: draft.category_ratings,
                        title: draft.title.clone(),
                        content: draft.content.clone(),
                        images: vec![],
                        // The demo user has no linked reservation
                        verified: false,
                        helpful_count: 0,
                        report_count: 0,
                        created_at: now,
                        updated_at: now,
                        reservation_id: None,
                    },
                );
            });

            // Best-effort sync to the server store; the page already shows
            // the local copy
            let url = format!("/api/listings/{}/reviews", listing_id);
            let payload = serde_json::json!({
                "listing_name": listing_name.clone(),
                "author_id": CURRENT_USER_ID,
                "author_name": CURRENT_USER_NAME,
                "rating": draft.rating,
                "category_ratings": draft.category_ratings,
                "title": draft.title,
                "content": draft.content,
            });
            spawn_local(async move {
                match Request::post(&url).json(&payload) {
                    Ok(request) => {
                        if let Err(err) = request.send().await {
                            log!("[PAGE] Failed to sync review: {:?}", err);
                        }
                    }
                    Err(err) => log!("[PAGE] Failed to encode review: {:?}", err),
                }
            });
        }
    };

    let on_helpful = Callback::new(move |review_id: String| {
        if helpful_voted.get_untracked().contains(&review_id) {
            return;
        }
        set_helpful_voted.update(|voted| {
            voted.insert(review_id.clone());
        });
        set_reviews.update(|reviews| {
            if let Some(review) = reviews.iter_mut().find(|r| r.id == review_id) {
                review.helpful_count += 1;
            }
        });
        let url = format!("/api/reviews/{}/helpful", review_id);
        spawn_local(async move {
            let payload = serde_json::json!({ "actor_id": CURRENT_USER_ID });
            match Request::post(&url).json(&payload) {
                Ok(request) => {
                    if let Err(err) = request.send().await {
                        log!("[PAGE] Failed to sync helpful vote: {:?}", err);
                    }
                }
                Err(err) => log!("[PAGE] Failed to encode vote: {:?}", err),
            }
        });
    });

    let on_report = Callback::new(move |review_id: String| {
        if reported.get_untracked().contains(&review_id) {
            return;
        }
        set_reported.update(|set| {
            set.insert(review_id.clone());
        });
        set_reviews.update(|reviews| {
            if let Some(review) = reviews.iter_mut().find(|r| r.id == review_id) {
                review.report_count += 1;
            }
        });
        let url = format!("/api/reviews/{}/report", review_id);
        spawn_local(async move {
            let payload = serde_json::json!({ "actor_id": CURRENT_USER_ID });
            match Request::post(&url).json(&payload) {
                Ok(request) => {
                    if let Err(err) = request.send().await {
                        log!("[PAGE] Failed to sync report: {:?}", err);
                    }
                }
                Err(err) => log!("[PAGE] Failed to encode report: {:?}", err),
            }
        });
    });

    let refresh_from_server = {
        let listing_id = listing_id.clone();
        move |_| {
            let url = format!("/api/listings/{}/reviews", listing_id);
            spawn_local(async move {
                match Request::get(&url).send().await {
                    Ok(response) => match response.json::<Vec<Review>>().await {
                        Ok(fetched) => set_reviews.set(fetched),
                        Err(err) => log!("[PAGE] Bad reviews payload: {:?}", err),
                    },
                    Err(err) => log!("[PAGE] Failed to fetch reviews: {:?}", err),
                }
            });
        }
    };

    let header_listing = listing.clone();
    view! {
        <div class="listing-page">
            {move || {
                let stats = stats.get();
                view! {
                    <ListingHeader
                        listing=header_listing.clone()
                        average_rating=stats.average_rating
                        review_count=stats.total_count
                    />
                }
            }}
            {move || view! { <StatsPanel stats=stats.get()/> }}
            <ReviewFilterBar
                min_rating=min_rating
                category=category
                verified_only=verified_only
                sort_by=sort_by
            />
            <button class="refresh" on:click=refresh_from_server>
                { "Refresh from server" }
            </button>
            {move || view! {
                <ReviewsList
                    reviews=filtered.get()
                    helpful_voted=helpful_voted
                    reported=reported
                    on_helpful=on_helpful
                    on_report=on_report
                />
            }}
            <ReviewForm on_submit=Box::new(add_review)/>
        </div>
    }
}
