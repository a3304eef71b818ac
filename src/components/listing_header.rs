use leptos::*;
use crate::models::listing::Listing;

#[component]
pub fn ListingHeader(listing: Listing, average_rating: f64, review_count: usize) -> impl IntoView {
    view! {
        <header class="listing-header">
            <h1>{ listing.name }</h1>
            <p class="listing-location">{ listing.location }</p>
            <p class="listing-price">{ format!("{} € / night", listing.price_per_night) }</p>
            <p class="listing-score">
                { format!("{:.1} · {} reviews", average_rating, review_count) }
            </p>
        </header>
    }
}
