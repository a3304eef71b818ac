/// Filter controls for the reviews list: minimum rating, strong-category
/// filter, verified-only toggle, and sort order. Writes straight into the
/// caller's signals; the caller owns the derived filtered view.
use leptos::*;
use crate::models::review::{RatingCategory, SortBy};

#[component]
pub fn ReviewFilterBar(
    min_rating: RwSignal<Option<f64>>,
    category: RwSignal<Option<RatingCategory>>,
    verified_only: RwSignal<bool>,
    sort_by: RwSignal<Option<SortBy>>,
) -> impl IntoView {
    view! {
        <div class="review-filter-bar">
            <label>
                { "Minimum rating" }
                <select on:change=move |e| {
                    min_rating.set(event_target_value(&e).parse::<f64>().ok());
                }>
                    <option value="">{ "Any" }</option>
                    <option value="3">{ "3.0+" }</option>
                    <option value="4">{ "4.0+" }</option>
                    <option value="4.5">{ "4.5+" }</option>
                </select>
            </label>
            <label>
                { "Strong in" }
                <select on:change=move |e| {
                    category.set(RatingCategory::from_key(&event_target_value(&e)));
                }>
                    <option value="">{ "Any category" }</option>
                    { RatingCategory::ALL.into_iter().map(|c| view! {
                        <option value=c.key()>{ c.label() }</option>
                    }).collect::<Vec<_>>() }
                </select>
            </label>
            <label>
                { "Sort by" }
                <select on:change=move |e| {
                    sort_by.set(SortBy::from_key(&event_target_value(&e)));
                }>
                    <option value="">{ "Default order" }</option>
                    <option value="recent">{ "Most recent" }</option>
                    <option value="rating">{ "Highest rated" }</option>
                    <option value="helpful">{ "Most helpful" }</option>
                </select>
            </label>
            <label class="verified-toggle">
                <input
                    type="checkbox"
                    on:change=move |e| verified_only.set(event_target_checked(&e))
                />
                { "Verified stays only" }
            </label>
        </div>
    }
}
