/// Component to display a list of reviews.
/// Renders author, rating, body, and the helpful/report actions. The
/// at-most-once-per-session rule for the action buttons is enforced here via
/// the voted/reported sets owned by the page.
use leptos::*;
use std::collections::HashSet;
use crate::models::review::Review;

#[component]
pub fn ReviewsList(
    reviews: Vec<Review>,
    helpful_voted: ReadSignal<HashSet<String>>,
    reported: ReadSignal<HashSet<String>>,
    on_helpful: Callback<String>,
    on_report: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="reviews-list">
            <h3>{ "Reviews" }</h3>
            <ul>
                {
                    reviews.into_iter().map(|review| {
                        let helpful_id = review.id.clone();
                        let report_id = review.id.clone();
                        let already_voted = helpful_voted.get().contains(&review.id);
                        let already_reported = reported.get().contains(&review.id);

                        view! {
                            <li class="review-card">
                                <div class="review-head">
                                    { review.author_avatar.clone().map(|src| view! {
                                        <img class="avatar" src=src alt="avatar"/>
                                    }) }
                                    <strong>{ review.author_name.clone() }</strong>
                                    { review.verified.then(|| view! {
                                        <span class="verified-badge">{ "Verified stay" }</span>
                                    }) }
                                    <span class="review-rating">
                                        { format!("{:.1}/5", review.rating) }
                                    </span>
                                </div>
                                <h4>{ review.title.clone() }</h4>
                                <p>{ review.content.clone() }</p>
                                <ul class="review-images">
                                    { review.images.iter().map(|src| view! {
                                        <li><img src=src.clone() alt="review photo"/></li>
                                    }).collect::<Vec<_>>() }
                                </ul>
                                <div class="review-meta">
                                    <span>{ review.created_at.format("%Y-%m-%d").to_string() }</span>
                                    <button
                                        disabled=already_voted
                                        on:click=move |_| on_helpful.call(helpful_id.clone())
                                    >
                                        { format!("Helpful ({})", review.helpful_count) }
                                    </button>
                                    <button
                                        disabled=already_reported
                                        on:click=move |_| on_report.call(report_id.clone())
                                    >
                                        { "Report" }
                                    </button>
                                </div>
                            </li>
                        }
                    }).collect::<Vec<_>>()
                }
            </ul>
        </div>
    }
}
