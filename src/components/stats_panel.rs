/// Aggregate statistics panel: overall average, star distribution bars, and
/// per-category averages.
use leptos::*;
use crate::models::review::ReviewStats;

#[component]
pub fn StatsPanel(stats: ReviewStats) -> impl IntoView {
    let total = stats.total_count;

    view! {
        <div class="stats-panel">
            <div class="stats-average">
                <span class="average-value">{ format!("{:.1}", stats.average_rating) }</span>
                <span class="review-count">{ format!("{} reviews", total) }</span>
            </div>
            <ul class="stats-distribution">
                { (1..=5u8).rev().map(|stars| {
                    let count = stats.distribution[usize::from(stars) - 1];
                    let percent = if total == 0 {
                        0.0
                    } else {
                        f64::from(count) / total as f64 * 100.0
                    };
                    view! {
                        <li>
                            <span class="stars-label">{ format!("{} star", stars) }</span>
                            <div class="bar">
                                <div class="bar-fill" style:width=format!("{percent:.0}%")></div>
                            </div>
                            <span class="bucket-count">{ count }</span>
                        </li>
                    }
                }).collect::<Vec<_>>() }
            </ul>
            <ul class="stats-categories">
                { stats.category_averages.entries().into_iter().map(|(category, average)| view! {
                    <li>{ format!("{}: {:.2}", category.label(), average) }</li>
                }).collect::<Vec<_>>() }
            </ul>
        </div>
    }
}
