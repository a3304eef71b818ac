// src/aggregator.rs
//
// The review aggregation pipeline: statistics, filtering, and sorting over a
// review collection. Both functions are pure; all mutable state (the review
// collection itself, the selected filter) lives with the caller.
use crate::models::review::{CategoryAverages, Review, ReviewFilter, ReviewStats, SortBy};

/// Category score at or above which a review counts as "strong" on that
/// dimension. Fixed, not configurable.
pub const STRONG_CATEGORY_THRESHOLD: u8 = 4;

/// Compute aggregate statistics over a review collection.
///
/// An empty collection yields the zero-valued stats; that is a defined state
/// for a listing with no reviews yet, not an error.
pub fn compute_stats(reviews: &[Review]) -> ReviewStats {
    if reviews.is_empty() {
        return ReviewStats::default();
    }

    let total = reviews.len();
    let mut rating_sum = 0.0;
    let mut distribution = [0u32; 5];
    let mut category_sums = [0u32; 5];

    for review in reviews {
        rating_sum += review.rating;
        // Ratings are 1.0..=5.0 by contract, so the rounded value always
        // lands on a valid bucket; the clamp only guards the array index.
        let bucket = (review.rating.round() as usize).clamp(1, 5);
        distribution[bucket - 1] += 1;

        let ratings = &review.category_ratings;
        category_sums[0] += u32::from(ratings.cleanliness);
        category_sums[1] += u32::from(ratings.location);
        category_sums[2] += u32::from(ratings.price);
        category_sums[3] += u32::from(ratings.facilities);
        category_sums[4] += u32::from(ratings.safety);
    }

    let count = total as f64;
    ReviewStats {
        average_rating: round_to_one_decimal(rating_sum / count),
        total_count: total,
        distribution,
        category_averages: CategoryAverages {
            cleanliness: f64::from(category_sums[0]) / count,
            location: f64::from(category_sums[1]) / count,
            price: f64::from(category_sums[2]) / count,
            facilities: f64::from(category_sums[3]) / count,
            safety: f64::from(category_sums[4]) / count,
        },
    }
}

/// Produce a filtered, optionally sorted view of a review collection.
///
/// All set criteria are ANDed. Sorting is applied after filtering, is always
/// descending, and is stable: reviews with equal sort keys keep their input
/// order. Without a sort order the filtered result keeps input order. The
/// returned vector is an owned copy; the input is never mutated.
pub fn filter_reviews(reviews: &[Review], filter: &ReviewFilter) -> Vec<Review> {
    let mut result: Vec<Review> = reviews
        .iter()
        .filter(|review| {
            filter
                .min_rating
                .map_or(true, |min| review.rating >= min)
                && filter.category.map_or(true, |category| {
                    review.category_ratings.get(category) >= STRONG_CATEGORY_THRESHOLD
                })
                && (!filter.verified_only || review.verified)
        })
        .cloned()
        .collect();

    if let Some(sort_by) = filter.sort_by {
        match sort_by {
            SortBy::Recent => result.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            // Ratings are never NaN by contract; total_cmp avoids the
            // partial-ordering dance.
            SortBy::Rating => result.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortBy::Helpful => result.sort_by(|a, b| b.helpful_count.cmp(&a.helpful_count)),
        }
    }

    result
}

/// Round half up to one decimal place. `f64::round` is half-away-from-zero,
/// which coincides with half-up on the non-negative rating domain.
fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
