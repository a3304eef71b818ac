// src/models/review.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The five fixed quality dimensions every review scores.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RatingCategory {
    Cleanliness,
    Location,
    Price,
    Facilities,
    Safety,
}

impl RatingCategory {
    pub const ALL: [RatingCategory; 5] = [
        RatingCategory::Cleanliness,
        RatingCategory::Location,
        RatingCategory::Price,
        RatingCategory::Facilities,
        RatingCategory::Safety,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            RatingCategory::Cleanliness => "cleanliness",
            RatingCategory::Location => "location",
            RatingCategory::Price => "price",
            RatingCategory::Facilities => "facilities",
            RatingCategory::Safety => "safety",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RatingCategory::Cleanliness => "Cleanliness",
            RatingCategory::Location => "Location",
            RatingCategory::Price => "Price",
            RatingCategory::Facilities => "Facilities",
            RatingCategory::Safety => "Safety",
        }
    }

    pub fn from_key(key: &str) -> Option<RatingCategory> {
        match key {
            "cleanliness" => Some(RatingCategory::Cleanliness),
            "location" => Some(RatingCategory::Location),
            "price" => Some(RatingCategory::Price),
            "facilities" => Some(RatingCategory::Facilities),
            "safety" => Some(RatingCategory::Safety),
            _ => None,
        }
    }
}

/// Integer 1-5 score per category. A struct rather than a map, so a review
/// can never carry a missing or extra category key.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryRatings {
    pub cleanliness: u8,
    pub location: u8,
    pub price: u8,
    pub facilities: u8,
    pub safety: u8,
}

impl CategoryRatings {
    pub fn get(&self, category: RatingCategory) -> u8 {
        match category {
            RatingCategory::Cleanliness => self.cleanliness,
            RatingCategory::Location => self.location,
            RatingCategory::Price => self.price,
            RatingCategory::Facilities => self.facilities,
            RatingCategory::Safety => self.safety,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,                    // Unique ID for the review
    pub listing_id: String,            // ID of the listing being reviewed
    pub listing_name: String,          // Display name of the listing
    pub author_id: String,             // ID of the user who submitted the review
    pub author_name: String,           // Display name of the author
    pub author_avatar: Option<String>, // Avatar image reference, if any
    pub rating: f64,                   // Overall rating in [1.0, 5.0], independent of category scores
    pub category_ratings: CategoryRatings,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub images: Vec<String>,           // Ordered image references
    pub verified: bool,                // Linked to a confirmed stay
    pub helpful_count: u32,
    pub report_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub reservation_id: Option<String>, // Reservation backing the verification flag
}

/// What a visitor fills in on the review form. Ids, timestamps, and the
/// verification flag are attached at submission time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub rating: f64,
    pub category_ratings: CategoryRatings,
    pub title: String,
    pub content: String,
}

/// Aggregate statistics over a review collection. Derived on demand, never
/// stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ReviewStats {
    /// Mean overall rating, rounded to one decimal (half rounds up).
    pub average_rating: f64,
    pub total_count: usize,
    /// Count of reviews per star bucket; index 0 holds the one-star bucket.
    /// A review lands in the bucket of its rating rounded to the nearest
    /// integer.
    pub distribution: [u32; 5],
    /// Unrounded per-category means.
    pub category_averages: CategoryAverages,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct CategoryAverages {
    pub cleanliness: f64,
    pub location: f64,
    pub price: f64,
    pub facilities: f64,
    pub safety: f64,
}

impl CategoryAverages {
    pub fn entries(&self) -> [(RatingCategory, f64); 5] {
        [
            (RatingCategory::Cleanliness, self.cleanliness),
            (RatingCategory::Location, self.location),
            (RatingCategory::Price, self.price),
            (RatingCategory::Facilities, self.facilities),
            (RatingCategory::Safety, self.safety),
        ]
    }
}

/// Filter criteria for a review listing. Every field is independently
/// optional; set fields are ANDed together.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ReviewFilter {
    pub min_rating: Option<f64>,
    pub category: Option<RatingCategory>,
    #[serde(default)]
    pub verified_only: bool,
    pub sort_by: Option<SortBy>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Recent,
    Rating,
    Helpful,
}

impl SortBy {
    pub fn key(&self) -> &'static str {
        match self {
            SortBy::Recent => "recent",
            SortBy::Rating => "rating",
            SortBy::Helpful => "helpful",
        }
    }

    pub fn from_key(key: &str) -> Option<SortBy> {
        match key {
            "recent" => Some(SortBy::Recent),
            "rating" => Some(SortBy::Rating),
            "helpful" => Some(SortBy::Helpful),
            _ => None,
        }
    }
}
