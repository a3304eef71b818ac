// src/mock.rs
//
// Static seed data standing in for a real database. Used to seed the server
// store and the client-side signals alike.
use crate::models::listing::Listing;
use crate::models::review::{CategoryRatings, Review};
use chrono::{DateTime, TimeZone, Utc};

pub const CURRENT_USER_ID: &str = "user-demo";
pub const CURRENT_USER_NAME: &str = "Demo Guest";

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 10, 0, 0).unwrap()
}

pub fn sample_listing() -> Listing {
    Listing {
        id: "listing-1".into(),
        name: "Sunny loft near the river".into(),
        location: "Friedrichshain, Berlin".into(),
        price_per_night: 68,
    }
}

pub fn sample_reviews() -> Vec<Review> {
    let listing = sample_listing();
    vec![
        Review {
            id: "review-1".into(),
            listing_id: listing.id.clone(),
            listing_name: listing.name.clone(),
            author_id: "user-ana".into(),
            author_name: "Ana P.".into(),
            author_avatar: Some("/assets/avatars/ana.png".into()),
            rating: 4.5,
            category_ratings: CategoryRatings {
                cleanliness: 5,
                location: 5,
                price: 4,
                facilities: 4,
                safety: 5,
            },
            title: "Bright, quiet, and spotless".into(),
            content: "The loft looks exactly like the photos. Five minutes to the \
                      tram, and the host left great coffee."
                .into(),
            images: vec!["/assets/reviews/review-1-window.jpg".into()],
            verified: true,
            helpful_count: 12,
            report_count: 0,
            created_at: at(2024, 2, 18),
            updated_at: at(2024, 2, 18),
            reservation_id: Some("res-2091".into()),
        },
        Review {
            id: "review-2".into(),
            listing_id: listing.id.clone(),
            listing_name: listing.name.clone(),
            author_id: "user-jonas".into(),
            author_name: "Jonas K.".into(),
            author_avatar: None,
            rating: 4.0,
            category_ratings: CategoryRatings {
                cleanliness: 4,
                location: 5,
                price: 4,
                facilities: 3,
                safety: 4,
            },
            title: "Great location, shower could be better".into(),
            content: "Perfect base for exploring the east side. Water pressure was \
                      weak on the first morning but fine afterwards."
                .into(),
            images: vec![],
            verified: true,
            helpful_count: 7,
            report_count: 0,
            created_at: at(2024, 1, 29),
            updated_at: at(2024, 1, 29),
            reservation_id: Some("res-1984".into()),
        },
        Review {
            id: "review-3".into(),
            listing_id: listing.id.clone(),
            listing_name: listing.name.clone(),
            author_id: "user-mira".into(),
            author_name: "Mira S.".into(),
            author_avatar: Some("/assets/avatars/mira.png".into()),
            rating: 3.5,
            category_ratings: CategoryRatings {
                cleanliness: 4,
                location: 4,
                price: 3,
                facilities: 3,
                safety: 4,
            },
            title: "Decent stay, noisy on weekends".into(),
            content: "Comfortable bed and a well-equipped kitchen, but bring \
                      earplugs if you stay over a Saturday."
                .into(),
            images: vec![],
            verified: false,
            helpful_count: 3,
            report_count: 0,
            created_at: at(2024, 1, 12),
            updated_at: at(2024, 1, 14),
            reservation_id: None,
        },
        Review {
            id: "review-4".into(),
            listing_id: listing.id.clone(),
            listing_name: listing.name.clone(),
            author_id: "user-tom".into(),
            author_name: "Tom W.".into(),
            author_avatar: None,
            rating: 2.0,
            category_ratings: CategoryRatings {
                cleanliness: 2,
                location: 4,
                price: 2,
                facilities: 2,
                safety: 3,
            },
            title: "Not as advertised".into(),
            content: "Heating was broken for two of our four nights and the \
                      host was slow to respond."
                .into(),
            images: vec![],
            verified: true,
            helpful_count: 9,
            report_count: 1,
            created_at: at(2023, 12, 3),
            updated_at: at(2023, 12, 3),
            reservation_id: Some("res-1761".into()),
        },
    ]
}
