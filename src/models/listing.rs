use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: String,           // Unique ID for the listing
    pub name: String,         // Listing name
    pub location: String,     // Neighbourhood / city
    pub price_per_night: u32, // Nightly price in whole currency units
}
