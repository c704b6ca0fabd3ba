//! Search providers.
//!
//! Pure, deterministic functions mapping a query to a structured payload.
//! The current implementations return fixed catalog data so runs are
//! reproducible without network access; a real integration would swap these
//! for API calls behind the same signatures. Payload shapes are per-domain
//! and intentionally not unified under one schema.

use serde_json::{json, Value};

/// Flight options for a destination.
pub fn flight_search(destination: &str, dates: &str, _budget: &str) -> Value {
    json!({
        "flights": [
            {
                "airline": "Ryanair",
                "price": "$450",
                "departure": "8:30 AM",
                "arrival": "2:15 PM",
                "duration": "1h 45m"
            },
            {
                "airline": "Aer Lingus",
                "price": "$420",
                "departure": "1:20 PM",
                "arrival": "7:05 PM",
                "duration": "1h 45m"
            }
        ],
        "destination": destination,
        "search_dates": dates
    })
}

/// Hotel options for a destination.
pub fn hotel_search(destination: &str, dates: &str, _budget: &str) -> Value {
    json!({
        "hotels": [
            {
                "name": "Hotel Catalonia",
                "price": "$150/night",
                "rating": "4.5/5",
                "amenities": ["Pool", "Gym", "WiFi", "Breakfast"]
            },
            {
                "name": "NH Hotels",
                "price": "$89/night",
                "rating": "4.2/5",
                "amenities": ["WiFi", "Parking", "24h Front Desk"]
            }
        ],
        "destination": destination,
        "search_dates": dates
    })
}

/// Events and activities during the stay.
pub fn events_search(destination: &str, _dates: &str) -> Value {
    json!({
        "events": [
            {
                "name": "Local Art Festival",
                "date": "Weekend",
                "price": "Free",
                "category": "Arts & Culture"
            },
            {
                "name": "Food & Wine Tour",
                "date": "Daily",
                "price": "$75",
                "category": "Food & Drink"
            }
        ],
        "destination": destination
    })
}

/// Dining options.
pub fn restaurant_search(destination: &str) -> Value {
    json!({
        "restaurants": [
            {
                "name": "The Local Bistro",
                "cuisine": "Local/Fusion",
                "rating": "4.7/5",
                "price_range": "$$"
            },
            {
                "name": "Seaside Grill",
                "cuisine": "Seafood",
                "rating": "4.5/5",
                "price_range": "$$$"
            }
        ],
        "destination": destination
    })
}

/// Main attractions. The attractions agent currently generates its guide
/// directly from the model instead of calling this, but the provider stays
/// available for data-backed variants.
pub fn attractions_search(destination: &str) -> Value {
    json!({
        "attractions": [
            {
                "name": "Historic City Center",
                "type": "Historical Site",
                "description": "Beautiful medieval architecture and cobblestone streets",
                "rating": "4.8/5",
                "admission": "Free",
                "recommended_duration": "2-3 hours"
            },
            {
                "name": "National Art Museum",
                "type": "Museum",
                "description": "World-class collection of contemporary and classical art",
                "rating": "4.6/5",
                "admission": "$15",
                "recommended_duration": "3-4 hours"
            },
            {
                "name": "Botanical Gardens",
                "type": "Nature",
                "description": "Stunning gardens with rare plants and peaceful walking paths",
                "rating": "4.5/5",
                "admission": "$10",
                "recommended_duration": "1-2 hours"
            }
        ],
        "destination": destination
    })
}

/// Places to meet locals and other travelers. Same status as
/// [`attractions_search`]: kept for data-backed variants.
pub fn social_places_search(destination: &str) -> Value {
    json!({
        "social_places": [
            {
                "name": "Central Market Square",
                "type": "Public Space",
                "description": "Bustling marketplace where locals gather, perfect for meeting people",
                "atmosphere": "Lively and welcoming",
                "best_time": "Morning and evening",
                "activities": ["Shopping", "People watching", "Local food"]
            },
            {
                "name": "Community Sports Center",
                "type": "Recreation",
                "description": "Local sports clubs and fitness classes open to visitors",
                "atmosphere": "Friendly and active",
                "best_time": "Weekday evenings",
                "activities": ["Group fitness", "Tennis", "Swimming"]
            },
            {
                "name": "Language Exchange Café",
                "type": "Café/Social",
                "description": "Popular spot for language exchanges and meeting international travelers",
                "atmosphere": "Relaxed and international",
                "best_time": "Tuesday and Thursday evenings",
                "activities": ["Language practice", "Cultural exchange", "Board games"]
            },
            {
                "name": "Riverside Walking Path",
                "type": "Outdoor",
                "description": "Scenic walking path where locals jog and walk their dogs",
                "atmosphere": "Peaceful and community-oriented",
                "best_time": "Early morning and sunset",
                "activities": ["Walking", "Jogging", "Dog watching"]
            }
        ],
        "destination": destination
    })
}
