//! Sample catalog records loaded when the store is seeded.
//!
//! Ids are fixed (`dest-1`, `pkg-1`, `flight-1`, `hotel-1`, ...) so links
//! built against them stay valid across restarts.

use rust_decimal::Decimal;
use time::{macros::datetime, OffsetDateTime};

use crate::models::{Destination, Flight, Hotel, TripCategory, TripPackage, DEFAULT_FARE_CLASS};

const SEEDED_AT: OffsetDateTime = datetime!(2024-01-01 0:00 UTC);

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Rating with one decimal place, e.g. `rating(48)` is 4.8.
fn rating(tenths: i64) -> Decimal {
    Decimal::new(tenths, 1)
}

fn destination(
    id: &str,
    name: &str,
    description: &str,
    image_url: &str,
    price: i64,
    rating_tenths: i64,
    location: &str,
) -> Destination {
    Destination {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        price: Decimal::new(price, 0),
        rating: rating(rating_tenths),
        location: location.to_string(),
        created_at: SEEDED_AT,
    }
}

pub fn destinations() -> Vec<Destination> {
    vec![
        destination(
            "dest-1",
            "Maldives",
            "Crystal clear waters and pristine beaches",
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?auto=format&fit=crop&w=400&h=300",
            2499,
            48,
            "Indian Ocean",
        ),
        destination(
            "dest-2",
            "Tokyo, Japan",
            "Modern cityscape meets ancient traditions",
            "https://images.unsplash.com/photo-1528164344705-47542687000d?auto=format&fit=crop&w=400&h=300",
            1899,
            47,
            "Japan",
        ),
        destination(
            "dest-3",
            "Paris, France",
            "The city of lights and romance",
            "https://images.unsplash.com/photo-1467269204594-9661b134dd2b?auto=format&fit=crop&w=400&h=300",
            1599,
            46,
            "France",
        ),
        destination(
            "dest-4",
            "Safari, Kenya",
            "Wildlife adventures in the savanna",
            "https://images.unsplash.com/photo-1516026672322-bc52d61a55d5?auto=format&fit=crop&w=400&h=300",
            3299,
            49,
            "Kenya",
        ),
    ]
}

struct PackageSeed<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    image_url: &'a str,
    price: i64,
    duration: u32,
    category: TripCategory,
    rating_tenths: i64,
    inclusions: [&'a str; 3],
    location: &'a str,
}

impl PackageSeed<'_> {
    fn build(self) -> TripPackage {
        TripPackage {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            image_url: self.image_url.to_string(),
            price: Decimal::new(self.price, 0),
            duration: self.duration,
            category: self.category,
            rating: rating(self.rating_tenths),
            inclusions: strings(&self.inclusions),
            location: self.location.to_string(),
            created_at: SEEDED_AT,
        }
    }
}

pub fn trip_packages() -> Vec<TripPackage> {
    [
        PackageSeed {
            id: "pkg-1",
            title: "Maldives Paradise Retreat",
            description: "7 days in overwater villas with private pools, spa treatments, and gourmet dining.",
            image_url: "https://images.unsplash.com/photo-1544551763-46a013bb70d5?auto=format&fit=crop&w=500&h=300",
            price: 4999,
            duration: 7,
            category: TripCategory::Luxury,
            rating_tenths: 50,
            inclusions: [
                "Overwater villa accommodation",
                "All meals & premium beverages",
                "Spa treatments & water activities",
            ],
            location: "Maldives",
        },
        PackageSeed {
            id: "pkg-2",
            title: "Himalayan Base Camp Trek",
            description: "14-day guided trek to Everest Base Camp with experienced Sherpa guides.",
            image_url: "https://images.unsplash.com/photo-1506197603052-3cc9c3a201bd?auto=format&fit=crop&w=500&h=300",
            price: 2899,
            duration: 14,
            category: TripCategory::Adventure,
            rating_tenths: 48,
            inclusions: [
                "Expert Sherpa guides",
                "All permits & equipment",
                "Mountain lodge accommodation",
            ],
            location: "Nepal",
        },
        PackageSeed {
            id: "pkg-3",
            title: "Japan Family Discovery",
            description: "10 days exploring Tokyo, Kyoto, and Osaka with family-friendly activities.",
            image_url: "https://images.unsplash.com/photo-1480796927426-f609979314bd?auto=format&fit=crop&w=500&h=300",
            price: 3299,
            duration: 10,
            category: TripCategory::Family,
            rating_tenths: 49,
            inclusions: [
                "Theme park tickets included",
                "Kid-friendly restaurants",
                "Cultural workshops for children",
            ],
            location: "Japan",
        },
        PackageSeed {
            id: "pkg-4",
            title: "Morocco Cultural Immersion",
            description: "8 days exploring imperial cities, markets, and Sahara Desert camping.",
            image_url: "https://images.unsplash.com/photo-1539650116574-75c0c6d0e5cd?auto=format&fit=crop&w=500&h=300",
            price: 1899,
            duration: 8,
            category: TripCategory::Cultural,
            rating_tenths: 47,
            inclusions: [
                "Sahara Desert camping",
                "Traditional cooking classes",
                "Local guide experiences",
            ],
            location: "Morocco",
        },
        PackageSeed {
            id: "pkg-5",
            title: "Premium African Safari",
            description: "9 days luxury safari across Kenya and Tanzania with exclusive game viewing.",
            image_url: "https://images.unsplash.com/photo-1516426122078-c23e76319801?auto=format&fit=crop&w=500&h=300",
            price: 6799,
            duration: 9,
            category: TripCategory::Luxury,
            rating_tenths: 50,
            inclusions: [
                "Luxury tented camps",
                "Private game drives",
                "Big 5 wildlife viewing",
            ],
            location: "Kenya & Tanzania",
        },
        PackageSeed {
            id: "pkg-6",
            title: "Caribbean Family Fun",
            description: "7 days all-inclusive resort with kids club, water sports, and family activities.",
            image_url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?auto=format&fit=crop&w=500&h=300",
            price: 2199,
            duration: 7,
            category: TripCategory::Family,
            rating_tenths: 46,
            inclusions: [
                "All-inclusive meals & drinks",
                "Kids club & teen activities",
                "Water sports & beach access",
            ],
            location: "Caribbean",
        },
        PackageSeed {
            id: "pkg-7",
            title: "India Cultural Heritage",
            description: "12 days exploring the Golden Triangle with authentic cultural experiences.",
            image_url: "https://images.unsplash.com/photo-1524492412937-b28074a5d7da?auto=format&fit=crop&w=500&h=300",
            price: 2299,
            duration: 12,
            category: TripCategory::Cultural,
            rating_tenths: 48,
            inclusions: [
                "Taj Mahal & Red Fort tours",
                "Traditional dance performances",
                "Local cooking workshops",
            ],
            location: "India",
        },
        PackageSeed {
            id: "pkg-8",
            title: "Peru Machu Picchu Explorer",
            description: "9 days discovering ancient Incan civilization and local traditions.",
            image_url: "https://images.unsplash.com/photo-1587595431973-160d0d94add1?auto=format&fit=crop&w=500&h=300",
            price: 2799,
            duration: 9,
            category: TripCategory::Cultural,
            rating_tenths: 49,
            inclusions: [
                "Machu Picchu guided tour",
                "Sacred Valley exploration",
                "Andean village visits",
            ],
            location: "Peru",
        },
        PackageSeed {
            id: "pkg-9",
            title: "Greece Island Mythology",
            description: "10 days exploring ancient Greek culture across multiple islands.",
            image_url: "https://images.unsplash.com/photo-1555993539-1732b0258734?auto=format&fit=crop&w=500&h=300",
            price: 3199,
            duration: 10,
            category: TripCategory::Cultural,
            rating_tenths: 47,
            inclusions: [
                "Acropolis & Parthenon tours",
                "Archaeological site visits",
                "Traditional Greek cuisine",
            ],
            location: "Greece",
        },
    ]
    .into_iter()
    .map(PackageSeed::build)
    .collect()
}

#[allow(clippy::too_many_arguments)]
fn flight(
    id: &str,
    airline: &str,
    origin: &str,
    destination: &str,
    departure_time: &str,
    arrival_time: &str,
    duration: &str,
    stops: u32,
    price: i64,
) -> Flight {
    Flight {
        id: id.to_string(),
        airline: airline.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        departure_time: departure_time.to_string(),
        arrival_time: arrival_time.to_string(),
        duration: duration.to_string(),
        stops,
        price: Decimal::new(price, 0),
        fare_class: DEFAULT_FARE_CLASS.to_string(),
        created_at: SEEDED_AT,
    }
}

pub fn flights() -> Vec<Flight> {
    vec![
        flight("flight-1", "British Airways", "NYC", "LON", "08:30", "14:45", "6h 15m", 1, 649),
        flight("flight-2", "Emirates", "NYC", "DXB", "23:50", "19:30", "12h 40m", 0, 899),
        flight("flight-3", "Japan Airlines", "LAX", "NRT", "11:30", "15:45+1", "11h 15m", 0, 1299),
        flight("flight-4", "Air France", "JFK", "CDG", "22:15", "11:30+1", "7h 15m", 0, 789),
        flight("flight-5", "Kenya Airways", "JFK", "NBO", "06:45", "05:30+1", "14h 45m", 1, 1199),
        flight("flight-6", "Qatar Airways", "LAX", "MLE", "14:20", "06:15+2", "22h 55m", 2, 1599),
    ]
}

struct HotelSeed<'a> {
    id: &'a str,
    name: &'a str,
    location: &'a str,
    image_url: &'a str,
    rating_tenths: i64,
    price_per_night: i64,
    amenities: [&'a str; 4],
    description: &'a str,
    star_rating: u8,
    distance_from_center: &'a str,
}

impl HotelSeed<'_> {
    fn build(self) -> Hotel {
        Hotel {
            id: self.id.to_string(),
            name: self.name.to_string(),
            location: self.location.to_string(),
            image_url: self.image_url.to_string(),
            rating: rating(self.rating_tenths),
            price_per_night: Decimal::new(self.price_per_night, 0),
            amenities: strings(&self.amenities),
            description: self.description.to_string(),
            star_rating: self.star_rating,
            distance_from_center: Some(self.distance_from_center.to_string()),
            created_at: SEEDED_AT,
        }
    }
}

pub fn hotels() -> Vec<Hotel> {
    [
        HotelSeed {
            id: "hotel-1",
            name: "Grand Ocean Resort",
            location: "Maldives",
            image_url: "https://images.unsplash.com/photo-1611892440504-42a792e24d32?auto=format&fit=crop&w=300&h=200",
            rating_tenths: 50,
            price_per_night: 289,
            amenities: ["Ocean view", "Pool", "Spa", "Free WiFi"],
            description: "Luxury resort with overwater villas and world-class amenities",
            star_rating: 5,
            distance_from_center: "0.5 miles from beach",
        },
        HotelSeed {
            id: "hotel-2",
            name: "Tokyo Central Hotel",
            location: "Tokyo, Japan",
            image_url: "https://images.unsplash.com/photo-1564501049412-61c2a3083791?auto=format&fit=crop&w=300&h=200",
            rating_tenths: 47,
            price_per_night: 189,
            amenities: ["City view", "Gym", "Restaurant", "Free WiFi"],
            description: "Modern hotel in the heart of Tokyo with easy access to attractions",
            star_rating: 4,
            distance_from_center: "2 miles from city center",
        },
        HotelSeed {
            id: "hotel-3",
            name: "Le Marais Boutique Hotel",
            location: "Paris, France",
            image_url: "https://images.unsplash.com/photo-1455587734955-081b22074882?auto=format&fit=crop&w=300&h=200",
            rating_tenths: 48,
            price_per_night: 245,
            amenities: ["Historic building", "Breakfast", "Concierge", "Free WiFi"],
            description: "Charming boutique hotel in the historic Marais district",
            star_rating: 4,
            distance_from_center: "1 mile from Louvre",
        },
        HotelSeed {
            id: "hotel-4",
            name: "Safari Lodge Kenya",
            location: "Kenya",
            image_url: "https://images.unsplash.com/photo-1518684079-3c830dcef090?auto=format&fit=crop&w=300&h=200",
            rating_tenths: 49,
            price_per_night: 399,
            amenities: ["Safari tours", "Restaurant", "Pool", "Nature view"],
            description: "Authentic safari lodge with stunning wildlife views",
            star_rating: 4,
            distance_from_center: "15 miles from Nairobi",
        },
        HotelSeed {
            id: "hotel-5",
            name: "Taj Palace Hotel",
            location: "India",
            image_url: "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?auto=format&fit=crop&w=300&h=200",
            rating_tenths: 46,
            price_per_night: 125,
            amenities: ["Traditional decor", "Spa", "Restaurant", "Cultural tours"],
            description: "Magnificent palace hotel showcasing Indian heritage",
            star_rating: 5,
            distance_from_center: "3 miles from Taj Mahal",
        },
        HotelSeed {
            id: "hotel-6",
            name: "Santorini Cliffside Resort",
            location: "Greece",
            image_url: "https://images.unsplash.com/photo-1613395877344-13d4a8e0d49e?auto=format&fit=crop&w=300&h=200",
            rating_tenths: 49,
            price_per_night: 295,
            amenities: ["Sea view", "Infinity pool", "Restaurant", "Sunset terrace"],
            description: "Stunning cliffside resort with breathtaking Aegean Sea views",
            star_rating: 5,
            distance_from_center: "2 miles from Oia",
        },
    ]
    .into_iter()
    .map(HotelSeed::build)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fixture_ids_are_unique_per_collection() {
        let ids: HashSet<_> = trip_packages().into_iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 9);
        let ids: HashSet<_> = hotels().into_iter().map(|h| h.id).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn ratings_keep_one_decimal_place() {
        let first = &trip_packages()[0];
        assert_eq!(first.rating.to_string(), "5.0");
        assert_eq!(destinations()[0].rating.to_string(), "4.8");
    }
}
