use std::collections::HashMap;

use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::fixtures;
use crate::models::{
    Booking, BookingStatus, Contact, CreateBooking, CreateContact, CreateDestination,
    CreateFlight, CreateHotel, CreateTripPackage, CreateUser, Destination, Flight, Hotel,
    Normalize, Record, TripPackage, User, ALL_CATEGORIES, DEFAULT_FARE_CLASS,
};

/// Insertion-ordered records with an id index.
#[derive(Debug, Clone)]
struct Collection<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Record + Clone> Collection<T> {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Store a record. A record with an existing id replaces it in place.
    fn insert(&mut self, record: T) {
        match self.index.get(record.id()) {
            Some(&position) => self.records[position] = record,
            None => {
                self.index
                    .insert(record.id().to_string(), self.records.len());
                self.records.push(record);
            }
        }
    }

    fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        let position = *self.index.get(id)?;
        Some(&mut self.records[position])
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    fn to_vec(&self) -> Vec<T> {
        self.records.clone()
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn next_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.index.contains_key(&id) {
                return id;
            }
        }
    }
}

/// Record counts per collection.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct CatalogStats {
    pub users: usize,
    pub destinations: usize,
    pub trip_packages: usize,
    pub bookings: usize,
    pub contacts: usize,
    pub flights: usize,
    pub hotels: usize,
}

/// In-memory catalog of destinations, packages, flights, hotels, bookings,
/// contact messages and users.
///
/// Nothing is persisted; a fresh store holds only what it was seeded with.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    users: Collection<User>,
    destinations: Collection<Destination>,
    trip_packages: Collection<TripPackage>,
    bookings: Collection<Booking>,
    contacts: Collection<Contact>,
    flights: Collection<Flight>,
    hotels: Collection<Hotel>,
}

impl CatalogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            users: Collection::new(),
            destinations: Collection::new(),
            trip_packages: Collection::new(),
            bookings: Collection::new(),
            contacts: Collection::new(),
            flights: Collection::new(),
            hotels: Collection::new(),
        }
    }

    /// Create a store pre-populated with the sample catalog.
    pub fn with_fixtures() -> Self {
        let mut store = Self::new();
        store.seed_fixtures();
        store
    }

    /// Load the sample destinations, packages, flights and hotels.
    pub fn seed_fixtures(&mut self) {
        fixtures::destinations()
            .into_iter()
            .for_each(|record| self.destinations.insert(record));
        fixtures::trip_packages()
            .into_iter()
            .for_each(|record| self.trip_packages.insert(record));
        fixtures::flights()
            .into_iter()
            .for_each(|record| self.flights.insert(record));
        fixtures::hotels()
            .into_iter()
            .for_each(|record| self.hotels.insert(record));

        tracing::debug!(stats = ?self.stats(), "catalog fixtures loaded");
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            users: self.users.len(),
            destinations: self.destinations.len(),
            trip_packages: self.trip_packages.len(),
            bookings: self.bookings.len(),
            contacts: self.contacts.len(),
            flights: self.flights.len(),
            hotels: self.hotels.len(),
        }
    }

    // Users

    pub fn user(&self, id: &str) -> Option<User> {
        self.users.get(id).cloned()
    }

    /// Linear scan; usernames are not indexed.
    pub fn user_by_username(&self, username: &str) -> Option<User> {
        self.users
            .iter()
            .find(|user| user.username == username)
            .cloned()
    }

    pub fn create_user(&mut self, input: CreateUser) -> User {
        let user = User {
            id: self.users.next_id(),
            username: input.username,
            password: input.password,
        };
        self.users.insert(user.clone());
        tracing::info!(user_id = %user.id, "user created");
        user
    }

    // Destinations

    pub fn all_destinations(&self) -> Vec<Destination> {
        self.destinations.to_vec()
    }

    pub fn destination(&self, id: &str) -> Option<Destination> {
        self.destinations.get(id).cloned()
    }

    pub fn create_destination(&mut self, input: CreateDestination) -> Destination {
        let destination = Destination {
            id: self.destinations.next_id(),
            name: input.name,
            description: input.description,
            image_url: input.image_url,
            price: input.price,
            rating: input.rating,
            location: input.location,
            created_at: OffsetDateTime::now_utc(),
        };
        self.destinations.insert(destination.clone());
        tracing::info!(destination_id = %destination.id, "destination created");
        destination
    }

    // Trip packages

    pub fn all_trip_packages(&self) -> Vec<TripPackage> {
        self.trip_packages.to_vec()
    }

    /// Packages whose category equals `category` exactly.
    ///
    /// `None`, an empty string or `"all"` return every package.
    pub fn trip_packages_by_category(&self, category: Option<&str>) -> Vec<TripPackage> {
        match category {
            None | Some("") | Some(ALL_CATEGORIES) => self.all_trip_packages(),
            Some(category) => self
                .trip_packages
                .iter()
                .filter(|package| package.category.as_str() == category)
                .cloned()
                .collect(),
        }
    }

    pub fn trip_package(&self, id: &str) -> Option<TripPackage> {
        self.trip_packages.get(id).cloned()
    }

    pub fn create_trip_package(&mut self, input: CreateTripPackage) -> TripPackage {
        let package = TripPackage {
            id: self.trip_packages.next_id(),
            title: input.title,
            description: input.description,
            image_url: input.image_url,
            price: input.price,
            duration: input.duration,
            category: input.category,
            rating: input.rating,
            inclusions: input.inclusions,
            location: input.location,
            created_at: OffsetDateTime::now_utc(),
        };
        self.trip_packages.insert(package.clone());
        tracing::info!(package_id = %package.id, category = %package.category, "trip package created");
        package
    }

    // Bookings

    pub fn all_bookings(&self) -> Vec<Booking> {
        self.bookings.to_vec()
    }

    pub fn booking(&self, id: &str) -> Option<Booking> {
        self.bookings.get(id).cloned()
    }

    /// Store a new booking in `pending` status.
    pub fn create_booking(&mut self, input: CreateBooking) -> Booking {
        let input = input.normalize();
        let booking = Booking {
            id: self.bookings.next_id(),
            package_id: input.package_id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            travelers: input.travelers,
            departure_date: input.departure_date,
            return_date: input.return_date,
            total_price: input.total_price,
            status: BookingStatus::Pending,
            created_at: OffsetDateTime::now_utc(),
        };
        self.bookings.insert(booking.clone());
        tracing::info!(
            booking_id = %booking.id,
            package_id = ?booking.package_id,
            travelers = booking.travelers,
            "booking created"
        );
        booking
    }

    /// Replace the status of an existing booking.
    pub fn update_booking_status(&mut self, id: &str, status: BookingStatus) -> Option<Booking> {
        let booking = self.bookings.get_mut(id)?;
        let previous = booking.status;
        booking.status = status;
        tracing::info!(booking_id = %id, from = %previous, to = %status, "booking status updated");
        Some(booking.clone())
    }

    // Contacts

    pub fn all_contacts(&self) -> Vec<Contact> {
        self.contacts.to_vec()
    }

    pub fn contact(&self, id: &str) -> Option<Contact> {
        self.contacts.get(id).cloned()
    }

    pub fn create_contact(&mut self, input: CreateContact) -> Contact {
        let input = input.normalize();
        let contact = Contact {
            id: self.contacts.next_id(),
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            subject: input.subject,
            message: input.message,
            newsletter: input.newsletter.unwrap_or(false),
            created_at: OffsetDateTime::now_utc(),
        };
        self.contacts.insert(contact.clone());
        tracing::info!(contact_id = %contact.id, newsletter = contact.newsletter, "contact message stored");
        contact
    }

    // Flights

    pub fn all_flights(&self) -> Vec<Flight> {
        self.flights.to_vec()
    }

    /// Flights whose origin contains `from` and whose destination contains
    /// `to`, ignoring case. Missing or empty bounds match everything.
    pub fn search_flights(&self, from: Option<&str>, to: Option<&str>) -> Vec<Flight> {
        let from = lowercase_term(from);
        let to = lowercase_term(to);

        if from.is_none() && to.is_none() {
            return self.all_flights();
        }

        self.flights
            .iter()
            .filter(|flight| {
                contains_term(&flight.origin, from.as_deref())
                    && contains_term(&flight.destination, to.as_deref())
            })
            .cloned()
            .collect()
    }

    pub fn create_flight(&mut self, input: CreateFlight) -> Flight {
        let input = input.normalize();
        let flight = Flight {
            id: self.flights.next_id(),
            airline: input.airline,
            origin: input.origin,
            destination: input.destination,
            departure_time: input.departure_time,
            arrival_time: input.arrival_time,
            duration: input.duration,
            stops: input.stops,
            price: input.price,
            fare_class: input
                .fare_class
                .unwrap_or_else(|| DEFAULT_FARE_CLASS.to_string()),
            created_at: OffsetDateTime::now_utc(),
        };
        self.flights.insert(flight.clone());
        tracing::info!(flight_id = %flight.id, "flight created");
        flight
    }

    // Hotels

    pub fn all_hotels(&self) -> Vec<Hotel> {
        self.hotels.to_vec()
    }

    /// Hotels whose location or name contains `location`, ignoring case.
    pub fn search_hotels(&self, location: Option<&str>) -> Vec<Hotel> {
        let Some(term) = lowercase_term(location) else {
            return self.all_hotels();
        };

        self.hotels
            .iter()
            .filter(|hotel| {
                contains_term(&hotel.location, Some(term.as_str()))
                    || contains_term(&hotel.name, Some(term.as_str()))
            })
            .cloned()
            .collect()
    }

    pub fn create_hotel(&mut self, input: CreateHotel) -> Hotel {
        let input = input.normalize();
        let hotel = Hotel {
            id: self.hotels.next_id(),
            name: input.name,
            location: input.location,
            image_url: input.image_url,
            rating: input.rating,
            price_per_night: input.price_per_night,
            amenities: input.amenities,
            description: input.description,
            star_rating: input.star_rating,
            distance_from_center: input.distance_from_center,
            created_at: OffsetDateTime::now_utc(),
        };
        self.hotels.insert(hotel.clone());
        tracing::info!(hotel_id = %hotel.id, "hotel created");
        hotel
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

fn lowercase_term(term: Option<&str>) -> Option<String> {
    term.filter(|t| !t.is_empty()).map(str::to_lowercase)
}

fn contains_term(haystack: &str, term: Option<&str>) -> bool {
    term.map_or(true, |term| haystack.to_lowercase().contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::collections::HashSet;
    use time::macros::datetime;

    fn booking_input() -> CreateBooking {
        CreateBooking {
            package_id: Some("pkg-1".to_string()),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            travelers: 2,
            departure_date: datetime!(2025-03-01 0:00 UTC),
            return_date: None,
            total_price: Decimal::new(9998, 0),
        }
    }

    fn contact_input() -> CreateContact {
        CreateContact {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            phone: Some(String::new()),
            subject: None,
            message: "Do you run trips to Patagonia?".to_string(),
            newsletter: None,
        }
    }

    #[test]
    fn fixtures_populate_catalog_in_insertion_order() {
        let store = CatalogStore::with_fixtures();

        let destinations = store.all_destinations();
        assert_eq!(destinations.len(), 4);
        let names: Vec<_> = destinations.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            ["Maldives", "Tokyo, Japan", "Paris, France", "Safari, Kenya"]
        );
        assert_eq!(store.destination("dest-1").unwrap().name, "Maldives");

        let stats = store.stats();
        assert_eq!(stats.trip_packages, 9);
        assert_eq!(stats.flights, 6);
        assert_eq!(stats.hotels, 6);
        assert_eq!(stats.bookings, 0);
    }

    #[test]
    fn missing_records_are_absent() {
        let store = CatalogStore::with_fixtures();
        assert!(store.destination("dest-404").is_none());
        assert!(store.trip_package("nope").is_none());
        assert!(store.booking("nope").is_none());
        assert!(store.contact("nope").is_none());
        assert!(store.user("nope").is_none());
    }

    #[test]
    fn category_filter_matches_exactly() {
        let store = CatalogStore::with_fixtures();

        let luxury = store.trip_packages_by_category(Some("luxury"));
        assert_eq!(luxury.len(), 2);
        assert!(luxury.iter().all(|p| p.category.as_str() == "luxury"));

        assert_eq!(store.trip_packages_by_category(Some("cultural")).len(), 4);
        assert!(store.trip_packages_by_category(Some("Luxury")).is_empty());
        assert!(store.trip_packages_by_category(Some("lux")).is_empty());
    }

    #[test]
    fn category_sentinel_returns_everything() {
        let store = CatalogStore::with_fixtures();
        assert_eq!(store.trip_packages_by_category(None).len(), 9);
        assert_eq!(store.trip_packages_by_category(Some("all")).len(), 9);
        assert_eq!(store.trip_packages_by_category(Some("")).len(), 9);
    }

    #[test]
    fn flight_search_is_case_insensitive_substring() {
        let store = CatalogStore::with_fixtures();

        let matches = store.search_flights(Some("nyc"), Some("lon"));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "flight-1");

        assert_eq!(store.search_flights(Some("jf"), None).len(), 2);
        assert_eq!(store.search_flights(None, Some("r")).len(), 1);
        assert_eq!(store.search_flights(None, None).len(), 6);
        assert_eq!(store.search_flights(Some(""), Some("")).len(), 6);
        assert!(store.search_flights(Some("SFO"), None).is_empty());
    }

    #[test]
    fn hotel_search_matches_location_or_name() {
        let store = CatalogStore::with_fixtures();

        let tokyo = store.search_hotels(Some("tokyo"));
        assert_eq!(tokyo.len(), 1);
        assert_eq!(tokyo[0].id, "hotel-2");

        // "Safari Lodge Kenya" matches on name, location is "Kenya"
        let lodge = store.search_hotels(Some("LODGE"));
        assert_eq!(lodge.len(), 1);
        assert_eq!(lodge[0].id, "hotel-4");

        assert_eq!(store.search_hotels(None).len(), 6);
        assert_eq!(store.search_hotels(Some("")).len(), 6);
    }

    #[test]
    fn created_booking_is_pending_with_explicit_absent_fields() {
        let mut store = CatalogStore::with_fixtures();
        let before = OffsetDateTime::now_utc();

        let mut input = booking_input();
        input.package_id = Some(String::new());
        let booking = store.create_booking(input);

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.phone, None);
        assert_eq!(booking.package_id, None);
        assert_eq!(booking.return_date, None);
        assert!(booking.created_at >= before);
        assert_eq!(store.booking(&booking.id), Some(booking.clone()));

        let value = serde_json::to_value(&booking).unwrap();
        assert!(value["phone"].is_null());
        assert!(value["packageId"].is_null());
        assert!(value["returnDate"].is_null());
        assert_eq!(value["status"], "pending");
    }

    #[test]
    fn booking_package_reference_is_not_checked() {
        let mut store = CatalogStore::new();
        let mut input = booking_input();
        input.package_id = Some("pkg-does-not-exist".to_string());

        let booking = store.create_booking(input);
        assert_eq!(booking.package_id.as_deref(), Some("pkg-does-not-exist"));
    }

    #[test]
    fn created_ids_are_unique() {
        let mut store = CatalogStore::new();
        let ids: HashSet<_> = (0..200)
            .map(|_| store.create_booking(booking_input()).id)
            .collect();
        assert_eq!(ids.len(), 200);
        assert_eq!(store.all_bookings().len(), 200);
    }

    #[test]
    fn booking_status_updates_in_place() {
        let mut store = CatalogStore::new();
        let booking = store.create_booking(booking_input());

        let confirmed = store
            .update_booking_status(&booking.id, BookingStatus::Confirmed)
            .unwrap();
        assert_eq!(confirmed.status, BookingStatus::Confirmed);
        assert_eq!(confirmed.created_at, booking.created_at);

        // any status may replace any other
        let reopened = store
            .update_booking_status(&booking.id, BookingStatus::Pending)
            .unwrap();
        assert_eq!(reopened.status, BookingStatus::Pending);

        assert!(store
            .update_booking_status("missing", BookingStatus::Cancelled)
            .is_none());
    }

    #[test]
    fn contact_defaults_newsletter_and_blank_fields() {
        let mut store = CatalogStore::new();
        let contact = store.create_contact(contact_input());

        assert!(!contact.newsletter);
        assert_eq!(contact.phone, None);
        assert_eq!(contact.subject, None);
        assert_eq!(store.all_contacts().len(), 1);
        assert_eq!(store.contact(&contact.id), Some(contact));
    }

    #[test]
    fn flight_defaults_to_economy() {
        let mut store = CatalogStore::new();
        let flight = store.create_flight(CreateFlight {
            airline: "Iberia".to_string(),
            origin: "MAD".to_string(),
            destination: "BOG".to_string(),
            departure_time: "12:10".to_string(),
            arrival_time: "16:05".to_string(),
            duration: "10h 55m".to_string(),
            stops: 0,
            price: Decimal::new(712, 0),
            fare_class: None,
        });
        assert_eq!(flight.fare_class, "economy");
        assert_eq!(store.search_flights(Some("mad"), Some("bog")).len(), 1);
    }

    #[test]
    fn users_are_found_by_username() {
        let mut store = CatalogStore::new();
        let user = store.create_user(CreateUser {
            username: "wanderer".to_string(),
            password: "hunter2".to_string(),
        });

        assert_eq!(store.user(&user.id), Some(user.clone()));
        assert_eq!(store.user_by_username("wanderer"), Some(user));
        assert!(store.user_by_username("Wanderer").is_none());
    }

    #[test]
    fn created_catalog_records_are_appended() {
        let mut store = CatalogStore::with_fixtures();

        let destination = store.create_destination(CreateDestination {
            name: "Reykjavik".to_string(),
            description: "Northern lights and hot springs".to_string(),
            image_url: "https://example.com/reykjavik.jpg".to_string(),
            price: Decimal::new(1450, 0),
            rating: Decimal::new(47, 1),
            location: "Iceland".to_string(),
        });
        assert_eq!(store.all_destinations().last(), Some(&destination));

        let hotel = store.create_hotel(CreateHotel {
            name: "Harbour Inn".to_string(),
            location: "Reykjavik, Iceland".to_string(),
            image_url: "https://example.com/inn.jpg".to_string(),
            rating: Decimal::new(44, 1),
            price_per_night: Decimal::new(160, 0),
            amenities: vec!["Breakfast".to_string()],
            description: "Small harbour-side hotel".to_string(),
            star_rating: 3,
            distance_from_center: Some(" ".to_string()),
        });
        assert_eq!(hotel.distance_from_center, None);
        assert_eq!(store.search_hotels(Some("iceland")), vec![hotel]);

        let package = store.create_trip_package(CreateTripPackage {
            title: "Ring Road Adventure".to_string(),
            description: "Self-drive around Iceland".to_string(),
            image_url: "https://example.com/ring.jpg".to_string(),
            price: Decimal::new(2650, 0),
            duration: 8,
            category: crate::models::TripCategory::Adventure,
            rating: Decimal::new(46, 1),
            inclusions: vec![],
            location: "Iceland".to_string(),
        });
        assert_eq!(store.trip_packages_by_category(Some("adventure")).len(), 2);
        assert_eq!(store.trip_package(&package.id), Some(package));
    }
}
