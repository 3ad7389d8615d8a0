//! Catalog records and the inputs used to create them.
//!
//! Records serialize with camelCase keys. Absent optional fields are written
//! as an explicit `null`, decimals as strings and timestamps as RFC 3339.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::Validate;

/// Fare class applied to flights created without one.
pub const DEFAULT_FARE_CLASS: &str = "economy";

/// Category filter value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Anything stored in a catalog collection.
pub trait Record {
    fn id(&self) -> &str;
}

/// Trip package category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TripCategory {
    Luxury,
    Adventure,
    Family,
    Cultural,
}

impl TripCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            TripCategory::Luxury => "luxury",
            TripCategory::Adventure => "adventure",
            TripCategory::Family => "family",
            TripCategory::Cultural => "cultural",
        }
    }
}

impl fmt::Display for TripCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Booking lifecycle status. Any value may replace any other.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: Decimal,
    pub rating: Decimal,
    pub location: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripPackage {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: Decimal,
    /// Length of the trip in days
    pub duration: u32,
    pub category: TripCategory,
    pub rating: Decimal,
    pub inclusions: Vec<String>,
    pub location: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub airline: String,
    /// Origin airport or city code
    #[serde(rename = "from")]
    pub origin: String,
    /// Destination airport or city code
    #[serde(rename = "to")]
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub stops: u32,
    pub price: Decimal,
    #[serde(rename = "class")]
    pub fare_class: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub location: String,
    pub image_url: String,
    pub rating: Decimal,
    pub price_per_night: Decimal,
    pub amenities: Vec<String>,
    pub description: String,
    pub star_rating: u8,
    pub distance_from_center: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    /// Trip package this booking refers to. Not checked against the catalog.
    pub package_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub travelers: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub departure_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub return_date: Option<OffsetDateTime>,
    pub total_price: Decimal,
    pub status: BookingStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub newsletter: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Site user. The password is stored as given and never serialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

macro_rules! impl_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Record for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )+
    };
}

impl_record!(Destination, TripPackage, Flight, Hotel, Booking, Contact, User);

/// Returns `None` for absent or blank optional text.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Input types that carry optional fields normalized before storage.
pub trait Normalize {
    fn normalize(self) -> Self;
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDestination {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: Decimal,
    pub rating: Decimal,
    #[validate(length(min = 1))]
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripPackage {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: Decimal,
    #[validate(range(min = 1))]
    pub duration: u32,
    pub category: TripCategory,
    pub rating: Decimal,
    #[serde(default)]
    pub inclusions: Vec<String>,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFlight {
    #[validate(length(min = 1))]
    pub airline: String,
    #[serde(rename = "from")]
    #[validate(length(min = 1))]
    pub origin: String,
    #[serde(rename = "to")]
    #[validate(length(min = 1))]
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub stops: u32,
    pub price: Decimal,
    #[serde(rename = "class", default)]
    pub fare_class: Option<String>,
}

impl Normalize for CreateFlight {
    fn normalize(mut self) -> Self {
        self.fare_class = normalize_optional(self.fare_class);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateHotel {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub image_url: String,
    pub rating: Decimal,
    pub price_per_night: Decimal,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub description: String,
    #[validate(range(min = 1, max = 5))]
    pub star_rating: u8,
    #[serde(default)]
    pub distance_from_center: Option<String>,
}

impl Normalize for CreateHotel {
    fn normalize(mut self) -> Self {
        self.distance_from_center = normalize_optional(self.distance_from_center);
        self
    }
}

/// Booking request body. `status` is not accepted; new bookings start pending.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    #[serde(default)]
    pub package_id: Option<String>,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[validate(range(min = 1))]
    pub travelers: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub departure_date: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub return_date: Option<OffsetDateTime>,
    pub total_price: Decimal,
}

impl Normalize for CreateBooking {
    fn normalize(mut self) -> Self {
        self.package_id = normalize_optional(self.package_id);
        self.phone = normalize_optional(self.phone);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContact {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[validate(length(min = 1))]
    pub message: String,
    #[serde(default)]
    pub newsletter: Option<bool>,
}

impl Normalize for CreateContact {
    fn normalize(mut self) -> Self {
        self.phone = normalize_optional(self.phone);
        self.subject = normalize_optional(self.subject);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1))]
    pub username: String,
    pub password: String,
}
