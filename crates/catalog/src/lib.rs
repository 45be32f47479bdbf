//! Record types for the Pro-Mata research center catalog.
//!
//! These are the rows the seeder ensures exist: the admin account, the research
//! center, its accommodations, the bookable activity types, and system settings.

pub mod models;
pub mod settings;

pub use models::{
    Accommodation, AccommodationKind, ActivityType, AdminAccount, Difficulty, GeoPoint,
    ResearchCenter, Role, TagError,
};
pub use settings::{BookingSettings, SystemSetting};
