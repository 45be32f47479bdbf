//! Database integration for seeding the baseline catalog.
//!
//! The [`Seeder`] writes through a [`SeedStore`]: [`PgStore`] against
//! PostgreSQL, or [`MemoryStore`] in tests.

mod error;
mod memory;
mod postgres;
mod seeder;
mod store;

pub use error::SeedError;
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use seeder::{SeedResult, Seeder};
pub use store::SeedStore;
