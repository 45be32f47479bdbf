//! Baseline data seeding for the Pro-Mata database.
//!
//! Ensures a fresh database holds the admin account, the Pró-Mata research
//! center with its rooms, the guided activity catalog, and the booking policy.
//! Every write is create-if-absent, so the seed can be re-run safely.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let pool = SeedConfig::from_env().connect().await?;
//! let result = Seeder::new(PgStore::new(pool)).run_and_close().await?;
//! ```

pub mod config;
pub mod db;
pub mod fixtures;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::db::{MemoryStore, PgStore, SeedError, SeedResult, SeedStore, Seeder};
}
