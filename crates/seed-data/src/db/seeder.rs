//! Baseline seeding run.

use time::OffsetDateTime;
use tracing::{info, warn};
use uuid::Uuid;

use catalog::{Accommodation, ActivityType, AdminAccount, ResearchCenter, SystemSetting};

use super::{SeedError, SeedStore};
use crate::fixtures;

/// Rows held by the store after a successful run.
///
/// On a re-run these are the pre-existing rows, not the fixtures.
#[derive(Debug, Clone)]
pub struct SeedResult {
    pub admin: AdminAccount,
    pub center: ResearchCenter,
    pub accommodations: Vec<Accommodation>,
    pub activity_types: Vec<ActivityType>,
    pub setting: SystemSetting,
}

/// Ensures the baseline catalog exists in a [`SeedStore`].
pub struct Seeder<S> {
    store: S,
    now: OffsetDateTime,
}

impl<S: SeedStore> Seeder<S> {
    /// Creates a seeder that stamps new rows with the current time.
    pub fn new(store: S) -> Self {
        Self {
            store,
            now: OffsetDateTime::now_utc(),
        }
    }

    /// Sets the creation timestamp written on first insert.
    pub fn with_timestamp(mut self, now: OffsetDateTime) -> Self {
        self.now = now;
        self
    }

    /// Seeds every record kind in dependency order.
    ///
    /// Stops at the first failure. Rows created before the failure stay in the
    /// store.
    pub async fn run(&self) -> Result<SeedResult, SeedError> {
        info!("Seeding Pro-Mata baseline data...");

        let admin = self.seed_admin().await?;
        let center = self.seed_research_center().await?;
        let accommodations = self.seed_accommodations(center.id).await?;
        let activity_types = self.seed_activity_types().await?;
        let setting = self.seed_settings().await?;

        info!("Seed completed!");
        Ok(SeedResult {
            admin,
            center,
            accommodations,
            activity_types,
            setting,
        })
    }

    /// Runs the seed, then closes the store whatever the outcome.
    ///
    /// A seeding error wins over a close error.
    pub async fn run_and_close(self) -> Result<SeedResult, SeedError> {
        let outcome = self.run().await;
        let closed = self.store.close().await;
        info!("Store connection released");

        match (outcome, closed) {
            (Ok(result), Ok(())) => Ok(result),
            (Ok(_), Err(e)) => Err(e),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(close_err)) => {
                warn!("Failed to close store after seed error: {close_err}");
                Err(e)
            }
        }
    }

    pub async fn seed_admin(&self) -> Result<AdminAccount, SeedError> {
        let admin = self
            .store
            .create_admin_if_absent(&fixtures::admin_account(self.now))
            .await?;

        info!("Admin account ready: {}", admin.email);
        Ok(admin)
    }

    pub async fn seed_research_center(&self) -> Result<ResearchCenter, SeedError> {
        let center = self
            .store
            .create_center_if_absent(&fixtures::research_center(self.now))
            .await?;

        info!("Research center ready: {}", center.name);
        Ok(center)
    }

    /// Seeds the rooms of `center_id` as one concurrent batch.
    pub async fn seed_accommodations(
        &self,
        center_id: Uuid,
    ) -> Result<Vec<Accommodation>, SeedError> {
        let [single, double, dorm] = fixtures::accommodations(center_id);

        let (single, double, dorm) = tokio::try_join!(
            self.store.create_accommodation_if_absent(&single),
            self.store.create_accommodation_if_absent(&double),
            self.store.create_accommodation_if_absent(&dorm),
        )?;

        let accommodations = vec![single, double, dorm];
        info!("Accommodations ready: {}", accommodations.len());
        Ok(accommodations)
    }

    /// Seeds the activity catalog as one concurrent batch.
    pub async fn seed_activity_types(&self) -> Result<Vec<ActivityType>, SeedError> {
        let [trail, birds, research] = fixtures::activity_types();

        let (trail, birds, research) = tokio::try_join!(
            self.store.create_activity_type_if_absent(&trail),
            self.store.create_activity_type_if_absent(&birds),
            self.store.create_activity_type_if_absent(&research),
        )?;

        let activity_types = vec![trail, birds, research];
        info!("Activity types ready: {}", activity_types.len());
        Ok(activity_types)
    }

    pub async fn seed_settings(&self) -> Result<SystemSetting, SeedError> {
        let setting = self
            .store
            .create_setting_if_absent(&fixtures::system_setting())
            .await?;

        info!("System setting ready: {}", setting.key);
        Ok(setting)
    }
}
