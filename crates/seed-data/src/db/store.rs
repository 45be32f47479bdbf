//! The persistence seam the seeder writes through.

use async_trait::async_trait;
use catalog::{Accommodation, ActivityType, AdminAccount, ResearchCenter, SystemSetting};

use super::SeedError;

/// Create-if-absent access to the catalog tables.
///
/// Every `create_*_if_absent` inserts the given record only when no row holds
/// its natural key yet, and returns whatever row holds the key afterwards. An
/// existing row is returned as stored; nothing is ever updated. Callers must
/// use the returned record's `id`, not the one they passed in.
#[async_trait]
pub trait SeedStore: Send + Sync {
    /// Keyed by `email`.
    async fn create_admin_if_absent(&self, admin: &AdminAccount)
    -> Result<AdminAccount, SeedError>;

    /// Keyed by `slug`.
    async fn create_center_if_absent(
        &self,
        center: &ResearchCenter,
    ) -> Result<ResearchCenter, SeedError>;

    /// Keyed by `identifier`. `center_id` must name an existing center.
    async fn create_accommodation_if_absent(
        &self,
        accommodation: &Accommodation,
    ) -> Result<Accommodation, SeedError>;

    /// Keyed by `slug`.
    async fn create_activity_type_if_absent(
        &self,
        activity_type: &ActivityType,
    ) -> Result<ActivityType, SeedError>;

    /// Keyed by `key`.
    async fn create_setting_if_absent(
        &self,
        setting: &SystemSetting,
    ) -> Result<SystemSetting, SeedError>;

    /// Releases the underlying connection.
    async fn close(&self) -> Result<(), SeedError>;
}
