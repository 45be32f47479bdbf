//! In-process [`SeedStore`] for exercising the seeder without a database.

use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use catalog::{Accommodation, ActivityType, AdminAccount, ResearchCenter, SystemSetting};

use super::{SeedError, SeedStore};

#[derive(Debug, Default)]
struct Tables {
    admins: BTreeMap<String, AdminAccount>,
    centers: BTreeMap<String, ResearchCenter>,
    accommodations: BTreeMap<String, Accommodation>,
    activity_types: BTreeMap<String, ActivityType>,
    settings: BTreeMap<String, SystemSetting>,
    failing_keys: HashSet<String>,
    attempted: Vec<String>,
    close_calls: usize,
    fail_close: bool,
}

/// Tables keyed by natural key, shared between clones.
///
/// Keys registered with [`MemoryStore::fail_on`] make the matching create
/// return [`SeedError::Rejected`]. Creates after [`SeedStore::close`] are
/// rejected too. [`MemoryStore::fail_on_close`] makes `close` report an error
/// after counting the call.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every create for `key` fail from now on.
    pub fn fail_on(&self, key: impl Into<String>) {
        self.lock().failing_keys.insert(key.into());
    }

    /// Makes every `close` call fail from now on.
    pub fn fail_on_close(&self) {
        self.lock().fail_close = true;
    }

    /// Natural keys passed to create calls, in call order.
    pub fn attempted(&self) -> Vec<String> {
        self.lock().attempted.clone()
    }

    pub fn close_calls(&self) -> usize {
        self.lock().close_calls
    }

    pub fn admins(&self) -> Vec<AdminAccount> {
        self.lock().admins.values().cloned().collect()
    }

    pub fn centers(&self) -> Vec<ResearchCenter> {
        self.lock().centers.values().cloned().collect()
    }

    pub fn accommodations(&self) -> Vec<Accommodation> {
        self.lock().accommodations.values().cloned().collect()
    }

    pub fn activity_types(&self) -> Vec<ActivityType> {
        self.lock().activity_types.values().cloned().collect()
    }

    pub fn settings(&self) -> Vec<SystemSetting> {
        self.lock().settings.values().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Tables {
    /// Records the attempt and applies injected failures.
    fn admit(&mut self, entity: &'static str, key: &str) -> Result<(), SeedError> {
        self.attempted.push(key.to_string());

        let reason = if self.close_calls > 0 {
            "store is closed"
        } else if self.failing_keys.contains(key) {
            "injected failure"
        } else {
            return Ok(());
        };

        Err(SeedError::Rejected {
            entity,
            key: key.to_string(),
            reason: reason.to_string(),
        })
    }
}

fn get_or_insert<T: Clone>(table: &mut BTreeMap<String, T>, key: &str, record: &T) -> T {
    table
        .entry(key.to_string())
        .or_insert_with(|| record.clone())
        .clone()
}

#[async_trait]
impl SeedStore for MemoryStore {
    async fn create_admin_if_absent(
        &self,
        admin: &AdminAccount,
    ) -> Result<AdminAccount, SeedError> {
        let mut tables = self.lock();
        tables.admit("admin account", &admin.email)?;
        Ok(get_or_insert(&mut tables.admins, &admin.email, admin))
    }

    async fn create_center_if_absent(
        &self,
        center: &ResearchCenter,
    ) -> Result<ResearchCenter, SeedError> {
        let mut tables = self.lock();
        tables.admit("research center", &center.slug)?;
        Ok(get_or_insert(&mut tables.centers, &center.slug, center))
    }

    async fn create_accommodation_if_absent(
        &self,
        accommodation: &Accommodation,
    ) -> Result<Accommodation, SeedError> {
        let mut tables = self.lock();
        tables.admit("accommodation", &accommodation.identifier)?;

        if !tables
            .centers
            .values()
            .any(|c| c.id == accommodation.center_id)
        {
            return Err(SeedError::MissingCenter(accommodation.center_id));
        }

        Ok(get_or_insert(
            &mut tables.accommodations,
            &accommodation.identifier,
            accommodation,
        ))
    }

    async fn create_activity_type_if_absent(
        &self,
        activity_type: &ActivityType,
    ) -> Result<ActivityType, SeedError> {
        let mut tables = self.lock();
        tables.admit("activity type", &activity_type.slug)?;
        Ok(get_or_insert(
            &mut tables.activity_types,
            &activity_type.slug,
            activity_type,
        ))
    }

    async fn create_setting_if_absent(
        &self,
        setting: &SystemSetting,
    ) -> Result<SystemSetting, SeedError> {
        let mut tables = self.lock();
        tables.admit("system setting", &setting.key)?;
        Ok(get_or_insert(&mut tables.settings, &setting.key, setting))
    }

    async fn close(&self) -> Result<(), SeedError> {
        let mut tables = self.lock();
        tables.close_calls += 1;

        if tables.fail_close {
            return Err(SeedError::Rejected {
                entity: "store",
                key: "close".to_string(),
                reason: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Role;
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn admin(name: &str) -> AdminAccount {
        AdminAccount::new(
            "admin@example.com".to_string(),
            name.to_string(),
            OffsetDateTime::now_utc(),
        )
    }

    #[tokio::test]
    async fn test_existing_row_is_returned_unchanged() {
        let store = MemoryStore::new();

        let first = store.create_admin_if_absent(&admin("First")).await.unwrap();
        let second = store.create_admin_if_absent(&admin("Second")).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(second.name, "First");
        assert_eq!(second.role, Role::Admin);
        assert_eq!(store.admins().len(), 1);
    }

    #[tokio::test]
    async fn test_injected_failure_rejects_only_that_key() {
        let store = MemoryStore::new();
        store.fail_on("admin@example.com");

        let err = store.create_admin_if_absent(&admin("A")).await.unwrap_err();
        assert!(matches!(err, SeedError::Rejected { entity: "admin account", .. }));
        assert!(store.admins().is_empty());
        assert_eq!(store.attempted(), vec!["admin@example.com".to_string()]);
    }

    #[tokio::test]
    async fn test_accommodation_needs_existing_center() {
        let store = MemoryStore::new();
        let orphan = Accommodation {
            id: Uuid::new_v4(),
            identifier: "QUARTO-999".to_string(),
            name: "Orphan".to_string(),
            description: String::new(),
            capacity: 1,
            kind: catalog::AccommodationKind::Individual,
            amenities: Vec::new(),
            center_id: Uuid::new_v4(),
            is_active: true,
            price_per_night: 10.0,
        };

        let err = store
            .create_accommodation_if_absent(&orphan)
            .await
            .unwrap_err();
        assert!(matches!(err, SeedError::MissingCenter(id) if id == orphan.center_id));
    }

    #[tokio::test]
    async fn test_creates_after_close_are_rejected() {
        let store = MemoryStore::new();
        store.close().await.unwrap();

        assert!(store.create_admin_if_absent(&admin("A")).await.is_err());
        assert_eq!(store.close_calls(), 1);
    }

    #[tokio::test]
    async fn test_failing_close_still_counts() {
        let store = MemoryStore::new();
        store.fail_on_close();

        assert!(store.close().await.is_err());
        assert_eq!(store.close_calls(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_tables() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store.create_admin_if_absent(&admin("A")).await.unwrap();
        assert_eq!(handle.admins().len(), 1);
    }
}
