//! PostgreSQL implementation of [`SeedStore`].

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;

use catalog::{Accommodation, ActivityType, AdminAccount, ResearchCenter, SystemSetting};

use super::{SeedError, SeedStore};

/// Seeds through a shared connection pool.
///
/// Each create is one statement: the insert runs with `ON CONFLICT DO NOTHING`
/// and is unioned with a lookup by natural key. Both halves see the same
/// snapshot, so exactly one of them yields a row. Two seeders racing on the
/// same key can see neither, so do not run them concurrently.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SeedStore for PgStore {
    async fn create_admin_if_absent(
        &self,
        admin: &AdminAccount,
    ) -> Result<AdminAccount, SeedError> {
        let row = sqlx::query_as::<_, AdminAccount>(
            r#"
            WITH inserted AS (
                INSERT INTO admin_accounts (id, email, name, role, is_active, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (email) DO NOTHING
                RETURNING id, email, name, role, is_active, created_at
            )
            SELECT id, email, name, role, is_active, created_at FROM inserted
            UNION ALL
            SELECT id, email, name, role, is_active, created_at
            FROM admin_accounts WHERE email = $2
            LIMIT 1
            "#,
        )
        .bind(admin.id)
        .bind(&admin.email)
        .bind(&admin.name)
        .bind(admin.role.as_str())
        .bind(admin.is_active)
        .bind(admin.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn create_center_if_absent(
        &self,
        center: &ResearchCenter,
    ) -> Result<ResearchCenter, SeedError> {
        let row = sqlx::query_as::<_, ResearchCenter>(
            r#"
            WITH inserted AS (
                INSERT INTO research_centers (
                    id, slug, name, description, location, coordinates, is_active, created_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ON CONFLICT (slug) DO NOTHING
                RETURNING id, slug, name, description, location, coordinates, is_active, created_at
            )
            SELECT id, slug, name, description, location, coordinates, is_active, created_at
            FROM inserted
            UNION ALL
            SELECT id, slug, name, description, location, coordinates, is_active, created_at
            FROM research_centers WHERE slug = $2
            LIMIT 1
            "#,
        )
        .bind(center.id)
        .bind(&center.slug)
        .bind(&center.name)
        .bind(&center.description)
        .bind(&center.location)
        .bind(Json(&center.coordinates))
        .bind(center.is_active)
        .bind(center.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn create_accommodation_if_absent(
        &self,
        accommodation: &Accommodation,
    ) -> Result<Accommodation, SeedError> {
        let row = sqlx::query_as::<_, Accommodation>(
            r#"
            WITH inserted AS (
                INSERT INTO accommodations (
                    id, identifier, name, description, capacity, accommodation_type,
                    amenities, center_id, is_active, price_per_night
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                ON CONFLICT (identifier) DO NOTHING
                RETURNING id, identifier, name, description, capacity, accommodation_type,
                          amenities, center_id, is_active, price_per_night
            )
            SELECT id, identifier, name, description, capacity, accommodation_type,
                   amenities, center_id, is_active, price_per_night
            FROM inserted
            UNION ALL
            SELECT id, identifier, name, description, capacity, accommodation_type,
                   amenities, center_id, is_active, price_per_night
            FROM accommodations WHERE identifier = $2
            LIMIT 1
            "#,
        )
        .bind(accommodation.id)
        .bind(&accommodation.identifier)
        .bind(&accommodation.name)
        .bind(&accommodation.description)
        .bind(accommodation.capacity)
        .bind(accommodation.kind.as_str())
        .bind(&accommodation.amenities)
        .bind(accommodation.center_id)
        .bind(accommodation.is_active)
        .bind(accommodation.price_per_night)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn create_activity_type_if_absent(
        &self,
        activity_type: &ActivityType,
    ) -> Result<ActivityType, SeedError> {
        let row = sqlx::query_as::<_, ActivityType>(
            r#"
            WITH inserted AS (
                INSERT INTO activity_types (
                    id, slug, name, description, duration, difficulty,
                    max_participants, price, is_active
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                ON CONFLICT (slug) DO NOTHING
                RETURNING id, slug, name, description, duration, difficulty,
                          max_participants, price, is_active
            )
            SELECT id, slug, name, description, duration, difficulty,
                   max_participants, price, is_active
            FROM inserted
            UNION ALL
            SELECT id, slug, name, description, duration, difficulty,
                   max_participants, price, is_active
            FROM activity_types WHERE slug = $2
            LIMIT 1
            "#,
        )
        .bind(activity_type.id)
        .bind(&activity_type.slug)
        .bind(&activity_type.name)
        .bind(&activity_type.description)
        .bind(activity_type.duration)
        .bind(activity_type.difficulty.as_str())
        .bind(activity_type.max_participants)
        .bind(activity_type.price)
        .bind(activity_type.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn create_setting_if_absent(
        &self,
        setting: &SystemSetting,
    ) -> Result<SystemSetting, SeedError> {
        let row = sqlx::query_as::<_, SystemSetting>(
            r#"
            WITH inserted AS (
                INSERT INTO system_settings (id, key, value, description, is_active)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (key) DO NOTHING
                RETURNING id, key, value, description, is_active
            )
            SELECT id, key, value, description, is_active FROM inserted
            UNION ALL
            SELECT id, key, value, description, is_active
            FROM system_settings WHERE key = $2
            LIMIT 1
            "#,
        )
        .bind(setting.id)
        .bind(&setting.key)
        .bind(Json(&setting.value))
        .bind(&setting.description)
        .bind(setting.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn close(&self) -> Result<(), SeedError> {
        self.pool.close().await;
        Ok(())
    }
}
