use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use siteatlas_common::SiteAtlasError;

use crate::model::{LocationNode, LocationType, NewLocation, Status};
use crate::store::LocationStore;

/// Postgres-backed location registry.
#[derive(Clone)]
pub struct PgRegistry {
    pool: PgPool,
}

impl PgRegistry {
    pub async fn connect(database_url: &str) -> Result<Self, SiteAtlasError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(db_err)?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl LocationStore for PgRegistry {
    async fn get_location_type(&self, name: &str) -> Result<LocationType, SiteAtlasError> {
        sqlx::query_as::<_, LocationType>("SELECT * FROM location_types WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?
            .ok_or_else(|| SiteAtlasError::NotFound {
                kind: "Location type",
                name: name.to_string(),
            })
    }

    async fn get_status(&self, name: &str) -> Result<Status, SiteAtlasError> {
        sqlx::query_as::<_, Status>("SELECT * FROM statuses WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?
            .ok_or_else(|| SiteAtlasError::NotFound {
                kind: "Status",
                name: name.to_string(),
            })
    }

    async fn get_or_create_location(
        &self,
        new: NewLocation,
    ) -> Result<(LocationNode, bool), SiteAtlasError> {
        // DO NOTHING yields no row when the name already exists, which is
        // what distinguishes created from fetched. The unique index on
        // name serializes concurrent inserts.
        let inserted = sqlx::query_as::<_, LocationNode>(
            r#"
            INSERT INTO locations (name, status_id, location_type_id, parent_id)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (name) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(&new.name)
        .bind(new.status_id)
        .bind(new.location_type_id)
        .bind(new.parent_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        if let Some(node) = inserted {
            return Ok((node, true));
        }

        let existing =
            sqlx::query_as::<_, LocationNode>("SELECT * FROM locations WHERE name = $1")
                .bind(&new.name)
                .fetch_one(&self.pool)
                .await
                .map_err(db_err)?;

        Ok((existing, false))
    }
}

pub(crate) fn db_err(e: sqlx::Error) -> SiteAtlasError {
    SiteAtlasError::Database(e.to_string())
}
