use sqlx::PgPool;
use tracing::info;

use siteatlas_common::{LocationKind, SiteAtlasError, ACTIVE_STATUS};

use crate::postgres::db_err;

/// Run idempotent schema setup: tables, indexes, built-in rows.
pub async fn migrate(pool: &PgPool) -> Result<(), SiteAtlasError> {
    info!("Running registry migrations...");

    let tables = [
        r#"
        CREATE TABLE IF NOT EXISTS statuses (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name TEXT NOT NULL UNIQUE
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS location_types (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name TEXT NOT NULL UNIQUE
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS locations (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name TEXT NOT NULL UNIQUE,
            status_id UUID NOT NULL REFERENCES statuses(id),
            location_type_id UUID REFERENCES location_types(id),
            parent_id UUID REFERENCES locations(id),
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
        "CREATE INDEX IF NOT EXISTS locations_parent_idx ON locations (parent_id)",
    ];

    for t in &tables {
        sqlx::query(t).execute(pool).await.map_err(db_err)?;
    }
    info!("Registry tables ready");

    // Operator-managed rows the importer refuses to create on its own.
    // Seeding them here keeps fresh databases usable.
    sqlx::query("INSERT INTO statuses (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
        .bind(ACTIVE_STATUS)
        .execute(pool)
        .await
        .map_err(db_err)?;

    for kind in &LocationKind::ALL {
        sqlx::query("INSERT INTO location_types (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
            .bind(kind.as_str())
            .execute(pool)
            .await
            .map_err(db_err)?;
    }
    info!("Built-in statuses and location types seeded");

    Ok(())
}
