use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named category tag ("State", "City", "Data Center", "Branch").
///
/// Categories are operator-managed: the importer looks them up and fails
/// when a required one is absent, but never creates them.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct LocationType {
    pub id: Uuid,
    pub name: String,
}

/// An operational-state tag ("Active").
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Status {
    pub id: Uuid,
    pub name: String,
}

/// One entry in the State → City → Site hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct LocationNode {
    pub id: Uuid,
    pub name: String,
    pub status_id: Uuid,
    pub location_type_id: Option<Uuid>,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Defaults applied when a get-or-create call has to insert.
#[derive(Debug, Clone)]
pub struct NewLocation {
    pub name: String,
    pub status_id: Uuid,
    pub location_type_id: Option<Uuid>,
    pub parent_id: Option<Uuid>,
}
