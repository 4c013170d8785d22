// Capability contract over the location registry.
//
// The importer needs exactly three operations: two fail-fast lookups for
// operator-managed categories, and an atomic get-or-create for hierarchy
// nodes. Keeping the surface this small lets the import pipeline run its
// tests against MemoryRegistry: no network, no database, no Docker.

use async_trait::async_trait;

use siteatlas_common::SiteAtlasError;

use crate::model::{LocationNode, LocationType, NewLocation, Status};

#[async_trait]
pub trait LocationStore: Send + Sync {
    /// Fetch a location type by exact name. `NotFound` when absent.
    async fn get_location_type(&self, name: &str) -> Result<LocationType, SiteAtlasError>;

    /// Fetch a status by exact name. `NotFound` when absent.
    async fn get_status(&self, name: &str) -> Result<Status, SiteAtlasError>;

    /// Fetch the node named `new.name`, or insert it with the given
    /// defaults if absent. Atomic: concurrent runs never produce duplicate
    /// rows for one name. The flag reports whether this call created the
    /// node.
    async fn get_or_create_location(
        &self,
        new: NewLocation,
    ) -> Result<(LocationNode, bool), SiteAtlasError>;
}
