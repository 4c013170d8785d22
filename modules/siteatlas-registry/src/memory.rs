// In-memory LocationStore for deterministic tests: no network, no
// database, no Docker.
//
// Stateful like the real registry: nodes accumulate across calls, repeat
// upserts fetch instead of create. Builder methods seed the category rows
// a test needs; the journal records every upsert in call order.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use siteatlas_common::{LocationKind, SiteAtlasError, ACTIVE_STATUS};

use crate::model::{LocationNode, LocationType, NewLocation, Status};
use crate::store::LocationStore;

/// One get-or-create call as the journal saw it.
#[derive(Debug, Clone)]
pub struct UpsertEntry {
    pub name: String,
    pub created: bool,
}

#[derive(Default)]
struct MemoryRegistryInner {
    statuses: HashMap<String, Status>,
    location_types: HashMap<String, LocationType>,
    locations: HashMap<String, LocationNode>,
    journal: Vec<UpsertEntry>,
}

pub struct MemoryRegistry {
    inner: Mutex<MemoryRegistryInner>,
}

impl MemoryRegistry {
    /// Empty registry: every category lookup fails `NotFound`.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MemoryRegistryInner::default()),
        }
    }

    /// Registry seeded with the Active status and all built-in kinds.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new().with_status(ACTIVE_STATUS);
        for kind in LocationKind::ALL {
            registry = registry.with_location_type(kind.as_str());
        }
        registry
    }

    pub fn with_status(self, name: &str) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.statuses.insert(
                name.to_string(),
                Status {
                    id: Uuid::new_v4(),
                    name: name.to_string(),
                },
            );
        }
        self
    }

    pub fn with_location_type(self, name: &str) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.location_types.insert(
                name.to_string(),
                LocationType {
                    id: Uuid::new_v4(),
                    name: name.to_string(),
                },
            );
        }
        self
    }

    /// Node by name, if present.
    pub fn location(&self, name: &str) -> Option<LocationNode> {
        self.inner.lock().unwrap().locations.get(name).cloned()
    }

    pub fn location_count(&self) -> usize {
        self.inner.lock().unwrap().locations.len()
    }

    /// Every get-or-create call so far, in call order.
    pub fn journal(&self) -> Vec<UpsertEntry> {
        self.inner.lock().unwrap().journal.clone()
    }

    /// Names of nodes this registry created, in creation order.
    pub fn created_names(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap()
            .journal
            .iter()
            .filter(|e| e.created)
            .map(|e| e.name.clone())
            .collect()
    }
}

impl Default for MemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocationStore for MemoryRegistry {
    async fn get_location_type(&self, name: &str) -> Result<LocationType, SiteAtlasError> {
        self.inner
            .lock()
            .unwrap()
            .location_types
            .get(name)
            .cloned()
            .ok_or_else(|| SiteAtlasError::NotFound {
                kind: "Location type",
                name: name.to_string(),
            })
    }

    async fn get_status(&self, name: &str) -> Result<Status, SiteAtlasError> {
        self.inner
            .lock()
            .unwrap()
            .statuses
            .get(name)
            .cloned()
            .ok_or_else(|| SiteAtlasError::NotFound {
                kind: "Status",
                name: name.to_string(),
            })
    }

    async fn get_or_create_location(
        &self,
        new: NewLocation,
    ) -> Result<(LocationNode, bool), SiteAtlasError> {
        let mut inner = self.inner.lock().unwrap();

        if let Some(existing) = inner.locations.get(&new.name).cloned() {
            inner.journal.push(UpsertEntry {
                name: new.name,
                created: false,
            });
            return Ok((existing, false));
        }

        let node = LocationNode {
            id: Uuid::new_v4(),
            name: new.name.clone(),
            status_id: new.status_id,
            location_type_id: new.location_type_id,
            parent_id: new.parent_id,
            created_at: Utc::now(),
        };
        inner.locations.insert(new.name.clone(), node.clone());
        inner.journal.push(UpsertEntry {
            name: new.name,
            created: true,
        });

        Ok((node, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upserts_create_then_fetch() {
        let registry = MemoryRegistry::with_defaults();
        let active = registry.get_status(ACTIVE_STATUS).await.unwrap();

        let new = NewLocation {
            name: "California".into(),
            status_id: active.id,
            location_type_id: None,
            parent_id: None,
        };
        let (first, created) = registry.get_or_create_location(new.clone()).await.unwrap();
        assert!(created, "first upsert should create");

        let (second, created) = registry.get_or_create_location(new).await.unwrap();
        assert!(!created, "second upsert should fetch");
        assert_eq!(first.id, second.id);

        let journal = registry.journal();
        assert_eq!(journal.len(), 2);
        assert!(journal[0].created);
        assert!(!journal[1].created);
        assert_eq!(registry.created_names(), ["California"]);
    }

    #[tokio::test]
    async fn empty_registry_reports_not_found() {
        let registry = MemoryRegistry::new();

        let err = registry.get_location_type("State").await.unwrap_err();
        assert!(matches!(
            err,
            SiteAtlasError::NotFound {
                kind: "Location type",
                ..
            }
        ));

        let err = registry.get_status("Active").await.unwrap_err();
        assert!(matches!(err, SiteAtlasError::NotFound { kind: "Status", .. }));
    }
}
