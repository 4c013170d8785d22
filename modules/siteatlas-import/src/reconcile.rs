// Hierarchy reconciliation: one pass over parsed records, upserting
// State → City → Site with parent links.
//
// Category rows (the "State" and "City" types, the Active status) are
// resolved once up front and fail the run when absent. Each get-or-create
// is its own atomic unit; a failure mid-run leaves earlier records
// committed.

use std::sync::Arc;

use tracing::info;

use siteatlas_common::{LocationKind, SiteAtlasError, ACTIVE_STATUS};
use siteatlas_registry::{LocationStore, LocationType, NewLocation, Status};

use crate::classify::site_location_type;
use crate::records::LocationRecord;
use crate::states::resolve_state;
use crate::stats::ImportStats;

pub struct Reconciler {
    store: Arc<dyn LocationStore>,
    debug: bool,
}

impl Reconciler {
    pub fn new(store: Arc<dyn LocationStore>, debug: bool) -> Self {
        Self { store, debug }
    }

    /// Reconcile records against the registry in file order.
    pub async fn reconcile(
        &self,
        records: &[LocationRecord],
    ) -> Result<ImportStats, SiteAtlasError> {
        let state_type = self
            .store
            .get_location_type(LocationKind::State.as_str())
            .await?;
        let city_type = self
            .store
            .get_location_type(LocationKind::City.as_str())
            .await?;
        let active = self.store.get_status(ACTIVE_STATUS).await?;

        let mut stats = ImportStats::default();
        for record in records {
            self.reconcile_record(record, &state_type, &city_type, &active, &mut stats)
                .await?;
            stats.records_processed += 1;
        }

        Ok(stats)
    }

    async fn reconcile_record(
        &self,
        record: &LocationRecord,
        state_type: &LocationType,
        city_type: &LocationType,
        active: &Status,
        stats: &mut ImportStats,
    ) -> Result<(), SiteAtlasError> {
        // ── State ──────────────────────────────────────────────────────
        let state_name = resolve_state(record.require("state")?)?;
        let (state_node, created) = self
            .store
            .get_or_create_location(NewLocation {
                name: state_name,
                status_id: active.id,
                location_type_id: Some(state_type.id),
                parent_id: None,
            })
            .await?;
        if created {
            stats.states_created += 1;
            if self.debug {
                info!(state = %state_node.name, "Created state");
            }
        }

        // ── City ───────────────────────────────────────────────────────
        let city_name = record.require("city")?;
        let (city_node, created) = self
            .store
            .get_or_create_location(NewLocation {
                name: city_name.to_string(),
                status_id: active.id,
                location_type_id: Some(city_type.id),
                parent_id: Some(state_node.id),
            })
            .await?;
        if created {
            stats.cities_created += 1;
            if self.debug {
                info!(city = %city_node.name, "Created city");
            }
        }

        // ── Site ───────────────────────────────────────────────────────
        let site_name = record.require("name")?;
        let site_type = site_location_type(self.store.as_ref(), site_name).await?;
        if site_type.is_none() {
            stats.sites_unclassified += 1;
        }
        let (site_node, created) = self
            .store
            .get_or_create_location(NewLocation {
                name: site_name.to_string(),
                status_id: active.id,
                location_type_id: site_type.map(|t| t.id),
                parent_id: Some(city_node.id),
            })
            .await?;
        if created {
            stats.sites_created += 1;
            if self.debug {
                info!(site = %site_node.name, "Created site");
            }
        } else {
            stats.sites_existing += 1;
            if self.debug {
                info!(site = %site_node.name, "Site already exists");
            }
        }

        Ok(())
    }
}
