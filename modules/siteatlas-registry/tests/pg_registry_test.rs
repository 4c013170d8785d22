#![cfg(feature = "test-utils")]

//! Postgres integration tests for the registry.
//!
//! Requires Docker. Run with:
//!   cargo test -p siteatlas-registry --features test-utils --test pg_registry_test

use siteatlas_common::{LocationKind, SiteAtlasError, ACTIVE_STATUS};
use siteatlas_registry::migrate::migrate;
use siteatlas_registry::testutil::postgres_container;
use siteatlas_registry::{LocationStore, NewLocation, PgRegistry};

#[tokio::test]
async fn migrate_seeds_builtin_categories() {
    let (_container, pool) = postgres_container().await;
    migrate(&pool).await.expect("migrate failed");
    // Running twice must be harmless.
    migrate(&pool).await.expect("second migrate failed");

    let registry = PgRegistry::from_pool(pool);

    let status = registry
        .get_status(ACTIVE_STATUS)
        .await
        .expect("Active status missing");
    assert_eq!(status.name, "Active");

    for kind in LocationKind::ALL {
        let location_type = registry
            .get_location_type(kind.as_str())
            .await
            .expect("built-in location type missing");
        assert_eq!(location_type.name, kind.as_str());
    }
}

#[tokio::test]
async fn get_or_create_reports_created_then_existing() {
    let (_container, pool) = postgres_container().await;
    migrate(&pool).await.expect("migrate failed");
    let registry = PgRegistry::from_pool(pool);

    let state_type = registry.get_location_type("State").await.unwrap();
    let active = registry.get_status("Active").await.unwrap();

    let new = NewLocation {
        name: "California".into(),
        status_id: active.id,
        location_type_id: Some(state_type.id),
        parent_id: None,
    };

    let (first, created) = registry
        .get_or_create_location(new.clone())
        .await
        .expect("upsert failed");
    assert!(created, "first upsert should create");
    assert_eq!(first.name, "California");
    assert_eq!(first.location_type_id, Some(state_type.id));

    let (second, created) = registry
        .get_or_create_location(new)
        .await
        .expect("second upsert failed");
    assert!(!created, "second upsert should fetch");
    assert_eq!(first.id, second.id);
}

#[tokio::test]
async fn parent_links_round_trip() {
    let (_container, pool) = postgres_container().await;
    migrate(&pool).await.expect("migrate failed");
    let registry = PgRegistry::from_pool(pool);

    let state_type = registry.get_location_type("State").await.unwrap();
    let city_type = registry.get_location_type("City").await.unwrap();
    let active = registry.get_status("Active").await.unwrap();

    let (state, _) = registry
        .get_or_create_location(NewLocation {
            name: "Minnesota".into(),
            status_id: active.id,
            location_type_id: Some(state_type.id),
            parent_id: None,
        })
        .await
        .expect("state upsert failed");

    let (city, created) = registry
        .get_or_create_location(NewLocation {
            name: "St. Paul".into(),
            status_id: active.id,
            location_type_id: Some(city_type.id),
            parent_id: Some(state.id),
        })
        .await
        .expect("city upsert failed");

    assert!(created);
    assert_eq!(city.parent_id, Some(state.id));
    assert!(state.parent_id.is_none(), "states have no parent");
}

#[tokio::test]
async fn missing_category_is_not_found() {
    let (_container, pool) = postgres_container().await;
    migrate(&pool).await.expect("migrate failed");
    let registry = PgRegistry::from_pool(pool);

    let err = registry.get_location_type("Warehouse").await.unwrap_err();
    assert!(matches!(
        err,
        SiteAtlasError::NotFound {
            kind: "Location type",
            ..
        }
    ));
}
