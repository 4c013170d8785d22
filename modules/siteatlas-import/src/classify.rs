use tracing::warn;

use siteatlas_common::{LocationKind, SiteAtlasError};
use siteatlas_registry::{LocationStore, LocationType};

/// Infer a site's category from its naming convention.
///
/// `"-DC"` marks a data center and `"-BR"` a branch office. Anything else
/// is unclassified.
pub fn classify_site_name(site_name: &str) -> Option<LocationKind> {
    if site_name.ends_with("-DC") {
        Some(LocationKind::DataCenter)
    } else if site_name.ends_with("-BR") {
        Some(LocationKind::Branch)
    } else {
        None
    }
}

/// Resolve the registry location type for a site by naming convention.
///
/// Two outcomes are non-fatal and yield `None` after a warning: a name no
/// convention matches, and a matched type missing from the registry. The
/// created node then carries no classification. Registry I/O failures
/// still propagate.
pub async fn site_location_type(
    store: &dyn LocationStore,
    site_name: &str,
) -> Result<Option<LocationType>, SiteAtlasError> {
    let kind = match classify_site_name(site_name) {
        Some(kind) => kind,
        None => {
            warn!(site = site_name, "No location type convention matches site name");
            return Ok(None);
        }
    };

    match store.get_location_type(kind.as_str()).await {
        Ok(location_type) => Ok(Some(location_type)),
        Err(SiteAtlasError::NotFound { .. }) => {
            warn!(
                site = site_name,
                location_type = kind.as_str(),
                "Location type missing from registry"
            );
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use siteatlas_registry::MemoryRegistry;

    use super::*;

    #[test]
    fn dc_suffix_is_data_center() {
        assert_eq!(classify_site_name("LAX-DC"), Some(LocationKind::DataCenter));
    }

    #[test]
    fn br_suffix_is_branch() {
        assert_eq!(classify_site_name("LAX2-BR"), Some(LocationKind::Branch));
    }

    #[test]
    fn other_suffixes_are_unclassified() {
        assert_eq!(classify_site_name("DEN-WH"), None);
        assert_eq!(classify_site_name("plain"), None);
        assert_eq!(classify_site_name(""), None);
    }

    #[tokio::test]
    async fn seeded_registry_resolves_the_type() {
        let store = MemoryRegistry::with_defaults();
        let resolved = site_location_type(&store, "LAX-DC").await.unwrap();
        assert_eq!(resolved.unwrap().name, "Data Center");
    }

    #[tokio::test]
    async fn missing_registry_type_is_absorbed() {
        let store = MemoryRegistry::new();
        let resolved = site_location_type(&store, "LAX-DC").await.unwrap();
        assert!(resolved.is_none(), "missing type downgrades to unclassified");
    }

    #[tokio::test]
    async fn unmatched_name_skips_the_lookup() {
        // An empty registry would fail the lookup; an unmatched name must
        // never get that far.
        let store = MemoryRegistry::new();
        let resolved = site_location_type(&store, "DEN-WH").await.unwrap();
        assert!(resolved.is_none());
    }
}
