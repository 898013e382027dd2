use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::warn;
use uuid::Uuid;

use coursedeck_common::{CourseDeckError, Site, Template};

use crate::kv::KvStore;
use crate::seed::seed_sites;

/// Storage key holding the full site collection as one JSON array.
pub const SITES_KEY: &str = "coursedeck.sites";

/// Repository for user-created sites. The whole collection is the unit of
/// persistence: every mutation re-serializes it under [`SITES_KEY`].
pub struct SiteStore {
    kv: Arc<dyn KvStore>,
    sites: Mutex<Vec<Site>>,
}

impl SiteStore {
    /// Load the collection from the key/value store, falling back to the
    /// seed collection if the key is absent or unparseable.
    pub fn load(kv: Arc<dyn KvStore>) -> Self {
        let sites = match kv.get(SITES_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<Site>>(&raw) {
                Ok(sites) => sites,
                Err(e) => {
                    warn!(error = %e, "Stored site collection unparseable, reseeding");
                    seed_sites()
                }
            },
            None => seed_sites(),
        };
        Self {
            kv,
            sites: Mutex::new(sites),
        }
    }

    /// Current collection, most-recently-created first.
    pub async fn list(&self) -> Vec<Site> {
        self.sites.lock().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> Option<Site> {
        self.sites.lock().await.iter().find(|s| s.id == id).cloned()
    }

    /// Create a site from a trimmed name and a template snapshot, prepend it
    /// to the collection, and persist. An empty name is a validation error
    /// and leaves the collection untouched.
    pub async fn create(&self, name: &str, template: &Template) -> Result<Site, CourseDeckError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CourseDeckError::Validation(
                "Site name must not be empty".to_string(),
            ));
        }

        let site = Site::new(name, template, Utc::now());
        let mut sites = self.sites.lock().await;
        sites.insert(0, site.clone());
        self.persist(&sites);
        Ok(site)
    }

    /// Remove the site with the given id. No-op if absent.
    pub async fn delete(&self, id: Uuid) {
        let mut sites = self.sites.lock().await;
        sites.retain(|s| s.id != id);
        self.persist(&sites);
    }

    /// Best-effort write of the full collection. Failures are logged and
    /// swallowed; the in-memory collection stays authoritative.
    fn persist(&self, sites: &[Site]) {
        let json = match serde_json::to_string(sites) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Failed to serialize site collection");
                return;
            }
        };
        if let Err(e) = self.kv.set(SITES_KEY, &json) {
            warn!(error = %e, "Failed to persist site collection");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKv;
    use coursedeck_common::SiteStatus;

    fn template() -> Template {
        Template {
            id: "t1".to_string(),
            name: "Test Template".to_string(),
            category: "Education".to_string(),
            thumbnail: "/tpl/thumb.jpg".to_string(),
            asset_root_path: "/tpl/".to_string(),
            entry_file: "index.html".to_string(),
            description: "A test template".to_string(),
        }
    }

    fn store() -> SiteStore {
        SiteStore::load(Arc::new(MemoryKv::new()))
    }

    #[tokio::test]
    async fn create_prepends_and_snapshots() {
        let store = store();
        let before = store.list().await.len();

        let site = store.create("My Site", &template()).await.unwrap();
        assert_eq!(site.template_id, "t1");
        assert_eq!(site.status, SiteStatus::Draft);

        let sites = store.list().await;
        assert_eq!(sites.len(), before + 1);
        assert_eq!(sites[0].id, site.id, "new site comes first");
    }

    #[tokio::test]
    async fn create_trims_name_and_derives_slug() {
        let store = store();
        let site = store.create("  My Site  ", &template()).await.unwrap();
        assert_eq!(site.name, "My Site");
        assert!(site.derived_url.starts_with("my-site"));
        assert!(!site.derived_url.contains(char::is_whitespace));
        assert!(site
            .derived_url
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '-' || c == '.'));
    }

    #[tokio::test]
    async fn create_empty_name_is_a_noop() {
        let store = store();
        let before = store.list().await;

        let err = store.create("   ", &template()).await.unwrap_err();
        assert!(matches!(err, CourseDeckError::Validation(_)));
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn delete_removes_by_id() {
        let store = store();
        let site = store.create("Doomed", &template()).await.unwrap();
        store.delete(site.id).await;
        assert!(store.list().await.iter().all(|s| s.id != site.id));
    }

    #[tokio::test]
    async fn delete_absent_id_leaves_collection_unchanged() {
        let store = store();
        store.create("Third", &template()).await.unwrap();
        let before = store.list().await;
        assert_eq!(before.len(), 3);

        store.delete(Uuid::new_v4()).await;
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn persistence_roundtrip() {
        let kv = Arc::new(MemoryKv::new());
        let store = SiteStore::load(kv.clone());
        store.create("Persisted", &template()).await.unwrap();
        let sites = store.list().await;

        let reloaded = SiteStore::load(kv);
        assert_eq!(reloaded.list().await, sites);
    }

    #[tokio::test]
    async fn repeated_save_load_is_idempotent() {
        let kv = Arc::new(MemoryKv::new());
        let store = SiteStore::load(kv.clone());
        store.create("Stable", &template()).await.unwrap();

        let first = SiteStore::load(kv.clone()).list().await;
        let second = SiteStore::load(kv).list().await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn corrupt_storage_reseeds() {
        let kv = Arc::new(MemoryKv::new());
        kv.set(SITES_KEY, "{not json").unwrap();

        let store = SiteStore::load(kv);
        let sites = store.list().await;
        assert_eq!(sites, crate::seed::seed_sites());
    }

    #[tokio::test]
    async fn missing_storage_seeds_defaults() {
        let store = store();
        assert_eq!(store.list().await, crate::seed::seed_sites());
    }
}
