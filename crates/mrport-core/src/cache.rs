use std::{collections::HashMap, path::PathBuf};

use mrport_catalog::{PackId, PackSummary};
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::fs::{read_json, write_json_atomic};

/// Pack summaries fetched earlier, keyed by pack id.
///
/// Entries are never evicted or refreshed: once a summary is stored it is
/// treated as authoritative. Writes for different ids are independent; two
/// writes for the same id are allowed to race and the last one wins.
#[async_trait::async_trait]
pub trait ListingCache: Send + Sync {
    async fn get(&self, id: PackId) -> Option<PackSummary>;

    async fn put(&self, id: PackId, summary: &PackSummary) -> anyhow::Result<()>;
}

const _: Option<Box<dyn ListingCache>> = None;

#[derive(Default)]
pub struct MemoryCache {
    packs: RwLock<HashMap<PackId, PackSummary>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.packs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.read().is_empty()
    }
}

#[async_trait::async_trait]
impl ListingCache for MemoryCache {
    async fn get(&self, id: PackId) -> Option<PackSummary> {
        self.packs.read().get(&id).cloned()
    }

    async fn put(&self, id: PackId, summary: &PackSummary) -> anyhow::Result<()> {
        self.packs.write().insert(id, summary.clone());
        Ok(())
    }
}

/// Persistent cache keeping one JSON file per pack under a directory.
#[derive(Debug, Clone)]
pub struct DirCache {
    dir: PathBuf,
}

impl DirCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn entry_path(&self, id: PackId) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

#[async_trait::async_trait]
impl ListingCache for DirCache {
    async fn get(&self, id: PackId) -> Option<PackSummary> {
        let path = self.entry_path(id);
        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return None;
        }

        read_json(&path)
            .await
            .inspect(|_| debug!(%id, "Cache hit"))
            .inspect_err(|error| warn!(%id, %error, "Ignoring unreadable cache entry"))
            .ok()
    }

    async fn put(&self, id: PackId, summary: &PackSummary) -> anyhow::Result<()> {
        write_json_atomic(summary, self.entry_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn summary(id: u64, name: &str) -> PackSummary {
        PackSummary {
            id: PackId(id),
            name: name.to_owned(),
            synopsis: String::new(),
            art: Vec::new(),
            versions: Vec::new(),
            installs: 0,
            plays: 0,
            updated: 0,
            released: 0,
        }
    }

    #[tokio::test]
    async fn memory_cache_test() {
        let cache = MemoryCache::new();
        assert!(cache.get(PackId(1)).await.is_none());

        cache.put(PackId(1), &summary(1, "One")).await.unwrap();
        cache.put(PackId(1), &summary(1, "One again")).await.unwrap();

        assert_eq!(1, cache.len());
        assert_eq!("One again", cache.get(PackId(1)).await.unwrap().name);
    }

    #[tokio::test]
    async fn dir_cache_survives_new_instance_test() {
        let dir = tempfile::tempdir().unwrap();

        DirCache::new(dir.path())
            .put(PackId(104), &summary(104, "FTB Academy"))
            .await
            .unwrap();

        let reopened = DirCache::new(dir.path());
        assert_eq!(Some(summary(104, "FTB Academy")), reopened.get(PackId(104)).await);
        assert_eq!(None, reopened.get(PackId(105)).await);
    }

    #[tokio::test]
    async fn dir_cache_concurrent_puts_test() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Arc::new(DirCache::new(dir.path()));

        let mut set = tokio::task::JoinSet::new();
        for id in 0..16 {
            let cache = Arc::clone(&cache);
            set.spawn(async move { cache.put(PackId(id % 4), &summary(id % 4, "Same")).await });
        }
        while let Some(result) = set.join_next().await {
            result.unwrap().unwrap();
        }

        for id in 0..4 {
            assert_eq!(Some(summary(id, "Same")), cache.get(PackId(id)).await);
        }
        let leftovers = std::fs::read_dir(dir.path())
            .unwrap()
            .filter(|entry| entry.as_ref().unwrap().file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(0, leftovers);
    }

    #[tokio::test]
    async fn dir_cache_ignores_corrupt_entry_test() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("3.json"), "{ not json").unwrap();

        assert!(DirCache::new(dir.path()).get(PackId(3)).await.is_none());
    }
}
