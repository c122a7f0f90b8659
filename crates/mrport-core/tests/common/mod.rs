#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use mrport_core::catalog::{
    CatalogClient, CatalogError, PackId, PackSummary, VersionDetail, VersionId,
};

/// In-memory catalog with switchable failures.
#[derive(Default)]
pub struct FakeCatalog {
    pub packs: HashMap<PackId, PackSummary>,
    pub versions: HashMap<(PackId, VersionId), VersionDetail>,
    pub failing: HashSet<PackId>,
    pub slow: HashSet<PackId>,
    pub pack_fetches: AtomicUsize,
}

impl FakeCatalog {
    pub fn with_packs(packs: impl IntoIterator<Item = PackSummary>) -> Self {
        Self {
            packs: packs.into_iter().map(|pack| (pack.id, pack)).collect(),
            ..Self::default()
        }
    }

    pub fn ids(&self) -> Vec<PackId> {
        let mut ids = self
            .packs
            .keys()
            .copied()
            .chain(self.failing.iter().copied())
            .collect::<Vec<_>>();
        ids.sort();
        ids.dedup();
        ids
    }

    pub fn fetches(&self) -> usize {
        self.pack_fetches.load(Ordering::SeqCst)
    }
}

fn unavailable(what: impl ToString) -> CatalogError {
    CatalogError::Unavailable {
        url: what.to_string(),
        message: "connection refused".into(),
    }
}

#[async_trait::async_trait]
impl CatalogClient for FakeCatalog {
    async fn fetch_all_ids(&self) -> Result<Vec<PackId>, CatalogError> {
        Ok(self.ids())
    }

    async fn fetch_pack(&self, id: PackId) -> Result<PackSummary, CatalogError> {
        self.pack_fetches.fetch_add(1, Ordering::SeqCst);

        if self.slow.contains(&id) {
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
        if self.failing.contains(&id) {
            return Err(unavailable(id));
        }
        self.packs.get(&id).cloned().ok_or_else(|| unavailable(id))
    }

    async fn fetch_version(
        &self,
        pack: PackId,
        version: VersionId,
    ) -> Result<VersionDetail, CatalogError> {
        self.versions
            .get(&(pack, version))
            .cloned()
            .ok_or_else(|| unavailable(format!("{pack}/{version}")))
    }
}

pub fn pack(id: u64, name: &str) -> PackSummary {
    PackSummary {
        id: PackId(id),
        name: name.to_owned(),
        synopsis: format!("{name} synopsis"),
        art: Vec::new(),
        versions: Vec::new(),
        installs: id,
        plays: 0,
        updated: 0,
        released: 0,
    }
}
