use std::{sync::Arc, time::Duration};

use mrport_catalog::{CatalogClient, PackId, PackSummary};
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::{cache::ListingCache, error::Error, PLACEHOLDER_PACK_NAMES};

/// Builds the catalog out of individual pack lookups.
///
/// Every id is looked up concurrently, cache first. Ids whose lookup fails
/// are left out of the result instead of failing the whole collection.
pub struct Aggregator<C, S> {
    catalog: Arc<C>,
    cache: Arc<S>,
    fetch_timeout: Option<Duration>,
}

impl<C, S> Aggregator<C, S>
where
    C: CatalogClient + 'static,
    S: ListingCache + 'static,
{
    pub fn new(catalog: Arc<C>, cache: Arc<S>) -> Self {
        Self {
            catalog,
            cache,
            fetch_timeout: None,
        }
    }

    #[must_use]
    pub fn with_fetch_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Summaries for `ids` in the same order, minus failures and loader placeholders.
    pub async fn collect(&self, ids: &[PackId]) -> Vec<PackSummary> {
        let mut set = JoinSet::new();

        for (index, &id) in ids.iter().enumerate() {
            let catalog = Arc::clone(&self.catalog);
            let cache = Arc::clone(&self.cache);
            let timeout = self.fetch_timeout;
            set.spawn(async move {
                let result = lookup(catalog.as_ref(), cache.as_ref(), id, timeout).await;
                (index, id, result)
            });
        }

        let mut packs = Vec::with_capacity(ids.len());
        while let Some(result) = set.join_next().await {
            match result {
                Ok((index, _, Ok(pack))) => packs.push((index, pack)),
                Ok((_, id, Err(error))) => warn!(%id, %error, "Leaving pack out of the catalog"),
                Err(error) => warn!(%error, "Pack lookup task failed"),
            }
        }

        packs.sort_by_key(|(index, _)| *index);

        let total = packs.len();
        let packs = packs
            .into_iter()
            .map(|(_, pack)| pack)
            .filter(|pack| !is_placeholder(pack))
            .collect::<Vec<_>>();

        debug!(
            requested = ids.len(),
            fetched = total,
            placeholders = total - packs.len(),
            "Collected catalog"
        );

        packs
    }
}

async fn lookup<C, S>(
    catalog: &C,
    cache: &S,
    id: PackId,
    timeout: Option<Duration>,
) -> Result<PackSummary, Error>
where
    C: CatalogClient + ?Sized,
    S: ListingCache + ?Sized,
{
    if let Some(pack) = cache.get(id).await {
        debug!(%id, "Using cached summary");
        return Ok(pack);
    }

    let fetch = catalog.fetch_pack(id);
    let fetched = match timeout {
        Some(after) => tokio::time::timeout(after, fetch)
            .await
            .map_err(|_| Error::FetchTimedOut { id, after })?,
        None => fetch.await,
    };
    let pack = fetched.map_err(Error::from_pack_fetch)?;

    if let Err(error) = cache.put(id, &pack).await {
        warn!(%id, %error, "Unable to cache pack summary");
    }

    Ok(pack)
}

/// Loader entries the catalog lists next to real packs.
pub fn is_placeholder(pack: &PackSummary) -> bool {
    PLACEHOLDER_PACK_NAMES.contains(&pack.name.as_str())
}
