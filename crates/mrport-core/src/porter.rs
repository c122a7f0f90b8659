use std::{sync::Arc, time::Duration};

use mrport_catalog::{parse_json, CatalogClient, PackId, PackSummary, VersionDetail, VersionId};
use tracing::info;

use crate::{
    aggregator::Aggregator,
    cache::ListingCache,
    convert::convert,
    error::Error,
    listing::{CatalogQuery, PackDetails},
    packager::{package, PackArchive},
};

/// Entry points used by the frontends: browse the catalog, convert a version.
pub struct Porter<C, S> {
    catalog: Arc<C>,
    aggregator: Aggregator<C, S>,
}

impl<C, S> Porter<C, S>
where
    C: CatalogClient + 'static,
    S: ListingCache + 'static,
{
    pub fn new(catalog: Arc<C>, cache: Arc<S>) -> Self {
        Self {
            aggregator: Aggregator::new(Arc::clone(&catalog), cache),
            catalog,
        }
    }

    #[must_use]
    pub fn with_fetch_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.aggregator = self.aggregator.with_fetch_timeout(timeout);
        self
    }

    /// Every installable pack in the catalog, sorted and filtered by `query`.
    pub async fn list_catalog(&self, query: &CatalogQuery) -> Result<Vec<PackSummary>, Error> {
        let ids = self
            .catalog
            .fetch_all_ids()
            .await
            .map_err(Error::from_listing_fetch)?;
        info!("Catalog lists {} packs", ids.len());

        let packs = self.aggregator.collect(&ids).await;

        Ok(query.apply(packs))
    }

    /// Always fetched fresh, the cache only serves the listing.
    pub async fn pack_details(&self, pack: PackId) -> Result<PackDetails, Error> {
        let summary = self
            .catalog
            .fetch_pack(pack)
            .await
            .map_err(Error::from_pack_fetch)?;
        Ok(PackDetails::from(&summary))
    }

    /// Converts one version of a pack into a `.mrpack` archive.
    pub async fn select_version(
        &self,
        pack: PackId,
        version: VersionId,
    ) -> Result<PackArchive, Error> {
        let summary = self
            .catalog
            .fetch_pack(pack)
            .await
            .map_err(Error::from_pack_fetch)?;
        let detail = self
            .catalog
            .fetch_version(pack, version)
            .await
            .map_err(Error::from_version_fetch)?;

        info!(pack = %summary.name, version = %detail.name, "Converting");

        package(&convert(&summary, &detail))
    }
}

/// Same conversion as [`Porter::select_version`], from JSON documents saved earlier.
pub fn convert_local(pack_json: &str, version_json: &str) -> Result<PackArchive, Error> {
    let summary: PackSummary = parse_json("pack", pack_json).map_err(Error::from_pack_fetch)?;
    let detail: VersionDetail =
        parse_json("version", version_json).map_err(Error::from_version_fetch)?;

    package(&convert(&summary, &detail))
}
