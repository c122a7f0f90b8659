use typed_builder::TypedBuilder;

use crate::{
    AllPacksData, CatalogError, PackData, PackId, PackSummary, Query, VersionData, VersionDetail,
    VersionId, DEFAULT_API_BASE,
};

/// Read side of the modpack catalog.
///
/// Calls are not retried and carry no timeout of their own.
#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    async fn fetch_all_ids(&self) -> Result<Vec<PackId>, CatalogError>;

    async fn fetch_pack(&self, id: PackId) -> Result<PackSummary, CatalogError>;

    async fn fetch_version(
        &self,
        pack: PackId,
        version: VersionId,
    ) -> Result<VersionDetail, CatalogError>;
}

const _: Option<Box<dyn CatalogClient>> = None;

pub fn default_user_agent() -> String {
    format!("modpacklauncher/@vmct mrport/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct HttpCatalog {
    #[builder(default = DEFAULT_API_BASE.to_owned(), setter(into))]
    base_url: String,
    #[builder(default = default_user_agent(), setter(into))]
    user_agent: String,
    #[builder(default)]
    client: reqwest::Client,
}

impl Default for HttpCatalog {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl HttpCatalog {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

#[async_trait::async_trait]
impl CatalogClient for HttpCatalog {
    async fn fetch_all_ids(&self) -> Result<Vec<PackId>, CatalogError> {
        Query::new(AllPacksData)
            .query(self)
            .await
            .map(|all| all.packs)
    }

    async fn fetch_pack(&self, id: PackId) -> Result<PackSummary, CatalogError> {
        Query::new(PackData::new(id)).query(self).await
    }

    async fn fetch_version(
        &self,
        pack: PackId,
        version: VersionId,
    ) -> Result<VersionDetail, CatalogError> {
        Query::new(VersionData::new(pack, version)).query(self).await
    }
}
