//! Every pack id known to the catalog

use serde::{Deserialize, Serialize};

use crate::QueryData;

use super::{modpack_endpoint, pack::PackId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllPacks {
    pub packs: Vec<PackId>,
}

pub struct AllPacksData;

impl QueryData<AllPacks> for AllPacksData {
    fn builder(&self, base_url: &str) -> crate::Builder {
        modpack_endpoint(base_url).segment("all")
    }
}
