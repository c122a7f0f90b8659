//! Pack

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::QueryData;

use super::{modpack_endpoint, version::VersionId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackSummary {
    pub id: PackId,
    pub name: String,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub art: Vec<Art>,
    /// Oldest first, as the catalog stores them.
    #[serde(default)]
    pub versions: Vec<VersionEntry>,
    #[serde(default)]
    pub installs: u64,
    #[serde(default)]
    pub plays: u64,
    #[serde(default)]
    pub updated: i64,
    #[serde(default)]
    pub released: i64,
}

impl PackSummary {
    /// Hero background of the pack page.
    pub fn splash(&self) -> Option<&Art> {
        self.art.iter().find(|art| art.kind == "splash")
    }

    pub fn versions_newest_first(&self) -> impl Iterator<Item = &VersionEntry> {
        self.versions.iter().rev()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PackId(pub u64);

impl Display for PackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for PackId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Art {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionEntry {
    pub id: VersionId,
    pub name: String,
    /// Unix timestamp in seconds.
    #[serde(default)]
    pub updated: i64,
    #[serde(default, rename = "type")]
    pub kind: String,
}

pub struct PackData {
    id: PackId,
}

impl PackData {
    pub fn new(id: impl Into<PackId>) -> Self {
        Self { id: id.into() }
    }
}

impl QueryData<PackSummary> for PackData {
    fn builder(&self, base_url: &str) -> crate::Builder {
        modpack_endpoint(base_url).segment(self.id)
    }
}
