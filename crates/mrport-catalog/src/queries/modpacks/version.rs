//! Version

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::QueryData;

use super::{modpack_endpoint, pack::PackId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionDetail {
    pub id: VersionId,
    pub name: String,
    pub targets: Vec<Target>,
    pub files: Vec<SourceFile>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct VersionId(pub u64);

impl Display for VersionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for VersionId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Platform or loader the version runs on, e.g. `minecraft 1.20.1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
    pub version: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Directory inside the instance, with a trailing slash.
    pub path: String,
    pub name: String,
    pub sha1: String,
    pub size: u64,
    /// The catalog sends an empty string for files hosted on the CurseForge CDN.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "curseforge")]
    pub source_ref: Option<CurseForgeRef>,
    #[serde(default, rename = "serveronly")]
    pub server_only: bool,
    #[serde(default, rename = "clientonly")]
    pub client_only: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurseForgeRef {
    #[serde(default)]
    pub project: u64,
    pub file: u64,
}

pub struct VersionData {
    pack: PackId,
    version: VersionId,
}

impl VersionData {
    pub fn new(pack: impl Into<PackId>, version: impl Into<VersionId>) -> Self {
        Self {
            pack: pack.into(),
            version: version.into(),
        }
    }
}

impl QueryData<VersionDetail> for VersionData {
    fn builder(&self, base_url: &str) -> crate::Builder {
        modpack_endpoint(base_url)
            .segment(self.pack)
            .segment(self.version)
    }
}
