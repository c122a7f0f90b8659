//! `modrinth.index.json`, the index of a `.mrpack` archive.
//!
//! Field names and nesting follow the Modrinth pack format exactly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TargetManifest {
    pub format_version: u32,
    pub game: String,
    pub version_id: String,
    pub name: String,
    pub summary: String,
    pub files: Vec<IndexFile>,
    /// Keys are a subset of `minecraft`, `forge`, `fabric-loader` and `neoforge`.
    pub dependencies: BTreeMap<String, String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IndexFile {
    pub path: String,
    pub hashes: Hashes,
    pub env: Env,
    pub downloads: Vec<String>,
    pub file_size: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Hashes {
    pub sha1: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Env {
    pub client: EnvSupport,
    pub server: EnvSupport,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnvSupport {
    Required,
    Unsupported,
}

impl EnvSupport {
    pub fn unsupported_if(cond: bool) -> Self {
        if cond {
            Self::Unsupported
        } else {
            Self::Required
        }
    }
}
