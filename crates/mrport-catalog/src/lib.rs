use std::marker::PhantomData;

use itertools::Itertools;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::debug;

mod client;
mod queries;
pub use client::*;
pub use queries::*;

pub const DEFAULT_API_BASE: &str = "https://api.modpacks.ch";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog is unavailable\nurl: {url}\nerror: {message}")]
    Unavailable { url: String, message: String },

    #[error("Malformed catalog payload\nsource: {source_name}\npath: {path}\nerror: {message}")]
    Malformed {
        source_name: String,
        path: String,
        message: String,
    },
}

impl CatalogError {
    fn unavailable(url: &str, error: impl ToString) -> Self {
        Self::Unavailable {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

pub struct Query<Data, T>
where
    Data: QueryData<T>,
{
    data: Data,
    _marker: PhantomData<fn() -> T>,
}

impl<Data, T> Query<Data, T>
where
    Data: QueryData<T>,
    T: DeserializeOwned,
{
    pub fn new(data: Data) -> Self {
        Self {
            data,
            _marker: PhantomData,
        }
    }

    pub async fn query(&self, catalog: &HttpCatalog) -> Result<T, CatalogError> {
        let url = self.data.builder(catalog.base_url()).build();
        debug!(%url, "Querying catalog");

        let s = catalog
            .client()
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, catalog.user_agent())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| CatalogError::unavailable(&url, err))?
            .text()
            .await
            .map_err(|err| CatalogError::unavailable(&url, err))?;

        parse_json(&url, &s)
    }
}

/// Deserialize `s` into `T`, reporting the JSON path of the first mismatch.
///
/// `source_name` only ends up in the error message.
pub fn parse_json<T: DeserializeOwned>(source_name: &str, s: &str) -> Result<T, CatalogError> {
    let mut deserializer = serde_json::Deserializer::from_str(s);

    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| CatalogError::Malformed {
        source_name: source_name.to_owned(),
        path: e.path().to_string(),
        message: e.into_inner().to_string(),
    })
}

pub trait QueryData<T> {
    /// Build the url.
    fn builder(&self, base_url: &str) -> Builder;
}

pub struct Builder {
    base_url: String,
    segments: Vec<String>,
}

impl Builder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            segments: Vec::new(),
        }
    }

    pub fn segment(mut self, segment: impl ToString) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    pub fn build(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        std::iter::once(base)
            .chain(self.segments.iter().map(String::as_str))
            .join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_test() {
        let url = Builder::new("https://api.modpacks.ch/")
            .segment("public")
            .segment("modpack")
            .segment(7)
            .build();

        assert_eq!("https://api.modpacks.ch/public/modpack/7", url);
    }

    #[test]
    fn parse_reports_path_test() {
        let err = parse_json::<VersionDetail>(
            "version.json",
            r#"{
                "id": 2,
                "name": "1.0",
                "targets": [],
                "files": [{"path": "mods/", "name": "a.jar", "size": 1}]
            }"#,
        )
        .unwrap_err();

        let CatalogError::Malformed { path, message, .. } = err else {
            panic!("expected a malformed error, got {err:?}");
        };
        assert_eq!("files[0]", path);
        assert!(message.contains("sha1"), "{message}");
    }
}
