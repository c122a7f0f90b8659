use std::time::Duration;

use mrport_catalog::{CatalogError, PackId};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Catalog is unavailable\nurl: {url}\nerror: {message}")]
    CatalogUnavailable { url: String, message: String },

    #[error("Fetching pack {id} timed out after {after:?}")]
    FetchTimedOut { id: PackId, after: Duration },

    #[error("Malformed pack list\nfield: {field}\nerror: {message}")]
    MalformedPackList { field: String, message: String },

    #[error("Malformed pack summary\nfield: {field}\nerror: {message}")]
    MalformedPackSummary { field: String, message: String },

    #[error("Malformed version detail\nfield: {field}\nerror: {message}")]
    MalformedVersionDetail { field: String, message: String },

    #[error("Unable to package the manifest: {0}")]
    Packaging(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Map a failure that happened while reading the list of pack ids.
    pub fn from_listing_fetch(error: CatalogError) -> Self {
        match error {
            CatalogError::Unavailable { url, message } => Self::CatalogUnavailable { url, message },
            CatalogError::Malformed { path, message, .. } => {
                Self::MalformedPackList { field: path, message }
            }
        }
    }

    /// Map a failure that happened while reading a pack summary.
    pub fn from_pack_fetch(error: CatalogError) -> Self {
        match error {
            CatalogError::Unavailable { url, message } => Self::CatalogUnavailable { url, message },
            CatalogError::Malformed { path, message, .. } => {
                Self::MalformedPackSummary { field: path, message }
            }
        }
    }

    /// Map a failure that happened while reading a version detail.
    pub fn from_version_fetch(error: CatalogError) -> Self {
        match error {
            CatalogError::Unavailable { url, message } => Self::CatalogUnavailable { url, message },
            CatalogError::Malformed { path, message, .. } => {
                Self::MalformedVersionDetail { field: path, message }
            }
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(value: zip::result::ZipError) -> Self {
        Self::Packaging(value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Packaging(value.to_string())
    }
}
