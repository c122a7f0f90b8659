#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
pub mod aggregator;
pub mod cache;
pub mod configs;
pub mod convert;
pub mod index;
pub mod listing;
pub mod packager;
pub mod porter;

pub mod error;
pub mod fs;

pub mod consts;

pub use consts::*;
pub use error::Error;

pub use mrport_catalog as catalog;
pub use mrport_catalog::{PackId, PackSummary, VersionDetail, VersionId};
