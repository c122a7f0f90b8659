use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::{
    fs::{read_toml_config, write_toml_config},
    DOT_MRPORT_CACHE_DIR,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub api_base: String,
    pub user_agent: String,
    pub cache_dir: PathBuf,
    /// Where converted archives are saved.
    pub output_dir: PathBuf,
    /// Per-pack fetch limit while building the catalog. A fetch that runs out counts as failed.
    pub fetch_timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: mrport_catalog::DEFAULT_API_BASE.to_owned(),
            user_agent: mrport_catalog::default_user_agent(),
            cache_dir: PathBuf::from(DOT_MRPORT_CACHE_DIR),
            output_dir: PathBuf::from("."),
            fetch_timeout_secs: None,
        }
    }
}

impl Settings {
    /// Reads the settings file, falling back to defaults when it does not exist.
    pub async fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if tokio::fs::try_exists(path).await? {
            read_toml_config(path).await
        } else {
            tracing::debug!("{} not found, using default settings", path.to_string_lossy());
            Ok(Self::default())
        }
    }

    pub async fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        write_toml_config(self, path).await
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_gives_defaults_test() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path().join("Settings.toml")).await.unwrap();

        assert_eq!(Settings::default(), settings);
        assert_eq!(None, settings.fetch_timeout());
    }

    #[tokio::test]
    async fn write_and_read_test() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("configs/Settings.toml");

        let settings = Settings {
            api_base: "http://localhost:9000".into(),
            fetch_timeout_secs: Some(5),
            ..Settings::default()
        };
        settings.save(&path).await.unwrap();

        let read = Settings::load(&path).await.unwrap();
        assert_eq!(settings, read);
        assert_eq!(Some(Duration::from_secs(5)), read.fetch_timeout());
    }

    #[tokio::test]
    async fn partial_file_test() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Settings.toml");
        tokio::fs::write(&path, "output_dir = \"./packs\"\n").await.unwrap();

        let settings = Settings::load(&path).await.unwrap();
        assert_eq!(PathBuf::from("./packs"), settings.output_dir);
        assert_eq!(mrport_catalog::DEFAULT_API_BASE, settings.api_base);
    }
}
