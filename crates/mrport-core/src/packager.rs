use std::{
    io::{Cursor, Read, Write},
    path::{Path, PathBuf},
};

use tracing::info;
use zip::{write::FileOptions, CompressionMethod, ZipArchive, ZipWriter};

use crate::{error::Error, index::TargetManifest, ARCHIVE_EXTENSION, INDEX_FILE_NAME};

/// A packaged `.mrpack`, held in memory until it is handed off.
#[derive(Debug, Clone)]
pub struct PackArchive {
    file_name: String,
    bytes: Vec<u8>,
}

impl PackArchive {
    /// Suggested name for the downloaded file, `<pack>-<version>.mrpack`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Writes the archive into `dir` under its suggested name and returns the full path.
    pub async fn save(&self, dir: impl AsRef<Path>) -> Result<PathBuf, Error> {
        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await?;

        let path = dir.join(&self.file_name);
        tokio::fs::write(&path, &self.bytes).await?;

        info!("Saved {} ({} bytes)", path.to_string_lossy(), self.bytes.len());

        Ok(path)
    }
}

pub fn package(manifest: &TargetManifest) -> Result<PackArchive, Error> {
    let body = serde_json::to_string_pretty(manifest)?;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file(INDEX_FILE_NAME, options)?;
    zip.write_all(body.as_bytes()).map_err(|err| Error::Packaging(err.to_string()))?;
    let bytes = zip.finish()?.into_inner();

    info!(
        pack = %manifest.name,
        version = %manifest.version_id,
        files = manifest.files.len(),
        "Packaged index"
    );

    Ok(PackArchive {
        file_name: suggested_file_name(manifest),
        bytes,
    })
}

/// Path separators in pack or version names would escape the output directory,
/// so they become `_`.
pub fn suggested_file_name(manifest: &TargetManifest) -> String {
    format!("{}-{}.{ARCHIVE_EXTENSION}", manifest.name, manifest.version_id)
        .replace(['/', '\\'], "_")
}

/// Reads the index back out of a packaged archive.
pub fn read_index(bytes: &[u8]) -> Result<TargetManifest, Error> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut file = archive.by_name(INDEX_FILE_NAME)?;

    let mut content = String::new();
    file.read_to_string(&mut content)?;

    Ok(serde_json::from_str(&content)?)
}
