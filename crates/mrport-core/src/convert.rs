//! FTB version → Modrinth index.

use std::collections::BTreeMap;

use mrport_catalog::{PackSummary, SourceFile, Target, VersionDetail};
use tracing::{debug, warn};

use crate::{
    index::{Env, EnvSupport, Hashes, IndexFile, TargetManifest},
    AUXILIARY_INSTALLER_MARKER, CURSEFORGE_CDN,
};

pub const FORMAT_VERSION: u32 = 1;
pub const GAME: &str = "minecraft";

/// Index dependency key for a catalog target, `None` for targets the index has no slot for.
pub fn dependency_key(target: &str) -> Option<&'static str> {
    match target {
        "minecraft" => Some("minecraft"),
        "forge" => Some("forge"),
        "fabric" => Some("fabric-loader"),
        "neoforge" => Some("neoforge"),
        _ => None,
    }
}

/// Builds the index for one version of a pack.
///
/// Total over well-formed input: shape problems are rejected earlier,
/// when the catalog payload is parsed.
pub fn convert(pack: &PackSummary, version: &VersionDetail) -> TargetManifest {
    let dependencies = dependencies(&version.targets);

    let files = version
        .files
        .iter()
        .filter(|file| {
            let auxiliary = file.path.contains(AUXILIARY_INSTALLER_MARKER);
            if auxiliary {
                debug!(path = %file.path, name = %file.name, "Skipping auxiliary installer file");
            }
            !auxiliary
        })
        .map(index_file)
        .collect::<Vec<_>>();

    debug!(
        pack = %pack.name,
        version = %version.name,
        files = files.len(),
        skipped = version.files.len() - files.len(),
        "Converted version"
    );

    TargetManifest {
        format_version: FORMAT_VERSION,
        game: GAME.to_owned(),
        version_id: version.name.clone(),
        name: pack.name.clone(),
        summary: pack.synopsis.clone(),
        files,
        dependencies,
    }
}

/// Later targets with the same name overwrite earlier ones.
pub fn dependencies(targets: &[Target]) -> BTreeMap<String, String> {
    targets
        .iter()
        .filter_map(|target| {
            dependency_key(&target.name).map(|key| (key.to_owned(), target.version.clone()))
        })
        .collect()
}

fn index_file(file: &SourceFile) -> IndexFile {
    let downloads = match resolve_download(file) {
        Some(url) => vec![url],
        None => {
            warn!(path = %file.path, name = %file.name, "File has no download source");
            Vec::new()
        }
    };

    IndexFile {
        path: format!("{}{}", file.path, file.name),
        hashes: Hashes { sha1: file.sha1.clone() },
        env: Env {
            client: EnvSupport::unsupported_if(file.server_only),
            server: EnvSupport::unsupported_if(file.client_only),
        },
        downloads,
        file_size: file.size,
    }
}

/// Direct url if the catalog has one, otherwise the CurseForge CDN location.
pub fn resolve_download(file: &SourceFile) -> Option<String> {
    file.url
        .as_deref()
        .filter(|url| !url.is_empty())
        .map(ToOwned::to_owned)
        .or_else(|| file.source_ref.map(|source| curseforge_url(source.file, &file.name)))
}

/// `files/<first 4 digits>/<next 3 digits without leading zeros>/<encoded name>`
pub fn curseforge_url(file_id: u64, file_name: &str) -> String {
    let id = file_id.to_string();
    let head = id.get(..4).unwrap_or(id.as_str());
    let tail = id.get(4..id.len().min(7)).unwrap_or_default().trim_start_matches('0');

    format!("{CURSEFORGE_CDN}/{head}/{tail}/{}", urlencoding::encode(file_name))
}
