pub const DOT_MRPORT_DIR: &str = "./.mrport";
pub const DOT_MRPORT_CONFIGS_DIR: &str = "./.mrport/configs";
pub const DOT_MRPORT_SETTINGS_CONFIG: &str = "./.mrport/configs/Settings.toml";
pub const DOT_MRPORT_LOGS_DIR: &str = "./.mrport/logs";
pub const DOT_MRPORT_CACHE_DIR: &str = "./.mrport/cache/packs";

/// Name of the index inside a `.mrpack` archive.
pub const INDEX_FILE_NAME: &str = "modrinth.index.json";
pub const ARCHIVE_EXTENSION: &str = "mrpack";

pub const CURSEFORGE_CDN: &str = "https://media.forgecdn.net/files";

/// Files under a path containing this are FTB's own installer helpers
/// and never make it into the index.
pub const AUXILIARY_INSTALLER_MARKER: &str = "ftbauxilium";

/// Catalog entries with these names are loader placeholders, not packs.
pub const PLACEHOLDER_PACK_NAMES: [&str; 4] = ["NeoForge", "Fabric", "Vanilla", "MinecraftForge"];

pub const MRPORT_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const MRPORT_NAME: &str = "mrport";
