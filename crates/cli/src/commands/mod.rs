use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use mrport_core::{
    cache::DirCache,
    catalog::{HttpCatalog, PackId, VersionId},
    configs::Settings,
    listing::{CatalogQuery, SortKey},
    porter::{convert_local, Porter},
    DOT_MRPORT_SETTINGS_CONFIG,
};
use tracing::info;

use crate::args::{Cli, Command};

type HttpPorter = Porter<HttpCatalog, DirCache>;

pub async fn process_args(args: &Cli) -> anyhow::Result<()> {
    let mut settings = Settings::load(DOT_MRPORT_SETTINGS_CONFIG).await?;
    if let Some(api_base) = &args.api_base {
        settings.api_base.clone_from(api_base);
    }

    match &args.command {
        Command::List { search, sort } => list(&porter(&settings), search.as_deref(), *sort).await,
        Command::Show { pack_id } => show(&porter(&settings), PackId(*pack_id)).await,
        Command::Convert {
            pack_id,
            version_id,
            output,
        } => {
            let output = output.as_deref().unwrap_or(&settings.output_dir);
            convert(&porter(&settings), PackId(*pack_id), VersionId(*version_id), output).await
        }
        Command::ConvertFile { pack, version, output } => {
            let output = output.as_deref().unwrap_or(&settings.output_dir);
            convert_file(pack, version, output).await
        }
        Command::Config { init } => config(&settings, *init).await,
    }
}

fn porter(settings: &Settings) -> HttpPorter {
    let catalog = HttpCatalog::builder()
        .base_url(settings.api_base.clone())
        .user_agent(settings.user_agent.clone())
        .build();

    Porter::new(Arc::new(catalog), Arc::new(DirCache::new(&settings.cache_dir)))
        .with_fetch_timeout(settings.fetch_timeout())
}

pub async fn list(porter: &HttpPorter, search: Option<&str>, sort: SortKey) -> anyhow::Result<()> {
    let query = CatalogQuery {
        search: search.map(String::from),
        sort,
    };

    let packs = porter.list_catalog(&query).await?;

    for pack in &packs {
        println!("{:>6}  {}", pack.id, pack.name);
    }
    info!("{} packs", packs.len());

    Ok(())
}

pub async fn show(porter: &HttpPorter, pack_id: PackId) -> anyhow::Result<()> {
    let details = porter.pack_details(pack_id).await?;

    println!("{} ({})", details.name, details.id);
    println!("{}", details.synopsis);
    if let Some(splash) = &details.splash {
        println!("Splash: {splash}");
    }
    println!();

    for version in &details.versions {
        println!("{:>6}  {}", version.id, version.label());
    }

    Ok(())
}

pub async fn convert(
    porter: &HttpPorter,
    pack_id: PackId,
    version_id: VersionId,
    output: &Path,
) -> anyhow::Result<()> {
    let archive = porter.select_version(pack_id, version_id).await?;
    let path = archive.save(output).await?;

    println!("{}", path.to_string_lossy());

    Ok(())
}

pub async fn convert_file(pack: &Path, version: &Path, output: &Path) -> anyhow::Result<()> {
    let pack_json = tokio::fs::read_to_string(pack)
        .await
        .with_context(|| format!("Cannot read {}", pack.to_string_lossy()))?;
    let version_json = tokio::fs::read_to_string(version)
        .await
        .with_context(|| format!("Cannot read {}", version.to_string_lossy()))?;

    let archive = convert_local(&pack_json, &version_json)?;
    let path = archive.save(output).await?;

    println!("{}", path.to_string_lossy());

    Ok(())
}

pub async fn config(settings: &Settings, init: bool) -> anyhow::Result<()> {
    let path = PathBuf::from(DOT_MRPORT_SETTINGS_CONFIG);

    if init {
        if tokio::fs::try_exists(&path).await? {
            println!("{} already exists", path.to_string_lossy());
        } else {
            Settings::default().save(&path).await?;
        }
    }

    println!("api_base = {}", settings.api_base);
    println!("user_agent = {}", settings.user_agent);
    println!("cache_dir = {}", settings.cache_dir.to_string_lossy());
    println!("output_dir = {}", settings.output_dir.to_string_lossy());
    match settings.fetch_timeout_secs {
        Some(secs) => println!("fetch_timeout_secs = {secs}"),
        None => println!("fetch_timeout_secs = none"),
    }

    Ok(())
}
