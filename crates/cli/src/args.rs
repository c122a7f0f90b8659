use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mrport_core::listing::SortKey;

#[derive(Parser)]
#[command(verbatim_doc_comment, version)]
///                                    __
///    ____ ___  _________  ____  _____/ /_
///   / __ `__ \/ ___/ __ \/ __ \/ ___/ __/
///  / / / / / / /  / /_/ / /_/ / /  / /_
/// /_/ /_/ /_/_/  / .___/\____/_/   \__/
///               /_/
/// FTB modpacks to Modrinth `.mrpack` converter
pub struct Cli {
    /// Catalog API base url, overrides the settings file
    #[arg(long, global = true)]
    pub api_base: Option<String>,
    /// Log at debug level unless `RUST_LOG` says otherwise
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the catalog
    List {
        /// Only packs whose name contains this
        #[arg(long, short)]
        search: Option<String>,
        /// One of: name, installs, plays, updated, released
        #[arg(long, default_value_t = SortKey::Name)]
        sort: SortKey,
    },
    /// Show a pack and its versions
    Show { pack_id: u64 },
    /// Convert a pack version into a `.mrpack`
    Convert {
        pack_id: u64,
        version_id: u64,
        /// Output directory, overrides the settings file
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Convert saved pack and version JSON documents into a `.mrpack`
    ConvertFile {
        pack: PathBuf,
        version: PathBuf,
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Show the settings in use
    Config {
        /// Write the default settings file if there is none
        #[arg(long)]
        init: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_args_test() {
        let cli =
            Cli::try_parse_from(["mrport", "list", "--sort", "installs", "-s", "sky"]).unwrap();

        let Command::List { search, sort } = cli.command else {
            panic!("expected `list`");
        };
        assert_eq!(Some("sky".to_owned()), search);
        assert_eq!(SortKey::Installs, sort);
    }

    #[test]
    fn convert_args_test() {
        let cli = Cli::try_parse_from([
            "mrport",
            "--api-base",
            "http://localhost",
            "convert",
            "104",
            "2250",
            "-o",
            "out",
        ])
        .unwrap();

        assert_eq!(Some("http://localhost".to_owned()), cli.api_base);
        let Command::Convert {
            pack_id,
            version_id,
            output,
        } = cli.command
        else {
            panic!("expected `convert`");
        };
        assert_eq!((104, 2250), (pack_id, version_id));
        assert_eq!(Some(PathBuf::from("out")), output);
    }

    #[test]
    fn unknown_sort_key_test() {
        assert!(Cli::try_parse_from(["mrport", "list", "--sort", "downloads"]).is_err());
    }
}
