//! Ordering, searching and presenting catalog entries.

use std::{cmp::Ordering, fmt::Display, str::FromStr};

use itertools::Itertools;
use mrport_catalog::{PackId, PackSummary, VersionEntry, VersionId};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use typed_builder::TypedBuilder;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending, ignoring the `FTB ` prefix.
    #[default]
    Name,
    Installs,
    Plays,
    Updated,
    Released,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        Self::Name,
        Self::Installs,
        Self::Plays,
        Self::Updated,
        Self::Released,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Installs => "installs",
            Self::Plays => "plays",
            Self::Updated => "updated",
            Self::Released => "released",
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let expected = Self::ALL.iter().join(", ");
                format!("unknown sort key `{s}`, expected one of: {expected}")
            })
    }
}

#[derive(Debug, Default, Clone, TypedBuilder)]
pub struct CatalogQuery {
    #[builder(default, setter(strip_option, into))]
    pub search: Option<String>,
    #[builder(default)]
    pub sort: SortKey,
}

impl CatalogQuery {
    /// Sorts `packs` and drops the ones the search does not match.
    pub fn apply(&self, mut packs: Vec<PackSummary>) -> Vec<PackSummary> {
        sort_packs(&mut packs, self.sort);

        let search = self.search.as_deref().unwrap_or_default();
        packs.into_iter().filter(|pack| matches_search(pack, search)).collect()
    }
}

fn sort_name(name: &str) -> String {
    name.replacen("FTB ", "", 1).to_lowercase()
}

pub fn sort_packs(packs: &mut [PackSummary], key: SortKey) {
    let numeric = |pack: &PackSummary| -> i128 {
        match key {
            SortKey::Name => 0,
            SortKey::Installs => pack.installs.into(),
            SortKey::Plays => pack.plays.into(),
            SortKey::Updated => pack.updated.into(),
            SortKey::Released => pack.released.into(),
        }
    };

    match key {
        SortKey::Name => packs.sort_by(|a, b| {
            sort_name(&a.name)
                .cmp(&sort_name(&b.name))
                .then_with(|| a.name.cmp(&b.name))
        }),
        _ => packs.sort_by(|a, b| match numeric(b).cmp(&numeric(a)) {
            Ordering::Equal => a.name.cmp(&b.name),
            ordering => ordering,
        }),
    }
}

/// Case-insensitive substring match on the pack name. An empty search matches everything.
pub fn matches_search(pack: &PackSummary, search: &str) -> bool {
    search.is_empty() || pack.name.to_lowercase().contains(&search.to_lowercase())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackDetails {
    pub id: PackId,
    pub name: String,
    pub synopsis: String,
    pub splash: Option<String>,
    /// Newest first.
    pub versions: Vec<VersionRow>,
}

impl From<&PackSummary> for PackDetails {
    fn from(pack: &PackSummary) -> Self {
        Self {
            id: pack.id,
            name: pack.name.clone(),
            synopsis: pack.synopsis.clone(),
            splash: pack.splash().map(|art| art.url.clone()),
            versions: pack.versions_newest_first().map(VersionRow::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRow {
    pub id: VersionId,
    pub name: String,
    pub updated_on: String,
}

impl VersionRow {
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.updated_on)
    }
}

impl From<&VersionEntry> for VersionRow {
    fn from(version: &VersionEntry) -> Self {
        Self {
            id: version.id,
            name: version.name.clone(),
            updated_on: format_date(version.updated),
        }
    }
}

/// `YYYY-M-D` in UTC, without zero padding.
pub fn format_date(unix_seconds: i64) -> String {
    match OffsetDateTime::from_unix_timestamp(unix_seconds) {
        Ok(date) => format!("{}-{}-{}", date.year(), u8::from(date.month()), date.day()),
        Err(_) => unix_seconds.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use mrport_catalog::Art;

    use super::*;

    fn pack(id: u64, name: &str, installs: u64, updated: i64) -> PackSummary {
        PackSummary {
            id: PackId(id),
            name: name.to_owned(),
            synopsis: String::new(),
            art: Vec::new(),
            versions: Vec::new(),
            installs,
            plays: 0,
            updated,
            released: 0,
        }
    }

    fn names(packs: &[PackSummary]) -> Vec<&str> {
        packs.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn sort_by_name_ignores_ftb_prefix_test() {
        let mut packs = vec![
            pack(1, "FTB Skies", 0, 0),
            pack(2, "All the Mods", 0, 0),
            pack(3, "FTB Academy", 0, 0),
            pack(4, "Revelation", 0, 0),
        ];

        sort_packs(&mut packs, SortKey::Name);

        assert_eq!(vec!["FTB Academy", "All the Mods", "Revelation", "FTB Skies"], names(&packs));
    }

    #[test]
    fn sort_numeric_descending_test() {
        let mut packs = vec![pack(1, "A", 10, 3), pack(2, "B", 300, 1), pack(3, "C", 20, 2)];

        sort_packs(&mut packs, SortKey::Installs);
        assert_eq!(vec!["B", "C", "A"], names(&packs));

        sort_packs(&mut packs, SortKey::Updated);
        assert_eq!(vec!["A", "C", "B"], names(&packs));
    }

    #[test]
    fn search_test() {
        let query = CatalogQuery::builder().search("SKIE").build();
        let packs = query.apply(vec![pack(1, "FTB Skies", 0, 0), pack(2, "StoneBlock", 0, 0)]);
        assert_eq!(vec!["FTB Skies"], names(&packs));

        let everything = CatalogQuery::builder().search("").build();
        assert_eq!(2, everything.apply(vec![pack(1, "A", 0, 0), pack(2, "B", 0, 0)]).len());
    }

    #[test]
    fn sort_key_parse_test() {
        assert_eq!(Ok(SortKey::Plays), "plays".parse());
        assert_eq!(Ok(SortKey::Name), "Name".parse());
        assert!("downloads".parse::<SortKey>().is_err());
    }

    #[test]
    fn format_date_test() {
        assert_eq!("2023-11-14", format_date(1_700_000_000));
        assert_eq!("2020-9-13", format_date(1_600_000_000));
    }

    #[test]
    fn details_test() {
        let mut summary = pack(104, "FTB Academy", 0, 0);
        summary.art = vec![Art {
            kind: "splash".into(),
            url: "https://cdn/splash.png".into(),
        }];
        summary.versions = vec![
            VersionEntry {
                id: VersionId(1),
                name: "1.0.0".into(),
                updated: 1_600_000_000,
                kind: "release".into(),
            },
            VersionEntry {
                id: VersionId(2),
                name: "1.1.0".into(),
                updated: 1_700_000_000,
                kind: "release".into(),
            },
        ];

        let details = PackDetails::from(&summary);

        assert_eq!(Some("https://cdn/splash.png".to_owned()), details.splash);
        assert_eq!(
            vec!["1.1.0 (2023-11-14)", "1.0.0 (2020-9-13)"],
            details.versions.iter().map(VersionRow::label).collect::<Vec<_>>()
        );
    }
}
