use crate::error::CatalogError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One record of the static demo catalog.
///
/// Entries are compiled in and never change at runtime. `installs` is a
/// display label only; ordering uses `popularity` and `rating`.
///
/// # Examples
///
/// ```
/// use playfetch_catalog::types::{CatalogEntry, EntryKind};
///
/// let entry = CatalogEntry {
///     id: 1,
///     name: "WhatsApp Messenger",
///     package_id: "com.whatsapp",
///     description: "Aplicación de mensajería instantánea",
///     kind: EntryKind::Application,
///     category: "Comunicación",
///     rating: 4.5,
///     installs: "5B+",
///     developer: "WhatsApp LLC",
///     popularity: 100,
///     icon_url: "https://play-lh.googleusercontent.com/icon",
/// };
///
/// assert!(entry.is_popular());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: &'static str,
    pub package_id: &'static str,
    pub description: &'static str,
    pub kind: EntryKind,
    pub category: &'static str,
    pub rating: f32,
    pub installs: &'static str,
    pub developer: &'static str,
    pub popularity: u8,
    pub icon_url: &'static str,
}

/// Entries scoring above this count as popular.
pub const POPULARITY_THRESHOLD: u8 = 90;

impl CatalogEntry {
    pub fn is_popular(&self) -> bool {
        self.popularity > POPULARITY_THRESHOLD
    }
}

/// Whether an entry is an application or a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[serde(rename = "app")]
    Application,
    Game,
}

/// Category filter applied after search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    #[default]
    All,
    #[serde(rename = "app")]
    Application,
    Game,
    /// Entries with popularity above [`POPULARITY_THRESHOLD`]
    Popular,
}

impl KindFilter {
    pub fn accepts(self, entry: &CatalogEntry) -> bool {
        match self {
            Self::All => true,
            Self::Application => entry.kind == EntryKind::Application,
            Self::Game => entry.kind == EntryKind::Game,
            Self::Popular => entry.is_popular(),
        }
    }
}

impl FromStr for KindFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "app" | "apps" | "application" => Ok(Self::Application),
            "game" | "games" => Ok(Self::Game),
            "popular" => Ok(Self::Popular),
            _ => Err(CatalogError::InvalidFilter(s.to_string())),
        }
    }
}

impl fmt::Display for KindFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Application => "app",
            Self::Game => "game",
            Self::Popular => "popular",
        })
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Catalog order
    #[default]
    Relevance,
    /// Highest popularity first
    Popularity,
    /// Highest rating first
    Rating,
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relevance" => Ok(Self::Relevance),
            "popularity" => Ok(Self::Popularity),
            "rating" => Ok(Self::Rating),
            _ => Err(CatalogError::InvalidSort(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Relevance => "relevance",
            Self::Popularity => "popularity",
            Self::Rating => "rating",
        })
    }
}
