use clap::{Parser, Subcommand};
use playfetch_catalog::{KindFilter, SortKey};
use playfetch_core::Locale;
use std::path::PathBuf;

/// Look up Play Store packages and browse the featured catalog.
#[derive(Parser, Debug)]
#[command(name = "playfetch", version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Interface language (ar, bn, en, es, fr, hi, pt, ru, zh-CN)
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch metadata for a package id or Play Store URL
    Lookup {
        input: String,

        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up a package and hand its APK link to the navigator
    Download { input: String },

    /// Browse the featured catalog
    Catalog {
        /// Case-insensitive search over names, package ids and descriptions
        #[arg(short, long, default_value = "")]
        search: String,

        /// all, app, game or popular
        #[arg(short, long, default_value_t = KindFilter::All)]
        filter: KindFilter,

        /// relevance, popularity or rating
        #[arg(long, default_value_t = SortKey::Relevance)]
        sort: SortKey,

        /// Number of pages to reveal
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
        pages: u16,

        #[arg(long)]
        json: bool,
    },

    /// Copy a catalog entry's package id to the clipboard
    Copy { id: u32 },

    /// Open the external download page for a catalog entry
    Redirect { id: u32 },

    /// Leave the finder the way the "back" control does
    Back {
        /// Page the visitor came from
        #[arg(long)]
        referrer: Option<String>,

        /// Number of entries in the session history
        #[arg(long, default_value_t = 1)]
        history: usize,
    },

    /// List supported interface languages
    Locales,
}
