//! Command execution.
//!
//! Every command writes its regular output to `out` and reports side effects
//! through the injected [`Navigator`]. Errors are returned to the caller,
//! which prints them and picks the exit code.

use crate::cli::Command;
use crate::config::FinderConfig;
use crate::error::{CliError, Result};
use playfetch_catalog::{
    CATALOG, CatalogEntry, CatalogView, EntryKind, KindFilter, SortKey, ViewPhase, copy_package,
    redirect_to_download,
};
use playfetch_core::{
    HttpProvider, Locale, LookupGateway, LookupOutcome, LookupResult, LookupSession,
    MetadataProvider, Navigator, validate_input,
};
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;

/// Everything a command needs besides its own arguments.
pub struct Context<'a> {
    pub config: &'a FinderConfig,
    pub locale: Locale,
    pub navigator: &'a dyn Navigator,
}

pub async fn execute(command: Command, ctx: &Context<'_>, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Lookup { input, json } => {
            validate_input(&input)?;
            let session = build_session(ctx.config)?;
            lookup(&session, &input, ctx.locale, json, out).await
        }
        Command::Download { input } => {
            validate_input(&input)?;
            let session = build_session(ctx.config)?;
            download(&session, &input, ctx, out).await
        }
        Command::Catalog {
            search,
            filter,
            sort,
            pages,
            json,
        } => {
            let view = browse(ctx.config.catalog.page_size, search, filter, sort, pages);
            if json {
                write_catalog_json(&view, out)
            } else {
                write_catalog(&view, out)
            }
        }
        Command::Copy { id } => {
            let notice = copy_package(CATALOG, ctx.navigator, id, ctx.locale.messages())?;
            writeln!(out, "{notice}")?;
            Ok(())
        }
        Command::Redirect { id } => {
            redirect_to_download(CATALOG, ctx.navigator, id, &ctx.config.catalog.redirect_base)?;
            writeln!(out, "{}", ctx.locale.messages().redirecting)?;
            Ok(())
        }
        Command::Back { referrer, history } => {
            ctx.config
                .navigation
                .go_back(ctx.navigator, referrer.as_deref(), history);
            Ok(())
        }
        Command::Locales => {
            for locale in Locale::ALL {
                writeln!(
                    out,
                    "{:<6} {:<4} {}",
                    locale.tag(),
                    locale.flag_code(),
                    locale.display_name()
                )?;
            }
            Ok(())
        }
    }
}

/// Builds a lookup session backed by the configured HTTP provider.
pub fn build_session(config: &FinderConfig) -> Result<LookupSession> {
    let endpoint = config
        .provider
        .endpoint
        .as_deref()
        .ok_or(CliError::MissingEndpoint)?;
    let provider = HttpProvider::new(endpoint, config.provider.settings())?;
    Ok(session_with(Arc::new(provider)))
}

pub fn session_with(provider: Arc<dyn MetadataProvider>) -> LookupSession {
    LookupSession::new(LookupGateway::new(provider))
}

/// Submits `input` and prints the result.
pub async fn lookup(
    session: &LookupSession,
    input: &str,
    locale: Locale,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let LookupOutcome::Ready(result) = session.submit(input, locale).await? else {
        return Ok(());
    };

    if json {
        serde_json::to_writer_pretty(&mut *out, &result)?;
        writeln!(out)?;
    } else {
        write_result(&result, out)?;
    }
    Ok(())
}

/// Looks up `input` and hands the APK link to the navigator.
pub async fn download(
    session: &LookupSession,
    input: &str,
    ctx: &Context<'_>,
    out: &mut dyn Write,
) -> Result<()> {
    lookup(session, input, ctx.locale, false, out).await?;
    session.download(ctx.navigator)?;
    Ok(())
}

fn write_result(result: &LookupResult, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", result.title.as_deref().unwrap_or(&result.app_id))?;
    if let Some(summary) = &result.summary {
        writeln!(out, "  {summary}")?;
    }

    let developer = match (&result.developer, &result.developer_website) {
        (Some(name), Some(site)) => Some(format!("{name} ({site})")),
        (Some(name), None) => Some(name.clone()),
        (None, site) => site.clone(),
    };

    let rows = [
        ("Package", Some(result.app_id.clone())),
        ("Version", result.version.clone()),
        ("Updated", result.updated_display()),
        ("Developer", developer),
        ("Category", result.genre.clone()),
        ("Installs", result.installs.clone()),
        ("Icon", result.icon.clone()),
    ];
    for (label, value) in rows {
        if let Some(value) = value {
            writeln!(out, "  {:<10} {}", format!("{label}:"), value)?;
        }
    }
    Ok(())
}

/// Applies the catalog options the way a visitor would: each change starts a
/// recompute, only the last one is completed, then further pages are revealed.
pub fn browse(
    page_size: usize,
    search: String,
    filter: KindFilter,
    sort: SortKey,
    pages: u16,
) -> CatalogView<'static> {
    let mut view = CatalogView::seeded(page_size);
    let _ = view.set_search(search);
    let _ = view.set_filter(filter);
    let ticket = view.set_sort(sort);
    view.complete(ticket);

    for _ in 1..pages {
        if view.load_more() == 0 {
            break;
        }
    }
    view
}

fn kind_label(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Application => "app",
        EntryKind::Game => "game",
    }
}

fn write_catalog(view: &CatalogView<'_>, out: &mut dyn Write) -> Result<()> {
    if view.phase() == ViewPhase::Empty {
        writeln!(out, "No results")?;
        return Ok(());
    }

    for entry in view.visible() {
        writeln!(
            out,
            "{:>3}  {} [{}]",
            entry.id, entry.name, entry.package_id
        )?;
        writeln!(
            out,
            "     {} | {} | {:.1} | {} | {}",
            kind_label(entry.kind),
            entry.category,
            entry.rating,
            entry.installs,
            entry.developer
        )?;
    }

    writeln!(out, "Showing {} of {}", view.visible().len(), view.total())?;
    if view.has_more() {
        writeln!(out, "More results available (--pages)")?;
    }
    Ok(())
}

#[derive(Serialize)]
struct CatalogPage<'a> {
    phase: ViewPhase,
    total: usize,
    has_more: bool,
    entries: &'a [&'a CatalogEntry],
}

fn write_catalog_json(view: &CatalogView<'_>, out: &mut dyn Write) -> Result<()> {
    let page = CatalogPage {
        phase: view.phase(),
        total: view.total(),
        has_more: view.has_more(),
        entries: view.visible(),
    };
    serde_json::to_writer_pretty(&mut *out, &page)?;
    writeln!(out)?;
    Ok(())
}
