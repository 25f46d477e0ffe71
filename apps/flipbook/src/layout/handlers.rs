//! Axum route handlers for pagination and book views.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::AppError;
use crate::layout::metrics::{live_metrics, metrics_for_page, raster_metrics, Density, LayoutMetrics};
use crate::layout::navigation::{DisplayMode, Reader};
use crate::layout::packer::{paginate_for, PageDescriptor};
use crate::layout::view::{page_view, PageView};
use crate::menu::language::Language;
use crate::menu::model::{MenuDocument, NormalizedMenu};
use crate::menu::normalizer::normalize;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct PagesQuery {
    #[serde(default)]
    pub lang: Language,
    pub width: Option<f64>,
    pub height: Option<f64>,
    #[serde(default)]
    pub density: Density,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub density: Density,
}

#[derive(Debug, Deserialize)]
pub struct PaginateRequest {
    pub menu: MenuDocument,
    #[serde(default)]
    pub lang: Language,
    /// Explicit line budget. Takes precedence over `page`.
    pub metrics: Option<LayoutMetrics>,
    pub page: Option<PageSize>,
}

#[derive(Debug, Serialize)]
pub struct PagesResponse {
    pub language: Language,
    pub metrics: LayoutMetrics,
    pub page_count: usize,
    pub pages: Vec<PageDescriptor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Next,
    Prev,
}

/// Book view request. The live view sends its stage size (and optionally the
/// viewport width); without a stage the raster page size is used.
#[derive(Debug, Default, Deserialize)]
pub struct BookQuery {
    #[serde(default)]
    pub lang: Language,
    #[serde(default)]
    pub index: usize,
    /// Explicit mode; otherwise derived from the viewport width.
    pub mode: Option<DisplayMode>,
    /// Move from `index` before building the view.
    pub step: Option<Step>,
    pub stage_width: Option<f64>,
    pub stage_height: Option<f64>,
    pub viewport_width: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub language: Language,
    pub index: usize,
    pub mode: DisplayMode,
    pub indicator: String,
    pub can_go_next: bool,
    pub can_go_prev: bool,
    pub page_count: usize,
    pub pages: Vec<PageView>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/pages
pub async fn handle_get_pages(
    State(state): State<AppState>,
    Query(params): Query<PagesQuery>,
) -> Result<Json<PagesResponse>, AppError> {
    let metrics = page_metrics(params.width, params.height, params.density, &state.config);
    let menu = normalize(&state.menu_source.load().await?);
    let pages = paginate_for(&menu, &metrics, params.lang);

    info!(
        lang = ?params.lang,
        lines_per_page = metrics.lines_per_page,
        chars_per_line = metrics.chars_per_line,
        pages = pages.len(),
        sections = pages.iter().map(|p| p.sections().len()).sum::<usize>(),
        "Menu paginated"
    );

    Ok(Json(PagesResponse {
        language: params.lang,
        metrics,
        page_count: pages.len(),
        pages,
    }))
}

/// POST /api/v1/pages
pub async fn handle_paginate(
    State(state): State<AppState>,
    Json(req): Json<PaginateRequest>,
) -> Result<Json<PagesResponse>, AppError> {
    let metrics = match (req.metrics, req.page) {
        (Some(metrics), _) => {
            metrics.validate()?;
            metrics
        }
        (None, Some(page)) => metrics_for_page(page.width, page.height, page.density),
        (None, None) => default_metrics(&state.config),
    };
    let lang = req.lang;

    // CPU-bound for large documents, so keep it off the async executor.
    let pages = tokio::task::spawn_blocking(move || {
        let menu = normalize(&req.menu);
        paginate_for(&menu, &metrics, lang)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in pagination: {e}")))?;

    debug!(pages = pages.len(), "Ad-hoc menu paginated");

    Ok(Json(PagesResponse {
        language: lang,
        metrics,
        page_count: pages.len(),
        pages,
    }))
}

/// GET /api/v1/book
pub async fn handle_get_book(
    State(state): State<AppState>,
    Query(params): Query<BookQuery>,
) -> Result<Json<BookResponse>, AppError> {
    let viewport_width = params.viewport_width.or(params.stage_width);
    let mode = params
        .mode
        .or_else(|| viewport_width.map(DisplayMode::for_viewport))
        .unwrap_or_default();

    let menu = normalize(&state.menu_source.load().await?);
    let metrics_for = |shown: DisplayMode| match (params.stage_width, params.stage_height) {
        (Some(w), Some(h)) => live_metrics(w, h, viewport_width.unwrap_or(w), shown),
        _ => default_metrics(&state.config),
    };

    // Step through the layout the reader was looking at.
    let before = metrics_for(mode.shown_at(params.index));
    let mut pages = paginate_for(&menu, &before, params.lang);
    let mut reader = Reader::new(pages.len(), mode, params.index);
    match params.step {
        Some(Step::Next) => reader.next(),
        Some(Step::Prev) => reader.prev(),
        None => {}
    }

    // Re-measure for the page now shown; the cover is sized as a single page.
    let metrics = metrics_for(reader.effective_mode());
    if metrics != before {
        pages = paginate_for(&menu, &metrics, params.lang);
        reader = Reader::new(pages.len(), mode, reader.index());
    }

    debug!(
        index = reader.index(),
        mode = ?mode,
        pages = pages.len(),
        "Book view built"
    );
    Ok(Json(book_response(&menu, &pages, &reader, params.lang)))
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

fn default_metrics(config: &Config) -> LayoutMetrics {
    raster_metrics(config.raster_page_width, config.raster_page_height)
}

/// Uses the requested page size, filling missing dimensions from the raster default.
fn page_metrics(
    width: Option<f64>,
    height: Option<f64>,
    density: Density,
    config: &Config,
) -> LayoutMetrics {
    metrics_for_page(
        width.unwrap_or(config.raster_page_width),
        height.unwrap_or(config.raster_page_height),
        density,
    )
}

fn book_response(
    menu: &NormalizedMenu,
    pages: &[PageDescriptor],
    reader: &Reader,
    lang: Language,
) -> BookResponse {
    BookResponse {
        language: lang,
        index: reader.index(),
        mode: reader.effective_mode(),
        indicator: reader.indicator(lang),
        can_go_next: reader.can_go_next(),
        can_go_prev: reader.can_go_prev(),
        page_count: reader.page_count(),
        pages: reader
            .visible_pages()
            .into_iter()
            .filter_map(|i| pages.get(i))
            .map(|p| page_view(menu, p, lang))
            .collect(),
    }
}
