//! Axum route handlers for the Menu API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::menu::language::Language;
use crate::menu::model::{MenuDocument, NormalizedMenu};
use crate::menu::normalizer::normalize;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LanguageQuery {
    #[serde(default)]
    pub lang: Language,
}

#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub language: Language,
    pub title: String,
    /// Category titles in the requested language, in menu order.
    pub category_titles: Vec<String>,
    pub menu: NormalizedMenu,
}

/// GET /api/v1/menu
pub async fn handle_get_menu(
    State(state): State<AppState>,
    Query(params): Query<LanguageQuery>,
) -> Result<Json<MenuResponse>, AppError> {
    let doc = state.menu_source.load().await?;
    let menu = normalize(&doc);
    info!(
        categories = menu.categories.len(),
        items = menu.item_count(),
        "Menu normalized"
    );
    Ok(Json(MenuResponse {
        language: params.lang,
        title: menu.title(params.lang).to_string(),
        category_titles: menu
            .categories
            .iter()
            .map(|c| c.title(params.lang).to_string())
            .collect(),
        menu,
    }))
}

/// POST /api/v1/menu/normalize
pub async fn handle_normalize(Json(doc): Json<MenuDocument>) -> Json<NormalizedMenu> {
    let menu = normalize(&doc);
    info!(
        raw_categories = doc.categories.len(),
        categories = menu.categories.len(),
        "Ad-hoc menu normalized"
    );
    Json(menu)
}
