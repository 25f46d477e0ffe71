pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::layout::handlers as layout_handlers;
use crate::menu::handlers as menu_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Menu API
        .route("/api/v1/menu", get(menu_handlers::handle_get_menu))
        .route(
            "/api/v1/menu/normalize",
            post(menu_handlers::handle_normalize),
        )
        // Layout API
        .route(
            "/api/v1/pages",
            get(layout_handlers::handle_get_pages).post(layout_handlers::handle_paginate),
        )
        .route("/api/v1/book", get(layout_handlers::handle_get_book))
        .with_state(state)
}
