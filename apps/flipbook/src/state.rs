use std::sync::Arc;

use crate::config::Config;
use crate::menu::source::MenuSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Where the raw menu document is read from. Default: `FileMenuSource` at `MENU_PATH`.
    pub menu_source: Arc<dyn MenuSource>,
    pub config: Config,
}
