use anyhow::{Context, Result};

use crate::layout::metrics::{RASTER_PAGE_HEIGHT, RASTER_PAGE_WIDTH};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub menu_path: String,
    pub port: u16,
    pub rust_log: String,
    /// Page size used when a request gives no dimensions (the image flipbook raster).
    pub raster_page_width: f64,
    pub raster_page_height: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            menu_path: "data/menu.json".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            raster_page_width: RASTER_PAGE_WIDTH,
            raster_page_height: RASTER_PAGE_HEIGHT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        let defaults = Config::default();

        Ok(Config {
            menu_path: std::env::var("MENU_PATH").unwrap_or(defaults.menu_path),
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            raster_page_width: parse_env("RASTER_PAGE_WIDTH", defaults.raster_page_width)?,
            raster_page_height: parse_env("RASTER_PAGE_HEIGHT", defaults.raster_page_height)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
