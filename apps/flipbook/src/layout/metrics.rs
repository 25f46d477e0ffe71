//! Layout metrics: converts physical page dimensions into the line budget.
//!
//! One canonical function, `metrics_for_page`, takes explicit dimensions.
//! The pre-rendered image flipbook passes its fixed raster size; the live
//! view first fits the book into the stage (`fit_book_size`) and passes the
//! resulting page size. Nothing here reads display state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::navigation::DisplayMode;

/// Viewports narrower than this use the compact density.
pub const COMPACT_BREAKPOINT_PX: f64 = 900.0;

/// Fixed page size of the pre-rendered image flipbook.
pub const RASTER_PAGE_WIDTH: f64 = 1240.0;
pub const RASTER_PAGE_HEIGHT: f64 = 1754.0;

/// Page aspect ratio (width / height) of a single menu page.
const PAGE_RATIO: f64 = 853.0 / 1280.0;

/// Share of the raw line count actually usable for items (leaves room for spacing).
const LINE_FILL_FACTOR: f64 = 0.7;
/// Width reserved for the quantity and price columns.
const PRICE_COLUMNS_PX: f64 = 140.0;
const MIN_NAME_COLUMN_PX: f64 = 120.0;
const AVERAGE_GLYPH_PX: f64 = 7.5;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Capacity of one page under the line-budget model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    /// Page capacity in abstract line units.
    pub lines_per_page: u32,
    /// Approximate characters that fit in the item name column.
    pub chars_per_line: u32,
}

#[derive(Debug, Error, PartialEq)]
pub enum MetricsError {
    #[error("lines_per_page must be at least {min}, got {actual}")]
    LinesPerPageTooSmall { min: u32, actual: u32 },

    #[error("chars_per_line must be at least {min}, got {actual}")]
    CharsPerLineTooSmall { min: u32, actual: u32 },
}

impl LayoutMetrics {
    pub const MIN_LINES_PER_PAGE: u32 = 8;
    pub const MIN_CHARS_PER_LINE: u32 = 16;

    /// Checks the floors callers are expected to clamp to. The packer itself
    /// never validates; it degrades instead.
    pub fn validate(&self) -> Result<(), MetricsError> {
        if self.lines_per_page < Self::MIN_LINES_PER_PAGE {
            return Err(MetricsError::LinesPerPageTooSmall {
                min: Self::MIN_LINES_PER_PAGE,
                actual: self.lines_per_page,
            });
        }
        if self.chars_per_line < Self::MIN_CHARS_PER_LINE {
            return Err(MetricsError::CharsPerLineTooSmall {
                min: Self::MIN_CHARS_PER_LINE,
                actual: self.chars_per_line,
            });
        }
        Ok(())
    }
}

/// Spacing profile for the page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    #[default]
    Regular,
    Compact,
}

impl Density {
    pub fn for_viewport(viewport_width: f64) -> Self {
        if viewport_width < COMPACT_BREAKPOINT_PX {
            Density::Compact
        } else {
            Density::Regular
        }
    }

    fn padding(self) -> f64 {
        match self {
            Density::Regular => 32.0,
            Density::Compact => 24.0,
        }
    }

    fn title_block(self) -> f64 {
        match self {
            Density::Regular => 46.0,
            Density::Compact => 42.0,
        }
    }

    fn line_height(self) -> f64 {
        match self {
            Density::Regular => 21.0,
            Density::Compact => 19.0,
        }
    }
}

/// Outer size of the book (one page, or two side by side in spread mode).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BookSize {
    pub width: f64,
    pub height: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Computes the line budget for a page of the given size.
///
/// Results are clamped to `MIN_LINES_PER_PAGE` / `MIN_CHARS_PER_LINE`, so
/// degenerate dimensions still produce usable metrics.
pub fn metrics_for_page(page_width: f64, page_height: f64, density: Density) -> LayoutMetrics {
    let padding = density.padding();

    let content_height = page_height - padding * 2.0 - density.title_block();
    let base_lines = (content_height / density.line_height()).floor();
    let lines = (base_lines * LINE_FILL_FACTOR).floor();

    let name_column = (page_width - padding * 2.0 - PRICE_COLUMNS_PX).max(MIN_NAME_COLUMN_PX);
    let chars = (name_column / AVERAGE_GLYPH_PX).floor();

    LayoutMetrics {
        lines_per_page: clamp_floor(lines, LayoutMetrics::MIN_LINES_PER_PAGE),
        chars_per_line: clamp_floor(chars, LayoutMetrics::MIN_CHARS_PER_LINE),
    }
}

/// Metrics for the fixed-size pre-rendered pages.
pub fn raster_metrics(page_width: f64, page_height: f64) -> LayoutMetrics {
    metrics_for_page(page_width, page_height, Density::Regular)
}

/// Fits the book into the stage, preserving the page aspect ratio.
pub fn fit_book_size(stage_width: f64, stage_height: f64, mode: DisplayMode) -> BookSize {
    let (max_w, max_h, ratio) = match mode {
        DisplayMode::Spread => (stage_width * 0.92, stage_height * 0.86, PAGE_RATIO * 2.0),
        DisplayMode::Single => (stage_width * 0.96, stage_height * 0.9, PAGE_RATIO),
    };

    let mut width = max_w;
    let mut height = width / ratio;
    if height > max_h {
        height = max_h;
        width = height * ratio;
    }
    BookSize { width, height }
}

/// Metrics for the live view: fit the book into the stage, then measure one page.
pub fn live_metrics(
    stage_width: f64,
    stage_height: f64,
    viewport_width: f64,
    mode: DisplayMode,
) -> LayoutMetrics {
    let book = fit_book_size(stage_width, stage_height, mode);
    let page_width = match mode {
        DisplayMode::Spread => book.width / 2.0,
        DisplayMode::Single => book.width,
    };
    metrics_for_page(page_width, book.height, Density::for_viewport(viewport_width))
}

fn clamp_floor(value: f64, min: u32) -> u32 {
    if value.is_finite() && value > min as f64 {
        value as u32
    } else {
        min
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_page_metrics() {
        // content = 1754 - 64 - 46 = 1644 → 78 lines → 54 usable
        // name column = 1240 - 64 - 140 = 1036px → 138 chars
        let metrics = raster_metrics(RASTER_PAGE_WIDTH, RASTER_PAGE_HEIGHT);
        assert_eq!(metrics, metrics_for_page(1240.0, 1754.0, Density::Regular));
        assert_eq!(metrics.lines_per_page, 54);
        assert_eq!(metrics.chars_per_line, 138);
    }

    #[test]
    fn test_compact_density_fits_more_lines() {
        let regular = metrics_for_page(600.0, 900.0, Density::Regular);
        let compact = metrics_for_page(600.0, 900.0, Density::Compact);
        assert!(compact.lines_per_page > regular.lines_per_page);
        assert!(compact.chars_per_line >= regular.chars_per_line);
    }

    #[test]
    fn test_tiny_page_clamps_to_floors() {
        let metrics = metrics_for_page(10.0, 10.0, Density::Regular);
        assert_eq!(metrics.lines_per_page, LayoutMetrics::MIN_LINES_PER_PAGE);
        assert_eq!(metrics.chars_per_line, LayoutMetrics::MIN_CHARS_PER_LINE);
        assert!(metrics.validate().is_ok());
    }

    #[test]
    fn test_density_breakpoint() {
        assert_eq!(Density::for_viewport(899.0), Density::Compact);
        assert_eq!(Density::for_viewport(900.0), Density::Regular);
    }

    #[test]
    fn test_validate_rejects_values_below_floor() {
        let lines = LayoutMetrics {
            lines_per_page: 7,
            chars_per_line: 40,
        };
        assert_eq!(
            lines.validate(),
            Err(MetricsError::LinesPerPageTooSmall { min: 8, actual: 7 })
        );

        let chars = LayoutMetrics {
            lines_per_page: 20,
            chars_per_line: 0,
        };
        assert!(matches!(
            chars.validate(),
            Err(MetricsError::CharsPerLineTooSmall { .. })
        ));
    }

    #[test]
    fn test_fit_book_size_width_bound() {
        // Tall stage: width is the binding dimension.
        let book = fit_book_size(1000.0, 4000.0, DisplayMode::Single);
        assert!((book.width - 960.0).abs() < 1e-3);
        assert!((book.width / book.height - PAGE_RATIO).abs() < 1e-4);
    }

    #[test]
    fn test_fit_book_size_height_bound() {
        // Wide stage: height is the binding dimension.
        let book = fit_book_size(4000.0, 1000.0, DisplayMode::Spread);
        assert!((book.height - 860.0).abs() < 1e-3);
        assert!((book.width / book.height - PAGE_RATIO * 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_live_spread_measures_half_the_book() {
        let spread = live_metrics(1600.0, 900.0, 1600.0, DisplayMode::Spread);
        let book = fit_book_size(1600.0, 900.0, DisplayMode::Spread);
        let expected = metrics_for_page(book.width / 2.0, book.height, Density::Regular);
        assert_eq!(spread, expected);
    }

    #[test]
    fn test_metrics_are_deterministic() {
        let a = live_metrics(1280.0, 800.0, 1280.0, DisplayMode::Single);
        let b = live_metrics(1280.0, 800.0, 1280.0, DisplayMode::Single);
        assert_eq!(a, b);
    }
}
