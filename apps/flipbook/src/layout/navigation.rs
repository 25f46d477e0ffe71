//! Reader navigation over the page sequence.
//!
//! Single mode shows one page at a time. Spread mode shows the cover alone and
//! then pairs of pages starting at odd indices (1-2, 3-4, ...).

use serde::{Deserialize, Serialize};

use crate::menu::language::{ui_labels, Language};

/// Viewports at least this wide show two-page spreads.
pub const SPREAD_BREAKPOINT_PX: f64 = 900.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Single,
    Spread,
}

impl DisplayMode {
    pub fn for_viewport(viewport_width: f64) -> Self {
        if viewport_width >= SPREAD_BREAKPOINT_PX {
            DisplayMode::Spread
        } else {
            DisplayMode::Single
        }
    }

    /// The mode shown at `index`: the cover is always a single page.
    pub fn shown_at(self, index: usize) -> Self {
        if self == DisplayMode::Spread && index > 0 {
            DisplayMode::Spread
        } else {
            DisplayMode::Single
        }
    }
}

/// Position of the reader within a paginated menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reader {
    index: usize,
    mode: DisplayMode,
    page_count: usize,
}

impl Reader {
    pub fn new(page_count: usize, mode: DisplayMode, index: usize) -> Self {
        let mut reader = Reader {
            index,
            mode,
            page_count,
        };
        reader.normalize_index();
        reader
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    fn max_index(&self) -> usize {
        self.page_count.saturating_sub(1)
    }

    /// Clamps the index into range and aligns spreads to odd indices.
    pub fn normalize_index(&mut self) {
        self.index = self.index.min(self.max_index());
        if self.mode == DisplayMode::Spread && self.index > 0 && self.index % 2 == 0 {
            self.index -= 1;
        }
    }

    pub fn effective_mode(&self) -> DisplayMode {
        self.mode.shown_at(self.index)
    }

    pub fn can_go_next(&self) -> bool {
        let max = self.max_index();
        match self.mode {
            DisplayMode::Single => self.index < max,
            DisplayMode::Spread if self.index == 0 => max >= 1,
            DisplayMode::Spread => self.index + 2 <= max,
        }
    }

    pub fn can_go_prev(&self) -> bool {
        self.index > 0
    }

    pub fn next(&mut self) {
        let max = self.max_index();
        self.index = match self.mode {
            DisplayMode::Single => (self.index + 1).min(max),
            DisplayMode::Spread if self.index == 0 => 1,
            DisplayMode::Spread => (self.index + 2).min(max),
        };
        self.normalize_index();
    }

    pub fn prev(&mut self) {
        self.index = match self.mode {
            DisplayMode::Single => self.index.saturating_sub(1),
            DisplayMode::Spread if self.index == 1 => 0,
            DisplayMode::Spread => self.index.saturating_sub(2),
        };
        self.normalize_index();
    }

    /// Indices of the pages currently on screen.
    pub fn visible_pages(&self) -> Vec<usize> {
        if self.page_count == 0 {
            return Vec::new();
        }
        let mut visible = vec![self.index];
        if self.effective_mode() == DisplayMode::Spread && self.index + 1 < self.page_count {
            visible.push(self.index + 1);
        }
        visible
    }

    /// Localized page indicator, e.g. "Page 2-3 of 7".
    pub fn indicator(&self, lang: Language) -> String {
        let labels = ui_labels(lang);
        let total = self.page_count;
        if self.effective_mode() == DisplayMode::Spread {
            let end = (self.index + 2).min(total);
            format!(
                "{} {}-{} {} {}",
                labels.page,
                self.index + 1,
                end,
                labels.of,
                total
            )
        } else {
            format!("{} {} {} {}", labels.page, self.index + 1, labels.of, total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── normalize_index ─────────────────────────────────────────────────────

    #[test]
    fn test_index_clamped_to_last_page() {
        let reader = Reader::new(5, DisplayMode::Single, 40);
        assert_eq!(reader.index(), 4);
    }

    #[test]
    fn test_spread_even_index_moves_back() {
        let reader = Reader::new(7, DisplayMode::Spread, 4);
        assert_eq!(reader.index(), 3);
        let cover = Reader::new(7, DisplayMode::Spread, 0);
        assert_eq!(cover.index(), 0);
    }

    #[test]
    fn test_single_mode_keeps_even_index() {
        let reader = Reader::new(7, DisplayMode::Single, 2);
        assert_eq!(reader.index(), 2);
        assert_eq!(reader.effective_mode(), DisplayMode::Single);
    }

    #[test]
    fn test_empty_book_index_is_zero() {
        let reader = Reader::new(0, DisplayMode::Spread, 3);
        assert_eq!(reader.index(), 0);
        assert!(reader.visible_pages().is_empty());
    }

    // ── single mode ─────────────────────────────────────────────────────────

    #[test]
    fn test_single_mode_walks_one_page() {
        let mut reader = Reader::new(3, DisplayMode::Single, 0);
        assert!(!reader.can_go_prev());
        reader.next();
        assert_eq!(reader.index(), 1);
        reader.next();
        assert_eq!(reader.index(), 2);
        assert!(!reader.can_go_next());
        reader.next();
        assert_eq!(reader.index(), 2);
        reader.prev();
        assert_eq!(reader.index(), 1);
    }

    // ── spread mode ─────────────────────────────────────────────────────────

    #[test]
    fn test_spread_mode_walks_pairs() {
        let mut reader = Reader::new(6, DisplayMode::Spread, 0);
        assert!(reader.can_go_next());
        assert_eq!(reader.effective_mode(), DisplayMode::Single);
        reader.next();
        assert_eq!(reader.index(), 1);
        assert_eq!(reader.effective_mode(), DisplayMode::Spread);
        reader.next();
        assert_eq!(reader.index(), 3);
        // 3 + 2 = 5 is the last page.
        assert!(reader.can_go_next());
        reader.next();
        assert_eq!(reader.index(), 5);
        assert!(!reader.can_go_next());
        reader.prev();
        assert_eq!(reader.index(), 3);
        reader.prev();
        assert_eq!(reader.index(), 1);
        reader.prev();
        assert_eq!(reader.index(), 0);
    }

    #[test]
    fn test_spread_next_clamps_onto_odd_index() {
        // Pages 0..=4: from 3, +2 = 5 clamps to 4, which realigns to 3.
        let mut reader = Reader::new(5, DisplayMode::Spread, 3);
        assert!(!reader.can_go_next());
        reader.next();
        assert_eq!(reader.index(), 3);
    }

    #[test]
    fn test_cover_only_book_cannot_move() {
        let reader = Reader::new(1, DisplayMode::Spread, 0);
        assert!(!reader.can_go_next());
        assert!(!reader.can_go_prev());
        assert_eq!(reader.visible_pages(), vec![0]);
    }

    // ── visible pages and indicator ─────────────────────────────────────────

    #[test]
    fn test_visible_pages_in_spread() {
        let reader = Reader::new(4, DisplayMode::Spread, 1);
        assert_eq!(reader.visible_pages(), vec![1, 2]);
        let last = Reader::new(4, DisplayMode::Spread, 3);
        assert_eq!(last.visible_pages(), vec![3]);
    }

    #[test]
    fn test_indicator_text() {
        let single = Reader::new(7, DisplayMode::Single, 2);
        assert_eq!(single.indicator(Language::En), "Page 3 of 7");
        assert_eq!(single.indicator(Language::Bg), "Страница 3 от 7");

        let spread = Reader::new(7, DisplayMode::Spread, 5);
        assert_eq!(spread.indicator(Language::En), "Page 6-7 of 7");

        let cover = Reader::new(7, DisplayMode::Spread, 0);
        assert_eq!(cover.indicator(Language::En), "Page 1 of 7");
    }

    #[test]
    fn test_cover_is_shown_single() {
        assert_eq!(DisplayMode::Spread.shown_at(0), DisplayMode::Single);
        assert_eq!(DisplayMode::Spread.shown_at(3), DisplayMode::Spread);
        assert_eq!(DisplayMode::Single.shown_at(3), DisplayMode::Single);
    }

    #[test]
    fn test_display_mode_breakpoint() {
        assert_eq!(DisplayMode::for_viewport(899.0), DisplayMode::Single);
        assert_eq!(DisplayMode::for_viewport(900.0), DisplayMode::Spread);
    }
}
