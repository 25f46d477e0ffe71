//! Page Packer: greedily partitions the normalized menu into pages under the
//! line budget.
//!
//! # Packing rules
//! - The sequence always starts with one `Cover` (outside the budget).
//! - Before opening a category on a non-empty page, the page is flushed when
//!   heading + empty-placeholder cost would overflow. The first item's cost is
//!   NOT part of this check, so a large first item can overfill a page.
//! - Items are checked at item boundaries only. An item that would overflow a
//!   slice that already holds items starts a new page with a continuation
//!   slice repeating the category title. An item is never split, so the
//!   budget is a soft bound.
//! - Empty categories get a placeholder cost and never continue onto a new page.

use serde::{Deserialize, Serialize};

use crate::layout::cost::{estimate_item_lines, EMPTY_PLACEHOLDER_COST, HEADING_COST};
use crate::layout::metrics::LayoutMetrics;
use crate::menu::language::{localized, Language};
use crate::menu::model::{Category, Item, NormalizedMenu};

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageDescriptor {
    Cover,
    #[serde(rename = "category")]
    CategoryPage { sections: Vec<SectionSlice> },
}

/// The part of one category placed on a single page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSlice {
    pub title_bg: String,
    pub title_en: String,
    pub items: Vec<Item>,
}

/// How a renderer should lay out a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Regular,
    /// Allergen legend: name and description columns, no prices.
    Allergens,
    /// The synthesized contact block.
    Contacts,
}

impl SectionSlice {
    fn open(category: &Category) -> Self {
        SectionSlice {
            title_bg: category.title_bg.clone(),
            title_en: category.title_en.clone(),
            items: Vec::new(),
        }
    }

    pub fn title(&self, lang: Language) -> &str {
        localized(&self.title_bg, &self.title_en, lang)
    }

    pub fn kind(&self, lang: Language) -> SectionKind {
        match self.title(lang).trim().to_lowercase().as_str() {
            "алергени" | "allergens" => SectionKind::Allergens,
            "контакти" | "contacts" => SectionKind::Contacts,
            _ => SectionKind::Regular,
        }
    }
}

impl PageDescriptor {
    pub fn sections(&self) -> &[SectionSlice] {
        match self {
            PageDescriptor::Cover => &[],
            PageDescriptor::CategoryPage { sections } => sections,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry points
// ────────────────────────────────────────────────────────────────────────────

/// Paginates the menu with item names measured in the default language.
pub fn paginate(menu: &NormalizedMenu, metrics: &LayoutMetrics) -> Vec<PageDescriptor> {
    paginate_for(menu, metrics, Language::default())
}

/// Paginates the menu with item names measured in `lang`.
pub fn paginate_for(
    menu: &NormalizedMenu,
    metrics: &LayoutMetrics,
    lang: Language,
) -> Vec<PageDescriptor> {
    let chars_per_line = metrics.chars_per_line;
    pack_pages(&menu.categories, metrics.lines_per_page as f64, |item| {
        estimate_item_lines(item, lang, chars_per_line)
    })
}

/// Greedy packing over an arbitrary item-cost function.
pub fn pack_pages<F>(categories: &[Category], lines_per_page: f64, item_cost: F) -> Vec<PageDescriptor>
where
    F: Fn(&Item) -> f64,
{
    let mut pages = vec![PageDescriptor::Cover];
    let mut page = PageAccumulator::default();

    for category in categories {
        if !page.sections.is_empty()
            && page.used_lines + HEADING_COST + EMPTY_PLACEHOLDER_COST > lines_per_page
        {
            page.flush_into(&mut pages);
        }

        page.open_section(category);

        if category.items.is_empty() {
            page.used_lines += EMPTY_PLACEHOLDER_COST;
            continue;
        }

        for item in &category.items {
            let cost = item_cost(item);
            if page.current_slice_len() > 0 && page.used_lines + cost > lines_per_page {
                page.flush_into(&mut pages);
                page.open_section(category);
            }
            page.push_item(item.clone(), cost);
        }
    }

    page.flush_into(&mut pages);
    pages
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct PageAccumulator {
    sections: Vec<SectionSlice>,
    used_lines: f64,
}

impl PageAccumulator {
    fn open_section(&mut self, category: &Category) {
        self.sections.push(SectionSlice::open(category));
        self.used_lines += HEADING_COST;
    }

    fn current_slice_len(&self) -> usize {
        self.sections.last().map_or(0, |s| s.items.len())
    }

    fn push_item(&mut self, item: Item, cost: f64) {
        if let Some(section) = self.sections.last_mut() {
            section.items.push(item);
        }
        self.used_lines += cost;
    }

    /// Emits the accumulated sections as a page (if any) and resets.
    fn flush_into(&mut self, pages: &mut Vec<PageDescriptor>) {
        let sections = std::mem::take(&mut self.sections);
        self.used_lines = 0.0;
        if !sections.is_empty() {
            pages.push(PageDescriptor::CategoryPage { sections });
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
