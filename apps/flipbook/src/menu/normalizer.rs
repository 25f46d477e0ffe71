//! Menu normalization: repairs the transcribed heading list into a clean
//! category/item tree.
//!
//! Written as a left-to-right fold over the raw categories. The accumulator
//! tracks the open category and the most recently appended item by index, so
//! stray notes and allergen call-outs can be attached to the item they follow.
//! Contact lines are collected and emitted as a trailing "Контакти" category.

use crate::menu::classify::{classify_line, LineKind};
use crate::menu::model::{Category, Item, MenuDocument, NormalizedMenu, RawCategory, RawItem};

/// Normalizes a menu document. Pure and deterministic.
pub fn normalize(doc: &MenuDocument) -> NormalizedMenu {
    let acc = doc
        .categories
        .iter()
        .fold(Accumulator::default(), |acc, raw| acc.step(raw));

    NormalizedMenu {
        title_bg: doc.title_bg.clone(),
        title_en: doc.title_en.clone(),
        currency: doc.currency.clone(),
        categories: acc.finish(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fold state
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Accumulator {
    categories: Vec<Category>,
    /// Index into `categories` of the open category.
    current: Option<usize>,
    /// (category index, item index) of the most recently appended item.
    last_item: Option<(usize, usize)>,
    info_lines: Vec<String>,
}

impl Accumulator {
    fn step(mut self, raw: &RawCategory) -> Self {
        match classify_line(raw) {
            LineKind::Blank => {}

            LineKind::ContactLine { line } => self.info_lines.push(line),

            LineKind::AllergenAnnotation { allergens } => {
                if !allergens.is_empty() {
                    if let Some(item) = self.last_item_mut() {
                        if !item.has_allergens() {
                            item.allergens = Some(allergens);
                        }
                    }
                }
                if raw.has_items() {
                    self.append_items(&raw.items);
                }
            }

            LineKind::NoteOnly { note } => {
                if !note.is_empty() {
                    if let Some(item) = self.last_item_mut() {
                        item.notes.push(note);
                    }
                }
            }

            LineKind::RealCategory => {
                let trimmed = raw.source_title().trim();
                let title_bg = non_empty_or(&raw.title_bg, trimmed);
                let title_en = non_empty_or(&raw.title_en, trimmed);
                self.open(Category::new(title_bg, title_en));
                self.append_items(&raw.items);
            }

            LineKind::Fallback { title } => {
                if self.current.is_none() {
                    self.open(Category::new(title.clone(), title));
                    self.last_item = None;
                }
            }
        }
        self
    }

    fn finish(mut self) -> Vec<Category> {
        if !self.info_lines.is_empty() {
            self.categories.push(Category::contacts(self.info_lines));
        }
        self.categories
    }

    fn open(&mut self, category: Category) -> usize {
        self.categories.push(category);
        let idx = self.categories.len() - 1;
        self.current = Some(idx);
        idx
    }

    /// Appends copies of `items` to the open category, opening "Други" if none is open.
    fn append_items(&mut self, items: &[RawItem]) {
        let cat_idx = match self.current {
            Some(idx) => idx,
            None => self.open(Category::other()),
        };
        let category = &mut self.categories[cat_idx];
        category.items.extend(items.iter().map(Item::from));
        if !category.items.is_empty() {
            self.last_item = Some((cat_idx, category.items.len() - 1));
        }
    }

    fn last_item_mut(&mut self) -> Option<&mut Item> {
        let (cat_idx, item_idx) = self.last_item?;
        self.categories.get_mut(cat_idx)?.items.get_mut(item_idx)
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
