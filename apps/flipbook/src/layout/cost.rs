//! Line-cost model for the page packer.
//!
//! Costs are abstract line units, not literal text lines. The estimate is
//! deliberately coarse: names are measured by character count against the
//! name column width, never by real glyph metrics.

use crate::menu::language::Language;
use crate::menu::model::Item;

/// Cost of a section heading.
pub const HEADING_COST: f64 = 1.4;
/// Extra cost of the "no items" placeholder under an empty category.
pub const EMPTY_PLACEHOLDER_COST: f64 = 1.2;

const ITEM_BASE_COST: f64 = 1.2;
const NAME_WRAP_LINE_COST: f64 = 1.0;
const ALLERGEN_LINE_COST: f64 = 0.9;
const NOTE_LINE_COST: f64 = 1.0;
const ITEM_TAIL_MARGIN: f64 = 0.4;

/// Estimates how many line units `item` occupies when its name is shown in `lang`.
///
/// `1.2` base, plus one unit per full name-column width of the name, plus
/// `0.9` per allergen line, plus at least one unit of notes, plus `0.4` margin.
pub fn estimate_item_lines(item: &Item, lang: Language, chars_per_line: u32) -> f64 {
    let cpl = chars_per_line.max(1) as usize;
    let mut lines = ITEM_BASE_COST;

    let name_len = item.name(lang).chars().count();
    lines += (name_len / cpl) as f64 * NAME_WRAP_LINE_COST;

    if let Some(allergens) = item.allergens.as_deref().filter(|a| !a.is_empty()) {
        lines += allergens.chars().count().div_ceil(cpl) as f64 * ALLERGEN_LINE_COST;
    }

    if !item.notes.is_empty() {
        let note_len = item.notes.join(" ").chars().count();
        lines += note_len.div_ceil(cpl).max(1) as f64 * NOTE_LINE_COST;
    }

    lines + ITEM_TAIL_MARGIN
}
