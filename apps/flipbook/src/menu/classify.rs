//! Line classification: decides what a raw heading actually encodes.
//!
//! Transcribed menus carry contact info, allergen call-outs and ingredient
//! notes as bare headings with no items. `classify_line` sorts each raw
//! category into one `LineKind`, checked in priority order:
//!
//! 1. blank and empty          → `Blank`
//! 2. contact line, no items   → `ContactLine`
//! 3. `алергени:` / `allergens:` → `AllergenAnnotation` (items allowed)
//! 4. note-shaped, no items    → `NoteOnly`
//! 5. has items                → `RealCategory`
//! 6. anything else            → `Fallback`

use crate::menu::model::RawCategory;

const ALLERGEN_PREFIXES: &[&str] = &["алергени", "allergens"];
const CONTACT_PREFIXES: &[&str] = &["instagram", "телефон"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    ContactLine { line: String },
    AllergenAnnotation { allergens: String },
    NoteOnly { note: String },
    RealCategory,
    Fallback { title: String },
}

/// Classifies a raw category by its trimmed title and whether it carries items.
pub fn classify_line(category: &RawCategory) -> LineKind {
    let trimmed = category.source_title().trim();
    let has_items = category.has_items();

    if trimmed.is_empty() && !has_items {
        return LineKind::Blank;
    }

    if !has_items && is_contact_line(trimmed) {
        return LineKind::ContactLine {
            line: trimmed.to_string(),
        };
    }

    if let Some(allergens) = allergen_annotation(trimmed) {
        return LineKind::AllergenAnnotation {
            allergens: allergens.to_string(),
        };
    }

    if !has_items && is_note_shaped(trimmed) {
        return LineKind::NoteOnly {
            note: normalize_note(trimmed).to_string(),
        };
    }

    if has_items {
        return LineKind::RealCategory;
    }

    LineKind::Fallback {
        title: trimmed.to_string(),
    }
}

/// Returns the text after the colon when `title` matches `^(алергени|allergens)\s*:`
/// (case-insensitive). The returned text is trimmed and may be empty.
pub fn allergen_annotation(title: &str) -> Option<&str> {
    let lower = title.to_lowercase();
    let prefix = ALLERGEN_PREFIXES
        .iter()
        .find(|p| lower.starts_with(*p))?;

    // Lowercasing keeps these prefixes the same length in chars, so skip by chars.
    let prefix_chars = prefix.chars().count();
    let rest_start = title
        .char_indices()
        .nth(prefix_chars)
        .map(|(i, _)| i)
        .unwrap_or(title.len());
    let rest = title[rest_start..].trim_start();
    rest.strip_prefix(':').map(str::trim)
}

pub fn is_contact_line(trimmed: &str) -> bool {
    let lower = trimmed.to_lowercase();
    CONTACT_PREFIXES.iter().any(|p| lower.starts_with(p)) || trimmed.starts_with(':')
}

/// A note-shaped title starts with `/` or `:`, is an allergen header, or starts
/// with a lowercase Latin or Cyrillic letter.
pub fn is_note_shaped(trimmed: &str) -> bool {
    if trimmed.is_empty() {
        return false;
    }
    trimmed.starts_with('/')
        || trimmed.starts_with(':')
        || allergen_annotation(trimmed).is_some()
        || trimmed.chars().next().is_some_and(is_lowercase_letter)
}

fn is_lowercase_letter(c: char) -> bool {
    c.is_ascii_lowercase() || ('а'..='я').contains(&c)
}

/// Strips surrounding whitespace and runs of leading/trailing `/`.
pub fn normalize_note(text: &str) -> &str {
    text.trim()
        .trim_start_matches('/')
        .trim_end_matches('/')
        .trim()
}
