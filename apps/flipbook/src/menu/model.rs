//! Menu data model: raw transcription input and the normalized category tree.
//!
//! Field names follow the JSON menu document (`title_bg`, `name_en`, ...).
//! Every input field is optional: missing or null strings deserialize to empty
//! and missing or null sequences to empty, so a sparse document never fails to load.

use serde::{Deserialize, Deserializer, Serialize};

use crate::menu::language::{localized, Language};

pub const OTHER_TITLE: &str = "Други";
pub const CONTACTS_TITLE_BG: &str = "Контакти";
pub const CONTACTS_TITLE_EN: &str = "Contacts";

// ────────────────────────────────────────────────────────────────────────────
// Raw input
// ────────────────────────────────────────────────────────────────────────────

/// The menu document as transcribed. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title_bg: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title_en: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<RawCategory>,
}

/// A heading from the source document. The title may really be a contact
/// line, an allergen call-out or a stray note rather than a category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCategory {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title_bg: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title_en: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<RawItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name_bg: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name_en: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub qty: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: String,
    #[serde(default)]
    pub allergens: Option<String>,
    #[serde(default)]
    pub notes: Option<Vec<String>>,
}

/// Treats an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl RawCategory {
    /// The title used for classification: default language first, then alternate.
    pub fn source_title(&self) -> &str {
        if self.title_bg.is_empty() {
            &self.title_en
        } else {
            &self.title_bg
        }
    }

    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Normalized output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedMenu {
    pub title_bg: String,
    pub title_en: String,
    pub currency: String,
    pub categories: Vec<Category>,
}

/// A category heading owning its items exclusively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub title_bg: String,
    pub title_en: String,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name_bg: String,
    pub name_en: String,
    pub qty: String,
    pub price: String,
    /// Empty string is treated the same as absent.
    pub allergens: Option<String>,
    pub notes: Vec<String>,
}

impl NormalizedMenu {
    pub fn title(&self, lang: Language) -> &str {
        localized(&self.title_bg, &self.title_en, lang)
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

impl Category {
    pub fn new(title_bg: impl Into<String>, title_en: impl Into<String>) -> Self {
        Category {
            title_bg: title_bg.into(),
            title_en: title_en.into(),
            items: Vec::new(),
        }
    }

    /// Bucket opened when items show up before any real heading.
    pub fn other() -> Self {
        Category::new(OTHER_TITLE, OTHER_TITLE)
    }

    /// Synthesized category holding one item per collected contact line.
    pub fn contacts(lines: Vec<String>) -> Self {
        Category {
            title_bg: CONTACTS_TITLE_BG.to_string(),
            title_en: CONTACTS_TITLE_EN.to_string(),
            items: lines.into_iter().map(Item::contact_line).collect(),
        }
    }

    pub fn title(&self, lang: Language) -> &str {
        localized(&self.title_bg, &self.title_en, lang)
    }
}

impl Item {
    pub fn name(&self, lang: Language) -> &str {
        localized(&self.name_bg, &self.name_en, lang)
    }

    pub fn has_allergens(&self) -> bool {
        self.allergens.as_deref().is_some_and(|a| !a.is_empty())
    }

    fn contact_line(line: String) -> Self {
        Item {
            name_bg: line.clone(),
            name_en: line,
            qty: String::new(),
            price: String::new(),
            allergens: Some(String::new()),
            notes: Vec::new(),
        }
    }
}

impl From<&RawItem> for Item {
    /// Copies the raw item; pre-existing notes are copied, absent notes become empty.
    fn from(raw: &RawItem) -> Self {
        Item {
            name_bg: raw.name_bg.clone(),
            name_en: raw.name_en.clone(),
            qty: raw.qty.clone(),
            price: raw.price.clone(),
            allergens: raw.allergens.clone(),
            notes: raw.notes.clone().unwrap_or_default(),
        }
    }
}
