//! Language selection for the bilingual menu.
//!
//! Bulgarian is the default language; English is the alternate and falls back
//! to Bulgarian whenever the English field is empty.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Bg,
    En,
}

/// Picks `alt` for the alternate language when present, otherwise `default`.
pub fn localized<'a>(default: &'a str, alt: &'a str, lang: Language) -> &'a str {
    match lang {
        Language::En if !alt.is_empty() => alt,
        _ => default,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// UI labels
// ────────────────────────────────────────────────────────────────────────────

/// Fixed interface strings shown around the menu content.
#[derive(Debug, Clone, Copy)]
pub struct UiLabels {
    pub page: &'static str,
    pub of: &'static str,
    pub allergens: &'static str,
    pub ingredients: &'static str,
    pub empty: &'static str,
    pub menu: &'static str,
}

static BG_LABELS: UiLabels = UiLabels {
    page: "Страница",
    of: "от",
    allergens: "Алергени",
    ingredients: "Съставки",
    empty: "Няма артикули",
    menu: "Меню",
};

static EN_LABELS: UiLabels = UiLabels {
    page: "Page",
    of: "of",
    allergens: "Allergens",
    ingredients: "Ingredients",
    empty: "No items",
    menu: "Menu",
};

pub fn ui_labels(lang: Language) -> &'static UiLabels {
    match lang {
        Language::Bg => &BG_LABELS,
        Language::En => &EN_LABELS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_is_bulgarian() {
        assert_eq!(Language::default(), Language::Bg);
    }

    #[test]
    fn test_localized_prefers_alternate_when_present() {
        assert_eq!(localized("Салати", "Salads", Language::En), "Salads");
        assert_eq!(localized("Салати", "Salads", Language::Bg), "Салати");
    }

    #[test]
    fn test_localized_falls_back_to_default_when_alternate_empty() {
        assert_eq!(localized("Салати", "", Language::En), "Салати");
    }

    #[test]
    fn test_language_serde_tags() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
        let lang: Language = serde_json::from_str("\"bg\"").unwrap();
        assert_eq!(lang, Language::Bg);
    }

    #[test]
    fn test_ui_labels_per_language() {
        assert_eq!(ui_labels(Language::Bg).empty, "Няма артикули");
        assert_eq!(ui_labels(Language::En).empty, "No items");
        assert_eq!(ui_labels(Language::En).page, "Page");
    }
}
