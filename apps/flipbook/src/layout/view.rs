//! Localized, render-ready projection of page descriptors.
//!
//! The DOM and raster renderers only draw strings; every language decision
//! and label is resolved here.

use serde::Serialize;

use crate::layout::packer::{PageDescriptor, SectionKind, SectionSlice};
use crate::menu::language::{ui_labels, Language};
use crate::menu::model::{Item, NormalizedMenu};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageView {
    Cover { title: String, subtitle: String },
    Category { sections: Vec<SectionView> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub title: String,
    pub kind: SectionKind,
    /// Placeholder text, set only when the section has no items.
    pub empty_label: Option<String>,
    pub items: Vec<ItemView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub name: String,
    pub qty: String,
    pub price: String,
    pub ingredients: Option<String>,
    pub allergens: Option<String>,
}

pub fn page_view(menu: &NormalizedMenu, page: &PageDescriptor, lang: Language) -> PageView {
    match page {
        PageDescriptor::Cover => PageView::Cover {
            title: menu.title(lang).to_string(),
            subtitle: ui_labels(lang).menu.to_string(),
        },
        PageDescriptor::CategoryPage { sections } => PageView::Category {
            sections: sections.iter().map(|s| section_view(s, lang)).collect(),
        },
    }
}

fn section_view(slice: &SectionSlice, lang: Language) -> SectionView {
    let labels = ui_labels(lang);
    SectionView {
        title: slice.title(lang).to_string(),
        kind: slice.kind(lang),
        empty_label: slice.items.is_empty().then(|| labels.empty.to_string()),
        items: slice.items.iter().map(|i| item_view(i, lang)).collect(),
    }
}

fn item_view(item: &Item, lang: Language) -> ItemView {
    let labels = ui_labels(lang);
    ItemView {
        name: item.name(lang).to_string(),
        qty: item.qty.clone(),
        price: item.price.clone(),
        ingredients: (!item.notes.is_empty())
            .then(|| format!("{}: {}", labels.ingredients, item.notes.join(" "))),
        allergens: item
            .allergens
            .as_deref()
            .filter(|a| !a.is_empty())
            .map(|a| format!("{}: {}", labels.allergens, a)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> NormalizedMenu {
        NormalizedMenu {
            title_bg: "Меню на деня".to_string(),
            title_en: "Daily menu".to_string(),
            currency: "лв".to_string(),
            categories: vec![],
        }
    }

    #[test]
    fn test_cover_view_localized() {
        let view = page_view(&menu(), &PageDescriptor::Cover, Language::En);
        assert_eq!(
            view,
            PageView::Cover {
                title: "Daily menu".to_string(),
                subtitle: "Menu".to_string()
            }
        );
    }

    #[test]
    fn test_item_view_labels_notes_and_allergens() {
        let page = PageDescriptor::CategoryPage {
            sections: vec![SectionSlice {
                title_bg: "Салати".to_string(),
                title_en: "Salads".to_string(),
                items: vec![Item {
                    name_bg: "Шопска".to_string(),
                    name_en: "Shopska".to_string(),
                    qty: "350 г".to_string(),
                    price: "8.90".to_string(),
                    allergens: Some("7".to_string()),
                    notes: vec!["домати,".to_string(), "краставици".to_string()],
                }],
            }],
        };

        let PageView::Category { sections } = page_view(&menu(), &page, Language::Bg) else {
            panic!("expected category view");
        };
        let item = &sections[0].items[0];
        assert_eq!(sections[0].title, "Салати");
        assert_eq!(sections[0].kind, SectionKind::Regular);
        assert!(sections[0].empty_label.is_none());
        assert_eq!(item.name, "Шопска");
        assert_eq!(item.ingredients.as_deref(), Some("Съставки: домати, краставици"));
        assert_eq!(item.allergens.as_deref(), Some("Алергени: 7"));
    }

    #[test]
    fn test_empty_section_gets_placeholder() {
        let page = PageDescriptor::CategoryPage {
            sections: vec![SectionSlice {
                title_bg: "Десерти".to_string(),
                title_en: String::new(),
                items: vec![],
            }],
        };
        let PageView::Category { sections } = page_view(&menu(), &page, Language::En) else {
            panic!("expected category view");
        };
        assert_eq!(sections[0].title, "Десерти");
        assert_eq!(sections[0].empty_label.as_deref(), Some("No items"));
    }

    #[test]
    fn test_item_without_extras_has_no_labels() {
        let view = item_view(&Item::default(), Language::En);
        assert!(view.ingredients.is_none());
        assert!(view.allergens.is_none());
    }
}
