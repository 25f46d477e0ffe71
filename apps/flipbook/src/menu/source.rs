//! Menu sources: where the raw menu document comes from.
//!
//! `AppState` holds an `Arc<dyn MenuSource>`. The file source re-reads the JSON
//! document on every load so menu edits show up without a restart.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::menu::model::MenuDocument;

#[derive(Debug, Error)]
pub enum MenuLoadError {
    #[error("failed to read menu document '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse menu document '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait MenuSource: Send + Sync {
    async fn load(&self) -> Result<MenuDocument, MenuLoadError>;
}

// ────────────────────────────────────────────────────────────────────────────
// FileMenuSource
// ────────────────────────────────────────────────────────────────────────────

/// Reads the menu from a JSON file on disk.
pub struct FileMenuSource {
    path: PathBuf,
}

impl FileMenuSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileMenuSource { path: path.into() }
    }
}

#[async_trait]
impl MenuSource for FileMenuSource {
    async fn load(&self) -> Result<MenuDocument, MenuLoadError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| MenuLoadError::Io {
                path: self.path.clone(),
                source,
            })?;

        let doc: MenuDocument =
            serde_json::from_slice(&bytes).map_err(|source| MenuLoadError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            path = %self.path.display(),
            categories = doc.categories.len(),
            "Menu document loaded"
        );
        Ok(doc)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// StaticMenuSource
// ────────────────────────────────────────────────────────────────────────────

/// Serves a fixed in-memory document.
#[cfg(test)]
pub struct StaticMenuSource(pub MenuDocument);

#[cfg(test)]
#[async_trait]
impl MenuSource for StaticMenuSource {
    async fn load(&self) -> Result<MenuDocument, MenuLoadError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_file_source_reads_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"title_bg":"Меню","currency":"лв","categories":[{{"title_bg":"Супи","items":[{{"name_bg":"Таратор","price":"4.50"}}]}}]}}"#
        )
        .unwrap();

        let doc = FileMenuSource::new(file.path()).load().await.unwrap();
        assert_eq!(doc.title_bg, "Меню");
        assert_eq!(doc.categories.len(), 1);
        assert_eq!(doc.categories[0].items[0].price, "4.50");
    }

    #[tokio::test]
    async fn test_file_source_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileMenuSource::new(dir.path().join("missing.json"))
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, MenuLoadError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[tokio::test]
    async fn test_file_source_invalid_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = FileMenuSource::new(file.path()).load().await.unwrap_err();
        assert!(matches!(err, MenuLoadError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_static_source_returns_document() {
        let doc = MenuDocument {
            title_bg: "Меню".to_string(),
            ..MenuDocument::default()
        };
        let loaded = StaticMenuSource(doc.clone()).load().await.unwrap();
        assert_eq!(loaded, doc);
    }
}
