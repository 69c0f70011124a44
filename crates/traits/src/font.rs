//! FontProvider trait for abstracting where font binaries come from.
//!
//! The shaping measurer asks a provider for the bytes of a face; hosts can
//! hand fonts over from memory, an asset bundle or their own font database.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for font loading operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FontError {
    #[error("Font not found: {family} (bold: {bold}, italic: {italic})")]
    NotFound {
        family: String,
        bold: bool,
        italic: bool,
    },

    #[error("Failed to load font '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("Invalid font data: {0}")]
    InvalidData(String),
}

/// Shared font binary (reference-counted bytes).
pub type SharedFontData = Arc<Vec<u8>>;

/// Describes the face a caller is looking for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontQuery {
    pub family: String,
    pub bold: bool,
    pub italic: bool,
}

impl FontQuery {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            bold: false,
            italic: false,
        }
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Family names compare case-insensitively.
    fn key(&self) -> (String, bool, bool) {
        (self.family.to_lowercase(), self.bold, self.italic)
    }
}

pub trait FontProvider: Send + Sync + Debug {
    /// Loads the binary for the face matching `query`.
    fn load_font(&self, query: &FontQuery) -> Result<SharedFontData, FontError>;

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// Faces registered up front, keyed by (family, bold, italic).
#[derive(Debug, Default)]
pub struct InMemoryFontProvider {
    fonts: RwLock<HashMap<(String, bool, bool), SharedFontData>>,
}

impl InMemoryFontProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a face. A later registration for the same key replaces the earlier one.
    ///
    /// # Errors
    ///
    /// Returns `FontError::LoadFailed` if the internal lock is poisoned.
    pub fn add_font(&self, query: FontQuery, data: Vec<u8>) -> Result<(), FontError> {
        let mut fonts = self.fonts.write().map_err(|_| FontError::LoadFailed {
            path: query.family.clone(),
            message: "font store lock poisoned".to_string(),
        })?;
        fonts.insert(query.key(), Arc::new(data));
        Ok(())
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.fonts.read().map(|f| f.len()).unwrap_or(0)
    }

    /// Returns `true` if the lock is poisoned (safe default).
    pub fn is_empty(&self) -> bool {
        self.fonts.read().map(|f| f.is_empty()).unwrap_or(true)
    }
}

impl FontProvider for InMemoryFontProvider {
    /// Falls back to the regular face of the family if the styled face is missing.
    fn load_font(&self, query: &FontQuery) -> Result<SharedFontData, FontError> {
        let fonts = self.fonts.read().map_err(|_| FontError::LoadFailed {
            path: query.family.clone(),
            message: "font store lock poisoned".to_string(),
        })?;
        fonts
            .get(&query.key())
            .or_else(|| fonts.get(&FontQuery::new(query.family.clone()).key()))
            .cloned()
            .ok_or_else(|| FontError::NotFound {
                family: query.family.clone(),
                bold: query.bold,
                italic: query.italic,
            })
    }

    fn name(&self) -> &'static str {
        "InMemoryFontProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_load_case_insensitive() {
        let provider = InMemoryFontProvider::new();
        provider.add_font(FontQuery::new("Arial"), vec![1, 2, 3]).unwrap();

        let data = provider.load_font(&FontQuery::new("arial")).unwrap();
        assert_eq!(&*data, &[1, 2, 3]);
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn test_styled_face_falls_back_to_regular() {
        let provider = InMemoryFontProvider::new();
        provider.add_font(FontQuery::new("Arial"), vec![1]).unwrap();
        provider
            .add_font(FontQuery::new("Arial").with_bold(true), vec![2])
            .unwrap();

        let bold = provider.load_font(&FontQuery::new("Arial").with_bold(true)).unwrap();
        assert_eq!(&*bold, &[2]);
        let italic = provider.load_font(&FontQuery::new("Arial").with_italic(true)).unwrap();
        assert_eq!(&*italic, &[1]);
    }

    #[test]
    fn test_missing_family_is_not_found() {
        let provider = InMemoryFontProvider::new();
        assert!(provider.is_empty());
        let err = provider.load_font(&FontQuery::new("Nope")).unwrap_err();
        assert!(matches!(err, FontError::NotFound { .. }));
        assert!(err.to_string().contains("Nope"));
    }

    #[test]
    fn test_overwrite_replaces_data() {
        let provider = InMemoryFontProvider::new();
        provider.add_font(FontQuery::new("A"), vec![1]).unwrap();
        provider.add_font(FontQuery::new("A"), vec![9]).unwrap();
        assert_eq!(provider.len(), 1);
        assert_eq!(&*provider.load_font(&FontQuery::new("A")).unwrap(), &[9]);
    }
}
