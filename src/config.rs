use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{GlyphError, Result};
use crate::perception::raster::DEFAULT_THRESHOLD;
use crate::symbols::SymbolTable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerConfig {
    /// Luma at or below this value counts as ink.
    pub threshold: u8,
    pub symbols: SymbolTable,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self { threshold: DEFAULT_THRESHOLD, symbols: SymbolTable::standard() }
    }
}

impl RecognizerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GlyphError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| GlyphError::Config(e.to_string()))
    }
}
