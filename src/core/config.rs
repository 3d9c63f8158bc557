use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::core::error::Result;

/// How a catalogued movie reacts when its title or year changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityMode {
    /// Fields change, the identifier stays as it was derived at construction.
    #[default]
    Lenient,
    /// The identifier is recomputed and every index is re-keyed.
    Strict,
}

/// Ordering of movies returned by actor/director/genre lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultOrder {
    /// Order in which the movies were added to the catalog.
    #[default]
    Discovery,
    /// Catalog order: title then year, ascending.
    Catalog,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyConfig {
    /// Upper bound on accepted edits, whatever the term length
    pub max_edit_distance: u8,
    /// Terms up to this many chars tolerate a single edit
    pub short_term_len: usize,
    /// Terms longer than this get one extra edit (still capped)
    pub long_term_len: usize,
    /// Count "teh" -> "the" as one edit
    pub transpositions: bool,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        FuzzyConfig {
            max_edit_distance: 2,
            short_term_len: 4,
            long_term_len: 15,
            transpositions: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub page_size: usize,
    pub fuzzy: FuzzyConfig,
    pub resolution_cache_size: usize,   // 0 disables the fuzzy resolution cache
    pub identity_mode: IdentityMode,
    pub result_order: ResultOrder,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            page_size: 5,
            fuzzy: FuzzyConfig::default(),
            resolution_cache_size: 256,
            identity_mode: IdentityMode::Lenient,
            result_order: ResultOrder::Discovery,
        }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
