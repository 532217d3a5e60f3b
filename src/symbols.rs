use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const SENTINEL: char = '?';

/// Hole count -> glyph symbol. Counts with no entry map to the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolTable {
    symbols: BTreeMap<usize, char>,
    sentinel: char,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl SymbolTable {
    /// Empty table: every count maps to `sentinel`.
    pub fn new(sentinel: char) -> Self {
        Self { symbols: BTreeMap::new(), sentinel }
    }

    /// Was, Ankh, Akhet, Wedjat, Scarab, Djed.
    pub fn standard() -> Self {
        Self::from_pairs([(0, 'W'), (1, 'A'), (2, 'K'), (3, 'J'), (4, 'S'), (5, 'D')])
    }

    pub fn from_pairs<I: IntoIterator<Item = (usize, char)>>(pairs: I) -> Self {
        Self { symbols: pairs.into_iter().collect(), sentinel: SENTINEL }
    }

    pub fn with_sentinel(mut self, sentinel: char) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Returns the previous symbol for `holes`, if any.
    pub fn insert(&mut self, holes: usize, symbol: char) -> Option<char> {
        self.symbols.insert(holes, symbol)
    }

    pub fn symbol_for(&self, holes: usize) -> char {
        self.symbols.get(&holes).copied().unwrap_or(self.sentinel)
    }

    pub fn is_mapped(&self, holes: usize) -> bool {
        self.symbols.contains_key(&holes)
    }

    pub fn sentinel(&self) -> char { self.sentinel }

    /// Entries in ascending hole-count order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, char)> + '_ {
        self.symbols.iter().map(|(&k, &v)| (k, v))
    }

    pub fn len(&self) -> usize { self.symbols.len() }
    pub fn is_empty(&self) -> bool { self.symbols.is_empty() }
}
