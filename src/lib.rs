pub mod core;
pub mod topology;
pub mod symbols;
pub mod recognize;
pub mod perception;
pub mod config;
pub mod batch;

pub use crate::core::{Grid, GlyphError, Result};
pub use crate::recognize::{analyze, recognize, recognize_with, Recognition};
pub use crate::symbols::SymbolTable;
