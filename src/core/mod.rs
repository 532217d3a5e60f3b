pub mod error;
pub mod types;

pub use error::{GlyphError, Result};
pub use types::{
    Cell, Grid, Label, LabelGrid, PaddedGrid, BACKGROUND, FOREGROUND, NEIGHBORS_4, UNLABELED,
};
