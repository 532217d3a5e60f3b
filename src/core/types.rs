use std::fmt;
use std::ops::Deref;

use super::error::{GlyphError, Result};

pub type Cell = u8;
pub type Label = u32;

pub const BACKGROUND: Cell = 0;
pub const FOREGROUND: Cell = 1;

/// Label value meaning "not yet assigned". Real labels start at 1.
pub const UNLABELED: Label = 0;

/// 4-neighborhood: right, down, left, up.
pub const NEIGHBORS_4: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Rectangular binary grid, row-major, addressed by (row, col).
/// Always at least 1x1 and holds only `BACKGROUND`/`FOREGROUND`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    width: usize,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if rows.is_empty() || width == 0 {
            return Err(GlyphError::EmptyInput);
        }
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GlyphError::RaggedRows { row: r, expected: width, actual: row.len() });
            }
            if let Some(c) = row.iter().position(|&v| v != BACKGROUND && v != FOREGROUND) {
                return Err(GlyphError::InvalidCell { row: r, col: c, value: row[c] });
            }
        }
        Ok(Self { cells: rows, width })
    }

    /// Builds a grid from a flat row-major buffer.
    pub fn from_flat(width: usize, height: usize, data: &[Cell]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GlyphError::EmptyInput);
        }
        let expected = width.checked_mul(height).ok_or(GlyphError::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;
        if data.len() != expected {
            return Err(GlyphError::SizeMismatch { expected, actual: data.len() });
        }
        Self::new(data.chunks(width).map(|row| row.to_vec()).collect())
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.cells.len() }
    pub fn rows(&self) -> &[Vec<Cell>] { &self.cells }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn foreground_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == FOREGROUND).count()
    }

    /// In-bounds 4-neighbors of (row, col).
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        let rows = self.height() as i32;
        let cols = self.width as i32;
        NEIGHBORS_4.iter().filter_map(move |&(dr, dc)| {
            let nr = row as i32 + dr;
            let nc = col as i32 + dc;
            if nr >= 0 && nr < rows && nc >= 0 && nc < cols {
                Some((nr as usize, nc as usize))
            } else {
                None
            }
        })
    }

    /// Surrounds the grid with a one-cell ring of background.
    pub fn pad(&self) -> PaddedGrid {
        let padded_width = self.width + 2;
        let mut cells = Vec::with_capacity(self.height() + 2);
        cells.push(vec![BACKGROUND; padded_width]);
        for row in &self.cells {
            let mut padded = Vec::with_capacity(padded_width);
            padded.push(BACKGROUND);
            padded.extend_from_slice(row);
            padded.push(BACKGROUND);
            cells.push(padded);
        }
        cells.push(vec![BACKGROUND; padded_width]);
        PaddedGrid(Grid { cells, width: padded_width })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &v in row {
                write!(f, "{}", if v == FOREGROUND { '#' } else { '.' })?;
            }
        }
        Ok(())
    }
}

/// A grid whose outer ring is guaranteed background, so the border is one
/// connected background region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedGrid(Grid);

impl Deref for PaddedGrid {
    type Target = Grid;
    fn deref(&self) -> &Grid { &self.0 }
}

/// Per-cell component labels. Dimensions match the grid it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelGrid {
    labels: Vec<Vec<Label>>,
    count: u32,
}

impl LabelGrid {
    pub(crate) fn from_parts(labels: Vec<Vec<Label>>, count: u32) -> Self {
        Self { labels, count }
    }

    pub fn width(&self) -> usize { self.labels.first().map(|r| r.len()).unwrap_or(0) }
    pub fn height(&self) -> usize { self.labels.len() }

    /// Number of distinct labels assigned.
    pub fn count(&self) -> u32 { self.count }

    pub fn rows(&self) -> &[Vec<Label>] { &self.labels }

    pub fn get(&self, row: usize, col: usize) -> Option<Label> {
        self.labels.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Applies `f` to every label. `f` must be injective for the result to
    /// describe the same partition.
    pub fn remap<F: Fn(Label) -> Label>(&self, f: F) -> Self {
        Self {
            labels: self.labels.iter()
                .map(|row| row.iter().map(|&l| f(l)).collect())
                .collect(),
            count: self.count,
        }
    }
}
