// Glyph recognition pipeline.
//
// raw grid -> padded grid -> labels + exterior label -> hole counts
// -> symbols -> sorted string. Every run owns its intermediate grids;
// nothing is cached between calls.

use serde::Serialize;

use crate::core::{Cell, Grid, Label, LabelGrid, PaddedGrid, Result, FOREGROUND};
use crate::symbols::SymbolTable;
use crate::topology::{background_label, count_holes, label_components};
use rustc_hash::FxHashMap;

/// One recognized ink shape. Coordinates are in the unpadded grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Glyph {
    pub label: Label,
    pub holes: usize,
    pub symbol: char,
    pub area: usize,
    pub min_r: usize,
    pub min_c: usize,
    pub max_r: usize,
    pub max_c: usize,
}

impl Glyph {
    pub fn width(&self) -> usize { self.max_c - self.min_c + 1 }
    pub fn height(&self) -> usize { self.max_r - self.min_r + 1 }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recognition {
    /// Sorted by symbol, then top-left position, then label.
    pub glyphs: Vec<Glyph>,
    pub text: String,
    /// Glyphs whose hole count had no table entry.
    pub unknown: usize,
    pub components: u32,
    pub background: Label,
}

impl Recognition {
    pub fn glyph_count(&self) -> usize { self.glyphs.len() }
}

/// Symbol string for `grid` using the standard table.
pub fn recognize(grid: &Grid) -> String {
    recognize_with(grid, &SymbolTable::standard())
}

pub fn recognize_with(grid: &Grid, table: &SymbolTable) -> String {
    analyze(grid, table).text
}

/// Validates raw rows and recognizes them. Fails on empty or malformed input.
pub fn recognize_rows(rows: Vec<Vec<Cell>>, table: &SymbolTable) -> Result<String> {
    let grid = Grid::new(rows)?;
    Ok(recognize_with(&grid, table))
}

/// Full pipeline with per-glyph detail.
pub fn analyze(grid: &Grid, table: &SymbolTable) -> Recognition {
    let padded = grid.pad();
    let labels = label_components(&padded);
    let background = background_label(&padded, &labels);
    log::debug!("exterior background label {}", background);
    analyze_labeled(&padded, &labels, background, table)
}

/// Everything after labeling. The result depends only on the partition
/// `labels` describes, apart from the `label` fields it reports.
fn analyze_labeled(
    padded: &PaddedGrid,
    labels: &LabelGrid,
    background: Label,
    table: &SymbolTable,
) -> Recognition {
    let holes = count_holes(padded, labels, background);
    let mut glyphs = collect_glyphs(padded, labels, &holes, table);
    glyphs.sort_by_key(|g| (g.symbol, g.min_r, g.min_c, g.label));

    let mut unknown = 0;
    for g in glyphs.iter().filter(|g| !table.is_mapped(g.holes)) {
        unknown += 1;
        log::warn!(
            "glyph at ({}, {}) has {} holes, no symbol mapped; using '{}'",
            g.min_r, g.min_c, g.holes, table.sentinel()
        );
    }

    let text = glyphs.iter().map(|g| g.symbol).collect();
    Recognition { glyphs, text, unknown, components: labels.count(), background }
}

fn collect_glyphs(
    padded: &PaddedGrid,
    labels: &LabelGrid,
    holes: &FxHashMap<Label, usize>,
    table: &SymbolTable,
) -> Vec<Glyph> {
    let mut glyphs: FxHashMap<Label, Glyph> = FxHashMap::default();

    for (r, row) in padded.rows().iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            if value != FOREGROUND { continue; }
            let label = labels.rows()[r][c];
            // padded coordinates of ink are always >= 1
            let (gr, gc) = (r - 1, c - 1);
            let glyph = glyphs.entry(label).or_insert_with(|| {
                let holes = holes.get(&label).copied().unwrap_or(0);
                Glyph {
                    label,
                    holes,
                    symbol: table.symbol_for(holes),
                    area: 0,
                    min_r: gr,
                    min_c: gc,
                    max_r: gr,
                    max_c: gc,
                }
            });
            glyph.area += 1;
            glyph.min_r = glyph.min_r.min(gr);
            glyph.min_c = glyph.min_c.min(gc);
            glyph.max_r = glyph.max_r.max(gr);
            glyph.max_c = glyph.max_c.max(gc);
        }
    }

    glyphs.into_values().collect()
}
