use std::path::Path;

use crate::core::{Cell, Grid, GlyphError, Result};

/// Parses a text grid: one row per line, `0`/`1` cells, optional
/// whitespace between cells. Blank lines are skipped. `#` and `.` are
/// accepted as ink and paper.
pub fn parse_text_grid(text: &str) -> Result<Grid> {
    let mut rows = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() { continue; }
        let row: Vec<Cell> = line.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '0' | '.' => Ok(0),
                '1' | '#' => Ok(1),
                other => Err(GlyphError::Parse(format!(
                    "line {}: unexpected character '{}'", line_no + 1, other
                ))),
            })
            .collect::<Result<_>>()?;
        rows.push(row);
    }
    Grid::new(rows)
}

/// Parses a JSON grid: an array of arrays of 0/1 integers.
pub fn parse_json_grid(json: &str) -> Result<Grid> {
    let raw: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| GlyphError::Parse(e.to_string()))?;
    let rows = raw.as_array()
        .ok_or_else(|| GlyphError::Parse("expected an array of rows".into()))?;

    let mut grid = Vec::with_capacity(rows.len());
    for (r, row) in rows.iter().enumerate() {
        let cells = row.as_array()
            .ok_or_else(|| GlyphError::Parse(format!("row {} is not an array", r)))?;
        let parsed = cells.iter().enumerate()
            .map(|(c, v)| {
                v.as_u64()
                    .filter(|&n| n <= u8::MAX as u64)
                    .map(|n| n as Cell)
                    .ok_or_else(|| GlyphError::Parse(format!("cell ({}, {}) is not a small integer", r, c)))
            })
            .collect::<Result<Vec<_>>>()?;
        grid.push(parsed);
    }
    Grid::new(grid)
}

/// Loads a `.json` or text grid file, picking the parser by extension.
pub fn load_grid(path: &Path) -> Result<Grid> {
    let content = std::fs::read_to_string(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => parse_json_grid(&content),
        _ => parse_text_grid(&content),
    }
}

pub fn grid_to_string(grid: &Grid) -> String {
    grid.rows().iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}
