// Hole topology for labeled glyphs.
//
// A hole is any background component other than the exterior that shares
// a 4-edge with a glyph. Each background region already carries a single
// label, so collecting distinct neighbor labels in a set counts every hole
// exactly once no matter how many cells of it touch the glyph.

use crate::core::{Grid, Label, LabelGrid, BACKGROUND, FOREGROUND};
use rustc_hash::{FxHashMap, FxHashSet};

/// Glyph label -> set of enclosed background labels it borders.
/// Every foreground label is present, even with an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyIndex {
    holes: FxHashMap<Label, FxHashSet<Label>>,
}

impl AdjacencyIndex {
    pub fn build(grid: &Grid, labels: &LabelGrid, background: Label) -> Self {
        let cells = grid.rows();
        let mut holes: FxHashMap<Label, FxHashSet<Label>> = FxHashMap::default();

        for (r, row) in cells.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value != FOREGROUND { continue; }
                let glyph = labels.rows()[r][c];
                let entry = holes.entry(glyph).or_default();
                for (nr, nc) in grid.neighbors(r, c) {
                    if cells[nr][nc] != BACKGROUND { continue; }
                    let neighbor = labels.rows()[nr][nc];
                    if neighbor != background {
                        entry.insert(neighbor);
                    }
                }
            }
        }

        Self { holes }
    }

    pub fn glyph_count(&self) -> usize { self.holes.len() }

    pub fn glyphs(&self) -> impl Iterator<Item = Label> + '_ {
        self.holes.keys().copied()
    }

    pub fn holes_of(&self, glyph: Label) -> Option<&FxHashSet<Label>> {
        self.holes.get(&glyph)
    }

    pub fn hole_count(&self, glyph: Label) -> Option<usize> {
        self.holes.get(&glyph).map(|s| s.len())
    }

    pub fn hole_counts(&self) -> FxHashMap<Label, usize> {
        self.holes.iter().map(|(&g, s)| (g, s.len())).collect()
    }
}

/// Hole count for every glyph in `grid`.
pub fn count_holes(grid: &Grid, labels: &LabelGrid, background: Label) -> FxHashMap<Label, usize> {
    let index = AdjacencyIndex::build(grid, labels, background);
    for (glyph, holes) in &index.holes {
        log::debug!("glyph {} borders {} hole(s)", glyph, holes.len());
    }
    index.hole_counts()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::background::background_label;
    use crate::topology::label::label_components;

    fn index_for(rows: Vec<Vec<u8>>) -> (AdjacencyIndex, Label) {
        let padded = Grid::new(rows).unwrap().pad();
        let labels = label_components(&padded);
        let bg = background_label(&padded, &labels);
        (AdjacencyIndex::build(&padded, &labels, bg), bg)
    }

    fn sorted_counts(rows: Vec<Vec<u8>>) -> Vec<usize> {
        let (index, _) = index_for(rows);
        let mut counts: Vec<_> = index.hole_counts().into_values().collect();
        counts.sort();
        counts
    }

    #[test]
    fn isolated_pixel_has_no_holes() {
        assert_eq!(sorted_counts(vec![
            vec![0, 0, 0],
            vec![0, 1, 0],
            vec![0, 0, 0],
        ]), vec![0]);
    }

    #[test]
    fn ring_has_one_hole() {
        assert_eq!(sorted_counts(vec![
            vec![1, 1, 1],
            vec![1, 0, 1],
            vec![1, 1, 1],
        ]), vec![1]);
    }

    #[test]
    fn large_hole_counts_once() {
        let mut rows = vec![vec![1u8; 8]; 6];
        for row in rows.iter_mut().take(5).skip(1) {
            for cell in row.iter_mut().take(7).skip(1) {
                *cell = 0;
            }
        }
        assert_eq!(sorted_counts(rows), vec![1]);
    }

    #[test]
    fn figure_eight_has_two_holes() {
        assert_eq!(sorted_counts(vec![
            vec![1, 1, 1],
            vec![1, 0, 1],
            vec![1, 1, 1],
            vec![1, 0, 1],
            vec![1, 1, 1],
        ]), vec![2]);
    }

    #[test]
    fn diagonal_holes_stay_distinct() {
        assert_eq!(sorted_counts(vec![
            vec![1, 1, 1, 1],
            vec![1, 0, 1, 1],
            vec![1, 1, 0, 1],
            vec![1, 1, 1, 1],
        ]), vec![2]);
    }

    #[test]
    fn diagonal_contact_with_exterior_still_encloses() {
        // (1,1) touches the exterior cell (0,0) only at a corner.
        assert_eq!(sorted_counts(vec![
            vec![0, 1, 1],
            vec![1, 0, 1],
            vec![1, 1, 1],
        ]), vec![1]);
    }

    #[test]
    fn gap_in_ring_opens_hole() {
        assert_eq!(sorted_counts(vec![
            vec![1, 1, 1],
            vec![1, 0, 0],
            vec![1, 1, 1],
        ]), vec![0]);
    }

    #[test]
    fn glyph_inside_hole_borders_it_too() {
        // Both the ring and the dot touch the same enclosed region.
        assert_eq!(sorted_counts(vec![
            vec![1, 1, 1, 1, 1],
            vec![1, 0, 0, 0, 1],
            vec![1, 0, 1, 0, 1],
            vec![1, 0, 0, 0, 1],
            vec![1, 1, 1, 1, 1],
        ]), vec![1, 1]);
    }

    #[test]
    fn exterior_never_in_adjacency() {
        let (index, bg) = index_for(vec![
            vec![1, 1, 1, 0, 1],
            vec![1, 0, 1, 0, 0],
            vec![1, 1, 1, 0, 1],
        ]);
        assert_eq!(index.glyph_count(), 3);
        for glyph in index.glyphs() {
            assert!(!index.holes_of(glyph).unwrap().contains(&bg));
        }
    }

    #[test]
    fn count_holes_keys_every_glyph() {
        // L-shape, a dot and a ring.
        let padded = Grid::new(vec![
            vec![1, 0, 0, 1, 1, 1],
            vec![1, 0, 0, 1, 0, 1],
            vec![1, 1, 0, 1, 1, 1],
            vec![0, 0, 0, 0, 0, 0],
            vec![0, 1, 0, 0, 0, 0],
        ]).unwrap().pad();
        let labels = label_components(&padded);
        let bg = background_label(&padded, &labels);
        let counts = count_holes(&padded, &labels, bg);

        assert_eq!(counts.len(), 3);
        let l_shape = labels.get(1, 1).unwrap();
        let ring = labels.get(1, 4).unwrap();
        let dot = labels.get(5, 2).unwrap();
        assert_eq!(counts[&l_shape], 0);
        assert_eq!(counts[&ring], 1);
        assert_eq!(counts[&dot], 0);
        assert!(!counts.contains_key(&bg));
    }

    #[test]
    fn no_ink_no_entries() {
        let (index, _) = index_for(vec![vec![0, 0], vec![0, 0]]);
        assert_eq!(index.glyph_count(), 0);
        assert_eq!(index.hole_count(1), None);
    }
}
