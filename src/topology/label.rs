// Connected-component labeling over a binary grid.
//
// Every maximal 4-connected run of equal-valued cells gets one label,
// background regions included. Labels start at 1 and are handed out in
// raster order of each region's first cell. Only the partition matters to
// callers, never the numeric values.

use crate::core::{Grid, Label, LabelGrid, UNLABELED};
use rustc_hash::FxHashMap;

/// Labels every 4-connected equal-value region of `grid`.
///
/// Traversal uses an explicit stack; a cell is pushed only when it is
/// labeled, so each cell is visited once and call depth stays constant.
pub fn label_components(grid: &Grid) -> LabelGrid {
    let rows = grid.height();
    let cols = grid.width();
    let cells = grid.rows();
    let mut labels = vec![vec![UNLABELED; cols]; rows];
    let mut next: Label = 1;
    let mut stack = Vec::new();

    for r in 0..rows {
        for c in 0..cols {
            if labels[r][c] != UNLABELED { continue; }
            let value = cells[r][c];
            let current = next;
            next += 1;

            labels[r][c] = current;
            stack.push((r, c));

            while let Some((cr, cc)) = stack.pop() {
                for (nr, nc) in grid.neighbors(cr, cc) {
                    if labels[nr][nc] == UNLABELED && cells[nr][nc] == value {
                        labels[nr][nc] = current;
                        stack.push((nr, nc));
                    }
                }
            }
        }
    }

    log::debug!("labeled {}x{} grid into {} components", cols, rows, next - 1);
    LabelGrid::from_parts(labels, next - 1)
}

/// Cell count per label.
pub fn component_sizes(labels: &LabelGrid) -> FxHashMap<Label, usize> {
    let mut sizes: FxHashMap<Label, usize> = FxHashMap::default();
    for &l in labels.rows().iter().flatten() {
        *sizes.entry(l).or_default() += 1;
    }
    sizes
}

/// Cells belonging to one label, in raster order.
pub fn component_cells(labels: &LabelGrid, label: Label) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for (r, row) in labels.rows().iter().enumerate() {
        for (c, &l) in row.iter().enumerate() {
            if l == label {
                cells.push((r, c));
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: Vec<Vec<u8>>) -> Grid {
        Grid::new(rows).unwrap()
    }

    /// True when two cells share a label exactly when they share a region
    /// in `expected` (given as a hand-drawn partition).
    fn same_partition(labels: &LabelGrid, expected: &[Vec<u32>]) -> bool {
        let flat: Vec<_> = labels.rows().iter().flatten().copied().collect();
        let want: Vec<_> = expected.iter().flatten().copied().collect();
        if flat.len() != want.len() { return false; }
        for i in 0..flat.len() {
            for j in 0..flat.len() {
                if (flat[i] == flat[j]) != (want[i] == want[j]) {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn single_cell() {
        let labels = label_components(&grid(vec![vec![1]]));
        assert_eq!(labels.count(), 1);
        assert_eq!(labels.get(0, 0), Some(1));
    }

    #[test]
    fn uniform_grid_is_one_component() {
        let labels = label_components(&grid(vec![vec![0; 4]; 3]));
        assert_eq!(labels.count(), 1);
        assert!(labels.rows().iter().flatten().all(|&l| l == 1));
    }

    #[test]
    fn checkerboard_has_no_diagonal_merges() {
        let labels = label_components(&grid(vec![
            vec![1, 0, 1],
            vec![0, 1, 0],
            vec![1, 0, 1],
        ]));
        assert_eq!(labels.count(), 9);
    }

    #[test]
    fn non_monotonic_paths_merge() {
        // U-shape: the two arms only connect through the bottom row.
        let g = grid(vec![
            vec![1, 0, 1],
            vec![1, 0, 1],
            vec![1, 1, 1],
        ]);
        let labels = label_components(&g);
        assert_eq!(labels.count(), 2);
        assert!(same_partition(&labels, &[
            vec![1, 2, 1],
            vec![1, 2, 1],
            vec![1, 1, 1],
        ]));
    }

    #[test]
    fn spiral_is_single_component() {
        let g = grid(vec![
            vec![1, 1, 1, 1, 1],
            vec![0, 0, 0, 0, 1],
            vec![1, 1, 1, 0, 1],
            vec![1, 0, 0, 0, 1],
            vec![1, 1, 1, 1, 1],
        ]);
        let labels = label_components(&g);
        assert_eq!(labels.count(), 2);
    }

    #[test]
    fn sizes_cover_every_cell() {
        let g = grid(vec![
            vec![0, 1, 1, 0],
            vec![1, 0, 0, 1],
            vec![0, 1, 1, 0],
        ]).pad();
        let labels = label_components(&g);
        let sizes = component_sizes(&labels);
        assert_eq!(sizes.len() as u32, labels.count());
        assert_eq!(sizes.values().sum::<usize>(), g.width() * g.height());
    }

    #[test]
    fn component_cells_match_label() {
        let g = grid(vec![vec![1, 0], vec![1, 1]]);
        let labels = label_components(&g);
        let ink = labels.get(0, 0).unwrap();
        assert_eq!(component_cells(&labels, ink), vec![(0, 0), (1, 0), (1, 1)]);
    }

    #[test]
    fn large_grid_does_not_overflow_stack() {
        let g = grid(vec![vec![1; 512]; 512]);
        let labels = label_components(&g);
        assert_eq!(labels.count(), 1);
    }
}
