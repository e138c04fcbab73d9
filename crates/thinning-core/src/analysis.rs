//! Topology measurements on binary grids: connected components and holes.

use std::collections::HashMap;

use ndarray::Array2;

use crate::grid::Grid;

/// Pixel adjacency used when grouping pixels into components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connectivity {
    /// Edge-sharing neighbors only.
    Four,
    /// Edge- and corner-sharing neighbors.
    Eight,
}

impl Connectivity {
    /// Offsets of neighbors already visited in a row-major scan.
    fn preceding(self) -> &'static [(isize, isize)] {
        match self {
            Connectivity::Four => &[(-1, 0), (0, -1)],
            Connectivity::Eight => &[(-1, -1), (-1, 0), (-1, 1), (0, -1)],
        }
    }
}

/// Statistics for a single connected component.
#[derive(Clone, Debug)]
pub struct ComponentStats {
    /// Unique label for this component.
    pub label: u32,
    /// Number of pixels in the component.
    pub area: usize,
    /// Bounding box: (min_row, max_row, min_col, max_col).
    pub bbox: (usize, usize, usize, usize),
}

/// Label the `true` pixels of `mask` with two-pass union-find.
///
/// Returns component statistics sorted by area descending (largest first).
pub fn connected_components(mask: &Array2<bool>, connectivity: Connectivity) -> Vec<ComponentStats> {
    let (h, w) = mask.dim();
    if h == 0 || w == 0 {
        return Vec::new();
    }

    let mut labels = Array2::<u32>::zeros((h, w));
    // Index 0 unused; labels start at 1.
    let mut parent: Vec<u32> = vec![0];

    // Pass 1: provisional labels.
    for row in 0..h {
        for col in 0..w {
            if !mask[[row, col]] {
                continue;
            }

            let mut current = 0u32;
            for &(dr, dc) in connectivity.preceding() {
                let nr = row as isize + dr;
                let nc = col as isize + dc;
                if nr < 0 || nc < 0 || nc >= w as isize {
                    continue;
                }
                let neighbor = labels[[nr as usize, nc as usize]];
                if neighbor == 0 {
                    continue;
                }
                if current == 0 {
                    current = neighbor;
                } else if current != neighbor {
                    union(&mut parent, current, neighbor);
                    current = current.min(neighbor);
                }
            }

            if current == 0 {
                current = parent.len() as u32;
                parent.push(current);
            }
            labels[[row, col]] = current;
        }
    }

    // Flatten parent references.
    for i in 1..parent.len() {
        parent[i] = find(&parent, i as u32);
    }

    // Pass 2: resolve labels and collect stats.
    let mut stats_map = HashMap::<u32, ComponentStats>::new();

    for ((row, col), &lbl) in labels.indexed_iter() {
        if lbl == 0 {
            continue;
        }
        let root = parent[lbl as usize];

        let entry = stats_map.entry(root).or_insert(ComponentStats {
            label: root,
            area: 0,
            bbox: (row, row, col, col),
        });

        entry.area += 1;
        entry.bbox.0 = entry.bbox.0.min(row);
        entry.bbox.1 = entry.bbox.1.max(row);
        entry.bbox.2 = entry.bbox.2.min(col);
        entry.bbox.3 = entry.bbox.3.max(col);
    }

    let mut components: Vec<ComponentStats> = stats_map.into_values().collect();
    components.sort_unstable_by(|a, b| b.area.cmp(&a.area).then(a.label.cmp(&b.label)));
    components
}

/// Number of 8-connected foreground components.
pub fn count_components(grid: &Grid) -> usize {
    connected_components(&grid.to_mask(), Connectivity::Eight).len()
}

/// Number of holes: background regions (4-connected) fully enclosed by foreground.
pub fn count_holes(grid: &Grid) -> usize {
    let (h, w) = (grid.height(), grid.width());
    // A one-pixel background frame joins every border-touching region into
    // a single outside component.
    let padded = Array2::from_shape_fn((h + 2, w + 2), |(row, col)| {
        row == 0
            || col == 0
            || row == h + 1
            || col == w + 1
            || !grid.is_foreground(row - 1, col - 1)
    });
    connected_components(&padded, Connectivity::Four)
        .len()
        .saturating_sub(1)
}

/// Summary of a grid's shape, as printed by the CLI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopologySummary {
    pub foreground: usize,
    pub components: usize,
    pub holes: usize,
    pub has_solid_block: bool,
}

impl TopologySummary {
    pub fn of(grid: &Grid) -> Self {
        Self {
            foreground: grid.foreground_count(),
            components: count_components(grid),
            holes: count_holes(grid),
            has_solid_block: grid.contains_solid_block(),
        }
    }

    /// True when component and hole counts agree.
    pub fn same_topology(&self, other: &TopologySummary) -> bool {
        self.components == other.components && self.holes == other.holes
    }
}

fn find(parent: &[u32], mut x: u32) -> u32 {
    while parent[x as usize] != x {
        x = parent[x as usize];
    }
    x
}

fn union(parent: &mut [u32], a: u32, b: u32) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        // Merge larger root into smaller root to keep labels consistent.
        let (small, big) = if ra < rb { (ra, rb) } else { (rb, ra) };
        parent[big as usize] = small;
    }
}
