use crate::grid::{Grid, Region};
use crate::types::*;

// Indexed by run length - 1; longer runs use the last entry.
const EDGE_RUN_POTENTIAL: [f32; 8] = [0.25, 0.35, 0.4, 0.3, 0.2, 0.15, 0.1, 0.05];
const OPEN_RUN_POTENTIAL: [f32; 9] = [0.05, 0.15, 0.2, 0.25, 0.2, 0.15, 0.1, 0.06, 0.05];

/// Estimates how many more eyes a group could make from the open space
/// around it, in `[0, 1.9]`.
///
/// Scans every row and column of the group's bounding box, grown by one,
/// for runs of empty or enemy points. Runs holding a live enemy stone or
/// spanning the whole box contribute nothing.
pub fn eye_potential(
    grid: &Grid,
    stones: &[Vertex],
    owner: Player,
    is_true_enemy: &dyn Fn(Vertex) -> bool,
) -> f32 {
    let size = grid.size();
    let Some(bbox) = Region::bounding(stones.iter().map(|&v| Point::of_vertex(v))) else {
        return 0.0;
    };
    let bbox = bbox.expanded(1, size).snapped_to_edges(1, size);
    let scan = LineScan {
        grid,
        owner,
        is_true_enemy,
        bbox,
    };
    let mut total = 0.0;
    for row in bbox.min_row..=bbox.max_row {
        total += scan.potential(Point::new(row, bbox.min_col), (0, 1));
    }
    for col in bbox.min_col..=bbox.max_col {
        total += scan.potential(Point::new(bbox.min_row, col), (1, 0));
    }
    (total.sqrt() / 1.3).min(1.9)
}

struct LineScan<'a> {
    grid: &'a Grid,
    owner: Player,
    is_true_enemy: &'a dyn Fn(Vertex) -> bool,
    bbox: Region,
}

impl LineScan<'_> {
    fn in_box(&self, p: Point) -> bool {
        p.row <= self.bbox.max_row && p.col <= self.bbox.max_col
    }

    fn potential(&self, start: Point, (d_row, d_col): (usize, usize)) -> f32 {
        let along_rows = d_row == 1;
        let breadth = if along_rows {
            self.bbox.max_row - start.row
        } else {
            self.bbox.max_col - start.col
        };
        let step = |p: Point| Point::new(p.row + d_row, p.col + d_col);
        let size = self.grid.size();

        let mut potential = 0.0;
        let mut pos = start;
        loop {
            let first = pos;
            let mut run = 0;
            let mut contains_enemy = false;
            while self.in_box(pos) && self.grid.player_at(pos.vertex()) != Some(self.owner) {
                let v = pos.vertex();
                if self.grid.is_occupied(v) && (self.is_true_enemy)(v) {
                    contains_enemy = true;
                }
                run += 1;
                pos = step(pos);
            }
            // A run that starts mid-line and stops at a stone is closed off
            // on both sides.
            let bounded = first != start
                && self.grid.vertex(pos).is_some_and(|v| self.grid.is_occupied(v));
            if !contains_enemy && run > 0 && run < breadth {
                let (first_index, end_index) = if along_rows {
                    (first.row, pos.row)
                } else {
                    (first.col, pos.col)
                };
                let table: &[f32] = if first_index == 1 || end_index == size || bounded {
                    &EDGE_RUN_POTENTIAL
                } else {
                    &OPEN_RUN_POTENTIAL
                };
                potential += table[(run - 1).min(table.len() - 1)];
            }
            pos = step(pos);
            if !self.in_box(pos) {
                break;
            }
        }
        potential
    }
}
