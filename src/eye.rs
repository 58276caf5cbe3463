use crate::arena::Id;
use crate::grid::{Grid, Region};
use crate::group::GroupId;
use crate::neighbor::{find_string, nobi_neighbors, NeighborType};
use crate::types::*;
use log::trace;

pub type EyeId = Id<Eye>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EyeType {
    /// Can be destroyed by the opponent filling a cutting point.
    False,
    True,
    /// Makes two eyes if the owner takes the key point first.
    Big,
    /// Too large to be killed by shape alone.
    Territorial,
}

impl EyeType {
    /// Weight of one eye of this type when counting a group's eyes.
    pub fn eye_value(self) -> f32 {
        match self {
            EyeType::False => 0.19,
            EyeType::True => 1.0,
            EyeType::Big => 1.1,
            EyeType::Territorial => 1.6,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Eye {
    owner: Player,
    group: GroupId,
    members: Vec<Vertex>,
    eye_type: EyeType,
    key_point: Option<Vertex>,
    pub(crate) unconditionally_alive: bool,
}

impl Eye {
    pub fn new(
        owner: Player,
        group: GroupId,
        members: Vec<Vertex>,
        eye_type: EyeType,
        key_point: Option<Vertex>,
    ) -> Self {
        Eye {
            owner,
            group,
            members,
            eye_type,
            key_point,
            unconditionally_alive: false,
        }
    }

    pub fn owner(&self) -> Player {
        self.owner
    }

    pub fn group(&self) -> GroupId {
        self.group
    }

    pub fn members(&self) -> &[Vertex] {
        &self.members
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn eye_type(&self) -> EyeType {
        self.eye_type
    }

    pub fn key_point(&self) -> Option<Vertex> {
        self.key_point
    }

    pub fn is_unconditionally_alive(&self) -> bool {
        self.unconditionally_alive
    }
}

/// An enemy stone only counts as an enemy if it is not much weaker than the
/// group it faces; a much weaker stone is assumed dead. The group's health
/// is floored at 0.3 in its own favor so that weak groups can still own
/// dead stones.
pub fn is_stone_much_weaker(
    owner: Player,
    group_health: f32,
    stone_player: Player,
    stone_health: f32,
) -> bool {
    let health = if owner == Player::Black {
        group_health.max(0.3)
    } else {
        group_health.min(-0.3)
    };
    if stone_player == Player::Black {
        -health - stone_health > 0.7
    } else {
        health + stone_health > 0.7
    }
}

/// Finds the candidate eye regions enclosed by a group's stones.
///
/// Regions of empty or enemy points reachable from the bounding box border
/// are excluded first, except for dead enemy stones, which may sit inside an
/// eye. The remaining empty points seed flood fills bounded by the box; a
/// region touching the box edge away from the board edge is open and
/// rejected.
pub fn find_eye_spaces(
    grid: &Grid,
    visited: &mut VertexSet,
    stones: &[Vertex],
    owner: Player,
    is_true_enemy: &dyn Fn(Vertex) -> bool,
) -> Vec<Vec<Vertex>> {
    visited.clear();
    let Some(bbox) = Region::bounding(stones.iter().map(|&v| Point::of_vertex(v))) else {
        return Vec::new();
    };
    if bbox.is_degenerate() {
        return Vec::new();
    }
    let size = grid.size();

    let mut perimeter = Vec::new();
    if bbox.min_col > 1 {
        perimeter.extend((bbox.min_row..=bbox.max_row).map(|r| Point::new(r, bbox.min_col)));
    }
    if bbox.max_col < size {
        perimeter.extend((bbox.min_row..=bbox.max_row).map(|r| Point::new(r, bbox.max_col)));
    }
    if bbox.min_row > 1 {
        perimeter.extend((bbox.min_col..=bbox.max_col).map(|c| Point::new(bbox.min_row, c)));
    }
    if bbox.max_row < size {
        perimeter.extend((bbox.min_col..=bbox.max_col).map(|c| Point::new(bbox.max_row, c)));
    }
    for p in perimeter {
        let v = p.vertex();
        if visited.is_marked(v) || grid.player_at(v) == Some(owner) {
            continue;
        }
        let outside =
            find_string(grid, visited, v, owner, NeighborType::NotFriend, Some(&bbox), false);
        for s in outside {
            if grid.is_occupied(s) && !is_true_enemy(s) {
                visited.unmark(s);
            }
        }
    }

    // Half-open interior: rows and columns on a bounding-box side that is not
    // the board edge are excluded.
    let inner_min_row = if bbox.min_row > 1 { (bbox.min_row + 1).min(size) } else { 1 };
    let inner_min_col = if bbox.min_col > 1 { (bbox.min_col + 1).min(size) } else { 1 };
    let inner_end_row = if bbox.max_row < size {
        bbox.max_row.max(inner_min_row)
    } else {
        size + 1
    };
    let inner_end_col = if bbox.max_col < size {
        bbox.max_col.max(inner_min_col)
    } else {
        size + 1
    };

    let mut spaces = Vec::new();
    for row in inner_min_row..inner_end_row {
        for col in inner_min_col..inner_end_col {
            let v = Point::new(row, col).vertex();
            if visited.is_marked(v) || !grid.is_empty(v) || grid.cell(v).eye.is_some() {
                continue;
            }
            let region =
                find_string(grid, visited, v, owner, NeighborType::NotFriend, Some(&bbox), false);
            if is_enclosed(grid, &bbox, &region) {
                spaces.push(region);
            } else {
                trace!("rejected open eye space at {}", Point::of_vertex(v));
            }
        }
    }
    visited.clear();
    spaces
}

fn is_enclosed(grid: &Grid, bbox: &Region, region: &[Vertex]) -> bool {
    region.iter().all(|&v| {
        let p = Point::of_vertex(v);
        !bbox.is_on_edge(p) || within_board_edge(grid, bbox, v)
    })
}

// A box-edge point is still enclosed if the box edge coincides with the
// board edge there, and box corners line up with board corners.
fn within_board_edge(grid: &Grid, bbox: &Region, v: Vertex) -> bool {
    grid.is_on_edge(v) && bbox.is_on_corner(Point::of_vertex(v)) == grid.is_in_corner(v)
}

/// Classifies an eye region and finds its key point, if it has one.
pub fn classify_eye(
    grid: &Grid,
    members: &[Vertex],
    owner: Player,
    is_true_enemy: &dyn Fn(Vertex) -> bool,
) -> (EyeType, Option<Vertex>) {
    if members.iter().any(|&v| is_false_eye_point(grid, v, owner, is_true_enemy)) {
        return (EyeType::False, None);
    }
    let size = members.len();
    if size <= 2 {
        return (EyeType::True, None);
    }
    if size < 8 {
        let points: Vec<Point> = members.iter().map(|&v| Point::of_vertex(v)).collect();
        let mut key = 0;
        let mut max = 0;
        let mut sum = 0;
        for (i, p) in points.iter().enumerate() {
            let nbrs = points.iter().filter(|q| p.distance(**q) == 1).count();
            sum += nbrs;
            if nbrs > max {
                key = i;
                max = nbrs;
            }
        }
        let big_shape = match size {
            3 => true,
            // farmer's hat or clump
            4 => (max == 3 && sum == 6) || (max == 2 && sum == 8),
            // bulky or crossed five
            5 => (max == 4 && sum == 8) || (max == 3 && sum == 10),
            // rabbity six
            6 => max == 4 && sum == 12,
            // butterfly seven
            7 => max == 4 && sum == 16,
            _ => false,
        };
        if big_shape {
            let key_point = members[key];
            let eye_type = if grid.is_empty(key_point) { EyeType::Big } else { EyeType::True };
            return (eye_type, Some(key_point));
        }
    }
    (EyeType::Territorial, None)
}

fn is_false_eye_point(
    grid: &Grid,
    v: Vertex,
    owner: Player,
    is_true_enemy: &dyn Fn(Vertex) -> bool,
) -> bool {
    let friends = nobi_neighbors(grid, v, owner, NeighborType::Friend).len();
    if friends < 2 {
        return false;
    }
    let opponent_diagonals = [(-1, -1), (-1, 1), (1, -1), (1, 1)]
        .into_iter()
        .filter(|&(dr, dc)| qualified_opponent_diagonal(grid, v, dr, dc, owner, is_true_enemy))
        .count();
    (opponent_diagonals >= 2 && friends >= 3) || (grid.is_on_edge(v) && opponent_diagonals >= 1)
}

// A strong enemy stone diagonal to the point, with both points between it
// and the point held by the owner.
fn qualified_opponent_diagonal(
    grid: &Grid,
    v: Vertex,
    dr: isize,
    dc: isize,
    owner: Player,
    is_true_enemy: &dyn Fn(Vertex) -> bool,
) -> bool {
    let Some(diag) = grid.offset(v, dr, dc) else {
        return false;
    };
    if grid.player_at(diag) != Some(owner.opponent()) {
        return false;
    }
    let held = |n: Option<Vertex>| n.is_some_and(|n| grid.player_at(n) == Some(owner));
    held(grid.offset(v, dr, 0)) && held(grid.offset(v, 0, dc)) && is_true_enemy(diag)
}
