use crate::arena::Arena;
use crate::chain::Chain;
use crate::grid::{Grid, Region};
use crate::types::*;
use arrayvec::ArrayVec;

/// Which points a traversal accepts, relative to a friendly player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NeighborType {
    Occupied,
    Unoccupied,
    Friend,
    Enemy,
    /// Empty or enemy-occupied.
    NotFriend,
    Any,
}

impl NeighborType {
    pub fn accepts(self, grid: &Grid, v: Vertex, friend: Player) -> bool {
        let owner = grid.player_at(v);
        match self {
            NeighborType::Occupied => owner.is_some(),
            NeighborType::Unoccupied => owner.is_none(),
            NeighborType::Friend => owner == Some(friend),
            NeighborType::Enemy => owner == Some(friend.opponent()),
            NeighborType::NotFriend => owner != Some(friend),
            NeighborType::Any => true,
        }
    }
}

pub fn nobi_neighbors(
    grid: &Grid,
    v: Vertex,
    friend: Player,
    kind: NeighborType,
) -> ArrayVec<Vertex, 4> {
    grid.nobi(v)
        .into_iter()
        .filter(|&n| kind.accepts(grid, n, friend))
        .collect()
}

/// Flood fill over orthogonal adjacency from `seed`, accepting points of
/// `kind` that lie inside `bounds`. The seed is always included.
///
/// Found points stay marked in `visited` unless `return_to_unvisited` is set;
/// callers that keep them marked own clearing the set.
pub fn find_string(
    grid: &Grid,
    visited: &mut VertexSet,
    seed: Vertex,
    friend: Player,
    kind: NeighborType,
    bounds: Option<&Region>,
    return_to_unvisited: bool,
) -> Vec<Vertex> {
    debug_assert!(!visited.is_marked(seed));
    let mut found = vec![seed];
    visited.mark(seed);
    let mut next = 0;
    while next < found.len() {
        let v = found[next];
        next += 1;
        for n in grid.nobi(v) {
            if visited.is_marked(n) {
                continue;
            }
            if let Some(bounds) = bounds {
                if !bounds.contains(Point::of_vertex(n)) {
                    continue;
                }
            }
            if kind.accepts(grid, n, friend) {
                visited.mark(n);
                found.push(n);
            }
        }
    }
    if return_to_unvisited {
        for &v in &found {
            visited.unmark(v);
        }
    }
    found
}

/// Stones whose chain has exactly one liberty.
pub fn atari_stones(grid: &Grid, chains: &Arena<Chain>) -> VertexSet {
    let mut atari = VertexSet::new();
    for (_, chain) in chains.iter() {
        if chain.is_in_atari(grid) {
            for &v in chain.stones() {
                atari.mark(v);
            }
        }
    }
    atari
}

const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const JUMPS: [(isize, isize); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];
const KNIGHTS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (1, -2),
    (-1, 2),
    (1, 2),
];

fn is_enemy_at(grid: &Grid, v: Option<Vertex>, friend: Player) -> bool {
    v.is_some_and(|v| grid.player_at(v) == Some(friend.opponent()))
}

fn is_friend_at(grid: &Grid, v: Option<Vertex>, friend: Player) -> bool {
    v.is_some_and(|v| grid.player_at(v) == Some(friend))
}

/// Same-colored stones loosely connected to the stone at `v`: orthogonal
/// neighbors always; diagonals, one-point jumps and knight's moves unless cut
/// by enemy stones. Loose links never start from or end at a stone in atari,
/// so an ataried string always forms a group of its own.
pub fn group_neighbors(grid: &Grid, atari: &VertexSet, v: Vertex) -> ArrayVec<Vertex, 20> {
    let mut out = ArrayVec::new();
    let Some(friend) = grid.player_at(v) else {
        return out;
    };
    out.extend(nobi_neighbors(grid, v, friend, NeighborType::Friend));
    if atari.is_marked(v) {
        return out;
    }
    let linkable = |n: Vertex| grid.player_at(n) == Some(friend) && !atari.is_marked(n);

    for (dr, dc) in DIAGONALS {
        let Some(n) = grid.offset(v, dr, dc) else { continue };
        if !linkable(n) {
            continue;
        }
        let cut = is_enemy_at(grid, grid.offset(v, dr, 0), friend)
            && is_enemy_at(grid, grid.offset(v, 0, dc), friend);
        if !cut {
            out.push(n);
        }
    }
    for (dr, dc) in JUMPS {
        let Some(n) = grid.offset(v, dr, dc) else { continue };
        if linkable(n) && !is_enemy_at(grid, grid.offset(v, dr / 2, dc / 2), friend) {
            out.push(n);
        }
    }
    for (dr, dc) in KNIGHTS {
        let Some(n) = grid.offset(v, dr, dc) else { continue };
        if !linkable(n) {
            continue;
        }
        // The two points the knight's move passes between.
        let (a, b) = if dr.abs() == 2 {
            (grid.offset(v, dr / 2, 0), grid.offset(v, dr / 2, dc))
        } else {
            (grid.offset(v, 0, dc / 2), grid.offset(v, dr, dc / 2))
        };
        if !is_enemy_at(grid, a, friend) && !is_enemy_at(grid, b, friend) {
            out.push(n);
        }
    }
    out
}

/// Enemy stones touching `v` orthogonally, or diagonally unless two friendly
/// stones stand between.
pub fn enemy_neighbors(grid: &Grid, v: Vertex) -> ArrayVec<Vertex, 8> {
    let mut out = ArrayVec::new();
    let Some(friend) = grid.player_at(v) else {
        return out;
    };
    out.extend(nobi_neighbors(grid, v, friend, NeighborType::Enemy));
    for (dr, dc) in DIAGONALS {
        let Some(n) = grid.offset(v, dr, dc) else { continue };
        if grid.player_at(n) != Some(friend.opponent()) {
            continue;
        }
        let blocked = is_friend_at(grid, grid.offset(v, dr, 0), friend)
            && is_friend_at(grid, grid.offset(v, 0, dc), friend);
        if !blocked {
            out.push(n);
        }
    }
    out
}

/// Flood fill over group adjacency from the stone at `seed`.
pub fn find_group(
    grid: &Grid,
    visited: &mut VertexSet,
    atari: &VertexSet,
    seed: Vertex,
    return_to_unvisited: bool,
) -> Vec<Vertex> {
    debug_assert!(grid.is_occupied(seed));
    let mut found = vec![seed];
    visited.mark(seed);
    let mut next = 0;
    while next < found.len() {
        let v = found[next];
        next += 1;
        for n in group_neighbors(grid, atari, v) {
            if visited.mark(n) {
                found.push(n);
            }
        }
    }
    if return_to_unvisited {
        for &v in &found {
            visited.unmark(v);
        }
    }
    found
}

/// Distinct stones orthogonally adjacent to any of `points`.
pub fn occupied_neighbors(grid: &Grid, points: &[Vertex]) -> Vec<Vertex> {
    let mut seen = VertexSet::new();
    let mut out = Vec::new();
    for &v in points {
        for n in grid.nobi(v) {
            if grid.is_occupied(n) && seen.mark(n) {
                out.push(n);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Stone;

    fn grid_with(size: usize, black: &[(usize, usize)], white: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(size);
        for &(r, c) in black {
            grid.place(Point::new(r, c).vertex(), Stone::new(Player::Black));
        }
        for &(r, c) in white {
            grid.place(Point::new(r, c).vertex(), Stone::new(Player::White));
        }
        grid
    }

    fn v(r: usize, c: usize) -> Vertex {
        Point::new(r, c).vertex()
    }

    #[test]
    fn diagonal_is_cut_only_by_two_enemies() {
        let open = grid_with(9, &[(3, 3), (4, 4)], &[(3, 4)]);
        let atari = VertexSet::new();
        assert!(group_neighbors(&open, &atari, v(3, 3)).contains(&v(4, 4)));

        let cut = grid_with(9, &[(3, 3), (4, 4)], &[(3, 4), (4, 3)]);
        assert!(!group_neighbors(&cut, &atari, v(3, 3)).contains(&v(4, 4)));
    }

    #[test]
    fn jump_and_knight_are_cut_by_enemy_between() {
        let atari = VertexSet::new();
        let jump = grid_with(9, &[(5, 3), (5, 5)], &[]);
        assert!(group_neighbors(&jump, &atari, v(5, 3)).contains(&v(5, 5)));
        let blocked = grid_with(9, &[(5, 3), (5, 5)], &[(5, 4)]);
        assert!(!group_neighbors(&blocked, &atari, v(5, 3)).contains(&v(5, 5)));

        let knight = grid_with(9, &[(5, 5), (7, 6)], &[]);
        assert!(group_neighbors(&knight, &atari, v(5, 5)).contains(&v(7, 6)));
        assert!(group_neighbors(&knight, &atari, v(7, 6)).contains(&v(5, 5)));
        let knight_cut = grid_with(9, &[(5, 5), (7, 6)], &[(6, 6)]);
        assert!(!group_neighbors(&knight_cut, &atari, v(5, 5)).contains(&v(7, 6)));
    }

    #[test]
    fn atari_suppresses_loose_links() {
        let grid = grid_with(9, &[(3, 3), (4, 4)], &[]);
        let mut atari = VertexSet::new();
        atari.mark(v(3, 3));
        assert!(group_neighbors(&grid, &atari, v(3, 3)).is_empty());
        assert!(!group_neighbors(&grid, &atari, v(4, 4)).contains(&v(3, 3)));
    }

    #[test]
    fn flood_fill_respects_bounds_and_restores_visited() {
        let grid = grid_with(5, &[(2, 1), (2, 2), (2, 3), (1, 3)], &[]);
        let mut visited = VertexSet::new();
        let region = Region::board(5);
        let empties = find_string(
            &grid,
            &mut visited,
            v(1, 1),
            Player::Black,
            NeighborType::NotFriend,
            Some(&region),
            true,
        );
        assert_eq!(empties.len(), 2);
        assert!(visited.is_empty());

        let stones = find_string(
            &grid,
            &mut visited,
            v(2, 1),
            Player::Black,
            NeighborType::Friend,
            None,
            false,
        );
        assert_eq!(stones.len(), 4);
        assert_eq!(visited.len(), 4);
    }
}
