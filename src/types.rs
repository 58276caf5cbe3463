use crate::nat_map::NatMap;
use crate::nat_set::NatSet;
use std::fmt;

pub use go_game_types::{Color, Player, Vertex};

pub const MAX_BOARD_SIZE: usize = 19;
pub const MIN_BOARD_SIZE: usize = 2;

// Base trait for natural number types
pub trait Nat: Copy + Clone + Eq + PartialEq + From<usize> + Into<usize> {
    const COUNT: usize;

    fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT as usize).map(Self::from)
    }
}

impl Nat for Player {
    const COUNT: usize = Player::COUNT;
}

impl Nat for Color {
    const COUNT: usize = Color::COUNT;
}

impl Nat for Vertex {
    const COUNT: usize = Vertex::COUNT;
}

/// One-indexed board coordinate. Row 1 is the top edge, column 1 the left edge.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Point { row, col }
    }

    /// The vertex inside the sentinel-bordered frame. Callers must have checked
    /// that the point lies on the board.
    pub fn vertex(self) -> Vertex {
        debug_assert!(self.row >= 1 && self.row <= MAX_BOARD_SIZE);
        debug_assert!(self.col >= 1 && self.col <= MAX_BOARD_SIZE);
        Vertex::from_coords(self.row as isize - 1, self.col as isize - 1)
    }

    pub fn of_vertex(v: Vertex) -> Self {
        Point {
            row: (v.row() as isize + 1) as usize,
            col: (v.column() as isize + 1) as usize,
        }
    }

    /// Manhattan distance, used to tell nobi neighbors apart inside eye spaces.
    pub fn distance(self, other: Point) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

pub fn player_of(color: Color) -> Option<Player> {
    Player::try_from(color).ok()
}

/// +1 for Black, -1 for White. Every health and score value is signed this way.
pub fn side(player: Player) -> f32 {
    if player == Player::Black {
        1.0
    } else {
        -1.0
    }
}

pub fn color_to_showboard_char(color: Color) -> char {
    match color {
        Color::Black => '#',
        Color::White => 'O',
        Color::Empty => '.',
        Color::OffBoard => '$',
    }
}

// Type aliases for maps
pub type PlayerMap<T> = NatMap<{ Player::COUNT }, Player, T>;
pub type VertexMap<T> = NatMap<{ Vertex::COUNT }, Vertex, T>;
pub type VertexSet = NatSet<{ Vertex::COUNT }, Vertex>;
