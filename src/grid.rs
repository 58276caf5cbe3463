use crate::chain::ChainId;
use crate::eye::EyeId;
use crate::types::*;
use arrayvec::ArrayVec;

/// A stone's cached evaluation state. The owner never changes while the
/// stone is on the board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stone {
    pub player: Player,
    /// Health of the stone's group, in [-1, 1], signed toward Black.
    pub health: f32,
    pub dead: bool,
}

impl Stone {
    pub fn new(player: Player) -> Self {
        Stone {
            player,
            health: 0.0,
            dead: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Cell {
    pub stone: Option<Stone>,
    pub chain: Option<ChainId>,
    pub eye: Option<EyeId>,
    /// Contribution of this point to the territory estimate, in [-1, 1].
    pub score: f32,
}

/// Occupancy and per-point caches of an N×N board, stored in the
/// sentinel-bordered vertex frame.
#[derive(Clone)]
pub struct Grid {
    size: usize,
    color_at: VertexMap<Color>,
    cells: VertexMap<Cell>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        assert!(
            (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size),
            "board size {size} out of range"
        );
        let mut grid = Grid {
            size,
            color_at: VertexMap::new_with(Color::OffBoard),
            cells: VertexMap::new(),
        };
        for p in grid.points() {
            grid.color_at[p.vertex()] = Color::Empty;
        }
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, p: Point) -> bool {
        p.row >= 1 && p.row <= self.size && p.col >= 1 && p.col <= self.size
    }

    pub fn vertex(&self, p: Point) -> Option<Vertex> {
        self.contains(p).then(|| p.vertex())
    }

    /// Vertex at signed one-indexed coordinates, or None off the board.
    pub fn vertex_at(&self, row: isize, col: isize) -> Option<Vertex> {
        let size = self.size as isize;
        if row < 1 || row > size || col < 1 || col > size {
            return None;
        }
        Some(Point::new(row as usize, col as usize).vertex())
    }

    pub fn offset(&self, v: Vertex, d_row: isize, d_col: isize) -> Option<Vertex> {
        let p = Point::of_vertex(v);
        self.vertex_at(p.row as isize + d_row, p.col as isize + d_col)
    }

    /// Every on-board point, row-major.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let size = self.size;
        (1..=size).flat_map(move |row| (1..=size).map(move |col| Point::new(row, col)))
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vertex> {
        self.points().map(Point::vertex)
    }

    pub fn color_at(&self, v: Vertex) -> Color {
        self.color_at[v]
    }

    pub fn player_at(&self, v: Vertex) -> Option<Player> {
        player_of(self.color_at[v])
    }

    pub fn is_empty(&self, v: Vertex) -> bool {
        self.color_at[v] == Color::Empty
    }

    pub fn is_occupied(&self, v: Vertex) -> bool {
        self.player_at(v).is_some()
    }

    pub fn cell(&self, v: Vertex) -> &Cell {
        &self.cells[v]
    }

    pub fn cell_mut(&mut self, v: Vertex) -> &mut Cell {
        &mut self.cells[v]
    }

    pub fn stone(&self, v: Vertex) -> Option<&Stone> {
        self.cells[v].stone.as_ref()
    }

    pub fn stone_mut(&mut self, v: Vertex) -> Option<&mut Stone> {
        self.cells[v].stone.as_mut()
    }

    pub fn place(&mut self, v: Vertex, stone: Stone) {
        debug_assert!(self.is_empty(v));
        self.color_at[v] = Color::from(stone.player);
        let cell = &mut self.cells[v];
        cell.stone = Some(stone);
        cell.chain = None;
        cell.score = 0.0;
    }

    pub fn remove(&mut self, v: Vertex) -> Option<Stone> {
        debug_assert!(self.is_occupied(v));
        self.color_at[v] = Color::Empty;
        let cell = &mut self.cells[v];
        cell.chain = None;
        cell.eye = None;
        cell.score = 0.0;
        cell.stone.take()
    }

    /// On-board orthogonal neighbors.
    pub fn nobi(&self, v: Vertex) -> ArrayVec<Vertex, 4> {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(|(dr, dc)| self.offset(v, dr, dc))
            .collect()
    }

    pub fn is_on_edge(&self, v: Vertex) -> bool {
        let p = Point::of_vertex(v);
        p.row == 1 || p.row == self.size || p.col == 1 || p.col == self.size
    }

    pub fn is_in_corner(&self, v: Vertex) -> bool {
        let p = Point::of_vertex(v);
        (p.row == 1 || p.row == self.size) && (p.col == 1 || p.col == self.size)
    }

    /// Distance to the nearest edge, 1 on the first line.
    pub fn line(&self, p: Point) -> usize {
        p.row.min(p.col).min(self.size + 1 - p.row).min(self.size + 1 - p.col)
    }
}

/// Inclusive rectangle of points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub min_row: usize,
    pub min_col: usize,
    pub max_row: usize,
    pub max_col: usize,
}

impl Region {
    pub fn board(size: usize) -> Self {
        Region {
            min_row: 1,
            min_col: 1,
            max_row: size,
            max_col: size,
        }
    }

    pub fn bounding(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut region = Region {
            min_row: first.row,
            min_col: first.col,
            max_row: first.row,
            max_col: first.col,
        };
        for p in iter {
            region.min_row = region.min_row.min(p.row);
            region.min_col = region.min_col.min(p.col);
            region.max_row = region.max_row.max(p.row);
            region.max_col = region.max_col.max(p.col);
        }
        Some(region)
    }

    pub fn contains(&self, p: Point) -> bool {
        (self.min_row..=self.max_row).contains(&p.row)
            && (self.min_col..=self.max_col).contains(&p.col)
    }

    pub fn width(&self) -> usize {
        self.max_col - self.min_col
    }

    pub fn height(&self) -> usize {
        self.max_row - self.min_row
    }

    /// A box one point thick in either direction cannot enclose anything.
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn is_on_edge(&self, p: Point) -> bool {
        p.row == self.min_row
            || p.row == self.max_row
            || p.col == self.min_col
            || p.col == self.max_col
    }

    pub fn is_on_corner(&self, p: Point) -> bool {
        let on_row_edge = p.row == self.min_row || p.row == self.max_row;
        on_row_edge && (p.col == self.min_col || p.col == self.max_col)
    }

    /// Grows by `amount` on every side, clipped to the board.
    pub fn expanded(&self, amount: usize, size: usize) -> Self {
        Region {
            min_row: self.min_row.saturating_sub(amount).max(1),
            min_col: self.min_col.saturating_sub(amount).max(1),
            max_row: (self.max_row + amount).min(size),
            max_col: (self.max_col + amount).min(size),
        }
    }

    /// Pushes any side within `distance` of the board edge out to that edge.
    pub fn snapped_to_edges(&self, distance: usize, size: usize) -> Self {
        let mut region = *self;
        if region.min_row <= 1 + distance {
            region.min_row = 1;
        }
        if region.min_col <= 1 + distance {
            region.min_col = 1;
        }
        if region.max_row + distance >= size {
            region.max_row = size;
        }
        if region.max_col + distance >= size {
            region.max_col = size;
        }
        region
    }

    pub fn points(&self) -> impl Iterator<Item = Point> {
        let r = *self;
        (r.min_row..=r.max_row)
            .flat_map(move |row| (r.min_col..=r.max_col).map(move |col| Point::new(row, col)))
    }
}
