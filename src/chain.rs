use crate::arena::Id;
use crate::grid::Grid;
use crate::group::GroupId;
use crate::types::*;

pub type ChainId = Id<Chain>;

/// A maximal set of same-colored stones connected through orthogonal
/// adjacency (a "string").
#[derive(Clone, Debug)]
pub struct Chain {
    player: Player,
    stones: Vec<Vertex>,
    group: Option<GroupId>,
    unconditionally_alive: bool,
}

impl Chain {
    pub fn new(player: Player, stones: Vec<Vertex>) -> Self {
        Chain {
            player,
            stones,
            group: None,
            unconditionally_alive: false,
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn stones(&self) -> &[Vertex] {
        &self.stones
    }

    pub fn size(&self) -> usize {
        self.stones.len()
    }

    pub fn group(&self) -> Option<GroupId> {
        self.group
    }

    pub(crate) fn set_group(&mut self, group: Option<GroupId>) {
        self.group = group;
    }

    pub fn is_unconditionally_alive(&self) -> bool {
        self.unconditionally_alive
    }

    pub(crate) fn set_unconditionally_alive(&mut self, alive: bool) {
        self.unconditionally_alive = alive;
    }

    pub(crate) fn push(&mut self, v: Vertex) {
        self.stones.push(v);
    }

    pub(crate) fn absorb(&mut self, other: Chain) {
        debug_assert!(other.player == self.player);
        self.stones.extend(other.stones);
    }

    /// Distinct empty points orthogonally adjacent to the chain.
    pub fn liberties(&self, grid: &Grid) -> Vec<Vertex> {
        let mut seen = VertexSet::new();
        let mut libs = Vec::new();
        for &v in &self.stones {
            for nbr in grid.nobi(v) {
                if grid.is_empty(nbr) && seen.mark(nbr) {
                    libs.push(nbr);
                }
            }
        }
        libs
    }

    pub fn liberty_count(&self, grid: &Grid) -> usize {
        self.liberties(grid).len()
    }

    pub fn is_in_atari(&self, grid: &Grid) -> bool {
        self.liberty_count(grid) == 1
    }
}
