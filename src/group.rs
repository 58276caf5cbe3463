use crate::arena::Id;
use crate::chain::ChainId;
use crate::eye::EyeId;
use crate::types::*;

pub type GroupId = Id<Group>;

/// Same-colored chains loosely connected through group adjacency, with the
/// evaluation results cached once the group has been evaluated.
#[derive(Clone, Debug)]
pub struct Group {
    player: Player,
    chains: Vec<ChainId>,
    stones: Vec<Vertex>,
    pub(crate) eyes: Vec<EyeId>,
    pub(crate) liberties: usize,
    pub(crate) eye_potential: f32,
    pub(crate) counted_eyes: f32,
    pub(crate) absolute_health: f32,
    pub(crate) relative_health: f32,
    pub(crate) unconditionally_alive: bool,
    dirty: bool,
}

impl Group {
    pub fn new(player: Player, chains: Vec<ChainId>, stones: Vec<Vertex>) -> Self {
        Group {
            player,
            chains,
            stones,
            eyes: Vec::new(),
            liberties: 0,
            eye_potential: 0.0,
            counted_eyes: 0.0,
            absolute_health: 0.0,
            relative_health: 0.0,
            unconditionally_alive: false,
            dirty: true,
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn side(&self) -> f32 {
        side(self.player)
    }

    pub fn chains(&self) -> &[ChainId] {
        &self.chains
    }

    pub fn stones(&self) -> &[Vertex] {
        &self.stones
    }

    pub fn num_stones(&self) -> usize {
        self.stones.len()
    }

    pub fn eyes(&self) -> &[EyeId] {
        &self.eyes
    }

    pub fn liberties(&self) -> usize {
        self.liberties
    }

    pub fn eye_potential(&self) -> f32 {
        self.eye_potential
    }

    pub fn counted_eyes(&self) -> f32 {
        self.counted_eyes
    }

    pub fn absolute_health(&self) -> f32 {
        self.absolute_health
    }

    pub fn relative_health(&self) -> f32 {
        self.relative_health
    }

    pub fn is_unconditionally_alive(&self) -> bool {
        self.unconditionally_alive
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn mark_clean(&mut self) {
        self.dirty = false;
    }
}
