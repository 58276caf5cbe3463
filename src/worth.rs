use crate::board::Board;
use crate::config::Weights;
use crate::stats::{EvalStats, Phase};
use crate::types::*;
use std::ops::AddAssign;

/// Worth reported once the position is beyond the win threshold.
pub const WINNING_VALUE: f64 = 1000.0;

const DEAD_STONE_SCORE: f64 = 2.0;
const EYE_SPACE_SCORE: f64 = 1.0;
// Turns a bad shape count into a fraction of the bad shape weight.
const BAD_SHAPE_NORM: f64 = 6.0;

/// Per-point terms of the board worth, all signed toward Black.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PositionalScore {
    pub dead_stone: f64,
    pub eye_space: f64,
    pub bad_shape: f64,
    pub position: f64,
    pub health: f64,
}

impl PositionalScore {
    pub fn total(&self) -> f64 {
        self.dead_stone + self.eye_space + self.bad_shape + self.position + self.health
    }
}

impl AddAssign for PositionalScore {
    fn add_assign(&mut self, other: Self) {
        self.dead_stone += other.dead_stone;
        self.eye_space += other.eye_space;
        self.bad_shape += other.bad_shape;
        self.position += other.position;
        self.health += other.health;
    }
}

/// Breakdown of one worth evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct WorthInfo {
    pub scale: f64,
    pub stage_boost: f64,
    pub positional: PositionalScore,
    pub capture_score: f64,
    pub territory_delta: f64,
    /// Unclipped worth.
    pub worth: f64,
}

impl Board {
    /// Static evaluation of the position; positive favors Black. Positions
    /// decided beyond the configured threshold report `±WINNING_VALUE`.
    pub fn board_worth(&self, weights: &Weights) -> f64 {
        let mut stats = EvalStats::new();
        self.board_worth_with_stats(weights, &mut stats)
    }

    pub fn board_worth_with_stats(&self, weights: &Weights, stats: &mut EvalStats) -> f64 {
        let worth = self.worth_info(weights, stats).worth;
        let threshold = self.config.win_threshold;
        if worth > threshold {
            WINNING_VALUE
        } else if worth < -threshold {
            -WINNING_VALUE
        } else {
            worth
        }
    }

    pub fn worth_info(&self, weights: &Weights, stats: &mut EvalStats) -> WorthInfo {
        let timer = stats.start(Phase::Worth);
        let size = self.grid.size() as f64;
        let scale = 361.0 / (size * size);
        let stage_boost = self.game_stage_boost();

        let mut positional = PositionalScore::default();
        for v in self.grid.vertices() {
            positional += self.position_score(v, stage_boost, weights);
        }
        let (black, white) = (self.captures[Player::Black], self.captures[Player::White]);
        let capture_score = weights.capture * (black as f64 - white as f64);
        let territory_delta = self.territory_delta as f64;
        let worth = scale * (positional.total() + capture_score + territory_delta);
        stats.stop(timer);
        WorthInfo {
            scale,
            stage_boost,
            positional,
            capture_score,
            territory_delta,
            worth,
        }
    }

    // Positional play matters most in the opening: 2.5 on the first move,
    // falling to 0.5 after twice as many moves as the board has rows.
    fn game_stage_boost(&self) -> f64 {
        let opening_moves = 2.0 * self.grid.size() as f64;
        let remaining = ((opening_moves - self.move_count as f64) / opening_moves).max(0.0);
        0.5 + 2.0 * remaining
    }

    fn position_score(&self, v: Vertex, stage_boost: f64, weights: &Weights) -> PositionalScore {
        let mut score = PositionalScore::default();
        let cell = self.grid.cell(v);
        let eye_owner = cell.eye.and_then(|eid| self.eyes.get(eid)).map(|eye| eye.owner());
        match (cell.stone, eye_owner) {
            (Some(stone), Some(owner)) if stone.player != owner => {
                score.dead_stone = DEAD_STONE_SCORE * side(owner) as f64;
            }
            (None, Some(owner)) => {
                score.eye_space = EYE_SPACE_SCORE * side(owner) as f64;
            }
            (Some(stone), _) => {
                let s = side(stone.player) as f64;
                let bad_shape = self.bad_shape_count(v, stone.player) as f64;
                score.bad_shape = -s * weights.bad_shape * bad_shape / BAD_SHAPE_NORM;
                score.position = s * weights.position * stage_boost * self.positional[v] as f64;
                score.health = weights.health * stone.health as f64;
                let total = score.bad_shape + score.position + score.health;
                if total.abs() > 1.0 {
                    score.bad_shape /= total.abs();
                    score.position /= total.abs();
                    score.health /= total.abs();
                }
            }
            (None, None) => {}
        }
        score
    }

    /// Empty triangles and clumps completed by the stone at `v`: two friendly
    /// stones forming an L with it, the fourth point of the square not held
    /// by the opponent.
    pub(crate) fn bad_shape_count(&self, v: Vertex, player: Player) -> usize {
        let grid = &self.grid;
        let friend_at = |dr: isize, dc: isize| {
            grid.offset(v, dr, dc)
                .is_some_and(|n| grid.player_at(n) == Some(player))
        };
        let not_enemy_at = |dr: isize, dc: isize| {
            grid.offset(v, dr, dc)
                .is_some_and(|n| grid.player_at(n) != Some(player.opponent()))
        };
        let mut count = 0;
        for dr in [-1, 1] {
            if !friend_at(dr, 0) {
                continue;
            }
            for dc in [-1, 1] {
                if friend_at(dr, dc) && not_enemy_at(0, dc) {
                    count += 1;
                }
            }
        }
        count
    }
}
