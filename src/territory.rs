//! Group health and territory evaluation over a board's current groups.

use crate::board::Board;
use crate::chain::Chain;
use crate::eye::{classify_eye, find_eye_spaces, is_stone_much_weaker, Eye};
use crate::eye_potential::eye_potential;
use crate::grid::Region;
use crate::group::GroupId;
use crate::health::{absolute_health, count_eyes, relative_health};
use crate::life::{find_unconditional_life, LifeAnalysis};
use crate::neighbor::{enemy_neighbors, find_string, occupied_neighbors, NeighborType};
use crate::stats::{EvalStats, Phase};
use crate::types::*;
use log::trace;

const EYE_POINT_SCORE: f32 = 0.1;

impl Board {
    /// Re-evaluates every dirty group, then relative health and empty
    /// regions, and returns the new territory delta (positive favors Black).
    ///
    /// With `is_final` set, empty regions are scored right up to the board
    /// edge regardless of how far the game has progressed.
    pub fn update_territory(&mut self, is_final: bool, stats: &mut EvalStats) -> f32 {
        // Eye detection needs to know which enemy stones are weak before the
        // real health of any group is known, so every group first gets a
        // provisional health as if it had no eyes.
        let strength = self.provisional_strength();
        let ids = self.groups.ids();
        for &gid in &ids {
            if self.groups[gid].is_dirty() {
                self.update_group_eyes_and_health(gid, &strength, stats);
            }
        }

        let timer = stats.start(Phase::RelativeHealth);
        let relative: Vec<(GroupId, f32)> =
            ids.iter().map(|&gid| (gid, self.relative_health_of(gid))).collect();
        let mut delta = 0.0;
        for (gid, health) in relative {
            let group = &mut self.groups[gid];
            group.relative_health = health;
            group.mark_clean();
            delta += health * group.num_stones() as f32;
            for &s in group.stones() {
                let cell = self.grid.cell_mut(s);
                if let Some(stone) = cell.stone.as_mut() {
                    stone.health = health;
                }
                cell.score = health;
            }
        }
        stats.stop(timer);

        delta += self.update_empty_regions(is_final, stats);
        trace!("territory delta {delta:.3} after move {}", self.move_count);
        self.territory_delta = delta;
        delta
    }

    fn provisional_strength(&self) -> VertexMap<f32> {
        let mut strength = VertexMap::new_with(0.0);
        for (_, group) in self.groups.iter() {
            let liberties = self.group_liberties(group.stones());
            let health =
                absolute_health(group.side(), 0.0, liberties, group.num_stones(), || false);
            for &s in group.stones() {
                strength[s] = health;
            }
        }
        strength
    }

    fn group_liberties(&self, stones: &[Vertex]) -> usize {
        let mut seen = VertexSet::new();
        stones
            .iter()
            .flat_map(|&s| self.grid.nobi(s))
            .filter(|&n| self.grid.is_empty(n) && seen.mark(n))
            .count()
    }

    fn update_group_eyes_and_health(
        &mut self,
        gid: GroupId,
        strength: &VertexMap<f32>,
        stats: &mut EvalStats,
    ) {
        let timer = stats.start(Phase::EyeDetection);
        let group = &self.groups[gid];
        let owner = group.player();
        let stones = group.stones().to_vec();
        let chain_ids = group.chains().to_vec();
        let group_health = stones.first().map_or(0.0, |&s| strength[s]);

        let grid = &self.grid;
        let is_true_enemy = |v: Vertex| match grid.player_at(v) {
            Some(player) if player != owner => {
                !is_stone_much_weaker(owner, group_health, player, strength[v])
            }
            _ => false,
        };
        let spaces = find_eye_spaces(grid, &mut self.scratch, &stones, owner, &is_true_enemy);
        let classified: Vec<_> = spaces
            .into_iter()
            .map(|members| {
                let (eye_type, key_point) = classify_eye(grid, &members, owner, &is_true_enemy);
                (members, eye_type, key_point)
            })
            .collect();
        let potential = eye_potential(grid, &stones, owner, &is_true_enemy);

        let mut eye_ids = Vec::with_capacity(classified.len());
        for (members, eye_type, key_point) in classified {
            // A point already claimed by an earlier group's eye stays there.
            if members.iter().any(|&m| self.grid.cell(m).eye.is_some()) {
                continue;
            }
            let id = self.eyes.insert(Eye::new(owner, gid, members.clone(), eye_type, key_point));
            for m in members {
                self.grid.cell_mut(m).eye = Some(id);
            }
            eye_ids.push(id);
        }
        stats.stop(timer);

        let timer = stats.start(Phase::AbsoluteHealth);
        let counted = count_eyes(eye_ids.iter().map(|&e| self.eyes[e].eye_type()));
        let liberties = self.group_liberties(&stones);
        let mut life: Option<LifeAnalysis> = None;
        let eyes = counted.max(potential);
        let health = absolute_health(side(owner), eyes, liberties, stones.len(), || {
            let members: Vec<&[Vertex]> =
                eye_ids.iter().map(|&e| self.eyes[e].members()).collect();
            let analysis =
                find_unconditional_life(&self.grid, &self.chains, gid, &chain_ids, &members);
            let alive = analysis.is_alive();
            life = Some(analysis);
            alive
        });

        for &cid in &chain_ids {
            self.chains[cid].set_unconditionally_alive(false);
        }
        let mut alive = false;
        if let Some(analysis) = life {
            alive = analysis.is_alive();
            for &cid in &analysis.alive_chains {
                self.chains[cid].set_unconditionally_alive(true);
            }
            for (&eid, &eye_alive) in eye_ids.iter().zip(&analysis.alive_eyes) {
                self.eyes[eid].unconditionally_alive = eye_alive;
            }
        }

        let group = &mut self.groups[gid];
        group.eyes = eye_ids;
        group.liberties = liberties;
        group.eye_potential = potential;
        group.counted_eyes = counted;
        group.absolute_health = health;
        group.unconditionally_alive = alive;
        stats.stop(timer);
    }

    // Health pushed toward the extreme by the weakest enemy group bordering
    // this one. Enemy stones sitting in one of our eyes do not count.
    fn relative_health_of(&self, gid: GroupId) -> f32 {
        let group = &self.groups[gid];
        let side = group.side();
        let mut weakest = -side;
        let mut touching = 0;
        for &s in group.stones() {
            let mut touches = false;
            for e in enemy_neighbors(&self.grid, s) {
                if self.grid.cell(e).eye.is_some() {
                    continue;
                }
                touches = true;
                let enemy = self
                    .grid
                    .cell(e)
                    .chain
                    .and_then(|c| self.chains.get(c))
                    .and_then(Chain::group);
                let Some(enemy) = enemy.and_then(|g| self.groups.get(g)) else { continue };
                let health = enemy.absolute_health();
                if side * health > side * weakest {
                    weakest = health;
                }
            }
            if touches {
                touching += 1;
            }
        }
        relative_health(group.absolute_health(), weakest, touching, group.num_stones())
    }

    /// Scores maximal empty regions by the health of the stones around them.
    /// Nothing is scored before the midgame; early on, regions stop one line
    /// short of the edge so the open board does not form one huge region.
    fn update_empty_regions(&mut self, is_final: bool, stats: &mut EvalStats) -> f32 {
        let timer = stats.start(Phase::EmptyRegions);
        for v in self.grid.vertices() {
            if self.grid.is_empty(v) {
                self.grid.cell_mut(v).score = 0.0;
            }
        }
        let size = self.grid.size();
        let mut delta = 0.0;
        if is_final || self.move_count > 2 * size {
            let typical_moves = (size * size - size) as f32;
            let progress = self.move_count as f32 / typical_moves;
            let reach_edge = is_final || progress > self.config.empty_region_edge_threshold;
            let offset = if reach_edge { 0 } else { 1 };
            let bounds = Region {
                min_row: 1 + offset,
                min_col: 1 + offset,
                max_row: size - offset,
                max_col: size - offset,
            };

            for v in self.grid.vertices() {
                let Some(eye) = self.grid.cell(v).eye.and_then(|eid| self.eyes.get(eid)) else {
                    continue;
                };
                let owner = eye.owner();
                self.scratch.mark(v);
                if self.grid.is_empty(v) {
                    let score = EYE_POINT_SCORE * side(owner);
                    self.grid.cell_mut(v).score = score;
                    delta += score;
                }
            }
            for p in bounds.points() {
                let v = p.vertex();
                if !self.grid.is_empty(v) || self.scratch.is_marked(v) {
                    continue;
                }
                let region = find_string(
                    &self.grid,
                    &mut self.scratch,
                    v,
                    Player::Black,
                    NeighborType::Unoccupied,
                    Some(&bounds),
                    false,
                );
                let score = self.region_score(&region);
                for &r in &region {
                    self.grid.cell_mut(r).score = score;
                }
                delta += score * region.len() as f32;
            }
            self.scratch.clear();
        }
        stats.stop(timer);
        delta
    }

    fn region_score(&self, region: &[Vertex]) -> f32 {
        let border = occupied_neighbors(&self.grid, region);
        if border.is_empty() {
            return 0.0;
        }
        let total: f32 = border
            .iter()
            .filter_map(|&s| self.grid.stone(s))
            .map(|stone| stone.health)
            .sum();
        let count = border.len() as f32;
        let average = total / count;
        (average * count / count.max(region.len() as f32)).clamp(-1.0, 1.0)
    }

    /// Points `player` controls. Empty points count by their territory score,
    /// enemy stones by how weak their group is. In the final count every such
    /// point is worth exactly one.
    pub fn territory_estimate(&self, player: Player, is_final: bool) -> i32 {
        let value = |score: f32| if is_final { 1.0 } else { score.abs() };
        let mut total = 0.0f32;
        for v in self.grid.vertices() {
            let cell = self.grid.cell(v);
            match cell.stone {
                None => {
                    if side(player) * cell.score > 0.0 {
                        total += value(cell.score);
                    }
                }
                Some(stone) if stone.player != player => {
                    if side(player) * stone.health >= 0.0 {
                        total += value(stone.health);
                    }
                }
                Some(_) => {}
            }
        }
        total as i32
    }

    /// Marks every stone whose group's health favors the opponent as dead
    /// and counts them, using a final territory evaluation.
    pub fn update_life_and_death(&mut self) {
        let mut stats = EvalStats::new();
        self.update_territory(true, &mut stats);
        self.dead.fill(0);
        for v in self.grid.vertices() {
            if let Some(stone) = self.grid.stone_mut(v) {
                stone.dead = side(stone.player) * stone.health < 0.0;
                if stone.dead {
                    self.dead[stone.player] += 1;
                }
            }
        }
    }

    /// Territory plus prisoners for `player`: stones captured and dead
    /// enemy stones still on the board, with komi for White.
    pub fn final_score(&self, player: Player) -> f32 {
        let mut score = self.territory_estimate(player, true) as f32
            + self.captures[player] as f32
            + self.dead[player.opponent()] as f32;
        if player == Player::White {
            score += self.config.komi;
        }
        score
    }
}
