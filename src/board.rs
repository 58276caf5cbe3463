use crate::arena::Arena;
use crate::chain::{Chain, ChainId};
use crate::config::EngineConfig;
use crate::error::{ConfigError, IllegalMove, InvariantViolation};
use crate::eye::{Eye, EyeType};
use crate::grid::{Grid, Stone};
use crate::group::Group;
use crate::hash::{Hash, ZOBRIST};
use crate::neighbor::{atari_stones, find_group, find_string, nobi_neighbors, NeighborType};
use crate::stats::{EvalStats, Phase};
use crate::types::*;
use log::{debug, trace};
use std::fmt;

// Distance-to-edge value of a point, indexed by line - 1. Lines beyond the
// table are worth nothing.
const LINE_VALUES: [f32; 5] = [-0.5, 0.1, 0.5, 0.3, 0.0];
const CORNER_FACTOR: f32 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CapturedStone {
    pub point: Point,
    pub stone: Stone,
}

/// Everything `undo_move` needs to take a move back.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveRecord {
    player: Player,
    point: Option<Point>,
    captures: Vec<CapturedStone>,
    move_number: usize,
}

impl MoveRecord {
    pub fn player(&self) -> Player {
        self.player
    }

    /// None for a pass.
    pub fn point(&self) -> Option<Point> {
        self.point
    }

    pub fn captures(&self) -> &[CapturedStone] {
        &self.captures
    }

    pub fn num_captures(&self) -> usize {
        self.captures.len()
    }

    pub fn move_number(&self) -> usize {
        self.move_number
    }

    pub fn is_pass(&self) -> bool {
        self.point.is_none()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EyeView {
    pub eye_type: EyeType,
    pub points: Vec<Point>,
    pub key_point: Option<Point>,
    pub unconditionally_alive: bool,
}

/// Read-only copy of one group's evaluation, for rendering and debugging.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupView {
    pub player: Player,
    pub stones: Vec<Point>,
    pub num_chains: usize,
    pub liberties: usize,
    pub eyes: Vec<EyeView>,
    pub eye_potential: f32,
    pub absolute_health: f32,
    pub relative_health: f32,
    pub unconditionally_alive: bool,
}

/// A Go board that keeps its chains, groups and eyes and their health
/// evaluation current after every move.
///
/// Chains are patched on every placement and removal; groups and eyes are
/// rebuilt from scratch and then re-evaluated. A board is not shared between
/// threads; searches work on clones.
#[derive(Clone)]
pub struct Board {
    pub(crate) config: EngineConfig,
    pub(crate) grid: Grid,
    pub(crate) chains: Arena<Chain>,
    pub(crate) groups: Arena<Group>,
    pub(crate) eyes: Arena<Eye>,
    pub(crate) scratch: VertexSet,
    hash: Hash,
    // Position hash before each move, for the ko check and undo.
    history: Vec<Hash>,
    pub(crate) move_count: usize,
    // Stones captured by each player.
    pub(crate) captures: PlayerMap<usize>,
    pub(crate) dead: PlayerMap<usize>,
    pub(crate) territory_delta: f32,
    opening: VertexMap<bool>,
    pub(crate) positional: VertexMap<f32>,
}

impl Board {
    pub fn new() -> Self {
        Self::from_valid_config(EngineConfig::default())
    }

    /// Panics if `size` is outside `2..=19`.
    pub fn with_size(size: usize) -> Self {
        Self::from_valid_config(EngineConfig::with_size(size))
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: EngineConfig) -> Self {
        let grid = Grid::new(config.board_size);
        let opening = opening_pattern(&grid);
        let positional = positional_table(&grid);
        Board {
            config,
            grid,
            chains: Arena::new(),
            groups: Arena::new(),
            eyes: Arena::new(),
            scratch: VertexSet::new(),
            hash: Hash::new(),
            history: Vec::new(),
            move_count: 0,
            captures: PlayerMap::new(),
            dead: PlayerMap::new(),
            territory_delta: 0.0,
            opening,
            positional,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::from_valid_config(self.config.clone());
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn hash(&self) -> Hash {
        self.hash
    }

    /// Stones captured by `player` so far.
    pub fn captures(&self, player: Player) -> usize {
        self.captures[player]
    }

    /// Stones of `player` marked dead by the last `update_life_and_death`.
    pub fn dead_stones(&self, player: Player) -> usize {
        self.dead[player]
    }

    pub fn territory_delta(&self) -> f32 {
        self.territory_delta
    }

    pub fn num_chains(&self) -> usize {
        self.chains.len()
    }

    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    pub fn player_at(&self, point: Point) -> Option<Player> {
        self.grid.vertex(point).and_then(|v| self.grid.player_at(v))
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.grid.vertex(point).and_then(|v| self.grid.stone(v).copied())
    }

    /// Territory contribution of a point, in [-1, 1] toward Black.
    pub fn score_at(&self, point: Point) -> Option<f32> {
        self.grid.vertex(point).map(|v| self.grid.cell(v).score)
    }

    pub fn liberties_at(&self, point: Point) -> Option<usize> {
        let v = self.grid.vertex(point)?;
        let chain = self.chains.get(self.grid.cell(v).chain?)?;
        Some(chain.liberty_count(&self.grid))
    }

    pub fn apply_move(&mut self, point: Point, player: Player) -> Result<MoveRecord, IllegalMove> {
        let mut stats = EvalStats::new();
        self.apply_move_with_stats(point, player, &mut stats)
    }

    /// Places a stone, removes what it captures and re-evaluates the board.
    /// An illegal move leaves the board untouched.
    pub fn apply_move_with_stats(
        &mut self,
        point: Point,
        player: Player,
        stats: &mut EvalStats,
    ) -> Result<MoveRecord, IllegalMove> {
        let v = self.grid.vertex(point).ok_or(IllegalMove::OutOfBounds(point))?;
        if !self.grid.is_empty(v) {
            return Err(IllegalMove::Occupied(point));
        }
        let captured = self.chains_captured_by(v, player);
        if captured.is_empty() && self.is_suicide(v, player) {
            return Err(IllegalMove::Suicidal(point));
        }
        let mut next_hash = self.hash ^ ZOBRIST.stone(player, v);
        for &cid in &captured {
            for &s in self.chains[cid].stones() {
                next_hash ^= ZOBRIST.stone(player.opponent(), s);
            }
        }
        if self.history.last() == Some(&next_hash) {
            return Err(IllegalMove::Ko(point));
        }

        let timer = stats.start(Phase::ChainUpdate);
        self.history.push(self.hash);
        self.grid.place(v, Stone::new(player));
        self.hash ^= ZOBRIST.stone(player, v);
        self.join_chains(v, player);
        let mut captures = Vec::new();
        for cid in captured {
            captures.extend(self.capture_chain(cid));
        }
        captures.sort_by_key(|c| c.point);
        stats.stop(timer);

        self.captures[player] += captures.len();
        self.move_count += 1;
        debug!("move {}: {:?} plays {}", self.move_count, player, point);
        if !captures.is_empty() {
            debug!("{:?} captures {} stones at {}", player, captures.len(), point);
        }
        self.refresh(stats);
        self.check_invariants();
        Ok(MoveRecord {
            player,
            point: Some(point),
            captures,
            move_number: self.move_count,
        })
    }

    pub fn apply_pass(&mut self, player: Player) -> MoveRecord {
        let mut stats = EvalStats::new();
        self.apply_pass_with_stats(player, &mut stats)
    }

    pub fn apply_pass_with_stats(&mut self, player: Player, stats: &mut EvalStats) -> MoveRecord {
        self.history.push(self.hash);
        self.move_count += 1;
        debug!("move {}: {:?} passes", self.move_count, player);
        self.refresh(stats);
        self.check_invariants();
        MoveRecord {
            player,
            point: None,
            captures: Vec::new(),
            move_number: self.move_count,
        }
    }

    pub fn undo_move(&mut self, record: &MoveRecord) -> Result<(), InvariantViolation> {
        let mut stats = EvalStats::new();
        self.undo_move_with_stats(record, &mut stats)
    }

    /// Takes back the last move. Records must be undone in reverse order of
    /// application; anything else is reported as a violation.
    pub fn undo_move_with_stats(
        &mut self,
        record: &MoveRecord,
        stats: &mut EvalStats,
    ) -> Result<(), InvariantViolation> {
        if record.move_number != self.move_count {
            return Err(InvariantViolation::UndoOutOfOrder {
                expected: self.move_count,
                found: record.move_number,
            });
        }
        if let Some(point) = record.point {
            let v = self
                .grid
                .vertex(point)
                .filter(|&v| self.grid.player_at(v) == Some(record.player))
                .ok_or(InvariantViolation::UndoMismatch(point))?;
            if self.captures[record.player] < record.captures.len() {
                return Err(InvariantViolation::UndoMismatch(point));
            }
            for captured in &record.captures {
                let restorable = self
                    .grid
                    .vertex(captured.point)
                    .is_some_and(|cv| self.grid.is_empty(cv));
                if !restorable || captured.stone.player == record.player {
                    return Err(InvariantViolation::CaptureMismatch(captured.point));
                }
            }

            let timer = stats.start(Phase::ChainUpdate);
            self.remove_stone(v);
            for captured in &record.captures {
                let cv = captured.point.vertex();
                self.grid.place(cv, captured.stone);
                self.hash ^= ZOBRIST.stone(captured.stone.player, cv);
            }
            for captured in &record.captures {
                let cv = captured.point.vertex();
                if self.grid.cell(cv).chain.is_none() {
                    self.rebuild_chain(cv);
                }
            }
            stats.stop(timer);
            self.captures[record.player] -= record.captures.len();
        }
        if self.history.pop() != Some(self.hash) {
            return Err(InvariantViolation::HashMismatch);
        }
        self.move_count -= 1;
        debug!("undo move {} by {:?}", record.move_number, record.player);
        self.refresh(stats);
        self.check_invariants();
        Ok(())
    }

    // Enemy chains whose last liberty is `v`.
    fn chains_captured_by(&self, v: Vertex, player: Player) -> Vec<ChainId> {
        let mut captured = Vec::new();
        for n in nobi_neighbors(&self.grid, v, player, NeighborType::Enemy) {
            let Some(cid) = self.grid.cell(n).chain else { continue };
            if !captured.contains(&cid) && self.chains[cid].liberty_count(&self.grid) == 1 {
                captured.push(cid);
            }
        }
        captured
    }

    // Only valid when the move captures nothing.
    fn is_suicide(&self, v: Vertex, player: Player) -> bool {
        self.grid.nobi(v).into_iter().all(|n| match self.grid.player_at(n) {
            None => false,
            Some(owner) if owner == player => self
                .grid
                .cell(n)
                .chain
                .map_or(true, |cid| self.chains[cid].liberty_count(&self.grid) <= 1),
            Some(_) => true,
        })
    }

    fn join_chains(&mut self, v: Vertex, player: Player) {
        let mut friends: Vec<ChainId> = Vec::new();
        for n in nobi_neighbors(&self.grid, v, player, NeighborType::Friend) {
            if let Some(cid) = self.grid.cell(n).chain {
                if !friends.contains(&cid) {
                    friends.push(cid);
                }
            }
        }
        let Some((&keep, rest)) = friends.split_first() else {
            let id = self.chains.insert(Chain::new(player, vec![v]));
            self.grid.cell_mut(v).chain = Some(id);
            return;
        };
        self.chains[keep].push(v);
        self.grid.cell_mut(v).chain = Some(keep);
        for &other in rest {
            let Some(chain) = self.chains.remove(other) else { continue };
            for &s in chain.stones() {
                self.grid.cell_mut(s).chain = Some(keep);
            }
            self.chains[keep].absorb(chain);
        }
    }

    fn capture_chain(&mut self, cid: ChainId) -> Vec<CapturedStone> {
        let Some(chain) = self.chains.remove(cid) else {
            return Vec::new();
        };
        let mut captured = Vec::with_capacity(chain.size());
        for &s in chain.stones() {
            if let Some(stone) = self.grid.remove(s) {
                self.hash ^= ZOBRIST.stone(stone.player, s);
                captured.push(CapturedStone {
                    point: Point::of_vertex(s),
                    stone,
                });
            }
        }
        captured
    }

    // Removes one stone and re-derives the chains its removal may split.
    fn remove_stone(&mut self, v: Vertex) {
        let chain = self.grid.cell(v).chain.and_then(|cid| self.chains.remove(cid));
        if let Some(stone) = self.grid.remove(v) {
            self.hash ^= ZOBRIST.stone(stone.player, v);
        }
        let Some(chain) = chain else { return };
        for &s in chain.stones() {
            if s != v {
                self.grid.cell_mut(s).chain = None;
            }
        }
        for &s in chain.stones() {
            if s != v && self.grid.cell(s).chain.is_none() {
                self.rebuild_chain(s);
            }
        }
    }

    fn rebuild_chain(&mut self, seed: Vertex) {
        let Some(player) = self.grid.player_at(seed) else { return };
        let stones = find_string(
            &self.grid,
            &mut self.scratch,
            seed,
            player,
            NeighborType::Friend,
            None,
            true,
        );
        for &s in &stones {
            if let Some(old) = self.grid.cell(s).chain {
                self.chains.remove(old);
            }
        }
        let id = self.chains.insert(Chain::new(player, stones.clone()));
        for s in stones {
            self.grid.cell_mut(s).chain = Some(id);
        }
        trace!("rebuilt chain at {}", Point::of_vertex(seed));
    }

    fn refresh(&mut self, stats: &mut EvalStats) {
        self.rebuild_groups(stats);
        self.update_territory(false, stats);
    }

    /// Regroups every chain on the board. Eyes belong to groups, so they are
    /// dropped too and every group starts dirty.
    fn rebuild_groups(&mut self, stats: &mut EvalStats) {
        let timer = stats.start(Phase::GroupRebuild);
        self.groups.clear();
        self.eyes.clear();
        for v in self.grid.vertices() {
            self.grid.cell_mut(v).eye = None;
        }
        let atari = atari_stones(&self.grid, &self.chains);
        for v in self.grid.vertices() {
            let Some(player) = self.grid.player_at(v) else { continue };
            if self.scratch.is_marked(v) {
                continue;
            }
            let stones = find_group(&self.grid, &mut self.scratch, &atari, v, false);
            let mut chain_ids: Vec<ChainId> = Vec::new();
            for &s in &stones {
                if let Some(cid) = self.grid.cell(s).chain {
                    if !chain_ids.contains(&cid) {
                        chain_ids.push(cid);
                    }
                }
            }
            let id = self.groups.insert(Group::new(player, chain_ids.clone(), stones));
            for cid in chain_ids {
                self.chains[cid].set_group(Some(id));
            }
        }
        self.scratch.clear();
        trace!("{} chains in {} groups", self.chains.len(), self.groups.len());
        stats.stop(timer);
    }

    /// Cheap move-generation filter: an empty point on the opening pattern
    /// or next to a stone, and not inside an unconditionally alive eye.
    pub fn is_legal_candidate(&self, point: Point) -> bool {
        let Some(v) = self.grid.vertex(point) else {
            return false;
        };
        if !self.grid.is_empty(v) {
            return false;
        }
        let in_alive_eye = self
            .grid
            .cell(v)
            .eye
            .and_then(|eid| self.eyes.get(eid))
            .is_some_and(Eye::is_unconditionally_alive);
        if in_alive_eye {
            return false;
        }
        if self.opening[v] {
            return true;
        }
        (-1..=1).any(|dr| {
            (-1..=1).any(|dc| self.grid.offset(v, dr, dc).is_some_and(|n| self.grid.is_occupied(n)))
        })
    }

    pub fn legal_candidates(&self) -> Vec<Point> {
        self.grid.points().filter(|&p| self.is_legal_candidate(p)).collect()
    }

    pub fn groups_snapshot(&self) -> Vec<GroupView> {
        let mut views: Vec<GroupView> = self
            .groups
            .iter()
            .map(|(_, group)| {
                let mut stones: Vec<Point> =
                    group.stones().iter().map(|&v| Point::of_vertex(v)).collect();
                stones.sort();
                let eyes = group
                    .eyes()
                    .iter()
                    .filter_map(|&eid| self.eyes.get(eid))
                    .map(|eye| {
                        let mut points: Vec<Point> =
                            eye.members().iter().map(|&v| Point::of_vertex(v)).collect();
                        points.sort();
                        EyeView {
                            eye_type: eye.eye_type(),
                            points,
                            key_point: eye.key_point().map(Point::of_vertex),
                            unconditionally_alive: eye.is_unconditionally_alive(),
                        }
                    })
                    .collect();
                GroupView {
                    player: group.player(),
                    stones,
                    num_chains: group.chains().len(),
                    liberties: group.liberties(),
                    eyes,
                    eye_potential: group.eye_potential(),
                    absolute_health: group.absolute_health(),
                    relative_health: group.relative_health(),
                    unconditionally_alive: group.is_unconditionally_alive(),
                }
            })
            .collect();
        views.sort_by_key(|view| view.stones.first().copied());
        views
    }

    /// The snapshot of the group holding the stone at `point`.
    pub fn group_at(&self, point: Point) -> Option<GroupView> {
        self.groups_snapshot().into_iter().find(|view| view.stones.contains(&point))
    }

    fn check_invariants(&self) {
        if !self.config.validate_after_move {
            return;
        }
        if let Err(violation) = self.validate() {
            panic!("board invariant violated: {violation}\n{self}");
        }
    }

    /// Verifies the chain and group partition, liberties, back references,
    /// the scratch set and the position hash.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        if !self.scratch.is_empty() {
            return Err(InvariantViolation::ScratchNotClear(self.scratch.len()));
        }
        let mut hash = Hash::new();
        for p in self.grid.points() {
            let v = p.vertex();
            let cell = self.grid.cell(v);
            let Some(player) = self.grid.player_at(v) else {
                if cell.chain.is_some() || cell.stone.is_some() {
                    return Err(InvariantViolation::StaleHandle(p, "chain"));
                }
                continue;
            };
            hash ^= ZOBRIST.stone(player, v);
            if cell.stone.map(|s| s.player) != Some(player) {
                return Err(InvariantViolation::MixedChain(p));
            }
            let cid = cell.chain.ok_or(InvariantViolation::StoneWithoutChain(p))?;
            let chain = self.chains.get(cid).ok_or(InvariantViolation::StaleHandle(p, "chain"))?;
            if !chain.stones().contains(&v) {
                return Err(InvariantViolation::ChainMembershipMismatch(p));
            }
            if let Some(eid) = cell.eye {
                if !self.eyes.contains(eid) {
                    return Err(InvariantViolation::StaleHandle(p, "eye"));
                }
            }
        }
        if hash != self.hash {
            return Err(InvariantViolation::HashMismatch);
        }

        let mut visited = VertexSet::new();
        for (cid, chain) in self.chains.iter() {
            let &first = chain.stones().first().ok_or(InvariantViolation::EmptyEntity("chain"))?;
            let at = Point::of_vertex(first);
            for &s in chain.stones() {
                if self.grid.player_at(s) != Some(chain.player()) {
                    return Err(InvariantViolation::MixedChain(Point::of_vertex(s)));
                }
                if self.grid.cell(s).chain != Some(cid) {
                    return Err(InvariantViolation::ChainMembershipMismatch(Point::of_vertex(s)));
                }
            }
            let connected = find_string(
                &self.grid,
                &mut visited,
                first,
                chain.player(),
                NeighborType::Friend,
                None,
                true,
            );
            if connected.len() != chain.size() {
                return Err(InvariantViolation::DisconnectedChain(at));
            }
            if chain.liberty_count(&self.grid) == 0 {
                return Err(InvariantViolation::ZeroLiberties(at));
            }
            let gid = chain.group().ok_or(InvariantViolation::ChainWithoutGroup(at))?;
            let group = self.groups.get(gid).ok_or(InvariantViolation::StaleHandle(at, "group"))?;
            if !group.chains().contains(&cid) {
                return Err(InvariantViolation::ChainInTwoGroups(at));
            }
        }
        for (gid, group) in self.groups.iter() {
            if group.chains().is_empty() || group.stones().is_empty() {
                return Err(InvariantViolation::EmptyEntity("group"));
            }
            for &cid in group.chains() {
                let chain = self.chains.get(cid);
                if chain.and_then(Chain::group) != Some(gid) {
                    let at = chain
                        .and_then(|c| c.stones().first())
                        .map_or_else(
                            || Point::of_vertex(group.stones()[0]),
                            |&s| Point::of_vertex(s),
                        );
                    return Err(InvariantViolation::ChainInTwoGroups(at));
                }
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ move_count: {}, hash: {:?} }}", self.move_count, self.hash)?;
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.grid.size();
        write!(f, "   ")?;
        for col in 1..=size {
            write!(f, "{:>2}", col)?;
        }
        writeln!(f)?;
        for row in 1..=size {
            write!(f, "{:>2} ", row)?;
            for col in 1..=size {
                let color = self.grid.color_at(Point::new(row, col).vertex());
                write!(f, " {}", color_to_showboard_char(color))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// Third and fourth lines along every side plus the center point.
fn opening_pattern(grid: &Grid) -> VertexMap<bool> {
    let mut pattern = VertexMap::new_with(false);
    let n = grid.size() as isize;
    let mut mark = |row: isize, col: isize| {
        if let Some(v) = grid.vertex_at(row, col) {
            pattern[v] = true;
        }
    };
    for i in 3..=n - 2 {
        for col in [3, 4, n - 2, n - 3] {
            mark(i, col);
        }
    }
    for j in 5..=n - 4 {
        for row in [3, 4, n - 2, n - 3] {
            mark(row, j);
        }
    }
    mark((n + 1) / 2, (n + 1) / 2);
    pattern
}

fn positional_table(grid: &Grid) -> VertexMap<f32> {
    let size = grid.size();
    let mut table = VertexMap::new_with(0.0);
    for p in grid.points() {
        let row_line = p.row.min(size + 1 - p.row);
        let col_line = p.col.min(size + 1 - p.col);
        let line = row_line.min(col_line);
        let mut value = LINE_VALUES.get(line - 1).copied().unwrap_or(0.0);
        if row_line == col_line {
            value *= CORNER_FACTOR;
        }
        table[p.vertex()] = value;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: usize, col: usize) -> Point {
        Point::new(row, col)
    }

    #[test]
    fn opening_pattern_covers_third_and_fourth_lines() {
        let board = Board::new();
        assert!(board.is_legal_candidate(p(5, 5)));
        assert!(board.is_legal_candidate(p(3, 3)));
        assert!(board.is_legal_candidate(p(4, 7)));
        assert!(!board.is_legal_candidate(p(1, 1)));
        assert!(!board.is_legal_candidate(p(2, 5)));
        assert!(!board.is_legal_candidate(p(10, 5)));
    }

    #[test]
    fn candidates_dilate_around_stones() {
        let mut board = Board::new();
        board.apply_move(p(1, 1), Player::Black).unwrap();
        assert!(board.is_legal_candidate(p(2, 2)));
        assert!(board.is_legal_candidate(p(1, 2)));
        assert!(!board.is_legal_candidate(p(1, 1)));
        assert!(!board.is_legal_candidate(p(1, 3)));
    }

    #[test]
    fn positional_table_favors_third_line() {
        let board = Board::new();
        assert!(board.positional[p(3, 5).vertex()] > board.positional[p(1, 5).vertex()]);
        assert_eq!(board.positional[p(3, 3).vertex()], 0.5 * CORNER_FACTOR);
        assert_eq!(board.positional[p(5, 5).vertex()], 0.0);
    }

    #[test]
    fn joining_merges_neighbor_chains() {
        let mut board = Board::new();
        board.apply_move(p(3, 3), Player::Black).unwrap();
        board.apply_move(p(3, 5), Player::Black).unwrap();
        assert_eq!(board.num_chains(), 2);
        board.apply_move(p(3, 4), Player::Black).unwrap();
        assert_eq!(board.num_chains(), 1);
        assert_eq!(board.liberties_at(p(3, 5)), Some(8));
        board.validate().unwrap();
    }

    #[test]
    fn undo_splits_a_chain_again() {
        let mut board = Board::new();
        board.apply_move(p(3, 3), Player::Black).unwrap();
        board.apply_move(p(3, 5), Player::Black).unwrap();
        let middle = board.apply_move(p(3, 4), Player::Black).unwrap();
        board.undo_move(&middle).unwrap();
        assert_eq!(board.num_chains(), 2);
        assert_eq!(board.liberties_at(p(3, 3)), Some(4));
        board.validate().unwrap();
    }

    #[test]
    fn display_draws_stones() {
        let mut board = Board::with_size(5);
        board.apply_move(p(1, 1), Player::Black).unwrap();
        board.apply_move(p(2, 2), Player::White).unwrap();
        let text = board.to_string();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 6);
        assert!(rows[1].ends_with("# . . . ."));
        assert!(rows[2].ends_with(". O . . ."));
    }

    #[test]
    fn debug_includes_the_diagram() {
        let mut board = Board::with_size(5);
        board.apply_move(p(3, 3), Player::Black).unwrap();
        let text = format!("{board:?}");
        assert!(text.starts_with("Board { move_count: 1"));
        assert!(text.ends_with(&board.to_string()));
    }

    #[test]
    #[should_panic(expected = "board invariant violated")]
    fn pass_runs_the_invariant_check() {
        let config = EngineConfig {
            validate_after_move: true,
            ..EngineConfig::with_size(5)
        };
        let mut board = Board::with_config(config).unwrap();
        board.apply_move(p(3, 3), Player::Black).unwrap();
        board.hash = Hash::default();
        board.apply_pass(Player::White);
    }
}
