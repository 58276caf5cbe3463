//! Benson's algorithm for unconditional life.

use crate::arena::Arena;
use crate::chain::{Chain, ChainId};
use crate::grid::Grid;
use crate::group::GroupId;
use crate::neighbor::{nobi_neighbors, NeighborType};
use crate::types::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LifeAnalysis {
    /// Chains of the group that cannot be captured even if the opponent
    /// moves repeatedly.
    pub alive_chains: Vec<ChainId>,
    /// Per input eye, whether it is a vital region of the alive chains.
    pub alive_eyes: Vec<bool>,
}

impl LifeAnalysis {
    pub fn is_alive(&self) -> bool {
        !self.alive_chains.is_empty()
    }
}

/// Runs the fixed point over one group's chains and eyes.
///
/// An eye only counts for a chain if every empty point in it touches that
/// chain, and an eye touching a chain of another group counts for nobody.
/// Chains with fewer than two such eyes, all of whose bordering chains are
/// still candidates, are dropped until nothing changes.
pub fn find_unconditional_life(
    grid: &Grid,
    chains: &Arena<Chain>,
    group: GroupId,
    group_chains: &[ChainId],
    eyes: &[&[Vertex]],
) -> LifeAnalysis {
    let Some(&first) = group_chains.first() else {
        return LifeAnalysis::default();
    };
    let owner = chains[first].player();
    let chain_at = |v: Vertex| grid.cell(v).chain;

    let eye_neighbors: Vec<Vec<ChainId>> = eyes
        .iter()
        .map(|members| {
            let mut nbrs: Vec<ChainId> = Vec::new();
            for &m in members.iter().filter(|&&m| grid.is_empty(m)) {
                for n in nobi_neighbors(grid, m, owner, NeighborType::Friend) {
                    let Some(cid) = chain_at(n) else { continue };
                    if chains.get(cid).and_then(Chain::group) != Some(group) {
                        return Vec::new();
                    }
                    if !nbrs.contains(&cid) {
                        nbrs.push(cid);
                    }
                }
            }
            nbrs
        })
        .collect();

    let vital: Vec<Vec<usize>> = group_chains
        .iter()
        .map(|&cid| {
            (0..eyes.len())
                .filter(|&e| {
                    eye_neighbors[e].contains(&cid)
                        && every_empty_point_touches(grid, eyes[e], owner, cid)
                })
                .collect()
        })
        .collect();

    let mut candidate = vec![true; group_chains.len()];
    let is_candidate = |candidate: &[bool], cid: &ChainId| {
        group_chains
            .iter()
            .position(|c| c == cid)
            .is_some_and(|i| candidate[i])
    };
    let mut alive_eyes;
    loop {
        alive_eyes = eye_neighbors
            .iter()
            .map(|nbrs| !nbrs.is_empty() && nbrs.iter().all(|c| is_candidate(&candidate, c)))
            .collect::<Vec<_>>();
        let mut dropped = false;
        for (i, eyes_of_chain) in vital.iter().enumerate() {
            if candidate[i] && eyes_of_chain.iter().filter(|&&e| alive_eyes[e]).count() < 2 {
                candidate[i] = false;
                dropped = true;
            }
        }
        if !dropped {
            break;
        }
    }

    let alive_chains: Vec<ChainId> = group_chains
        .iter()
        .zip(&candidate)
        .filter(|(_, alive)| **alive)
        .map(|(&cid, _)| cid)
        .collect();
    if alive_chains.is_empty() {
        alive_eyes.fill(false);
    }
    LifeAnalysis {
        alive_chains,
        alive_eyes,
    }
}

fn every_empty_point_touches(
    grid: &Grid,
    members: &[Vertex],
    owner: Player,
    chain: ChainId,
) -> bool {
    members.iter().filter(|&&m| grid.is_empty(m)).all(|&m| {
        nobi_neighbors(grid, m, owner, NeighborType::Friend)
            .iter()
            .any(|&n| grid.cell(n).chain == Some(chain))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Stone;
    use crate::group::Group;
    use crate::neighbor::find_string;

    struct Fixture {
        grid: Grid,
        chains: Arena<Chain>,
        group: GroupId,
        chain_ids: Vec<ChainId>,
    }

    // One group holding every black stone, one chain per string.
    fn fixture(black: &[(usize, usize)], white: &[(usize, usize)]) -> Fixture {
        let mut grid = Grid::new(9);
        for &(r, c) in black {
            grid.place(Point::new(r, c).vertex(), Stone::new(Player::Black));
        }
        for &(r, c) in white {
            grid.place(Point::new(r, c).vertex(), Stone::new(Player::White));
        }
        let mut groups = Arena::new();
        let group = groups.insert(Group::new(Player::Black, Vec::new(), Vec::new()));
        let mut chains = Arena::new();
        let mut chain_ids = Vec::new();
        let mut visited = VertexSet::new();
        for &(r, c) in black {
            let v = Point::new(r, c).vertex();
            if visited.is_marked(v) {
                continue;
            }
            let stones = find_string(
                &grid,
                &mut visited,
                v,
                Player::Black,
                NeighborType::Friend,
                None,
                false,
            );
            let mut chain = Chain::new(Player::Black, stones.clone());
            chain.set_group(Some(group));
            let id = chains.insert(chain);
            for s in stones {
                grid.cell_mut(s).chain = Some(id);
            }
            chain_ids.push(id);
        }
        Fixture {
            grid,
            chains,
            group,
            chain_ids,
        }
    }

    fn vs(points: &[(usize, usize)]) -> Vec<Vertex> {
        points.iter().map(|&(r, c)| Point::new(r, c).vertex()).collect()
    }

    #[test]
    fn two_separate_eyes_live() {
        let f = fixture(&[(1, 2), (1, 4), (2, 1), (2, 2), (2, 3), (2, 4)], &[]);
        let (a, b) = (vs(&[(1, 1)]), vs(&[(1, 3)]));
        let eyes = [a.as_slice(), b.as_slice()];
        let life = find_unconditional_life(&f.grid, &f.chains, f.group, &f.chain_ids, &eyes);
        assert!(life.is_alive());
        assert_eq!(life.alive_chains, f.chain_ids);
        assert_eq!(life.alive_eyes, vec![true, true]);
    }

    #[test]
    fn single_eye_is_not_enough() {
        let f = fixture(&[(1, 2), (2, 1), (2, 2)], &[(1, 3), (2, 3), (3, 1), (3, 2)]);
        let eye = vs(&[(1, 1)]);
        let eyes = [eye.as_slice()];
        let life = find_unconditional_life(&f.grid, &f.chains, f.group, &f.chain_ids, &eyes);
        assert!(!life.is_alive());
        assert_eq!(life.alive_eyes, vec![false]);
    }

    #[test]
    fn two_point_eye_counts_when_every_point_touches_the_chain() {
        let f = fixture(&[(1, 3), (2, 1), (2, 2), (2, 3), (1, 5), (2, 4), (2, 5)], &[]);
        let wide = vs(&[(1, 1), (1, 2)]);
        let narrow = vs(&[(1, 4)]);
        let eyes = [wide.as_slice(), narrow.as_slice()];
        let life = find_unconditional_life(&f.grid, &f.chains, f.group, &f.chain_ids, &eyes);
        assert!(life.is_alive());
    }
}
