use crate::fast_random::FastRandom;
use crate::types::*;

/// Zobrist hash of a whole board position. Positional superko is not
/// tracked; the ko check only compares against the position before the
/// previous move.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct Hash {
    hash: u64,
}

impl Hash {
    pub fn new() -> Self {
        Hash { hash: 0 }
    }

    fn random(rng: &mut FastRandom) -> Self {
        // Park-Miller yields 31 bits per draw; overlap four draws to fill 64.
        let mut hash = 0u64;
        for shift in [0, 16, 32, 48] {
            hash ^= (rng.get_next_uint() as u64) << shift;
        }
        Hash { hash }
    }

    pub fn value(self) -> u64 {
        self.hash
    }
}

impl std::ops::BitXorAssign for Hash {
    fn bitxor_assign(&mut self, other: Hash) {
        self.hash ^= other.hash;
    }
}

impl std::ops::BitXor for Hash {
    type Output = Hash;
    fn bitxor(self, other: Hash) -> Hash {
        Hash {
            hash: self.hash ^ other.hash,
        }
    }
}

pub struct Zobrist {
    stones: PlayerMap<VertexMap<Hash>>,
}

impl Zobrist {
    pub fn new() -> Self {
        let mut rng = FastRandom::new(123);
        let mut stones = PlayerMap::<VertexMap<Hash>>::new();
        for pl in Player::all() {
            for v in Vertex::all() {
                stones[pl][v] = Hash::random(&mut rng);
            }
        }
        Zobrist { stones }
    }

    pub fn stone(&self, pl: Player, v: Vertex) -> Hash {
        self.stones[pl][v]
    }
}

lazy_static::lazy_static! {
    pub static ref ZOBRIST: Zobrist = Zobrist::new();
}
