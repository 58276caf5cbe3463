// Park-Miller "minimal standard" PRNG. Deterministic across platforms so that
// Zobrist keys and benchmark games are reproducible.
#[derive(Clone)]
pub struct FastRandom {
    seed: u32,
}

impl FastRandom {
    pub fn new(seed: u32) -> Self {
        // Zero is a fixed point of the generator.
        FastRandom { seed: seed.max(1) }
    }

    pub fn get_next_uint(&mut self) -> u32 {
        let lo = 16807u32.wrapping_mul(self.seed & 0xffff);
        let hi = 16807u32.wrapping_mul(self.seed >> 16);
        let lo = lo.wrapping_add((hi & 0x7fff) << 16);
        let lo = lo.wrapping_add(hi >> 15);
        self.seed = (lo & 0x7FFFFFFF).wrapping_add(lo >> 31);
        self.seed
    }

    /// Uniform-ish value in `0..bound`. Panics on a zero bound.
    pub fn next_below(&mut self, bound: usize) -> usize {
        assert!(bound > 0);
        (self.get_next_uint() as u64 * bound as u64 >> 31) as usize
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_below(i + 1);
            items.swap(i, j);
        }
    }
}
