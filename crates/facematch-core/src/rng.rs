//! Random sources and the index shuffle used by level generation.

/// Source of uniform random indices.
///
/// The generator never touches a global RNG; everything random flows through
/// this trait so tests can substitute a scripted source.
pub trait RandomSource {
    /// Return an integer in `0..bound`. `bound` is always at least 1.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Return a shuffled `[0, ..., n-1]`.
///
/// Each position `i` is swapped with a partner drawn from the whole range,
/// not from `i..n`, so the result is not uniformly distributed.
///
/// With `require_derangement`, every fixed point `result[i] == i` is then
/// swapped with its cyclic successor. For `n == 1` no derangement exists and
/// the single element stays put.
pub fn shuffled_indices<R: RandomSource + ?Sized>(
    rng: &mut R,
    n: usize,
    require_derangement: bool,
) -> Vec<usize> {
    let mut result: Vec<usize> = (0..n).collect();

    for i in 0..n {
        let j = rng.next_index(n);
        result.swap(i, j);
    }

    if require_derangement {
        for i in 0..n {
            if result[i] == i {
                result.swap(i, (i + 1) % n);
            }
        }
    }

    result
}

/// Simple PRNG, seeded from the platform when no seed is given
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleRng {
    pub fn new() -> Self {
        // getrandom works in the browser through the `js` feature
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        // PCG-like step
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        xorshifted.rotate_right(rot) as u64
    }
}

impl RandomSource for SimpleRng {
    fn next_index(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}

/// Replays a fixed list of draws, cycling when it runs out.
///
/// Each scripted value is reduced modulo the requested bound, so a script
/// written for one bound never produces an out-of-range index.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    draws: Vec<usize>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(draws: Vec<usize>) -> Self {
        Self {
            draws,
            cursor: 0,
        }
    }

    /// Number of draws consumed so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.draws.is_empty() {
            return 0;
        }
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value % bound
    }
}
