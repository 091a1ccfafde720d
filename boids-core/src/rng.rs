/// Source of randomness for seeding agents and jitter.
///
/// With the `std` feature every `rand` generator is a `RandomSource`, so
/// `rand::thread_rng()` works in production and `StdRng::seed_from_u64` in
/// tests. `SimpleRng` covers `no_std` targets.
pub trait RandomSource {
    /// Uniform value in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize {
        let index = (self.next_f64() * len as f64) as usize;
        index.min(len - 1)
    }
}

#[cfg(feature = "std")]
impl<R: rand::RngCore + ?Sized> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        use rand::Rng;
        self.gen::<f64>()
    }

    fn next_index(&mut self, len: usize) -> usize {
        use rand::Rng;
        self.gen_range(0..len)
    }
}

/// Simple pseudo-random number generator using LCG (Linear Congruential Generator)
/// This is a basic RNG suitable for embedded systems where we don't need cryptographic quality
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        // LCG parameters from Numerical Recipes
        const A: u32 = 1664525;
        const C: u32 = 1013904223;

        self.state = self.state.wrapping_mul(A).wrapping_add(C);
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_f64(&mut self) -> f64 {
        // 2^32 keeps the result strictly below 1.0
        self.next_u32() as f64 / 4_294_967_296.0
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rng_repeatability() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_f64_range() {
        let mut rng = SimpleRng::new(12345);

        for _ in 0..1000 {
            let val = rng.next_f64();
            assert!((0.0..1.0).contains(&val));
        }
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), rng.next_u32());
    }

    #[test]
    fn test_next_index_in_range() {
        let mut simple = SimpleRng::new(7);
        let mut seeded = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            assert!(simple.next_index(4) < 4);
            assert!(seeded.next_index(4) < 4);
        }
    }

    #[test]
    fn test_rand_generators_are_random_sources() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);

        for _ in 0..10 {
            let val = a.next_f64();
            assert!((0.0..1.0).contains(&val));
            assert_eq!(val, b.next_f64());
        }
    }
}
