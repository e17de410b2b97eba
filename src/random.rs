//! Pseudo-random number generation, faithfully ported from `random.c`.
//!
//! Two interchangeable sources are available, selected by [`RngKind`]:
//! the original NETGEN Lehmer generator (bit-exact with the 1989 C
//! reference) and a `rand`-backed variant for callers who don't need
//! cross-language reproducibility.

use rand::{Rng as _, SeedableRng};

use crate::error::NetgenError;

const MULTIPLIER: i64 = 16807;
const MODULUS: i64 = 2_147_483_647;

/// Which pseudo-random source a generator run should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RngKind {
    /// The original NETGEN multiplicative congruential generator.
    #[default]
    Netgen,
    /// A `rand`-backed generator, seeded the same way but not bit-exact
    /// across languages.
    Standard,
}

/// The classic NETGEN Lehmer generator: `i = 7^5 * i mod (2^31 - 1)`.
///
/// Uses `i64` arithmetic throughout so the intermediate `lo -= MODULUS` step,
/// which goes briefly negative, matches the C compiler's signed semantics.
struct NetgenLcg {
    origin_seed: i64,
    previous: i64,
}

impl NetgenLcg {
    fn new(seed: i64) -> Self {
        NetgenLcg {
            origin_seed: seed,
            previous: seed,
        }
    }

    fn set_seed(&mut self, seed: i64) {
        self.origin_seed = seed;
        self.previous = seed;
    }

    fn reset(&mut self) {
        self.previous = self.origin_seed;
    }

    /// Advance the state once, returning the new `previous`.
    fn step(&mut self) -> i64 {
        let hi = MULTIPLIER * (self.previous >> 16);
        let lo_raw = MULTIPLIER * (self.previous & 0xffff);
        let hi = hi + (lo_raw >> 16);
        let mut lo = lo_raw & 0xffff;
        lo += hi >> 15;
        let hi = hi & 0x7fff;
        lo -= MODULUS;
        let mut next = (hi << 16) + lo;
        if next < 0 {
            next += MODULUS;
        }
        self.previous = next;
        next
    }

    /// Generate a value in `[a, b]`. The state always advances, even when
    /// `b <= a` — this is the legacy NETGEN behavior, not an optimization.
    fn next(&mut self, a: i64, b: i64) -> i64 {
        let s = self.step();
        if b <= a { b } else { a + s % (b - a + 1) }
    }
}

/// A `rand`-backed generator used when bit-exactness with the C reference
/// isn't required.
struct StandardRng {
    origin_seed: i64,
    inner: rand::rngs::StdRng,
}

impl StandardRng {
    fn new(seed: i64) -> Self {
        StandardRng {
            origin_seed: seed,
            inner: rand::rngs::StdRng::seed_from_u64(seed as u64),
        }
    }

    fn next(&mut self, a: i64, b: i64) -> i64 {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        self.inner.gen_range(lo..=hi)
    }
}

enum Source {
    Netgen(NetgenLcg),
    Standard(StandardRng),
}

/// The PRNG used throughout generation, wrapping either of the two sources
/// behind one interface so the core algorithm doesn't care which is active.
pub struct Rng {
    source: Source,
}

impl Rng {
    /// Construct a generator of the requested kind, seeded with `seed`.
    ///
    /// `seed` must already be a validated, positive seed — parameter
    /// validation (including the `seed <= 0` entropy fallback of the data
    /// model) happens before a `Rng` is ever constructed.
    pub fn new(kind: RngKind, seed: i64) -> Self {
        let source = match kind {
            RngKind::Netgen => Source::Netgen(NetgenLcg::new(seed)),
            RngKind::Standard => Source::Standard(StandardRng::new(seed)),
        };
        Rng { source }
    }

    /// Reseed and reset to the origin state. Only meaningful for the
    /// `Netgen` source; for `Standard` this reseeds the underlying CSPRNG.
    pub fn set_seed(&mut self, seed: i64) {
        match &mut self.source {
            Source::Netgen(lcg) => lcg.set_seed(seed),
            Source::Standard(rng) => *rng = StandardRng::new(seed),
        }
    }

    /// Restore the state to the seed the generator was constructed with.
    pub fn reset(&mut self) {
        match &mut self.source {
            Source::Netgen(lcg) => lcg.reset(),
            Source::Standard(rng) => {
                *rng = StandardRng::new(rng.origin_seed);
            }
        }
    }

    /// Draw the next value in `[min(a,b), max(a,b)]`, advancing state.
    ///
    /// This is the infallible form used throughout the core generators,
    /// which never pass negative bounds by construction. Prefer
    /// [`Rng::generate`] at an API boundary where the caller's bounds
    /// haven't been validated.
    pub fn next(&mut self, a: i64, b: i64) -> i64 {
        match &mut self.source {
            Source::Netgen(lcg) => lcg.next(a, b),
            Source::Standard(rng) => rng.next(a, b),
        }
    }

    /// Draw the next value, validating that both bounds are non-negative.
    ///
    /// # Errors
    /// Returns [`NetgenError::InvalidBound`] if `a < 0` or `b < 0`.
    pub fn generate(&mut self, a: i64, b: i64) -> Result<i64, NetgenError> {
        if a < 0 || b < 0 {
            return Err(NetgenError::InvalidBound { a, b });
        }
        Ok(self.next(a, b))
    }
}
