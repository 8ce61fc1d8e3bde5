//! Pseudorandom stream management.
//!
//! Unseeded generators draw from one process-wide stream whose draws are
//! globally ordered: any two tests drawing from it interleave in call order.
//! Seeded streams are isolated and never interfere with each other or with
//! the shared stream.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Mutex, MutexGuard, OnceLock};

/// Trait for providing random number generators.
pub trait RngProvider {
    /// The type of RNG this provider creates.
    type Rng: rand::RngCore;

    /// Create a new RNG instance with an optional seed.
    fn create(&self, seed: Option<u64>) -> Self::Rng;
}

/// Default RNG provider backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct DefaultRngProvider;

impl RngProvider for DefaultRngProvider {
    type Rng = StdRng;

    fn create(&self, seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

static SHARED_STREAM: OnceLock<Mutex<StdRng>> = OnceLock::new();

/// The process-wide shared stream, created from entropy at first use.
pub fn shared_stream() -> &'static Mutex<StdRng> {
    SHARED_STREAM.get_or_init(|| Mutex::new(DefaultRngProvider.create(None)))
}

/// Lock the shared stream for one or more draws.
///
/// A poisoned lock is recovered rather than propagated: the stream holds no
/// invariant beyond its pseudorandom state.
pub fn lock_shared() -> MutexGuard<'static, StdRng> {
    match shared_stream().lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Create an isolated deterministic stream for reproducible draws.
pub fn seeded_rng(seed: u64) -> StdRng {
    DefaultRngProvider.create(Some(seed))
}
