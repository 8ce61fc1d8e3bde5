//! Core generator trait and composition combinators.

use rand::RngCore;
use rand::rngs::StdRng;
use std::sync::Mutex;

use crate::error::GenError;
use crate::rng;

/// Default retry budget for filtered generators.
pub const DEFAULT_FILTER_ATTEMPTS: usize = 1000;

/// A pseudorandom producer of sample values.
///
/// Pseudorandom state is threaded explicitly through every draw: generators
/// hold no hidden stream of their own (except [`Seeded`], which exists to
/// bind one). Every produced value lies within the generator's declared
/// domain.
pub trait Generator {
    /// The type of values this generator produces.
    type Value;

    /// Draw exactly one value, consuming pseudorandom state.
    fn generate(&self, rng: &mut dyn RngCore) -> Result<Self::Value, GenError>;

    /// Apply a pure function to each drawn value.
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Value) -> U,
    {
        Map { inner: self, f }
    }

    /// Redraw until the predicate holds, up to [`DEFAULT_FILTER_ATTEMPTS`]
    /// times; fails with [`GenError::Unsatisfiable`] on exhaustion.
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Value) -> bool,
    {
        Filter {
            inner: self,
            predicate,
            max_attempts: DEFAULT_FILTER_ATTEMPTS,
        }
    }

    /// [`filter`](Generator::filter) with an explicit retry budget.
    fn filter_max_attempts<F>(self, predicate: F, max_attempts: usize) -> Filter<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Value) -> bool,
    {
        Filter {
            inner: self,
            predicate,
            max_attempts,
        }
    }

    /// Apply `on_true` to a drawn value when the predicate holds on it,
    /// else `on_false`.
    fn partition_map<P, F1, F2, U>(
        self,
        predicate: P,
        on_true: F1,
        on_false: F2,
    ) -> PartitionMap<Self, P, F1, F2>
    where
        Self: Sized,
        P: Fn(&Self::Value) -> bool,
        F1: Fn(Self::Value) -> U,
        F2: Fn(Self::Value) -> U,
    {
        PartitionMap {
            inner: self,
            predicate,
            on_true,
            on_false,
        }
    }

    /// Draw from `self` then from `other`, producing a pair. Draw order is
    /// fixed for reproducibility under seeded streams.
    fn zip<G>(self, other: G) -> Zip<Self, G>
    where
        Self: Sized,
        G: Generator,
    {
        Zip {
            left: self,
            right: other,
        }
    }

    /// Bind this generator to an isolated deterministic stream.
    ///
    /// Draws from the wrapper ignore the ambient stream entirely, so a
    /// seeded generator never interferes with the shared stream or with
    /// other seeded generators.
    fn seeded(self, seed: u64) -> Seeded<Self>
    where
        Self: Sized,
    {
        Seeded {
            inner: self,
            stream: Mutex::new(rng::seeded_rng(seed)),
        }
    }
}

/// A generator that maps drawn values through a pure function.
pub struct Map<G, F> {
    inner: G,
    f: F,
}

impl<G, F, U> Generator for Map<G, F>
where
    G: Generator,
    F: Fn(G::Value) -> U,
{
    type Value = U;

    fn generate(&self, rng: &mut dyn RngCore) -> Result<U, GenError> {
        Ok((self.f)(self.inner.generate(rng)?))
    }
}

/// A generator that redraws until a predicate holds, with a bounded retry
/// budget.
pub struct Filter<G, F> {
    inner: G,
    predicate: F,
    max_attempts: usize,
}

impl<G, F> Generator for Filter<G, F>
where
    G: Generator,
    F: Fn(&G::Value) -> bool,
{
    type Value = G::Value;

    fn generate(&self, rng: &mut dyn RngCore) -> Result<G::Value, GenError> {
        for _ in 0..self.max_attempts {
            let value = self.inner.generate(&mut *rng)?;
            if (self.predicate)(&value) {
                return Ok(value);
            }
        }
        Err(GenError::unsatisfiable(self.max_attempts))
    }
}

/// A generator that routes drawn values through one of two functions based
/// on a predicate.
pub struct PartitionMap<G, P, F1, F2> {
    inner: G,
    predicate: P,
    on_true: F1,
    on_false: F2,
}

impl<G, P, F1, F2, U> Generator for PartitionMap<G, P, F1, F2>
where
    G: Generator,
    P: Fn(&G::Value) -> bool,
    F1: Fn(G::Value) -> U,
    F2: Fn(G::Value) -> U,
{
    type Value = U;

    fn generate(&self, rng: &mut dyn RngCore) -> Result<U, GenError> {
        let value = self.inner.generate(rng)?;
        if (self.predicate)(&value) {
            Ok((self.on_true)(value))
        } else {
            Ok((self.on_false)(value))
        }
    }
}

/// A generator that combines two generators into a pair, drawing left
/// before right.
pub struct Zip<L, R> {
    left: L,
    right: R,
}

impl<L, R> Generator for Zip<L, R>
where
    L: Generator,
    R: Generator,
{
    type Value = (L::Value, R::Value);

    fn generate(&self, rng: &mut dyn RngCore) -> Result<(L::Value, R::Value), GenError> {
        let left = self.left.generate(&mut *rng)?;
        let right = self.right.generate(rng)?;
        Ok((left, right))
    }
}

/// A generator bound to its own isolated deterministic stream.
pub struct Seeded<G> {
    inner: G,
    stream: Mutex<StdRng>,
}

impl<G> Generator for Seeded<G>
where
    G: Generator,
{
    type Value = G::Value;

    fn generate(&self, _rng: &mut dyn RngCore) -> Result<G::Value, GenError> {
        let mut stream = match self.stream.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        self.inner.generate(&mut *stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{constant, int_range};

    #[test]
    fn test_map() {
        let generator = int_range(1i64, 5).map(|x| x * 2);
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let value = generator.generate(&mut rng).unwrap();
            assert!((2..=10).contains(&value));
            assert_eq!(value % 2, 0);
        }
    }

    #[test]
    fn test_filter_keeps_only_matching_values() {
        let generator = int_range(0i64, 100).filter(|x| x % 2 == 0);
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let value = generator.generate(&mut rng).unwrap();
            assert_eq!(value % 2, 0);
        }
    }

    #[test]
    fn test_filter_unsatisfiable_fails_instead_of_hanging() {
        let generator = int_range(0i64, 10).filter_max_attempts(|x| *x > 10, 25);
        let mut rng = rand::thread_rng();
        assert_eq!(
            generator.generate(&mut rng),
            Err(GenError::unsatisfiable(25))
        );
    }

    #[test]
    fn test_partition_map() {
        let generator = int_range(-10i64, 10).partition_map(|x| *x >= 0, |x| x, |x| -x);
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let value = generator.generate(&mut rng).unwrap();
            assert!(value >= 0);
        }
    }

    #[test]
    fn test_zip_draws_left_then_right() {
        let generator = constant(1i64).zip(constant("x"));
        let mut rng = rand::thread_rng();
        assert_eq!(generator.generate(&mut rng).unwrap(), (1, "x"));
    }

    #[test]
    fn test_seeded_generators_reproduce_draws() {
        let a = int_range(0i64, 1_000_000).seeded(42);
        let b = int_range(0i64, 1_000_000).seeded(42);
        let mut rng = rand::thread_rng();
        let draws_a: Vec<i64> = (0..10).map(|_| a.generate(&mut rng).unwrap()).collect();
        let draws_b: Vec<i64> = (0..10).map(|_| b.generate(&mut rng).unwrap()).collect();
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn test_seeded_generator_ignores_ambient_stream() {
        let generator = int_range(0i64, 1_000_000).seeded(7);
        let mut rng_a = crate::rng::seeded_rng(1);
        let mut rng_b = crate::rng::seeded_rng(2);
        let a = generator.generate(&mut rng_a).unwrap();
        let generator = int_range(0i64, 1_000_000).seeded(7);
        let b = generator.generate(&mut rng_b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_error_propagates_through_combinators() {
        let generator = int_range(5i64, 1).map(|x| x + 1);
        let mut rng = rand::thread_rng();
        assert!(matches!(
            generator.generate(&mut rng),
            Err(GenError::InvalidRange { .. })
        ));
    }
}
