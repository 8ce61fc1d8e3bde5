#![allow(clippy::should_implement_trait)]

//! # Propcheck - minimal property-based testing
//!
//! Propcheck draws random values for a type, checks a boolean invariant
//! (a "property") against many samples, and, on failure, shrinks the
//! failing value to a minimal counterexample using a type-directed
//! reduction strategy.
//!
//! Four pieces cooperate:
//!
//! - [`Property`]: a pure predicate with logical combinators
//!   (`and`/`or`/`not`/`implies`).
//! - [`Generator`]: a pseudorandom value producer with combinators for
//!   constants, ranges, characters, strings, lists, pairs, mapping, and
//!   filtering. Unseeded draws share one process-wide stream; seeded draws
//!   use isolated deterministic streams.
//! - [`Reduction`]: a shrinking strategy mapping a value to an ordered,
//!   simplest-first list of simpler candidates, mirroring the generator
//!   combinators (see the [`reduction`] module).
//! - [`PropertyTest`]: the driver tying generation, evaluation, and
//!   iterative shrinking into a counterexample search.
//!
//! ## Quick Start
//!
//! ```rust
//! use propcheck::{int_range, reduction, Generator, PropertyTest};
//!
//! let test = PropertyTest::new(
//!     "addition commutes",
//!     int_range(-100i64, 100).zip(int_range(-100i64, 100)),
//!     reduction::pair(reduction::int(), reduction::int()),
//!     |&(a, b): &(i64, i64)| a + b == b + a,
//! );
//! assert!(test.check(200).unwrap());
//! ```
//!
//! Generator constructors are re-exported at the crate root; reduction
//! constructors keep their module path (`reduction::int()`,
//! `reduction::vec_of(..)`) since the two families deliberately share
//! names.

pub mod config;
pub mod error;
pub mod generator;
pub mod primitives;
pub mod property;
pub mod reduction;
pub mod rng;
pub mod runner;

pub use config::RunConfig;
pub use error::GenError;
pub use generator::{
    DEFAULT_FILTER_ATTEMPTS, Filter, Generator, Map, PartitionMap, Seeded, Zip,
};
pub use primitives::{
    BoolGenerator, CharGenerator, ConstGenerator, FloatGenerator, IntGenerator, StringGenerator,
    VecGenerator, alpha, alphanum, boolean, combine, constant, float_nonneg, float_range,
    int_nonneg, int_range, string_of, vec_of,
};
pub use property::{AlwaysFalse, AlwaysTrue, Property, always_false, always_true};
pub use reduction::{MAX_CANDIDATES, Reduction};
pub use runner::{PropertyTest, ShrinkResult, execute, execute_with_config};
