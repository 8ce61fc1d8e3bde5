//! Generators for primitive value domains and fixed-length collections.

use rand::Rng;
use rand::RngCore;

use crate::error::GenError;
use crate::generator::Generator;

/// The 52-symbol alphabetic table, in simplicity order (earliest = simplest).
pub(crate) const ALPHABETIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The 62-symbol alphanumeric table: the alphabetic table plus digits.
pub(crate) const ALPHANUMERIC: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A generator that always produces the same value.
#[derive(Debug, Clone)]
pub struct ConstGenerator<T> {
    value: T,
}

impl<T: Clone> Generator for ConstGenerator<T> {
    type Value = T;

    fn generate(&self, _rng: &mut dyn RngCore) -> Result<T, GenError> {
        Ok(self.value.clone())
    }
}

/// A Bernoulli generator: true with the configured probability.
#[derive(Debug, Clone)]
pub struct BoolGenerator {
    prob: f64,
}

impl Generator for BoolGenerator {
    type Value = bool;

    fn generate(&self, rng: &mut dyn RngCore) -> Result<bool, GenError> {
        // Total for any prob: never true for prob <= 0, always for prob >= 1.
        Ok(rng.gen_range(0.0..1.0) < self.prob)
    }
}

/// A uniform integer generator over an inclusive range.
///
/// The range is validated at draw time: an empty range fails with
/// [`GenError::InvalidRange`].
#[derive(Debug, Clone)]
pub struct IntGenerator<T> {
    lo: T,
    hi: T,
}

impl<T: Copy> IntGenerator<T> {
    /// Create a generator over `[lo, hi]` inclusive.
    pub fn new(lo: T, hi: T) -> Self {
        Self { lo, hi }
    }
}

macro_rules! impl_int_generator {
    ($($t:ty),* $(,)?) => {
        $(
            impl Generator for IntGenerator<$t> {
                type Value = $t;

                fn generate(&self, rng: &mut dyn RngCore) -> Result<$t, GenError> {
                    if self.lo > self.hi {
                        return Err(GenError::invalid_range(self.lo, self.hi));
                    }
                    Ok(rng.gen_range(self.lo..=self.hi))
                }
            }

            impl IntGenerator<$t> {
                /// Create a generator for the full range of the type.
                pub fn full_range() -> Self {
                    Self::new(<$t>::MIN, <$t>::MAX)
                }
            }
        )*
    };
}

impl_int_generator!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// A uniform floating-point generator over an inclusive range, with the
/// same draw-time range validation as [`IntGenerator`].
#[derive(Debug, Clone)]
pub struct FloatGenerator<T> {
    lo: T,
    hi: T,
}

impl<T: Copy> FloatGenerator<T> {
    /// Create a generator over `[lo, hi]` inclusive.
    pub fn new(lo: T, hi: T) -> Self {
        Self { lo, hi }
    }
}

macro_rules! impl_float_generator {
    ($($t:ty),* $(,)?) => {
        $(
            impl Generator for FloatGenerator<$t> {
                type Value = $t;

                fn generate(&self, rng: &mut dyn RngCore) -> Result<$t, GenError> {
                    if self.lo > self.hi {
                        return Err(GenError::invalid_range(self.lo, self.hi));
                    }
                    Ok(rng.gen_range(self.lo..=self.hi))
                }
            }
        )*
    };
}

impl_float_generator!(f32, f64);

/// A uniform generator over a fixed symbol table.
///
/// Drawing indexes the table directly, so the distribution is exactly
/// uniform over the symbol count.
#[derive(Debug, Clone)]
pub struct CharGenerator {
    symbols: &'static str,
}

impl CharGenerator {
    /// Uniform over the 52 symbols `a`-`z`, `A`-`Z`.
    pub fn alphabetic() -> Self {
        Self { symbols: ALPHABETIC }
    }

    /// Uniform over the 62 symbols `a`-`z`, `A`-`Z`, `0`-`9`.
    pub fn alphanumeric() -> Self {
        Self {
            symbols: ALPHANUMERIC,
        }
    }
}

impl Generator for CharGenerator {
    type Value = char;

    fn generate(&self, rng: &mut dyn RngCore) -> Result<char, GenError> {
        let bytes = self.symbols.as_bytes();
        let index = rng.gen_range(0..bytes.len());
        Ok(bytes[index] as char)
    }
}

/// A string generator drawing exactly `len` characters in draw order.
#[derive(Debug, Clone)]
pub struct StringGenerator<C> {
    len: usize,
    chars: C,
}

impl<C> Generator for StringGenerator<C>
where
    C: Generator<Value = char>,
{
    type Value = String;

    fn generate(&self, rng: &mut dyn RngCore) -> Result<String, GenError> {
        (0..self.len)
            .map(|_| self.chars.generate(&mut *rng))
            .collect()
    }
}

/// A list generator drawing exactly `len` elements in draw order.
#[derive(Debug, Clone)]
pub struct VecGenerator<G> {
    len: usize,
    elem: G,
}

impl<G> Generator for VecGenerator<G>
where
    G: Generator,
{
    type Value = Vec<G::Value>;

    fn generate(&self, rng: &mut dyn RngCore) -> Result<Vec<G::Value>, GenError> {
        (0..self.len)
            .map(|_| self.elem.generate(&mut *rng))
            .collect()
    }
}

/// Create a generator that always yields `value`.
pub fn constant<T: Clone>(value: T) -> ConstGenerator<T> {
    ConstGenerator { value }
}

/// Create a Bernoulli generator: true with probability `prob`.
///
/// Out-of-range `prob` is the caller's responsibility and is not validated.
pub fn boolean(prob: f64) -> BoolGenerator {
    BoolGenerator { prob }
}

/// Create a uniform integer generator over `[lo, hi]` inclusive.
pub fn int_range<T: Copy>(lo: T, hi: T) -> IntGenerator<T> {
    IntGenerator::new(lo, hi)
}

/// Create a uniform integer generator over `[0, n]` inclusive.
///
/// `n < 0` fails with [`GenError::InvalidRange`] at draw time.
pub fn int_nonneg<T>(n: T) -> IntGenerator<T>
where
    T: num_traits::Zero + Copy,
{
    IntGenerator::new(T::zero(), n)
}

/// Create a uniform floating-point generator over `[lo, hi]` inclusive.
pub fn float_range<T: Copy>(lo: T, hi: T) -> FloatGenerator<T> {
    FloatGenerator::new(lo, hi)
}

/// Create a uniform floating-point generator over `[0, n]` inclusive.
pub fn float_nonneg<T>(n: T) -> FloatGenerator<T>
where
    T: num_traits::Zero + Copy,
{
    FloatGenerator::new(T::zero(), n)
}

/// Create a uniform generator over the 52 alphabetic symbols.
pub fn alpha() -> CharGenerator {
    CharGenerator::alphabetic()
}

/// Create a uniform generator over the 62 alphanumeric symbols.
pub fn alphanum() -> CharGenerator {
    CharGenerator::alphanumeric()
}

/// Create a string generator drawing exactly `len` characters from
/// `chars`.
pub fn string_of<C>(len: usize, chars: C) -> StringGenerator<C>
where
    C: Generator<Value = char>,
{
    StringGenerator { len, chars }
}

/// Create a list generator drawing exactly `len` elements from `elem`.
pub fn vec_of<G>(len: usize, elem: G) -> VecGenerator<G>
where
    G: Generator,
{
    VecGenerator { len, elem }
}

/// Create a pair generator drawing from `left` then `right`.
pub fn combine<L, R>(left: L, right: R) -> crate::generator::Zip<L, R>
where
    L: Generator,
    R: Generator,
{
    left.zip(right)
}
