//! Reduction strategies: ordered, simplest-first candidate lists for
//! shrinking failing values.
//!
//! A reduction is independent of the generator whose value it shrinks, but
//! it must respect that generator's value domain: shrinking a non-negative
//! integer stays non-negative, shrinking a filtered value can be filtered
//! the same way, and so on. Candidate lists are finite, capped at
//! [`MAX_CANDIDATES`], and repeated application converges: numeric
//! reductions of an already-minimal value yield the empty list.

use std::marker::PhantomData;

use num_traits::{Float, PrimInt, Signed};

use crate::primitives::{ALPHABETIC, ALPHANUMERIC};

/// Upper bound on the number of candidates a single reduction yields.
pub const MAX_CANDIDATES: usize = 1000;

/// A pure mapping from a value to strictly simpler candidate values,
/// simplest first.
pub trait Reduction {
    /// The type of values this reduction shrinks.
    type Value;

    /// Return the ordered candidate list for one value.
    fn reduce(&self, value: &Self::Value) -> Vec<Self::Value>;

    /// Discard candidates failing the predicate, preserving order.
    ///
    /// Used to keep candidates inside the value domain of a filtered
    /// generator.
    fn filter<F>(self, predicate: F) -> FilterReduction<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Value) -> bool,
    {
        FilterReduction {
            inner: self,
            predicate,
        }
    }
}

/// A reduction with no candidates: the type is declared non-shrinkable.
#[derive(Debug, Clone)]
pub struct NoReduction<T> {
    _marker: PhantomData<T>,
}

impl<T> Reduction for NoReduction<T> {
    type Value = T;

    fn reduce(&self, _value: &T) -> Vec<T> {
        Vec::new()
    }
}

/// Integer reduction: candidates in `[-|x|, |x|]` ordered from 0 outward
/// with sign flips, excluding `x` itself.
#[derive(Debug, Clone)]
pub struct IntReduction<T> {
    _marker: PhantomData<T>,
}

impl<T> Reduction for IntReduction<T>
where
    T: PrimInt + Signed,
{
    type Value = T;

    fn reduce(&self, value: &T) -> Vec<T> {
        let x = *value;
        if x == T::zero() {
            return Vec::new();
        }
        // |T::min_value()| overflows; max_value() bounds it instead.
        let bound = if x == T::min_value() {
            T::max_value()
        } else {
            x.abs()
        };
        let mut out = vec![T::zero()];
        let mut v = T::one();
        while v <= bound && out.len() < MAX_CANDIDATES {
            if v != x {
                out.push(v);
            }
            if -v != x && out.len() < MAX_CANDIDATES {
                out.push(-v);
            }
            if v == bound {
                break;
            }
            v = v + T::one();
        }
        out
    }
}

/// Non-negative integer reduction: candidates in `[0, x)` ascending.
#[derive(Debug, Clone)]
pub struct NonNegIntReduction<T> {
    _marker: PhantomData<T>,
}

impl<T> Reduction for NonNegIntReduction<T>
where
    T: PrimInt,
{
    type Value = T;

    fn reduce(&self, value: &T) -> Vec<T> {
        let x = *value;
        if x <= T::zero() {
            return Vec::new();
        }
        let mut out = Vec::new();
        let mut v = T::zero();
        while v < x && out.len() < MAX_CANDIDATES {
            out.push(v);
            v = v + T::one();
        }
        out
    }
}

/// Floating-point reduction: fixed-step decay from 0 outward with sign
/// flips, bounded by `[-|x|, |x|]`.
#[derive(Debug, Clone)]
pub struct FloatReduction<T> {
    step: T,
}

impl<T: Float> FloatReduction<T> {
    /// Use a caller-chosen decay step instead of the default 1.0.
    pub fn with_step(step: T) -> Self {
        Self { step }
    }
}

impl<T> Reduction for FloatReduction<T>
where
    T: Float,
{
    type Value = T;

    fn reduce(&self, value: &T) -> Vec<T> {
        let x = *value;
        if x == T::zero() || x.is_nan() || x.is_infinite() {
            return Vec::new();
        }
        let bound = x.abs();
        let mut out = vec![T::zero()];
        let mut v = self.step;
        while v <= bound && out.len() < MAX_CANDIDATES {
            if v != x {
                out.push(v);
            }
            if -v != x && out.len() < MAX_CANDIDATES {
                out.push(-v);
            }
            v = v + self.step;
        }
        out
    }
}

/// Non-negative floating-point reduction: fixed-step decay in `[0, x)`.
#[derive(Debug, Clone)]
pub struct NonNegFloatReduction<T> {
    step: T,
}

impl<T: Float> NonNegFloatReduction<T> {
    /// Use a caller-chosen decay step instead of the default 1.0.
    pub fn with_step(step: T) -> Self {
        Self { step }
    }
}

impl<T> Reduction for NonNegFloatReduction<T>
where
    T: Float,
{
    type Value = T;

    fn reduce(&self, value: &T) -> Vec<T> {
        let x = *value;
        if x <= T::zero() || x.is_nan() || x.is_infinite() {
            return Vec::new();
        }
        let mut out = vec![T::zero()];
        let mut v = self.step;
        while v < x && out.len() < MAX_CANDIDATES {
            out.push(v);
            v = v + self.step;
        }
        out
    }
}

/// Character reduction against a fixed symbol table: all symbols up to and
/// including the value, in table order, earliest = simplest.
///
/// The inclusive endpoint means the value itself closes the list; the
/// driver's no-progress guard stops shrinking there.
#[derive(Debug, Clone)]
pub struct CharReduction {
    symbols: &'static str,
}

impl CharReduction {
    /// Reduce within the 52-symbol alphabetic table.
    pub fn alphabetic() -> Self {
        Self { symbols: ALPHABETIC }
    }

    /// Reduce within the 62-symbol alphanumeric table.
    pub fn alphanumeric() -> Self {
        Self {
            symbols: ALPHANUMERIC,
        }
    }
}

impl Reduction for CharReduction {
    type Value = char;

    fn reduce(&self, value: &char) -> Vec<char> {
        match self.symbols.chars().position(|c| c == *value) {
            Some(index) => self.symbols.chars().take(index + 1).collect(),
            None => Vec::new(),
        }
    }
}

/// String reduction by positional fan-out of a character reduction.
///
/// With `per_pos[j]` the candidate list for the character at position `j`
/// and `N` the longest such list, candidate `i` keeps `per_pos[j][i]` at
/// every position where it exists and omits the position otherwise. A
/// candidate is never longer than the original, and every kept character is
/// a reduction of the original character at its position.
#[derive(Debug, Clone)]
pub struct StringReduction<C> {
    chars: C,
}

impl<C> Reduction for StringReduction<C>
where
    C: Reduction<Value = char>,
{
    type Value = String;

    fn reduce(&self, value: &String) -> Vec<String> {
        let per_pos: Vec<Vec<char>> = value.chars().map(|c| self.chars.reduce(&c)).collect();
        let fan = per_pos
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .min(MAX_CANDIDATES);
        (0..fan)
            .map(|i| {
                per_pos
                    .iter()
                    .filter_map(|alts| alts.get(i).copied())
                    .collect()
            })
            .collect()
    }
}

/// List reduction by the same positional fan-out as [`StringReduction`].
///
/// Never introduces an element not derived from reducing some original
/// element, and never lengthens the list.
#[derive(Debug, Clone)]
pub struct VecReduction<R> {
    elem: R,
}

impl<R> Reduction for VecReduction<R>
where
    R: Reduction,
    R::Value: Clone,
{
    type Value = Vec<R::Value>;

    fn reduce(&self, value: &Vec<R::Value>) -> Vec<Vec<R::Value>> {
        let per_pos: Vec<Vec<R::Value>> = value.iter().map(|e| self.elem.reduce(e)).collect();
        let fan = per_pos
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .min(MAX_CANDIDATES);
        (0..fan)
            .map(|i| {
                per_pos
                    .iter()
                    .filter_map(|alts| alts.get(i).cloned())
                    .collect()
            })
            .collect()
    }
}

/// Pair reduction by wrap-around zip: `max(|A|, |B|)` candidates, with
/// candidate `i = (A[i mod |A|], B[i mod |B|])`. A side with no candidates
/// contributes its original component unchanged.
#[derive(Debug, Clone)]
pub struct PairReduction<A, B> {
    left: A,
    right: B,
}

impl<A, B> Reduction for PairReduction<A, B>
where
    A: Reduction,
    B: Reduction,
    A::Value: Clone,
    B::Value: Clone,
{
    type Value = (A::Value, B::Value);

    fn reduce(&self, value: &(A::Value, B::Value)) -> Vec<(A::Value, B::Value)> {
        let lhs = self.left.reduce(&value.0);
        let rhs = self.right.reduce(&value.1);
        let n = lhs.len().max(rhs.len()).min(MAX_CANDIDATES);
        (0..n)
            .map(|i| {
                let left = if lhs.is_empty() {
                    value.0.clone()
                } else {
                    lhs[i % lhs.len()].clone()
                };
                let right = if rhs.is_empty() {
                    value.1.clone()
                } else {
                    rhs[i % rhs.len()].clone()
                };
                (left, right)
            })
            .collect()
    }
}

/// A reduction whose candidates are filtered through a predicate.
pub struct FilterReduction<R, F> {
    inner: R,
    predicate: F,
}

impl<R, F> Reduction for FilterReduction<R, F>
where
    R: Reduction,
    F: Fn(&R::Value) -> bool,
{
    type Value = R::Value;

    fn reduce(&self, value: &R::Value) -> Vec<R::Value> {
        self.inner
            .reduce(value)
            .into_iter()
            .filter(|candidate| (self.predicate)(candidate))
            .collect()
    }
}

/// Create a reduction with no candidates.
pub fn empty<T>() -> NoReduction<T> {
    NoReduction {
        _marker: PhantomData,
    }
}

/// Create the integer reduction.
pub fn int<T>() -> IntReduction<T> {
    IntReduction {
        _marker: PhantomData,
    }
}

/// Create the non-negative integer reduction.
pub fn int_nonneg<T>() -> NonNegIntReduction<T> {
    NonNegIntReduction {
        _marker: PhantomData,
    }
}

/// Create the floating-point reduction with the default step of 1.0.
pub fn float<T: Float>() -> FloatReduction<T> {
    FloatReduction { step: T::one() }
}

/// Create the non-negative floating-point reduction with the default step
/// of 1.0.
pub fn float_nonneg<T: Float>() -> NonNegFloatReduction<T> {
    NonNegFloatReduction { step: T::one() }
}

/// Create the alphabetic character reduction.
pub fn alpha() -> CharReduction {
    CharReduction::alphabetic()
}

/// Create the alphanumeric character reduction.
pub fn alphanum() -> CharReduction {
    CharReduction::alphanumeric()
}

/// Create a string reduction fanning out the given character reduction.
pub fn string_of<C>(chars: C) -> StringReduction<C>
where
    C: Reduction<Value = char>,
{
    StringReduction { chars }
}

/// Create a list reduction fanning out the given element reduction.
pub fn vec_of<R>(elem: R) -> VecReduction<R>
where
    R: Reduction,
{
    VecReduction { elem }
}

/// Create a pair reduction zipping the component reductions with
/// wrap-around.
pub fn pair<A, B>(left: A, right: B) -> PairReduction<A, B>
where
    A: Reduction,
    B: Reduction,
{
    PairReduction { left, right }
}
