//! Boolean properties over generated values and their logical combinators.

/// A pure, total predicate asserting an invariant over values of `T`.
///
/// Any closure `Fn(&T) -> bool` is a property. Combinators compose
/// properties into wrapper values rather than opaque closures, so composed
/// properties can be stored, shared, and inspected uniformly.
pub trait Property<T> {
    /// Evaluate the property on one value.
    fn holds(&self, value: &T) -> bool;

    /// True iff both properties hold. Short-circuits: `other` is not
    /// evaluated when `self` fails.
    fn and<Q>(self, other: Q) -> And<Self, Q>
    where
        Self: Sized,
        Q: Property<T>,
    {
        And {
            left: self,
            right: other,
        }
    }

    /// True iff either property holds. Short-circuits: `other` is not
    /// evaluated when `self` holds.
    fn or<Q>(self, other: Q) -> Or<Self, Q>
    where
        Self: Sized,
        Q: Property<T>,
    {
        Or {
            left: self,
            right: other,
        }
    }

    /// Logical negation.
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not { inner: self }
    }

    /// Material implication: holds when `self` fails or `other` holds.
    ///
    /// Restricts a check to cases where the precondition `self` holds; the
    /// conclusion is not evaluated when the premise fails.
    fn implies<Q>(self, other: Q) -> Implies<Self, Q>
    where
        Self: Sized,
        Q: Property<T>,
    {
        Implies {
            premise: self,
            conclusion: other,
        }
    }
}

impl<T, F> Property<T> for F
where
    F: Fn(&T) -> bool,
{
    fn holds(&self, value: &T) -> bool {
        self(value)
    }
}

/// Conjunction of two properties.
#[derive(Debug, Clone)]
pub struct And<P, Q> {
    left: P,
    right: Q,
}

impl<T, P, Q> Property<T> for And<P, Q>
where
    P: Property<T>,
    Q: Property<T>,
{
    fn holds(&self, value: &T) -> bool {
        self.left.holds(value) && self.right.holds(value)
    }
}

/// Disjunction of two properties.
#[derive(Debug, Clone)]
pub struct Or<P, Q> {
    left: P,
    right: Q,
}

impl<T, P, Q> Property<T> for Or<P, Q>
where
    P: Property<T>,
    Q: Property<T>,
{
    fn holds(&self, value: &T) -> bool {
        self.left.holds(value) || self.right.holds(value)
    }
}

/// Negation of a property.
#[derive(Debug, Clone)]
pub struct Not<P> {
    inner: P,
}

impl<T, P> Property<T> for Not<P>
where
    P: Property<T>,
{
    fn holds(&self, value: &T) -> bool {
        !self.inner.holds(value)
    }
}

/// Material implication of two properties.
#[derive(Debug, Clone)]
pub struct Implies<P, Q> {
    premise: P,
    conclusion: Q,
}

impl<T, P, Q> Property<T> for Implies<P, Q>
where
    P: Property<T>,
    Q: Property<T>,
{
    fn holds(&self, value: &T) -> bool {
        !self.premise.holds(value) || self.conclusion.holds(value)
    }
}

/// A property that holds on every value.
#[derive(Debug, Clone)]
pub struct AlwaysTrue;

impl<T> Property<T> for AlwaysTrue {
    fn holds(&self, _value: &T) -> bool {
        true
    }
}

/// A property that holds on no value.
#[derive(Debug, Clone)]
pub struct AlwaysFalse;

impl<T> Property<T> for AlwaysFalse {
    fn holds(&self, _value: &T) -> bool {
        false
    }
}

/// Create a property that holds on every value.
pub fn always_true() -> AlwaysTrue {
    AlwaysTrue
}

/// Create a property that holds on no value.
pub fn always_false() -> AlwaysFalse {
    AlwaysFalse
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_even(x: &i64) -> bool {
        x % 2 == 0
    }

    fn is_positive(x: &i64) -> bool {
        *x > 0
    }

    #[test]
    fn test_closures_are_properties() {
        let p = |x: &i64| *x > 10;
        assert!(p.holds(&11));
        assert!(!p.holds(&10));
    }

    #[test]
    fn test_and() {
        let p = is_even.and(is_positive);
        assert!(p.holds(&4));
        assert!(!p.holds(&-4));
        assert!(!p.holds(&3));
    }

    #[test]
    fn test_or() {
        let p = is_even.or(is_positive);
        assert!(p.holds(&4));
        assert!(p.holds(&3));
        assert!(p.holds(&-4));
        assert!(!p.holds(&-3));
    }

    #[test]
    fn test_not() {
        let p = is_even.not();
        assert!(p.holds(&3));
        assert!(!p.holds(&4));
    }

    #[test]
    fn test_implies() {
        // "positive implies even" holds on everything except positive odds.
        let p = is_positive.implies(is_even);
        assert!(p.holds(&4));
        assert!(p.holds(&-3));
        assert!(p.holds(&-4));
        assert!(!p.holds(&3));
    }

    #[test]
    fn test_implies_short_circuits_conclusion() {
        // Dividing by zero in the conclusion is safe when the premise fails.
        let p = (|x: &i64| *x != 0).implies(|x: &i64| 10 / *x <= 10);
        assert!(p.holds(&0));
        assert!(p.holds(&1));
    }

    #[test]
    fn test_boolean_algebra_identities() {
        for x in [-7i64, -2, 0, 3, 8] {
            assert_eq!(always_true().and(is_even).holds(&x), is_even.holds(&x));
            assert_eq!(always_false().or(is_even).holds(&x), is_even.holds(&x));
            assert_eq!(is_even.not().not().holds(&x), is_even.holds(&x));
            assert!(always_false().implies(is_even).holds(&x));
        }
    }
}
