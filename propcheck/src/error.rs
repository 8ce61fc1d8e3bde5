//! Error types raised while drawing values from generators.

use std::fmt;

/// Errors a generator can raise at draw time.
///
/// These are configuration errors, not data errors: they mean the generator
/// itself was set up with an impossible domain, and they abort the current
/// draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// A bounded numeric generator whose lower bound exceeds its upper bound.
    InvalidRange { lo: String, hi: String },

    /// A filtered generator exhausted its retry budget without any drawn
    /// value satisfying the predicate.
    Unsatisfiable { attempts: usize },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::InvalidRange { lo, hi } => {
                write!(f, "invalid range: lower bound {} exceeds upper bound {}", lo, hi)
            }
            GenError::Unsatisfiable { attempts } => {
                write!(f, "filter predicate unsatisfied after {} attempts", attempts)
            }
        }
    }
}

impl std::error::Error for GenError {}

impl GenError {
    /// Create an invalid-range error from the offending bounds.
    pub fn invalid_range(lo: impl fmt::Display, hi: impl fmt::Display) -> Self {
        Self::InvalidRange {
            lo: lo.to_string(),
            hi: hi.to_string(),
        }
    }

    /// Create an unsatisfiable-predicate error after the given attempt count.
    pub fn unsatisfiable(attempts: usize) -> Self {
        Self::Unsatisfiable { attempts }
    }
}
