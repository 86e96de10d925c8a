//! Construction errors
//!
//! Rejecting a candidate is never an error in this crate: it is an ordinary
//! [`Outcome`](crate::Outcome). The errors here describe malformed specification
//! trees and malformed reasons, which are caller bugs and are reported when the
//! value is built rather than when it is evaluated.

use std::fmt;

/// Which operand of a combinator was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The only operand of a unary combinator (`not`).
    Single,
    /// The left operand of a binary combinator.
    Left,
    /// The right operand of a binary combinator.
    Right,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Single => write!(f, "operand"),
            Operand::Left => write!(f, "left operand"),
            Operand::Right => write!(f, "right operand"),
        }
    }
}

/// Error raised while building a specification or a reason.
///
/// # Example
///
/// ```rust
/// use specifica::{Reason, SpecError};
///
/// let err = Reason::aggregate(Vec::new()).unwrap_err();
/// assert_eq!(err, SpecError::InvalidAggregate);
/// assert_eq!(err.to_string(), "aggregate reason requires at least one reason");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// An aggregate reason was built from an empty sequence.
    InvalidAggregate,
    /// A combinator was given a missing operand.
    NullOperand {
        /// Name of the combinator being built (`"and"`, `"or"`, `"not"`).
        combinator: &'static str,
        /// The operand that was missing.
        operand: Operand,
    },
}

impl SpecError {
    pub(crate) fn null_operand(combinator: &'static str, operand: Operand) -> Self {
        let err = SpecError::NullOperand {
            combinator,
            operand,
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %err, "rejected specification construction");
        err
    }
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::InvalidAggregate => {
                write!(f, "aggregate reason requires at least one reason")
            }
            SpecError::NullOperand {
                combinator,
                operand,
            } => write!(f, "`{}` specification is missing its {}", combinator, operand),
        }
    }
}

impl std::error::Error for SpecError {}
