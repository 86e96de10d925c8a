//! # Specifica
//!
//! Composable specifications: small boolean rules over a candidate value,
//! combined with `and`, `or` and `not`, that explain *why* a candidate was
//! rejected instead of returning a bare `false`.
//!
//! ## Philosophy
//!
//! - Rejection is data. Evaluating a [`Spec`] returns an [`Outcome`], never a
//!   panic, and a failed outcome carries a structured [`Reason`].
//! - `and` stops at the first failure and reports it as-is; `or` only fails when
//!   both sides do, and then reports both. Batch evaluation reports every
//!   rejected candidate.
//! - Malformed construction (an empty aggregate reason, a missing operand) is
//!   reported when the value is built, as a [`SpecError`].
//! - A rule written once for a shared abstraction can be reused for every type
//!   that can be viewed as it, with [`Spec::cast_up`].
//!
//! ## Quick Example
//!
//! ```rust
//! use specifica::prelude::*;
//!
//! struct Drink {
//!     name: String,
//!     with: Vec<String>,
//! }
//!
//! let whiskey = Spec::rule(|d: &Drink| d.name == "whiskey", Reason::new(1, "not whiskey"));
//! let cold = Spec::rule(
//!     |d: &Drink| d.with.iter().any(|w| w == "ice"),
//!     Reason::new(2, "there is no ice"),
//! );
//! let cold_whiskey = whiskey & cold;
//!
//! let on_the_rocks = Drink { name: "whiskey".into(), with: vec!["ice".into()] };
//! let apple_juice = Drink { name: "apple juice".into(), with: vec![] };
//!
//! assert!(on_the_rocks.satisfies(&cold_whiskey).is_success());
//!
//! match apple_juice.satisfies(&cold_whiskey) {
//!     Validation::Success(()) => unreachable!(),
//!     Validation::Failure(reason) => assert_eq!(reason.message(), "not whiskey"),
//! }
//! ```
//!
//! ## Features
//!
//! - `tracing`: trace spans around [`named`](Spec::named) specifications and a
//!   debug summary for batch evaluation.
//! - `serde`: `Serialize`/`Deserialize` for [`Reason`].
//! - `proptest`: `Arbitrary` for [`Reason`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod evaluate;
pub mod nonempty;
pub mod predicate;
pub mod reason;
pub mod semigroup;
pub mod spec;
pub mod testing;
pub mod validation;

// Re-exports
pub use error::{Operand, SpecError};
pub use evaluate::{all_satisfy, satisfies, satisfying, AllSatisfyExt, SatisfiesExt, Satisfying};
pub use nonempty::NonEmptyVec;
pub use predicate::{Predicate, Rule};
pub use reason::Reason;
pub use semigroup::Semigroup;
pub use spec::{
    all_of, always, and, any_of, cast_up, never, not, or, project, try_and, try_not, try_or, Spec,
    Specification,
};
pub use validation::{Outcome, Validation};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::evaluate::{AllSatisfyExt, SatisfiesExt};
    pub use crate::predicate::{Predicate, Rule};
    pub use crate::reason::Reason;
    pub use crate::semigroup::Semigroup;
    pub use crate::spec::{Spec, Specification};
    pub use crate::validation::{Outcome, Validation};
}
