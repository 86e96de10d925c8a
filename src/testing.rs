//! Testing utilities
//!
//! Assertion macros for outcomes, and property-based testing support behind the
//! `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use specifica::{assert_reason_messages, assert_satisfied, assert_unsatisfied};
//! use specifica::{Reason, Spec};
//!
//! let whiskey = Spec::rule(|name: &str| name == "whiskey", Reason::new(1, "not whiskey"));
//! let cold = Spec::rule(|name: &str| name.contains("ice"), Reason::new(2, "no ice"));
//!
//! assert_satisfied!(whiskey.is_satisfied_by("whiskey"));
//! assert_unsatisfied!(whiskey.is_satisfied_by("gin"));
//! assert_reason_messages!((whiskey | cold).is_satisfied_by("gin"), ["not whiskey", "no ice"]);
//! ```

/// Assert that an outcome is a success.
///
/// Panics with the rejection message otherwise.
#[macro_export]
macro_rules! assert_satisfied {
    ($outcome:expr) => {
        match $outcome {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(reason) => {
                panic!("Expected Success, got Failure: {}", reason);
            }
        }
    };
}

/// Assert that an outcome is a failure.
#[macro_export]
macro_rules! assert_unsatisfied {
    ($outcome:expr) => {
        match $outcome {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that an outcome failed and that its reason flattens to exactly the
/// given messages, in order.
#[macro_export]
macro_rules! assert_reason_messages {
    ($outcome:expr, [$($expected:expr),* $(,)?]) => {
        match $outcome {
            $crate::Validation::Failure(reason) => {
                let actual: ::std::vec::Vec<::std::string::String> = reason
                    .flatten()
                    .map(|leaf| leaf.message().into_owned())
                    .collect();
                let expected: ::std::vec::Vec<::std::string::String> =
                    ::std::vec![$(::std::string::String::from($expected)),*];
                assert_eq!(actual, expected);
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected Failure with reasons {:?}, got Success: {:?}",
                    [$($expected),*], v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for crate::Reason {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let leaf = (any::<i32>(), "[a-z ]{0,12}")
            .prop_map(|(code, message)| crate::Reason::new(code, message));
        leaf.prop_recursive(3, 24, 4, |inner| {
            (inner.clone(), prop::collection::vec(inner, 0..4)).prop_map(|(head, tail)| {
                crate::Reason::from_nonempty(crate::NonEmptyVec::new(head, tail))
            })
        })
        .boxed()
    }
}
