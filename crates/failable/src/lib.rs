//! Tri-state result abstraction: success, failure, or empty success.
//!
//! A [`Failable`] represents the outcome of an operation as exactly one of
//! three states, giving call sites a uniform, inspectable value instead of
//! sentinel values or panics. Key features:
//!
//! - **Constructors and classification**: [`Failable::success`],
//!   [`Failable::failure`], [`Failable::empty`] and the `is_*` predicates.
//!   Empty is success-like: a success built without a payload *is* empty.
//! - **Hydrate**: a one-way projection into a plain JSON record for logging
//!   or cross-boundary transmission, with a structural recognizer for that
//!   shape.
//! - **Assertion helpers**: `assert_*` / `check_*` pairs usable directly in
//!   test bodies.
//! - **List combinators**: [`any_failed`], [`first_failure`],
//!   [`extract_payloads`], and first-failure-wins [`flatten_results`].
//! - **Async adapter**: [`make_it_failable`] wraps a future-producing
//!   closure so its result is always a failable, absorbing errors and panics.
//!
//! # Example
//!
//! ```
//! use failable::{Failable, flatten_results};
//!
//! let steps: Vec<Failable<u32, String>> = vec![
//!     Failable::success(1),
//!     Failable::empty(),
//!     Failable::success(2),
//! ];
//! let combined = flatten_results(steps);
//! assert_eq!(combined.payload(), Some(&vec![1, 2]));
//! ```

pub mod adapter;
pub mod assert;
pub mod combinators;
pub mod error;
pub mod failable;
pub mod hydrate;

// Re-export main types
pub use adapter::{IntoFailable, make_it_failable, run_failable};
pub use assert::{
    Check, assert_empty, assert_failure, assert_failure_eq, assert_success, assert_success_eq,
    assert_success_typed, assert_success_which, check_empty, check_failure, check_failure_eq,
    check_success, check_success_eq, check_success_typed, check_success_which,
};
pub use combinators::{any_failed, extract_payloads, first_failure, flatten_results};
pub use error::{AssertionError, Error, Result};
pub use failable::{Failable, Kind, Meta};
pub use hydrate::is_hydrated_failable;
