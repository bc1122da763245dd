//! Assertion helpers for using failables directly inside test bodies.
//!
//! Every check comes in two forms: a non-panicking `check_*` returning the
//! [`AssertionError`] diagnostic as a value, and a panicking `assert_*` that
//! aborts the current test the way `assert_eq!` does.
//!
//! Payload expectations are structural: `PartialEq` value equality, never
//! identity. An explicit expected value of `false` is an expectation like any
//! other - the expectation-less and expectation-carrying checks are separate
//! functions, so "no expectation" can never be confused with a falsy one.
//!
//! None of the machinery here traverses payloads on the success path, so
//! self-referential payloads (`Rc` cycles and the like) pass through
//! [`check_success`] and [`check_success_which`] without diverging.

// Panicking is this module's contract: `assert_*` is the test-failure signal.
#![allow(clippy::panic)]

use std::fmt::Debug;

use serde::Serialize;
use serde_json::Value;

use crate::error::AssertionError;
use crate::failable::Failable;

/// Outcome of a non-panicking check.
pub type Check = std::result::Result<(), AssertionError>;

/// Fails unless `x` is success-like (success or empty).
pub fn check_success<T, E: Debug>(x: &Failable<T, E>) -> Check {
    if x.is_success() {
        Ok(())
    } else {
        Err(AssertionError::new(
            "assert_success",
            format!(
                "expected a success, got a failure with payload {:?}",
                x.failure_payload()
            ),
        ))
    }
}

/// Panicking form of [`check_success`].
pub fn assert_success<T, E: Debug>(x: &Failable<T, E>) {
    unwrap_check(check_success(x));
}

/// Fails unless `x` is success-like and its payload equals `expected`.
///
/// Empties fail: there is no payload to compare.
pub fn check_success_eq<T, E>(x: &Failable<T, E>, expected: &T) -> Check
where
    T: PartialEq + Debug,
    E: Debug,
{
    check_success(x)?;
    match x.payload() {
        Some(payload) if payload == expected => Ok(()),
        Some(payload) => Err(AssertionError::new(
            "assert_success_eq",
            format!("expected payload {expected:?}, got {payload:?}"),
        )),
        None => Err(AssertionError::new(
            "assert_success_eq",
            format!("expected payload {expected:?}, got an empty"),
        )),
    }
}

/// Panicking form of [`check_success_eq`].
pub fn assert_success_eq<T, E>(x: &Failable<T, E>, expected: &T)
where
    T: PartialEq + Debug,
    E: Debug,
{
    unwrap_check(check_success_eq(x, expected));
}

/// Fails unless `x` is success-like and `predicate` holds for its payload.
///
/// The predicate receives the payload by reference and is the only thing
/// that inspects it; empties fail before it runs.
pub fn check_success_which<T, E: Debug>(
    predicate: impl FnOnce(&T) -> bool,
    x: &Failable<T, E>,
) -> Check {
    check_success(x)?;
    match x.payload() {
        Some(payload) if predicate(payload) => Ok(()),
        Some(_) => Err(AssertionError::new(
            "assert_success_which",
            "payload did not satisfy the predicate",
        )),
        None => Err(AssertionError::new(
            "assert_success_which",
            "expected a payload to test, got an empty",
        )),
    }
}

/// Panicking form of [`check_success_which`].
pub fn assert_success_which<T, E: Debug>(predicate: impl FnOnce(&T) -> bool, x: &Failable<T, E>) {
    unwrap_check(check_success_which(predicate, x));
}

/// Fails unless `x` is success-like and its payload's JSON type category
/// matches `type_name`.
///
/// Categories are the serde_json value kinds: `"null"`, `"boolean"`,
/// `"number"`, `"string"`, `"array"`, `"object"`.
pub fn check_success_typed<T, E>(type_name: &str, x: &Failable<T, E>) -> Check
where
    T: Serialize,
    E: Debug,
{
    check_success(x)?;
    let Some(payload) = x.payload() else {
        return Err(AssertionError::new(
            "assert_success_typed",
            format!("expected a payload of type {type_name}, got an empty"),
        ));
    };
    let value = serde_json::to_value(payload).map_err(|e| {
        AssertionError::new(
            "assert_success_typed",
            format!("payload is not representable as JSON: {e}"),
        )
    })?;
    let actual = json_type_name(&value);
    if actual == type_name {
        Ok(())
    } else {
        Err(AssertionError::new(
            "assert_success_typed",
            format!("expected a payload of type {type_name}, got {actual}"),
        ))
    }
}

/// Panicking form of [`check_success_typed`].
pub fn assert_success_typed<T, E>(type_name: &str, x: &Failable<T, E>)
where
    T: Serialize,
    E: Debug,
{
    unwrap_check(check_success_typed(type_name, x));
}

/// Fails unless `x` is a failure (so it fails for successes and empties).
pub fn check_failure<T: Debug, E>(x: &Failable<T, E>) -> Check {
    if x.is_failure() {
        Ok(())
    } else {
        Err(AssertionError::new(
            "assert_failure",
            format!(
                "expected a failure, got {} with payload {:?}",
                x.kind(),
                x.payload()
            ),
        ))
    }
}

/// Panicking form of [`check_failure`].
pub fn assert_failure<T: Debug, E>(x: &Failable<T, E>) {
    unwrap_check(check_failure(x));
}

/// Fails unless `x` is a failure whose payload equals `expected`.
pub fn check_failure_eq<T, E>(x: &Failable<T, E>, expected: &E) -> Check
where
    T: Debug,
    E: PartialEq + Debug,
{
    check_failure(x)?;
    match x.failure_payload() {
        Some(payload) if payload == expected => Ok(()),
        Some(payload) => Err(AssertionError::new(
            "assert_failure_eq",
            format!("expected payload {expected:?}, got {payload:?}"),
        )),
        None => Err(AssertionError::new(
            "assert_failure_eq",
            format!("expected payload {expected:?}, got a payload-less failure"),
        )),
    }
}

/// Panicking form of [`check_failure_eq`].
pub fn assert_failure_eq<T, E>(x: &Failable<T, E>, expected: &E)
where
    T: Debug,
    E: PartialEq + Debug,
{
    unwrap_check(check_failure_eq(x, expected));
}

/// Fails unless `x` is an empty.
pub fn check_empty<T: Debug, E: Debug>(x: &Failable<T, E>) -> Check {
    if x.is_empty() {
        Ok(())
    } else {
        Err(AssertionError::new(
            "assert_empty",
            format!("expected an empty, got {}", x.kind()),
        ))
    }
}

/// Panicking form of [`check_empty`].
pub fn assert_empty<T: Debug, E: Debug>(x: &Failable<T, E>) {
    unwrap_check(check_empty(x));
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn unwrap_check(check: Check) {
    if let Err(err) = check {
        panic!("{err}");
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn success_check_passes_success_and_empty() {
        assert_success(&Failable::<&str>::success(""));
        assert_success(&Failable::<&str>::empty());
    }

    #[test]
    fn success_check_rejects_failure() {
        let error: Failable<&str> = Failable::failure_opt(None);
        assert!(check_success(&error).is_err());
    }

    #[test]
    #[should_panic(expected = "assert_success failed")]
    fn success_assert_panics_on_failure() {
        assert_success(&Failable::<&str>::failure_opt(None));
    }

    #[test]
    fn success_eq_compares_payloads_structurally() {
        assert_success_eq(&Failable::<&str>::success("foo"), &"foo");
        assert!(check_success_eq(&Failable::<&str>::success("foo"), &"bar").is_err());
    }

    #[test]
    fn success_eq_boolean_payloads_are_exact() {
        assert_success_eq(&Failable::<bool>::success(true), &true);
        assert!(check_success_eq(&Failable::<bool>::success(true), &false).is_err());
        assert!(check_success_eq(&Failable::<bool>::success(false), &true).is_err());
    }

    #[test]
    fn success_eq_rejects_empty() {
        assert!(check_success_eq(&Failable::<&str>::empty(), &"foo").is_err());
    }

    #[test]
    fn success_which_applies_predicate() {
        assert_success_which(|p: &&str| p.len() == 3, &Failable::<&str>::success("foo"));
        assert!(
            check_success_which(|p: &&str| p.len() == 4, &Failable::<&str>::success("foo"))
                .is_err()
        );
        assert!(check_success_which(|_: &&str| true, &Failable::<&str>::failure_opt(None)).is_err());
    }

    #[derive(Default)]
    struct Node {
        next: RefCell<Option<Rc<Node>>>,
    }

    #[test]
    fn success_which_tolerates_cyclic_payloads() {
        let node = Rc::new(Node::default());
        *node.next.borrow_mut() = Some(Rc::clone(&node));

        let boxed: Failable<Rc<Node>, String> = Failable::success(Rc::clone(&node));
        assert_success_which(|_| true, &boxed);
        assert_success(&boxed);

        // Break the cycle so the test does not leak.
        *node.next.borrow_mut() = None;
    }

    #[test]
    fn success_typed_matches_json_categories() {
        assert_success_typed("string", &Failable::<&str>::success("foo"));
        assert_success_typed("number", &Failable::<i32, String>::success(7));
        assert_success_typed("boolean", &Failable::<bool>::success(true));
        assert_success_typed("array", &Failable::<Vec<i32>, String>::success(vec![1]));

        assert!(check_success_typed("number", &Failable::<&str>::success("foo")).is_err());
        assert!(check_success_typed("string", &Failable::<&str>::failure_opt(None)).is_err());
        assert!(check_success_typed("string", &Failable::<&str>::empty()).is_err());
    }

    #[test]
    fn failure_check_rejects_success_and_empty() {
        assert_failure(&Failable::<&str>::failure_opt(None));
        assert!(check_failure(&Failable::<&str>::success("")).is_err());
        assert!(check_failure(&Failable::<&str>::empty()).is_err());
    }

    #[test]
    #[should_panic(expected = "assert_failure failed")]
    fn failure_assert_panics_on_empty() {
        assert_failure(&Failable::<&str>::empty());
    }

    #[test]
    fn failure_eq_compares_payloads() {
        assert_failure_eq(&Failable::<&str>::failure("foo"), &"foo");
        assert!(check_failure_eq(&Failable::<&str>::failure("foo"), &"bar").is_err());
        assert!(check_failure_eq(&Failable::<&str>::failure_opt(None), &"foo").is_err());
    }

    #[test]
    fn failure_eq_boolean_payloads_are_exact() {
        assert_failure_eq(&Failable::<bool>::failure(false), &false);
        assert!(check_failure_eq(&Failable::<bool>::failure(true), &false).is_err());
        assert!(check_failure_eq(&Failable::<bool>::failure(false), &true).is_err());
    }

    #[test]
    fn empty_check_rejects_other_kinds() {
        assert_empty(&Failable::<&str>::empty());
        assert!(check_empty(&Failable::<&str>::success("")).is_err());
        assert!(check_empty(&Failable::<&str>::failure_opt(None)).is_err());
    }

    #[test]
    fn diagnostics_name_the_check() {
        let err = check_empty(&Failable::<&str>::success("")).unwrap_err();
        assert_eq!(err.check, "assert_empty");
        assert!(err.to_string().contains("expected an empty"));
    }
}
