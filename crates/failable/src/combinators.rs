//! List-level combinators aggregating many failables into one.
//!
//! All combinators preserve input order. Aggregation policy is
//! first-failure-wins: the first failure in sequence order short-circuits and
//! is surfaced unchanged.

use itertools::Itertools;

use crate::failable::Failable;

/// True iff at least one element is a failure.
pub fn any_failed<T, E>(list: &[Failable<T, E>]) -> bool {
    list.iter().any(Failable::is_failure)
}

/// The first failure in sequence order, or `None` if every element is
/// success-like.
pub fn first_failure<'a, T, E>(list: &'a [Failable<T, E>]) -> Option<&'a Failable<T, E>> {
    list.iter().find(|x| x.is_failure())
}

/// The ordered payloads of every element, one entry per element.
///
/// Failures and empties contribute `None`, so the output always has the same
/// length as the input.
pub fn extract_payloads<T, E>(list: &[Failable<T, E>]) -> Vec<Option<&T>> {
    list.iter().map(Failable::payload).collect_vec()
}

/// Aggregate a sequence of failables into a single failable.
///
/// The first failure is returned with its payload and metadata intact;
/// otherwise the result is a success wrapping the ordered payloads of all
/// elements (empties carry no payload and contribute nothing). An empty
/// input flattens to `success(vec![])`.
pub fn flatten_results<T, E>(
    list: impl IntoIterator<Item = Failable<T, E>>,
) -> Failable<Vec<T>, E> {
    list.into_iter().collect()
}

/// First-failure-wins collection, so `.collect()` works directly on
/// iterators of failables.
impl<T, E> FromIterator<Failable<T, E>> for Failable<Vec<T>, E> {
    fn from_iter<I: IntoIterator<Item = Failable<T, E>>>(iter: I) -> Self {
        let mut payloads = Vec::new();
        for item in iter {
            match item {
                Failable::Failure { payload, meta } => {
                    return Failable::Failure { payload, meta };
                }
                Failable::Success { payload, .. } => payloads.push(payload),
                Failable::Empty { .. } => {}
            }
        }
        Failable::success(payloads)
    }
}
