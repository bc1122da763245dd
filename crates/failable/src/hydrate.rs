//! Wire/snapshot projection of failables.
//!
//! [`Failable::hydrate`] projects a failable into a plain JSON record for
//! logging or cross-boundary transmission. The projection is one-way: there
//! is no dehydrate. [`is_hydrated_failable`] is the structural recognizer for
//! that record shape, total over arbitrary JSON values.

use serde::Serialize;
use serde_json::{Value, json};

use crate::error::{Error, Result};
use crate::failable::{Failable, Kind};

impl<T, E> Failable<T, E>
where
    T: Serialize,
    E: Serialize,
{
    /// Project into the plain record form.
    ///
    /// Success and failure hydrate to `{"kind", "payload"}` - the payload key
    /// is always present, `null` when the failure was built without one.
    /// Empty hydrates to `{"kind", "meta"}` with no payload key. Metadata on
    /// success and failure does not surface.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HydrateFailed`] when the payload cannot be
    /// represented as JSON.
    pub fn hydrate(&self) -> Result<Value> {
        match self {
            Self::Success { payload, .. } => {
                let payload = to_value(payload)?;
                Ok(json!({ "kind": Kind::Success.as_str(), "payload": payload }))
            }
            Self::Failure { payload, .. } => {
                let payload = to_value(payload)?;
                Ok(json!({ "kind": Kind::Failure.as_str(), "payload": payload }))
            }
            Self::Empty { meta } => {
                let meta = meta.clone().unwrap_or(Value::Null);
                Ok(json!({ "kind": Kind::Empty.as_str(), "meta": meta }))
            }
        }
    }
}

fn to_value<S: Serialize>(payload: &S) -> Result<Value> {
    serde_json::to_value(payload).map_err(|e| Error::hydrate_failed(e.to_string()))
}

/// Structural test for the hydrated record shape.
///
/// True for any value produced by [`Failable::hydrate`]; false - never an
/// error - for plain objects, arrays, primitives, `null`, and near-miss
/// objects carrying an unrecognized or malformed `kind` tag.
pub fn is_hydrated_failable(value: &Value) -> bool {
    let Value::Object(map) = value else {
        return false;
    };
    let Some(Value::String(kind)) = map.get("kind") else {
        return false;
    };
    match kind.as_str() {
        "success" | "failure" => map.len() == 2 && map.contains_key("payload"),
        "empty" => map.len() == 2 && map.contains_key("meta"),
        _ => false,
    }
}
