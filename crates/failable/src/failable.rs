//! The `Failable` sum type: constructors, classification, and accessors.
//!
//! A failable represents the outcome of an operation as exactly one of three
//! states: a successful value, a failure value, or an explicit "empty"
//! success carrying only metadata. Call sites get a uniform, inspectable
//! representation instead of sentinel values or panics.
//!
//! Empty is a sub-case of success: [`Failable::is_success`] is true for both
//! `Success` and `Empty`, while [`Failable::is_empty`] singles out the
//! no-payload case. A success constructed without a payload (via
//! [`Failable::success_opt`] with `None`) *is* the `Empty` variant - "success
//! with no payload" and "empty" are the same semantic state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Auxiliary out-of-band data attachable to any failable, mainly used on empty.
pub type Meta = serde_json::Value;

/// The three mutually exclusive classifications of a failable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Success,
    Failure,
    Empty,
}

impl Kind {
    /// Stable lowercase name used in the hydrated wire form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tri-state operation outcome: a success payload, a failure payload, or an
/// explicit empty success.
///
/// `T` is the success payload type, `E` the failure payload type (defaulting
/// to `T` for the common symmetric case). The failure payload is opaque to
/// this crate; it is carried, compared, and surfaced but never interpreted.
///
/// Values are immutable once constructed: combinators produce new failables
/// rather than mutating their inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failable<T, E = T> {
    /// Operation succeeded with a payload.
    Success { payload: T, meta: Option<Meta> },
    /// Operation failed; the payload (if any) describes why.
    Failure { payload: Option<E>, meta: Option<Meta> },
    /// Operation succeeded but produced no payload.
    Empty { meta: Option<Meta> },
}

impl<T, E> Failable<T, E> {
    /// Build a success carrying `payload`.
    pub const fn success(payload: T) -> Self {
        Self::Success {
            payload,
            meta: None,
        }
    }

    /// Build a success from an optional payload.
    ///
    /// `None` yields the `Empty` variant: a success with no payload is
    /// indistinguishable from an explicit empty, by construction.
    pub fn success_opt(payload: Option<T>) -> Self {
        match payload {
            Some(payload) => Self::success(payload),
            None => Self::empty(),
        }
    }

    /// Build a failure carrying `payload`.
    pub const fn failure(payload: E) -> Self {
        Self::Failure {
            payload: Some(payload),
            meta: None,
        }
    }

    /// Build a failure from an optional payload. Unlike [`Self::success_opt`],
    /// a payload-less failure stays a failure.
    pub const fn failure_opt(payload: Option<E>) -> Self {
        Self::Failure {
            payload,
            meta: None,
        }
    }

    /// Build an empty success with no metadata.
    pub const fn empty() -> Self {
        Self::Empty { meta: None }
    }

    /// Build an empty success carrying metadata.
    pub const fn empty_with(meta: Meta) -> Self {
        Self::Empty { meta: Some(meta) }
    }

    /// Attach metadata to any failable, replacing what was there.
    #[must_use]
    pub fn with_meta(self, meta: Meta) -> Self {
        match self {
            Self::Success { payload, .. } => Self::Success {
                payload,
                meta: Some(meta),
            },
            Self::Failure { payload, .. } => Self::Failure {
                payload,
                meta: Some(meta),
            },
            Self::Empty { .. } => Self::Empty { meta: Some(meta) },
        }
    }

    /// The classification of this failable.
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Success { .. } => Kind::Success,
            Self::Failure { .. } => Kind::Failure,
            Self::Empty { .. } => Kind::Empty,
        }
    }

    /// True for `Success` and `Empty`: empty is a success without a payload.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. } | Self::Empty { .. })
    }

    /// True only for `Failure`.
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// True only for `Empty`.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    /// The success payload, or `None` for failures and empties.
    pub const fn payload(&self) -> Option<&T> {
        match self {
            Self::Success { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// The failure payload, or `None` for success-like values and
    /// payload-less failures.
    pub const fn failure_payload(&self) -> Option<&E> {
        match self {
            Self::Failure {
                payload: Some(payload),
                ..
            } => Some(payload),
            _ => None,
        }
    }

    /// The attached metadata, if any.
    pub fn meta(&self) -> Option<&Meta> {
        match self {
            Self::Success { meta, .. } | Self::Failure { meta, .. } | Self::Empty { meta } => {
                meta.as_ref()
            }
        }
    }

    /// Consume the failable, returning the success payload if present.
    pub fn into_payload(self) -> Option<T> {
        match self {
            Self::Success { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// Consume the failable, returning the failure payload if present.
    pub fn into_failure_payload(self) -> Option<E> {
        match self {
            Self::Failure { payload, .. } => payload,
            _ => None,
        }
    }

    /// Consume the failable, mapping onto the standard result rails.
    ///
    /// Success-like values land on `Ok` (`None` for empties); failures land
    /// on `Err`, carrying `None` when the failure was built without a
    /// payload.
    pub fn into_result(self) -> std::result::Result<Option<T>, Option<E>> {
        match self {
            Self::Success { payload, .. } => Ok(Some(payload)),
            Self::Empty { .. } => Ok(None),
            Self::Failure { payload, .. } => Err(payload),
        }
    }

    /// Tap into the success payload without consuming the failable.
    #[must_use]
    pub fn tap_success(self, f: impl FnOnce(&T)) -> Self {
        if let Self::Success { ref payload, .. } = self {
            f(payload);
        }
        self
    }

    /// Tap into the failure payload without consuming the failable.
    #[must_use]
    pub fn tap_failure(self, f: impl FnOnce(&E)) -> Self {
        if let Self::Failure {
            payload: Some(ref payload),
            ..
        } = self
        {
            f(payload);
        }
        self
    }

    /// Extract the success payload, logging failures via `tracing`.
    ///
    /// Returns `None` for failures (after emitting an error event) and for
    /// empties (silently: an empty is a success).
    pub fn into_payload_logged(self) -> Option<T>
    where
        E: fmt::Display,
    {
        match self {
            Self::Success { payload, .. } => Some(payload),
            Self::Failure { payload, .. } => {
                match payload {
                    Some(reason) => tracing::error!(%reason, "operation failed"),
                    None => tracing::error!("operation failed without a reason"),
                }
                None
            }
            Self::Empty { .. } => None,
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Failable<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(payload) => Self::success(payload),
            Err(payload) => Self::failure(payload),
        }
    }
}

impl<T, E> From<Option<T>> for Failable<T, E> {
    fn from(payload: Option<T>) -> Self {
        Self::success_opt(payload)
    }
}
