//! Adapter that converts asynchronous computations into failables.
//!
//! The contract: whatever the wrapped computation does - return a failable,
//! return a raw value on the `Ok` rail, fail on the `Err` rail, or panic -
//! the adapter resolves to a failable, exactly once, after the wrapped
//! future settles. Nothing is re-thrown and nothing is logged; the caller
//! owns retries, timeouts, and cancellation.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::failable::Failable;

/// Conversion of a completed computation's output into a failable.
///
/// Implemented for failables themselves (returned unchanged), for `Result`
/// (`Ok` is the raw-value case, `Err` the rejection case), for `Result`s
/// that already carry a failable on the `Ok` rail, and for `Option` (`None`
/// becomes an empty).
pub trait IntoFailable<T, E> {
    fn into_failable(self) -> Failable<T, E>;
}

impl<T, E> IntoFailable<T, E> for Failable<T, E> {
    fn into_failable(self) -> Failable<T, E> {
        self
    }
}

impl<T, E> IntoFailable<T, E> for std::result::Result<T, E> {
    fn into_failable(self) -> Failable<T, E> {
        self.into()
    }
}

impl<T, E> IntoFailable<T, E> for std::result::Result<Failable<T, E>, E> {
    fn into_failable(self) -> Failable<T, E> {
        match self {
            Ok(failable) => failable,
            Err(payload) => Failable::failure(payload),
        }
    }
}

impl<T, E> IntoFailable<T, E> for Option<T> {
    fn into_failable(self) -> Failable<T, E> {
        self.into()
    }
}

/// Await `fut` and convert its output into a failable.
///
/// Panics inside the future are caught and become failures whose payload is
/// the panic message; they never propagate to the caller.
pub async fn run_failable<Fut, R, T, E>(fut: Fut) -> Failable<T, E>
where
    Fut: Future<Output = R>,
    R: IntoFailable<T, E>,
    E: From<String>,
{
    match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(output) => output.into_failable(),
        Err(cause) => Failable::failure(E::from(panic_message(cause.as_ref()))),
    }
}

/// Wrap a future-producing closure so every invocation resolves to a
/// failable.
///
/// Outputs that are already failables pass through unchanged; everything
/// else is converted per [`IntoFailable`]. A panic raised synchronously by
/// the closure itself is captured the same way as one raised inside the
/// future.
pub fn make_it_failable<F, Fut, R, T, E>(
    mut f: F,
) -> impl FnMut() -> BoxFuture<'static, Failable<T, E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoFailable<T, E> + Send + 'static,
    T: Send + 'static,
    E: From<String> + Send + 'static,
{
    move || match std::panic::catch_unwind(AssertUnwindSafe(&mut f)) {
        Ok(fut) => run_failable(fut).boxed(),
        Err(cause) => {
            let failed = Failable::failure(E::from(panic_message(cause.as_ref())));
            async move { failed }.boxed()
        }
    }
}

fn panic_message(cause: &(dyn Any + Send)) -> String {
    if let Some(message) = cause.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = cause.downcast_ref::<String>() {
        message.clone()
    } else {
        "computation panicked".to_owned()
    }
}
