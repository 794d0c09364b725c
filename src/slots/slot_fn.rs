//! # Function-backed slot (`SlotFn`)
//!
//! [`SlotFn`] wraps a closure `F: Fn(A) -> Fut`, producing a fresh future
//! per invocation. This avoids shared mutable state between invocations.
//!
//! ## Concurrency semantics
//! - Each emission calls the closure again, so every invocation owns its own
//!   future state.
//! - No hidden mutation between emissions; if shared state is needed, move an
//!   explicit `Arc<...>` into the closure.
//!
//! ## Example
//! ```
//! use asignals::{SlotError, SlotFn, SlotRef};
//!
//! let slot: SlotRef<String> = SlotFn::arc("printer", |msg: String| async move {
//!     println!("{msg}");
//!     Ok::<_, SlotError>(())
//! });
//!
//! assert_eq!(slot.name(), "printer");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SlotError;
use crate::slots::slot::Slot;

/// Function-backed slot implementation.
///
/// Wraps a closure that *creates* a new future per invocation.
pub struct SlotFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> SlotFn<F> {
    /// Creates a new function-backed slot.
    ///
    /// Prefer [`SlotFn::arc`] when you immediately need a
    /// [`SlotRef`](crate::SlotRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the slot and returns it as a shared handle (`Arc<SlotFn>`).
    ///
    /// The returned `Arc` coerces to [`SlotRef`](crate::SlotRef); clones of
    /// it all refer to the same connection.
    ///
    /// ## Example
    /// ```
    /// use asignals::{SlotError, SlotFn, SlotRef};
    ///
    /// let slot: SlotRef<()> = SlotFn::arc("ping", |_: ()| async {
    ///     Ok::<_, SlotError>(())
    /// });
    /// assert_eq!(slot.name(), "ping");
    /// ```
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<A, F, Fut> Slot<A> for SlotFn<F>
where
    A: Send + 'static,
    F: Fn(A) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = Result<(), SlotError>> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn invoke(&self, args: A) -> Result<(), SlotError> {
        (self.f)(args).await
    }
}
