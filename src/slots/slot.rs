//! # Core slot trait
//!
//! `Slot` is the extension point for plugging async callbacks into a
//! [`Signal`](crate::Signal). Each registered slot is invoked once per
//! emission, concurrently with the other slots of that emission.
//!
//! ## Contract
//! - Implementations may be slow (I/O, batching, retries) – they do **not**
//!   delay the registry, only the completion of the emission that invoked
//!   them.
//! - An invocation either completes, returns a [`SlotError`], or panics;
//!   panics are captured by the emitter and surfaced as
//!   [`SlotError::Panicked`].
//! - Slots receive their own clone of the emitted argument tuple.
//!
//! ## Identity
//! Connection identity lives in the handle, not the trait: a [`SlotRef`] is
//! `Arc<dyn Slot<A>>`, and two handles are the same connection exactly when
//! they share the `Arc` allocation. Clones of one handle are one
//! connection; separately constructed slots are always distinct, even if
//! their bodies are identical.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SlotError;

/// Shared handle to a slot.
///
/// This is the unit of identity for
/// [`connect`](crate::Signal::connect) / [`disconnect`](crate::Signal::disconnect) /
/// [`contains`](crate::Signal::contains): keep a clone of the handle you
/// connected if you intend to disconnect it later.
pub type SlotRef<A> = Arc<dyn Slot<A>>;

/// Contract for signal slots.
///
/// Invoked from a dedicated task spawned by
/// [`Signal::emit`](crate::Signal::emit). Implementations should avoid
/// blocking the async runtime (prefer async I/O and cooperative waits).
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use asignals::{Slot, SlotError};
///
/// struct Audit;
///
/// #[async_trait]
/// impl Slot<(String, u32)> for Audit {
///     async fn invoke(&self, (user, count): (String, u32)) -> Result<(), SlotError> {
///         // write audit record...
///         let _ = (user, count);
///         Ok(())
///     }
///
///     fn name(&self) -> &str {
///         "audit"
///     }
/// }
/// ```
#[async_trait]
pub trait Slot<A>: Send + Sync + 'static
where
    A: Send + 'static,
{
    /// Handle one emission.
    ///
    /// # Parameters
    /// - `args`: this invocation's clone of the emitted argument tuple
    async fn invoke(&self, args: A) -> Result<(), SlotError>;

    /// Human-readable name (for logs and [`SlotFailure`](crate::SlotFailure)
    /// attribution).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
