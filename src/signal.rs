//! # Signal: guarded slot registry with concurrent fan-out emission.
//!
//! [`Signal`] keeps an insertion-ordered, duplicate-free list of
//! [`SlotRef`] handles and broadcasts each emission to all of them
//! **concurrently**, suspending until every invocation has finished.
//!
//! ## What it guarantees
//! - `connect` is idempotent per handle; the registry never holds the same
//!   handle twice.
//! - `emit(args)` invokes exactly the slots registered at the moment the
//!   emission snapshot is taken, each exactly once, each with its own clone
//!   of `args`.
//! - All invocations run to completion (or failure) before `emit` returns;
//!   one failing slot never cancels its siblings.
//! - The guard is **never** held while slot bodies run, so slots may call
//!   `connect` / `disconnect` / `emit` on the same signal (including
//!   disconnecting themselves) without deadlocking.
//!
//! ## What it does **not** guarantee
//! - No ordering between the invocations of one emission; they are
//!   concurrent and complete in any order (only the snapshot itself keeps
//!   insertion order, as the scheduling order).
//! - No delivery to slots connected after the snapshot; they wait for the
//!   next emission. Conversely, slots disconnected after the snapshot are
//!   still invoked — the snapshot is authoritative for its emission.
//!
//! ## Diagram
//! ```text
//!    emit(args)
//!        │ lock ─ snapshot ─ unlock        (clone of args per slot)
//!        ├────────────────► task S1 ─► s1.invoke(args)
//!        ├────────────────► task S2 ─► s2.invoke(args)
//!        └────────────────► task SN ─► sN.invoke(args)
//!             ... suspend until S1..SN all finished ...
//!    Ok(()) | Err(EmitError)   (failures in connection order)
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::error::{EmitError, SlotError, SlotFailure};
use crate::slots::{SlotFn, SlotRef};

/// Asynchronous signal with a fixed argument tuple `A`.
///
/// `A` is the whole tuple: `Signal<()>` for zero-arity signals,
/// `Signal<String>` for one argument, `Signal<(String, u32)>` for two, and
/// so on. The shape is fixed at the type level for the signal's lifetime.
///
/// A signal only *references* its slots (shared `Arc` ownership); dropping
/// the signal drops the references and nothing else.
///
/// # Example
/// ```
/// use asignals::{Signal, SlotError};
///
/// # async fn demo() -> Result<(), asignals::EmitError> {
/// let signal: Signal<(String, u32)> = Signal::new();
///
/// let handler = signal
///     .connect_fn("on_event", |(name, value): (String, u32)| async move {
///         println!("event: {name}={value}");
///         Ok::<_, SlotError>(())
///     })
///     .await;
///
/// signal.emit(("test".to_string(), 42)).await?;
///
/// signal.disconnect(&handler).await;
/// assert_eq!(signal.len().await, 0);
/// # Ok(())
/// # }
/// ```
pub struct Signal<A>
where
    A: Send + 'static,
{
    /// Insertion-ordered registry; all access goes through this guard.
    slots: Mutex<Vec<SlotRef<A>>>,
}

impl<A> Signal<A>
where
    A: Clone + Send + 'static,
{
    /// Creates an empty signal.
    #[must_use]
    pub fn new() -> Self {
        Self { slots: Mutex::new(Vec::new()) }
    }

    /// Connects a slot to this signal.
    ///
    /// Appends the handle to the registry unless an entry with the same
    /// identity is already present (same `Arc` allocation; clones of one
    /// handle count as one connection). Connecting the same handle twice
    /// leaves exactly one registration.
    pub async fn connect(&self, slot: SlotRef<A>) {
        let mut slots = self.slots.lock().await;
        if !slots.iter().any(|s| Arc::ptr_eq(s, &slot)) {
            slots.push(slot);
        }
    }

    /// Wraps a closure in a [`SlotFn`], connects it, and returns the handle.
    ///
    /// Keep the returned [`SlotRef`] if you intend to
    /// [`disconnect`](Signal::disconnect) the slot later; it is the only
    /// witness of the connection's identity.
    pub async fn connect_fn<F, Fut>(
        &self,
        name: impl Into<Cow<'static, str>>,
        f: F,
    ) -> SlotRef<A>
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), SlotError>> + Send + 'static,
    {
        let slot: SlotRef<A> = SlotFn::arc(name, f);
        self.connect(Arc::clone(&slot)).await;
        slot
    }

    /// Disconnects a slot from this signal.
    ///
    /// Removes the entry with the same identity as `slot`, if present.
    /// Disconnecting a handle that is not registered is a no-op.
    pub async fn disconnect(&self, slot: &SlotRef<A>) {
        let mut slots = self.slots.lock().await;
        if let Some(idx) = slots.iter().position(|s| Arc::ptr_eq(s, slot)) {
            slots.remove(idx);
        }
    }

    /// Disconnects all slots in one atomic step.
    ///
    /// No concurrent reader can observe a partially cleared registry.
    pub async fn disconnect_all(&self) {
        let mut slots = self.slots.lock().await;
        slots.clear();
    }

    /// Emits the signal: invokes every registered slot concurrently with a
    /// clone of `args` and suspends until all invocations have finished.
    ///
    /// The guard is held only long enough to snapshot the registry, then
    /// released before anything is invoked. Slots connected after the
    /// snapshot are not invoked by this emission; slots disconnected after
    /// the snapshot still are.
    ///
    /// # Errors
    /// Returns an [`EmitError`] aggregating every failed invocation (error
    /// returns and captured panics), ordered by connection order. The
    /// registry is never modified by failures — a failing slot stays
    /// connected.
    ///
    /// # Cancellation
    /// Dropping the returned future does not cancel invocations that were
    /// already spawned; they keep running as detached background tasks.
    pub async fn emit(&self, args: A) -> Result<(), EmitError> {
        let snapshot: Vec<SlotRef<A>> = {
            let slots = self.slots.lock().await;
            slots.clone()
        };

        if snapshot.is_empty() {
            return Ok(());
        }

        let invoked = snapshot.len();
        let mut running: Vec<(Arc<str>, JoinHandle<Result<(), SlotError>>)> =
            Vec::with_capacity(invoked);

        for slot in snapshot {
            let name: Arc<str> = Arc::from(slot.name());
            let args = args.clone();

            let handle = tokio::spawn(async move {
                let fut = slot.invoke(args);
                match std::panic::AssertUnwindSafe(fut).catch_unwind().await {
                    Ok(result) => result,
                    Err(payload) => {
                        let info = {
                            let any = &*payload;
                            if let Some(msg) = any.downcast_ref::<&'static str>() {
                                (*msg).to_string()
                            } else if let Some(msg) = any.downcast_ref::<String>() {
                                msg.clone()
                            } else {
                                "unknown panic".to_string()
                            }
                        };
                        Err(SlotError::Panicked { panic: info })
                    }
                }
            });

            running.push((name, handle));
        }

        // Drain in snapshot order: every invocation finishes before any
        // failure is surfaced, and the aggregate stays deterministic no
        // matter how the tasks interleaved.
        let mut failures = Vec::new();
        for (name, handle) in running {
            let outcome = match handle.await {
                Ok(result) => result,
                // catch_unwind above handles slot panics; a join error here
                // means the runtime aborted the task out from under us.
                Err(join_err) => Err(SlotError::Panicked { panic: join_err.to_string() }),
            };
            if let Err(error) = outcome {
                failures.push(SlotFailure { slot: name, error });
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(EmitError::new(failures, invoked))
        }
    }

    /// Number of currently registered slots.
    pub async fn len(&self) -> usize {
        self.slots.lock().await.len()
    }

    /// True if no slots are registered.
    pub async fn is_empty(&self) -> bool {
        self.slots.lock().await.is_empty()
    }

    /// Whether the given handle is currently registered (identity
    /// comparison, same as [`connect`](Signal::connect)).
    pub async fn contains(&self, slot: &SlotRef<A>) -> bool {
        self.slots.lock().await.iter().any(|s| Arc::ptr_eq(s, slot))
    }
}

impl<A> Default for Signal<A>
where
    A: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
