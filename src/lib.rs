//! # asignals
//!
//! **asignals** is a type-safe asynchronous signal/slot primitive for Rust.
//!
//! A [`Signal`] owns a registry of async callbacks ("slots") and broadcasts
//! each emission to all of them concurrently, suspending until every slot
//! has finished. It is a building block for decoupled event notification:
//! many independent listeners react to one event without the emitter
//! knowing about any of them.
//!
//! ## Architecture
//! ```text
//!             connect / disconnect / disconnect_all / len / contains
//!                                   │
//!                                   ▼ (async mutex, short critical sections)
//!                      ┌──────────────────────────┐
//!                      │  Signal<A>               │
//!                      │  slots: [S1, S2, .., SN] │   insertion order,
//!                      └────────────┬─────────────┘   no duplicates
//!                                   │
//!        emit(args): lock ─ snapshot ─ unlock, then fan out
//!                                   │
//!                 ┌─────────────────┼─────────────────┐
//!                 ▼                 ▼                 ▼
//!             task S1           task S2           task SN      (concurrent)
//!             S1.invoke(args)  S2.invoke(args)  SN.invoke(args)
//!                 └─────────────────┼─────────────────┘
//!                                   ▼
//!              await all ─► Ok(()) | Err(EmitError { failures })
//! ```
//!
//! ## Guarantees
//! | Area           | Behavior                                                               |
//! |----------------|------------------------------------------------------------------------|
//! | **Identity**   | A connection is an `Arc` allocation; clones of one [`SlotRef`] are one connection. |
//! | **Idempotence**| Connecting the same handle twice stores it once.                       |
//! | **Snapshot**   | An emission invokes exactly the slots registered when it started.      |
//! | **Isolation**  | One slot's failure or panic never cancels its siblings.                |
//! | **Reentrancy** | Slots may connect/disconnect/emit on their own signal without deadlock.|
//! | **Errors**     | [`EmitError`] aggregates all failures, ordered by connection order.    |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogSlot`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use asignals::{Signal, SlotError};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // The type parameter is the whole argument tuple.
//!     let data_received: Signal<(String, u32)> = Signal::new();
//!
//!     let log = data_received
//!         .connect_fn("log", |(data, count): (String, u32)| async move {
//!             println!("log: {data} ({count})");
//!             Ok::<_, SlotError>(())
//!         })
//!         .await;
//!
//!     data_received
//!         .connect_fn("process", |(data, count): (String, u32)| async move {
//!             println!("process: {} ({count})", data.to_uppercase());
//!             Ok::<_, SlotError>(())
//!         })
//!         .await;
//!
//!     // Both slots run concurrently; emit waits for both.
//!     data_received.emit(("hello".to_string(), 5)).await?;
//!
//!     data_received.disconnect(&log).await;
//!     assert_eq!(data_received.len().await, 1);
//!     Ok(())
//! }
//! ```

mod error;
mod signal;
mod slots;

// ---- Public re-exports ----

pub use error::{EmitError, SlotError, SlotFailure};
pub use signal::Signal;
pub use slots::{Slot, SlotFn, SlotRef};

// Optional: expose a simple built-in logging slot (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use slots::LogSlot;
