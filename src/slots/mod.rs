//! # Slots: the callback side of a signal.
//!
//! This module provides the [`Slot`] trait, the [`SlotRef`] handle type, and
//! built-in implementations.
//!
//! ## Architecture
//! ```text
//! Emission flow:
//!   Signal::emit(args) ── snapshot ──► one task per slot (concurrent)
//!                                          │
//!                                     ┌────┴─────┬──────────┐
//!                                     ▼          ▼          ▼
//!                                  SlotFn     LogSlot    custom Slot
//!                                  .invoke()  .invoke()  .invoke()
//! ```
//!
//! ## Implementing custom slots
//! ```
//! use async_trait::async_trait;
//! use asignals::{Slot, SlotError};
//!
//! struct Metrics;
//!
//! #[async_trait]
//! impl Slot<u64> for Metrics {
//!     async fn invoke(&self, value: u64) -> Result<(), SlotError> {
//!         // record value...
//!         let _ = value;
//!         Ok(())
//!     }
//! }
//! ```

mod slot;
mod slot_fn;

#[cfg(feature = "logging")]
mod log;

pub use slot::{Slot, SlotRef};
pub use slot_fn::SlotFn;

#[cfg(feature = "logging")]
pub use log::LogSlot;
