//! # Simple logging slot for debugging and demos.
//!
//! [`LogSlot`] prints every emission to stdout in a human-readable format.
//! This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [emit] ("hello", 3)
//! [emit] ()
//! ```

use std::fmt;

use async_trait::async_trait;

use crate::error::SlotError;
use crate::slots::slot::Slot;

/// Simple stdout logging slot.
///
/// Enabled via the `logging` feature. Prints the emitted argument tuple with
/// its `Debug` representation.
///
/// Not intended for production use - implement a custom [`Slot`] for
/// structured logging or metrics collection.
pub struct LogSlot;

#[async_trait]
impl<A> Slot<A> for LogSlot
where
    A: fmt::Debug + Send + 'static,
{
    async fn invoke(&self, args: A) -> Result<(), SlotError> {
        println!("[emit] {args:?}");
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}
