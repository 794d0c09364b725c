//! Error types produced by slot invocations and signal emission.
//!
//! This module defines the failure taxonomy of the crate:
//!
//! - [`SlotError`] — what a single slot invocation produces when it fails.
//! - [`SlotFailure`] — one failed invocation, tagged with the slot's name.
//! - [`EmitError`] — everything that failed during one emission, in
//!   connection order.
//!
//! The types provide helper methods (`as_label`, `as_message`) for
//! logging/metrics.
//!
//! ## No-op cases are not errors
//! Disconnecting an unregistered slot, checking containment of an unknown
//! handle, and connecting an already-connected handle are all defined as
//! no-ops by [`Signal`](crate::Signal); nothing in this module represents
//! them.

use std::sync::Arc;

use thiserror::Error;

/// # Errors produced by a single slot invocation.
///
/// A slot either returns [`SlotError::Fail`] itself, or panics, in which
/// case the emitter captures the payload as [`SlotError::Panicked`].
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SlotError {
    /// Slot body returned an application-level failure.
    #[error("execution failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Slot body panicked; the panic payload was captured by the emitter.
    ///
    /// A panicking slot never unwinds into `emit` and never affects its
    /// sibling invocations.
    #[error("panicked: {panic}")]
    Panicked {
        /// Text extracted from the panic payload.
        panic: String,
    },
}

impl SlotError {
    /// Builds a [`SlotError::Fail`] from anything displayable.
    ///
    /// # Example
    /// ```
    /// use asignals::SlotError;
    ///
    /// let err = SlotError::fail("connection refused");
    /// assert_eq!(err.as_label(), "slot_failed");
    /// ```
    pub fn fail(error: impl Into<String>) -> Self {
        SlotError::Fail { error: error.into() }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            SlotError::Fail { .. } => "slot_failed",
            SlotError::Panicked { .. } => "slot_panicked",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            SlotError::Fail { error } => format!("error: {error}"),
            SlotError::Panicked { panic } => format!("panic: {panic}"),
        }
    }
}

/// One failed invocation within an emission.
///
/// Carries the slot's diagnostics name (see
/// [`Slot::name`](crate::Slot::name)) so the failure can be attributed
/// without holding a reference to the slot itself.
#[derive(Error, Debug)]
#[error("slot '{slot}' {error}")]
pub struct SlotFailure {
    /// Name of the failing slot.
    pub slot: Arc<str>,
    /// What the invocation produced.
    pub error: SlotError,
}

/// # Error returned by [`Signal::emit`](crate::Signal::emit).
///
/// Aggregates every failed invocation of one emission. Failures are ordered
/// by the emission snapshot, i.e. by connection order, so
/// [`EmitError::first`] is deterministic regardless of how the concurrent
/// invocations happened to interleave.
///
/// An `EmitError` always contains at least one failure; a fully successful
/// emission returns `Ok(())` instead.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use asignals::{EmitError, SlotError, SlotFailure};
///
/// let err = EmitError::new(
///     vec![SlotFailure { slot: Arc::from("process"), error: SlotError::fail("boom") }],
///     3,
/// );
/// assert_eq!(err.invoked(), 3);
/// assert_eq!(err.first().slot.as_ref(), "process");
/// assert!(err.to_string().contains("process"));
/// ```
#[derive(Error, Debug)]
#[error("{} of {invoked} slot invocation(s) failed; first: {}", .failures.len(), first_line(.failures))]
pub struct EmitError {
    /// All failures, ordered by connection order.
    failures: Vec<SlotFailure>,
    /// How many invocations the emission scheduled in total.
    invoked: usize,
}

/// Formats the lowest-index failure for the `Display` impl.
fn first_line(failures: &[SlotFailure]) -> String {
    match failures.first() {
        Some(f) => f.to_string(),
        None => "<none>".to_string(),
    }
}

impl EmitError {
    /// Creates an aggregate from the collected failures.
    ///
    /// `failures` must not be empty and must already be in connection order;
    /// [`Signal::emit`](crate::Signal::emit) is the only expected caller.
    pub fn new(failures: Vec<SlotFailure>, invoked: usize) -> Self {
        debug_assert!(!failures.is_empty(), "EmitError with no failures");
        Self { failures, invoked }
    }

    /// All failures of this emission, in connection order.
    #[must_use]
    pub fn failures(&self) -> &[SlotFailure] {
        &self.failures
    }

    /// The failure with the lowest connection index.
    ///
    /// # Panics
    /// Never in practice: an `EmitError` is only constructed with at least
    /// one failure.
    #[must_use]
    pub fn first(&self) -> &SlotFailure {
        &self.failures[0]
    }

    /// Total number of invocations the emission scheduled (failed or not).
    #[must_use]
    pub fn invoked(&self) -> usize {
        self.invoked
    }
}
