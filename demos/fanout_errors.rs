//! # Example: fanout_errors
//!
//! Demonstrates failure aggregation during emission.
//!
//! Shows how to:
//! - Observe that a failing slot does not cancel its siblings.
//! - Inspect [`EmitError`]: failure count, connection-ordered list,
//!   deterministic first failure.
//! - Verify the registry is untouched by failures.
//!
//! ## Run
//! ```bash
//! cargo run --example fanout_errors
//! ```

use asignals::{Signal, SlotError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let ingest: Signal<String> = Signal::new();

    ingest
        .connect_fn("validator", |payload: String| async move {
            if payload.is_empty() {
                return Err(SlotError::fail("empty payload"));
            }
            println!("[validator] ok: {payload}");
            Ok(())
        })
        .await;

    ingest
        .connect_fn("writer", |payload: String| async move {
            println!("[writer]    stored {} bytes", payload.len());
            Ok(())
        })
        .await;

    ingest
        .connect_fn("alerter", |_: String| async move {
            Err(SlotError::fail("pager service unreachable"))
        })
        .await;

    println!("--- emit(\"hello\") ---");
    match ingest.emit("hello".to_string()).await {
        Ok(()) => unreachable!("alerter always fails"),
        Err(err) => {
            println!("emission failed: {err}");
            for failure in err.failures() {
                println!("  - {} [{}]", failure, failure.error.as_label());
            }
        }
    }

    println!("--- emit(\"\") ---");
    if let Err(err) = ingest.emit(String::new()).await {
        println!(
            "emission failed: {} of {} invocations, first from '{}'",
            err.failures().len(),
            err.invoked(),
            err.first().slot
        );
    }

    // Failures never auto-disconnect.
    println!("slots still connected: {}", ingest.len().await);
    Ok(())
}
