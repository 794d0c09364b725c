//! # Example: basic
//!
//! Demonstrates the core signal/slot flow.
//!
//! Shows how to:
//! - Create a [`Signal`] parametrized by an argument tuple.
//! - Connect slots with [`Signal::connect_fn`] and a hand-rolled [`SlotFn`].
//! - Emit concurrently and disconnect one slot.
//!
//! ## Flow
//! ```text
//! Signal<(String, u32)>
//!     ├─► connect_fn("log")       ──┐
//!     ├─► connect(SlotFn "process") ┼─► emit("hello", 3)  (both invoked)
//!     ├─► disconnect(process)     ──┘
//!     └─► emit("world", 5)            (only "log" invoked)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example basic
//! ```

use std::sync::Arc;

use asignals::{Signal, SlotError, SlotFn, SlotRef};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let data_received: Signal<(String, u32)> = Signal::new();

    // Closure slot, connected and handed back in one step.
    let log = data_received
        .connect_fn("log", |(data, count): (String, u32)| async move {
            println!("[log]     {data} ({count})");
            Ok::<_, SlotError>(())
        })
        .await;

    // Slot built first, connected separately; the Arc is the identity.
    let process: SlotRef<(String, u32)> =
        SlotFn::arc("process", |(data, count): (String, u32)| async move {
            println!("[process] {} ({count})", data.to_uppercase());
            Ok::<_, SlotError>(())
        });
    data_received.connect(Arc::clone(&process)).await;

    println!("slots connected: {}", data_received.len().await);
    data_received.emit(("hello".to_string(), 3)).await?;

    data_received.disconnect(&process).await;
    println!("after disconnect: {}", data_received.len().await);
    data_received.emit(("world".to_string(), 5)).await?;

    println!("log still connected: {}", data_received.contains(&log).await);
    Ok(())
}
