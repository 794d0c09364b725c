//! # Example: self_disconnect
//!
//! Demonstrates reentrancy: a slot that disconnects itself during its own
//! invocation (a one-shot subscription).
//!
//! The emission snapshot is taken before any slot runs, so the one-shot
//! slot is still invoked for the emission that removes it; later emissions
//! skip it.
//!
//! ## Run
//! ```bash
//! cargo run --example self_disconnect
//! ```

use std::sync::{Arc, OnceLock};

use asignals::{Signal, SlotFn, SlotRef};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let ticks: Arc<Signal<u64>> = Arc::new(Signal::new());

    ticks
        .connect_fn("steady", |tick: u64| async move {
            println!("[steady]   tick {tick}");
            Ok(())
        })
        .await;

    // The slot needs its own handle to disconnect itself; the cell is
    // filled right after construction, before the slot can ever run.
    let self_cell: Arc<OnceLock<SlotRef<u64>>> = Arc::new(OnceLock::new());

    let signal = ticks.clone();
    let cell = self_cell.clone();
    let one_shot: SlotRef<u64> = SlotFn::arc("one_shot", move |tick: u64| {
        let signal = signal.clone();
        let cell = cell.clone();
        async move {
            println!("[one_shot] tick {tick}, unsubscribing");
            if let Some(me) = cell.get() {
                signal.disconnect(me).await;
            }
            Ok(())
        }
    });
    self_cell.set(Arc::clone(&one_shot)).ok();
    ticks.connect(Arc::clone(&one_shot)).await;

    for tick in 0..3 {
        println!("--- emit({tick}) ---");
        ticks.emit(tick).await?;
    }

    println!("remaining slots: {}", ticks.len().await);
    Ok(())
}
