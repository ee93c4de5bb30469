//! OS signal handling.
//!
//! # Responsibilities
//! - Cancel the root context on Ctrl+C so in-flight requests and polls stop
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Tokio owns SIGINT once registered, so the handler keeps listening
//! - A second Ctrl+C forces the process to exit

use crate::lifecycle::Context;

/// Exit status when a repeated interrupt forces the process down.
pub const FORCED_EXIT_CODE: i32 = 130;

/// What to do on the `count`-th interrupt (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptAction {
    Cancel,
    Exit,
}

pub fn interrupt_action(count: u32) -> InterruptAction {
    if count <= 1 {
        InterruptAction::Cancel
    } else {
        InterruptAction::Exit
    }
}

/// Cancel `ctx` on the first Ctrl+C and exit on the second.
pub fn cancel_on_ctrl_c(ctx: &Context) {
    let ctx = ctx.clone();
    tokio::spawn(async move {
        let mut interrupts = 0u32;
        loop {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
                return;
            }
            interrupts += 1;

            match interrupt_action(interrupts) {
                InterruptAction::Cancel => {
                    tracing::warn!("Interrupt received, cancelling in-flight operations");
                    ctx.cancel();
                }
                InterruptAction::Exit => {
                    tracing::error!("Second interrupt received, exiting");
                    std::process::exit(FORCED_EXIT_CODE);
                }
            }
        }
    });
}
