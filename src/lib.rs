#![doc(test(attr(deny(warnings))))]

//! Package Express offers an interactive shipping-quote wizard: a small
//! conversational state machine that collects package weight and
//! dimensions, validates them, and produces a flat-rate quote.

pub mod cli;
pub mod errors;
pub mod utils;
pub mod wizard;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Package Express tracing initialized.");
    });
}
