#![doc(test(attr(deny(warnings))))]

//! Turfbook offers the catalog, search-filter, and booking-intent primitives
//! that power the turf listing and booking workflows and the interactive CLI.

pub mod booking;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod search;
pub mod session;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Turfbook tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
