#![doc(test(attr(deny(warnings))))]

//! Car Rental offers the booking core behind a rental catalog: pricing,
//! step validation, the four-step booking wizard, localized booking messages
//! and the messaging handoff that completes a booking.

pub mod booking;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Car Rental tracing initialized.");
    });
}
