//! # Application State
//!
//! Shared state for all HTTP handlers.
//!
//! The pricing engine (catalog + tax rate) is constructed once at startup
//! and injected here as plain owned data. Because the catalog is read-only
//! after process start, concurrent requests share it through an `Arc`
//! without any locking.

use std::sync::Arc;

use knight_core::pricing::PricingEngine;

/// Shared application state.
#[derive(Debug)]
pub struct AppState {
    /// The pricing engine: injected catalog plus configured tax rate.
    pub engine: PricingEngine,
}

impl AppState {
    /// Wraps the engine for sharing across handlers.
    pub fn new(engine: PricingEngine) -> Arc<Self> {
        Arc::new(AppState { engine })
    }
}
