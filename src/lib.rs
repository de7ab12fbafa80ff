// =============================================================================
// marketmood — composite market-sentiment index engine
// =============================================================================
//
// Computes a fear/greed style composite from two daily close series (a broad
// equity benchmark and a long-duration bond benchmark): three rolling-window
// sub-indicators — momentum, strength, safe-haven demand — merged by date
// into one record per trading day.

pub mod config;
pub mod engine;
pub mod error;
pub mod indicators;
pub mod series;
pub mod types;

pub use config::EngineConfig;
pub use engine::IndexEngine;
pub use error::EngineError;
pub use types::{IndexRecord, PricePoint};
