//! Budget-driven itinerary reduction.
//!
//! Repeatedly solves the exact tour and removes the least interesting
//! stop until the optimum fits the configured budget, or too few stops
//! remain to close a tour.

mod config;
mod runner;
mod types;

pub use config::ItineraryConfig;
pub use runner::ItineraryOptimizer;
pub use types::{DroppedStop, ItineraryResult, OptimizeError};
