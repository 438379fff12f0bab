//! Result and error types for the reduction loop.

use thiserror::Error;

use crate::bnb::{SolveError, Tour};
use crate::graph::Cost;

/// A stop removed during budget reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DroppedStop {
    /// Display name at the time of removal.
    pub name: String,
    /// Interest score that made it the cheapest stop to lose.
    pub interest: u32,
    /// Cost of the over-budget tour that triggered the removal.
    pub tour_cost: Cost,
}

/// Outcome of a successful reduction run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItineraryResult {
    /// The cheapest tour that fits the budget, on the reduced network.
    pub tour: Tour,
    /// Stops removed to get there, in removal order.
    pub dropped: Vec<DroppedStop>,
    /// Number of exact solves performed.
    pub solves: usize,
}

/// Why no itinerary within budget exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizeError {
    /// The budget cannot be met even after shrinking the network to the
    /// minimum tourable size.
    #[error("no tour within budget {budget}; {remaining} stop(s) remain")]
    Infeasible {
        budget: Cost,
        remaining: usize,
        /// Stops removed before giving up, in removal order.
        dropped: Vec<DroppedStop>,
    },
    /// The search failed before the budget question could be settled.
    #[error(transparent)]
    Solve(#[from] SolveError),
}
