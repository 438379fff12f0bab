//! Result and error types for the tour search.

use thiserror::Error;

use crate::graph::Cost;

/// A closed tour through every stop of a network.
///
/// The sequence starts and ends at the same stop and visits every other
/// stop exactly once, so its length is always `V + 1`. The value is a
/// copy, independent of any later mutation of the network it was solved
/// on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    /// Visited stop indices; `stops[0] == stops[V]`.
    pub stops: Vec<usize>,
    /// Total weight of all roads along the tour.
    pub cost: Cost,
}

/// Why the solver could not produce a tour.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Fewer than two stops.
    #[error("invalid graph: {stops} stop(s), a tour needs at least 2")]
    InvalidGraph { stops: usize },
    /// The requested start stop does not exist.
    #[error("invalid start: stop {start} not in a network of {stops} stop(s)")]
    InvalidStart { start: usize, stops: usize },
    /// No closed tour through every stop exists on this network.
    #[error("no closed tour visits every stop")]
    NoTourExists,
}
