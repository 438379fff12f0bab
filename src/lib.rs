//! Exact tour planning under a cost budget.
//!
//! Two collaborating pieces:
//!
//! - **[`bnb`]**: exact branch-and-bound search for the minimum-cost
//!   closed tour over a weighted stop network, pruned by a lower bound
//!   built from each stop's two cheapest incident roads.
//! - **[`itinerary`]**: a reduction loop that re-runs the exact search,
//!   dropping the least interesting stop each round, until the optimal
//!   tour fits a caller-supplied budget.
//!
//! The [`graph`] module supplies what both consume: named stops with
//! interest scores, symmetric integer road weights, a plain-text loader,
//! and random instance generation for tests and benchmarks.
//!
//! # Example
//!
//! ```
//! use tourbound::graph::TourMap;
//! use tourbound::itinerary::{ItineraryConfig, ItineraryOptimizer};
//!
//! let mut map = TourMap::new();
//! let a = map.add_stop("Museum", 5);
//! let b = map.add_stop("Harbour", 1);
//! let c = map.add_stop("Old Town", 9);
//! map.add_road(a, b, 10);
//! map.add_road(a, c, 15);
//! map.add_road(b, c, 35);
//!
//! let result = ItineraryOptimizer::run(&mut map, &ItineraryConfig::new(60)).unwrap();
//! assert_eq!(result.tour.cost, 60);
//! assert!(result.dropped.is_empty());
//! ```

pub mod bnb;
pub mod graph;
pub mod itinerary;
