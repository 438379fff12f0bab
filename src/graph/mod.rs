//! Stop network model and access trait.
//!
//! [`TourMap`] is the concrete network: named stops with interest scores
//! and symmetric integer road weights. The solver and optimizer consume
//! any [`StopNetwork`], so callers with their own vertex storage can
//! implement the trait instead of converting into a `TourMap`.

mod gen;
mod model;
mod reader;
mod types;

pub use gen::random_complete;
pub use model::TourMap;
pub use reader::{read_network, read_network_file, ReadError};
pub use types::{Cost, StopNetwork, Weight};
