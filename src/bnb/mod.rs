//! Exact branch-and-bound tour search.
//!
//! Explores tour permutations depth-first and prunes with a lower bound
//! assembled from each stop's two cheapest incident roads, in the style
//! of the Held-Karp 1-tree relaxation. Worst case is factorial; the bound
//! cuts most of that on well-connected networks.
//!
//! # References
//!
//! - Held & Karp (1970), "The Traveling-Salesman Problem and Minimum
//!   Spanning Trees"
//! - Little, Murty, Sweeney & Karel (1963), "An Algorithm for the
//!   Traveling Salesman Problem"

mod bounds;
mod runner;
mod types;

pub use runner::BnbSolver;
pub use types::{SolveError, Tour};
