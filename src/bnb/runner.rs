//! Depth-first branch-and-bound over tour permutations.

use log::debug;

use super::bounds::{edge_mins, root_bound, EdgeMins};
use super::types::{SolveError, Tour};
use crate::graph::{Cost, StopNetwork};

/// Exact tour search.
///
/// Carries a running lower bound that starts at the root estimate and
/// tightens as roads are committed; a branch is cut as soon as
/// `bound + weight so far` can no longer beat the best complete tour
/// already found.
pub struct BnbSolver;

/// Mutable search state owned by a single `solve` call.
///
/// `path` is the committed prefix (the start stop is `path[0]`), `weight`
/// the sum of its roads, `bound` the running lower bound on any
/// completion of the prefix.
struct SearchState {
    path: Vec<usize>,
    visited: Vec<bool>,
    weight: i64,
    bound: i64,
}

struct BestTour {
    stops: Vec<usize>,
    cost: i64,
}

impl BnbSolver {
    /// Finds the minimum-cost closed tour starting and ending at `start`.
    ///
    /// Deterministic: two calls on the same unmodified network return the
    /// same tour. Worst case explores `O(V!)` prefixes.
    pub fn solve<G: StopNetwork>(graph: &G, start: usize) -> Result<Tour, SolveError> {
        let n = graph.stop_count();
        if n < 2 {
            return Err(SolveError::InvalidGraph { stops: n });
        }
        if start >= n {
            return Err(SolveError::InvalidStart { start, stops: n });
        }
        if n == 2 {
            // out-and-back over the single road; the two-cheapest-roads
            // bound needs two distinct roads per stop and does not apply
            let other = 1 - start;
            return match graph.road_weight(start, other) {
                Some(w) => Ok(Tour {
                    stops: vec![start, other, start],
                    cost: 2 * Cost::from(w),
                }),
                None => Err(SolveError::NoTourExists),
            };
        }

        let Some(mins) = edge_mins(graph) else {
            return Err(SolveError::NoTourExists);
        };
        let bound = root_bound(&mins);
        debug!("searching {n} stops from {start}, root bound {bound}");

        let mut state = SearchState {
            path: Vec::with_capacity(n + 1),
            visited: vec![false; n],
            weight: 0,
            bound,
        };
        state.path.push(start);
        state.visited[start] = true;

        let mut best: Option<BestTour> = None;
        extend(graph, &mins, &mut state, &mut best);

        match best {
            Some(b) => {
                debug!("optimal tour cost {}", b.cost);
                Ok(Tour {
                    stops: b.stops,
                    cost: b.cost as Cost,
                })
            }
            None => Err(SolveError::NoTourExists),
        }
    }
}

fn extend<G: StopNetwork>(
    graph: &G,
    mins: &[EdgeMins],
    state: &mut SearchState,
    best: &mut Option<BestTour>,
) {
    let n = graph.stop_count();
    let level = state.path.len();
    let here = state.path[level - 1];

    if level == n {
        // close the cycle back to the start, if a road exists
        let start = state.path[0];
        if let Some(back) = graph.road_weight(here, start) {
            let cost = state.weight + i64::from(back);
            if best.as_ref().is_none_or(|b| cost < b.cost) {
                let mut stops = state.path.clone();
                stops.push(start);
                *best = Some(BestTour { stops, cost });
            }
        }
        return;
    }

    for next in 0..n {
        if state.visited[next] {
            continue;
        }
        let Some(w) = graph.road_weight(here, next) else {
            continue;
        };

        // Committing the road u -> v releases part of the optimistic
        // per-stop estimate: u has spent one of its two cheapest roads
        // (only its cheapest when u is still the start), v none yet.
        // Truncating division keeps the bound an underestimate.
        let spent = if level == 1 {
            (i64::from(mins[here].first) + i64::from(mins[next].first)) / 2
        } else {
            (i64::from(mins[here].second) + i64::from(mins[next].first)) / 2
        };
        let bound = state.bound - spent;
        let weight = state.weight + i64::from(w);

        if best.as_ref().is_none_or(|b| bound + weight < b.cost) {
            let (prev_bound, prev_weight) = (state.bound, state.weight);
            state.bound = bound;
            state.weight = weight;
            state.path.push(next);
            state.visited[next] = true;

            extend(graph, mins, state, best);

            state.visited[next] = false;
            state.path.pop();
            state.bound = prev_bound;
            state.weight = prev_weight;
        }
    }
}
