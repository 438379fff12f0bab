//! Lower-bound bookkeeping for the branch-and-bound search.

use crate::graph::{StopNetwork, Weight};

/// The two cheapest road weights incident to one stop.
///
/// Any closed tour enters and leaves each stop exactly once, so summing
/// `first + second` over all stops counts every road a tour could use at
/// most twice. Half of that sum therefore never exceeds the cost of any
/// closed tour. Two equally cheap roads occupy both slots.
#[derive(Debug, Clone, Copy)]
pub(super) struct EdgeMins {
    pub first: Weight,
    pub second: Weight,
}

/// Scans every stop's incident roads.
///
/// Returns `None` when some stop has fewer than two roads; no closed tour
/// can pass through such a stop, so the search is pointless.
pub(super) fn edge_mins<G: StopNetwork>(graph: &G) -> Option<Vec<EdgeMins>> {
    (0..graph.stop_count())
        .map(|v| {
            let mut first: Option<Weight> = None;
            let mut second: Option<Weight> = None;
            for u in graph.neighbors(v) {
                let Some(w) = graph.road_weight(v, u) else {
                    continue;
                };
                if first.is_none_or(|f| w <= f) {
                    second = first;
                    first = Some(w);
                } else if second.is_none_or(|s| w < s) {
                    second = Some(w);
                }
            }
            match (first, second) {
                (Some(first), Some(second)) => Some(EdgeMins { first, second }),
                _ => None,
            }
        })
        .collect()
}

/// Half the sum of the two cheapest roads at every stop, rounded up.
///
/// Tour costs are integers, so an odd sum rounds up without passing the
/// true optimum.
pub(super) fn root_bound(mins: &[EdgeMins]) -> i64 {
    let sum: i64 = mins
        .iter()
        .map(|m| i64::from(m.first) + i64::from(m.second))
        .sum();
    (sum + 1) / 2
}
