//! The budget reduction loop.

use log::info;

use super::config::ItineraryConfig;
use super::types::{DroppedStop, ItineraryResult, OptimizeError};
use crate::bnb::{BnbSolver, SolveError};
use crate::graph::StopNetwork;

/// Fewest stops that still form a closed tour.
const MIN_TOUR_STOPS: usize = 3;

/// Shrinks the network one stop at a time until an exact tour fits the
/// budget.
///
/// Each round solves the current network exactly; when the optimum still
/// exceeds the budget, the stop with the lowest interest score is removed
/// (the first-encountered index wins ties) and the search repeats.
/// Removal is destructive: callers wanting the full network afterwards
/// should clone it first.
pub struct ItineraryOptimizer;

impl ItineraryOptimizer {
    /// Runs the reduction loop to completion.
    ///
    /// Terminates after at most `V` solves: every round either fits the
    /// budget, removes one stop, or gives up once fewer than three stops
    /// remain.
    pub fn run<G: StopNetwork>(
        graph: &mut G,
        config: &ItineraryConfig,
    ) -> Result<ItineraryResult, OptimizeError> {
        let mut dropped: Vec<DroppedStop> = Vec::new();
        let mut start = config.start;
        let mut solves = 0usize;

        loop {
            let solved = BnbSolver::solve(graph, start);
            solves += 1;

            let tour = match solved {
                Ok(tour) => tour,
                Err(SolveError::NoTourExists) if !dropped.is_empty() => {
                    // our own removals disconnected the network
                    return Err(OptimizeError::Infeasible {
                        budget: config.budget,
                        remaining: graph.stop_count(),
                        dropped,
                    });
                }
                Err(err) => return Err(err.into()),
            };

            if tour.cost <= config.budget {
                return Ok(ItineraryResult {
                    tour,
                    dropped,
                    solves,
                });
            }

            let victim = least_interesting(graph);
            info!(
                "tour cost {} over budget {}, dropping {} (interest {})",
                tour.cost,
                config.budget,
                graph.name(victim),
                graph.interest(victim)
            );
            dropped.push(DroppedStop {
                name: graph.name(victim).to_owned(),
                interest: graph.interest(victim),
                tour_cost: tour.cost,
            });
            graph.remove_stop(victim);

            // removal shifts later indices down; keep the tour anchored
            if victim < start {
                start -= 1;
            } else if victim == start {
                start = 0;
            }

            if graph.stop_count() < MIN_TOUR_STOPS {
                return Err(OptimizeError::Infeasible {
                    budget: config.budget,
                    remaining: graph.stop_count(),
                    dropped,
                });
            }
        }
    }
}

/// Index of the stop with the smallest interest score; the first one
/// encountered wins ties.
fn least_interesting<G: StopNetwork>(graph: &G) -> usize {
    (1..graph.stop_count()).fold(0, |best, v| {
        if graph.interest(v) < graph.interest(best) {
            v
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::TourMap;

    /// The worked network: full-tour optimum 80, interests A=5 B=1 C=9 D=3.
    fn k4() -> TourMap {
        let mut map = TourMap::new();
        for (name, interest) in [("A", 5), ("B", 1), ("C", 9), ("D", 3)] {
            map.add_stop(name, interest);
        }
        map.add_road(0, 1, 10);
        map.add_road(0, 2, 15);
        map.add_road(0, 3, 20);
        map.add_road(1, 2, 35);
        map.add_road(1, 3, 25);
        map.add_road(2, 3, 30);
        map
    }

    #[test]
    fn test_fitting_budget_drops_nothing() {
        let mut map = k4();
        let result =
            ItineraryOptimizer::run(&mut map, &ItineraryConfig::new(80)).expect("80 fits");
        assert_eq!(result.tour.cost, 80);
        assert!(result.dropped.is_empty());
        assert_eq!(result.solves, 1);
        assert_eq!(map.stop_count(), 4);
    }

    #[test]
    fn test_drops_lowest_interest_first() {
        let mut map = k4();
        let result =
            ItineraryOptimizer::run(&mut map, &ItineraryConfig::new(70)).expect("70 fits on 3");

        // B (interest 1) goes; A-C-D-A costs 15 + 30 + 20 = 65
        assert_eq!(result.tour.cost, 65);
        assert_eq!(result.solves, 2);
        assert_eq!(result.dropped.len(), 1);
        assert_eq!(result.dropped[0].name, "B");
        assert_eq!(result.dropped[0].interest, 1);
        assert_eq!(result.dropped[0].tour_cost, 80);

        // the tour indexes into the reduced network
        assert_eq!(map.stop_count(), 3);
        let names: Vec<&str> = result.tour.stops.iter().map(|&v| map.name(v)).collect();
        assert_eq!(names[0], "A");
        assert_eq!(names[3], "A");
    }

    #[test]
    fn test_infeasible_when_too_few_stops_remain() {
        let mut map = k4();
        let err = ItineraryOptimizer::run(&mut map, &ItineraryConfig::new(50)).unwrap_err();

        match err {
            OptimizeError::Infeasible {
                budget,
                remaining,
                dropped,
            } => {
                assert_eq!(budget, 50);
                assert_eq!(remaining, 2);
                let names: Vec<&str> = dropped.iter().map(|d| d.name.as_str()).collect();
                assert_eq!(names, ["B", "D"]);
                assert_eq!(dropped[0].tour_cost, 80);
                assert_eq!(dropped[1].tour_cost, 65);
            }
            other => panic!("expected Infeasible, got {other:?}"),
        }
        assert_eq!(map.stop_count(), 2);
    }

    #[test]
    fn test_tie_breaks_on_first_index() {
        let mut map = TourMap::new();
        for (name, interest) in [("A", 5), ("B", 2), ("C", 2), ("D", 7)] {
            map.add_stop(name, interest);
        }
        for a in 0..4 {
            for b in (a + 1)..4 {
                map.add_road(a, b, 10);
            }
        }
        // full tour costs 40; force exactly one removal
        let result =
            ItineraryOptimizer::run(&mut map, &ItineraryConfig::new(30)).expect("30 fits on 3");
        assert_eq!(result.dropped.len(), 1);
        assert_eq!(result.dropped[0].name, "B");
    }

    #[test]
    fn test_start_shifts_past_removed_stop() {
        let mut map = k4();
        let config = ItineraryConfig::new(70).with_start(2);
        let result = ItineraryOptimizer::run(&mut map, &config).expect("70 fits on 3");

        assert_eq!(result.tour.cost, 65);
        // B sat below C, so C slid from index 2 to 1
        assert_eq!(map.name(result.tour.stops[0]), "C");
    }

    #[test]
    fn test_dropping_the_start_reanchors() {
        let mut map = k4();
        let config = ItineraryConfig::new(70).with_start(1); // start at B
        let result = ItineraryOptimizer::run(&mut map, &config).expect("70 fits on 3");

        assert_eq!(result.tour.cost, 65);
        assert_eq!(map.name(result.tour.stops[0]), "A");
    }

    #[test]
    fn test_untourable_input_is_the_solvers_error() {
        let mut map = TourMap::new();
        for name in ["A", "B", "C"] {
            map.add_stop(name, 0);
        }
        map.add_road(0, 1, 10);
        map.add_road(0, 2, 15);

        let err = ItineraryOptimizer::run(&mut map, &ItineraryConfig::new(100)).unwrap_err();
        assert!(matches!(
            err,
            OptimizeError::Solve(SolveError::NoTourExists)
        ));
    }

    #[test]
    fn test_empty_network_is_invalid() {
        let mut map = TourMap::new();
        let err = ItineraryOptimizer::run(&mut map, &ItineraryConfig::new(10)).unwrap_err();
        assert!(matches!(
            err,
            OptimizeError::Solve(SolveError::InvalidGraph { stops: 0 })
        ));
    }

    #[test]
    fn test_each_round_solved_the_graph_it_saw() {
        // every intermediate tour must be valid for the network size at
        // that round: V+1 stops recorded per solve via the dropped report
        let mut map = k4();
        let err = ItineraryOptimizer::run(&mut map, &ItineraryConfig::new(0)).unwrap_err();
        match err {
            OptimizeError::Infeasible { dropped, .. } => {
                assert_eq!(dropped.len(), 2);
                // costs shrink as the network shrinks, and stay over budget
                assert!(dropped[0].tour_cost >= dropped[1].tour_cost);
                assert!(dropped[1].tour_cost > 0);
            }
            other => panic!("expected Infeasible, got {other:?}"),
        }
    }
}
