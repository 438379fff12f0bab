//! Random instance generation for tests and benchmarks.

use std::ops::RangeInclusive;

use rand::Rng;

use super::model::TourMap;
use super::types::Weight;

/// Builds a complete network of `n` stops with road weights drawn
/// uniformly from `weights` and interest scores from `0..100`.
pub fn random_complete<R: Rng>(n: usize, weights: RangeInclusive<Weight>, rng: &mut R) -> TourMap {
    let mut map = TourMap::new();
    for i in 0..n {
        let interest = rng.random_range(0..100);
        map.add_stop(format!("S{i}"), interest);
    }
    for a in 0..n {
        for b in (a + 1)..n {
            map.add_road(a, b, rng.random_range(weights.clone()));
        }
    }
    map
}
