//! Core network types and the access trait.

/// Weight of a single road between two stops.
pub type Weight = u32;

/// Accumulated cost of a tour (sum of road weights).
pub type Cost = u64;

/// Access to a stop network, as consumed by the solver and the optimizer.
///
/// Stops are exposed as dense indices `0..stop_count()`. Removing a stop
/// re-indexes the remainder while preserving the relative order, so
/// enumeration stays dense and deterministic after every mutation.
pub trait StopNetwork {
    /// Number of stops currently in the network.
    fn stop_count(&self) -> usize;

    /// Weight of the road between `a` and `b`, or `None` when no road
    /// exists. Lookups are symmetric: `road_weight(a, b)` and
    /// `road_weight(b, a)` agree.
    fn road_weight(&self, a: usize, b: usize) -> Option<Weight>;

    /// Indices of all stops directly connected to `v`.
    fn neighbors(&self, v: usize) -> Vec<usize>;

    /// Interest score of the stop. Only ranks removal priority; the tour
    /// search never reads it.
    fn interest(&self, v: usize) -> u32;

    /// Display name of the stop, for reporting.
    fn name(&self, v: usize) -> &str;

    /// Removes the stop and all its roads. Later indices shift down by
    /// one; the relative order of the survivors is unchanged.
    fn remove_stop(&mut self, v: usize);
}
