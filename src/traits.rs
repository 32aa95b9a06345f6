//! Core trait for layered dynamic programs.
//!
//! To run a recurrence through [`LayeredEngine`](crate::engine::LayeredEngine),
//! implement [`LayeredProblem`] for a struct that captures one instance
//! (the digit sequence and the requested count, for the strategies in this
//! crate).
//!
//! The interface mirrors the shape of a bottom-up table fill:
//! - Layers `0..=T`, where layer `l + 1` is computed from layer `l` alone.
//! - Frontiers: the full column of DP values on one layer.
//! - Boundaries: the constraint carried while walking back down the layers
//!   (for digit selection, the first index still available).
//! - Backtrace: given two adjacent frontiers and the boundary on the upper
//!   one, commit one state and return the boundary on the lower one.
//!
//! The engine decides which frontiers to keep in memory and which to
//! recompute; implementations only ever see adjacent layers.

/// Trait for a layered DP instance.
///
/// Semantics:
/// - There are `T = num_layers()` forward steps.
/// - `init_frontier()` is layer 0; `forward_step(l, f_l)` yields layer `l+1`.
/// - Reconstruction starts at layer `T` from `terminal_boundary(f_T)` and
///   calls `trace_step` for `l = T-1, ..., 0`, then `trace_base` on layer 0.
/// - The engine emits states in the order they are committed.
pub trait LayeredProblem {
    /// One committed decision along the reconstructed path.
    type State: Clone;

    /// All DP values on one layer.
    type Frontier: Clone;

    /// Constraint on which states remain reachable at a layer.
    type Boundary: Clone;

    /// Objective type. Larger or smaller is better depending on the problem;
    /// the engine only passes it through.
    type Cost: Copy + Ord;

    /// Number of forward steps `T`.
    fn num_layers(&self) -> usize;

    /// Frontier at layer 0.
    fn init_frontier(&self) -> Self::Frontier;

    /// One DP step: layer `layer` to `layer + 1`.
    ///
    /// Must depend only on `frontier` and fixed problem data.
    fn forward_step(&self, layer: usize, frontier: &Self::Frontier) -> Self::Frontier;

    /// Apply `forward_step` for every layer in `[a, b)`.
    fn advance(&self, a: usize, b: usize, frontier_a: &Self::Frontier) -> Self::Frontier {
        let mut f = frontier_a.clone();
        for layer in a..b {
            f = self.forward_step(layer, &f);
        }
        f
    }

    /// Boundary at layer `T` from which reconstruction starts.
    fn terminal_boundary(&self, frontier_t: &Self::Frontier) -> Self::Boundary;

    /// Read the optimal objective off the final frontier.
    fn extract_cost(&self, frontier_t: &Self::Frontier, beta_t: &Self::Boundary) -> Self::Cost;

    /// Walk one layer down.
    ///
    /// Inputs are the frontiers at `layer` and `layer + 1` and the boundary
    /// at `layer + 1`. Returns the state committed by the step and the
    /// boundary at `layer`.
    fn trace_step(
        &self,
        layer: usize,
        frontier_lower: &Self::Frontier,
        frontier_upper: &Self::Frontier,
        beta_upper: &Self::Boundary,
    ) -> (Self::State, Self::Boundary);

    /// Commit the final state from layer 0, if the problem has one.
    fn trace_base(&self, frontier_0: &Self::Frontier, beta_0: &Self::Boundary)
        -> Option<Self::State>;
}
