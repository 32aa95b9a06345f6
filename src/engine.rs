//! Generic checkpointed layered-DP engine.
//!
//! This module implements the two-phase algorithm:
//! 1. A forward pass that keeps one frontier per block of layers.
//! 2. A backward reconstruction that recomputes one block at a time from its
//!    checkpoint and walks it top-down, so only `T / b + b` frontiers are ever
//!    alive (≈ 2√T with the default block size).
//!
//! The engine is completely generic over implementations of [`LayeredProblem`].

use crate::blocks::Checkpoint;
use crate::traits::LayeredProblem;
use crate::utils::default_block_size;

/// Layered DP engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use subseq_max::{strategies::table::KSubsequenceTable, DigitSequence, LayeredEngine};
///
/// let seq: DigitSequence = "234234234234278".parse().unwrap();
/// let engine = LayeredEngine::new(KSubsequenceTable::new(&seq, 12));
/// let (value, picks) = engine.run();
/// assert_eq!(value, 434_234_234_278);
/// assert_eq!(picks.len(), 12);
/// ```
pub struct LayeredEngine<P: LayeredProblem> {
    problem: P,
    block_size: usize,
}

struct ForwardArtifacts<F> {
    checkpoints: Vec<Checkpoint<F>>,
    frontier_t: F,
}

impl<P: LayeredProblem> LayeredEngine<P> {
    /// Create a new engine with a heuristic block size (≈ √T).
    pub fn new(problem: P) -> Self {
        let t = problem.num_layers().max(1);
        let b = default_block_size(t).max(1);
        Self::with_block_size(problem, b)
    }

    /// Create a new engine with an explicit block size.
    ///
    /// # Panics
    /// Panics if `block_size == 0`.
    pub fn with_block_size(problem: P, block_size: usize) -> Self {
        assert!(block_size > 0, "block_size must be positive");
        Self {
            problem,
            block_size,
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Return the configured block size.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of checkpoints the forward pass stores.
    pub fn num_checkpoints(&self) -> usize {
        self.problem.num_layers().div_ceil(self.block_size)
    }

    /// Phase I: sweep layers `0..T`, saving the frontier at each block start.
    fn forward_pass(&self) -> ForwardArtifacts<P::Frontier> {
        let t = self.problem.num_layers();
        let b = self.block_size;

        let mut checkpoints = Vec::with_capacity(self.num_checkpoints());
        let mut frontier = self.problem.init_frontier();

        for k in 0..t.div_ceil(b) {
            let start = k * b;
            let end = ((k + 1) * b).min(t);
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("advance_block", block = k, start, end);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            let next = self.problem.advance(start, end, &frontier);
            checkpoints.push(Checkpoint {
                start,
                end,
                frontier,
            });
            frontier = next;
        }

        ForwardArtifacts {
            checkpoints,
            frontier_t: frontier,
        }
    }

    /// Optimal objective only; skips reconstruction.
    pub fn solve(&self) -> P::Cost {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("layered_solve", layers = self.problem.num_layers());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let t = self.problem.num_layers();
        let frontier_t = self.problem.advance(0, t, &self.problem.init_frontier());
        let beta_t = self.problem.terminal_boundary(&frontier_t);
        self.problem.extract_cost(&frontier_t, &beta_t)
    }

    /// Run the forward pass and reconstruct one optimal path.
    ///
    /// Returns `(optimal_cost, states)`, states in the order committed by
    /// [`LayeredProblem::trace_step`] from layer `T-1` down to 0, followed by
    /// the [`LayeredProblem::trace_base`] state if any.
    ///
    /// # Panics
    /// Panics if the problem's backtrace cannot find a state consistent with
    /// its own frontiers.
    pub fn run(&self) -> (P::Cost, Vec<P::State>) {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "layered_run",
            layers = self.problem.num_layers(),
            block_size = self.block_size
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let ForwardArtifacts {
            checkpoints,
            frontier_t,
        } = {
            #[cfg(feature = "tracing")]
            let span = tracing::info_span!("forward_pass");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            self.forward_pass()
        };

        let beta_t = self.problem.terminal_boundary(&frontier_t);
        let cost = self.problem.extract_cost(&frontier_t, &beta_t);

        let path = {
            #[cfg(feature = "tracing")]
            let span = tracing::info_span!("reconstruct", checkpoints = checkpoints.len());
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            self.reconstruct(&checkpoints, &frontier_t, beta_t)
        };

        (cost, path)
    }

    /// Phase II: walk the blocks from last to first.
    fn reconstruct(
        &self,
        checkpoints: &[Checkpoint<P::Frontier>],
        frontier_t: &P::Frontier,
        beta_t: P::Boundary,
    ) -> Vec<P::State> {
        let mut path = Vec::with_capacity(self.problem.num_layers() + 1);
        let mut beta = beta_t;

        for cp in checkpoints.iter().rev() {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("reconstruct_block", start = cp.start, end = cp.end);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            let layers = self.recompute_block(cp);
            for layer in (cp.start..cp.end).rev() {
                let lower = &layers[layer - cp.start];
                let upper = &layers[layer + 1 - cp.start];
                let (state, beta_lower) = self.problem.trace_step(layer, lower, upper, &beta);
                path.push(state);
                beta = beta_lower;
            }
        }

        let frontier_0 = checkpoints.first().map_or(frontier_t, |cp| &cp.frontier);
        if let Some(state) = self.problem.trace_base(frontier_0, &beta) {
            path.push(state);
        }
        path
    }

    /// Frontiers for layers `start..=end` of one block.
    fn recompute_block(&self, cp: &Checkpoint<P::Frontier>) -> Vec<P::Frontier> {
        let mut layers = Vec::with_capacity(cp.len() + 1);
        layers.push(cp.frontier.clone());
        for layer in cp.start..cp.end {
            let next = self.problem.forward_step(layer, &layers[layer - cp.start]);
            layers.push(next);
        }
        layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Counts layers; the path is the list of layers walked back through.
    struct DummyProblem {
        t: usize,
        steps: Cell<usize>,
    }

    impl DummyProblem {
        fn new(t: usize) -> Self {
            Self {
                t,
                steps: Cell::new(0),
            }
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    struct F(usize);

    impl LayeredProblem for DummyProblem {
        type State = usize;
        type Frontier = F;
        type Boundary = usize;
        type Cost = usize;

        fn num_layers(&self) -> usize {
            self.t
        }
        fn init_frontier(&self) -> Self::Frontier {
            F(0)
        }
        fn forward_step(&self, layer: usize, f: &Self::Frontier) -> Self::Frontier {
            assert_eq!(f.0, layer, "frontier handed to the wrong layer");
            self.steps.set(self.steps.get() + 1);
            F(f.0 + 1)
        }
        fn terminal_boundary(&self, frontier_t: &Self::Frontier) -> Self::Boundary {
            frontier_t.0
        }
        fn extract_cost(&self, frontier_t: &Self::Frontier, _beta_t: &usize) -> usize {
            frontier_t.0
        }
        fn trace_step(
            &self,
            layer: usize,
            lower: &Self::Frontier,
            upper: &Self::Frontier,
            beta_upper: &usize,
        ) -> (usize, usize) {
            assert_eq!(lower.0, layer);
            assert_eq!(upper.0, layer + 1);
            assert_eq!(*beta_upper, layer + 1);
            (layer, layer)
        }
        fn trace_base(&self, frontier_0: &Self::Frontier, beta_0: &usize) -> Option<usize> {
            assert_eq!(frontier_0.0, 0);
            assert_eq!(*beta_0, 0);
            None
        }
    }

    #[test]
    fn forward_pass_checkpoint_shapes() {
        let engine = LayeredEngine::with_block_size(DummyProblem::new(5), 2);
        let artifacts = engine.forward_pass();
        let spans: Vec<_> = artifacts
            .checkpoints
            .iter()
            .map(|cp| (cp.start, cp.end, cp.frontier.0))
            .collect();
        assert_eq!(spans, vec![(0, 2, 0), (2, 4, 2), (4, 5, 4)]);
        assert_eq!(artifacts.frontier_t, F(5));
        assert_eq!(engine.num_checkpoints(), 3);
    }

    #[test]
    fn run_walks_every_layer_once_for_any_block_size() {
        for b in 1..=7 {
            let engine = LayeredEngine::with_block_size(DummyProblem::new(6), b);
            let (cost, path) = engine.run();
            assert_eq!(cost, 6);
            assert_eq!(path, vec![5, 4, 3, 2, 1, 0], "block size {b}");
        }
    }

    #[test]
    fn recomputation_at_most_doubles_forward_work() {
        let engine = LayeredEngine::new(DummyProblem::new(16));
        assert_eq!(engine.block_size(), 4);
        let _ = engine.run();
        assert_eq!(engine.problem().steps.get(), 32);
    }

    #[test]
    fn zero_layers_only_traces_base() {
        let engine = LayeredEngine::new(DummyProblem::new(0));
        let (cost, path) = engine.run();
        assert_eq!(cost, 0);
        assert!(path.is_empty());
        assert_eq!(engine.solve(), 0);
    }

    #[test]
    #[should_panic]
    fn with_block_size_panics_on_zero() {
        let _ = LayeredEngine::with_block_size(DummyProblem::new(2), 0);
    }
}
