//! Block-level data structures used by the engine.
//!
//! A `Checkpoint` holds the frontier at the first layer of a block
//! `[start, end)`. Frontiers strictly inside a block are recomputed on demand
//! during reconstruction.

/// Frontier saved at layer `start` for the block `[start, end)`.
#[derive(Debug, Clone)]
pub struct Checkpoint<F> {
    /// Inclusive start layer; `frontier` is the DP column at this layer.
    pub start: usize,
    /// Exclusive end layer.
    pub end: usize,
    pub frontier: F,
}

impl<F> Checkpoint<F> {
    /// Length of the block in layers.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the block is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
