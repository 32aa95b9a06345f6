use crate::utils::default_block_size;
use crate::{LayeredEngine, LayeredProblem};

/// Configure a [`LayeredEngine`] before running it.
pub struct LayeredEngineBuilder<P: LayeredProblem> {
    problem: P,
    block_size: Option<usize>,
}

impl<P: LayeredProblem> LayeredEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            block_size: None,
        }
    }

    /// Layers per checkpoint. `1` keeps every frontier.
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size);
        self
    }

    pub fn build(self) -> LayeredEngine<P> {
        let b = self
            .block_size
            .unwrap_or_else(|| default_block_size(self.problem.num_layers().max(1)).max(1));
        LayeredEngine::with_block_size(self.problem, b)
    }
}
