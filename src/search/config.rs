//! Search configuration.

use serde::{Deserialize, Serialize};

/// Minimax configuration parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Score root moves concurrently on the rayon pool.
    /// Only honoured when the crate is built with the `parallel` feature;
    /// the chosen move is identical either way.
    pub parallel: bool,
}

impl SearchConfig {
    /// Create a new config with root parallelism switched on or off.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
