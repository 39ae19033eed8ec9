//! Application state shared across all handlers.

use std::sync::Arc;
use std::time::Instant;
use vs_core::SkillConfig;
use vs_handler::{RandomSource, ThreadRandom};

/// Builds a fresh random source for each invocation.
pub type RandomFactory = Arc<dyn Fn() -> Box<dyn RandomSource + Send> + Send + Sync>;

fn thread_random() -> Box<dyn RandomSource + Send> {
    Box::new(ThreadRandom)
}

/// Shared application state. Read-only once built.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SkillConfig>,
    pub random: RandomFactory,
    pub start_time: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(SkillConfig::default())
    }

    pub fn with_config(config: SkillConfig) -> Self {
        Self {
            config: Arc::new(config),
            random: Arc::new(thread_random),
            start_time: Instant::now(),
        }
    }

    /// Replace the random source factory, e.g. with a fixed sequence in tests.
    pub fn with_random<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Box<dyn RandomSource + Send> + Send + Sync + 'static,
    {
        self.random = Arc::new(factory);
        self
    }

    pub fn random_source(&self) -> Box<dyn RandomSource + Send> {
        (self.random)()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
