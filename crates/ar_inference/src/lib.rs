use std::time::Duration;

pub mod models;

pub const DEFAULT_MODEL: &str = "mock";
pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_millis(2000);
pub const DEFAULT_CHAT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone)]
pub struct Config {
    pub model_name: String,
    /// Simulated latency of an article analysis
    pub analysis_delay: Duration,
    /// Simulated latency of a chat reply
    pub chat_delay: Duration,
    /// Seed for the reply picker. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Config {
    /// Same model with no simulated latency.
    pub fn instant() -> Self {
        Self {
            analysis_delay: Duration::ZERO,
            chat_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_MODEL.to_string(),
            analysis_delay: DEFAULT_ANALYSIS_DELAY,
            chat_delay: DEFAULT_CHAT_DELAY,
            seed: None,
        }
    }
}

pub mod prelude {
    pub use super::models::create_model;
    pub use super::Config;
    pub use ar_core::{AnalysisModel, AnalysisResult, ChatMessage, Error, Result};
}

pub use models::create_model;
