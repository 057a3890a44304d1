use ar_core::{AnalysisModel, Result};
use std::sync::Arc;
use tracing::info;

use crate::Config;

pub mod fixtures;
pub mod mock;

pub use mock::MockModel;

/// Names accepted by [`create_model`].
pub const AVAILABLE_MODELS: &[&str] = &["mock"];

pub fn create_model(config: Option<Config>) -> Result<Arc<dyn AnalysisModel>> {
    let config = config.unwrap_or_default();
    match config.model_name.as_str() {
        "mock" => {
            let model = MockModel::new(&config);
            info!(
                "🧠 Using {} model (analysis delay {:?}, chat delay {:?})",
                model.name(),
                config.analysis_delay,
                config.chat_delay
            );
            Ok(Arc::new(model))
        }
        other => Err(ar_core::Error::Inference(format!(
            "Unknown model: {}. Available models: {}",
            other,
            AVAILABLE_MODELS.join(", ")
        ))),
    }
}
