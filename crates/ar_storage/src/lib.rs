use ar_core::{HistoryStorage, Result};
use async_trait::async_trait;
use std::sync::Arc;

pub mod backends;
pub mod lexicon;

pub use backends::*;
pub use lexicon::StaticLexicon;

#[async_trait]
pub trait StorageBackend: HistoryStorage {
    fn backend_name(&self) -> &'static str;
    async fn new(with_samples: bool) -> Result<Self> where Self: Sized;
}

/// Build the history storage registered under `name`.
pub async fn create_storage(name: &str, with_samples: bool) -> Result<Arc<dyn HistoryStorage>> {
    match name {
        "memory" => {
            let storage = MemoryStorage::new(with_samples).await?;
            tracing::debug!("Created {} history storage", storage.backend_name());
            Ok(Arc::new(storage))
        }
        other => Err(ar_core::Error::Storage(format!(
            "Unknown storage backend: {} (available: memory)",
            other
        ))),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::lexicon::StaticLexicon;
    pub use super::StorageBackend;
}
