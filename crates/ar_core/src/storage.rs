use async_trait::async_trait;

use crate::types::{HistoryEntry, KeywordCategory, WordInfo};
use crate::Result;

#[async_trait]
pub trait HistoryStorage: Send + Sync {
    /// Store an entry at the front of the history
    async fn insert(&self, entry: HistoryEntry) -> Result<()>;

    /// All entries, most recent first
    async fn list(&self) -> Result<Vec<HistoryEntry>>;

    /// Get an entry by id
    async fn get(&self, id: &str) -> Result<Option<HistoryEntry>>;

    /// Remove an entry by id. Returns whether anything was removed.
    async fn delete(&self, id: &str) -> Result<bool>;
}

pub trait WordLookup: Send + Sync {
    fn lookup(&self, word: &str) -> Option<WordInfo>;

    fn keyword_categories(&self) -> Vec<KeywordCategory>;
}
