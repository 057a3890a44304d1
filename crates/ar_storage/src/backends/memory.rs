use ar_core::{Difficulty, HistoryEntry, HistoryStorage, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::StorageBackend;

/// Entries shown in the history view of a fresh session.
pub fn sample_entries() -> Vec<HistoryEntry> {
    let date = |d: u32| NaiveDate::from_ymd_opt(2024, 12, d).unwrap_or_default();
    vec![
        HistoryEntry {
            id: "1".to_string(),
            title: "인공지능이 바꾸는 미래의 교육".to_string(),
            category: "교육/기술".to_string(),
            analyzed_at: date(20),
            reading_time_minutes: 8,
            difficulty: Difficulty::Medium,
            source_url: Some("https://example.com/ai-education".to_string()),
        },
        HistoryEntry {
            id: "2".to_string(),
            title: "기후변화와 지속가능한 발전".to_string(),
            category: "환경/과학".to_string(),
            analyzed_at: date(19),
            reading_time_minutes: 12,
            difficulty: Difficulty::Hard,
            source_url: Some("https://example.com/climate-change".to_string()),
        },
        HistoryEntry {
            id: "3".to_string(),
            title: "소상공인을 위한 디지털 마케팅 전략".to_string(),
            category: "비즈니스".to_string(),
            analyzed_at: date(18),
            reading_time_minutes: 6,
            difficulty: Difficulty::Easy,
            source_url: None,
        },
    ]
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Vec<HistoryEntry>,
}

impl MemoryStore {
    pub fn new(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    pub fn insert(&mut self, entry: HistoryEntry) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.id == entry.id) {
            *existing = entry;
        } else {
            self.entries.insert(0, entry);
        }
    }

    pub fn get(&self, id: &str) -> Option<HistoryEntry> {
        self.entries.iter().find(|e| e.id == id).cloned()
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

/// Process-lifetime history. Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    store: Arc<RwLock<MemoryStore>>,
}

impl MemoryStorage {
    pub fn with_entries(entries: Vec<HistoryEntry>) -> Self {
        Self {
            store: Arc::new(RwLock::new(MemoryStore::new(entries))),
        }
    }
}

#[async_trait]
impl StorageBackend for MemoryStorage {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn new(with_samples: bool) -> Result<Self> {
        let entries = if with_samples { sample_entries() } else { Vec::new() };
        Ok(Self::with_entries(entries))
    }
}

#[async_trait]
impl HistoryStorage for MemoryStorage {
    async fn insert(&self, entry: HistoryEntry) -> Result<()> {
        let mut store = self.store.write().await;
        store.insert(entry);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<HistoryEntry>> {
        let store = self.store.read().await;
        Ok(store.entries().to_vec())
    }

    async fn get(&self, id: &str) -> Result<Option<HistoryEntry>> {
        let store = self.store.read().await;
        Ok(store.get(id))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut store = self.store.write().await;
        Ok(store.delete(id))
    }
}
