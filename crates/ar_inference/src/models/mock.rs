use ar_core::{AnalysisModel, AnalysisResult, ChatMessage, HistoryEntry, InputKind, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

use super::fixtures;
use crate::Config;

/// Stands in for a real analysis backend: every call waits for a fixed
/// delay and then answers with canned data.
pub struct MockModel {
    analysis_delay: Duration,
    chat_delay: Duration,
    rng: Mutex<StdRng>,
}

impl fmt::Debug for MockModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockModel")
            .field("analysis_delay", &self.analysis_delay)
            .field("chat_delay", &self.chat_delay)
            .field("rng", &"<StdRng>")
            .finish()
    }
}

impl MockModel {
    pub fn new(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: &Config, rng: StdRng) -> Self {
        Self {
            analysis_delay: config.analysis_delay,
            chat_delay: config.chat_delay,
            rng: Mutex::new(rng),
        }
    }

    fn pick_lead_in(&self) -> Result<&'static str> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| ar_core::Error::Inference("Reply picker lock poisoned".to_string()))?;
        let index = rng.gen_range(0..fixtures::REPLY_LEAD_INS.len());
        Ok(fixtures::REPLY_LEAD_INS[index])
    }
}

#[async_trait::async_trait]
impl AnalysisModel for MockModel {
    fn name(&self) -> &str {
        "Mock"
    }

    async fn generate_analysis(&self, content: &str, kind: InputKind) -> Result<AnalysisResult> {
        debug!("Simulating analysis of {} input ({} chars)", kind, content.chars().count());
        tokio::time::sleep(self.analysis_delay).await;
        Ok(fixtures::analysis())
    }

    async fn generate_chat_reply(&self, question: &str) -> Result<ChatMessage> {
        tokio::time::sleep(self.chat_delay).await;
        let lead_in = self.pick_lead_in()?;
        debug!("Replying with lead-in: {}", lead_in);
        Ok(ChatMessage::assistant(fixtures::chat_reply(lead_in, question)))
    }

    fn stage_keyword(&self, keyword: &str) -> AnalysisResult {
        AnalysisResult {
            title: keyword.to_string(),
            ..fixtures::analysis()
        }
    }

    fn recall(&self, entry: &HistoryEntry) -> AnalysisResult {
        debug!("Recalling history entry {} with canned analysis", entry.id);
        fixtures::analysis()
    }

    fn chat_greeting(&self, article_title: &str) -> ChatMessage {
        ChatMessage::assistant(fixtures::chat_greeting(article_title))
    }
}
