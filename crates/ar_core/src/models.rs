use async_trait::async_trait;
use std::fmt;

use crate::types::{AnalysisResult, ChatMessage, HistoryEntry, InputKind};
use crate::Result;

#[async_trait]
pub trait AnalysisModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Analyze an article given either as a URL or as raw text
    async fn generate_analysis(&self, content: &str, kind: InputKind) -> Result<AnalysisResult>;

    /// Answer a question about the current article with a single assistant message
    async fn generate_chat_reply(&self, question: &str) -> Result<ChatMessage>;

    /// Prepare an analysis for a keyword picked from the explorer
    fn stage_keyword(&self, keyword: &str) -> AnalysisResult;

    /// Re-display the analysis behind a history entry
    fn recall(&self, entry: &HistoryEntry) -> AnalysisResult;

    /// Opening assistant message of a chat about the given article
    fn chat_greeting(&self, article_title: &str) -> ChatMessage;
}
