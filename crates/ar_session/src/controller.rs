use ar_core::{
    is_blank, AnalysisModel, AnalysisResult, ChatMessage, Error, HistoryEntry, HistoryStorage,
    InputKind, KeywordCategory, RelatedArticle, Result, ResultTab, View, WordInfo, WordLookup,
};
use chrono::Utc;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::chat::{ChatSession, ChatTicket};
use crate::state::{Notification, SessionState};

const MSG_ANALYSIS_DONE: &str = "분석이 완료되었습니다!";
const MSG_ANALYSIS_FAILED: &str = "분석 중 오류가 발생했습니다. 다시 시도해주세요.";
const MSG_KEYWORD_SELECTED: &str = "기사가 선택되었습니다! 분석을 진행해보세요.";
const MSG_HISTORY_DELETED: &str = "기록이 삭제되었습니다.";
const MSG_TEXT_SELECTED: &str = "선택한 텍스트가 질문하기로 전달되었습니다!";
const MSG_REPLY_FAILED: &str = "답변을 가져오지 못했습니다. 다시 시도해주세요.";

/// Issued when an analysis starts. Its completion is only applied while
/// the generation is still the latest one issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTicket {
    pub generation: u64,
    pub content: String,
    pub kind: InputKind,
}

/// What happened to a delayed result handed back to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer request superseded this one.
    Discarded,
}

pub struct SessionController {
    state: SessionState,
    model: Arc<dyn AnalysisModel>,
    history: Arc<dyn HistoryStorage>,
    lexicon: Arc<dyn WordLookup>,
    chat: Option<ChatSession>,
    notifications: Vec<Notification>,
    analysis_generation: u64,
    next_chat_id: u64,
    last_history_id: i64,
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("state", &self.state)
            .field("model", &self.model.name())
            .field("history", &"<dyn HistoryStorage>")
            .field("lexicon", &"<dyn WordLookup>")
            .field("analysis_generation", &self.analysis_generation)
            .finish()
    }
}

impl SessionController {
    pub fn new(
        model: Arc<dyn AnalysisModel>,
        history: Arc<dyn HistoryStorage>,
        lexicon: Arc<dyn WordLookup>,
    ) -> Self {
        Self {
            state: SessionState::default(),
            model,
            history,
            lexicon,
            chat: None,
            notifications: Vec::new(),
            analysis_generation: 0,
            next_chat_id: 0,
            last_history_id: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current(&self) -> Option<&AnalysisResult> {
        self.state.current()
    }

    pub fn chat(&self) -> Option<&ChatSession> {
        self.chat.as_ref()
    }

    pub fn model(&self) -> Arc<dyn AnalysisModel> {
        self.model.clone()
    }

    // ─────────────────────────────────────────────────────────
    // Analysis
    // ─────────────────────────────────────────────────────────

    /// Analyze `content` and make the result current.
    ///
    /// Blank content is rejected with [`Error::EmptyInput`] before anything
    /// changes. A failed analysis leaves the previous result in place.
    pub async fn analyze(&mut self, content: &str, kind: InputKind) -> Result<AnalysisResult> {
        let ticket = self.begin_analysis(content, kind)?;
        let outcome = self.model.generate_analysis(&ticket.content, ticket.kind).await;
        self.complete_analysis(ticket, outcome).await?;
        self.state.current.clone().ok_or(Error::NoAnalysis)
    }

    /// First half of [`analyze`](Self::analyze) for callers that run the
    /// model themselves. Sets the loading flag.
    pub fn begin_analysis(&mut self, content: &str, kind: InputKind) -> Result<AnalysisTicket> {
        if is_blank(content) {
            debug!("Ignoring blank {} submission", kind);
            return Err(Error::EmptyInput);
        }
        if self.state.is_analyzing {
            return Err(Error::AnalysisPending);
        }

        self.analysis_generation += 1;
        self.state.is_analyzing = true;
        info!("📰 Analyzing {} input (request #{})", kind, self.analysis_generation);

        Ok(AnalysisTicket {
            generation: self.analysis_generation,
            content: content.trim().to_string(),
            kind,
        })
    }

    /// Second half of [`analyze`](Self::analyze). Results for a superseded
    /// or cancelled request are dropped without touching the state.
    pub async fn complete_analysis(
        &mut self,
        ticket: AnalysisTicket,
        outcome: Result<AnalysisResult>,
    ) -> Result<Completion> {
        if ticket.generation != self.analysis_generation || !self.state.is_analyzing {
            debug!(
                "Discarding stale analysis #{} (latest is #{})",
                ticket.generation, self.analysis_generation
            );
            return Ok(Completion::Discarded);
        }
        self.state.is_analyzing = false;

        let analysis = match outcome {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!("❌ Analysis #{} failed: {}", ticket.generation, e);
                self.notify(Notification::error(MSG_ANALYSIS_FAILED));
                return Err(match e {
                    Error::AnalysisFailure(reason) => Error::AnalysisFailure(reason),
                    other => Error::AnalysisFailure(other.to_string()),
                });
            }
        };

        let source_url = match ticket.kind {
            InputKind::Url => Some(ticket.content.clone()),
            InputKind::Text => None,
        };
        let entry = HistoryEntry::from_analysis(
            self.next_history_id(),
            &analysis,
            Utc::now().date_naive(),
            source_url,
        );
        if let Err(e) = self.history.insert(entry).await {
            warn!("Failed to record analysis in history: {}", e);
        }

        info!("✨ Analysis #{} complete: {}", ticket.generation, analysis.title);
        self.set_current(analysis);
        self.state.view = View::Result;
        self.notify(Notification::success(MSG_ANALYSIS_DONE));
        Ok(Completion::Applied)
    }

    /// Give up on the in-flight analysis, if any. Its result will be
    /// discarded when it arrives.
    pub fn cancel_analysis(&mut self) -> bool {
        if !self.state.is_analyzing {
            return false;
        }
        info!("🛑 Cancelled analysis #{}", self.analysis_generation);
        self.supersede_analysis();
        true
    }

    /// Stage a canned article for a keyword picked in the explorer.
    pub fn select_keyword(&mut self, keyword: &str) -> Result<AnalysisResult> {
        if is_blank(keyword) {
            return Err(Error::EmptyInput);
        }
        self.supersede_analysis();

        let analysis = self.model.stage_keyword(keyword.trim());
        info!("🏷️ Selected keyword: {}", analysis.title);
        self.set_current(analysis.clone());
        self.state.view = View::Analyze;
        self.notify(Notification::success(MSG_KEYWORD_SELECTED));
        Ok(analysis)
    }

    // ─────────────────────────────────────────────────────────
    // History
    // ─────────────────────────────────────────────────────────

    pub async fn history(&self) -> Result<Vec<HistoryEntry>> {
        self.history.list().await
    }

    /// Re-display a past analysis. Unknown ids leave the session untouched
    /// and yield `None`.
    pub async fn pick_history_entry(&mut self, id: &str) -> Result<Option<AnalysisResult>> {
        let Some(entry) = self.history.get(id).await? else {
            debug!("No history entry with id {}", id);
            return Ok(None);
        };
        self.supersede_analysis();

        let analysis = self.model.recall(&entry);
        info!("📚 Reopened history entry {}: {}", entry.id, entry.title);
        self.set_current(analysis.clone());
        self.state.view = View::Result;
        Ok(Some(analysis))
    }

    /// Remove a history entry. Deleting an unknown id is not an error.
    pub async fn delete_history_entry(&mut self, id: &str) -> Result<bool> {
        let removed = self.history.delete(id).await?;
        if removed {
            info!("🗑️ Deleted history entry {}", id);
        } else {
            debug!("History entry {} was already gone", id);
        }
        self.notify(Notification::success(MSG_HISTORY_DELETED));
        Ok(removed)
    }

    // ─────────────────────────────────────────────────────────
    // Navigation and selection
    // ─────────────────────────────────────────────────────────

    pub fn navigate(&mut self, view: View) -> Result<()> {
        if !self.state.is_view_enabled(view) {
            return Err(Error::ViewUnavailable(view));
        }
        self.state.view = view;
        Ok(())
    }

    pub fn set_result_tab(&mut self, tab: ResultTab) -> Result<()> {
        if !self.state.has_analysis() {
            return Err(Error::NoAnalysis);
        }
        self.state.result_tab = tab;
        Ok(())
    }

    /// Hand selected article text over to the chat as the next question.
    pub fn select_text_for_question(&mut self, text: &str) -> Result<()> {
        if is_blank(text) {
            return Err(Error::EmptyInput);
        }
        if !self.state.has_analysis() {
            return Err(Error::ViewUnavailable(View::Result));
        }
        self.state.selected_text = text.trim().to_string();
        self.state.view = View::Result;
        self.state.result_tab = ResultTab::Chat;
        self.notify(Notification::success(MSG_TEXT_SELECTED));
        Ok(())
    }

    pub fn clear_selected_text(&mut self) {
        self.state.selected_text.clear();
    }

    // ─────────────────────────────────────────────────────────
    // Chat
    // ─────────────────────────────────────────────────────────

    pub async fn ask(&mut self, question: &str) -> Result<ChatMessage> {
        let ticket = self.begin_question(question)?;
        self.finish_question(ticket).await
    }

    /// Ask the pending selected text as a question, consuming it.
    pub async fn ask_about_selection(&mut self) -> Result<ChatMessage> {
        let ticket = self.begin_selection_question()?;
        self.finish_question(ticket).await
    }

    pub fn begin_question(&mut self, question: &str) -> Result<ChatTicket> {
        let chat = self.chat.as_mut().ok_or(Error::NoAnalysis)?;
        chat.push_question(question)
    }

    pub fn begin_selection_question(&mut self) -> Result<ChatTicket> {
        if self.state.selected_text.is_empty() {
            return Err(Error::EmptyInput);
        }
        let question = self.state.selected_text.clone();
        let ticket = self.begin_question(&question)?;
        self.clear_selected_text();
        Ok(ticket)
    }

    /// Apply a chat reply. Replies for a chat that has since been replaced
    /// are dropped.
    pub fn complete_reply(
        &mut self,
        ticket: ChatTicket,
        outcome: Result<ChatMessage>,
    ) -> Result<Completion> {
        let Some(chat) = self.chat.as_mut().filter(|c| c.id() == ticket.session_id) else {
            debug!("Discarding reply for closed chat #{}", ticket.session_id);
            return Ok(Completion::Discarded);
        };

        match outcome {
            Ok(reply) => {
                chat.push_reply(reply);
                Ok(Completion::Applied)
            }
            Err(e) => {
                chat.abandon_reply();
                warn!("Chat reply failed: {}", e);
                self.notify(Notification::error(MSG_REPLY_FAILED));
                Err(e)
            }
        }
    }

    async fn finish_question(&mut self, ticket: ChatTicket) -> Result<ChatMessage> {
        let outcome = self.model.generate_chat_reply(&ticket.question).await;
        self.complete_reply(ticket, outcome)?;
        self.chat
            .as_ref()
            .and_then(|c| c.messages().last().cloned())
            .ok_or(Error::NoAnalysis)
    }

    // ─────────────────────────────────────────────────────────
    // Word lookup
    // ─────────────────────────────────────────────────────────

    pub fn lookup_word(&self, word: &str) -> Result<WordInfo> {
        self.lexicon
            .lookup(word)
            .ok_or_else(|| Error::LookupMiss(word.to_string()))
    }

    pub fn keyword_categories(&self) -> Vec<KeywordCategory> {
        self.lexicon.keyword_categories()
    }

    /// Resolve a related article for opening in a browser. The URL is passed
    /// through as-is.
    pub fn related_article(&self, word: &str, article_id: &str) -> Result<RelatedArticle> {
        let info = self.lookup_word(word)?;
        let article = info
            .related_article(article_id)
            .cloned()
            .ok_or_else(|| Error::LookupMiss(format!("{}/{}", word, article_id)))?;
        if is_blank(&article.url) {
            return Err(Error::EmptyInput);
        }
        Ok(article)
    }

    // ─────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Invalidate whatever analysis is in flight.
    fn supersede_analysis(&mut self) {
        if self.state.is_analyzing {
            self.analysis_generation += 1;
            self.state.is_analyzing = false;
        }
    }

    fn set_current(&mut self, analysis: AnalysisResult) {
        self.next_chat_id += 1;
        let greeting = self.model.chat_greeting(&analysis.title);
        self.chat = Some(ChatSession::open(self.next_chat_id, analysis.title.clone(), greeting));
        self.state.result_tab = ResultTab::Summary;
        self.state.current = Some(analysis);
    }

    /// Millisecond timestamps, bumped when two analyses land in the same
    /// millisecond.
    fn next_history_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last_history_id = now.max(self.last_history_id + 1);
        self.last_history_id.to_string()
    }
}
