use ar_core::{
    AnalysisModel, AnalysisResult, ChatMessage, Error, HistoryEntry, HistoryStorage, InputKind,
    ResultTab, Sender, View,
};
use ar_inference::models::{fixtures, MockModel};
use ar_inference::Config;
use ar_session::view::{ChatView, SessionSnapshot};
use ar_session::{Completion, NotificationLevel, SessionController};
use ar_storage::{MemoryStorage, StaticLexicon, StorageBackend};
use std::sync::Arc;
use std::time::Duration;

async fn controller_with(model: Arc<dyn AnalysisModel>) -> (SessionController, Arc<MemoryStorage>) {
    let history = Arc::new(MemoryStorage::new(true).await.unwrap());
    let controller = SessionController::new(model, history.clone(), Arc::new(StaticLexicon::new()));
    (controller, history)
}

async fn controller() -> (SessionController, Arc<MemoryStorage>) {
    controller_with(Arc::new(MockModel::new(&Config::instant().with_seed(9)))).await
}

/// Fails every analysis and chat reply, otherwise behaves like the mock.
#[derive(Debug)]
struct FailingModel {
    inner: MockModel,
}

#[async_trait::async_trait]
impl AnalysisModel for FailingModel {
    fn name(&self) -> &str {
        "Failing"
    }

    async fn generate_analysis(&self, _content: &str, _kind: InputKind) -> ar_core::Result<AnalysisResult> {
        Err(Error::Inference("backend unavailable".to_string()))
    }

    async fn generate_chat_reply(&self, _question: &str) -> ar_core::Result<ChatMessage> {
        Err(Error::Inference("backend unavailable".to_string()))
    }

    fn stage_keyword(&self, keyword: &str) -> AnalysisResult {
        self.inner.stage_keyword(keyword)
    }

    fn recall(&self, entry: &HistoryEntry) -> AnalysisResult {
        self.inner.recall(entry)
    }

    fn chat_greeting(&self, article_title: &str) -> ChatMessage {
        self.inner.chat_greeting(article_title)
    }
}

#[tokio::test]
async fn test_blank_submission_changes_nothing() {
    let (mut controller, history) = controller().await;

    for blank in ["", "   ", "\n\t"] {
        for kind in [InputKind::Text, InputKind::Url] {
            let result = controller.analyze(blank, kind).await;
            assert!(matches!(result, Err(Error::EmptyInput)));
        }
    }

    let state = controller.state();
    assert!(!state.is_analyzing());
    assert!(!state.has_analysis());
    assert_eq!(state.view(), View::Home);
    assert!(controller.notifications().is_empty());
    assert_eq!(history.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_blank_submission_keeps_current_analysis() {
    let (mut controller, history) = controller().await;
    controller.analyze("hello", InputKind::Text).await.unwrap();
    controller.navigate(View::History).unwrap();
    controller.drain_notifications();

    let before = controller.current().cloned();
    let history_len = history.list().await.unwrap().len();

    for blank in ["", "   ", "\n\t"] {
        for kind in [InputKind::Text, InputKind::Url] {
            let result = controller.analyze(blank, kind).await;
            assert!(matches!(result, Err(Error::EmptyInput)));
        }
    }

    assert!(before.is_some());
    assert_eq!(controller.current().cloned(), before);
    assert_eq!(controller.state().view(), View::History);
    assert!(!controller.state().is_analyzing());
    assert!(controller.notifications().is_empty());
    assert_eq!(history.list().await.unwrap().len(), history_len);
}

#[tokio::test]
async fn test_successful_analysis() {
    let (mut controller, history) = controller().await;

    let analysis = controller.analyze("hello", InputKind::Text).await.unwrap();
    assert_eq!(analysis.title, fixtures::ANALYSIS_TITLE);

    let state = controller.state();
    assert!(state.has_analysis());
    assert!(!state.is_analyzing());
    assert_eq!(state.view(), View::Result);
    assert_eq!(controller.current().unwrap().title, fixtures::ANALYSIS_TITLE);

    let notifications = controller.drain_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].level, NotificationLevel::Success);
    assert!(controller.notifications().is_empty());

    let entries = history.list().await.unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].title, fixtures::ANALYSIS_TITLE);
    assert!(entries[0].source_url.is_none());
}

#[tokio::test]
async fn test_url_analysis_records_source() {
    let (mut controller, history) = controller().await;
    controller
        .analyze(" https://example.com/story ", InputKind::Url)
        .await
        .unwrap();

    let entries = history.list().await.unwrap();
    assert_eq!(entries[0].source_url.as_deref(), Some("https://example.com/story"));
}

#[tokio::test(start_paused = true)]
async fn test_loading_flag_spans_the_delay() {
    let model: Arc<dyn AnalysisModel> = Arc::new(MockModel::new(&Config::default()));
    let (mut controller, _) = controller_with(model.clone()).await;

    let ticket = controller.begin_analysis("hello", InputKind::Text).unwrap();
    assert!(controller.state().is_analyzing());
    assert!(matches!(
        controller.begin_analysis("again", InputKind::Text),
        Err(Error::AnalysisPending)
    ));

    let start = tokio::time::Instant::now();
    let outcome = model.generate_analysis(&ticket.content, ticket.kind).await;
    assert!(start.elapsed() >= Duration::from_millis(2000));

    assert!(controller.state().is_analyzing());
    let completion = controller.complete_analysis(ticket, outcome).await.unwrap();
    assert_eq!(completion, Completion::Applied);
    assert!(!controller.state().is_analyzing());
    assert_eq!(controller.state().view(), View::Result);
}

#[tokio::test]
async fn test_failed_analysis_keeps_previous_result() {
    let model = Arc::new(FailingModel {
        inner: MockModel::new(&Config::instant()),
    });
    let (mut controller, history) = controller_with(model).await;

    controller.select_keyword("주식").unwrap();
    controller.drain_notifications();

    let result = controller.analyze("some article", InputKind::Text).await;
    assert!(matches!(result, Err(Error::AnalysisFailure(_))));

    let state = controller.state();
    assert!(!state.is_analyzing());
    assert_eq!(state.current().unwrap().title, "주식");
    assert_eq!(state.view(), View::Analyze);
    assert_eq!(history.list().await.unwrap().len(), 3);

    let notifications = controller.drain_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].level, NotificationLevel::Error);
}

#[tokio::test]
async fn test_keyword_supersedes_inflight_analysis() {
    let (mut controller, _) = controller().await;

    let ticket = controller.begin_analysis("slow article", InputKind::Text).unwrap();
    let staged = controller.select_keyword("블록체인").unwrap();
    assert_eq!(staged.title, "블록체인");
    assert_eq!(controller.state().view(), View::Analyze);
    assert!(!controller.state().is_analyzing());

    let outcome = controller.model().generate_analysis("slow article", InputKind::Text).await;
    let completion = controller.complete_analysis(ticket, outcome).await.unwrap();
    assert_eq!(completion, Completion::Discarded);
    assert_eq!(controller.current().unwrap().title, "블록체인");
    assert_eq!(controller.state().view(), View::Analyze);
}

#[tokio::test]
async fn test_select_keyword_rejects_blank() {
    let (mut controller, _) = controller().await;
    assert!(matches!(controller.select_keyword("  "), Err(Error::EmptyInput)));
    assert!(!controller.state().has_analysis());
}

#[tokio::test]
async fn test_pick_history_entry() {
    let (mut controller, _) = controller().await;

    let picked = controller.pick_history_entry("2").await.unwrap().unwrap();
    assert_eq!(picked.title, fixtures::ANALYSIS_TITLE);
    assert_eq!(controller.state().view(), View::Result);
    assert!(controller.state().has_analysis());
}

#[tokio::test]
async fn test_pick_unknown_history_entry_is_noop() {
    let (mut controller, _) = controller().await;
    controller.navigate(View::History).unwrap();

    let picked = controller.pick_history_entry("no-such-id").await.unwrap();
    assert!(picked.is_none());
    assert_eq!(controller.state().view(), View::History);
    assert!(!controller.state().has_analysis());
    assert!(controller.notifications().is_empty());
}

#[tokio::test]
async fn test_delete_history_entry() {
    let (mut controller, _) = controller().await;
    let before = controller.history().await.unwrap();

    assert!(controller.delete_history_entry("2").await.unwrap());
    let after = controller.history().await.unwrap();
    assert_eq!(after.len(), before.len() - 1);
    assert!(after.iter().all(|e| e.id != "2"));

    assert!(!controller.delete_history_entry("2").await.unwrap());
    assert!(!controller.delete_history_entry("missing").await.unwrap());
    assert_eq!(controller.history().await.unwrap(), after);
}

#[tokio::test]
async fn test_navigation_requires_analysis_for_result() {
    let (mut controller, _) = controller().await;

    assert!(matches!(
        controller.navigate(View::Result),
        Err(Error::ViewUnavailable(View::Result))
    ));
    assert!(matches!(controller.set_result_tab(ResultTab::Chat), Err(Error::NoAnalysis)));
    controller.navigate(View::Analyze).unwrap();
    assert_eq!(controller.state().view(), View::Analyze);

    controller.analyze("text", InputKind::Text).await.unwrap();
    controller.navigate(View::History).unwrap();
    controller.navigate(View::Result).unwrap();
    controller.set_result_tab(ResultTab::FullText).unwrap();
    assert_eq!(controller.state().result_tab(), ResultTab::FullText);
}

#[tokio::test]
async fn test_selected_text_round_trip() {
    let (mut controller, _) = controller().await;
    controller.analyze("hello", InputKind::Text).await.unwrap();
    controller.navigate(View::Home).unwrap();

    controller.select_text_for_question("foo").unwrap();
    assert_eq!(controller.state().selected_text(), "foo");
    assert_eq!(controller.state().view(), View::Result);
    assert_eq!(controller.state().result_tab(), ResultTab::Chat);

    controller.clear_selected_text();
    assert_eq!(controller.state().selected_text(), "");
}

#[tokio::test]
async fn test_select_text_needs_analysis() {
    let (mut controller, _) = controller().await;
    assert!(matches!(
        controller.select_text_for_question("foo"),
        Err(Error::ViewUnavailable(View::Result))
    ));
    assert!(matches!(controller.select_text_for_question(" "), Err(Error::EmptyInput)));
}

#[tokio::test]
async fn test_chat_flow() {
    let (mut controller, _) = controller().await;
    assert!(matches!(controller.ask("hi").await, Err(Error::NoAnalysis)));

    controller.analyze("hello", InputKind::Text).await.unwrap();
    let reply = controller.ask("교사의 역할은?").await.unwrap();
    assert_eq!(reply.sender, Sender::Assistant);
    assert!(fixtures::REPLY_LEAD_INS.iter().any(|l| reply.content.starts_with(l)));
    assert!(reply.content.contains("교사의 역할은?"));

    let chat = ChatView::from_controller(&controller).unwrap();
    assert_eq!(chat.article_title, fixtures::ANALYSIS_TITLE);
    let senders: Vec<Sender> = chat.messages.iter().map(|m| m.sender).collect();
    assert_eq!(senders, vec![Sender::Assistant, Sender::User, Sender::Assistant]);
    assert!(!chat.is_replying);
}

#[tokio::test]
async fn test_ask_about_selection_consumes_seed() {
    let (mut controller, _) = controller().await;
    controller.analyze("hello", InputKind::Text).await.unwrap();
    assert!(matches!(controller.ask_about_selection().await, Err(Error::EmptyInput)));

    controller.select_text_for_question("가상 AI 튜터").unwrap();
    let reply = controller.ask_about_selection().await.unwrap();
    assert!(reply.content.contains("가상 AI 튜터"));
    assert_eq!(controller.state().selected_text(), "");
}

#[tokio::test]
async fn test_pending_reply_gates_questions_and_stale_reply_is_dropped() {
    let (mut controller, _) = controller().await;
    controller.analyze("hello", InputKind::Text).await.unwrap();

    let ticket = controller.begin_question("first").unwrap();
    assert!(matches!(controller.begin_question("second"), Err(Error::ChatPending)));
    assert!(SessionSnapshot::from_controller(&controller).is_replying);

    // A new article replaces the chat before the reply arrives.
    controller.pick_history_entry("1").await.unwrap();
    let reply = controller.model().generate_chat_reply(&ticket.question).await;
    assert_eq!(controller.complete_reply(ticket, reply).unwrap(), Completion::Discarded);
    assert_eq!(controller.chat().unwrap().messages().len(), 1);
}

#[tokio::test]
async fn test_failed_reply_unblocks_chat() {
    let model = Arc::new(FailingModel {
        inner: MockModel::new(&Config::instant()),
    });
    let (mut controller, _) = controller_with(model).await;
    controller.select_keyword("ESG").unwrap();
    controller.drain_notifications();

    assert!(controller.ask("q").await.is_err());
    assert!(!controller.chat().unwrap().is_replying());
    assert_eq!(controller.drain_notifications()[0].level, NotificationLevel::Error);
}

#[tokio::test]
async fn test_lookup() {
    let (controller, _) = controller().await;
    let info = controller.lookup_word("인공지능").unwrap();
    assert_eq!(info.related_articles.len(), 3);
    assert!(matches!(controller.lookup_word("no-such-word"), Err(Error::LookupMiss(_))));
    assert_eq!(controller.keyword_categories().len(), 6);
}

#[tokio::test]
async fn test_snapshot() {
    let (mut controller, _) = controller().await;
    let snapshot = SessionSnapshot::from_controller(&controller);
    assert!(!snapshot.has_analysis);
    assert_eq!(snapshot.enabled_views.len(), 3);

    controller.analyze("hello", InputKind::Text).await.unwrap();
    let snapshot = SessionSnapshot::from_controller(&controller);
    assert_eq!(snapshot.view, View::Result);
    assert_eq!(snapshot.enabled_views.len(), 4);
    assert_eq!(snapshot.analysis_title.as_deref(), Some(fixtures::ANALYSIS_TITLE));

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["view"], "result");
    assert_eq!(json["resultTab"], "summary");
}
