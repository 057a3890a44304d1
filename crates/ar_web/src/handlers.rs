use ar_core::{ChatMessage, Error, InputKind, KeywordCategory, ResultTab, View};
use ar_session::view::{ChatView, HistoryView, ResultView, SessionSnapshot, WordDetailView};
use ar_session::{
    AnalysisTicket, ChatTicket, Completion, Notification, SelectionRect, TextSelection,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::warn;

use crate::error::{ApiError, ApiResult};
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub content: String,
    pub kind: InputKind,
    /// Hold the response until the analysis is done.
    #[serde(default)]
    pub wait: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub request: u64,
    pub analysis: Option<ResultView>,
}

#[derive(Debug, Deserialize)]
pub struct ViewRequest {
    pub view: View,
}

#[derive(Debug, Deserialize)]
pub struct ResultTabRequest {
    pub tab: ResultTab,
}

#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    pub text: String,
    #[serde(default)]
    pub rect: Option<SelectionRect>,
}

#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub selection: Option<TextSelection>,
    pub session: SessionSnapshot,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    /// Without a question the pending selected text is asked.
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub wait: bool,
}

pub async fn get_session(State(state): State<SharedState>) -> Json<SessionSnapshot> {
    let session = state.session.lock().await;
    Json(SessionSnapshot::from_controller(&session))
}

pub async fn set_view(
    State(state): State<SharedState>,
    Json(request): Json<ViewRequest>,
) -> ApiResult<Json<SessionSnapshot>> {
    let mut session = state.session.lock().await;
    session.navigate(request.view)?;
    Ok(Json(SessionSnapshot::from_controller(&session)))
}

pub async fn set_result_tab(
    State(state): State<SharedState>,
    Json(request): Json<ResultTabRequest>,
) -> ApiResult<Json<SessionSnapshot>> {
    let mut session = state.session.lock().await;
    session.set_result_tab(request.tab)?;
    Ok(Json(SessionSnapshot::from_controller(&session)))
}

fn spawn_analysis(state: SharedState, ticket: AnalysisTicket) -> JoinHandle<ar_core::Result<Completion>> {
    tokio::spawn(async move {
        let model = state.session.lock().await.model();
        let outcome = model.generate_analysis(&ticket.content, ticket.kind).await;
        let mut session = state.session.lock().await;
        let completion = session.complete_analysis(ticket, outcome).await;
        completion
    })
}

/// Starts an analysis. The model runs outside the session lock so other
/// requests keep being served while it works.
pub async fn analyze(
    State(state): State<SharedState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Response> {
    let ticket = state
        .session
        .lock()
        .await
        .begin_analysis(&request.content, request.kind)?;
    let generation = ticket.generation;
    let task = spawn_analysis(state.clone(), ticket);

    if !request.wait {
        tokio::spawn(async move {
            match task.await {
                Ok(Err(e)) => warn!("Background analysis #{} failed: {}", generation, e),
                Err(e) => warn!("Background analysis #{} panicked: {}", generation, e),
                Ok(Ok(_)) => {}
            }
        });
        let body = AnalyzeResponse {
            request: generation,
            analysis: None,
        };
        return Ok((StatusCode::ACCEPTED, Json(body)).into_response());
    }

    let completion = task.await.map_err(|e| ApiError::Internal(e.to_string()))??;
    if completion == Completion::Discarded {
        return Err(ApiError::Superseded);
    }
    let session = state.session.lock().await;
    let body = AnalyzeResponse {
        request: generation,
        analysis: ResultView::from_controller(&session),
    };
    Ok(Json(body).into_response())
}

pub async fn cancel_analysis(State(state): State<SharedState>) -> Json<serde_json::Value> {
    let cancelled = state.session.lock().await.cancel_analysis();
    Json(serde_json::json!({ "cancelled": cancelled }))
}

pub async fn get_analysis(State(state): State<SharedState>) -> ApiResult<Json<ResultView>> {
    let session = state.session.lock().await;
    ResultView::from_controller(&session)
        .map(Json)
        .ok_or(ApiError::Session(Error::NoAnalysis))
}

pub async fn list_keywords(State(state): State<SharedState>) -> Json<Vec<KeywordCategory>> {
    let categories = state.session.lock().await.keyword_categories();
    Json(categories)
}

pub async fn select_keyword(
    State(state): State<SharedState>,
    Path(keyword): Path<String>,
) -> ApiResult<Json<ResultView>> {
    let analysis = state.session.lock().await.select_keyword(&keyword)?;
    Ok(Json(ResultView::from_analysis(&analysis)))
}

pub async fn list_history(State(state): State<SharedState>) -> ApiResult<Json<HistoryView>> {
    let entries = state.session.lock().await.history().await?;
    Ok(Json(HistoryView::new(entries)))
}

/// Unknown ids are a silent no-op and answer 204.
pub async fn open_history_entry(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let picked = state.session.lock().await.pick_history_entry(&id).await?;
    Ok(match picked {
        Some(analysis) => Json(ResultView::from_analysis(&analysis)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

pub async fn delete_history_entry(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    let removed = state.session.lock().await.delete_history_entry(&id).await?;
    Ok(Json(serde_json::json!({ "removed": removed })))
}

pub async fn select_text(
    State(state): State<SharedState>,
    Json(request): Json<SelectionRequest>,
) -> ApiResult<Json<SelectionResponse>> {
    let selection = match request.rect {
        Some(rect) => Some(TextSelection::capture(&request.text, rect).ok_or(Error::EmptyInput)?),
        None => None,
    };

    let mut session = state.session.lock().await;
    session.select_text_for_question(&request.text)?;
    Ok(Json(SelectionResponse {
        selection,
        session: SessionSnapshot::from_controller(&session),
    }))
}

pub async fn clear_selection(State(state): State<SharedState>) -> Json<SessionSnapshot> {
    let mut session = state.session.lock().await;
    session.clear_selected_text();
    Json(SessionSnapshot::from_controller(&session))
}

pub async fn get_chat(State(state): State<SharedState>) -> ApiResult<Json<ChatView>> {
    let session = state.session.lock().await;
    ChatView::from_controller(&session)
        .map(Json)
        .ok_or(ApiError::Session(Error::NoAnalysis))
}

fn spawn_reply(state: SharedState, ticket: ChatTicket) -> JoinHandle<ar_core::Result<Completion>> {
    tokio::spawn(async move {
        let model = state.session.lock().await.model();
        let outcome: ar_core::Result<ChatMessage> = model.generate_chat_reply(&ticket.question).await;
        let completion = state.session.lock().await.complete_reply(ticket, outcome);
        completion
    })
}

pub async fn ask(
    State(state): State<SharedState>,
    Json(request): Json<ChatRequest>,
) -> ApiResult<Response> {
    let ticket = {
        let mut session = state.session.lock().await;
        match request.question.as_deref() {
            Some(question) => session.begin_question(question)?,
            None => session.begin_selection_question()?,
        }
    };
    let task = spawn_reply(state.clone(), ticket);

    let status = if request.wait {
        let completion = task.await.map_err(|e| ApiError::Internal(e.to_string()))??;
        if completion == Completion::Discarded {
            return Err(ApiError::Superseded);
        }
        StatusCode::OK
    } else {
        StatusCode::ACCEPTED
    };

    let session = state.session.lock().await;
    let chat = ChatView::from_controller(&session).ok_or(ApiError::Session(Error::NoAnalysis))?;
    Ok((status, Json(chat)).into_response())
}

pub async fn lookup_word(
    State(state): State<SharedState>,
    Path(word): Path<String>,
) -> ApiResult<Json<WordDetailView>> {
    let info = state.session.lock().await.lookup_word(&word)?;
    Ok(Json(WordDetailView::new(info)))
}

pub async fn open_related_article(
    State(state): State<SharedState>,
    Path((word, id)): Path<(String, String)>,
) -> ApiResult<Redirect> {
    let article = state.session.lock().await.related_article(&word, &id)?;
    Ok(Redirect::to(&article.url))
}

pub async fn drain_notifications(State(state): State<SharedState>) -> Json<Vec<Notification>> {
    let notifications = state.session.lock().await.drain_notifications();
    Json(notifications)
}
