use ar_core::{AnalysisResult, ResultTab, View};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient, toast-style message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }

    fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub(crate) current: Option<AnalysisResult>,
    pub(crate) view: View,
    pub(crate) result_tab: ResultTab,
    pub(crate) is_analyzing: bool,
    /// Text picked in the result view, waiting to be asked in the chat.
    /// Empty when nothing is pending.
    pub(crate) selected_text: String,
}

impl SessionState {
    pub fn current(&self) -> Option<&AnalysisResult> {
        self.current.as_ref()
    }

    pub fn has_analysis(&self) -> bool {
        self.current.is_some()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn result_tab(&self) -> ResultTab {
        self.result_tab
    }

    pub fn is_analyzing(&self) -> bool {
        self.is_analyzing
    }

    pub fn selected_text(&self) -> &str {
        &self.selected_text
    }

    /// The result view stays disabled until something has been analyzed.
    pub fn is_view_enabled(&self, view: View) -> bool {
        view != View::Result || self.has_analysis()
    }

    pub fn enabled_views(&self) -> Vec<View> {
        View::ALL
            .into_iter()
            .filter(|view| self.is_view_enabled(*view))
            .collect()
    }
}
