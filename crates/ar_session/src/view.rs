//! Read-only projections of the session, shaped for display.
//!
//! Every type here is built from controller state and nothing else, so it
//! can be serialized for the HTTP surface or printed by the CLI.

use ar_core::{
    AnalysisResult, ChatMessage, HistoryEntry, ImportanceTier, ImportantWord, RelatedArticle,
    ResultTab, Sender, View, WordInfo,
};
use serde::Serialize;
use std::fmt;

use crate::controller::SessionController;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub view: View,
    pub result_tab: ResultTab,
    pub enabled_views: Vec<View>,
    pub has_analysis: bool,
    pub is_analyzing: bool,
    pub is_replying: bool,
    pub selected_text: String,
    pub analysis_title: Option<String>,
}

impl SessionSnapshot {
    pub fn from_controller(controller: &SessionController) -> Self {
        let state = controller.state();
        Self {
            view: state.view(),
            result_tab: state.result_tab(),
            enabled_views: state.enabled_views(),
            has_analysis: state.has_analysis(),
            is_analyzing: state.is_analyzing(),
            is_replying: controller.chat().map(|c| c.is_replying()).unwrap_or(false),
            selected_text: state.selected_text().to_string(),
            analysis_title: state.current().map(|a| a.title.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordGroup {
    pub tier: ImportanceTier,
    pub label: &'static str,
    pub description: &'static str,
    pub words: Vec<ImportantWord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    pub difficulty_label: &'static str,
    pub difficulty_meter: u8,
    pub sentiment_label: &'static str,
    pub word_groups: Vec<WordGroup>,
    pub paragraphs: Vec<String>,
}

impl ResultView {
    pub fn from_analysis(analysis: &AnalysisResult) -> Self {
        let word_groups = analysis
            .words_by_tier()
            .into_iter()
            .map(|(tier, words)| WordGroup {
                tier,
                label: tier.label(),
                description: tier.description(),
                words: words.into_iter().cloned().collect(),
            })
            .collect();

        Self {
            difficulty_label: analysis.difficulty.label(),
            difficulty_meter: analysis.difficulty.meter_value(),
            sentiment_label: analysis.sentiment.label(),
            word_groups,
            paragraphs: analysis.paragraphs().into_iter().map(String::from).collect(),
            analysis: analysis.clone(),
        }
    }

    pub fn from_controller(controller: &SessionController) -> Option<Self> {
        controller.current().map(Self::from_analysis)
    }
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = &self.analysis;
        writeln!(f, "{}", a.title)?;
        writeln!(
            f,
            "{}분 독서 · {} · {} · 난이도 {} ({}%)",
            a.reading_time_minutes, a.category, self.sentiment_label, self.difficulty_label, self.difficulty_meter
        )?;
        writeln!(f)?;
        writeln!(f, "AI 요약")?;
        writeln!(f, "{}", a.summary)?;
        writeln!(f)?;
        writeln!(f, "주요 포인트")?;
        for (i, point) in a.key_points.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, point)?;
        }
        writeln!(f)?;
        writeln!(f, "중요 단어")?;
        for group in &self.word_groups {
            let words = group
                .words
                .iter()
                .map(|w| format!("{} ({})", w.word, w.frequency))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "  [{}] {}", group.label, words)?;
        }
        writeln!(f)?;
        write!(f, "키워드: {}", a.keywords.iter().map(|k| format!("#{}", k)).collect::<Vec<_>>().join(" "))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItemView {
    #[serde(flatten)]
    pub entry: HistoryEntry,
    pub difficulty_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryView {
    pub items: Vec<HistoryItemView>,
}

impl HistoryView {
    pub fn new(entries: Vec<HistoryEntry>) -> Self {
        let items = entries
            .into_iter()
            .map(|entry| HistoryItemView {
                difficulty_label: entry.difficulty.label(),
                entry,
            })
            .collect();
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for HistoryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "분석 기록이 없습니다.");
        }
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let e = &item.entry;
            write!(
                f,
                "[{}] {} · {} · {} · {}분 · {}",
                e.id, e.title, e.category, e.analyzed_at, e.reading_time_minutes, item.difficulty_label
            )?;
            if let Some(url) = &e.source_url {
                write!(f, " · {}", url)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordDetailView {
    #[serde(flatten)]
    pub info: WordInfo,
}

impl WordDetailView {
    pub fn new(info: WordInfo) -> Self {
        Self { info }
    }

    pub fn articles(&self) -> &[RelatedArticle] {
        &self.info.related_articles
    }
}

impl fmt::Display for WordDetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = &self.info;
        writeln!(f, "{} [{}]", info.word, info.category)?;
        writeln!(f, "{}", info.definition)?;
        if !info.synonyms.is_empty() {
            writeln!(f, "유의어: {}", info.synonyms.join(", "))?;
        }
        write!(f, "관련 기사:")?;
        for (i, article) in self.articles().iter().enumerate() {
            write!(
                f,
                "\n  #{} {} ({}, {})\n     {}\n     {}",
                i + 1,
                article.title,
                article.source,
                article.published_at,
                article.summary,
                article.url
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatView {
    pub article_title: String,
    pub messages: Vec<ChatMessage>,
    pub is_replying: bool,
    pub pending_question: String,
}

impl ChatView {
    pub fn from_controller(controller: &SessionController) -> Option<Self> {
        controller.chat().map(|chat| Self {
            article_title: chat.article_title().to_string(),
            messages: chat.messages().to_vec(),
            is_replying: chat.is_replying(),
            pending_question: controller.state().selected_text().to_string(),
        })
    }
}

pub fn format_message(message: &ChatMessage) -> String {
    let who = match message.sender {
        Sender::User => "나",
        Sender::Assistant => "AI",
    };
    format!("[{}] {}: {}", message.timestamp.format("%H:%M"), who, message.content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ar_core::{Difficulty, Sentiment};
    use chrono::NaiveDate;

    fn analysis() -> AnalysisResult {
        AnalysisResult {
            title: "제목".to_string(),
            summary: "요약".to_string(),
            full_text: "제목\n\n본문".to_string(),
            key_points: vec!["하나".to_string()],
            keywords: vec!["키".to_string()],
            important_words: vec![ImportantWord {
                word: "단어".to_string(),
                frequency: 2,
                importance: ImportanceTier::Medium,
                context: "맥락".to_string(),
            }],
            reading_time_minutes: 4,
            difficulty: Difficulty::Hard,
            category: "분류".to_string(),
            sentiment: Sentiment::Negative,
        }
    }

    #[test]
    fn test_result_view() {
        let view = ResultView::from_analysis(&analysis());
        assert_eq!(view.difficulty_meter, 90);
        assert_eq!(view.sentiment_label, "부정적");
        assert_eq!(view.word_groups.len(), 1);
        assert_eq!(view.word_groups[0].label, "중요");
        assert_eq!(view.paragraphs, vec!["제목", "본문"]);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["title"], "제목");
        assert_eq!(json["difficultyMeter"], 90);
        assert_eq!(json["wordGroups"][0]["tier"], "medium");

        let text = view.to_string();
        assert!(text.contains("[중요] 단어 (2)"));
        assert!(text.contains("#키"));
    }

    #[test]
    fn test_history_view() {
        assert_eq!(HistoryView::new(vec![]).to_string(), "분석 기록이 없습니다.");

        let entry = HistoryEntry {
            id: "7".to_string(),
            title: "기사".to_string(),
            category: "분류".to_string(),
            analyzed_at: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            reading_time_minutes: 5,
            difficulty: Difficulty::Easy,
            source_url: Some("https://example.com".to_string()),
        };
        let view = HistoryView::new(vec![entry]);
        assert_eq!(
            view.to_string(),
            "[7] 기사 · 분류 · 2024-12-01 · 5분 · 쉬움 · https://example.com"
        );
    }

    #[test]
    fn test_format_message() {
        let message = ChatMessage::user("질문");
        assert!(format_message(&message).ends_with("나: 질문"));
    }
}
