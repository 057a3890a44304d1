use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse ranking of how central a word is to the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportanceTier {
    High,
    Medium,
    Low,
}

impl ImportanceTier {
    pub const ALL: [ImportanceTier; 3] = [Self::High, Self::Medium, Self::Low];

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "핵심",
            Self::Medium => "중요",
            Self::Low => "참고",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::High => "반드시 이해해야 할 중요한 개념들",
            Self::Medium => "내용 이해에 도움이 되는 단어들",
            Self::Low => "추가로 알아두면 좋은 단어들",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "쉬움",
            Self::Medium => "보통",
            Self::Hard => "어려움",
        }
    }

    /// Fill level of the difficulty meter, out of 100.
    pub fn meter_value(&self) -> u8 {
        match self {
            Self::Easy => 30,
            Self::Medium => 60,
            Self::Hard => 90,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Positive => "긍정적",
            Self::Neutral => "중립적",
            Self::Negative => "부정적",
        }
    }
}

/// How the submitted article content should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Url,
    Text,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url => write!(f, "url"),
            Self::Text => write!(f, "text"),
        }
    }
}

impl FromStr for InputKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "url" => Ok(Self::Url),
            "text" => Ok(Self::Text),
            other => Err(format!("Invalid input kind: {}", other)),
        }
    }
}

/// Top-level navigational views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Analyze,
    Result,
    History,
}

impl View {
    pub const ALL: [View; 4] = [Self::Home, Self::Analyze, Self::Result, Self::History];
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Analyze => write!(f, "analyze"),
            Self::Result => write!(f, "result"),
            Self::History => write!(f, "history"),
        }
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|view| view.to_string() == s.trim().to_lowercase())
            .ok_or_else(|| format!("Invalid view: {}", s))
    }
}

/// Sub-tabs of the result view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResultTab {
    #[default]
    Summary,
    FullText,
    Chat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportantWord {
    pub word: String,
    pub frequency: u32,
    pub importance: ImportanceTier,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub title: String,
    pub summary: String,
    pub full_text: String,
    pub key_points: Vec<String>,
    pub keywords: Vec<String>,
    pub important_words: Vec<ImportantWord>,
    pub reading_time_minutes: u32,
    pub difficulty: Difficulty,
    pub category: String,
    pub sentiment: Sentiment,
}

impl AnalysisResult {
    /// Important words grouped by tier, highest tier first. Tiers without
    /// words are left out and words keep their original order.
    pub fn words_by_tier(&self) -> Vec<(ImportanceTier, Vec<&ImportantWord>)> {
        ImportanceTier::ALL
            .into_iter()
            .map(|tier| {
                let words = self
                    .important_words
                    .iter()
                    .filter(|w| w.importance == tier)
                    .collect::<Vec<_>>();
                (tier, words)
            })
            .filter(|(_, words)| !words.is_empty())
            .collect()
    }

    /// Paragraphs of the full text, split on blank lines.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.full_text
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub title: String,
    pub category: String,
    pub analyzed_at: NaiveDate,
    pub reading_time_minutes: u32,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl HistoryEntry {
    pub fn from_analysis(
        id: String,
        analysis: &AnalysisResult,
        analyzed_at: NaiveDate,
        source_url: Option<String>,
    ) -> Self {
        Self {
            id,
            title: analysis.title.clone(),
            category: analysis.category.clone(),
            analyzed_at,
            reading_time_minutes: analysis.reading_time_minutes,
            difficulty: analysis.difficulty,
            source_url,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(content: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content, Sender::User)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(content, Sender::Assistant)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedArticle {
    pub id: String,
    pub title: String,
    pub source: String,
    pub published_at: NaiveDate,
    pub summary: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordInfo {
    pub word: String,
    pub definition: String,
    pub category: String,
    pub synonyms: Vec<String>,
    pub related_articles: Vec<RelatedArticle>,
}

impl WordInfo {
    pub fn related_article(&self, id: &str) -> Option<&RelatedArticle> {
        self.related_articles.iter().find(|a| a.id == id)
    }
}

/// A group of keywords offered by the keyword explorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCategory {
    pub name: String,
    pub icon: String,
    pub keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(word: &str, importance: ImportanceTier) -> ImportantWord {
        ImportantWord {
            word: word.to_string(),
            frequency: 1,
            importance,
            context: String::new(),
        }
    }

    fn analysis(words: Vec<ImportantWord>, full_text: &str) -> AnalysisResult {
        AnalysisResult {
            title: "Test".to_string(),
            summary: String::new(),
            full_text: full_text.to_string(),
            key_points: vec![],
            keywords: vec![],
            important_words: words,
            reading_time_minutes: 1,
            difficulty: Difficulty::Easy,
            category: "test".to_string(),
            sentiment: Sentiment::Neutral,
        }
    }

    #[test]
    fn test_words_by_tier() {
        let result = analysis(
            vec![
                word("low-a", ImportanceTier::Low),
                word("high-a", ImportanceTier::High),
                word("low-b", ImportanceTier::Low),
                word("high-b", ImportanceTier::High),
            ],
            "",
        );

        let grouped = result.words_by_tier();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, ImportanceTier::High);
        assert_eq!(grouped[1].0, ImportanceTier::Low);
        let low: Vec<&str> = grouped[1].1.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(low, vec!["low-a", "low-b"]);
    }

    #[test]
    fn test_paragraphs() {
        let result = analysis(vec![], "Title\n\nFirst paragraph.\n\n\n\nSecond one.\n");
        assert_eq!(result.paragraphs(), vec!["Title", "First paragraph.", "Second one."]);
    }

    #[test]
    fn test_view_parsing() {
        assert_eq!("result".parse::<View>().unwrap(), View::Result);
        assert_eq!(" History ".parse::<View>().unwrap(), View::History);
        assert!("settings".parse::<View>().is_err());
        assert_eq!("URL".parse::<InputKind>().unwrap(), InputKind::Url);
    }

    #[test]
    fn test_wire_format() {
        let entry = HistoryEntry {
            id: "3".to_string(),
            title: "t".to_string(),
            category: "c".to_string(),
            analyzed_at: NaiveDate::from_ymd_opt(2024, 12, 18).unwrap(),
            reading_time_minutes: 6,
            difficulty: Difficulty::Easy,
            source_url: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["analyzedAt"], "2024-12-18");
        assert_eq!(json["readingTimeMinutes"], 6);
        assert_eq!(json["difficulty"], "easy");
        assert!(json.get("sourceUrl").is_none());
    }

    #[test]
    fn test_difficulty_meter() {
        assert_eq!(Difficulty::Easy.meter_value(), 30);
        assert_eq!(Difficulty::Hard.label(), "어려움");
        assert_eq!(Sentiment::Positive.label(), "긍정적");
    }
}
