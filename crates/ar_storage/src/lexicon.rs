//! Static word definitions and the keyword explorer table.
//!
//! Lookups never mutate anything; the tables are built once on first use.

use ar_core::{KeywordCategory, RelatedArticle, WordInfo, WordLookup};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref WORDS: HashMap<String, WordInfo> = build_words()
        .into_iter()
        .map(|info| (info.word.clone(), info))
        .collect();
    static ref CATEGORIES: Vec<KeywordCategory> = build_categories();
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticLexicon;

impl StaticLexicon {
    pub fn new() -> Self {
        Self
    }

    pub fn words(&self) -> impl Iterator<Item = &'static str> {
        WORDS.keys().map(String::as_str)
    }
}

impl WordLookup for StaticLexicon {
    fn lookup(&self, word: &str) -> Option<WordInfo> {
        WORDS.get(word.trim()).cloned()
    }

    fn keyword_categories(&self) -> Vec<KeywordCategory> {
        CATEGORIES.clone()
    }
}

fn article(id: &str, title: &str, source: &str, day: u32, summary: &str, url: &str) -> RelatedArticle {
    RelatedArticle {
        id: id.to_string(),
        title: title.to_string(),
        source: source.to_string(),
        published_at: NaiveDate::from_ymd_opt(2024, 12, day).unwrap_or_default(),
        summary: summary.to_string(),
        url: url.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn build_words() -> Vec<WordInfo> {
    vec![
        WordInfo {
            word: "인공지능".to_string(),
            definition: "인간의 학습능력, 추론능력, 지각능력 등을 인공적으로 구현한 컴퓨터 프로그램 또는 시스템. AI(Artificial Intelligence)라고도 불리며, 기계학습, 딥러닝, 자연어 처리 등의 기술을 포함합니다.".to_string(),
            category: "기술".to_string(),
            synonyms: strings(&["AI", "머신러닝", "기계학습", "딥러닝"]),
            related_articles: vec![
                article(
                    "ai1",
                    "ChatGPT-4, 인간 수준의 언어 이해력 달성",
                    "테크뉴스",
                    20,
                    "OpenAI의 최신 언어모델이 복잡한 추론과 창작 능력에서 인간 수준에 근접한 성능을 보여주고 있습니다.",
                    "https://example.com/chatgpt4",
                ),
                article(
                    "ai2",
                    "구글 DeepMind, 단백질 구조 예측 정확도 95% 돌파",
                    "사이언스타임즈",
                    19,
                    "AlphaFold3가 의학 연구와 신약 개발에 혁신적 변화를 가져올 것으로 기대됩니다.",
                    "https://example.com/alphafold3",
                ),
                article(
                    "ai3",
                    "자율주행차 상용화, 2025년 본격 시작",
                    "모빌리티뉴스",
                    18,
                    "레벨4 자율주행 기술이 상용화되면서 교통 패러다임의 대전환이 예상됩니다.",
                    "https://example.com/autonomous-cars",
                ),
            ],
        },
        WordInfo {
            word: "맞춤형학습".to_string(),
            definition: "학습자 개개인의 수준, 능력, 학습 스타일, 선호도 등을 고려하여 개별화된 학습 경험을 제공하는 교육 방법. 개인별 맞춤 교육이라고도 합니다.".to_string(),
            category: "교육".to_string(),
            synonyms: strings(&["개인화학습", "적응형학습", "개별화교육"]),
            related_articles: vec![
                article(
                    "edu1",
                    "AI 튜터가 만드는 개인 맞춤 학습의 미래",
                    "교육뉴스",
                    20,
                    "인공지능 기반 개인 맞춤 학습 시스템이 학습 효과를 획기적으로 개선하고 있습니다.",
                    "https://example.com/ai-tutor",
                ),
                article(
                    "edu2",
                    "에듀테크 시장 급성장, 개인화 학습이 핵심",
                    "에듀테크리뷰",
                    19,
                    "코로나19 이후 에듀테크 시장이 급성장하며 개인화 기술이 주목받고 있습니다.",
                    "https://example.com/edutech-growth",
                ),
            ],
        },
        WordInfo {
            word: "디지털전환".to_string(),
            definition: "기존의 아날로그 또는 물리적 프로세스를 디지털 기술로 변화시키는 과정. 기업이나 조직이 디지털 기술을 활용해 새로운 비즈니스 모델이나 고객 경험을 창출하는 것을 의미합니다.".to_string(),
            category: "비즈니스".to_string(),
            synonyms: strings(&["디지털혁신", "DX", "디지털화"]),
            related_articles: vec![
                article(
                    "dx1",
                    "중소기업 디지털 전환, 정부 지원 확대",
                    "비즈니스헤럴드",
                    20,
                    "중소기업의 디지털 전환을 위한 정부 지원이 대폭 확대되어 경쟁력 강화가 기대됩니다.",
                    "https://example.com/sme-dx",
                ),
                article(
                    "dx2",
                    "은행권 디지털 전환 가속화, 모바일 뱅킹 혁신",
                    "금융타임즈",
                    19,
                    "국내 은행들이 디지털 금융 서비스 혁신에 박차를 가하며 고객 경험을 개선하고 있습니다.",
                    "https://example.com/banking-dx",
                ),
            ],
        },
        WordInfo {
            word: "패러다임".to_string(),
            definition: "특정 시대나 분야에서 지배적인 사고방식, 이론체계, 또는 접근방법. 기존의 틀이나 관점에서 완전히 새로운 방식으로의 변화를 의미하기도 합니다.".to_string(),
            category: "철학/개념".to_string(),
            synonyms: strings(&["사고체계", "관점", "프레임워크"]),
            related_articles: vec![article(
                "para1",
                "원격근무 패러다임의 정착과 미래 전망",
                "워크라이프",
                20,
                "코로나19로 시작된 원격근무가 새로운 업무 패러다임으로 자리잡고 있습니다.",
                "https://example.com/remote-work",
            )],
        },
    ]
}

fn category(name: &str, icon: &str, keywords: &[&str]) -> KeywordCategory {
    KeywordCategory {
        name: name.to_string(),
        icon: icon.to_string(),
        keywords: strings(keywords),
    }
}

fn build_categories() -> Vec<KeywordCategory> {
    vec![
        category(
            "기술/AI",
            "🤖",
            &["인공지능", "머신러닝", "딥러닝", "ChatGPT", "자율주행", "블록체인", "메타버스", "NFT"],
        ),
        category(
            "경제/비즈니스",
            "💼",
            &["주식", "투자", "스타트업", "경제성장", "금리", "부동산", "cryptocurrency", "ESG"],
        ),
        category(
            "사회/정치",
            "🏛️",
            &["정치개혁", "사회변화", "청년정책", "복지", "교육", "의료", "환경정책", "국제관계"],
        ),
        category(
            "문화/엔터",
            "🎭",
            &["K-POP", "드라마", "영화", "게임", "웹툰", "한류", "문화콘텐츠", "OTT"],
        ),
        category(
            "과학/환경",
            "🔬",
            &["기후변화", "신재생에너지", "우주", "바이오", "의학", "환경보호", "탄소중립", "지속가능성"],
        ),
        category(
            "라이프스타일",
            "🌟",
            &["건강", "운동", "요리", "여행", "패션", "뷰티", "반려동물", "취미"],
        ),
    ]
}
