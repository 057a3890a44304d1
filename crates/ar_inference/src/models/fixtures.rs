//! Canned payloads returned by the mock model.

use ar_core::{AnalysisResult, Difficulty, ImportanceTier, ImportantWord, Sentiment};

pub const ANALYSIS_TITLE: &str = "인공지능이 바꾸는 미래의 교육";

/// Lead-ins a chat reply starts with, picked uniformly at random.
pub const REPLY_LEAD_INS: [&str; 5] = [
    "이 기사의 주요 내용을 바탕으로 답변드리겠습니다.",
    "기사에서 언급된 내용을 참고하면,",
    "해당 주제에 대해 기사에서는 다음과 같이 설명하고 있습니다:",
    "기사의 맥락에서 보면,",
    "이 기사에서 다루고 있는 핵심은",
];

const REPLY_TAIL: &str = "에 대한 답변은 기사의 내용을 종합해보면, 현재 기술 발전과 사회적 변화의 맥락에서 매우 중요한 의미를 가지고 있습니다. 더 구체적인 질문이 있으시면 언제든 말씀해주세요.";

const SUMMARY: &str = "인공지능 기술이 교육 분야에 혁신을 가져오고 있습니다. 맞춤형 학습, 자동 평가, 가상 튜터 등의 기능을 통해 학습자 개개인의 수준과 속도에 맞는 교육이 가능해지고 있으며, 교사들의 업무 효율성도 크게 향상되고 있습니다. 하지만 기술 도입 과정에서 발생할 수 있는 문제점들도 함께 고려해야 할 필요가 있습니다.";

const FULL_TEXT: &str = "인공지능이 바꾸는 미래의 교육

교육 현장에서 인공지능(AI) 기술의 도입이 본격화되면서, 전통적인 교육 방식에 혁신적인 변화가 일어나고 있다. 특히 맞춤형 학습, 자동화된 평가 시스템, 그리고 가상 AI 튜터의 등장은 교육의 패러다임을 근본적으로 바꾸고 있다.

가장 주목받는 변화는 맞춤형 학습 시스템이다. AI는 학습자 개개인의 학습 패턴, 이해도, 학습 속도를 실시간으로 분석하여 최적화된 학습 경로를 제공한다. 예를 들어, 수학 문제를 풀 때 학생이 어떤 부분에서 어려움을 겪는지 파악하고, 그에 맞는 추가 문제나 설명을 자동으로 제공하는 것이다. 이는 획일적인 교육에서 벗어나 진정한 개별 맞춤 교육을 가능하게 한다.

자동화된 평가 시스템 또한 교육 현장에 큰 변화를 가져오고 있다. AI는 객관식뿐만 아니라 서술형 답안까지 정확하게 채점할 수 있게 되었다. 이는 교사들의 업무 부담을 크게 줄여주는 동시에, 학생들에게는 즉각적인 피드백을 제공한다. 더 나아가 AI는 단순한 정답 여부뿐만 아니라 학습자의 사고 과정까지 분석하여 더욱 구체적이고 유용한 피드백을 제공할 수 있다.

가상 AI 튜터의 등장은 또 다른 혁신이다. 24시간 언제든지 학습자의 질문에 답변하고, 개별 학습 계획을 세우며, 학습 동기를 유지할 수 있도록 도와주는 AI 튜터들이 개발되고 있다. 이들은 인간 교사의 역할을 대체하는 것이 아니라, 보완하는 역할을 하며 더욱 풍부한 학습 환경을 제공한다.

하지만 이러한 기술적 진보에도 불구하고 여러 과제들이 남아있다. 데이터 개인정보 보호 문제는 가장 시급한 과제 중 하나다. 학습자의 모든 학습 데이터가 AI 시스템에 저장되고 분석되는 과정에서 개인정보 유출의 위험이 있기 때문이다. 또한 AI 기술에 대한 접근성 격차로 인해 디지털 교육 불평등이 심화될 수 있다는 우려도 있다.

기술적 한계도 여전히 존재한다. AI는 정량적 데이터 분석에는 뛰어나지만, 창의성이나 비판적 사고와 같은 고차원적 사고 능력을 평가하고 교육하는 데는 한계가 있다. 따라서 AI 기술의 도입과 함께 인간 교사의 역할 재정의와 새로운 교육 방법론의 개발이 필요하다.

결론적으로, AI 기술은 교육 분야에 놀라운 가능성을 제시하고 있지만, 성공적인 도입을 위해서는 기술적 완성도 향상과 함께 윤리적, 사회적 고려사항들을 신중하게 다뤄야 할 것이다. 미래의 교육은 AI와 인간이 협력하는 새로운 모델로 발전해 나갈 것으로 전망된다.";

fn important_word(word: &str, frequency: u32, importance: ImportanceTier, context: &str) -> ImportantWord {
    ImportantWord {
        word: word.to_string(),
        frequency,
        importance,
        context: context.to_string(),
    }
}

pub fn analysis() -> AnalysisResult {
    use ImportanceTier::{High, Low, Medium};

    AnalysisResult {
        title: ANALYSIS_TITLE.to_string(),
        summary: SUMMARY.to_string(),
        full_text: FULL_TEXT.to_string(),
        key_points: [
            "AI 기반 맞춤형 학습 시스템이 학습자의 개별 수준을 파악하여 최적화된 학습 경로를 제공합니다",
            "자동화된 평가 시스템으로 교사의 업무 부담이 줄어들고 실시간 피드백이 가능해집니다",
            "가상 AI 튜터가 24시간 학습 지원을 제공하여 언제든지 도움을 받을 수 있습니다",
            "데이터 개인정보 보호와 기술 격차 해소 등의 과제가 여전히 남아있습니다",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        keywords: ["인공지능", "교육혁신", "맞춤형학습", "자동평가", "가상튜터", "에듀테크", "디지털교육"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        important_words: vec![
            important_word("인공지능", 8, High, "교육 분야의 핵심 기술로 언급됨"),
            important_word("맞춤형학습", 5, High, "AI 교육의 주요 혜택으로 강조됨"),
            important_word("패러다임", 3, Medium, "교육 방식의 근본적 변화를 설명"),
            important_word("디지털전환", 4, Medium, "교육계의 기술 도입 과정"),
            important_word("자동화", 3, Medium, "평가 시스템의 주요 특징"),
            important_word("피드백", 4, Low, "AI 시스템의 장점으로 언급"),
            important_word("개인정보보호", 2, Low, "AI 교육 도입의 과제로 제시"),
            important_word("창의성", 2, Low, "AI의 한계로 언급된 영역"),
        ],
        reading_time_minutes: 8,
        difficulty: Difficulty::Medium,
        category: "교육/기술".to_string(),
        sentiment: Sentiment::Positive,
    }
}

pub fn chat_reply(lead_in: &str, question: &str) -> String {
    format!("{} {}{}", lead_in, question, REPLY_TAIL)
}

pub fn chat_greeting(article_title: &str) -> String {
    format!(
        "안녕하세요! \"{}\" 기사에 대해 궁금한 점이 있으시면 언제든 물어보세요. 기사 내용을 바탕으로 자세히 설명해드리겠습니다.",
        article_title
    )
}
