use serde::{Deserialize, Serialize};

/// 产出结果的抽取策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// 策略 1：文本中已标注的 "Answer Key"
    DirectKey,
    /// 策略 2：切换按钮 `id.show()` 指向的模块
    InteractionKey,
    /// 策略 3：逐题启发式抽取
    Heuristic,
}

impl StrategyKind {
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::DirectKey => "direct-key",
            StrategyKind::InteractionKey => "interaction-key",
            StrategyKind::Heuristic => "heuristic",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 抽取结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerReport {
    /// 没有找到任何答案材料
    NotFound,
    /// 找到答案，`html` 可直接渲染
    Found { strategy: StrategyKind, html: String },
}

impl AnswerReport {
    /// 空字符串视为没有结果
    pub fn from_html(strategy: StrategyKind, html: String) -> Self {
        if html.is_empty() {
            AnswerReport::NotFound
        } else {
            AnswerReport::Found { strategy, html }
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, AnswerReport::Found { .. })
    }

    pub fn html(&self) -> Option<&str> {
        match self {
            AnswerReport::Found { html, .. } => Some(html),
            AnswerReport::NotFound => None,
        }
    }

    pub fn strategy(&self) -> Option<StrategyKind> {
        match self {
            AnswerReport::Found { strategy, .. } => Some(*strategy),
            AnswerReport::NotFound => None,
        }
    }

    pub fn into_html(self) -> Option<String> {
        match self {
            AnswerReport::Found { html, .. } => Some(html),
            AnswerReport::NotFound => None,
        }
    }
}
