use serde::{Deserialize, Serialize};

use super::answer_report::StrategyKind;

/// 持久化的抽取结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedReport {
    /// 练习文档来源（URL 或文件路径）
    pub source: String,
    /// 产出结果的策略
    pub strategy: StrategyKind,
    /// 可直接渲染的 HTML
    pub html: String,
    /// 保存时间（RFC 3339）
    pub saved_at: String,
}

impl SavedReport {
    pub fn new(source: impl Into<String>, strategy: StrategyKind, html: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            strategy,
            html: html.into(),
            saved_at: chrono::Local::now().to_rfc3339(),
        }
    }
}
