//! 策略 1：直接查找已标注的 "Answer Key" 文本块

use tracing::{debug, info};

use super::patterns::has_answer_key_label;
use super::strategy::AnswerStrategy;
use crate::document::{DocumentIndex, Selector};
use crate::models::StrategyKind;

/// 直接答案查找
///
/// 按文档顺序遍历所有 `textModule text`，返回第一个内嵌
/// "标签 + Answer Key" 的文本内容（原样返回）
#[derive(Debug)]
pub struct DirectKeyFinder {
    selector: Selector,
}

impl DirectKeyFinder {
    pub fn new() -> Self {
        Self {
            selector: Selector::path(["textModule", "text"]),
        }
    }
}

impl Default for DirectKeyFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerStrategy for DirectKeyFinder {
    fn kind(&self) -> StrategyKind {
        StrategyKind::DirectKey
    }

    fn find(&self, index: &DocumentIndex<'_>) -> Option<String> {
        let found = index
            .find_all(&self.selector)
            .into_iter()
            .map(|node| index.text_of(node))
            .find(|text| has_answer_key_label(text));

        match &found {
            Some(text) => info!("✓ 在文本模块中找到 Answer Key ({} 字符)", text.chars().count()),
            None => debug!("没有文本模块带有 Answer Key 标注"),
        }
        found
    }
}
