//! 抽取策略接口

use crate::document::DocumentIndex;
use crate::models::StrategyKind;

/// 抽取策略
///
/// 每个策略都是纯函数：同一份文档总是得到同样的结果，
/// 找不到答案时返回 `None`（触发下一个策略），从不返回错误
pub trait AnswerStrategy: Send + Sync {
    /// 策略类型
    fn kind(&self) -> StrategyKind;

    /// 在文档中查找答案，返回可渲染的 HTML
    fn find(&self, index: &DocumentIndex<'_>) -> Option<String>;
}
