//! 答案抽取流程 - 流程层
//!
//! 核心职责：定义"一份文档"的完整抽取流程
//!
//! 流程顺序：
//! 1. 解析文档（唯一会失败的步骤）
//! 2. DirectKeyFinder → InteractionKeyFinder → HeuristicAnswerExtractor
//! 3. 第一个给出非空结果的策略胜出

use tracing::{info, warn};

use crate::config::Config;
use crate::document::{Document, DocumentIndex};
use crate::error::ParseError;
use crate::models::AnswerReport;
use crate::services::{
    AnswerStrategy, DirectKeyFinder, HeuristicAnswerExtractor, InteractionKeyFinder,
};

/// 答案抽取流程
///
/// - 持有按优先级排列的策略列表
/// - 不持有任何文档状态，可重复调用
/// - 不做 I/O
pub struct ExtractionFlow {
    strategies: Vec<Box<dyn AnswerStrategy>>,
}

impl ExtractionFlow {
    /// 按默认顺序创建三个策略
    pub fn new(config: &Config) -> Self {
        Self::with_strategies(vec![
            Box::new(DirectKeyFinder::new()),
            Box::new(InteractionKeyFinder::new()),
            Box::new(HeuristicAnswerExtractor::new(config)),
        ])
    }

    /// 使用自定义策略列表
    pub fn with_strategies(strategies: Vec<Box<dyn AnswerStrategy>>) -> Self {
        Self { strategies }
    }

    /// 解析文档并抽取答案
    pub fn extract(&self, xml: &str) -> Result<AnswerReport, ParseError> {
        let document = Document::parse(xml)?;
        Ok(self.extract_document(&document))
    }

    /// 从字节流解析文档并抽取答案
    pub fn extract_bytes(&self, bytes: &[u8]) -> Result<AnswerReport, ParseError> {
        let document = Document::parse_bytes(bytes)?;
        Ok(self.extract_document(&document))
    }

    /// 在已解析的文档上依次尝试各策略
    pub fn extract_document(&self, document: &Document) -> AnswerReport {
        let index = DocumentIndex::new(document);

        let report = self
            .strategies
            .iter()
            .find_map(|strategy| {
                info!("🔍 尝试策略: {}", strategy.kind());
                let html = strategy.find(&index).filter(|html| !html.is_empty());
                if html.is_none() {
                    info!("策略 {} 未找到结果，尝试下一个", strategy.kind());
                }
                html.map(|html| AnswerReport::from_html(strategy.kind(), html))
            })
            .unwrap_or(AnswerReport::NotFound);

        match report.strategy() {
            Some(kind) => info!("✓ 策略 {} 找到答案", kind),
            None => warn!("⚠️ 三种策略都没有找到答案"),
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StrategyKind;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Fixed {
        kind: StrategyKind,
        result: Option<&'static str>,
        calls: Arc<AtomicUsize>,
    }

    impl AnswerStrategy for Fixed {
        fn kind(&self) -> StrategyKind {
            self.kind
        }

        fn find(&self, _index: &DocumentIndex<'_>) -> Option<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.map(str::to_string)
        }
    }

    fn fixed(
        kind: StrategyKind,
        result: Option<&'static str>,
        calls: &Arc<AtomicUsize>,
    ) -> Box<dyn AnswerStrategy> {
        Box::new(Fixed {
            kind,
            result,
            calls: calls.clone(),
        })
    }

    #[test]
    fn test_stops_at_first_success() {
        let calls = Arc::new(AtomicUsize::new(0));
        let flow = ExtractionFlow::with_strategies(vec![
            fixed(StrategyKind::DirectKey, None, &calls),
            fixed(StrategyKind::InteractionKey, Some("key"), &calls),
            fixed(StrategyKind::Heuristic, Some("never"), &calls),
        ]);

        let report = flow.extract("<page/>").unwrap();
        assert_eq!(
            report,
            AnswerReport::Found {
                strategy: StrategyKind::InteractionKey,
                html: "key".to_string()
            }
        );
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_empty_result_falls_through() {
        let calls = Arc::new(AtomicUsize::new(0));
        let flow = ExtractionFlow::with_strategies(vec![
            fixed(StrategyKind::DirectKey, Some(""), &calls),
            fixed(StrategyKind::Heuristic, None, &calls),
        ]);

        assert_eq!(flow.extract("<page/>").unwrap(), AnswerReport::NotFound);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_parse_error_runs_no_strategy() {
        let calls = Arc::new(AtomicUsize::new(0));
        let flow =
            ExtractionFlow::with_strategies(vec![fixed(StrategyKind::DirectKey, Some("x"), &calls)]);

        assert!(flow.extract("<page>").is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
