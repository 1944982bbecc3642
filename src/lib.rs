//! # Answer Key Extractor
//!
//! 从 Pearson 练习 XML 文档中抽取答案的 Rust 库
//!
//! ## 架构设计
//!
//! ### ① 文档层（Document）
//! - `document/` - 把 XML 解析成不可变的节点树，提供类型化查询
//! - `DocumentIndex` - find_all / find_first / text_of
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 每个策略只描述"我能找到什么"
//! - `DirectKeyFinder` - 已标注的 Answer Key
//! - `InteractionKeyFinder` - 切换按钮 `id.show()` 指向的模块
//! - `HeuristicAnswerExtractor` - 填空题 + 选择题逐题重建
//! - `ReportStore` - 保存上一次的地址和结果
//!
//! ### ③ 流程层（Workflow）
//! - `ExtractionFlow` - 按优先级依次尝试策略，第一个成功的胜出
//!
//! ### ④ 编排层（Orchestration）
//! - `App` - 来源解析 → 获取文档 → 抽取 → 保存；`--saved` 时只显示上一次的结果
//!
//! 只有文档解析错误会从抽取核心向外传播，其余字段缺失或格式错误都在本地恢复

pub mod config;
pub mod document;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::{Config, ReportLabels};
pub use document::{Document, DocumentIndex, Selector, Step};
pub use error::{AppError, AppResult, ParseError};
pub use infrastructure::{is_exercise_url, ExerciseSource, Fetcher};
pub use models::{AnswerReport, QuestionRecord, SavedReport, StrategyKind};
pub use orchestrator::{App, Command};
pub use workflow::ExtractionFlow;

/// 使用默认配置抽取答案
pub fn extract(xml: &str) -> Result<AnswerReport, ParseError> {
    ExtractionFlow::new(&Config::default()).extract(xml)
}
