//! 业务能力层
//!
//! 每个服务只描述"我能做什么"：
//! - `DirectKeyFinder` - 策略 1，已标注的 Answer Key
//! - `InteractionKeyFinder` - 策略 2，切换按钮指向的答案模块
//! - `HeuristicAnswerExtractor` - 策略 3，逐题重建答案
//! - `ReportStore` - 记住上一次的地址和结果

pub mod direct_key;
pub mod heuristic;
pub mod interaction_key;
pub mod patterns;
pub mod report_builder;
pub mod report_store;
pub mod strategy;

pub use direct_key::DirectKeyFinder;
pub use heuristic::HeuristicAnswerExtractor;
pub use interaction_key::InteractionKeyFinder;
pub use report_builder::ReportBuilder;
pub use report_store::ReportStore;
pub use strategy::AnswerStrategy;
