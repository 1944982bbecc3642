//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (来源 → 获取 → 抽取 → 保存)
//!     ↓
//! workflow::ExtractionFlow (一份文档的三段式抽取)
//!     ↓
//! services (能力层：三个策略 / 报告存储)
//!     ↓
//! document + infrastructure (文档树查询 / 文档获取)
//! ```
//!
//! 编排层只做调度和状态输出，不做具体的抽取判断

pub mod app;

pub use app::{App, Command};
