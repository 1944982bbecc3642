//! 应用编排器 - 编排层
//!
//! ## 职责
//!
//! 1. **来源解析**：命令行参数优先，否则使用上一次记录的练习地址
//! 2. **获取文档**：委托 `Fetcher`
//! 3. **抽取答案**：委托 `ExtractionFlow`
//! 4. **保存结果**：委托 `ReportStore`
//! 5. **状态输出**：每一步都输出面向用户的状态日志

use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult, BusinessError};
use crate::infrastructure::{is_exercise_url, ExerciseSource, Fetcher};
use crate::models::{AnswerReport, SavedReport};
use crate::services::ReportStore;
use crate::workflow::ExtractionFlow;

/// 命令行指令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 抽取答案；来源为空时使用上一次的练习地址
    Extract(Option<String>),
    /// 只显示上一次保存的答案
    ShowSaved,
}

impl Command {
    /// 从命令行参数（不含程序名）解析指令
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        match args.into_iter().next() {
            Some(arg) if arg == "--saved" => Command::ShowSaved,
            source => Command::Extract(source),
        }
    }
}

/// 应用主结构
pub struct App {
    fetcher: Fetcher,
    flow: ExtractionFlow,
    store: ReportStore,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: &Config) -> AppResult<Self> {
        log_startup(config);

        Ok(Self {
            fetcher: Fetcher::new(config)?,
            flow: ExtractionFlow::new(config),
            store: ReportStore::new(&config.store_path),
        })
    }

    /// 运行一次完整的抽取
    ///
    /// `source` 为空时使用上一次记录的练习地址
    pub async fn run(&self, source: Option<String>) -> AppResult<AnswerReport> {
        info!("📁 正在查找练习地址...");
        let source = self.resolve_source(source).await?;

        info!("📄 正在读取练习文档: {}", source);
        let xml = self.fetcher.fetch(&source).await.map_err(|e| {
            error!("❌ 读取练习文档失败: {}", e);
            e
        })?;

        info!("🔎 正在分析答案...");
        let report = self.flow.extract(&xml).map_err(|e| {
            error!("❌ 文档解析失败: {}", e);
            AppError::from(e)
        })?;

        match &report {
            AnswerReport::Found { strategy, html } => {
                let saved = SavedReport::new(source.to_string(), *strategy, html.clone());
                self.store.save_report(&saved).await?;
                info!("✅ 已保存答案 (策略: {})", strategy);
            }
            AnswerReport::NotFound => {
                warn!("⚠️ 文档已读取，但三种方式都没有找到答案");
            }
        }

        Ok(report)
    }

    /// 上一次保存的结果
    pub async fn saved_report(&self) -> AppResult<Option<SavedReport>> {
        let saved = self.store.load_report().await?;
        match &saved {
            Some(report) => info!(
                "📂 上一次保存的答案: {} (策略: {}, 保存于 {})",
                report.source, report.strategy, report.saved_at
            ),
            None => warn!("⚠️ 还没有保存过答案"),
        }
        Ok(saved)
    }

    async fn resolve_source(&self, source: Option<String>) -> AppResult<ExerciseSource> {
        if let Some(raw) = source {
            let parsed = ExerciseSource::parse(&raw);
            if let ExerciseSource::Url(url) = &parsed {
                if is_exercise_url(url) {
                    self.store.save_last_source(url).await?;
                } else {
                    warn!("⚠️ 地址看起来不是练习文档 (/pages/*.xml): {}", url);
                }
            }
            return Ok(parsed);
        }

        match self.store.last_source().await? {
            Some(raw) => Ok(ExerciseSource::parse(&raw)),
            None => {
                warn!("⚠️ 没有找到练习地址，请重新打开练习页面后再试");
                Err(AppError::Business(BusinessError::NoExerciseSource))
            }
        }
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 练习答案抽取");
    info!("💾 结果存储: {}", config.store_path);
    info!("{}", "=".repeat(60));
}
