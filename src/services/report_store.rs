//! 结果存储服务
//!
//! 只负责"记住上一次的练习地址和结果"，不关心流程

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::SavedReport;

/// 存储文件内容
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_exercise_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_report: Option<SavedReport>,
}

/// 结果存储
///
/// 职责：
/// - 保存 / 读取上一次的练习地址
/// - 保存 / 读取上一次成功的抽取结果
/// - 存储文件不存在时视为空
pub struct ReportStore {
    path: PathBuf,
}

impl ReportStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 记录最近一次的练习地址
    pub async fn save_last_source(&self, source: &str) -> AppResult<()> {
        let mut file = self.read().await?;
        file.last_exercise_source = Some(source.to_string());
        self.write(&file).await
    }

    /// 最近一次的练习地址
    pub async fn last_source(&self) -> AppResult<Option<String>> {
        Ok(self.read().await?.last_exercise_source)
    }

    /// 保存抽取结果
    pub async fn save_report(&self, report: &SavedReport) -> AppResult<()> {
        let mut file = self.read().await?;
        file.saved_report = Some(report.clone());
        self.write(&file).await
    }

    /// 读取上一次保存的结果
    pub async fn load_report(&self) -> AppResult<Option<SavedReport>> {
        Ok(self.read().await?.saved_report)
    }

    async fn read(&self) -> AppResult<StoreFile> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("存储文件不存在: {}", self.path.display());
                return Ok(StoreFile::default());
            }
            Err(e) => return Err(AppError::storage_read_failed(self.path.display().to_string(), e)),
        };
        Ok(serde_json::from_str(&content)?)
    }

    async fn write(&self, file: &StoreFile) -> AppResult<()> {
        let content = serde_json::to_string_pretty(file)?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| AppError::storage_write_failed(self.path.display().to_string(), e))?;
        debug!("已写入存储文件: {}", self.path.display());
        Ok(())
    }
}
