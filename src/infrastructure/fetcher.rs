//! 文档获取器 - 基础设施层
//!
//! 持有唯一的 HTTP 客户端，只暴露"取回原始文档文本"的能力

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AppError, AppResult, FetchError};

/// 练习文档来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseSource {
    /// 远程地址
    Url(String),
    /// 本地文件
    File(PathBuf),
}

impl ExerciseSource {
    /// `http://` / `https://` 开头视为远程地址，其余视为文件路径
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ExerciseSource::Url(trimmed.to_string())
        } else {
            ExerciseSource::File(PathBuf::from(trimmed))
        }
    }
}

impl std::fmt::Display for ExerciseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExerciseSource::Url(url) => write!(f, "{}", url),
            ExerciseSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// 判断地址是否是练习文档：路径包含 `/pages/` 且以 `.xml` 结尾
///
/// 查询串和片段不参与 `.xml` 后缀判断
pub fn is_exercise_url(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    path.contains("/pages/") && path.ends_with(".xml")
}

/// 文档获取器
///
/// 职责：
/// - 持有 HTTP 客户端
/// - 从远程地址或本地文件读取文档文本
/// - 不解析文档，不认识任何抽取策略
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    /// 读取文档文本
    pub async fn fetch(&self, source: &ExerciseSource) -> AppResult<String> {
        match source {
            ExerciseSource::Url(url) => self.fetch_url(url).await,
            ExerciseSource::File(path) => {
                debug!("读取本地文件: {}", path.display());
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))
            }
        }
    }

    async fn fetch_url(&self, url: &str) -> AppResult<String> {
        info!("⬇️ 正在下载练习文档: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Fetch(FetchError::BadStatus {
                url: url.to_string(),
                status: status.as_u16(),
            }));
        }

        let text = response.text().await?;
        debug!("下载完成: {} 字节", text.len());
        Ok(text)
    }
}
