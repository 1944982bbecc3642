use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, AppResult, ConfigError};

/// 报告中使用的固定文案
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportLabels {
    /// 启发式报告的总标题
    pub heading: String,
    /// 填空题小节标题
    pub gap_fill_heading: String,
    /// 选择题小节标题（后接模块 ID）
    pub choice_heading: String,
    /// 每一项前的题号前缀
    pub question_label: String,
    /// 答案无法确定时的占位文本
    pub unknown_marker: String,
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self {
            heading: r#"No "Answer Key" found, these answers were extracted automatically:"#
                .to_string(),
            gap_fill_heading: "Gap-fill:".to_string(),
            choice_heading: "Multiple Choice".to_string(),
            question_label: "Question".to_string(),
            unknown_marker: "unknown".to_string(),
        }
    }
}

/// 程序配置
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 报告文案
    pub labels: ReportLabels,
    /// 选择题题干预览长度（字符数）
    pub question_preview_len: usize,
    /// 保存上一次结果的 JSON 文件
    pub store_path: String,
    /// 下载练习文档的超时时间（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            labels: ReportLabels::default(),
            question_preview_len: 20,
            store_path: "answer_key_store.json".to_string(),
            request_timeout_secs: 30,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 加载配置：`ANSWER_KEY_CONFIG` 指定的 TOML 文件（可选），再由环境变量覆盖
    pub fn load() -> AppResult<Self> {
        let base = match std::env::var("ANSWER_KEY_CONFIG") {
            Ok(path) => Self::from_toml_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        base.with_env_overrides()
    }

    /// 仅从环境变量加载
    pub fn from_env() -> AppResult<Self> {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载，缺失的字段使用默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::config_parse_failed(path.display().to_string(), e))?;
        Self::from_toml_str(&content)
            .map_err(|e| AppError::config_parse_failed(path.display().to_string(), e))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn with_env_overrides(self) -> AppResult<Self> {
        let mut config = self;
        if let Ok(v) = std::env::var("STORE_PATH") {
            config.store_path = v;
        }
        if let Ok(v) = std::env::var("UNKNOWN_MARKER") {
            config.labels.unknown_marker = v;
        }
        if let Some(v) = parse_env("REQUEST_TIMEOUT_SECS", "u64")? {
            config.request_timeout_secs = v;
        }
        if let Some(v) = parse_env("QUESTION_PREVIEW_LEN", "usize")? {
            config.question_preview_len = v;
        }
        if let Some(v) = parse_env("VERBOSE_LOGGING", "bool")? {
            config.verbose_logging = v;
        }
        Ok(config)
    }
}

fn parse_env<T: std::str::FromStr>(var_name: &str, expected_type: &str) -> AppResult<Option<T>> {
    match std::env::var(var_name) {
        Ok(value) => value.trim().parse().map(Some).map_err(|_| {
            AppError::Config(ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            })
        }),
        Err(_) => Ok(None),
    }
}
