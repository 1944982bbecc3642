use std::fmt;

/// 文档解析错误
///
/// 抽取核心唯一会向外传播的错误：输入不是格式良好的 XML
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// 输入不是合法的 UTF-8
    #[error("文档不是合法的 UTF-8: {0}")]
    InvalidUtf8(String),
    /// XML 词法/语法错误
    #[error("XML 语法错误 (位置 {position}): {message}")]
    Syntax { position: u64, message: String },
    /// 结束标签与开始标签不匹配
    #[error("结束标签 </{found}> 与开始标签 <{expected}> 不匹配")]
    MismatchedTag { expected: String, found: String },
    /// 文档结束时仍有未闭合的元素
    #[error("元素 <{0}> 未闭合")]
    UnclosedElement(String),
    /// 没有根元素
    #[error("文档没有根元素")]
    MissingRoot,
    /// 存在多个根元素
    #[error("文档存在多个根元素: <{0}>")]
    MultipleRoots(String),
    /// 根元素之外出现文本
    #[error("根元素之外出现文本内容")]
    TextOutsideRoot,
    /// 无法识别的实体引用
    #[error("无法识别的实体引用: &{0};")]
    UnknownEntity(String),
    /// 元素嵌套超过上限
    #[error("元素嵌套过深 (超过 {0} 层)")]
    TooDeep(usize),
}

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 文档解析错误
    Document(ParseError),
    /// 获取文档错误
    Fetch(FetchError),
    /// 持久化存储错误
    Storage(StorageError),
    /// 业务逻辑错误
    Business(BusinessError),
    /// 配置错误
    Config(ConfigError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Document(e) => write!(f, "文档错误: {}", e),
            AppError::Fetch(e) => write!(f, "获取错误: {}", e),
            AppError::Storage(e) => write!(f, "存储错误: {}", e),
            AppError::Business(e) => write!(f, "业务错误: {}", e),
            AppError::Config(e) => write!(f, "配置错误: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Document(e) => Some(e),
            AppError::Fetch(e) => Some(e),
            AppError::Storage(e) => Some(e),
            AppError::Business(e) => Some(e),
            AppError::Config(e) => Some(e),
        }
    }
}

/// 获取文档错误
#[derive(Debug)]
pub enum FetchError {
    /// 网络请求失败
    RequestFailed {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 服务器返回非成功状态码
    BadStatus { url: String, status: u16 },
    /// 读取本地文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::RequestFailed { url, source } => {
                write!(f, "请求失败 ({}): {}", url, source)
            }
            FetchError::BadStatus { url, status } => {
                write!(f, "HTTP 错误 ({}): status {}", url, status)
            }
            FetchError::ReadFailed { path, source } => {
                write!(f, "读取文件失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::RequestFailed { source, .. } | FetchError::ReadFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            FetchError::BadStatus { .. } => None,
        }
    }
}

/// 持久化存储错误
#[derive(Debug)]
pub enum StorageError {
    /// 读取存储文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入存储文件失败
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// JSON 编解码失败
    JsonFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ReadFailed { path, source } => {
                write!(f, "读取存储失败 ({}): {}", path, source)
            }
            StorageError::WriteFailed { path, source } => {
                write!(f, "写入存储失败 ({}): {}", path, source)
            }
            StorageError::JsonFailed { source } => write!(f, "JSON 编解码失败: {}", source),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::ReadFailed { source, .. }
            | StorageError::WriteFailed { source, .. }
            | StorageError::JsonFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// 业务逻辑错误
#[derive(Debug)]
pub enum BusinessError {
    /// 既没有传入来源，也没有保存过上一次的练习地址
    NoExerciseSource,
}

impl fmt::Display for BusinessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusinessError::NoExerciseSource => {
                write!(f, "没有找到练习地址，请重新打开练习页面后再试")
            }
        }
    }
}

impl std::error::Error for BusinessError {}

/// 配置错误
#[derive(Debug)]
pub enum ConfigError {
    /// 环境变量解析失败
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 配置文件解析失败
    TomlParseFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EnvVarParseFailed {
                var_name,
                value,
                expected_type,
            } => {
                write!(
                    f,
                    "环境变量 {} 解析失败: 值 '{}' 无法转换为 {}",
                    var_name, value, expected_type
                )
            }
            ConfigError::TomlParseFailed { path, source } => {
                write!(f, "TOML解析失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::TomlParseFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            ConfigError::EnvVarParseFailed { .. } => None,
        }
    }
}

// ========== 从常见错误类型转换 ==========

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        AppError::Document(err)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let url = err.url().map(|u| u.to_string()).unwrap_or_default();
        AppError::Fetch(FetchError::RequestFailed {
            url,
            source: Box::new(err),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(StorageError::JsonFailed {
            source: Box::new(err),
        })
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(ConfigError::TomlParseFailed {
            path: String::new(), // TOML错误通常不包含路径信息
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Fetch(FetchError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建存储读取错误
    pub fn storage_read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Storage(StorageError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建存储写入错误
    pub fn storage_write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Storage(StorageError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建配置文件解析错误
    pub fn config_parse_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Config(ConfigError::TomlParseFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
