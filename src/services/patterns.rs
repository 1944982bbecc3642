//! 预编译的正则表达式
//!
//! 使用 LazyLock 在首次使用时编译一次。`regex` 基于有限自动机，
//! 匹配时间与输入长度成线性关系，外部传入的文档不会触发回溯爆炸。

use regex::Regex;
use std::sync::LazyLock;

/// 任意标签后紧跟 "Answer Key"（不区分大小写）
pub static ANSWER_KEY_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<[^>]+>Answer Key").expect("ANSWER_KEY_LABEL_RE 编译失败")
});

/// 切换按钮的显示脚本：`<identifier>.show()`，不允许任何多余字符
pub static SHOW_SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9_]+)\.show\(\)$").expect("SHOW_SCRIPT_RE 编译失败")
});

/// 填空标记 `\gap{payload}`
pub static GAP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\gap\{([^}]+)\}").expect("GAP_RE 编译失败"));

/// 题干中需要去除的行内标签
pub static INLINE_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?(div|b|i|br)>").expect("INLINE_TAG_RE 编译失败"));

/// 文本中是否带有 "Answer Key" 标注
pub fn has_answer_key_label(text: &str) -> bool {
    ANSWER_KEY_LABEL_RE.is_match(text)
}

/// 解析显示脚本，返回被显示的模块 ID
pub fn show_target(script: &str) -> Option<&str> {
    SHOW_SCRIPT_RE
        .captures(script)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// 文本中所有填空的主答案（`|` 之前的部分），按出现顺序
pub fn gap_answers(text: &str) -> Vec<&str> {
    GAP_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().split('|').next().unwrap_or_default())
        .collect()
}

/// 去除 `div` / `b` / `i` / `br` 开闭标签并 trim
pub fn strip_inline_tags(text: &str) -> String {
    INLINE_TAG_RE.replace_all(text, "").trim().to_string()
}
