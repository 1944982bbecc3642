/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::models::AnswerReport;

/// 初始化日志
///
/// `RUST_LOG` 优先；未设置时默认 `info`，详细模式下为 `debug`
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // 重复初始化（例如测试中）时忽略错误
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 打印最终结果摘要
///
/// # 参数
/// - `report`: 抽取结果
/// - `store_path`: 结果存储文件路径
pub fn print_summary(report: &AnswerReport, store_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 抽取完成");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    match report {
        AnswerReport::Found { strategy, html } => {
            info!("✅ 策略: {}", strategy);
            info!("📝 预览: {}", truncate_text(html, 80));
            info!("结果已保存至: {}", store_path);
        }
        AnswerReport::NotFound => info!("❌ 没有找到答案"),
    }
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
