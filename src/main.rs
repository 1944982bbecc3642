use anyhow::{Context, Result};
use answer_key_extractor::utils::logging;
use answer_key_extractor::{App, Command, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load().context("加载配置失败")?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 第一个参数：URL 或文件路径，`--saved` 只显示上一次的结果，缺省时使用上一次的练习地址
    let command = Command::from_args(std::env::args().skip(1));

    let app = App::initialize(&config).context("初始化失败")?;

    match command {
        Command::ShowSaved => {
            let saved = app.saved_report().await.context("读取保存的答案失败")?;
            if let Some(saved) = saved {
                println!("{}", saved.html);
            }
        }
        Command::Extract(source) => {
            let report = app.run(source).await.context("抽取答案失败")?;

            logging::print_summary(&report, &config.store_path);
            if let Some(html) = report.html() {
                println!("{}", html);
            }
        }
    }

    Ok(())
}
