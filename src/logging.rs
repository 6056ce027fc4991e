use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "sortviz=info";

/// 初始化日志，写入 `path`（标准输出归终端界面使用）
///
/// 过滤规则取自 `RUST_LOG`，未设置时为 `sortviz=info`。
pub fn init(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
    {
        eprintln!("日志初始化失败: {}", e);
    }
    Ok(())
}
