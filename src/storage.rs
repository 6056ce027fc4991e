use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{History, HistoryData};

const APP_DIR: &str = "sortviz";

/// 获取数据目录路径 (~/.local/share/sortviz/)
pub fn data_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .ok_or(AppError::MissingDir("数据"))?
        .join(APP_DIR);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// 配置文件路径 (~/.config/sortviz/config.toml)，不会创建目录
pub fn config_path() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .ok_or(AppError::MissingDir("配置"))?
        .join(APP_DIR)
        .join("config.toml"))
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("配置文件 {} 不存在，使用默认配置", path.display());
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    Config::from_toml(&content)
}

/// 从TOML文件加载运行记录
pub fn load_history(path: &Path, limit: usize) -> Result<History> {
    if !path.exists() {
        return Ok(History::new(limit));
    }

    let content = fs::read_to_string(path)?;
    let data: HistoryData = toml::from_str(&content)?;

    Ok(History::from_data(data, limit))
}

/// 加载运行记录；文件无法解析时改名为 `*.bak` 保留，再从空记录开始
pub fn load_history_or_backup(path: &Path, limit: usize) -> Result<History> {
    match load_history(path, limit) {
        Err(AppError::Decode(e)) => {
            let backup = backup_path(path);
            fs::rename(path, &backup)?;
            warn!(
                "运行记录 {} 无法解析，已备份到 {}: {}",
                path.display(),
                backup.display(),
                e
            );
            Ok(History::new(limit))
        }
        other => other,
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

/// 保存运行记录到TOML文件，未修改时跳过
pub fn save_history(history: &mut History, path: &Path) -> Result<bool> {
    if !history.dirty {
        return Ok(false);
    }

    let content = toml::to_string_pretty(&history.to_data())?;
    fs::write(path, content)?;

    history.dirty = false;
    info!("已保存 {} 条运行记录到 {}", history.runs.len(), path.display());
    Ok(true)
}
