use thiserror::Error;

/// 应用错误
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML 解析失败: {0}")]
    Decode(#[from] toml::de::Error),
    #[error("TOML 序列化失败: {0}")]
    Encode(#[from] toml::ser::Error),
    #[error("配置无效: {0}")]
    Config(String),
    #[error("无法获取用户{0}目录")]
    MissingDir(&'static str),
}

pub type Result<T> = std::result::Result<T, AppError>;
