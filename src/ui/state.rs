//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use crate::config::Config;
use crate::models::{Algorithm, History};

/// 应用状态
pub struct App {
    /// 柱高序列，排序期间长度不变
    pub bars: Vec<u32>,
    pub config: Config,
    pub history: History,
    pub mode: AppMode,
    pub message: Option<String>,
    /// 每轮主循环检查一次
    pub should_quit: bool,
}

/// 应用模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Idle,
    Sorting(Algorithm),
}

impl App {
    /// 创建新的应用实例
    pub fn new(bars: Vec<u32>, config: Config, history: History) -> Self {
        Self {
            bars,
            config,
            history,
            mode: AppMode::Idle,
            message: None,
            should_quit: false,
        }
    }

    /// 底部状态栏文字
    pub fn status_text(&self) -> String {
        match self.mode {
            AppMode::Sorting(algorithm) => self.running_text(algorithm),
            AppMode::Idle => {
                if let Some(message) = &self.message {
                    message.clone()
                } else if let Some(last) = self.history.last() {
                    last.summary()
                } else {
                    format!("{} 个元素，按键选择排序算法", self.bars.len())
                }
            }
        }
    }

    /// 排序进行中的状态栏文字
    pub fn running_text(&self, algorithm: Algorithm) -> String {
        format!(
            "{} 进行中：{} 个元素，每步暂停 {} µs",
            algorithm,
            self.bars.len(),
            self.config.delay_for(algorithm).as_micros()
        )
    }
}
