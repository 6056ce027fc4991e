use std::ops::RangeInclusive;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::Algorithm;

/// 配置文件结构 (~/.config/sortviz/config.toml)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 柱子数量
    pub bar_count: usize,
    pub min_value: u32,
    pub max_value: u32,
    /// 占满整个图表高度的数值（原始画布 1280×720 的高度）
    pub canvas_height: u32,
    /// 每次修改后的暂停（微秒），`[delays]` 中写出的算法不受影响
    pub step_delay_us: u64,
    /// 按算法覆盖暂停时长
    ///
    /// 选择排序默认自带 5000 µs 的覆盖值，修改 `step_delay_us` 不会改变它；
    /// 需要同步调整时写 `[delays] selection = ...`。
    pub delays: DelayOverrides,
    /// 保留的运行记录条数
    pub history_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bar_count: 128,
            min_value: 50,
            max_value: 669,
            canvas_height: 720,
            step_delay_us: 1000,
            delays: DelayOverrides::default(),
            history_limit: 200,
        }
    }
}

/// `[delays]` 表，单位微秒
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DelayOverrides {
    pub bubble: Option<u64>,
    pub selection: Option<u64>,
    pub insertion: Option<u64>,
    pub merge: Option<u64>,
    pub quick: Option<u64>,
    pub heap: Option<u64>,
}

impl Default for DelayOverrides {
    fn default() -> Self {
        Self {
            bubble: None,
            selection: Some(5000),
            insertion: None,
            merge: None,
            quick: None,
            heap: None,
        }
    }
}

impl DelayOverrides {
    pub fn get(&self, algorithm: Algorithm) -> Option<u64> {
        match algorithm {
            Algorithm::Bubble => self.bubble,
            Algorithm::Selection => self.selection,
            Algorithm::Insertion => self.insertion,
            Algorithm::Merge => self.merge,
            Algorithm::Quick => self.quick,
            Algorithm::Heap => self.heap,
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.canvas_height == 0 {
            return Err(AppError::Config("canvas_height 必须大于 0".to_string()));
        }
        if self.min_value == 0 {
            return Err(AppError::Config("min_value 必须为正数".to_string()));
        }
        if self.min_value > self.max_value {
            return Err(AppError::Config(format!(
                "min_value ({}) 大于 max_value ({})",
                self.min_value, self.max_value
            )));
        }
        if self.max_value > self.canvas_height {
            return Err(AppError::Config(format!(
                "max_value ({}) 超出 canvas_height ({})",
                self.max_value, self.canvas_height
            )));
        }
        Ok(())
    }

    pub fn value_range(&self) -> RangeInclusive<u32> {
        self.min_value..=self.max_value
    }

    /// 某个算法每步的暂停时长
    pub fn delay_for(&self, algorithm: Algorithm) -> Duration {
        let micros = self.delays.get(algorithm).unwrap_or(self.step_delay_us);
        Duration::from_micros(micros)
    }
}
