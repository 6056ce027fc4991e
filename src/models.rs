use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 排序算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    /// 触发该算法的按键（区分大小写）
    pub fn key(self) -> char {
        match self {
            Algorithm::Bubble => 'b',
            Algorithm::Selection => 's',
            Algorithm::Insertion => 'i',
            Algorithm::Merge => 'm',
            Algorithm::Quick => 'q',
            Algorithm::Heap => 'h',
        }
    }

    pub fn from_key(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.key() == c)
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "冒泡排序",
            Algorithm::Selection => "选择排序",
            Algorithm::Insertion => "插入排序",
            Algorithm::Merge => "归并排序",
            Algorithm::Quick => "快速排序",
            Algorithm::Heap => "堆排序",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 当前帧高亮的下标（最多两个）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Highlight {
    pub first: Option<usize>,
    pub second: Option<usize>,
}

impl Highlight {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn one(index: usize) -> Self {
        Self {
            first: Some(index),
            second: None,
        }
    }

    pub fn pair(a: usize, b: usize) -> Self {
        Self {
            first: Some(a),
            second: Some(b),
        }
    }

    #[allow(dead_code)]
    pub fn contains(&self, index: usize) -> bool {
        self.first == Some(index) || self.second == Some(index)
    }

    /// 区间 [start, end) 中是否有被高亮的下标
    pub fn intersects(&self, start: usize, end: usize) -> bool {
        [self.first, self.second]
            .into_iter()
            .flatten()
            .any(|i| i >= start && i < end)
    }
}

/// 单次运行的统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunStats {
    pub swaps: u64,
    pub writes: u64,
    pub events: u64,
}

/// 一次完成的排序记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub id: String,
    pub algorithm: Algorithm,
    pub length: usize,
    #[serde(default)]
    pub stats: RunStats,
    #[serde(default)]
    pub elapsed_ms: u64,
    pub started_at: DateTime<Local>,
}

impl RunRecord {
    pub fn new(
        algorithm: Algorithm,
        length: usize,
        stats: RunStats,
        elapsed_ms: u64,
        started_at: DateTime<Local>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            algorithm,
            length,
            stats,
            elapsed_ms,
            started_at,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} 完成：{} 个元素，交换 {} 次，写入 {} 次，用时 {} ms",
            self.algorithm, self.length, self.stats.swaps, self.stats.writes, self.elapsed_ms
        )
    }
}

/// TOML文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryData {
    pub meta: HistoryMeta,
    #[serde(default)]
    pub runs: Vec<RunRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryMeta {
    pub version: String,
    pub created_at: DateTime<Local>,
    pub last_modified: DateTime<Local>,
}

impl Default for HistoryData {
    fn default() -> Self {
        let now = Local::now();
        Self {
            meta: HistoryMeta {
                version: "1.0".to_string(),
                created_at: now,
                last_modified: now,
            },
            runs: Vec::new(),
        }
    }
}

/// 运行时的历史记录
#[derive(Debug, Clone)]
pub struct History {
    pub runs: Vec<RunRecord>,
    pub created_at: DateTime<Local>,
    pub limit: usize,
    pub dirty: bool,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            runs: Vec::new(),
            created_at: Local::now(),
            limit,
            dirty: false,
        }
    }

    pub fn from_data(data: HistoryData, limit: usize) -> Self {
        let mut history = Self {
            runs: data.runs,
            created_at: data.meta.created_at,
            limit,
            dirty: false,
        };
        history.truncate();
        history
    }

    pub fn to_data(&self) -> HistoryData {
        HistoryData {
            meta: HistoryMeta {
                version: "1.0".to_string(),
                created_at: self.created_at,
                last_modified: Local::now(),
            },
            runs: self.runs.clone(),
        }
    }

    /// 追加记录，超出上限时丢弃最旧的
    pub fn push(&mut self, record: RunRecord) {
        self.runs.push(record);
        self.truncate();
        self.dirty = true;
    }

    pub fn last(&self) -> Option<&RunRecord> {
        self.runs.last()
    }

    fn truncate(&mut self) {
        if self.runs.len() > self.limit {
            let excess = self.runs.len() - self.limit;
            self.runs.drain(..excess);
        }
    }
}
