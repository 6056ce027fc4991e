//! 排序引擎
//!
//! 算法本身不关心渲染：每次交换或写入之后只通知一次观察者 ([`SortObserver`])，
//! 绘制和延时都由观察者完成，可以自由叠加：
//! - [`Paced`]: 每次通知后暂停固定时长
//! - [`Counting`]: 统计交换/写入次数

pub mod algorithms;

use std::thread;
use std::time::Duration;

use crate::models::{Algorithm, Highlight, RunStats};

/// 对序列的一次修改
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// 交换两个位置（可能是同一位置）
    Swap(usize, usize),
    /// 插入排序中把 `from` 的值右移到 `to`
    Shift { from: usize, to: usize },
    /// 向某个位置写入一个值
    Write(usize),
}

impl Mutation {
    pub fn highlight(self) -> Highlight {
        match self {
            Mutation::Swap(a, b) => Highlight::pair(a, b),
            Mutation::Shift { from, to } => Highlight::pair(from, to),
            Mutation::Write(k) => Highlight::one(k),
        }
    }
}

/// 修改事件的观察者
pub trait SortObserver {
    type Error;

    /// `data` 是修改之后的完整序列
    fn observe(&mut self, data: &[u32], mutation: Mutation) -> Result<(), Self::Error>;
}

impl<O: SortObserver + ?Sized> SortObserver for &mut O {
    type Error = O::Error;

    fn observe(&mut self, data: &[u32], mutation: Mutation) -> Result<(), Self::Error> {
        (**self).observe(data, mutation)
    }
}

/// 在内层观察者之后暂停 `delay`
pub struct Paced<O> {
    inner: O,
    delay: Duration,
}

impl<O> Paced<O> {
    pub fn new(inner: O, delay: Duration) -> Self {
        Self { inner, delay }
    }

    #[allow(dead_code)]
    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: SortObserver> SortObserver for Paced<O> {
    type Error = O::Error;

    fn observe(&mut self, data: &[u32], mutation: Mutation) -> Result<(), Self::Error> {
        self.inner.observe(data, mutation)?;
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(())
    }
}

/// 统计修改次数后转发给内层观察者
pub struct Counting<O> {
    inner: O,
    stats: RunStats,
}

impl<O> Counting<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            stats: RunStats::default(),
        }
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }
}

impl<O: SortObserver> SortObserver for Counting<O> {
    type Error = O::Error;

    fn observe(&mut self, data: &[u32], mutation: Mutation) -> Result<(), Self::Error> {
        self.stats.events += 1;
        match mutation {
            Mutation::Swap(..) => self.stats.swaps += 1,
            Mutation::Shift { .. } | Mutation::Write(_) => self.stats.writes += 1,
        }
        self.inner.observe(data, mutation)
    }
}

/// 用指定算法原地排序
pub fn run<O: SortObserver>(
    algorithm: Algorithm,
    data: &mut [u32],
    observer: &mut O,
) -> Result<(), O::Error> {
    match algorithm {
        Algorithm::Bubble => algorithms::bubble_sort(data, observer),
        Algorithm::Selection => algorithms::selection_sort(data, observer),
        Algorithm::Insertion => algorithms::insertion_sort(data, observer),
        Algorithm::Merge => algorithms::merge_sort(data, observer),
        Algorithm::Quick => algorithms::quick_sort(data, observer),
        Algorithm::Heap => algorithms::heap_sort(data, observer),
    }
}
