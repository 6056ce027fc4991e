//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和排序的执行

use std::time::Instant;

use chrono::Local;
use tracing::{info, warn};

use super::actions::Action;
use super::state::{App, AppMode};
use crate::models::{Algorithm, RunRecord};
use crate::sort::{self, Counting, SortObserver};

impl App {
    /// 核心逻辑分发，返回需要执行的排序
    pub fn dispatch(&mut self, action: Action) -> Option<Algorithm> {
        match action {
            Action::Quit => {
                self.should_quit = true;
                None
            }
            Action::Sort(algorithm) => Some(algorithm),
        }
    }

    /// 同步执行一次排序，每次修改都通知 `observer`
    ///
    /// 观察者出错时排序中止，序列保留已完成的部分，错误原样返回。
    pub fn run_sort<O: SortObserver>(
        &mut self,
        algorithm: Algorithm,
        observer: &mut O,
    ) -> Result<RunRecord, O::Error> {
        let mut bars = std::mem::take(&mut self.bars);
        let length = bars.len();
        info!("开始{}，{} 个元素", algorithm, length);

        self.mode = AppMode::Sorting(algorithm);
        self.message = None;
        let started_at = Local::now();
        let timer = Instant::now();

        let mut counting = Counting::new(observer);
        let result = sort::run(algorithm, &mut bars, &mut counting);

        self.bars = bars;
        self.mode = AppMode::Idle;

        if result.is_err() {
            warn!("{}被中止，已执行 {} 次修改", algorithm, counting.stats().events);
        }
        result?;

        let elapsed_ms = u64::try_from(timer.elapsed().as_millis()).unwrap_or(u64::MAX);
        let record = RunRecord::new(algorithm, length, counting.stats(), elapsed_ms, started_at);
        info!(
            "{}完成：交换 {} 次，写入 {} 次，用时 {} ms",
            algorithm, record.stats.swaps, record.stats.writes, record.elapsed_ms
        );
        self.history.push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::History;
    use crate::sort::testing::{FailAfter, Recorder};
    use crate::sort::Mutation;

    fn app(bars: Vec<u32>) -> App {
        App::new(bars, Config::default(), History::new(10))
    }

    #[test]
    fn test_dispatch() {
        let mut app = app(vec![3, 2, 1]);
        assert_eq!(
            app.dispatch(Action::Sort(Algorithm::Merge)),
            Some(Algorithm::Merge)
        );
        assert!(!app.should_quit);

        assert_eq!(app.dispatch(Action::Quit), None);
        assert!(app.should_quit);
    }

    #[test]
    fn test_run_sort_records_history() {
        let mut app = app(vec![5, 3, 8, 1]);
        let mut recorder = Recorder::default();
        let record = app.run_sort(Algorithm::Bubble, &mut recorder).unwrap();

        assert_eq!(app.bars, vec![1, 3, 5, 8]);
        assert_eq!(app.mode, AppMode::Idle);
        assert_eq!(record.length, 4);
        assert_eq!(record.stats.swaps, 4);
        assert_eq!(record.stats.events, 4);
        assert!(recorder.events.iter().all(|e| matches!(e, Mutation::Swap(..))));
        assert_eq!(app.history.runs.len(), 1);
        assert!(app.history.dirty);
        assert_eq!(app.status_text(), record.summary());
    }

    #[test]
    fn test_run_sort_on_sorted_bars() {
        let mut app = app(vec![1, 2, 3]);
        let record = app
            .run_sort(Algorithm::Selection, &mut Recorder::default())
            .unwrap();
        assert_eq!(app.bars, vec![1, 2, 3]);
        // 选择排序的空操作交换也会计数
        assert_eq!(record.stats.swaps, 2);
    }

    #[test]
    fn test_failed_observer_keeps_bars() {
        let mut app = app(vec![4, 3, 2, 1]);
        let mut failing = FailAfter { limit: 1, seen: 0 };
        let result = app.run_sort(Algorithm::Heap, &mut failing);

        assert!(result.is_err());
        assert_eq!(app.bars.len(), 4);
        assert_eq!(app.mode, AppMode::Idle);
        assert!(app.history.runs.is_empty());
        assert!(app.message.is_none());
    }
}
