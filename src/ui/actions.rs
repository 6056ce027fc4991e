//! Action 枚举定义 (Intent)
//!
//! 用户按键转化为明确的语义化 Action

use crate::models::Algorithm;

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Sort(Algorithm),
}
