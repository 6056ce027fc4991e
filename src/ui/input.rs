//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::App;
use crate::models::Algorithm;

/// 获取按键对应的 Action，未绑定的按键返回 None
pub fn get_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            Algorithm::from_key(c).map(Action::Sort)
        }
        _ => None,
    }
}

/// 处理按键事件，返回需要执行的排序算法
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Option<Algorithm> {
    get_action(key).and_then(|action| app.dispatch(action))
}
