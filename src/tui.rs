//! 终端会话与逐帧绘制

use std::io::{self, Stdout};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tracing::warn;

use crate::sort::{Mutation, SortObserver};
use crate::ui::render_screen;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// 持有终端；离开作用域时恢复终端状态（包括出错和 panic 展开）
pub struct TerminalSession {
    pub terminal: Tui,
}

impl TerminalSession {
    /// 进入原始模式和备用屏幕
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            restore();
            return Err(e);
        }
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                restore();
                Err(e)
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore();
    }
}

fn restore() {
    if let Err(e) = disable_raw_mode() {
        warn!("恢复终端模式失败: {}", e);
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!("离开备用屏幕失败: {}", e);
    }
}

/// 每次修改后重绘整个屏幕的观察者
pub struct FramePainter<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    canvas_height: u32,
    status: String,
}

impl<'a, B: Backend> FramePainter<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>, canvas_height: u32, status: String) -> Self {
        Self {
            terminal,
            canvas_height,
            status,
        }
    }
}

impl<B: Backend> SortObserver for FramePainter<'_, B> {
    type Error = B::Error;

    fn observe(&mut self, data: &[u32], mutation: Mutation) -> Result<(), B::Error> {
        let highlight = mutation.highlight();
        let (canvas_height, status) = (self.canvas_height, self.status.as_str());
        self.terminal
            .draw(|frame| render_screen(frame, data, highlight, canvas_height, status))?;
        Ok(())
    }
}
