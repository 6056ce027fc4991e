mod config;
mod error;
mod logging;
mod models;
mod sequence;
mod sort;
mod storage;
mod tui;
mod ui;

use std::io;
use std::process::ExitCode;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info, warn};

use crate::error::Result;
use crate::sort::Paced;
use crate::storage::{config_path, data_dir, load_config, load_history_or_backup, save_history};
use crate::tui::{FramePainter, TerminalSession};
use crate::ui::{App, handle_key_event, render};

/// 空闲时轮询按键的间隔
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // 数据目录 (~/.local/share/sortviz/)
    let data_dir = data_dir()?;
    if let Err(e) = logging::init(&data_dir.join("sortviz.log")) {
        eprintln!("无法打开日志文件: {}", e);
    }

    let config = load_config(&config_path()?)?;
    let history_path = data_dir.join("history.toml");
    let history = load_history_or_backup(&history_path, config.history_limit)?;

    let seed = sequence::wall_clock_seed();
    let bars = sequence::generate(config.bar_count, config.value_range(), seed);
    info!(
        "生成 {} 个柱子，取值 {:?}，种子 {}",
        bars.len(),
        config.value_range(),
        seed
    );

    let mut app = App::new(bars, config, history);

    // 设置终端
    let mut session = TerminalSession::enter()
        .map_err(|e| io::Error::new(e.kind(), format!("终端初始化失败: {}", e)))?;

    // 主循环
    let result = run_app(&mut session, &mut app);

    // 恢复终端
    drop(session);

    // 保存运行记录
    if let Err(e) = save_history(&mut app.history, &history_path) {
        warn!("保存运行记录失败: {}", e);
    }

    result.map_err(Into::into)
}

fn run_app(session: &mut TerminalSession, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        session.terminal.draw(|f| render(f, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            // 排序同步执行，期间不处理新的按键
            if let Some(algorithm) = handle_key_event(app, key) {
                let painter = FramePainter::new(
                    &mut session.terminal,
                    app.config.canvas_height,
                    app.running_text(algorithm),
                );
                let mut paced = Paced::new(painter, app.config.delay_for(algorithm));
                app.run_sort(algorithm, &mut paced)?;
            }
        }
    }
    Ok(())
}
