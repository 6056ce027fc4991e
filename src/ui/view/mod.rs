//! 视图层模块
//!
//! 包含主渲染入口和柱状图组件

pub mod components;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::state::App;
use crate::models::{Algorithm, Highlight};
use components::{BACKGROUND, Bars};

/// 渲染空闲时的界面
pub fn render(frame: &mut Frame, app: &App) {
    render_screen(
        frame,
        &app.bars,
        Highlight::none(),
        app.config.canvas_height,
        &app.status_text(),
    );
}

/// 渲染一帧：标题、柱状图、状态栏
pub fn render_screen(
    frame: &mut Frame,
    bars: &[u32],
    highlight: Highlight,
    canvas_height: u32,
    status: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(3),    // 柱状图
            Constraint::Length(3), // 状态
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_bars(frame, bars, highlight, canvas_height, chunks[1]);
    render_status(frame, status, chunks[2]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::styled(
        "排序可视化  ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    for algorithm in Algorithm::ALL {
        spans.push(Span::styled(
            format!("[{}]", algorithm.key()),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(format!(" {}  ", algorithm.name())));
    }
    spans.push(Span::styled("[Esc]", Style::default().fg(Color::Yellow)));
    spans.push(Span::raw(" 退出"));

    let title = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_bars(
    frame: &mut Frame,
    bars: &[u32],
    highlight: Highlight,
    canvas_height: u32,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(BACKGROUND));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Bars::new(bars, highlight, canvas_height), inner);
}

fn render_status(frame: &mut Frame, status: &str, area: Rect) {
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::History;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_render_idle_screen() {
        let app = App::new(vec![720, 360], Config::default(), History::new(10));
        let mut terminal = Terminal::new(TestBackend::new(120, 12)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();

        let buf = terminal.backend().buffer();
        assert!(row(buf, 1).contains("[b]"));
        assert!(row(buf, 1).contains("[Esc]"));

        // 柱状图区域为 y=3..9，内部 y=4..8 共 4 行；第一根柱子占满，第二根一半
        let bars_top = row(buf, 4);
        let bars_bottom = row(buf, 7);
        assert_eq!(bars_top.matches('█').count(), 59);
        assert_eq!(bars_bottom.matches('█').count(), 118);
    }

    #[test]
    fn test_render_highlight_frame() {
        let mut terminal = Terminal::new(TestBackend::new(10, 9)).unwrap();
        terminal
            .draw(|f| render_screen(f, &[10, 10], Highlight::one(0), 10, "running"))
            .unwrap();

        let buf = terminal.backend().buffer();
        // 内部宽度 8，前 4 列属于第 0 根柱子
        assert_eq!(buf[(1, 4)].fg, components::HIGHLIGHT_COLOR);
        assert_eq!(buf[(8, 4)].fg, components::BAR_COLOR);
        assert!(row(buf, 7).contains("running"));
    }
}
