//! 通用 UI 组件
//!
//! 柱状图等通用组件

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::models::Highlight;

pub const BACKGROUND: Color = Color::Black;
pub const BAR_COLOR: Color = Color::White;
pub const HIGHLIGHT_COLOR: Color = Color::Red;

/// 八分之一高度的方块字符，下标为八分之几
const PARTIAL_BLOCKS: [&str; 8] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇"];
const FULL_BLOCK: &str = "█";

/// [组件] 柱状图：每个元素一根柱子，高度按 `scale` 映射到区域高度
pub struct Bars<'a> {
    data: &'a [u32],
    highlight: Highlight,
    scale: u32,
}

impl<'a> Bars<'a> {
    pub fn new(data: &'a [u32], highlight: Highlight, scale: u32) -> Self {
        Self {
            data,
            highlight,
            scale: scale.max(1),
        }
    }

    /// 第 `col` 列覆盖的元素下标区间 [start, end)
    ///
    /// 列数多于元素时每个元素平分若干列；少于元素时一列覆盖多个元素。
    pub fn column_range(col: usize, width: usize, len: usize) -> (usize, usize) {
        let start = col * len / width;
        let end = ((col + 1) * len / width).max(start + 1);
        (start, end.min(len))
    }

    /// 柱高，以八分之一格为单位
    fn eighths(&self, value: u32, height: u16) -> u64 {
        let max = u64::from(height) * 8;
        (u64::from(value) * max / u64::from(self.scale)).min(max)
    }
}

impl Widget for Bars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(BACKGROUND));
        if self.data.is_empty() || area.width == 0 || area.height == 0 {
            return;
        }

        let width = usize::from(area.width);
        let bottom = area.bottom() - 1;
        for col in 0..width {
            let (start, end) = Self::column_range(col, width, self.data.len());
            let Some(value) = self.data[start..end].iter().copied().max() else {
                continue;
            };
            let color = if self.highlight.intersects(start, end) {
                HIGHLIGHT_COLOR
            } else {
                BAR_COLOR
            };

            let eighths = self.eighths(value, area.height);
            let full = (eighths / 8) as u16;
            let partial = (eighths % 8) as usize;
            let x = area.x + col as u16;

            for row in 0..full {
                buf[(x, bottom - row)].set_symbol(FULL_BLOCK).set_fg(color);
            }
            if partial > 0 {
                buf[(x, bottom - full)]
                    .set_symbol(PARTIAL_BLOCKS[partial])
                    .set_fg(color);
            }
        }
    }
}
