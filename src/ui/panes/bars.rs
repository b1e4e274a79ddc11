//! Array pane: one bar per element, coloured by the step's resolved roles

use super::border_style;
use crate::snapshot::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Render the array of `step` as a bar chart
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    step: Option<&Step>,
    is_focused: bool,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let Some(step) = step.filter(|s| !s.array.is_empty()) else {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let heights = bar_heights(&step.array);
    let bars: Vec<Bar> = step
        .array
        .iter()
        .zip(heights)
        .enumerate()
        .map(|(idx, (value, height))| {
            let color = DEFAULT_THEME.role_color(step.role_of(idx));
            Bar::default()
                .value(height)
                .text_value(value.to_string())
                .label(Line::from(idx.to_string()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let inner_width = area.width.saturating_sub(2) as usize;
    let gap = 1;
    let bar_width = (inner_width / bars.len()).saturating_sub(gap).max(1) as u16;

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(gap as u16)
        .label_style(Style::default().fg(DEFAULT_THEME.comment));

    frame.render_widget(chart, area);
}

/// Map values to positive bar heights, lifting the smallest value to 1 so
/// zero and negative elements stay visible
pub(crate) fn bar_heights(values: &[i64]) -> Vec<u64> {
    let Some(&min) = values.iter().min() else {
        return Vec::new();
    };
    let base = i128::from(min.min(0));
    values
        .iter()
        .map(|&v| {
            let h = i128::from(v) - base + 1;
            u64::try_from(h).unwrap_or(u64::MAX)
        })
        .collect()
}
