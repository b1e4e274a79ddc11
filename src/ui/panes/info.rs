//! Algorithm summary pane: descriptor metadata and live metrics

use super::border_style;
use crate::algorithms::AlgorithmDescriptor;
use crate::metrics::Metrics;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_info_pane(
    frame: &mut Frame,
    area: Rect,
    descriptor: Option<&AlgorithmDescriptor>,
    metrics: &Metrics,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Algorithm ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default().fg(DEFAULT_THEME.number);

    let mut lines = Vec::new();
    if let Some(d) = descriptor {
        lines.push(Line::from(vec![
            Span::styled(
                d.name,
                Style::default()
                    .fg(DEFAULT_THEME.function)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  ({})", d.key), label),
        ]));
        lines.push(Line::from(Span::styled(
            d.description,
            Style::default().fg(DEFAULT_THEME.fg),
        )));
        lines.push(Line::from(vec![
            Span::styled("time ", label),
            Span::styled(d.time_complexity, value),
            Span::styled("  space ", label),
            Span::styled(d.space_complexity, value),
            Span::styled("  best ", label),
            Span::styled(d.best_case, value),
            Span::styled("  worst ", label),
            Span::styled(d.worst_case, value),
        ]));
    } else {
        lines.push(Line::from(Span::styled(
            "Unknown algorithm",
            Style::default().fg(DEFAULT_THEME.error),
        )));
    }

    lines.push(Line::from(vec![
        Span::styled("comparisons ", label),
        Span::styled(metrics.comparisons.to_string(), value),
        Span::styled("  swaps ", label),
        Span::styled(metrics.swaps.to_string(), value),
        Span::styled("  steps ", label),
        Span::styled(metrics.steps.to_string(), value),
    ]));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
