//! Narration pane: what the current step did, in prose and pseudo-code

use super::border_style;
use crate::snapshot::{SearchState, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_narration_pane(
    frame: &mut Frame,
    area: Rect,
    step: Option<&Step>,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Step ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let Some(step) = step else {
        frame.render_widget(Paragraph::new("(no steps)").block(block), area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            step.description.clone(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::from(vec![
            Span::styled("› ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                step.code.clone(),
                Style::default()
                    .fg(DEFAULT_THEME.keyword)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]),
    ];

    if let Some(search) = &step.search {
        lines.push(search_line(search));
    }

    if let Some(buckets) = &step.buckets {
        let counts: Vec<String> = buckets
            .iter()
            .enumerate()
            .map(|(digit, count)| format!("{}:{}", digit, count))
            .collect();
        lines.push(Line::from(vec![
            Span::styled("count ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(counts.join(" "), Style::default().fg(DEFAULT_THEME.number)),
        ]));
    }

    if let Some(staging) = &step.staging {
        let slots: Vec<String> = staging
            .iter()
            .map(|slot| slot.map_or_else(|| "_".to_string(), |v| v.to_string()))
            .collect();
        lines.push(Line::from(vec![
            Span::styled("output ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                format!("[{}]", slots.join(", ")),
                Style::default().fg(DEFAULT_THEME.type_name),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn search_line(search: &SearchState) -> Line<'static> {
    let show = |v: Option<usize>| v.map_or_else(|| "-".to_string(), |i| i.to_string());
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default().fg(DEFAULT_THEME.number);

    let mut spans = vec![
        Span::styled("left ", label),
        Span::styled(show(search.left), value),
        Span::styled("  mid ", label),
        Span::styled(show(search.mid), value),
        Span::styled("  right ", label),
        Span::styled(show(search.right), value),
    ];

    if search.complete {
        let (text, color) = if search.found {
            (format!("  FOUND at {}", show(search.found_index)), DEFAULT_THEME.success)
        } else {
            ("  NOT FOUND".to_string(), DEFAULT_THEME.error)
        };
        spans.push(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    Line::from(spans)
}
