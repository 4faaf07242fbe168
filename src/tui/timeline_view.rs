use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};

use super::rendering::{ACCENT, BRIGHT, MUTED, WARN, border_block};
use super::timestamps::format_timestamp;
use crate::timeline::{TimelineRow, TimelineView, VersionType};
use crate::utils::strip_ansi_codes;

pub const MAJOR_BADGE: &str = "Major";

/// Render the version history drawer
pub fn render_timeline(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    view: &TimelineView<'_>,
    cursor: usize,
    focused: bool,
    now: &DateTime<Utc>,
) {
    let mut lines = vec![Line::from(vec![
        Span::styled("Filter: ", Style::default().fg(MUTED)),
        Span::styled(
            format!("{} ▾", view.version_type),
            Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" (f)", Style::default().fg(MUTED)),
    ])];

    if view.list_visible {
        lines.extend(filter_menu_lines(view.version_type));
    }
    lines.push(Line::from(""));

    match &view.placeholder {
        Some(placeholder) => {
            lines.push(Line::from(Span::styled(placeholder.clone(), Style::default().fg(MUTED))));
        }
        None => {
            for (idx, row) in view.rows.iter().enumerate() {
                lines.extend(row_lines(row, focused && idx == cursor, now));
            }
        }
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(border_block(title, focused))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn filter_menu_lines(active: VersionType) -> Vec<Line<'static>> {
    VersionType::OPTIONS
        .iter()
        .map(|option| {
            let key = match option {
                VersionType::All => 'a',
                VersionType::Major => 'm',
                VersionType::Minor => 'n',
            };
            let marker = if *option == active { "●" } else { "○" };
            Line::from(Span::styled(
                format!("  {} {} ({})", marker, option, key),
                Style::default().fg(BRIGHT),
            ))
        })
        .collect()
}

fn row_lines(row: &TimelineRow<'_>, highlighted: bool, now: &DateTime<Utc>) -> Vec<Line<'static>> {
    let record = row.record;
    let marker = if row.is_selected { "●" } else { "○" };

    let version_style = if highlighted {
        Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
    } else if row.is_selected {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(BRIGHT)
    };

    let mut header = vec![Span::styled(format!("{} v{}", marker, record.version), version_style)];
    if row.show_major_badge {
        header.push(Span::raw(" "));
        header.push(Span::styled(
            format!("[{}]", MAJOR_BADGE),
            Style::default().fg(WARN).add_modifier(Modifier::BOLD),
        ));
    }

    let mut lines = vec![
        Line::from(header),
        Line::from(Span::styled(
            format!(
                "  {} · {}",
                strip_ansi_codes(&record.updated_by),
                format_timestamp(&record.updated_at, now)
            ),
            Style::default().fg(MUTED),
        )),
    ];

    if let Some(summary) = &row.summary {
        lines.push(Line::from(Span::styled(format!("  {}", summary), Style::default().fg(MUTED))));
    }

    lines
}
