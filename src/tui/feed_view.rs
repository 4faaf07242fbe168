use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::app::Composer;
use super::rendering::{ACCENT, BRIGHT, MUTED, border_block};
use super::timestamps::format_timestamp;
use crate::feed::{FeedView, ONBOARDING_MESSAGE, ReplyDisplay, ThreadCard};
use crate::models::{Post, Thread};
use crate::utils::strip_ansi_codes;

const COMPOSER_HINT: &str = "Reply… (i)";

/// Render the grouped activity feed
pub fn render_feed(
    frame: &mut Frame,
    area: Rect,
    view: &FeedView<'_>,
    cursor: usize,
    focused: bool,
    composer: Option<&Composer>,
    now: &DateTime<Utc>,
) {
    let block = border_block(" Activity Feed ", focused);

    let groups = match view {
        FeedView::Onboarding => {
            let paragraph = Paragraph::new(ONBOARDING_MESSAGE)
                .style(Style::default().fg(MUTED))
                .block(block)
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, area);
            return;
        }
        FeedView::Groups(groups) => groups,
    };

    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_line = 0;
    let mut card_idx = 0;

    for group in groups {
        lines.push(Line::from(Span::styled(
            format!("── {} ──", group.relative_day),
            Style::default().fg(MUTED).add_modifier(Modifier::BOLD),
        )));

        for card in &group.cards {
            let highlighted = focused && card_idx == cursor;
            if card_idx == cursor {
                cursor_line = lines.len();
            }
            lines.extend(card_lines(card, highlighted, composer, now));
            card_idx += 1;
        }
    }

    // Keep the cursor card in view
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = cursor_line.saturating_sub(inner_height / 2) as u16;

    let paragraph = Paragraph::new(Text::from(lines)).block(block).scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn card_lines<'a>(
    card: &ThreadCard<'a>,
    highlighted: bool,
    composer: Option<&Composer>,
    now: &DateTime<Utc>,
) -> Vec<Line<'a>> {
    let thread = card.thread;
    let header_style = if highlighted {
        Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(BRIGHT)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(strip_ansi_codes(&thread.created_by), header_style),
            Span::styled(
                format!(" · {} · {}", format_timestamp(&thread.thread_ts, now), card.about_label),
                Style::default().fg(MUTED),
            ),
        ]),
        Line::from(format!("  {}", strip_ansi_codes(&thread.message))),
    ];

    match card.replies {
        ReplyDisplay::ComposerOnly => {}
        ReplyDisplay::Inline { count, replies } => {
            lines.push(Line::from(Span::styled(
                format!("  {}", ReplyDisplay::count_label(count)),
                Style::default().fg(MUTED),
            )));
            lines.extend(replies.iter().map(|post| reply_line(post, now)));
        }
        ReplyDisplay::ViewAll { count } => {
            lines.push(Line::from(Span::styled(
                format!("  {} (v)", ReplyDisplay::view_all_label(count)),
                Style::default().fg(ACCENT),
            )));
        }
    }

    if card.expanded {
        lines.push(composer_line(thread, composer));
    }

    lines
}

pub fn reply_line(post: &Post, now: &DateTime<Utc>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("    ↳ {}", strip_ansi_codes(&post.from)), Style::default().fg(BRIGHT)),
        Span::styled(format!(" ({}): ", format_timestamp(&post.post_ts, now)), Style::default().fg(MUTED)),
        Span::raw(strip_ansi_codes(&post.message)),
    ])
}

fn composer_line(thread: &Thread, composer: Option<&Composer>) -> Line<'static> {
    match composer.filter(|c| c.thread_id == thread.id) {
        Some(c) => Line::from(Span::styled(
            format!("  ✎ {}▏", c.text),
            Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(format!("  ✎ {}", COMPOSER_HINT), Style::default().fg(MUTED))),
    }
}

/// Render the side panel with a thread's full conversation
pub fn render_thread_panel(
    frame: &mut Frame,
    area: Rect,
    thread: &Thread,
    composer: Option<&Composer>,
    now: &DateTime<Utc>,
) {
    let about = thread.entity_link().map(|l| l.to_string()).unwrap_or_else(|| thread.about.clone());

    let mut lines = vec![
        Line::from(Span::styled(about, Style::default().fg(MUTED))),
        Line::from(vec![
            Span::styled(strip_ansi_codes(&thread.created_by), Style::default().fg(BRIGHT)),
            Span::styled(
                format!(" · {}", format_timestamp(&thread.thread_ts, now)),
                Style::default().fg(MUTED),
            ),
        ]),
        Line::from(strip_ansi_codes(&thread.message)),
        Line::from(""),
        Line::from(Span::styled(
            ReplyDisplay::count_label(thread.posts_count),
            Style::default().fg(MUTED),
        )),
    ];

    lines.extend(thread.posts.iter().map(|post| reply_line(post, now)));
    lines.push(Line::from(""));
    lines.push(composer_line(thread, composer));
    lines.push(Line::from(Span::styled("Esc: close", Style::default().fg(MUTED))));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(ACCENT)).title(" Thread "))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
