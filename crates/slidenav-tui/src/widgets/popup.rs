use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use slidenav_core::motion::Clock;
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct MenuPopup;

impl MenuPopup {
    /// Render the slide menu over `area`, recording one hitbox per entry
    pub fn render<C: Clock + Clone>(frame: &mut Frame, area: Rect, app: &mut App<C>) {
        let theme = app.theme.clone();
        let titles: Vec<String> = app
            .surface()
            .deck()
            .slides
            .iter()
            .enumerate()
            .map(|(i, slide)| {
                let title = slide.title.as_deref().unwrap_or("(untitled)");
                format!("{:>2}  {}", i + 1, title)
            })
            .collect();
        let current = app.navigator.index();

        let widest = titles.iter().map(|t| t.width()).max().unwrap_or(0) as u16;
        let popup_width = (widest + 6).max(24).min(area.width.saturating_sub(4).max(1));
        let popup_height = (titles.len() as u16 + 4).min(area.height.saturating_sub(2).max(1));
        let popup_area = centered_rect(popup_width, popup_height, area);

        // Clear the background area
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Slides ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let max_len = inner.width.saturating_sub(2) as usize;
        let mut items = Vec::new();
        for (i, title) in titles.iter().enumerate() {
            let row = inner.y + i as u16;
            // Leave the last inner row for the hint
            if row + 1 >= inner.y + inner.height {
                break;
            }
            let rect = Rect::new(inner.x, row, inner.width, 1);
            let style = if i == current {
                Style::default()
                    .fg(theme.dot_current)
                    .bg(theme.bg2)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg0)
            };
            let text = format!(" {}", truncate_str(title, max_len));
            frame.render_widget(Paragraph::new(Span::styled(text, style)), rect);
            items.push(rect);
        }

        if inner.height > 0 {
            let hint = Paragraph::new(Line::from(Span::styled(
                "1-9 or click to jump, Esc to close",
                Style::default().fg(theme.grey1),
            )))
            .alignment(Alignment::Center);
            let hint_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
            frame.render_widget(hint, hint_area);
        }

        app.hitboxes.menu_items = items;
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Truncate a string to max length with ellipsis
fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}
