use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use slidenav_core::motion::Clock;

use crate::app::App;
use crate::deck::Slide;
use crate::theme::Theme;

pub struct SlidesWidget;

impl SlidesWidget {
    /// Render every slide intersecting `area` at its laid-out position
    pub fn render<C: Clock + Clone>(frame: &mut Frame, area: Rect, app: &App<C>) {
        let surface = app.surface();
        let metrics = surface.metrics();
        let page_rows = metrics.rows(surface.page_height()).max(1);
        let area_rows = area.height as i32;

        for (index, slide) in surface.deck().slides.iter().enumerate() {
            let top = metrics.rows(surface.screen_top(index));
            let bottom = top + page_rows;
            if bottom <= 0 || top >= area_rows {
                continue;
            }

            let visible_top = top.max(0);
            let visible_bottom = bottom.min(area_rows);
            let rect = Rect::new(
                area.x,
                area.y + visible_top as u16,
                area.width,
                (visible_bottom - visible_top) as u16,
            );
            let opacity = surface.decoration(index).map_or(1.0, |d| d.opacity);
            let subtitle = match (index, surface.subtitle_visible()) {
                (0, true) => surface.deck().subtitle.as_deref(),
                _ => None,
            };
            let lines = slide_lines(
                slide,
                SlideStyle {
                    number: index + 1,
                    count: surface.deck().len(),
                    width: area.width,
                    page_rows,
                    opacity,
                    revealed: surface.is_revealed(index),
                    subtitle,
                },
                &app.theme,
            );

            let paragraph = Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll(((visible_top - top) as u16, 0))
                .style(Style::default().bg(app.theme.bg0));
            frame.render_widget(paragraph, rect);
        }

        if surface.is_cue_visible() && area.height > 2 {
            let cue_area = Rect::new(area.x, area.y + area.height - 2, area.width, 1);
            let cue = Paragraph::new(Line::from(Span::styled(
                "scroll ↓",
                Style::default()
                    .fg(app.theme.grey1)
                    .add_modifier(Modifier::DIM),
            )))
            .alignment(Alignment::Center)
            .style(Style::default().bg(app.theme.bg0));
            frame.render_widget(cue, cue_area);
        }
    }
}

struct SlideStyle<'a> {
    number: usize,
    count: usize,
    width: u16,
    page_rows: i32,
    opacity: f64,
    revealed: bool,
    subtitle: Option<&'a str>,
}

fn slide_lines<'a>(slide: &'a Slide, style: SlideStyle<'a>, theme: &Theme) -> Vec<Line<'a>> {
    let rule_color = theme.grey0;
    let counter = format!(" {}/{} ", style.number, style.count);
    let rule_len = (style.width as usize).saturating_sub(counter.len());
    let mut lines = vec![Line::from(vec![
        Span::styled("─".repeat(rule_len), Style::default().fg(rule_color)),
        Span::styled(counter, Style::default().fg(theme.grey1)),
    ])];

    // Vertically centre the content block in the page
    let content_rows = 2 + slide.body.len() as i32 + i32::from(style.subtitle.is_some());
    let padding = ((style.page_rows - 1 - content_rows) / 2).max(1);
    lines.extend((0..padding).map(|_| Line::default()));

    if let Some(title) = &slide.title {
        lines.push(
            Line::from(Span::styled(
                title.as_str(),
                Style::default()
                    .fg(theme.faded_title(style.opacity))
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
    }
    if let Some(subtitle) = style.subtitle {
        lines.push(
            Line::from(Span::styled(
                subtitle,
                Style::default()
                    .fg(theme.subtitle)
                    .add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center),
        );
    }
    lines.push(Line::default());

    // Slides not yet revealed stay dimmed
    let body_color = if style.revealed {
        theme.faded_fg(style.opacity)
    } else {
        theme.grey0
    };
    for text in &slide.body {
        lines.push(
            Line::from(Span::styled(text.as_str(), Style::default().fg(body_color)))
                .alignment(Alignment::Center),
        );
    }
    lines
}
