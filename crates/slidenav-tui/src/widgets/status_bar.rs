use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use slidenav_core::motion::Clock;
use slidenav_core::Mode;
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render<C: Clock + Clone>(frame: &mut Frame, area: Rect, app: &App<C>) {
        let theme = &app.theme;
        let nav = &app.navigator;

        let mode_str = match nav.mode() {
            Some(Mode::Desktop) => " DESKTOP ",
            Some(Mode::Mobile) => " MOBILE ",
            None => " ------ ",
        };
        let mode_color = match nav.mode() {
            Some(Mode::Mobile) => theme.aqua,
            _ => theme.blue,
        };

        let flags = app.flags();
        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else if flags.is_empty() {
            format!(" {}/{}", nav.index() + 1, nav.slide_count())
        } else {
            format!(" {}/{} | {}", nav.index() + 1, nav.slide_count(), flags.join(" "))
        };

        let help_hint = " q:quit j/k:slide m:menu f:fade F2:pointer ";
        let used = mode_str.width() + status_text.width() + help_hint.width();
        let padding_len = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(
                mode_str,
                Style::default()
                    .fg(theme.bg0)
                    .bg(mode_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
