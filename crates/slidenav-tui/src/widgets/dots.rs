use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use slidenav_core::motion::Clock;

use crate::app::App;

pub struct DotsWidget;

impl DotsWidget {
    /// Render the menu trigger and indicator strip, recording their hitboxes
    pub fn render<C: Clock + Clone>(frame: &mut Frame, area: Rect, app: &mut App<C>) {
        let theme = app.theme.clone();
        let surface = app.surface();
        let bg = Style::default().bg(theme.bg1);
        frame.render_widget(Paragraph::new("").style(bg), area);

        let mut menu_trigger = None;
        if surface.is_menu_armed() && area.height > 0 {
            let rect = Rect::new(area.x + area.width / 2, area.y, 1, 1);
            let style = if app.navigator.is_menu_open() {
                bg.fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                bg.fg(theme.grey2)
            };
            frame.render_widget(Paragraph::new(Span::styled("≡", style)), rect);
            menu_trigger = Some(rect);
        }

        // Dots start below the trigger row and are centred in what remains
        let count = surface.dots().len() as u16;
        let usable = area.height.saturating_sub(2);
        let shown = count.min(usable);
        let first_row = area.y + 2 + (usable - shown) / 2;
        let mut dots = Vec::with_capacity(shown as usize);
        for i in 0..shown {
            let rect = Rect::new(area.x + area.width / 2, first_row + i, 1, 1);
            let (glyph, style) = if surface.is_dot_current(i as usize) {
                ("●", bg.fg(theme.dot_current))
            } else {
                ("○", bg.fg(theme.dot))
            };
            frame.render_widget(Paragraph::new(Span::styled(glyph, style)), rect);
            dots.push(rect);
        }

        app.hitboxes.dots = dots;
        app.hitboxes.menu_trigger = menu_trigger;
    }
}
