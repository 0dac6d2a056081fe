mod dots;
mod popup;
mod slides;
mod status_bar;

pub use dots::DotsWidget;
pub use popup::MenuPopup;
pub use slides::SlidesWidget;
pub use status_bar::StatusBarWidget;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};
use slidenav_core::motion::Clock;

use crate::app::{App, DOTS_WIDTH};

/// Draw the whole presenter: slides, dot strip, status bar and menu overlay
pub fn draw<C: Clock + Clone>(frame: &mut Frame, app: &mut App<C>) {
    let size = frame.area();

    // Main layout: content + status bar
    let status_rows = u16::from(app.ui.show_status_bar);
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(status_rows)])
        .split(size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(DOTS_WIDTH)])
        .split(main_layout[0]);

    SlidesWidget::render(frame, columns[0], app);
    DotsWidget::render(frame, columns[1], app);
    if status_rows > 0 {
        StatusBarWidget::render(frame, main_layout[1], app);
    }

    if app.navigator.is_menu_open() {
        MenuPopup::render(frame, columns[0], app);
    } else {
        app.hitboxes.menu_items.clear();
    }
}
