pub mod app;
pub mod deck;
pub mod event;
pub mod input;
pub mod keymap;
pub mod surface;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use deck::Deck;
pub use surface::TerminalSurface;
pub use theme::Theme;
