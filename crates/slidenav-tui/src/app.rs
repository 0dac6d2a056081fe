use std::time::Instant;

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use slidenav_core::config::{PointerPreference, UiConfig};
use slidenav_core::input::NavKey;
use slidenav_core::motion::{Clock, SystemClock};
use slidenav_core::surface::{BodyClass, ScrollBehavior};
use slidenav_core::{AppConfig, Mode, NavEvent, Pointer, SlideNavigator};
use tracing::debug;

use crate::deck::Deck;
use crate::input::{handle_key_event, Action};
use crate::keymap::Keymap;
use crate::surface::{CellMetrics, TerminalSurface};
use crate::theme::Theme;

/// Columns reserved on the right for the dot strip
pub const DOTS_WIDTH: u16 = 3;
/// Rows moved by one arrow key under native scrolling
const LINE_SCROLL_ROWS: f64 = 3.0;

/// Clickable regions recorded by the last render
#[derive(Debug, Clone, Default)]
pub struct Hitboxes {
    pub dots: Vec<Rect>,
    pub menu_trigger: Option<Rect>,
    pub menu_items: Vec<Rect>,
}

/// Application state
pub struct App<C: Clock + Clone = SystemClock> {
    pub navigator: SlideNavigator<TerminalSurface<C>, C>,
    pub keymap: Keymap,
    pub theme: Theme,
    pub ui: UiConfig,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    pub hitboxes: Hitboxes,
    /// Last drag position in pixels while the left button is held
    drag_y: Option<f64>,
}

impl App<SystemClock> {
    /// Build the presenter for a terminal of `cols` x `rows` cells
    pub fn new(
        deck: Deck,
        config: &AppConfig,
        cols: u16,
        rows: u16,
    ) -> slidenav_core::Result<Self> {
        Self::with_clock(deck, config, SystemClock, cols, rows)
    }
}

impl<C: Clock + Clone> App<C> {
    pub fn with_clock(
        deck: Deck,
        config: &AppConfig,
        clock: C,
        cols: u16,
        rows: u16,
    ) -> slidenav_core::Result<Self> {
        let ui = config.ui.clone();
        let pointer = match ui.pointer {
            PointerPreference::Coarse => Pointer::Coarse,
            PointerPreference::Auto | PointerPreference::Fine => Pointer::Fine,
        };
        let (slide_cols, slide_rows) = slide_area_size(&ui, cols, rows);
        let surface = TerminalSurface::new(
            deck,
            clock.clone(),
            CellMetrics::from_config(&ui),
            slide_cols,
            slide_rows,
        )
        .with_pointer(pointer);
        let navigator = SlideNavigator::new(surface, clock, config.navigator.clone())?;

        Ok(Self {
            navigator,
            keymap: Keymap::from_config(&config.keymap),
            theme: Theme::default(),
            ui,
            should_quit: false,
            status_message: None,
            hitboxes: Hitboxes::default(),
            drag_y: None,
        })
    }

    pub fn start(&mut self) {
        self.navigator.start();
    }

    pub fn surface(&self) -> &TerminalSurface<C> {
        self.navigator.surface()
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// Terminal resized to `cols` x `rows` cells
    pub fn resize(&mut self, cols: u16, rows: u16) {
        let (slide_cols, slide_rows) = slide_area_size(&self.ui, cols, rows);
        self.navigator
            .surface_mut()
            .set_terminal_size(slide_cols, slide_rows);
        self.navigator.handle_event(NavEvent::Resize);
    }

    /// Run one frame: native animations, their events, then navigator work
    pub fn frame(&mut self) {
        let surface = self.navigator.surface_mut();
        surface.tick();
        for event in surface.drain_events() {
            self.navigator.handle_event(event);
        }
        self.navigator.on_frame();
    }

    /// Something is moving and frames should come at the animation rate
    pub fn is_animating(&self) -> bool {
        self.navigator.needs_frame() || self.surface().is_animating()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.navigator.next_deadline()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = handle_key_event(key, &self.keymap, self.navigator.is_menu_open());
        self.handle_action(action);
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleMenu => {
                self.navigator.handle_event(NavEvent::MenuTrigger);
            }
            Action::ToggleFade => {
                let on = !self.navigator.frame_fade();
                self.navigator.set_frame_fade(on);
                let state = if on { "on" } else { "off" };
                self.set_status(format!("Frame fade {}", state));
            }
            Action::TogglePointer => {
                let pointer = self.navigator.surface_mut().toggle_pointer();
                // A pointer change is a device change, not a chrome resize
                self.navigator.handle_event(NavEvent::OrientationChange);
                self.set_status(format!("Pointer {:?}", pointer).to_lowercase());
            }
            Action::MenuPick(index) => {
                if self.navigator.is_menu_open() && index < self.navigator.slide_count() {
                    self.navigator.go_to(index);
                    self.navigator.handle_event(NavEvent::Key(NavKey::Escape));
                }
            }
            Action::None => {}
            Action::NextSlide
            | Action::PrevSlide
            | Action::FirstSlide
            | Action::LastSlide
            | Action::Nav(_) => {
                if let Some(key) = action.nav_key() {
                    let outcome = self.navigator.handle_event(NavEvent::Key(key));
                    if !outcome.is_consumed() {
                        self.native_key_scroll(key);
                    }
                }
            }
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let metrics = self.surface().metrics();
        let y = metrics.px(mouse.row);
        match mouse.kind {
            MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
                let delta = if mouse.kind == MouseEventKind::ScrollDown {
                    self.ui.wheel_step_px
                } else {
                    -self.ui.wheel_step_px
                };
                let outcome = self
                    .navigator
                    .handle_event(NavEvent::Wheel { delta_y: delta });
                if !outcome.is_consumed() && self.navigator.is_ready() {
                    self.navigator
                        .surface_mut()
                        .scroll_by(delta, ScrollBehavior::Smooth);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(event) = self.click_target(mouse.column, mouse.row) {
                    self.navigator.handle_event(event);
                    return;
                }
                if let Some(index) = hit_index(&self.hitboxes.menu_items, mouse.column, mouse.row) {
                    self.handle_action(Action::MenuPick(index));
                    return;
                }
                self.navigator.handle_event(NavEvent::TouchStart { y });
                self.drag_y = Some(y);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(last) = self.drag_y else {
                    return;
                };
                let outcome = self.navigator.handle_event(NavEvent::TouchMove { y });
                if !outcome.is_consumed()
                    && self.navigator.is_ready()
                    && self.navigator.mode() == Some(Mode::Mobile)
                {
                    // Finger drag scrolls the page directly
                    self.navigator
                        .surface_mut()
                        .scroll_by(last - y, ScrollBehavior::Instant);
                }
                self.drag_y = Some(y);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.drag_y.take().is_some() {
                    self.navigator.handle_event(NavEvent::TouchEnd);
                }
            }
            _ => {}
        }
    }

    fn click_target(&self, column: u16, row: u16) -> Option<NavEvent> {
        if let Some(index) = hit_index(&self.hitboxes.dots, column, row) {
            return Some(NavEvent::DotClicked(index));
        }
        self.hitboxes
            .menu_trigger
            .filter(|rect| contains(rect, column, row))
            .map(|_| NavEvent::MenuTrigger)
    }

    /// Native scrolling for keys the navigator left alone
    fn native_key_scroll(&mut self, key: NavKey) {
        if !self.navigator.is_ready() || self.navigator.mode() != Some(Mode::Mobile) {
            return;
        }
        let surface = self.navigator.surface_mut();
        let line = surface.metrics().height * LINE_SCROLL_ROWS;
        let page = (surface.page_height() - surface.metrics().height).max(line);
        let dy = match key {
            NavKey::ArrowDown => line,
            NavKey::ArrowUp => -line,
            NavKey::PageDown | NavKey::Space => page,
            NavKey::PageUp => -page,
            NavKey::Home | NavKey::End | NavKey::Escape => return,
        };
        debug!(dy, ?key, "native key scroll");
        surface.scroll_by(dy, ScrollBehavior::Smooth);
    }

    /// Status line flags shown next to the mode
    pub fn flags(&self) -> Vec<&'static str> {
        let surface = self.surface();
        let mut flags = Vec::new();
        if surface.has_class(BodyClass::ScrollLock) {
            flags.push("intro");
        }
        if self.navigator.is_transitioning() {
            flags.push("moving");
        }
        if surface.pointer() == Pointer::Coarse {
            flags.push("coarse");
        }
        if self.navigator.mode() == Some(Mode::Mobile) && self.navigator.frame_fade() {
            flags.push("fade");
        }
        flags
    }
}

/// Cells left for slides once the dot strip and status bar are laid out
pub fn slide_area_size(ui: &UiConfig, cols: u16, rows: u16) -> (u16, u16) {
    let status = u16::from(ui.show_status_bar);
    (
        cols.saturating_sub(DOTS_WIDTH).max(1),
        rows.saturating_sub(status).max(1),
    )
}

fn contains(rect: &Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn hit_index(rects: &[Rect], column: u16, row: u16) -> Option<usize> {
    rects.iter().position(|rect| contains(rect, column, row))
}
