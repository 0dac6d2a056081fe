use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub navigator: NavigatorConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Easing curve used for slide transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Jump straight to the end value
    None,
    Linear,
    /// Slow start, fast middle, slow end
    #[default]
    EaseInOutCubic,
    EaseOutCubic,
}

/// Tunables for the slide navigator.
///
/// Distances are CSS pixels, durations are milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// Duration of one slide transition
    #[serde(default = "default_tween_duration")]
    pub tween_duration_ms: u64,
    /// Minimum gap between two accepted step navigations
    #[serde(default = "default_cooldown")]
    pub cooldown_ms: u64,
    /// Accumulated wheel delta that triggers one step
    #[serde(default = "default_wheel_threshold")]
    pub wheel_threshold: f64,
    /// Vertical touch travel that triggers one step
    #[serde(default = "default_touch_threshold")]
    pub touch_threshold: f64,
    /// Fraction of the viewport height added to the scroll position to find the anchor point
    #[serde(default = "default_anchor_ratio")]
    pub anchor_ratio: f64,
    /// Height changes up to this size are treated as browser chrome in mobile mode
    #[serde(default = "default_chrome_epsilon")]
    pub chrome_epsilon: f64,
    /// A coarse pointer at or below this width selects mobile mode
    #[serde(default = "default_mobile_max_width")]
    pub mobile_max_width: f64,
    /// Visibility ratios reported by the observer; the first one promotes a slide
    #[serde(default = "default_visibility_thresholds")]
    pub visibility_thresholds: Vec<f64>,
    /// Fade and shift slide frames by distance from the viewport centre in mobile mode
    #[serde(default = "default_true")]
    pub frame_fade: bool,
    /// Fraction of the viewport height over which the frame fade reaches full strength
    #[serde(default = "default_fade_falloff_ratio")]
    pub fade_falloff_ratio: f64,
    /// Delay before the intro subtitle is revealed
    #[serde(default = "default_intro_delay")]
    pub intro_delay_ms: u64,
    /// Finalise the intro after this long even without a transition end
    #[serde(default = "default_intro_fallback")]
    pub intro_fallback_ms: u64,
    /// Easing curve for desktop transitions
    #[serde(default)]
    pub easing: EasingType,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            tween_duration_ms: default_tween_duration(),
            cooldown_ms: default_cooldown(),
            wheel_threshold: default_wheel_threshold(),
            touch_threshold: default_touch_threshold(),
            anchor_ratio: default_anchor_ratio(),
            chrome_epsilon: default_chrome_epsilon(),
            mobile_max_width: default_mobile_max_width(),
            visibility_thresholds: default_visibility_thresholds(),
            frame_fade: default_true(),
            fade_falloff_ratio: default_fade_falloff_ratio(),
            intro_delay_ms: default_intro_delay(),
            intro_fallback_ms: default_intro_fallback(),
            easing: EasingType::default(),
        }
    }
}

impl NavigatorConfig {
    #[inline]
    pub fn tween_duration(&self) -> Duration {
        Duration::from_millis(self.tween_duration_ms)
    }

    #[inline]
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    #[inline]
    pub fn intro_delay(&self) -> Duration {
        Duration::from_millis(self.intro_delay_ms)
    }

    #[inline]
    pub fn intro_fallback(&self) -> Duration {
        Duration::from_millis(self.intro_fallback_ms)
    }

    /// Ratio at which the visibility observer promotes a slide to current
    pub fn promote_ratio(&self) -> f64 {
        self.visibility_thresholds
            .iter()
            .copied()
            .fold(None, |min: Option<f64>, t| Some(min.map_or(t, |m| m.min(t))))
            .unwrap_or(0.45)
    }
}

/// Which pointer the terminal host reports to the mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPreference {
    /// Fine unless the viewport says otherwise
    #[default]
    Auto,
    Fine,
    Coarse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while something is animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Width of one terminal cell in CSS pixels
    #[serde(default = "default_cell_width")]
    pub cell_width_px: f64,
    /// Height of one terminal cell in CSS pixels
    #[serde(default = "default_cell_height")]
    pub cell_height_px: f64,
    /// Wheel delta reported for one mouse wheel notch
    #[serde(default = "default_wheel_step")]
    pub wheel_step_px: f64,
    /// Pointer kind reported to the mode selector
    #[serde(default)]
    pub pointer: PointerPreference,
    /// Show the status bar at the bottom
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            cell_width_px: default_cell_width(),
            cell_height_px: default_cell_height(),
            wheel_step_px: default_wheel_step(),
            pointer: PointerPreference::default(),
            show_status_bar: default_true(),
        }
    }
}

impl UiConfig {
    /// Frame interval while animating
    pub fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-j>" (Ctrl+j), "<S-g>" (Shift+g), "<CR>" (Enter), "<Esc>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the presenter
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Next slide
    #[serde(default = "default_key_next")]
    pub next: String,
    /// Previous slide
    #[serde(default = "default_key_prev")]
    pub prev: String,
    /// First slide
    #[serde(default = "default_key_first")]
    pub first: String,
    /// Last slide
    #[serde(default = "default_key_last")]
    pub last: String,
    /// Open or close the slide menu
    #[serde(default = "default_key_menu")]
    pub menu: String,
    /// Toggle the mobile frame fade
    #[serde(default = "default_key_toggle_fade")]
    pub toggle_fade: String,
    /// Toggle the simulated pointer between fine and coarse
    #[serde(default = "default_key_toggle_pointer")]
    pub toggle_pointer: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next: default_key_next(),
            prev: default_key_prev(),
            first: default_key_first(),
            last: default_key_last(),
            menu: default_key_menu(),
            toggle_fade: default_key_toggle_fade(),
            toggle_pointer: default_key_toggle_pointer(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_next() -> String { "j".to_string() }
fn default_key_prev() -> String { "k".to_string() }
fn default_key_first() -> String { "g".to_string() }
fn default_key_last() -> String { "G".to_string() }
fn default_key_menu() -> String { "m".to_string() }
fn default_key_toggle_fade() -> String { "f".to_string() }
fn default_key_toggle_pointer() -> String { "<F2>".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("slidenav")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tween_duration() -> u64 {
    450
}

fn default_cooldown() -> u64 {
    320
}

fn default_wheel_threshold() -> f64 {
    60.0
}

fn default_touch_threshold() -> f64 {
    30.0
}

fn default_anchor_ratio() -> f64 {
    0.35
}

fn default_chrome_epsilon() -> f64 {
    120.0 // mobile address bar show/hide
}

fn default_mobile_max_width() -> f64 {
    1024.0
}

fn default_visibility_thresholds() -> Vec<f64> {
    vec![0.45, 0.75]
}

fn default_fade_falloff_ratio() -> f64 {
    0.62
}

fn default_intro_delay() -> u64 {
    200
}

fn default_intro_fallback() -> u64 {
    1800
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_cell_width() -> f64 {
    8.0
}

fn default_cell_height() -> f64 {
    16.0
}

fn default_wheel_step() -> f64 {
    100.0
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, defaulting when it does not exist
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Render the configuration as pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/slidenav/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("slidenav")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("slidenav.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}
