use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Directory holding the post files ("the universe")
    #[serde(default = "default_universe_dir")]
    pub universe_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            universe_dir: default_universe_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds when idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Show the navigation help footer in the indicator panel
    #[serde(default = "default_true")]
    pub show_help: bool,
    /// Scroll and animation settings
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_help: default_true(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Scroll and navigation tuning.
///
/// The defaults reproduce the feel of the original page: a one-second
/// eased glide between sections, a pinned header the scroll targets
/// stay clear of, and input coalescing so one physical gesture moves
/// exactly one section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Scroll animation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Banner rows above the first section; scroll targets subtract this
    /// so a landed section's top sits just below the banner, still inside
    /// the viewport
    #[serde(default = "default_header_offset")]
    pub header_offset: u16,
    /// Settled wheel delta must exceed this to count as intentional
    #[serde(default = "default_wheel_threshold")]
    pub wheel_threshold: i32,
    /// Quiet period after the last wheel event before it is evaluated
    #[serde(default = "default_wheel_debounce")]
    pub wheel_debounce_ms: u64,
    /// Delta units one terminal wheel notch contributes
    #[serde(default = "default_wheel_tick_units")]
    pub wheel_tick_units: i32,
    /// Minimum drag distance in rows to register as a swipe
    #[serde(default = "default_min_swipe_distance")]
    pub min_swipe_distance: u16,
    /// How long the navigation feedback overlay stays visible
    #[serde(default = "default_feedback_pulse")]
    pub feedback_pulse_ms: u64,
    /// Frame rate while an animation is in flight
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: default_animation_duration(),
            header_offset: default_header_offset(),
            wheel_threshold: default_wheel_threshold(),
            wheel_debounce_ms: default_wheel_debounce(),
            wheel_tick_units: default_wheel_tick_units(),
            min_swipe_distance: default_min_swipe_distance(),
            feedback_pulse_ms: default_feedback_pulse(),
            animation_fps: default_animation_fps(),
        }
    }
}

impl ScrollConfig {
    pub fn animation_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.animation_duration_ms)
    }

    pub fn wheel_debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.wheel_debounce_ms)
    }

    pub fn feedback_pulse(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.feedback_pulse_ms)
    }

    /// Tick duration for the animation frame rate
    pub fn animation_tick_duration(&self) -> std::time::Duration {
        if self.animation_fps == 0 {
            std::time::Duration::from_millis(16) // ~60fps fallback
        } else {
            std::time::Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "G" (Shift+g), "<C-c>" (Ctrl+c), "<Home>", "<End>", "<Esc>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Navigate to the next section
    #[serde(default = "default_key_next_section")]
    pub next_section: String,
    /// Navigate to the previous section
    #[serde(default = "default_key_prev_section")]
    pub prev_section: String,
    /// Jump to the first section
    #[serde(default = "default_key_first_section")]
    pub first_section: String,
    /// Jump to the last section
    #[serde(default = "default_key_last_section")]
    pub last_section: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next_section: default_key_next_section(),
            prev_section: default_key_prev_section(),
            first_section: default_key_first_section(),
            last_section: default_key_last_section(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_next_section() -> String { "j".to_string() }
fn default_key_prev_section() -> String { "k".to_string() }
fn default_key_first_section() -> String { "<Home>".to_string() }
fn default_key_last_section() -> String { "<End>".to_string() }

fn default_universe_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("orrery")
        .join("universe")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_duration() -> u64 {
    1000
}

// The original page offset scroll targets by 100px under a fixed banner.
// A terminal row is roughly 20px, so the equivalent here is a handful of
// rows; anything near the literal 100 would land sections below the fold.
fn default_header_offset() -> u16 {
    5
}

fn default_wheel_threshold() -> i32 {
    50
}

fn default_wheel_debounce() -> u64 {
    50
}

fn default_wheel_tick_units() -> i32 {
    60
}

fn default_min_swipe_distance() -> u16 {
    50
}

fn default_feedback_pulse() -> u64 {
    300
}

fn default_animation_fps() -> u16 {
    60
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
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/orrery/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("orrery")
            .join("config.toml")
    }

    /// Get the universe directory (with tilde expansion)
    pub fn universe_dir(&self) -> PathBuf {
        expand_tilde(&self.general.universe_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scroll_config() {
        let config = ScrollConfig::default();
        assert_eq!(config.animation_duration_ms, 1000);
        assert_eq!(config.header_offset, 5);
        assert_eq!(config.wheel_threshold, 50);
        assert_eq!(config.wheel_debounce_ms, 50);
        assert_eq!(config.min_swipe_distance, 50);
        assert_eq!(config.feedback_pulse_ms, 300);
        assert_eq!(config.animation_fps, 60);
    }

    #[test]
    fn test_animation_tick_duration() {
        let config = ScrollConfig::default();
        assert_eq!(
            config.animation_tick_duration(),
            std::time::Duration::from_millis(16)
        );

        let config = ScrollConfig {
            animation_fps: 0,
            ..Default::default()
        };
        assert_eq!(
            config.animation_tick_duration(),
            std::time::Duration::from_millis(16)
        );
    }

    #[test]
    fn test_parse_partial_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui.scroll]
            animation_duration_ms = 200
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.scroll.animation_duration_ms, 200);
        // Everything else falls back to defaults
        assert_eq!(config.ui.scroll.header_offset, 5);
        assert_eq!(config.keymap.next_section, "j");
    }
}
