//! Splash configuration.
//!
//! Every knob of the animation lives here: phase budgets, per-cell lifetime
//! range, character-cycling cadence, color easing, glitch alphabet and
//! palette. All fields have documented defaults, so a config file only needs
//! the values it wants to change.
//!
//! Loaded from `<config_dir>/gridfall/config.toml` when present; a missing
//! file means defaults. Validation happens when the engine starts, so a bad
//! config is reported once, up front, instead of truncating cells mid-run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::color::Rgb;
use crate::theme::Palette;

/// Errors raised by configuration loading and validation.
///
/// All variants are fatal to the animation attempt; the caller is expected
/// to fall back to skipping the splash entirely.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("materialize_ticks ({materialize_ticks}) must be >= max_lifetime ({max_lifetime}), or some cells would be cut off mid-settle")]
    PhaseBudget {
        materialize_ticks: u32,
        max_lifetime: u32,
    },

    #[error("min_lifetime must be at least 1 tick")]
    ZeroLifetime,

    #[error("max_lifetime ({max}) must be >= min_lifetime ({min})")]
    LifetimeRange { min: u32, max: u32 },

    #[error("glitch_alphabet must not be empty")]
    EmptyAlphabet,

    #[error("glitch_colors must not be empty")]
    EmptyPalette,

    #[error("tick_period_ms must be at least 1")]
    ZeroTickPeriod,

    #[error("cadence thresholds must satisfy 0 < fast_until <= steady_until <= freeze_at <= 1 (got {fast_until}, {steady_until}, {freeze_at})")]
    CadenceOrder {
        fast_until: f32,
        steady_until: f32,
        freeze_at: f32,
    },

    #[error("cadence cycle periods must be at least 1 tick")]
    ZeroCadencePeriod,

    #[error("color_ease_exponent must be positive (got {0})")]
    NonPositiveExponent(f32),

    #[error("could not determine the user config directory")]
    NoConfigDir,

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Full configuration for one splash run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    /// Ticks of pure noise before any cell starts settling.
    pub chaos_ticks: u32,
    /// Tick budget of the materialization phase. Must cover `max_lifetime`.
    pub materialize_ticks: u32,
    /// Ticks the finished image is held before auto-dismissal.
    pub hold_ticks: u32,
    /// Minimum per-cell settle time, in ticks. At least 1.
    pub min_lifetime: u32,
    /// Maximum per-cell settle time, in ticks.
    pub max_lifetime: u32,
    /// Wall-clock tick period in milliseconds.
    pub tick_period_ms: u64,
    /// Characters drawn while a cell is still noise.
    pub glitch_alphabet: String,
    /// Colors a cell's noise can take. Repeated entries act as weights.
    pub glitch_colors: Vec<Rgb>,
    /// Color background cells settle to, and the screen fill.
    pub background: Rgb,
    /// Color of the built-in title art.
    pub art_color: Rgb,
    /// Color of the hold-phase prompt line.
    pub prompt_color: Rgb,
    /// Below this progress a cell re-rolls its character every tick.
    pub cadence_fast_until: f32,
    /// Below this progress a cell re-rolls every `cadence_steady_every` ticks.
    pub cadence_steady_until: f32,
    /// At or above this progress the character freezes at its final value.
    pub cadence_freeze_at: f32,
    /// Cycle period in the steady band.
    pub cadence_steady_every: u32,
    /// Cycle period between the steady band and the freeze threshold.
    pub cadence_slow_every: u32,
    /// Exponent applied to progress before color interpolation. Values above
    /// 1 keep cells near their glitch color longer, then snap to the final
    /// hue late (the "lock-in" read).
    pub color_ease_exponent: f32,
}

impl Default for SplashConfig {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            chaos_ticks: 15,
            materialize_ticks: 40,
            hold_ticks: 25,
            min_lifetime: 20,
            max_lifetime: 35,
            tick_period_ms: 60,
            glitch_alphabet: "▓▒░╬╫╪┼╳※▪◆▄▀█@#$%&".to_string(),
            glitch_colors: palette.glitch.clone(),
            background: palette.background,
            art_color: palette.art,
            prompt_color: palette.prompt,
            cadence_fast_until: 0.30,
            cadence_steady_until: 0.80,
            cadence_freeze_at: 0.95,
            cadence_steady_every: 2,
            cadence_slow_every: 5,
            color_ease_exponent: 1.5,
        }
    }
}

impl SplashConfig {
    /// Path of the user config file: `<config_dir>/gridfall/config.toml`.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("gridfall").join("config.toml"))
    }

    /// Load from the default location. A missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load from an explicit path. The file must exist and parse.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Write the config to the default location as pretty TOML.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Replace the color fields with a named palette's.
    pub fn apply_palette(&mut self, palette: &Palette) {
        self.glitch_colors = palette.glitch.clone();
        self.background = palette.background;
        self.art_color = palette.art;
        self.prompt_color = palette.prompt;
    }

    /// The glitch alphabet as a drawable char list.
    pub fn glitch_chars(&self) -> Vec<char> {
        self.glitch_alphabet.chars().collect()
    }

    /// Check every invariant the engine relies on.
    ///
    /// Called by `SettlingEngine::start`; also usable directly to vet a
    /// config file before committing to a run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if self.min_lifetime == 0 {
            return Err(ConfigError::ZeroLifetime);
        }
        if self.max_lifetime < self.min_lifetime {
            return Err(ConfigError::LifetimeRange {
                min: self.min_lifetime,
                max: self.max_lifetime,
            });
        }
        if self.materialize_ticks < self.max_lifetime {
            return Err(ConfigError::PhaseBudget {
                materialize_ticks: self.materialize_ticks,
                max_lifetime: self.max_lifetime,
            });
        }
        if self.glitch_alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if self.glitch_colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        let ordered = 0.0 < self.cadence_fast_until
            && self.cadence_fast_until <= self.cadence_steady_until
            && self.cadence_steady_until <= self.cadence_freeze_at
            && self.cadence_freeze_at <= 1.0;
        if !ordered {
            return Err(ConfigError::CadenceOrder {
                fast_until: self.cadence_fast_until,
                steady_until: self.cadence_steady_until,
                freeze_at: self.cadence_freeze_at,
            });
        }
        if self.cadence_steady_every == 0 || self.cadence_slow_every == 0 {
            return Err(ConfigError::ZeroCadencePeriod);
        }
        if self.color_ease_exponent <= 0.0 {
            return Err(ConfigError::NonPositiveExponent(self.color_ease_exponent));
        }
        Ok(())
    }
}
