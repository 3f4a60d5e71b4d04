// Configuration type definitions

use serde::Deserialize;

fn default_debounce_ms() -> u64 {
    300
}

fn default_rotate_ms() -> u64 {
    5000
}

/// Suggestion dropdown configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestConfig {
    /// Idle delay after the last keystroke before a suggestion request fires
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Image showcase configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SliderConfig {
    /// Delay between slide rotations
    #[serde(default = "default_rotate_ms")]
    pub rotate_ms: u64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        SliderConfig {
            rotate_ms: default_rotate_ms(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub suggest: SuggestConfig,

    #[serde(default)]
    pub slider: SliderConfig,

    /// Server base URL; overridden by an explicit --server flag
    #[serde(default)]
    pub server: Option<String>,
}
