use crate::conf::ConfigError;
use crate::histogram::{BucketCoalescer, MAX_BUCKETS};
use crate::render::{DEFAULT_BAR_WIDTH, DEFAULT_COLOR, TextRenderer};
use crate::tooltip::DEFAULT_HIDE_DELAY;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistoviewConfig {
    #[serde(default)]
    pub view: ViewConfig,

    #[serde(default)]
    pub text: TextConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewConfig {
    /// Upper bound on visual buckets per histogram.
    #[serde(default = "default_max_buckets")]
    pub max_buckets: usize,

    /// How long a popup lingers after the pointer leaves its bucket.
    #[serde(default = "default_hide_delay_ms")]
    pub hide_delay_ms: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            max_buckets: default_max_buckets(),
            hide_delay_ms: default_hide_delay_ms(),
        }
    }
}

impl ViewConfig {
    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }

    pub fn coalescer(&self) -> BucketCoalescer {
        BucketCoalescer::new(self.max_buckets)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextConfig {
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,

    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            bar_width: default_bar_width(),
            color: default_color(),
        }
    }
}

impl TextConfig {
    pub fn renderer(&self) -> TextRenderer {
        TextRenderer {
            bar_width: self.bar_width,
            color: self.color,
        }
    }
}

impl HistoviewConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.view.max_buckets == 0 {
            return Err(ConfigError::Invalid {
                field: "view.max_buckets",
                reason: "must be at least 1".to_string(),
            });
        }

        if self.text.bar_width == 0 {
            return Err(ConfigError::Invalid {
                field: "text.bar_width",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

fn default_max_buckets() -> usize {
    MAX_BUCKETS
}

fn default_hide_delay_ms() -> u64 {
    DEFAULT_HIDE_DELAY.as_millis() as u64
}

fn default_bar_width() -> usize {
    DEFAULT_BAR_WIDTH
}

fn default_color() -> bool {
    DEFAULT_COLOR
}
