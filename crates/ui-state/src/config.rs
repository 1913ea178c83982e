#![forbid(unsafe_code)]

//! Session configuration with environment overrides.
//!
//! | Variable                  | Values                          | Default |
//! |---------------------------|---------------------------------|---------|
//! | `UI_STATE_BANNER_VISIBLE` | `1/true/yes/on`, `0/false/no/off` | `true`  |

use crate::error::StoreError;

/// Environment key for the initial banner visibility.
pub const ENV_BANNER_VISIBLE: &str = "UI_STATE_BANNER_VISIBLE";

/// Settings applied when a [`UiSession`](crate::UiSession) is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Initial banner visibility.
    pub banner_visible: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            banner_visible: true,
        }
    }
}

impl SessionConfig {
    /// Set the initial banner visibility.
    #[must_use]
    pub fn with_banner_visible(mut self, visible: bool) -> Self {
        self.banner_visible = visible;
        self
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self, StoreError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from a custom lookup.
    pub fn from_env_with<F>(get_env: F) -> Result<Self, StoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = get_env(ENV_BANNER_VISIBLE) {
            config.banner_visible = parse_flag(ENV_BANNER_VISIBLE, &value)?;
        }
        Ok(config)
    }
}

/// Parse an on/off switch, case-insensitively and ignoring surrounding
/// whitespace.
pub fn parse_flag(key: &str, value: &str) -> Result<bool, StoreError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(StoreError::InvalidConfig {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
