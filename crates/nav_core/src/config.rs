use std::{fs, time::Duration};

use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct Settings {
    pub auth_base_url: String,
    pub session_check_timeout_ms: u64,
    /// Minimum swipe distance in px. Enforced by the host input layer;
    /// gestures below it never reach the dispatcher.
    pub swipe_threshold_px: u32,
    pub mobile_breakpoint_px: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auth_base_url: "http://127.0.0.1:5000".into(),
            session_check_timeout_ms: 4000,
            swipe_threshold_px: 50,
            mobile_breakpoint_px: 768,
        }
    }
}

impl Settings {
    pub fn session_check_timeout(&self) -> Duration {
        Duration::from_millis(self.session_check_timeout_ms)
    }

    /// One-time viewport classification, taken at startup.
    pub fn is_mobile(&self, viewport_width_px: u32) -> bool {
        viewport_width_px < self.mobile_breakpoint_px
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    auth_base_url: Option<String>,
    session_check_timeout_ms: Option<u64>,
    swipe_threshold_px: Option<u32>,
    mobile_breakpoint_px: Option<u32>,
}

/// Defaults, then `shell.toml` if present, then `SHELL_*` env overrides.
/// Unreadable values are skipped rather than fatal.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("shell.toml") {
        if let Ok(file_cfg) = toml::from_str::<FileSettings>(&raw) {
            if let Some(v) = file_cfg.auth_base_url {
                settings.auth_base_url = v;
            }
            if let Some(v) = file_cfg.session_check_timeout_ms {
                settings.session_check_timeout_ms = v;
            }
            if let Some(v) = file_cfg.swipe_threshold_px {
                settings.swipe_threshold_px = v;
            }
            if let Some(v) = file_cfg.mobile_breakpoint_px {
                settings.mobile_breakpoint_px = v;
            }
        }
    }

    if let Ok(v) = std::env::var("SHELL_AUTH_BASE_URL") {
        settings.auth_base_url = v;
    }
    if let Ok(v) = std::env::var("SHELL_SESSION_CHECK_TIMEOUT_MS") {
        if let Ok(ms) = v.parse() {
            settings.session_check_timeout_ms = ms;
        }
    }
    if let Ok(v) = std::env::var("SHELL_SWIPE_THRESHOLD_PX") {
        if let Ok(px) = v.parse() {
            settings.swipe_threshold_px = px;
        }
    }
    if let Ok(v) = std::env::var("SHELL_MOBILE_BREAKPOINT_PX") {
        if let Ok(px) = v.parse() {
            settings.mobile_breakpoint_px = px;
        }
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
