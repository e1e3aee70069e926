//! Console Configuration
//!
//! Resolved once at startup: defaults, then build-time environment
//! (`SEAT_CONSOLE_API_BASE`, `SEAT_CONSOLE_LOG_LEVEL`), then the page's
//! `window.__SEAT_CONSOLE_CONFIG__` object, each layer overriding the last.

use std::str::FromStr;

use wasm_bindgen::JsValue;

const WINDOW_CONFIG_KEY: &str = "__SEAT_CONSOLE_CONFIG__";

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    /// Base URL of the REST backend, without trailing slash
    pub api_base_url: String,
    pub log_level: log::Level,
    /// How long a toast stays on screen
    pub toast_timeout_ms: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            log_level: log::Level::Info,
            toast_timeout_ms: 3500,
        }
    }
}

/// One configuration layer; unset fields keep the lower layer's value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub api_base_url: Option<String>,
    pub log_level: Option<String>,
    pub toast_timeout_ms: Option<u32>,
}

impl ConfigOverrides {
    fn from_build_env() -> Self {
        Self {
            api_base_url: option_env!("SEAT_CONSOLE_API_BASE").map(str::to_string),
            log_level: option_env!("SEAT_CONSOLE_LOG_LEVEL").map(str::to_string),
            toast_timeout_ms: None,
        }
    }

    fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let obj = js_sys::Reflect::get(&window, &JsValue::from_str(WINDOW_CONFIG_KEY)).ok()?;
        if obj.is_undefined() || obj.is_null() {
            return None;
        }
        let field = |name: &str| js_sys::Reflect::get(&obj, &JsValue::from_str(name)).ok();
        Some(Self {
            api_base_url: field("apiBaseUrl").and_then(|v| v.as_string()),
            log_level: field("logLevel").and_then(|v| v.as_string()),
            toast_timeout_ms: field("toastTimeoutMs")
                .and_then(|v| v.as_f64())
                .filter(|ms| *ms >= 0.0)
                .map(|ms| ms as u32),
        })
    }
}

impl ConsoleConfig {
    pub fn load() -> Self {
        let mut config = Self::default();
        config.apply(ConfigOverrides::from_build_env());
        if let Some(overrides) = ConfigOverrides::from_window() {
            config.apply(overrides);
        }
        config
    }

    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(url) = overrides.api_base_url {
            let url = url.trim().trim_end_matches('/');
            if !url.is_empty() {
                self.api_base_url = url.to_string();
            }
        }
        if let Some(level) = overrides.log_level {
            match log::Level::from_str(level.trim()) {
                Ok(level) => self.log_level = level,
                // Logger is not up yet
                Err(_) => web_sys::console::warn_1(&format!("[CONFIG] unknown log level {:?}", level).into()),
            }
        }
        if let Some(ms) = overrides.toast_timeout_ms {
            self.toast_timeout_ms = ms;
        }
    }
}
