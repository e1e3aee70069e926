//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpApi;
use crate::config::ConsoleConfig;
use crate::store::{store_dismiss_toast, store_push_toast, AppStore, ToastLevel};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the venue list - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the venue list - write
    set_reload_trigger: WriteSignal<u32>,
    api: StoredValue<HttpApi>,
    toast_timeout_ms: u32,
    store: AppStore,
}

impl AppContext {
    pub fn new(config: &ConsoleConfig, store: AppStore) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            reload_trigger,
            set_reload_trigger,
            api: StoredValue::new(HttpApi::new(config.api_base_url.clone())),
            toast_timeout_ms: config.toast_timeout_ms,
            store,
        }
    }

    pub fn api(&self) -> HttpApi {
        self.api.get_value()
    }

    /// Trigger a reload of the venue list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show a toast that dismisses itself after the configured timeout
    pub fn notify(&self, level: ToastLevel, message: impl Into<String>) {
        let store = self.store;
        let id = store_push_toast(&store, level, message.into());
        let timeout = self.toast_timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            store_dismiss_toast(&store, id);
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(ToastLevel::Info, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastLevel::Success, message);
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.notify(ToastLevel::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastLevel::Error, message);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
