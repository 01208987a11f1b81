use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use web_sys::window;

use crate::domain::a001_filter::api;
use crate::domain::a001_filter::catalog_cache::CatalogCache;
use crate::shared::i18n::{text, Locale, TextKey};

/// App-wide state shared by every page: current locale and the filter catalog.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub locale: RwSignal<Locale>,
    pub catalog: RwSignal<CatalogCache>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            locale: RwSignal::new(Locale::default()),
            catalog: RwSignal::new(CatalogCache::new()),
        }
    }

    /// Reactive lookup of a UI string in the current locale.
    pub fn t(&self, key: TextKey) -> &'static str {
        text(self.locale.get(), key)
    }

    /// Picks up `?lang=` from the address bar and keeps it in sync.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(locale) = params.get("lang").and_then(|code| Locale::from_code(code)) {
            self.locale.set(locale);
        }

        let this = *self;
        Effect::new(move |_| {
            let locale = this.locale.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("lang".to_string(), locale.code())]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn set_locale(&self, locale: Locale) {
        self.locale.set(locale);
    }

    /// Starts a catalog fetch unless one is running or the cached copy is
    /// still fresh.
    pub fn ensure_catalog(&self) {
        let now = Utc::now();
        if !self.catalog.with_untracked(|c| c.needs_fetch(now)) {
            return;
        }
        let mut started = false;
        self.catalog.update(|c| started = c.begin_fetch(now));
        if !started {
            return;
        }

        let catalog = self.catalog;
        spawn_local(async move {
            let result = api::fetch_catalog().await;
            match &result {
                Ok(c) => log::info!(
                    "filter catalog loaded: {} group(s), {} option(s)",
                    c.filter_items.len(),
                    c.option_count()
                ),
                Err(e) => log::error!("filter catalog load failed: {}", e),
            }
            catalog.update(|c| c.finish_fetch(result, Utc::now()));
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
