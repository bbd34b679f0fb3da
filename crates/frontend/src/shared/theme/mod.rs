//! Theme binding for the Leptos tree.
//!
//! `PreferenceHandle` owns the `PreferenceStore`; the store writes through
//! `DocumentSink`, which updates the `PresentationContext` signal handed to
//! components and the `data-theme` attribute read by the stylesheet.
//! Components that need the theme receive the handle as a prop.

use contracts::shared::config::AppConfig;
use contracts::shared::theme::{PreferenceState, PreferenceStore, PresentationSink, Theme};
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use web_sys::window;

use crate::shared::icons::icon;
use crate::shared::storage::BrowserStorage;

/// Current theme as seen by the view tree.
#[derive(Clone, Copy)]
pub struct PresentationContext {
    pub theme: RwSignal<Theme>,
}

/// Writes the theme to the presentation context and the document.
pub struct DocumentSink {
    context: PresentationContext,
}

impl PresentationSink for DocumentSink {
    fn apply(&self, theme: Theme) {
        self.context.theme.set(theme);
        apply_document_theme(theme);
    }
}

/// Set `data-theme` on `<html>` and `<body>`.
fn apply_document_theme(theme: Theme) {
    let document = match window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

type BrowserPreferenceStore = PreferenceStore<BrowserStorage, DocumentSink>;

#[derive(Clone, Copy)]
pub struct PreferenceHandle {
    pub presentation: PresentationContext,
    pub state: RwSignal<PreferenceState>,
    store: StoredValue<BrowserPreferenceStore, LocalStorage>,
}

impl PreferenceHandle {
    /// Create the store and load the persisted theme synchronously, so the
    /// first paint already uses it.
    pub fn load(config: &AppConfig) -> Self {
        let presentation = PresentationContext {
            theme: RwSignal::new(Theme::default()),
        };
        let mut store = PreferenceStore::new(
            BrowserStorage::local(),
            DocumentSink {
                context: presentation,
            },
        )
        .with_key(config.preferences.theme_key.clone());
        store.load();

        Self {
            presentation,
            state: RwSignal::new(store.state()),
            store: StoredValue::new_local(store),
        }
    }

    pub fn toggle(&self) {
        self.store.update_value(|store| {
            store.toggle();
        });
        self.sync_state();
    }

    pub fn set_theme(&self, theme: Theme) {
        self.store.update_value(|store| store.set_theme(theme));
        self.sync_state();
    }

    pub fn theme(&self) -> Theme {
        self.presentation.theme.get()
    }

    fn sync_state(&self) {
        let state = self.store.with_value(|store| store.state());
        self.state.set(state);
    }
}

/// Header button flipping light/dark.
#[component]
pub fn ThemeToggle(prefs: PreferenceHandle) -> impl IntoView {
    let is_dark = move || prefs.theme() == Theme::Dark;

    view! {
        <button
            class="top-header__icon-btn"
            on:click=move |_| prefs.toggle()
            title=move || if is_dark() { "Switch to light theme" } else { "Switch to dark theme" }
        >
            {move || if is_dark() { icon("sun") } else { icon("moon") }}
        </button>
    }
}

/// Theme choice list for the settings page.
#[component]
pub fn ThemeSelect(prefs: PreferenceHandle) -> impl IntoView {
    view! {
        <div class="theme-select">
            {Theme::all().into_iter().map(|theme| {
                let is_active = move || prefs.theme() == theme;
                view! {
                    <label class="theme-select__item">
                        <input
                            type="radio"
                            name="theme"
                            prop:checked=is_active
                            on:change=move |_| prefs.set_theme(theme)
                        />
                        {theme.display_name()}
                    </label>
                }
            }).collect_view()}
        </div>
    }
}
