//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Toggle button for the sidebar
//! - Application title
//! - Theme toggle
//! - Sign-out button

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;
use crate::shared::theme::{PreferenceHandle, ThemeToggle};
use crate::system::auth::context::SessionHandle;

#[component]
pub fn TopHeader(
    session: SessionHandle,
    prefs: PreferenceHandle,
    left_open: RwSignal<bool>,
) -> impl IntoView {
    let toggle_sidebar = move |_| {
        left_open.update(|open| *open = !*open);
    };

    let logout = move |_| {
        if session.busy.get_untracked() {
            return;
        }
        spawn_local(async move {
            if let Err(e) = session.logout().await {
                log::warn!("Sign-out finished with provider error: {}", e);
            }
        });
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">"Rental Admin"</span>
            </div>

            <div class="top-header__actions">
                <ThemeToggle prefs=prefs />

                <button
                    class="top-header__icon-btn"
                    on:click=logout
                    disabled=move || session.busy.get()
                    title="Sign out"
                >
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
