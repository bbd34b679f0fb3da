use contracts::routes::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::theme::{PreferenceHandle, ThemeSelect};
use crate::system::auth::context::SessionHandle;

#[component]
pub fn SettingsPage(session: SessionHandle, prefs: PreferenceHandle) -> impl IntoView {
    let sign_out = move |_| {
        spawn_local(async move {
            if let Err(e) = session.logout().await {
                log::warn!("Sign-out finished with provider error: {}", e);
            }
        });
    };

    view! {
        <PageFrame page_id="sys_settings--system" category=PAGE_CAT_SYSTEM title=AppRoute::Settings.title()>
            <section class="settings__section">
                <h2>"Appearance"</h2>
                <ThemeSelect prefs=prefs />
            </section>

            <section class="settings__section">
                <h2>"Session"</h2>
                <p class="page__hint">"The session ends when this tab is closed."</p>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::from(session.busy)
                    on_click=sign_out
                >
                    "Sign out"
                </Button>
            </section>
        </PageFrame>
    }
}
