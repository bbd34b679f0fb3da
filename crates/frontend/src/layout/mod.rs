pub mod left;
pub mod top_header;

use leptos::prelude::*;

use crate::shared::theme::PreferenceHandle;
use crate::system::auth::context::SessionHandle;
use left::Sidebar;
use top_header::TopHeader;

/// Authenticated application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// |   (Left)  |          (Center)            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(session: SessionHandle, prefs: PreferenceHandle, children: Children) -> impl IntoView {
    let left_open = RwSignal::new(true);

    view! {
        <div class="app-layout">
            <TopHeader session=session prefs=prefs left_open=left_open />

            <div class="app-body">
                <div data-zone="left" class="left" class:hidden=move || !left_open.get()>
                    <Sidebar />
                </div>

                <div data-zone="center" class="app-main">
                    {children()}
                </div>
            </div>
        </div>
    }
}
