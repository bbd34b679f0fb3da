use contracts::routes::AppRoute;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="sys_not_found--system" category=PAGE_CAT_SYSTEM title="Page not found">
            <p class="page__hint">"There is nothing at this address."</p>
            <A href=AppRoute::Dashboard.path()>"Go to dashboard"</A>
        </PageFrame>
    }
}
