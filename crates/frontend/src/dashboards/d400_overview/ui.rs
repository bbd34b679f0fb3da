use contracts::routes::AppRoute;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

/// Landing page after sign-in: shortcuts to every management page.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let shortcuts = [
        (AppRoute::Cars, "car"),
        (AppRoute::Orders, "orders"),
        (AppRoute::Users, "users"),
        (AppRoute::Messages, "messages"),
        (AppRoute::Reports, "reports"),
    ];

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD title=AppRoute::Dashboard.title()>
            <div class="dashboard-shortcuts">
                {shortcuts.into_iter().map(|(route, icon_name)| view! {
                    <A href=route.path()>
                        <span class="dashboard-shortcut">
                            {icon(icon_name)}
                            <span>{route.title()}</span>
                        </span>
                    </A>
                }).collect_view()}
            </div>
        </PageFrame>
    }
}
