//! Sidebar with one link per management page.

use contracts::routes::AppRoute;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;

fn icon_for(route: &AppRoute) -> &'static str {
    match route {
        AppRoute::Dashboard => "dashboard",
        AppRoute::Cars | AppRoute::EditCar { .. } => "car",
        AppRoute::AddCar => "plus",
        AppRoute::Orders | AppRoute::EditOrder { .. } => "orders",
        AppRoute::Users => "users",
        AppRoute::AddUser => "user-plus",
        AppRoute::Messages => "messages",
        AppRoute::Reports => "reports",
        AppRoute::Settings => "settings",
        AppRoute::Login => "log-out",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let current = Memo::new(move |_| AppRoute::parse(&location.pathname.get()));

    view! {
        <nav class="app-sidebar__content">
            {AppRoute::navigation().into_iter().map(|route| {
                let item = StoredValue::new(route.clone());
                view! {
                    <A href=route.path()>
                        <span
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                current.get().as_ref() == Some(&item.get_value())
                            }
                        >
                            {icon(icon_for(&route))}
                            <span>{route.title()}</span>
                        </span>
                    </A>
                }
            }).collect_view()}
        </nav>
    }
}
