use contracts::routes::AppRoute;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{PAGE_CAT_DETAIL, PAGE_CAT_LIST};

#[component]
pub fn CarList() -> impl IntoView {
    view! {
        <PageFrame
            page_id="a001_car--list"
            category=PAGE_CAT_LIST
            title=AppRoute::Cars.title()
            actions=view! { <A href=AppRoute::AddCar.path()>"Add car"</A> }.into_any()
        >
            <p class="page__hint">"Fleet records are kept in the hosted database."</p>
        </PageFrame>
    }
}

#[component]
pub fn AddCar() -> impl IntoView {
    view! {
        <PageFrame page_id="a001_car--detail" category=PAGE_CAT_DETAIL title=AppRoute::AddCar.title()>
            <p class="page__hint">"Register a new vehicle in the fleet."</p>
        </PageFrame>
    }
}

#[component]
pub fn EditCar(id: String) -> impl IntoView {
    view! {
        <PageFrame
            page_id="a001_car--detail"
            category=PAGE_CAT_DETAIL
            title=format!("{} {}", AppRoute::EditCar { id: id.clone() }.title(), id)
            actions=view! { <A href=AppRoute::Cars.path()>"Back to cars"</A> }.into_any()
        >
            <p class="page__hint">"Update the vehicle record."</p>
        </PageFrame>
    }
}
