use contracts::routes::AppRoute;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{PAGE_CAT_DETAIL, PAGE_CAT_LIST};

#[component]
pub fn OrderList() -> impl IntoView {
    view! {
        <PageFrame page_id="a002_order--list" category=PAGE_CAT_LIST title=AppRoute::Orders.title()>
            <p class="page__hint">"Rental orders placed by customers."</p>
        </PageFrame>
    }
}

#[component]
pub fn EditOrder(id: String) -> impl IntoView {
    view! {
        <PageFrame
            page_id="a002_order--detail"
            category=PAGE_CAT_DETAIL
            title=format!("{} {}", AppRoute::EditOrder { id: id.clone() }.title(), id)
            actions=view! { <A href=AppRoute::Orders.path()>"Back to orders"</A> }.into_any()
        >
            <p class="page__hint">"Change the status or dates of the order."</p>
        </PageFrame>
    }
}
