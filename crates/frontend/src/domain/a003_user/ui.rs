use contracts::routes::AppRoute;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{PAGE_CAT_DETAIL, PAGE_CAT_LIST};

#[component]
pub fn UserList() -> impl IntoView {
    view! {
        <PageFrame
            page_id="a003_user--list"
            category=PAGE_CAT_LIST
            title=AppRoute::Users.title()
            actions=view! { <A href=AppRoute::AddUser.path()>"Add user"</A> }.into_any()
        >
            <p class="page__hint">"Customer accounts registered with the rental service."</p>
        </PageFrame>
    }
}

#[component]
pub fn AddUser() -> impl IntoView {
    view! {
        <PageFrame page_id="a003_user--detail" category=PAGE_CAT_DETAIL title=AppRoute::AddUser.title()>
            <p class="page__hint">"Create a customer account."</p>
        </PageFrame>
    }
}
