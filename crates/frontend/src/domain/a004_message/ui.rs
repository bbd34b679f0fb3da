use contracts::routes::AppRoute;
use leptos::prelude::*;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
pub fn MessageList() -> impl IntoView {
    view! {
        <PageFrame page_id="a004_message--list" category=PAGE_CAT_LIST title=AppRoute::Messages.title()>
            <p class="page__hint">"Contact form messages from customers."</p>
        </PageFrame>
    }
}
