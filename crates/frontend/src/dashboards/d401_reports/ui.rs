use contracts::routes::AppRoute;
use leptos::prelude::*;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

#[component]
pub fn ReportsDashboard() -> impl IntoView {
    view! {
        <PageFrame page_id="d401_reports--dashboard" category=PAGE_CAT_DASHBOARD title=AppRoute::Reports.title()>
            <p class="page__hint">"Revenue and utilization reports for the fleet."</p>
        </PageFrame>
    }
}
