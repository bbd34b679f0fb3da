use contracts::routes::{
    resolve, AppRoute, GateState, RouteResolution, DASHBOARD_PATH, LOGIN_PATH,
};
use leptos::prelude::*;
use leptos_router::components::{Redirect, Router};
use leptos_router::hooks::use_location;

use crate::dashboards::{OverviewDashboard, ReportsDashboard};
use crate::domain::a001_car::ui::{AddCar, CarList, EditCar};
use crate::domain::a002_order::ui::{EditOrder, OrderList};
use crate::domain::a003_user::ui::{AddUser, UserList};
use crate::domain::a004_message::ui::MessageList;
use crate::layout::Shell;
use crate::shared::theme::PreferenceHandle;
use crate::system::auth::context::SessionHandle;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::settings::SettingsPage;

/// Page for an authenticated route.
fn page_view(route: AppRoute, session: SessionHandle, prefs: PreferenceHandle) -> AnyView {
    match route {
        AppRoute::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        AppRoute::AddCar => view! { <AddCar /> }.into_any(),
        AppRoute::Cars => view! { <CarList /> }.into_any(),
        AppRoute::EditCar { id } => view! { <EditCar id=id /> }.into_any(),
        AppRoute::AddUser => view! { <AddUser /> }.into_any(),
        AppRoute::Users => view! { <UserList /> }.into_any(),
        AppRoute::Orders => view! { <OrderList /> }.into_any(),
        AppRoute::EditOrder { id } => view! { <EditOrder id=id /> }.into_any(),
        AppRoute::Messages => view! { <MessageList /> }.into_any(),
        AppRoute::Reports => view! { <ReportsDashboard /> }.into_any(),
        AppRoute::Settings => view! { <SettingsPage session=session prefs=prefs /> }.into_any(),
        // `resolve` never renders the login page for a signed-in session.
        AppRoute::Login => view! { <Redirect path=DASHBOARD_PATH /> }.into_any(),
    }
}

/// Which top-level view the outlet shows. The shell survives page changes.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Frame {
    Loading,
    ToLogin,
    ToDashboard,
    Login,
    Shell,
}

impl Frame {
    fn of(resolution: &RouteResolution) -> Self {
        match resolution {
            RouteResolution::Loading => Frame::Loading,
            RouteResolution::RedirectToLogin => Frame::ToLogin,
            RouteResolution::RedirectToDashboard => Frame::ToDashboard,
            RouteResolution::Render(AppRoute::Login) => Frame::Login,
            RouteResolution::Render(_) | RouteResolution::NotFound => Frame::Shell,
        }
    }
}

/// Picks the route set from the gate and the current location.
#[component]
fn GatedOutlet(session: SessionHandle, prefs: PreferenceHandle) -> impl IntoView {
    let location = use_location();

    let gate = Memo::new(move |_| GateState::derive(session.state.get(), prefs.state.get()));
    let resolution = Memo::new(move |_| resolve(gate.get(), &location.pathname.get()));
    let frame = Memo::new(move |_| resolution.with(Frame::of));

    let page = move || match resolution.get() {
        RouteResolution::Render(route) => page_view(route, session, prefs),
        _ => view! { <NotFoundPage /> }.into_any(),
    };

    move || match frame.get() {
        Frame::Loading => view! { <div class="app-loading">"Loading..."</div> }.into_any(),
        Frame::ToLogin => view! { <Redirect path=LOGIN_PATH /> }.into_any(),
        Frame::ToDashboard => view! { <Redirect path=DASHBOARD_PATH /> }.into_any(),
        Frame::Login => view! { <LoginPage session=session /> }.into_any(),
        Frame::Shell => view! {
            <Shell session=session prefs=prefs>
                {page}
            </Shell>
        }
        .into_any(),
    }
}

#[component]
pub fn AppRoutes(session: SessionHandle, prefs: PreferenceHandle) -> impl IntoView {
    view! {
        <Router>
            <GatedOutlet session=session prefs=prefs />
        </Router>
    }
}
