use std::rc::Rc;

use contracts::system::auth::{AdminPolicy, AuthorizationPolicy, IdentityProvider};
use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use crate::shared::theme::PreferenceHandle;
use crate::system::auth::context::SessionHandle;
use crate::system::auth::provider::IdentityToolkitProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    // Theme first, so the first paint and the loading screen use it.
    let prefs = PreferenceHandle::load(&config);

    let provider: Rc<dyn IdentityProvider> = Rc::new(IdentityToolkitProvider::new(&config));
    let policy: Rc<dyn AuthorizationPolicy> =
        Rc::new(AdminPolicy::new(config.access.admin_email.clone()));
    let session = SessionHandle::mount(provider, policy);

    view! {
        <AppRoutes session=session prefs=prefs />
    }
}
