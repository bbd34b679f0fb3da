use std::rc::Rc;

use contracts::system::auth::{AuthError, AuthorizationPolicy, Credentials, IdentityProvider};
use contracts::system::session::{SessionController, SessionListener, SessionState};
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

type Controller = Rc<SessionController<dyn IdentityProvider>>;

/// Leptos binding of the session controller.
///
/// Created once by `App`; passed to the components that need it.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    pub state: ReadSignal<SessionState>,
    /// Sign-in or sign-out in flight.
    pub busy: RwSignal<bool>,
    controller: StoredValue<Controller, LocalStorage>,
}

impl SessionHandle {
    /// Build the controller, subscribe it to the provider and release the
    /// subscription when the owning component is cleaned up.
    pub fn mount(
        provider: Rc<dyn IdentityProvider>,
        policy: Rc<dyn AuthorizationPolicy>,
    ) -> Self {
        let (state, set_state) = signal(SessionState::default());
        let listener: SessionListener = Rc::new(move |next| set_state.set(next));

        let controller: Controller = Rc::new(SessionController::new(provider, policy, listener));
        controller.mount();

        let controller = StoredValue::new_local(controller);
        on_cleanup(move || {
            controller.try_with_value(|controller| controller.teardown());
        });

        Self {
            state,
            busy: RwSignal::new(false),
            controller,
        }
    }

    pub async fn login(self, credentials: Credentials) -> Result<(), AuthError> {
        let controller = self.controller.get_value();
        self.busy.set(true);
        let result = controller.login(&credentials).await;
        self.busy.set(controller.is_busy());
        result
    }

    pub async fn logout(self) -> Result<(), AuthError> {
        let controller = self.controller.get_value();
        self.busy.set(true);
        let result = controller.logout().await;
        self.busy.set(controller.is_busy());
        result
    }
}
