use contracts::system::auth::Credentials;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::SessionHandle;

#[component]
pub fn LoginPage(session: SessionHandle) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<&'static str>::None);

    let is_loading = move || session.busy.get();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.busy.get_untracked() {
            return;
        }

        let credentials = Credentials::new(email.get_untracked(), password.get_untracked());
        set_error_message.set(None);

        spawn_local(async move {
            // On success the gate swaps this page out for the dashboard.
            if let Err(e) = session.login(credentials).await {
                set_error_message.set(Some(e.user_message()));
                set_password.set(String::new());
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Rental Admin"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message" role="alert">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            autocomplete="username"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=is_loading
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=is_loading
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=is_loading
                    >
                        {move || if is_loading() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
