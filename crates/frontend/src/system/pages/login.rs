use leptos::prelude::*;

use crate::system::onboarding::context::use_onboarding;

/// Login form. Credentials are not verified on the client; submitting marks
/// the session authenticated and the public gate sends the user forward.
#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let ctx = use_onboarding();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if username.get().trim().is_empty() || password.get().is_empty() {
            set_error_message.set(Some("Enter a username and password".to_string()));
            return;
        }

        set_error_message.set(None);
        ctx.login();
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Admin Dashboard"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="admin"
                            value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <button type="submit" class="btn-primary">
                        "Sign in"
                    </button>
                </form>
            </div>
        </div>
    }
}
