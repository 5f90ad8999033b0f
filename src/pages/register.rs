//! Registration page creating an account with a display username.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::error::Error;

/// Delay between the success message and the redirect to the list view.
#[cfg(feature = "csr")]
const REGISTERED_REDIRECT_MS: u64 = 1500;

/// The only client-side validation: both password fields must agree.
pub(crate) fn validate_registration(password: &str, confirm: &str) -> Result<(), Error> {
    if password != confirm {
        return Err(Error::Validation("Passwords do not match.".to_owned()));
    }
    Ok(())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let client = expect_context::<crate::net::SupabaseClient>();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if let Err(err) = validate_registration(&password.get(), &confirm.get()) {
            error.set(Some(err.message()));
            return;
        }
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let email_value = email.get_untracked().trim().to_owned();
                let username_value = username.get_untracked().trim().to_owned();
                let password_value = password.get_untracked();
                match client.sign_up(&email_value, &password_value, &username_value).await {
                    Ok(_session) => {
                        error.set(None);
                        message.set(Some("Registration successful!".to_owned()));
                        busy.set(false);
                        gloo_timers::future::sleep(std::time::Duration::from_millis(
                            REGISTERED_REDIRECT_MS,
                        ))
                        .await;
                        navigate("/home", NavigateOptions::default());
                    }
                    Err(err) => {
                        message.set(None);
                        error.set(Some(err.message()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&client, &navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an Account. It's easy and fast!"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm Password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Please wait..." } else { "Register" }}
                    </button>
                </form>
                <a href="/" class="auth-link">
                    "Already have an account?"
                </a>
                <Show when=move || error.get().is_some()>
                    <p class="auth-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || message.get().is_some()>
                    <p class="auth-success">{move || message.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
