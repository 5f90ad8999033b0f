//! Route guard for authenticated-only pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected navigation re-queries session state; nothing is cached
//! across mounts, so a tab that signed out elsewhere cannot keep rendering
//! guarded views from a stale answer.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Guard resolution while the session query settles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum GuardStatus {
    #[default]
    Pending,
    Authenticated,
    Denied,
}

/// Defers rendering `children` until a live session is confirmed and
/// redirects to the login page otherwise.
#[component]
pub fn PrivateRoute(children: ChildrenFn) -> impl IntoView {
    let status = RwSignal::new(GuardStatus::Pending);

    #[cfg(feature = "csr")]
    {
        let client = expect_context::<crate::net::SupabaseClient>();
        leptos::task::spawn_local(async move {
            let next = if client.current_session().is_some() {
                GuardStatus::Authenticated
            } else {
                GuardStatus::Denied
            };
            status.set(next);
        });
    }

    let navigate = use_navigate();
    Effect::new(move || {
        if status.get() == GuardStatus::Denied {
            navigate("/", NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || status.get() == GuardStatus::Authenticated
            fallback=|| view! { <p class="page-message">"Loading..."</p> }
        >
            {children()}
        </Show>
    }
}
