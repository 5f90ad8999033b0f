//! Update-post page with an access-denied redirect for foreign posts.
//!
//! SYSTEM CONTEXT
//! ==============
//! The post id comes from the route. The form populates once the selected
//! post arrives; an authorization failure from any of the page's operations
//! switches to an access-denied notice and returns to the list view after a
//! fixed delay without further user action.

#[cfg(test)]
#[path = "update_post_test.rs"]
mod update_post_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::error::is_access_denied;
use crate::state::blog::BlogState;

/// How long the access-denied notice stays up before navigating home.
pub(crate) const ACCESS_DENIED_REDIRECT_MS: u64 = 3000;

/// Route parameter to row id. `None` for anything non-numeric.
pub(crate) fn parse_post_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok()
}

#[component]
pub fn UpdatePostPage() -> impl IntoView {
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let denied = RwSignal::new(false);

    let blog = expect_context::<RwSignal<BlogState>>();
    // Stored handles keep the event closures `Copy` for re-rendered views.
    let client = StoredValue::new(expect_context::<crate::net::SupabaseClient>());
    let navigate = StoredValue::new(use_navigate());
    let params = use_params_map();

    let post_id = Memo::new(move |_| params.with(|p| parse_post_id(p.get("id").as_deref())));
    let selected = Memo::new(move |_| blog.with(|s| s.selected.clone()));
    let error_msg = Memo::new(move |_| blog.with(|s| s.error.clone()));

    // Load the post whenever the route id changes.
    #[cfg(feature = "csr")]
    Effect::new(move || {
        let Some(id) = post_id.get() else {
            return;
        };
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            crate::state::ops::select_post(&client, blog, id).await;
        });
    });

    // Populate the form once the selected post arrives.
    Effect::new(move || {
        if let Some(post) = selected.get() {
            title.set(post.title);
            content.set(post.content);
        }
    });

    // An authorization failure flips to the access-denied notice, then
    // returns home on its own.
    Effect::new(move || {
        let Some(message) = error_msg.get() else {
            return;
        };
        if !is_access_denied(&message) {
            return;
        }
        denied.set(true);
        #[cfg(feature = "csr")]
        {
            let navigate = navigate.get_value();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(
                    ACCESS_DENIED_REDIRECT_MS,
                ))
                .await;
                navigate("/home", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = navigate;
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = post_id.get_untracked() else {
            return;
        };
        if blog.with_untracked(|s| s.updating) {
            return;
        }
        let title_value = title.get_untracked();
        let content_value = content.get_untracked();

        #[cfg(feature = "csr")]
        {
            let client = client.get_value();
            let navigate = navigate.get_value();
            leptos::task::spawn_local(async move {
                match crate::state::ops::update_post(&client, blog, id, title_value, content_value)
                    .await
                {
                    Ok(()) => navigate("/home", NavigateOptions::default()),
                    Err(err) => leptos::logging::warn!("updating blog failed: {err}"),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (id, title_value, content_value, client, navigate);
    };

    let on_delete = move |_| {
        let Some(id) = post_id.get_untracked() else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            let confirmed = web_sys::window().map_or(false, |w| {
                w.confirm_with_message("Are you sure you want to delete this blog?")
                    .unwrap_or(false)
            });
            if !confirmed {
                return;
            }
            let client = client.get_value();
            leptos::task::spawn_local(async move {
                crate::state::ops::delete_post(&client, blog, id).await;
            });
            navigate.get_value()("/home", NavigateOptions::default());
        }
        #[cfg(not(feature = "csr"))]
        let _ = (id, client, navigate);
    };

    view! {
        <Show
            when=move || !denied.get()
            fallback=|| {
                view! {
                    <div class="page-message">
                        "This blog is inaccessible, redirecting back to home page..."
                    </div>
                }
            }
        >
            <Show
                when=move || selected.get().is_some()
                fallback=|| view! { <div class="page-message">"Loading post data..."</div> }
            >
                <div class="editor-page">
                    <h1>"Update Blog:"</h1>
                    <form class="editor-form" on:submit=on_submit>
                        <input
                            class="editor-input"
                            type="text"
                            placeholder="Title"
                            required
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                        <textarea
                            class="editor-textarea"
                            placeholder="Write your blog here..."
                            required
                            prop:value=move || content.get()
                            on:input=move |ev| content.set(event_target_value(&ev))
                        ></textarea>
                        <button
                            class="btn btn--primary"
                            type="submit"
                            disabled=move || blog.get().updating
                        >
                            {move || {
                                if blog.get().updating { "Updating content..." } else { "Update" }
                            }}
                        </button>
                        <button class="btn btn--danger" type="button" on:click=on_delete>
                            "Delete Blog"
                        </button>
                    </form>
                </div>
            </Show>
        </Show>
    }
}
