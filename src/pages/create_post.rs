//! Create-post page.

#[cfg(test)]
#[path = "create_post_test.rs"]
mod create_post_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::error::Error;
use crate::state::blog::BlogState;

/// Text for the blocking alert shown when a create fails.
pub(crate) fn create_failure_alert(err: &Error) -> String {
    format!("Failed to create post: {}", err.message())
}

#[component]
pub fn CreatePostPage() -> impl IntoView {
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());

    let blog = expect_context::<RwSignal<BlogState>>();
    let client = expect_context::<crate::net::SupabaseClient>();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if blog.with_untracked(|s| s.creating) {
            return;
        }
        let title_value = title.get_untracked().trim().to_owned();
        let content_value = content.get_untracked();

        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::state::ops::create_post(&client, blog, title_value, content_value)
                    .await
                {
                    Ok(()) => navigate("/home", NavigateOptions::default()),
                    Err(err) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.alert_with_message(&create_failure_alert(&err));
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (title_value, content_value, &client, &navigate);
    };

    view! {
        <div class="editor-page">
            <h1>"Create new Blog:"</h1>
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
                    disabled=move || blog.get().creating
                >
                    {move || if blog.get().creating { "Posting content..." } else { "Post Blog" }}
                </button>
            </form>
        </div>
    }
}
