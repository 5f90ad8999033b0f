//! Home page listing the signed-in user's posts with pagination.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It resolves the current user
//! once per mount, then refetches the post window whenever the page number
//! or the resolved user changes. Page changes themselves never fetch; this
//! effect is the only fetch trigger.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::blog::{BlogAction, BlogState, apply};
use crate::state::session::SessionState;

/// Previous-page button gating.
pub(crate) fn can_go_prev(page: u32, fetching: bool) -> bool {
    page > 1 && !fetching
}

/// Next-page button gating. `has_more` is a heuristic, so the worst case is
/// one extra empty page, never a missed one.
pub(crate) fn can_go_next(has_more: bool, fetching: bool) -> bool {
    has_more && !fetching
}

#[component]
pub fn HomePage() -> impl IntoView {
    let blog = expect_context::<RwSignal<BlogState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    // Stored handles keep the event closures `Copy` for re-rendered views.
    let client = StoredValue::new(expect_context::<crate::net::SupabaseClient>());
    let navigate = StoredValue::new(use_navigate());

    let page = Memo::new(move |_| blog.with(|s| s.page));

    // Resolve the current user once per mount. No caching: signing out in
    // another tab is caught on the next visit.
    #[cfg(feature = "csr")]
    {
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            session.update(|s| s.loading = true);
            let user = client.current_user().await;
            session.update(|s| {
                s.user = user;
                s.loading = false;
            });
        });
    }

    // Refetch whenever the page or the resolved user changes.
    #[cfg(feature = "csr")]
    {
        let owner = Memo::new(move |_| session.with(|s| s.user.as_ref().map(|u| u.id)));
        Effect::new(move || {
            let _page = page.get();
            let Some(owner) = owner.get() else {
                return;
            };
            let client = client.get_value();
            leptos::task::spawn_local(async move {
                crate::state::ops::fetch_posts(&client, blog, owner).await;
            });
        });
    }

    let on_prev = move |_| {
        let (page_now, fetching) = blog.with_untracked(|s| (s.page, s.fetching));
        if can_go_prev(page_now, fetching) {
            blog.update(|s| apply(s, BlogAction::PageChanged(page_now - 1)));
        }
    };

    let on_next = move |_| {
        let (page_now, has_more, fetching) =
            blog.with_untracked(|s| (s.page, s.has_more, s.fetching));
        if can_go_next(has_more, fetching) {
            blog.update(|s| apply(s, BlogAction::PageChanged(page_now + 1)));
        }
    };

    let on_delete = Callback::new(move |id: i64| {
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
        }
        #[cfg(not(feature = "csr"))]
        let _ = (id, client);
    });

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        {
            let client = client.get_value();
            let navigate = navigate.get_value();
            leptos::task::spawn_local(async move {
                client.sign_out().await;
                session.update(|s| s.user = None);
                navigate("/", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (client, navigate);
    };

    view! {
        <Show
            when=move || !session.get().loading
            fallback=|| view! { <p class="page-message">"Fetching your blogs..."</p> }
        >
            <div class="home-page">
                <nav class="home-page__nav">
                    <p class="home-page__welcome">
                        "Welcome, " {move || session.get().display_name()}
                    </p>
                    <button class="btn" on:click=on_logout>
                        "Log Out"
                    </button>
                </nav>

                <a href="/create-post" class="btn home-page__create">
                    "Create Blog"
                </a>

                <Show when=move || blog.get().fetching>
                    <p class="page-message">"Loading Posts..."</p>
                </Show>
                <Show when=move || blog.get().error.is_some()>
                    <p class="home-page__error">{move || blog.get().error.unwrap_or_default()}</p>
                </Show>
                <Show when=move || {
                    let s = blog.get();
                    !s.fetching && s.error.is_none() && s.posts.is_empty()
                }>
                    <p class="page-message">"No blogs yet."</p>
                </Show>

                <div class="home-page__pager">
                    <button
                        class="btn"
                        on:click=on_prev
                        disabled=move || {
                            let s = blog.get();
                            !can_go_prev(s.page, s.fetching)
                        }
                    >
                        "<"
                    </button>
                    <span class="home-page__page">"Page " {move || page.get()}</span>
                    <button
                        class="btn"
                        on:click=on_next
                        disabled=move || {
                            let s = blog.get();
                            !can_go_next(s.has_more, s.fetching)
                        }
                    >
                        ">"
                    </button>
                </div>

                <ul class="post-list">
                    {move || {
                        blog.get()
                            .posts
                            .into_iter()
                            .map(|post| {
                                let id = post.id;
                                view! {
                                    <li class="post-card">
                                        <a href=format!("/update-post/{id}")>
                                            <h2 class="post-card__title">{post.title.clone()}</h2>
                                            <p class="post-card__content">{post.content.clone()}</p>
                                            <p class="post-card__meta">
                                                "Created at: "
                                                {crate::util::format::local_datetime(&post.created_at)}
                                            </p>
                                        </a>
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| on_delete.run(id)
                                        >
                                            "Delete Blog"
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </div>
        </Show>
    }
}
