//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::private_route::PrivateRoute;
use crate::config::Config;
use crate::net::SupabaseClient;
use crate::pages::{
    create_post::CreatePostPage, home::HomePage, login::LoginPage, register::RegisterPage,
    update_post::UpdatePostPage,
};
use crate::state::blog::BlogState;
use crate::state::session::SessionState;

/// Root application component.
///
/// Provides the Supabase client and shared state contexts, then sets up
/// client-side routing. Everything behind `PrivateRoute` re-checks the
/// session on mount.
#[component]
pub fn App(config: Config) -> impl IntoView {
    provide_meta_context();

    let blog = RwSignal::new(BlogState::default());
    let session = RwSignal::new(SessionState::default());

    provide_context(SupabaseClient::new(&config));
    provide_context(blog);
    provide_context(session);

    view! {
        <Title text="Blogs"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("home")
                    view=|| view! { <PrivateRoute><HomePage/></PrivateRoute> }
                />
                <Route
                    path=StaticSegment("create-post")
                    view=|| view! { <PrivateRoute><CreatePostPage/></PrivateRoute> }
                />
                <Route
                    path=StaticSegment("update-post")
                    view=|| view! { <Redirect path="/home"/> }
                />
                <Route
                    path=(StaticSegment("update-post"), ParamSegment("id"))
                    view=|| view! { <PrivateRoute><UpdatePostPage/></PrivateRoute> }
                />
            </Routes>
        </Router>
    }
}
