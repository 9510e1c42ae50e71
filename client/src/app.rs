//! Root application component with routing and the mock auth provider.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use users::Registry;

use crate::pages::{account::AccountPage, home::HomePage, sign_in::{SignInPage, SignUpPage}};
use crate::state::auth::MockAuthProvider;
use crate::util::bootstrap::{REGISTRY_ELEMENT_ID, registry_json};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `initial_user_id` is the id the server resolved from the request's
/// selection cookie. The roster is embedded for the hydrated app.
pub fn shell(options: LeptosOptions, registry: Arc<Registry>, initial_user_id: Option<String>) -> impl IntoView {
    let roster = registry_json(&registry);
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
                <script type="application/json" id=REGISTRY_ELEMENT_ID inner_html=roster></script>
            </head>
            <body>
                <App registry initial_user_id/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App(registry: Arc<Registry>, #[prop(default = None)] initial_user_id: Option<String>) -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Discord Clone (mock auth)"/>

        <MockAuthProvider registry initial_user_id>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("account") view=AccountPage/>
                    <Route path=StaticSegment("sign-in") view=SignInPage/>
                    <Route path=StaticSegment("sign-up") view=SignUpPage/>
                </Routes>
            </Router>
        </MockAuthProvider>
    }
}
