//! Landing page: avatar, user switcher and signed-in gated content.

use leptos::prelude::*;
use users::SIGN_IN_PATH;

use crate::components::{MockUserSwitcher, NavigationUserButton, SignedIn, SignedOut};
use crate::state::auth::use_user;

#[component]
pub fn HomePage() -> impl IntoView {
    let user = use_user().user;
    let greeting = format!("Welcome back, {}.", user.first_name);

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <NavigationUserButton/>
                <MockUserSwitcher/>
            </header>
            <SignedIn>
                <p class="home-page__greeting">{greeting}</p>
            </SignedIn>
            <SignedOut>
                <a href=SIGN_IN_PATH>"Sign in"</a>
            </SignedOut>
        </div>
    }
}
