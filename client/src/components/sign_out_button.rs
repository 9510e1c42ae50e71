//! Sign-out wrapper. There is no session to tear down, so it only navigates.

use leptos::prelude::*;
use users::SIGN_IN_PATH;

use crate::util::browser;

/// Wrap `children` in a clickable element that navigates to the sign-in path.
#[component]
pub fn SignOutButton(children: Children) -> impl IntoView {
    view! {
        <span class="sign-out-button" role="button" on:click=move |_| browser::hard_navigate(SIGN_IN_PATH)>
            {children()}
        </span>
    }
}
