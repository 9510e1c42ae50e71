//! Account page rendered behind the avatar link.

use leptos::prelude::*;

use crate::components::{SignOutButton, UserProfile};

#[component]
pub fn AccountPage() -> impl IntoView {
    view! {
        <div class="account-page">
            <UserProfile/>
            <SignOutButton>
                <button type="button" class="btn">"Sign out"</button>
            </SignOutButton>
        </div>
    }
}
