//! Static profile card for the active mock user.

#[cfg(test)]
#[path = "user_profile_test.rs"]
mod user_profile_test;

use leptos::prelude::*;
use users::MockUser;

use super::user_button::Appearance;
use crate::state::auth::use_user;

pub const MOCK_MODE_LABEL: &str = "(Clerk mock mode — no real auth)";

pub fn name_line(user: &MockUser) -> String {
    format!("Name: {} {}", user.first_name, user.last_name)
}

pub fn email_line(user: &MockUser) -> String {
    format!("Email: {}", user.primary_email().unwrap_or_default())
}

#[component]
pub fn UserProfile(#[prop(optional)] appearance: Option<Appearance>) -> impl IntoView {
    let _ = appearance;
    let user = use_user().user;

    view! {
        <div class="rounded-lg border p-6 dark:border-zinc-700 dark:bg-zinc-800/50">
            <h2 class="text-lg font-semibold dark:text-white">"Mock User Profile"</h2>
            <div class="mt-4 space-y-2 text-sm text-zinc-600 dark:text-zinc-300">
                <p>{name_line(&user)}</p>
                <p>{email_line(&user)}</p>
                <p class="text-xs text-zinc-500">{MOCK_MODE_LABEL}</p>
            </div>
        </div>
    }
}
