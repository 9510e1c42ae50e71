//! `SignIn` / `SignUp` stand-ins.
//!
//! Mock sessions are always authenticated, so both bounce straight back to the
//! app root once mounted in the browser. The server render shows a short
//! placeholder until that navigation lands.

use leptos::prelude::*;
use users::AFTER_SIGN_IN_PATH;

use super::user_button::Appearance;
use crate::util::browser;

pub const REDIRECT_NOTICE: &str = "Redirecting to app (mock auth)...";

#[component]
fn RedirectNotice() -> impl IntoView {
    Effect::new(move || browser::hard_navigate(AFTER_SIGN_IN_PATH));

    view! {
        <div class="flex flex-col items-center justify-center p-8">
            <p class="text-zinc-500">{REDIRECT_NOTICE}</p>
        </div>
    }
}

#[component]
pub fn SignIn(#[prop(optional)] appearance: Option<Appearance>) -> impl IntoView {
    let _ = appearance;
    view! { <RedirectNotice/> }
}

#[component]
pub fn SignUp(#[prop(optional)] appearance: Option<Appearance>) -> impl IntoView {
    let _ = appearance;
    view! { <RedirectNotice/> }
}
