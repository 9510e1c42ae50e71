//! Sign-in and sign-up routes; both bounce back to the app.

use leptos::prelude::*;

use crate::components::{SignIn, SignUp};

#[component]
pub fn SignInPage() -> impl IntoView {
    view! { <SignIn/> }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! { <SignUp/> }
}
