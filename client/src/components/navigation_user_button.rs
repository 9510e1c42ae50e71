//! The app's own avatar button: themed, 48px, opening `/account` as a page.
//!
//! The theme preference lives in browser storage, so the server render and
//! the first hydrated render both start unthemed. An effect reads the stored
//! preference once mounted and re-renders the button with it.

#[cfg(test)]
#[path = "navigation_user_button_test.rs"]
mod navigation_user_button_test;

use leptos::prelude::*;
use users::DEFAULT_USER_PROFILE_URL;

use super::user_button::{Appearance, DEFAULT_AVATAR_BOX, UserButton, UserProfileMode};
use crate::util::theme;

/// 48px avatar box, plus `base_theme` when one is known.
pub fn navigation_appearance(base_theme: Option<&str>) -> Appearance {
    let appearance = Appearance::default().with_element("avatarBox", DEFAULT_AVATAR_BOX);
    match base_theme {
        Some(base) => appearance.with_base_theme(base),
        None => appearance,
    }
}

#[component]
pub fn NavigationUserButton(#[prop(optional, into)] image_url: Option<String>) -> impl IntoView {
    let base_theme = RwSignal::new(None::<&'static str>);
    Effect::new(move || base_theme.set(theme::read_preference().base_theme()));

    let image_url = image_url.unwrap_or_default();
    move || {
        view! {
            <UserButton
                appearance=navigation_appearance(base_theme.get())
                user_profile_mode=UserProfileMode::Navigation
                user_profile_url=DEFAULT_USER_PROFILE_URL
                image_url=image_url.clone()
            />
        }
    }
}
