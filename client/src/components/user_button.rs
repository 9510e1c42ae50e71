//! Avatar button linking to the user's profile.

#[cfg(test)]
#[path = "user_button_test.rs"]
mod user_button_test;

use std::collections::BTreeMap;

use leptos::prelude::*;
use users::{DEFAULT_USER_PROFILE_URL, MockUser};

use crate::state::auth::{UseUser, use_user};

/// Class applied to the avatar when `appearance.elements.avatarBox` is unset.
pub const DEFAULT_AVATAR_BOX: &str = "h-[48px] w-[48px]";

const AVATAR_BOX_ELEMENT: &str = "avatarBox";

/// Styling overrides, keyed like the hosted provider's `appearance` prop.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Appearance {
    /// Theme name (e.g. `"dark"`); surfaced as a `data-theme` hint only.
    pub base_theme: Option<String>,
    /// Element name -> extra class string.
    pub elements: BTreeMap<String, String>,
}

impl Appearance {
    #[must_use]
    pub fn with_base_theme(mut self, theme: impl Into<String>) -> Self {
        self.base_theme = Some(theme.into());
        self
    }

    #[must_use]
    pub fn with_element(mut self, element: impl Into<String>, class: impl Into<String>) -> Self {
        self.elements.insert(element.into(), class.into());
        self
    }
}

/// How the hosted component opens the profile. Accepted for API parity; the
/// mock always links to `user_profile_url`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UserProfileMode {
    #[default]
    Modal,
    Navigation,
}

/// Explicit non-blank `image_url`, otherwise the user's own avatar.
pub fn avatar_src(image_url: Option<&str>, user: &MockUser) -> String {
    image_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(user.image_url.as_str())
        .to_owned()
}

pub fn avatar_box_class(appearance: Option<&Appearance>) -> &str {
    appearance
        .and_then(|a| a.elements.get(AVATAR_BOX_ELEMENT))
        .map_or(DEFAULT_AVATAR_BOX, String::as_str)
}

pub fn profile_href(user_profile_url: Option<&str>) -> &str {
    user_profile_url.unwrap_or(DEFAULT_USER_PROFILE_URL)
}

#[component]
pub fn UserButton(
    #[prop(optional)] appearance: Option<Appearance>,
    #[prop(optional)] user_profile_mode: Option<UserProfileMode>,
    #[prop(optional, into)] user_profile_url: Option<String>,
    #[prop(optional, into)] image_url: Option<String>,
) -> impl IntoView {
    let _ = user_profile_mode;
    let UseUser { user, .. } = use_user();

    let src = avatar_src(image_url.as_deref(), &user);
    let class = format!("rounded-full {}", avatar_box_class(appearance.as_ref()));
    let href = profile_href(user_profile_url.as_deref()).to_owned();
    let theme = appearance.and_then(|a| a.base_theme);

    view! {
        <a href=href class="block" data-theme=theme>
            <img src=src alt="Avatar" width="48" height="48" class=class/>
        </a>
    }
}
