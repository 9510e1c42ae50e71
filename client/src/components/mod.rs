//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! These components stand in for the hosted identity provider's components
//! and keep its prop names, so pages can swap between the two without edits.
//! All of them read the active user from `MockAuthProvider`.

pub mod gate;
pub mod mock_user_switcher;
pub mod navigation_user_button;
pub mod redirect_notice;
pub mod sign_out_button;
pub mod user_button;
pub mod user_profile;

pub use gate::{SignedIn, SignedOut};
pub use mock_user_switcher::MockUserSwitcher;
pub use navigation_user_button::NavigationUserButton;
pub use redirect_notice::{SignIn, SignUp};
pub use sign_out_button::SignOutButton;
pub use user_button::{Appearance, UserButton, UserProfileMode};
pub use user_profile::UserProfile;
