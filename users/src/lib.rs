//! Mock identities shared by the server and the Leptos client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chat app normally authenticates through a hosted identity provider.
//! In development it runs against this crate instead: a fixed roster of
//! fabricated users, one of which is "logged in" according to the
//! `mock_user_id` cookie. Both the server render and the hydrated browser app
//! resolve the active user through the same [`Registry`] and cookie format.

pub mod cookie;
pub mod registry;

pub use registry::{DEFAULT_MOCK_USER_ID, EmailAddress, MockUser, Registry, RegistryError};

/// Path the sign-in shims and `redirect_to_sign_in` navigate to.
pub const SIGN_IN_PATH: &str = "/sign-in";

/// Path the `SignIn`/`SignUp` shims bounce to, since every session is signed in.
pub const AFTER_SIGN_IN_PATH: &str = "/";

/// Default target of the avatar link rendered by `UserButton`.
pub const DEFAULT_USER_PROFILE_URL: &str = "/account";
