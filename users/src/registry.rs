//! Mock user records and the ordered registry they live in.
//!
//! DESIGN
//! ======
//! The registry is built once at bootstrap and handed around explicitly
//! (`Arc<Registry>` on the server, a component prop on the client). The first
//! entry is the default user. Lookups never fail: an unknown id resolves to
//! the default record, which is what lets a stale or hand-edited cookie keep
//! working.

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Id of the first entry in [`Registry::builtin`].
pub const DEFAULT_MOCK_USER_ID: &str = "mock-user-1";

const BUILTIN_IMAGE_URL: &str = "/logo.png";

/// Error returned when a registry cannot be constructed.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The roster contained no users; there would be no default.
    #[error("mock user registry must contain at least one user")]
    Empty,
    /// Two records share an id.
    #[error("duplicate mock user id: {0}")]
    DuplicateId(String),
    /// The YAML roster could not be parsed.
    #[error("failed to parse mock user roster: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// One email address on a mock user, shaped like the provider's API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAddress {
    pub email_address: String,
}

/// A fabricated identity standing in for a real account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockUser {
    /// Unique id within the registry; also the cookie value that selects it.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Avatar source, relative to the site root or an absolute HTTPS URL.
    pub image_url: String,
    #[serde(default)]
    pub email_addresses: Vec<EmailAddress>,
}

impl MockUser {
    fn builtin(id: &str, first_name: &str, email: &str) -> Self {
        Self {
            id: id.to_owned(),
            first_name: first_name.to_owned(),
            last_name: "Test".to_owned(),
            image_url: BUILTIN_IMAGE_URL.to_owned(),
            email_addresses: vec![EmailAddress { email_address: email.to_owned() }],
        }
    }

    /// `"First Last"`, trimmed when either part is empty.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }

    /// First email address, if the record has any.
    #[must_use]
    pub fn primary_email(&self) -> Option<&str> {
        self.email_addresses.first().map(|e| e.email_address.as_str())
    }
}

/// Ordered, non-empty roster of mock users with unique ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registry {
    users: Vec<MockUser>,
}

impl Registry {
    /// Build a registry, enforcing non-emptiness and id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Empty`] for an empty roster and
    /// [`RegistryError::DuplicateId`] when an id appears twice.
    pub fn new(users: Vec<MockUser>) -> Result<Self, RegistryError> {
        if users.is_empty() {
            return Err(RegistryError::Empty);
        }
        let mut seen = HashSet::with_capacity(users.len());
        for user in &users {
            if !seen.insert(user.id.as_str()) {
                return Err(RegistryError::DuplicateId(user.id.clone()));
            }
        }
        Ok(Self { users })
    }

    /// The stock three-user roster: Alice, Bob and Carol.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            users: vec![
                MockUser::builtin(DEFAULT_MOCK_USER_ID, "Alice", "alice@test.com"),
                MockUser::builtin("mock-user-2", "Bob", "bob@test.com"),
                MockUser::builtin("mock-user-3", "Carol", "carol@test.com"),
            ],
        }
    }

    /// Load a roster from a YAML sequence of user records.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Parse`] for malformed YAML and the
    /// [`Registry::new`] errors for an invalid roster.
    pub fn from_yaml(raw: &str) -> Result<Self, RegistryError> {
        let users: Vec<MockUser> = serde_yaml::from_str(raw)?;
        Self::new(users)
    }

    /// All users in registry order.
    #[must_use]
    pub fn users(&self) -> &[MockUser] {
        &self.users
    }

    /// The first entry.
    #[must_use]
    pub fn default_user(&self) -> &MockUser {
        // Non-empty by construction.
        &self.users[0]
    }

    #[must_use]
    pub fn default_user_id(&self) -> &str {
        &self.default_user().id
    }

    /// Exact lookup; `None` when the id is not registered.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&MockUser> {
        self.users.iter().find(|u| u.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Total lookup: the matching record, or the default user.
    #[must_use]
    pub fn get(&self, id: &str) -> &MockUser {
        self.find(id).unwrap_or_else(|| self.default_user())
    }

    /// The registered id for `candidate`, or the default id when it is absent
    /// or unknown.
    #[must_use]
    pub fn resolve_id(&self, candidate: Option<&str>) -> &str {
        match candidate.and_then(|id| self.find(id)) {
            Some(user) => &user.id,
            None => self.default_user_id(),
        }
    }

    /// The record selected by `candidate`, with the same fallback as [`Self::resolve_id`].
    #[must_use]
    pub fn resolve(&self, candidate: Option<&str>) -> &MockUser {
        self.get(self.resolve_id(candidate))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
