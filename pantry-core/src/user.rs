use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An account record as seeded at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Recipe ids. Nothing checks that these still exist.
    #[serde(default)]
    pub favorites: BTreeSet<String>,
}

impl User {
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// The identity held by the session provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl UserProfile {
    /// Profile installed by the demo sign-in flow.
    pub fn demo() -> Self {
        Self {
            id: "user1".to_string(),
            name: "Robby Jay Ibale".to_string(),
            email: "ibalerobbyjay@gmail.com".to_string(),
        }
    }

    /// Overwrite the fields present in `update`, keep the rest.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
    }
}

/// Partial profile edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
