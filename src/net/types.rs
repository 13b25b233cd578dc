//! Wire DTOs returned by the identity service.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Profile of the signed-in user as returned by `/api/user/profile`.
///
/// Every field is optional: `/api/auth/me` may answer with an empty object,
/// which still proves the session is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub enabled: Option<bool>,
    pub email_verified: Option<bool>,
}

impl UserProfile {
    /// Best human-readable name: full name, then username, then email.
    pub fn display_name(&self) -> Option<String> {
        let non_empty = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        };
        let full = [non_empty(&self.first_name), non_empty(&self.last_name)]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        if !full.is_empty() {
            return Some(full);
        }
        non_empty(&self.username).or_else(|| non_empty(&self.email))
    }

    /// `true` when the body carried no identifying field at all.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.username.is_none() && self.email.is_none() && self.display_name().is_none()
    }
}
