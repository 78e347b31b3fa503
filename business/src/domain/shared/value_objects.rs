use serde::{Deserialize, Serialize};

/// Identifier of a backend user account.
/// Products and settings are fetched per user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_user_id() {
        let user_id = UserId::new("42");
        assert_eq!(format!("{}", user_id), "42");
    }

    #[test]
    fn should_convert_numeric_backend_ids() {
        let user_id: UserId = 7u64.into();
        assert_eq!(user_id.as_str(), "7");
        assert_eq!(user_id, UserId::from("7"));
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let json = serde_json::to_string(&UserId::new("abc")).unwrap();
        assert_eq!(json, "\"abc\"");
    }
}
