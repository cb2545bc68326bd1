use serde::{Deserialize, Serialize};

/// One prior turn of a conversation, as supplied by the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    /// Gemini accepts exactly two roles. Anything that is not "user" is
    /// silently coerced to "model"; the frontend relies on this leniency.
    pub fn normalized_role(&self) -> &'static str {
        if self.role == "user" {
            "user"
        } else {
            "model"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Message;

    fn msg(role: &str) -> Message {
        Message {
            role: role.to_string(),
            content: "hi".to_string(),
        }
    }

    #[test]
    fn user_role_passes_through() {
        assert_eq!(msg("user").normalized_role(), "user");
    }

    #[test]
    fn unknown_roles_become_model() {
        assert_eq!(msg("model").normalized_role(), "model");
        assert_eq!(msg("system").normalized_role(), "model");
        assert_eq!(msg("assistant").normalized_role(), "model");
        assert_eq!(msg("").normalized_role(), "model");
    }

    #[test]
    fn role_match_is_case_sensitive() {
        assert_eq!(msg("User").normalized_role(), "model");
    }
}
