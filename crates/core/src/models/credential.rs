use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCredentialRequest {
    pub username: String,
    pub password: String,
}

/// Outcome of a credential check. `display_name` is only present when valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialCheck {
    pub valid: bool,
    pub display_name: Option<String>,
}

impl CredentialCheck {
    pub fn rejected() -> Self {
        Self {
            valid: false,
            display_name: None,
        }
    }

    pub fn accepted(display_name: String) -> Self {
        Self {
            valid: true,
            display_name: Some(display_name),
        }
    }
}
