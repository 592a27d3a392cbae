//! Wire DTOs exchanged with the identity backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON so serde round-trips stay
//! lossless. Payload types carry exactly the fields the backend accepts; form
//! inputs that exist only for client-side checks (password confirmation) never
//! reach this module.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /sign-up/email`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpPayload {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /sign-in/email`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInPayload {
    pub email: String,
    pub password: String,
}

/// External identity providers offered next to the email forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    GitHub,
    Google,
}

impl SocialProvider {
    pub const ALL: [Self; 2] = [Self::GitHub, Self::Google];

    /// Provider id understood by the backend.
    pub fn id(self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::Google => "google",
        }
    }

    /// Human-readable button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::GitHub => "Continue with GitHub",
            Self::Google => "Continue with Google",
        }
    }
}

/// Body of `POST /sign-in/social`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSignInPayload {
    pub provider: SocialProvider,
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

/// Response of `POST /sign-in/social`: the provider authorization URL.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SocialSignInResponse {
    pub url: Option<String>,
    #[serde(default)]
    pub redirect: bool,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub code: Option<String>,
}

/// Authenticated account as reported by `GET /get-session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub image: Option<String>,
}

/// Session record metadata. Tokens are opaque to the client and never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: String,
    pub user_id: String,
    pub expires_at: String,
}

/// Current session: the record plus its user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub session: SessionRecord,
    pub user: User,
}
