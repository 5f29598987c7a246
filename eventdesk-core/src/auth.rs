//! Identity provider client and persisted session.
//!
//! Authentication is delegated to an external identity provider; this
//! module only holds the HTTP client for it and the session file that
//! carries the signed-in principal between CLI invocations. A missing
//! session file means "not logged in".

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{EventDeskError, EventDeskResult};

/// The authenticated user identity returned by the identity provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub email: String,
    pub token: String,
}

/// External identity provider. Failures are terminal for that attempt;
/// there are no retries beyond the user re-running the command.
#[async_trait]
pub trait IdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> EventDeskResult<Principal>;
    async fn sign_out(&self) -> EventDeskResult<()>;
}

/// HTTP identity provider speaking JSON against a configured base URL.
pub struct HttpIdentityProvider {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct SignInResponse {
    email: String,
    token: String,
}

#[derive(Deserialize)]
struct ProviderError {
    error: String,
}

impl HttpIdentityProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpIdentityProvider {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> EventDeskResult<Principal> {
        let response = self
            .client
            .post(self.endpoint("sign-in"))
            .json(&SignInRequest { email, password })
            .send()
            .await
            .map_err(|e| EventDeskError::Auth(e.to_string()))?;

        if response.status().is_success() {
            let body: SignInResponse = response
                .json()
                .await
                .map_err(|e| EventDeskError::Auth(format!("malformed provider response: {e}")))?;

            Ok(Principal {
                email: body.email,
                token: body.token,
            })
        } else {
            // Surface the provider's own message when it sends one
            let message = response
                .json::<ProviderError>()
                .await
                .map(|e| e.error)
                .unwrap_or_else(|_| "invalid credentials".to_string());
            Err(EventDeskError::Auth(message))
        }
    }

    async fn sign_out(&self) -> EventDeskResult<()> {
        self.client
            .post(self.endpoint("sign-out"))
            .send()
            .await
            .map_err(|e| EventDeskError::Auth(e.to_string()))?;
        Ok(())
    }
}

/// Session file contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Session {
    principal: Principal,
}

/// Persisted session under the config directory.
pub struct SessionStore {
    dir: PathBuf,
}

const SESSION_FILE: &str = "session.toml";

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        SessionStore { dir: dir.into() }
    }

    /// Session store at ~/.config/eventdesk/
    pub fn open_default() -> EventDeskResult<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| EventDeskError::Config("Could not determine config directory".into()))?
            .join("eventdesk");
        Ok(SessionStore::new(dir))
    }

    fn path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    /// The currently signed-in principal, if any.
    pub fn current(&self) -> EventDeskResult<Option<Principal>> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)?;
        let session: Session = toml::from_str(&content)
            .map_err(|e| EventDeskError::Config(format!("Corrupt session file: {e}")))?;
        Ok(Some(session.principal))
    }

    pub fn save(&self, principal: &Principal) -> EventDeskResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let session = Session {
            principal: principal.clone(),
        };
        let content = toml::to_string_pretty(&session)
            .map_err(|e| EventDeskError::Serialization(e.to_string()))?;

        let path = self.path();
        let temp = self.dir.join(format!("{SESSION_FILE}.tmp"));
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }

    pub fn clear(&self) -> EventDeskResult<()> {
        let path = self.path();
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }
}
