pub mod check;
pub mod checklist;
pub mod edit;
pub mod export;
pub mod login;
pub mod logout;
pub mod seed;
pub mod show;

use anyhow::Result;
use eventdesk_core::auth::{Principal, SessionStore};
use eventdesk_core::config::EventDeskConfig;
use eventdesk_core::store::{EventStore, FileStore};

pub fn open_store(config: &EventDeskConfig) -> EventStore<FileStore> {
    EventStore::new(FileStore::new(config.data_path()))
}

pub fn open_sessions() -> Result<SessionStore> {
    Ok(SessionStore::open_default()?)
}

/// The signed-in principal, or an error telling the user how to log in.
pub fn require_principal(sessions: &SessionStore) -> Result<Principal> {
    match sessions.current()? {
        Some(principal) => Ok(principal),
        None => anyhow::bail!(
            "You must be logged in to do that.\n\n\
            Sign in with:\n  \
            eventdesk login"
        ),
    }
}

/// Status line mirroring the page header: who is signed in, if anyone.
pub fn auth_status(sessions: &SessionStore) -> Result<String> {
    Ok(match sessions.current()? {
        Some(principal) => format!("Logged in as {}", principal.email),
        None => "Not logged in.".to_string(),
    })
}
