use anyhow::Result;
use eventdesk_core::auth::{HttpIdentityProvider, IdentityProvider};
use eventdesk_core::config::EventDeskConfig;
use owo_colors::OwoColorize;

pub async fn run(config: &EventDeskConfig) -> Result<()> {
    // A provider-side sign-out failure is not fatal; the local session
    // is cleared either way.
    let provider = HttpIdentityProvider::new(config.auth_url.clone());
    if let Err(e) = provider.sign_out().await {
        tracing::debug!(error = %e, "provider sign-out failed");
    }

    let sessions = super::open_sessions()?;
    sessions.clear()?;

    println!("{}", "Not logged in.".dimmed());
    Ok(())
}
