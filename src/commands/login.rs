use anyhow::Result;
use dialoguer::{Input, Password};
use eventdesk_core::auth::{HttpIdentityProvider, IdentityProvider};
use eventdesk_core::config::EventDeskConfig;
use owo_colors::OwoColorize;

pub async fn run(config: &EventDeskConfig, email: Option<String>) -> Result<()> {
    let email = match email {
        Some(e) => e,
        None => Input::<String>::new()
            .with_prompt("  Email")
            .interact_text()?,
    };

    let password = Password::new().with_prompt("  Password").interact()?;

    let provider = HttpIdentityProvider::new(config.auth_url.clone());

    match provider.sign_in(&email, &password).await {
        Ok(principal) => {
            let sessions = super::open_sessions()?;
            sessions.save(&principal)?;

            println!(
                "{}",
                format!("Logged in as {}", principal.email).green()
            );
            Ok(())
        }
        Err(e) => {
            tracing::debug!(error = %e, email, "sign-in rejected");
            anyhow::bail!("Login failed: {e}")
        }
    }
}
