use anyhow::Result;
use eventdesk_core::config::EventDeskConfig;
use eventdesk_core::event::EventDocument;
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::utils::tui::create_spinner;

pub fn run(config: &EventDeskConfig, event_id: &str) -> Result<()> {
    let store = super::open_store(config);
    let sessions = super::open_sessions()?;

    let spinner = create_spinner("Loading event");
    let loaded = store.load(event_id);
    // Finish on every outcome, so a failed fetch can't leave the
    // spinner running with no error in sight.
    spinner.finish_and_clear();

    let page = match loaded {
        Ok(event) => render_page(event.as_ref()),
        Err(e) => {
            tracing::error!(error = %e, event_id, "failed to load event");
            anyhow::bail!("Could not load event '{event_id}': {e}");
        }
    };

    println!("{page}");
    println!();
    println!("{}", super::auth_status(&sessions)?.dimmed());

    Ok(())
}

/// The rendered page, or the not-found placeholder. A missing document
/// gets only the title line; no other section is drawn.
fn render_page(event: Option<&EventDocument>) -> String {
    match event {
        Some(event) => event.render(),
        None => "Event Not Found".bold().to_string(),
    }
}
