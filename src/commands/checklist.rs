use anyhow::Result;
use dialoguer::Input;
use eventdesk_core::config::EventDeskConfig;
use owo_colors::OwoColorize;

use crate::render::render_checklist;

/// Append a new checklist item and persist via the merge-write path.
/// Empty input is a no-op, mirroring a cancelled prompt.
pub fn add(config: &EventDeskConfig, event_id: &str, label: Option<String>) -> Result<()> {
    let sessions = super::open_sessions()?;
    super::require_principal(&sessions)?;

    let label = match label {
        Some(l) => l,
        None => Input::<String>::new()
            .with_prompt("  Checklist item")
            .allow_empty(true)
            .interact_text()?,
    };

    let label = label.trim().to_string();
    if label.is_empty() {
        println!("{}", "Nothing added".dimmed());
        return Ok(());
    }

    let store = super::open_store(config);
    let Some(mut event) = store.load(event_id)? else {
        anyhow::bail!("Event '{event_id}' not found");
    };

    event.add_checklist_item(label);

    if let Err(e) = store.save_checklist(event_id, &event.checklist) {
        tracing::error!(error = %e, event_id, "failed to save checklist");
        anyhow::bail!("Failed to save checklist: {e}");
    }

    println!("{}", render_checklist(&event.checklist));
    Ok(())
}
