use anyhow::Result;
use eventdesk_core::config::EventDeskConfig;

use crate::render::Render;

/// Toggle the checklist item at `index` and persist the whole checklist
/// as a merge write. Nothing else in the document is touched.
pub fn run(config: &EventDeskConfig, event_id: &str, index: usize) -> Result<()> {
    let store = super::open_store(config);

    let Some(mut event) = store.load(event_id)? else {
        anyhow::bail!("Event '{event_id}' not found");
    };

    event.toggle_checklist(index)?;

    if let Err(e) = store.save_checklist(event_id, &event.checklist) {
        tracing::error!(error = %e, event_id, index, "failed to save checklist");
        anyhow::bail!("Failed to save checklist: {e}");
    }

    println!("{}", event.checklist[index].render());
    Ok(())
}
