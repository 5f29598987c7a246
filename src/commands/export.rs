use anyhow::Result;
use eventdesk_core::config::EventDeskConfig;
use owo_colors::OwoColorize;

pub fn run(config: &EventDeskConfig, event_id: &str) -> Result<()> {
    let store = super::open_store(config);

    let Some(event) = store.load(event_id)? else {
        anyhow::bail!("Event '{event_id}' not found");
    };

    let dir = std::env::current_dir()?;
    let path = crate::pdf::export(&event, &dir)?;

    println!("{}", format!("Exported {}", path.display()).green());
    Ok(())
}
