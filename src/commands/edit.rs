//! Interactive edit session for the event page.
//!
//! Two states: View (outside this command) and Edit (inside the menu
//! loop). The session works on an in-memory working copy of the
//! document; nothing reaches the store until "Save & exit", which
//! performs a full overwrite. "Discard & exit" drops the working copy.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use eventdesk_core::auth::SessionStore;
use eventdesk_core::config::EventDeskConfig;
use eventdesk_core::event::{EventDocument, ItineraryItem, Speaker};
use eventdesk_core::store::{EventStore, FileStore};
use owo_colors::OwoColorize;

use crate::render::{Render, render_checklist};

const MENU: &[&str] = &[
    "Edit name",
    "Edit date",
    "Edit location",
    "Edit description",
    "Add itinerary item",
    "Remove itinerary item",
    "Add speaker",
    "Remove speaker",
    "Add checklist item",
    "Toggle checklist item",
    "Save & exit",
    "Discard & exit",
];

pub fn run(config: &EventDeskConfig, event_id: &str) -> Result<()> {
    let sessions = super::open_sessions()?;
    super::require_principal(&sessions)?;

    let store = super::open_store(config);
    let Some(original) = store.load(event_id)? else {
        anyhow::bail!("Event '{event_id}' not found");
    };

    let mut draft = original.clone();
    println!(
        "{}",
        "Edit mode enabled. Changes are kept in memory until you save.".yellow()
    );

    loop {
        println!();
        println!("{}", draft.render());
        println!();

        let selection = Select::new()
            .with_prompt("  Edit")
            .items(MENU)
            .default(0)
            .interact()?;

        match MENU[selection] {
            "Edit name" => draft.name = edit_text("  Name", &draft.name)?,
            "Edit date" => draft.date = edit_text("  Date", &draft.date)?,
            "Edit location" => draft.location = edit_text("  Location", &draft.location)?,
            "Edit description" => {
                draft.description = edit_text("  Description", &draft.description)?;
            }
            "Add itinerary item" => draft.add_itinerary_item(prompt_itinerary_item()?),
            "Remove itinerary item" => remove_itinerary_item(&mut draft)?,
            "Add speaker" => draft.add_speaker(prompt_speaker()?),
            "Remove speaker" => remove_speaker(&mut draft)?,
            "Add checklist item" => add_checklist_item(&mut draft)?,
            "Toggle checklist item" => toggle_checklist_item(&mut draft)?,
            "Save & exit" => {
                if save_changes(&store, &sessions, event_id, &draft)? {
                    break;
                }
                // Save failed or not allowed: stay in the session with
                // the working copy intact so the user can retry.
            }
            "Discard & exit" => {
                if draft == original
                    || Confirm::new()
                        .with_prompt("  Discard unsaved changes?")
                        .default(false)
                        .interact()?
                {
                    println!("{}", "Edit mode exited.".dimmed());
                    break;
                }
            }
            other => unreachable!("unknown menu entry: {other}"),
        }
    }

    Ok(())
}

/// Full (non-merge) overwrite of the stored document. Returns whether
/// the session should end.
fn save_changes(
    store: &EventStore<FileStore>,
    sessions: &SessionStore,
    event_id: &str,
    draft: &EventDocument,
) -> Result<bool> {
    // The session may have been cleared from another terminal since the
    // edit session started.
    if super::require_principal(sessions).is_err() {
        println!(
            "{}",
            "You must be logged in to save changes.".red()
        );
        return Ok(false);
    }

    match store.save(event_id, draft) {
        Ok(()) => {
            println!("{}", "Event updated successfully!".green());
            Ok(true)
        }
        Err(e) => {
            tracing::error!(error = %e, event_id, "failed to save event");
            println!("{}", format!("Failed to save event: {e}").red());
            Ok(false)
        }
    }
}

fn edit_text(prompt: &str, current: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn prompt_itinerary_item() -> Result<ItineraryItem> {
    let time: String = Input::new()
        .with_prompt("  Time (e.g. 10:00 AM)")
        .interact_text()?;
    let title: String = Input::new().with_prompt("  Title").interact_text()?;
    let details: String = Input::new()
        .with_prompt("  Details")
        .allow_empty(true)
        .interact_text()?;

    Ok(ItineraryItem {
        time,
        title,
        details,
    })
}

fn prompt_speaker() -> Result<Speaker> {
    let name: String = Input::new().with_prompt("  Speaker name").interact_text()?;
    let role: String = Input::new().with_prompt("  Role").interact_text()?;
    let photo: String = Input::new()
        .with_prompt("  Photo URL (blank for placeholder)")
        .allow_empty(true)
        .interact_text()?;

    Ok(Speaker::new(name, role, photo))
}

fn remove_itinerary_item(draft: &mut EventDocument) -> Result<()> {
    if draft.itinerary.is_empty() {
        println!("  {}", "No itinerary items to remove".dimmed());
        return Ok(());
    }

    let rows: Vec<String> = draft
        .itinerary
        .iter()
        .map(|item| format!("{} — {}", item.time, item.title))
        .collect();

    let index = Select::new()
        .with_prompt("  Remove which item?")
        .items(&rows)
        .default(0)
        .interact()?;

    draft.remove_itinerary_item(index);
    Ok(())
}

fn remove_speaker(draft: &mut EventDocument) -> Result<()> {
    if draft.speakers.is_empty() {
        println!("  {}", "No speakers to remove".dimmed());
        return Ok(());
    }

    let rows: Vec<String> = draft
        .speakers
        .iter()
        .map(|speaker| format!("{} — {}", speaker.name, speaker.role))
        .collect();

    let index = Select::new()
        .with_prompt("  Remove which speaker?")
        .items(&rows)
        .default(0)
        .interact()?;

    draft.remove_speaker(index);
    Ok(())
}

fn add_checklist_item(draft: &mut EventDocument) -> Result<()> {
    let label: String = Input::new()
        .with_prompt("  Checklist item")
        .allow_empty(true)
        .interact_text()?;

    let label = label.trim().to_string();
    if label.is_empty() {
        println!("  {}", "Nothing added".dimmed());
        return Ok(());
    }

    draft.add_checklist_item(label);
    Ok(())
}

fn toggle_checklist_item(draft: &mut EventDocument) -> Result<()> {
    if draft.checklist.is_empty() {
        println!("  {}", "No checklist items".dimmed());
        return Ok(());
    }

    let rows: Vec<String> = draft
        .checklist
        .iter()
        .map(|item| item.render())
        .collect();

    let index = Select::new()
        .with_prompt("  Toggle which item?")
        .items(&rows)
        .default(0)
        .interact()?;

    draft.toggle_checklist(index)?;
    println!("{}", render_checklist(&draft.checklist));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventdesk_core::auth::Principal;
    use eventdesk_core::event::PLACEHOLDER_PHOTO;
    use tempfile::TempDir;

    fn fixtures() -> (TempDir, EventStore<FileStore>, TempDir, SessionStore) {
        let store_dir = TempDir::new().unwrap();
        let store = EventStore::new(FileStore::new(store_dir.path()));
        let session_dir = TempDir::new().unwrap();
        let sessions = SessionStore::new(session_dir.path());
        (store_dir, store, session_dir, sessions)
    }

    fn stored_event() -> EventDocument {
        EventDocument {
            name: "Service Day".into(),
            date: "March 20, 2026".into(),
            location: "Community Center".into(),
            ..Default::default()
        }
    }

    #[test]
    fn save_without_a_principal_performs_no_write() {
        let (_sd, store, _nd, sessions) = fixtures();
        let original = stored_event();
        store.save("service-day", &original).unwrap();

        let mut draft = original.clone();
        draft.name = "Renamed".into();

        let saved = save_changes(&store, &sessions, "service-day", &draft).unwrap();

        assert!(!saved);
        assert_eq!(store.load("service-day").unwrap(), Some(original));
    }

    #[test]
    fn save_with_a_principal_overwrites_the_document() {
        let (_sd, store, _nd, sessions) = fixtures();
        store.save("service-day", &stored_event()).unwrap();
        sessions
            .save(&Principal {
                email: "ada@example.com".into(),
                token: "tok".into(),
            })
            .unwrap();

        let mut draft = stored_event();
        draft.name = "Renamed".into();
        draft.add_checklist_item("Bring badge");

        let saved = save_changes(&store, &sessions, "service-day", &draft).unwrap();

        assert!(saved);
        assert_eq!(store.load("service-day").unwrap(), Some(draft));
    }

    #[test]
    fn failed_save_reports_not_saved() {
        let (store_dir, store, _nd, sessions) = fixtures();
        sessions
            .save(&Principal {
                email: "ada@example.com".into(),
                token: "tok".into(),
            })
            .unwrap();

        // Make the store root unusable so the write fails
        let blocker = store_dir.path().join("events");
        std::fs::write(&blocker, "not a directory").unwrap();

        let saved = save_changes(&store, &sessions, "service-day", &stored_event()).unwrap();
        assert!(!saved);
    }

    #[test]
    fn menu_covers_save_and_discard() {
        assert!(MENU.contains(&"Save & exit"));
        assert!(MENU.contains(&"Discard & exit"));
    }

    #[test]
    fn speaker_placeholder_applies_on_blank_photo() {
        let speaker = Speaker::new("Ada".into(), "Organizer".into(), String::new());
        assert_eq!(speaker.photo, PLACEHOLDER_PHOTO);
    }

    #[test]
    fn add_then_remove_restores_the_original() {
        let mut draft = EventDocument {
            name: "Service Day".into(),
            itinerary: vec![ItineraryItem {
                time: "10:00 AM".into(),
                title: "Kickoff".into(),
                details: "Welcome".into(),
            }],
            ..Default::default()
        };
        let original = draft.clone();

        draft.add_itinerary_item(ItineraryItem {
            time: "11:00 AM".into(),
            title: "Workshops".into(),
            details: String::new(),
        });
        draft.remove_itinerary_item(1);

        assert_eq!(draft, original);
    }
}
