use anyhow::Result;
use eventdesk_core::config::EventDeskConfig;
use eventdesk_core::event::{
    ChecklistItem, EventDocument, ItineraryItem, PLACEHOLDER_PHOTO, Speaker,
};
use owo_colors::OwoColorize;

/// Plant a sample event document so a fresh install has something to
/// show. Never overwrites an existing document.
pub fn run(config: &EventDeskConfig, event_id: &str) -> Result<()> {
    let store = super::open_store(config);

    if store.load(event_id)?.is_some() {
        anyhow::bail!("Event '{event_id}' already exists; refusing to overwrite it");
    }

    store.save(event_id, &sample_event())?;

    println!("{}", format!("Created event '{event_id}'").green());
    println!("\nRender it with:\n  eventdesk show");
    Ok(())
}

fn sample_event() -> EventDocument {
    EventDocument {
        name: "Service Day".into(),
        date: "March 20, 2026".into(),
        location: "Community Center".into(),
        description: "A day of volunteering, workshops, and community projects. \
                      Bring comfortable clothes and plenty of energy."
            .into(),
        itinerary: vec![
            ItineraryItem {
                time: "9:00 AM".into(),
                title: "Check-in".into(),
                details: "Coffee and team assignments".into(),
            },
            ItineraryItem {
                time: "10:00 AM".into(),
                title: "Kickoff".into(),
                details: "Welcome talk and project overview".into(),
            },
            ItineraryItem {
                time: "12:30 PM".into(),
                title: "Lunch".into(),
                details: "Provided on site".into(),
            },
        ],
        speakers: vec![
            Speaker {
                name: "Ada Lovelace".into(),
                role: "Organizer".into(),
                photo: PLACEHOLDER_PHOTO.into(),
            },
            Speaker {
                name: "Grace Hopper".into(),
                role: "Project Lead".into(),
                photo: PLACEHOLDER_PHOTO.into(),
            },
        ],
        checklist: vec![
            ChecklistItem {
                label: "Book venue".into(),
                checked: true,
            },
            ChecklistItem {
                label: "Order lunch".into(),
                checked: false,
            },
            ChecklistItem {
                label: "Print badges".into(),
                checked: false,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_event_has_all_four_sections() {
        let event = sample_event();
        assert!(!event.name.is_empty());
        assert!(!event.itinerary.is_empty());
        assert!(!event.speakers.is_empty());
        assert!(!event.checklist.is_empty());
    }
}
