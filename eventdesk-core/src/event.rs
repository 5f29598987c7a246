//! The event document model.
//!
//! One `EventDocument` describes one event page: a header (name, date,
//! location, description), an ordered itinerary, an ordered speaker list,
//! and an ordered checklist. The document is the single source of truth
//! for rendering, editing, and export; views project from it and never
//! feed back into it except through the typed mutations below.

use serde::{Deserialize, Serialize};

use crate::error::{EventDeskError, EventDeskResult};

/// Fallback image used when a speaker is added without a photo URL.
pub const PLACEHOLDER_PHOTO: &str = "https://via.placeholder.com/100";

/// Separator between date and location in the combined header line.
pub const DATE_LOCATION_SEPARATOR: &str = " • ";

/// A single persisted event page.
///
/// Every field is optional in storage: missing sequences deserialize to
/// empty, missing text to the empty string. Documents are addressed by an
/// external event id and are never created or deleted here, only read and
/// updated. Last writer wins; there is no version or concurrency token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    /// Display/print order; no uniqueness constraint.
    #[serde(default)]
    pub itinerary: Vec<ItineraryItem>,
    #[serde(default)]
    pub speakers: Vec<Speaker>,
    /// A checklist item's position in this sequence is its identity.
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItineraryItem {
    pub time: String,
    pub title: String,
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
    pub role: String,
    pub photo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub label: String,
    pub checked: bool,
}

impl Speaker {
    /// Build a speaker, falling back to the placeholder image when no
    /// photo URL was given.
    pub fn new(name: String, role: String, photo: String) -> Self {
        let photo = if photo.trim().is_empty() {
            PLACEHOLDER_PHOTO.to_string()
        } else {
            photo
        };
        Speaker { name, role, photo }
    }
}

impl EventDocument {
    /// The combined header line, e.g. `"March 20, 2026 • Community Center"`.
    pub fn date_location(&self) -> String {
        format!("{}{}{}", self.date, DATE_LOCATION_SEPARATOR, self.location)
    }

    /// Flip the checked state of the checklist item at `index`.
    pub fn toggle_checklist(&mut self, index: usize) -> EventDeskResult<&ChecklistItem> {
        let item = self
            .checklist
            .get_mut(index)
            .ok_or(EventDeskError::ChecklistIndexOutOfRange(index))?;
        item.checked = !item.checked;
        Ok(&self.checklist[index])
    }

    /// Append a new, unchecked checklist item.
    pub fn add_checklist_item(&mut self, label: impl Into<String>) {
        self.checklist.push(ChecklistItem {
            label: label.into(),
            checked: false,
        });
    }

    pub fn add_itinerary_item(&mut self, item: ItineraryItem) {
        self.itinerary.push(item);
    }

    pub fn add_speaker(&mut self, speaker: Speaker) {
        self.speakers.push(speaker);
    }

    pub fn remove_itinerary_item(&mut self, index: usize) -> Option<ItineraryItem> {
        if index < self.itinerary.len() {
            Some(self.itinerary.remove(index))
        } else {
            None
        }
    }

    pub fn remove_speaker(&mut self, index: usize) -> Option<Speaker> {
        if index < self.speakers.len() {
            Some(self.speakers.remove(index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EventDocument {
        EventDocument {
            name: "Service Day".into(),
            date: "March 20, 2026".into(),
            location: "Community Center".into(),
            description: "A day of volunteering.".into(),
            itinerary: vec![ItineraryItem {
                time: "10:00 AM".into(),
                title: "Kickoff".into(),
                details: "Welcome and team assignments".into(),
            }],
            speakers: vec![Speaker {
                name: "Ada".into(),
                role: "Organizer".into(),
                photo: "https://example.com/ada.jpg".into(),
            }],
            checklist: vec![
                ChecklistItem {
                    label: "Book venue".into(),
                    checked: true,
                },
                ChecklistItem {
                    label: "Print badges".into(),
                    checked: false,
                },
            ],
        }
    }

    #[test]
    fn date_location_joins_with_bullet() {
        let event = sample();
        assert_eq!(
            event.date_location(),
            "March 20, 2026 • Community Center"
        );
    }

    #[test]
    fn toggle_flips_only_the_given_index() {
        let mut event = sample();
        event.toggle_checklist(1).unwrap();

        assert!(event.checklist[0].checked);
        assert!(event.checklist[1].checked);

        event.toggle_checklist(1).unwrap();
        assert!(!event.checklist[1].checked);
    }

    #[test]
    fn toggle_out_of_range_is_an_error() {
        let mut event = sample();
        let err = event.toggle_checklist(5).unwrap_err();
        assert!(matches!(
            err,
            EventDeskError::ChecklistIndexOutOfRange(5)
        ));
        // Nothing changed
        assert_eq!(event, sample());
    }

    #[test]
    fn add_checklist_item_appends_unchecked() {
        let mut event = sample();
        event.add_checklist_item("Bring badge");

        assert_eq!(event.checklist.len(), 3);
        let last = event.checklist.last().unwrap();
        assert_eq!(last.label, "Bring badge");
        assert!(!last.checked);
    }

    #[test]
    fn speaker_without_photo_gets_placeholder() {
        let speaker = Speaker::new("Grace".into(), "Engineer".into(), "  ".into());
        assert_eq!(speaker.photo, PLACEHOLDER_PHOTO);

        let speaker = Speaker::new("Grace".into(), "Engineer".into(), "https://x/y.png".into());
        assert_eq!(speaker.photo, "https://x/y.png");
    }

    #[test]
    fn missing_sequences_deserialize_to_empty() {
        let event: EventDocument = serde_json::from_str(
            r#"{"name": "Bare", "date": "Jan 1", "location": "Hall", "description": ""}"#,
        )
        .unwrap();

        assert_eq!(event.name, "Bare");
        assert!(event.itinerary.is_empty());
        assert!(event.speakers.is_empty());
        assert!(event.checklist.is_empty());
    }

    #[test]
    fn serde_round_trip_preserves_the_document() {
        let event = sample();
        let json = serde_json::to_string(&event).unwrap();
        let back: EventDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn remove_out_of_range_returns_none() {
        let mut event = sample();
        assert!(event.remove_itinerary_item(3).is_none());
        assert!(event.remove_speaker(3).is_none());
        assert_eq!(event, sample());
    }
}
