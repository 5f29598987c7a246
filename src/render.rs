//! Terminal rendering for the event page.
//!
//! Extension trait that projects document types into colored terminal
//! fragments using owo_colors. Rendering only reads the document; all
//! edits go through the typed mutations on `EventDocument`.

use eventdesk_core::event::{ChecklistItem, EventDocument, ItineraryItem, Speaker};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for ItineraryItem {
    fn render(&self) -> String {
        // Pad before colorizing so ANSI codes don't count against the width
        let time = format!("{:<9}", self.time);
        format!(
            "  {} {}\n            {}",
            time.dimmed(),
            self.title.bold(),
            self.details.dimmed()
        )
    }
}

impl Render for Speaker {
    fn render(&self) -> String {
        format!(
            "  {} — {}\n    {}",
            self.name.bold(),
            self.role,
            self.photo.dimmed()
        )
    }
}

impl Render for ChecklistItem {
    fn render(&self) -> String {
        let mark = if self.checked {
            "[x]".green().to_string()
        } else {
            "[ ]".to_string()
        };
        format!("{mark} {}", self.label)
    }
}

/// Checklist rows with their index, so `eventdesk check <index>` has
/// something to point at.
pub fn render_checklist(items: &[ChecklistItem]) -> String {
    if items.is_empty() {
        return format!("  {}", "No checklist items".dimmed());
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| format!("  {index:>2}  {}", item.render()))
        .collect::<Vec<_>>()
        .join("\n")
}

impl Render for EventDocument {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        lines.push(self.name.bold().to_string());
        lines.push(self.date_location().dimmed().to_string());

        if !self.description.is_empty() {
            lines.push(String::new());
            lines.push(self.description.clone());
        }

        lines.push(String::new());
        lines.push("Itinerary".bold().underline().to_string());
        if self.itinerary.is_empty() {
            lines.push(format!("  {}", "No itinerary items".dimmed()));
        } else {
            for item in &self.itinerary {
                lines.push(item.render());
            }
        }

        lines.push(String::new());
        lines.push("Speakers".bold().underline().to_string());
        if self.speakers.is_empty() {
            lines.push(format!("  {}", "No speakers".dimmed()));
        } else {
            for speaker in &self.speakers {
                lines.push(speaker.render());
            }
        }

        lines.push(String::new());
        lines.push("Checklist".bold().underline().to_string());
        lines.push(render_checklist(&self.checklist));

        lines.join("\n")
    }
}
