//! Terminal rendering for evman types.
//!
//! Extension traits and helpers that turn application state into colored
//! terminal output using owo_colors.

use chrono::Local;
use owo_colors::OwoColorize;

use evman_core::EventStatus;

use crate::app::{App, Stats};
use crate::client::RemoteEvent;
use crate::journal::{Entry, EntryKind};

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventStatus {
    fn render(&self) -> String {
        let tag = format!("[{}]", self.as_str());
        match self {
            EventStatus::Upcoming => tag.blue().to_string(),
            EventStatus::Success => tag.green().to_string(),
            EventStatus::Cancelled => tag.red().to_string(),
        }
    }
}

impl Render for RemoteEvent {
    fn render(&self) -> String {
        let event = &self.event;

        let mut details = self.display_date.clone();
        if let Some(time) = &event.time {
            details.push_str(&format!(" {}", time.format("%H:%M")));
        }
        details.push_str(&format!(" @ {}", event.place));

        let mut lines = vec![format!(
            "  {} {} {}",
            event.status.render(),
            event.name.bold(),
            format!("({})", event.id).dimmed(),
        )];
        lines.push(format!("      {}", details.dimmed()));

        if let Some(description) = &event.description {
            lines.push(format!("      {}", description.dimmed()));
        }

        lines.join("\n")
    }
}

impl Render for EntryKind {
    fn render(&self) -> String {
        let tag = format!("[{}]", self.as_str());
        match self {
            EntryKind::Info => tag.blue().to_string(),
            EntryKind::Warning => tag.yellow().to_string(),
            EntryKind::Error => tag.red().to_string(),
            EntryKind::Success => tag.green().to_string(),
            EntryKind::Debug => tag.dimmed().to_string(),
        }
    }
}

impl Render for Entry {
    fn render(&self) -> String {
        let timestamp = self.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M");

        let mut line = format!(
            "  {} {} {} {}",
            timestamp.to_string().dimmed(),
            self.kind.render(),
            self.name.bold(),
            format!("({})", self.id).dimmed(),
        );

        if let Some(description) = &self.description {
            line.push_str(&format!("\n      {}", description.dimmed()));
        }

        line
    }
}

/// Stats header: total plus per-status counts.
pub fn render_stats(stats: &Stats) -> String {
    format!(
        "{}  {} {}  {} {}  {} {}",
        format!("Total: {}", stats.total).bold(),
        EventStatus::Upcoming.render(),
        stats.upcoming,
        EventStatus::Success.render(),
        stats.success,
        EventStatus::Cancelled.render(),
        stats.cancelled,
    )
}

/// Stats header for the journal: total plus per-kind counts.
pub fn render_journal_stats(entries: &[Entry]) -> String {
    let mut parts = vec![format!("Total: {}", entries.len()).bold().to_string()];
    for kind in EntryKind::ALL {
        let count = entries.iter().filter(|e| e.kind == kind).count();
        parts.push(format!("{} {}", kind.render(), count));
    }
    parts.join("  ")
}

/// Full list view: error banner (if any), stats header, then the visible
/// slice of the list under the active tab.
pub fn render_view(app: &App) -> String {
    let mut lines = Vec::new();

    if let Some(error) = &app.error {
        lines.push(render_error(error));
        lines.push(String::new());
    }

    lines.push(render_stats(&app.stats()));
    lines.push(String::new());

    let visible = app.visible();
    lines.push(format!("{} ({})", app.tab.label().bold(), visible.len()));

    if visible.is_empty() {
        lines.push("  No events found".dimmed().to_string());
    } else {
        for event in visible {
            lines.push(event.render());
        }
    }

    lines.join("\n")
}

/// A dismissible-style error banner.
pub fn render_error(message: &str) -> String {
    format!("{} {}", "!".red().bold(), message.red())
}

/// Shown whenever a probe finds the backend unreachable.
pub fn render_disconnected() -> String {
    format!(
        "{}\n{}\n{}",
        "Backend: disconnected".red().bold(),
        "The evman-server is not reachable.".dimmed(),
        "Start it and run: evman retry".dimmed(),
    )
}
