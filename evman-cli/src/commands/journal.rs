//! Local journal subcommands.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, Utc};
use clap::Subcommand;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::journal::store::JournalStore;
use crate::journal::{self, Entry, EntryKind, RangeFilter};
use crate::render::{self, Render};

#[derive(Subcommand)]
pub enum JournalCommand {
    /// Log a new entry
    Add {
        name: String,

        #[arg(short, long)]
        description: Option<String>,

        /// Entry kind: info, warning, error, success, debug
        #[arg(short, long, default_value = "info")]
        kind: String,
    },
    /// List entries, optionally filtered
    List {
        /// Case-insensitive substring match over name and description
        #[arg(long)]
        search: Option<String>,

        /// Only entries of this kind
        #[arg(long)]
        kind: Option<String>,

        /// Time window: all, today, week, month
        #[arg(long, default_value = "all")]
        range: String,
    },
    /// Delete one entry
    Delete { id: String },
    /// Export the full journal as a JSON document
    Export {
        /// Output path (defaults to events-YYYY-MM-DD.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Delete all entries
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(command: JournalCommand) -> Result<()> {
    let store = JournalStore::open(JournalStore::default_path()?);

    match command {
        JournalCommand::Add {
            name,
            description,
            kind,
        } => add(&store, name, description, &kind),
        JournalCommand::List {
            search,
            kind,
            range,
        } => list(&store, search, kind, &range),
        JournalCommand::Delete { id } => delete(&store, &id),
        JournalCommand::Export { output } => export(&store, output),
        JournalCommand::Clear { yes } => clear(&store, yes),
    }
}

fn add(store: &JournalStore, name: String, description: Option<String>, kind: &str) -> Result<()> {
    let kind: EntryKind = kind.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let mut entries = store.load()?;
    let entry = Entry::new(name, description, kind);

    // Newest entries first
    entries.insert(0, entry.clone());
    store.save(&entries)?;

    println!("{}", format!("Logged: {}", entry.name).green());
    Ok(())
}

fn list(
    store: &JournalStore,
    search: Option<String>,
    kind: Option<String>,
    range: &str,
) -> Result<()> {
    let kind = kind
        .map(|k| k.parse::<EntryKind>())
        .transpose()
        .map_err(|e| anyhow::anyhow!(e))?;
    let range: RangeFilter = range.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let entries = store.load()?;
    println!("{}", render::render_journal_stats(&entries));
    println!();

    let shown = journal::filter_entries(&entries, search.as_deref(), kind, range, Utc::now());
    if shown.is_empty() {
        println!("{}", "  No entries found".dimmed());
        return Ok(());
    }

    for entry in shown {
        println!("{}", entry.render());
    }
    Ok(())
}

fn delete(store: &JournalStore, id: &str) -> Result<()> {
    let mut entries = store.load()?;
    let position = entries
        .iter()
        .position(|e| e.id == id)
        .ok_or_else(|| anyhow::anyhow!("Entry not found: {}", id))?;

    let removed = entries.remove(position);
    store.save(&entries)?;

    println!("{}", format!("Deleted: {}", removed.name).green());
    Ok(())
}

fn export(store: &JournalStore, output: Option<PathBuf>) -> Result<()> {
    let path = output.unwrap_or_else(|| {
        PathBuf::from(format!("events-{}.json", Local::now().format("%Y-%m-%d")))
    });

    let count = store.export_to(&path)?;
    println!(
        "{}",
        format!("Exported {} entries to {}", count, path.display()).green()
    );
    Ok(())
}

fn clear(store: &JournalStore, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete all journal entries?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Aborted".dimmed());
            return Ok(());
        }
    }

    store.clear()?;
    println!("{}", "Journal cleared".green());
    Ok(())
}
