mod app;
mod client;
mod commands;
mod journal;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "evman")]
#[command(about = "Manage your events against an evman-server and keep a local journal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events, optionally restricted to one status tab
    List {
        /// Tab to show: all, upcoming, success, cancelled
        #[arg(short, long, default_value = "all")]
        tab: String,
    },
    /// Create a new event
    Add {
        name: String,

        /// Event date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Where the event takes place
        #[arg(short, long)]
        place: String,

        /// Time of day (HH:MM)
        #[arg(short, long)]
        time: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Initial status: upcoming, success, cancelled
        #[arg(short, long, default_value = "upcoming")]
        status: String,
    },
    /// Edit an existing event
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        /// Event date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Time of day (HH:MM)
        #[arg(long)]
        time: Option<String>,

        #[arg(long)]
        place: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// New status: upcoming, success, cancelled
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete an event
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Change an event's status
    Mark {
        id: String,

        /// New status: upcoming, success, cancelled
        status: String,
    },
    /// Re-probe the backend connection
    Retry,
    /// Local journal, kept on this machine only
    #[command(subcommand)]
    Journal(commands::journal::JournalCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { tab } => {
            let tab = tab.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            commands::list::run(tab).await
        }
        Commands::Add {
            name,
            date,
            place,
            time,
            description,
            status,
        } => commands::add::run(name, date, place, time, description, status).await,
        Commands::Edit {
            id,
            name,
            date,
            time,
            place,
            description,
            status,
        } => commands::edit::run(id, name, date, time, place, description, status).await,
        Commands::Delete { id, yes } => commands::delete::run(id, yes).await,
        Commands::Mark { id, status } => commands::mark::run(id, status).await,
        Commands::Retry => commands::retry::run().await,
        Commands::Journal(command) => commands::journal::run(command),
    }
}
