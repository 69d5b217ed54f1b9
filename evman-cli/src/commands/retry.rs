use anyhow::Result;
use owo_colors::OwoColorize;

use crate::app::{App, Connectivity};
use crate::client::Client;
use crate::render;

/// Manual re-probe - the only way out of the disconnected state.
pub async fn run() -> Result<()> {
    let client = Client::new()?;
    println!("{}", "Checking backend connection...".dimmed());

    let mut app = App::new();

    match client.health().await {
        Ok(health) => {
            app.set_connectivity(Connectivity::Connected);
            println!(
                "{}",
                format!("Backend: {} (database: {})", health.status, health.database).green()
            );
            println!("{}", format!("  as of {}", health.timestamp).dimmed());

            app.set_events(client.list_events().await?);
            println!("{}", render::render_view(&app));
        }
        Err(_) => {
            app.set_connectivity(Connectivity::Disconnected);
            println!("{}", render::render_disconnected());
        }
    }

    Ok(())
}
