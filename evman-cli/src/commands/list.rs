use anyhow::Result;

use crate::app::{App, Connectivity, Tab};
use crate::client::Client;
use crate::commands::probe;
use crate::render;

pub async fn run(tab: Tab) -> Result<()> {
    let client = Client::new()?;
    let mut app = App::new();
    app.tab = tab;

    match client.list_events().await {
        Ok(events) => {
            app.set_connectivity(Connectivity::Connected);
            app.set_events(events);
        }
        Err(err) => {
            // A failed list fetch re-probes the backend before reporting.
            app.set_connectivity(probe(&client).await);
            app.record_error(format!("Failed to fetch events: {}", err));
        }
    }

    if app.connectivity == Connectivity::Disconnected {
        if let Some(error) = app.take_error() {
            println!("{}", render::render_error(&error));
        }
        println!("{}", render::render_disconnected());
        return Ok(());
    }

    println!("{}", render::render_view(&app));
    Ok(())
}
