use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;

use crate::app::{App, EventForm};
use crate::client::Client;
use crate::commands::{probe, submit};
use crate::render;

pub async fn run(
    name: String,
    date: String,
    place: String,
    time: Option<String>,
    description: Option<String>,
    status: String,
) -> Result<()> {
    let status = status.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let client = Client::new()?;
    let mut app = App::new();
    app.set_connectivity(probe(&client).await);

    if !app.can_mutate() {
        println!("{}", render::render_disconnected());
        return Ok(());
    }

    app.form = EventForm {
        name,
        description: description.unwrap_or_default(),
        date,
        time: time.unwrap_or_default(),
        place,
        status,
    };

    // Validation failures never reach the network.
    let draft = match app.form.validate(Local::now().date_naive()) {
        Ok(draft) => draft,
        Err(message) => {
            println!("{}", render::render_error(&message));
            return Ok(());
        }
    };

    let created = submit(&mut app, &client, &draft).await?;
    println!("{}", format!("Created: {}", created.event.name).green());

    // Re-fetch so the rendered list reflects store state.
    app.set_events(client.list_events().await?);
    println!("{}", render::render_view(&app));
    Ok(())
}
