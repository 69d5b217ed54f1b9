use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;

use evman_core::EventStatus;

use crate::app::App;
use crate::client::Client;
use crate::commands::{probe, submit};
use crate::render;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    id: String,
    name: Option<String>,
    date: Option<String>,
    time: Option<String>,
    place: Option<String>,
    description: Option<String>,
    status: Option<String>,
) -> Result<()> {
    let status = status
        .map(|s| s.parse::<EventStatus>())
        .transpose()
        .map_err(|e| anyhow::anyhow!(e))?;

    let client = Client::new()?;
    let mut app = App::new();
    app.set_connectivity(probe(&client).await);

    if !app.can_mutate() {
        println!("{}", render::render_disconnected());
        return Ok(());
    }

    // Pre-fill the form from the stored event, then apply the overrides
    let existing = client.get_event(&id).await?;
    app.begin_edit(&existing);

    if let Some(name) = name {
        app.form.name = name;
    }
    if let Some(date) = date {
        app.form.date = date;
    }
    if let Some(time) = time {
        app.form.time = time;
    }
    if let Some(place) = place {
        app.form.place = place;
    }
    if let Some(description) = description {
        app.form.description = description;
    }
    if let Some(status) = status {
        app.form.status = status;
    }

    let draft = match app.form.validate(Local::now().date_naive()) {
        Ok(draft) => draft,
        Err(message) => {
            println!("{}", render::render_error(&message));
            return Ok(());
        }
    };

    let updated = submit(&mut app, &client, &draft).await?;
    println!("{}", format!("Updated: {}", updated.event.name).green());

    app.set_events(client.list_events().await?);
    println!("{}", render::render_view(&app));
    Ok(())
}
