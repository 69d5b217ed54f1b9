use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::app::App;
use crate::client::Client;
use crate::commands::probe;
use crate::render;

pub async fn run(id: String, yes: bool) -> Result<()> {
    let client = Client::new()?;
    let mut app = App::new();
    app.set_connectivity(probe(&client).await);

    if !app.can_mutate() {
        println!("{}", render::render_disconnected());
        return Ok(());
    }

    // Resolve the event first so the prompt can name it (and so an
    // unknown id fails before any prompt)
    let existing = client.get_event(&id).await?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete event '{}'?", existing.event.name))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Aborted".dimmed());
            return Ok(());
        }
    }

    client.delete_event(&id).await?;
    println!("{}", format!("Deleted: {}", existing.event.name).green());

    app.set_events(client.list_events().await?);
    println!("{}", render::render_view(&app));
    Ok(())
}
