use anyhow::Result;
use owo_colors::OwoColorize;

use evman_core::EventStatus;

use crate::app::App;
use crate::client::Client;
use crate::commands::probe;
use crate::render;

pub async fn run(id: String, status: String) -> Result<()> {
    let status: EventStatus = status.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let client = Client::new()?;
    let mut app = App::new();
    app.set_connectivity(probe(&client).await);

    if !app.can_mutate() {
        println!("{}", render::render_disconnected());
        return Ok(());
    }

    let updated = client.patch_status(&id, status).await?;
    println!(
        "{}",
        format!("Marked '{}' as {}", updated.event.name, status.label()).green()
    );

    app.set_events(client.list_events().await?);
    println!("{}", render::render_view(&app));
    Ok(())
}
