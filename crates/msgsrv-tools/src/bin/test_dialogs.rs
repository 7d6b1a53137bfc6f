//! Walk the dialogs API: list the dialogs, then fetch the message history of
//! the first one.

use std::time::Duration;

use msgsrv_tools::{admin_panel_url, probe_dialogs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    msgsrv_client::logging::init("test_dialogs");

    let base = admin_panel_url();
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()?;

    println!("Listing dialogs at {base}...");
    let probe = probe_dialogs(&http, &base).await?;
    println!("Dialogs: {}", serde_json::to_string_pretty(&probe.dialogs)?);

    match probe.first {
        Some((telegram_id, messages)) => {
            println!("\nMessages for dialog {telegram_id}:");
            println!("{}", serde_json::to_string_pretty(&messages)?);
        }
        None => println!("\nNo dialogs to fetch messages for"),
    }

    Ok(())
}
