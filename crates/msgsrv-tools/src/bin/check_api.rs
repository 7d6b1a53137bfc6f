//! Probe the admin panel dialogs endpoints and print what came back.
//!
//! Each probe reports its own failure and the run continues, so one dead
//! endpoint does not hide the state of the others.

use std::time::Duration;

use msgsrv_tools::{admin_panel_url, snippet, telegram_id_arg};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    msgsrv_client::logging::init("check_api");

    let base = admin_panel_url();
    let telegram_id = telegram_id_arg();
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()?;

    println!("Checking admin panel at {base}...");

    match http.get(format!("{base}/dialogs")).send().await {
        Ok(resp) => {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            println!("\nPage /dialogs: status {status}");
            println!("Content: {}...", snippet(&text, 200));
        }
        Err(e) => println!("\nPage /dialogs failed: {e}"),
    }

    match http.get(format!("{base}/api/dialogs")).send().await {
        Ok(resp) => {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            println!("\nAPI /api/dialogs: status {status}");
            println!("Response: {text}");
        }
        Err(e) => println!("\nAPI /api/dialogs failed: {e}"),
    }

    let body = serde_json::json!({
        "telegram_id": telegram_id,
        "content": "Send-message probe",
    });
    match http
        .post(format!("{base}/api/dialogs/{telegram_id}/send"))
        .json(&body)
        .send()
        .await
    {
        Ok(resp) => {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            println!("\nAPI /api/dialogs/{telegram_id}/send: status {status}");
            println!("Response: {text}");
        }
        Err(e) => println!("\nAPI /api/dialogs/{telegram_id}/send failed: {e}"),
    }

    Ok(())
}
