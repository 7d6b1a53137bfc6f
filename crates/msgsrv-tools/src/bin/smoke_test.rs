//! Manual end-to-end check of the Message Server: gate on the health probe,
//! then send a real test notification and print the server's answer.

use msgsrv_client::{ClientConfig, MessageServerClient};
use msgsrv_tools::telegram_id_arg;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    msgsrv_client::logging::init("smoke_test");

    let cfg = ClientConfig::from_env();
    let client = MessageServerClient::new(&cfg);

    println!("Checking message server at {}...", client.base_url());
    if !client.check_health().await {
        anyhow::bail!("message server is not responding; start it before running the smoke test");
    }
    println!("Server is up");

    let telegram_id = telegram_id_arg();
    println!("\nSending test notification to {telegram_id}...");
    let result = client
        .send_notification(telegram_id, "Test message from smoke_test")
        .await?;
    println!("Response: {}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
