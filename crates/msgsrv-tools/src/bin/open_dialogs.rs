//! Open the admin panel dialogs page in the OS default browser.

use std::process::{Command, ExitStatus};

use anyhow::Context;

use msgsrv_tools::admin_panel_url;

fn main() -> anyhow::Result<()> {
    let url = format!("{}/dialogs", admin_panel_url());

    let status = open_browser(&url)
        .with_context(|| format!("failed to launch a browser for {url}"))?;
    anyhow::ensure!(status.success(), "browser launcher exited with {status}");

    println!("Opened {url} in the default browser");
    Ok(())
}

fn open_browser(url: &str) -> std::io::Result<ExitStatus> {
    #[cfg(target_os = "windows")]
    {
        // `start` is a cmd builtin; the empty string is the window title slot.
        Command::new("cmd").args(["/C", "start", "", url]).status()
    }
    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).status()
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        Command::new("xdg-open").arg(url).status()
    }
}
