//! Browser utilities

use tokio::process::Command;

/// Command that opens `url` with the platform's default handler
fn open_command(url: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(url);
        command
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", url]);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        command
    }
}

/// Open a URL in the system's default browser
///
/// Uses `open` on macOS, `cmd /C start` on Windows and `xdg-open` elsewhere.
/// Failures are logged; the UI is never blocked on the browser.
pub async fn open_url(url: String) {
    match open_command(&url).spawn() {
        Ok(mut child) => {
            if let Err(e) = child.wait().await {
                log::warn!("Browser command for {} did not finish: {}", url, e);
            }
        }
        Err(e) => log::error!("Failed to open URL in browser: {}", e),
    }
}
