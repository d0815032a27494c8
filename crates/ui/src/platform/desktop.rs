use std::io;
use std::process::{Command, ExitStatus};
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use super::{UiLinkOpener, validate_link};

/// Opens links in the system browser.
pub struct DesktopLinkOpener;

fn browser_command(url: &str) -> Command {
    #[cfg(target_os = "macos")]
    let cmd = {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    };
    #[cfg(target_os = "windows")]
    let cmd = {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    };
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let cmd = {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    };
    cmd
}

/// Spawn `cmd` and reap it on a background thread.
fn spawn_reaped(mut cmd: Command) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = cmd.spawn()?;
    thread::Builder::new()
        .name("link-opener".into())
        .spawn(move || child.wait())
}

impl UiLinkOpener for DesktopLinkOpener {
    fn open_url(&self, url: &str) {
        let Some(url) = validate_link(url) else {
            warn!(url, "refused to open link");
            return;
        };
        let url = url.as_str();
        debug!(url, "opening link");

        if let Err(err) = spawn_reaped(browser_command(url)) {
            warn!(url, error = %err, "failed to launch browser");
        }
    }
}
