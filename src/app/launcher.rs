use std::process::{Command, Stdio};

use thiserror::Error;

/// Errors that can occur when handing a URL to the system opener.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// Failed to spawn the opener command.
    #[error("Failed to launch browser: {0}")]
    ExecutionFailed(#[from] std::io::Error),
}

#[cfg(target_os = "macos")]
const OPENER: (&str, &[&str]) = ("open", &[]);
#[cfg(target_os = "windows")]
const OPENER: (&str, &[&str]) = ("cmd", &["/C", "start", ""]);
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENER: (&str, &[&str]) = ("xdg-open", &[]);

/// Opens `url` in the system browser.
///
/// The opener is spawned detached with all stdio nulled: the page is loaded
/// in a new browsing context that holds no handle back to this process.
pub fn open_in_browser(url: &str) -> Result<(), LauncherError> {
    let (program, args) = OPENER;
    Command::new(program)
        .args(args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    Ok(())
}
