//! Opening imported notes with the system's default application.

use std::{path::Path, process::Command};

use tracing::{debug, warn};

/// Hands `path` to the platform opener (`open`, `xdg-open` or `start`).
///
/// Opening is a convenience after a successful import, so failures are logged and reported
/// as `false` instead of failing the command.
pub fn open_note(path: &Path) -> bool {
  let mut command = if cfg!(target_os = "macos") {
    Command::new("open")
  } else if cfg!(target_os = "windows") {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]);
    command
  } else {
    Command::new("xdg-open")
  };

  debug!("Opening note with {command:?} {}", path.display());
  match command.arg(path).spawn() {
    Ok(_) => true,
    Err(e) => {
      warn!("Could not open {}: {e}", path.display());
      false
    },
  }
}
