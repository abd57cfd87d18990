//! Open the saved workbook in the desktop's default spreadsheet viewer

use crate::error::{RosterError, RosterResult};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

pub trait Launcher {
    fn launch(&self, path: &Path) -> RosterResult<()>;
}

/// Hands the file to the OS opener and returns without waiting on it.
pub struct SystemLauncher;

impl SystemLauncher {
    fn command(path: &Path) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(path);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            // Empty title argument so a quoted path isn't taken as the window title
            cmd.args(["/C", "start", ""]).arg(path);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(path);
            cmd
        }
    }
}

impl Launcher for SystemLauncher {
    fn launch(&self, path: &Path) -> RosterResult<()> {
        let mut cmd = Self::command(path);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        debug!(program = ?cmd.get_program(), path = %path.display(), "launching viewer");
        cmd.spawn().map(|_child| ()).map_err(|e| RosterError::Launch {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Does nothing; used for `--no-open` and tests.
pub struct NoLaunch;

impl Launcher for NoLaunch {
    fn launch(&self, _path: &Path) -> RosterResult<()> {
        Ok(())
    }
}
