use std::io;
use std::process::{Command, Stdio};

/// OS primitives used to hand a command over for execution.
pub trait Launcher {
    /// Open `target` with whatever the OS associates with it (URI scheme,
    /// file type, ...).
    fn open(&self, target: &str) -> io::Result<()>;

    /// Start `cmd` through the command interpreter without waiting on it.
    fn spawn_shell(&self, cmd: &str) -> io::Result<()>;
}

/// [`Launcher`] backed by the real operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, target: &str) -> io::Result<()> {
        open::that(target)
    }

    fn spawn_shell(&self, cmd: &str) -> io::Result<()> {
        shell_command(cmd)
            .stdin(Stdio::null())
            .spawn()
            .map(|_| ())
    }
}

#[cfg(windows)]
fn shell_command(cmd: &str) -> Command {
    let mut c = Command::new("cmd");
    c.arg("/C").arg(cmd);
    c
}

#[cfg(not(windows))]
fn shell_command(cmd: &str) -> Command {
    let mut c = Command::new("sh");
    c.arg("-c").arg(cmd);
    c
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchResult {
    Success,
    Failure { command: String, error: String },
}

impl LaunchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, LaunchResult::Success)
    }
}

/// Hand a single command to the OS.
///
/// Association-open is tried first so registered protocol handlers
/// (`steam://`, `spotify:` ...) work; anything it rejects is run through the
/// shell. Neither path waits for the launched program.
pub fn launch_one<L: Launcher + ?Sized>(launcher: &L, cmd: &str) -> LaunchResult {
    let cmd = cmd.trim();
    if cmd.is_empty() {
        return LaunchResult::Failure {
            command: String::new(),
            error: "empty command".into(),
        };
    }

    match launcher.open(cmd) {
        Ok(()) => {
            tracing::info!(command = cmd, "opened by association");
            return LaunchResult::Success;
        }
        Err(e) => tracing::debug!(command = cmd, error = %e, "association open failed, using shell"),
    }

    match launcher.spawn_shell(cmd) {
        Ok(()) => {
            tracing::info!(command = cmd, "spawned through shell");
            LaunchResult::Success
        }
        Err(e) => {
            tracing::warn!(command = cmd, error = %e, "launch failed");
            LaunchResult::Failure {
                command: cmd.to_owned(),
                error: e.to_string(),
            }
        }
    }
}

/// Launch every command in order. Failures never stop the batch.
pub fn run_batch<L, S>(launcher: &L, commands: &[S]) -> Vec<LaunchResult>
where
    L: Launcher + ?Sized,
    S: AsRef<str>,
{
    commands
        .iter()
        .map(|c| launch_one(launcher, c.as_ref()))
        .collect()
}

/// Human readable summary of the failed entries of a batch, or `None` when
/// everything launched.
pub fn failure_report(results: &[LaunchResult]) -> Option<String> {
    let failed: Vec<String> = results
        .iter()
        .filter_map(|r| match r {
            LaunchResult::Failure { command, error } => Some(format!("{command}\n{error}")),
            LaunchResult::Success => None,
        })
        .collect();
    if failed.is_empty() {
        None
    } else {
        Some(failed.join("\n\n"))
    }
}
