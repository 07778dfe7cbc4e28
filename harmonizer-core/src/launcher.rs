//! # Process Launcher
//!
//! Starts the external harmonization program without waiting for it.
//!
//! ## Behavior
//! - stdin, stdout and stderr are all null; nothing is captured
//! - `launch` returns as soon as the child has been spawned
//! - a detached reaper thread waits on the child so it does not linger as a
//!   zombie, and logs its exit status; the result never reaches the UI

use std::io;
use std::process::{Child, Command, Stdio};
use std::thread;

use tracing::{debug, warn};

use crate::invocation::Invocation;

/// Something that can start an [`Invocation`].
pub trait ProcessLauncher {
    /// Attempts to start the program. Success means "spawned", not "finished".
    fn launch(&self, invocation: &Invocation) -> io::Result<()>;
}

/// Launches real child processes through [`std::process::Command`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl ProcessLauncher for SystemLauncher {
    fn launch(&self, invocation: &Invocation) -> io::Result<()> {
        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        if let Some(dir) = &invocation.working_dir {
            command.current_dir(dir);
        }

        let child = command.spawn()?;
        debug!(pid = child.id(), program = %invocation.program, "Spawned child process");
        reap_in_background(child, invocation.program.clone());
        Ok(())
    }
}

/// Hands `child` to a detached thread that waits for it to exit.
///
/// The child is already running at this point, so a failure to start the
/// thread is logged rather than reported as a launch failure.
fn reap_in_background(mut child: Child, program: String) {
    let pid = child.id();
    let spawned = thread::Builder::new()
        .name(format!("reaper-{pid}"))
        .spawn(move || match child.wait() {
            Ok(status) => debug!(pid, %program, %status, "Child process exited"),
            Err(e) => warn!(pid, %program, "Failed waiting on child process: {e}"),
        });
    if let Err(e) = spawned {
        warn!(pid, "Could not start reaper thread: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_fails_to_launch() {
        let invocation = Invocation {
            program: "./definitely-not-an-import-binary".to_string(),
            args: vec!["somewhere.wav".into()],
            working_dir: None,
        };
        let err = SystemLauncher.launch(&invocation).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn spawns_and_returns_without_waiting() {
        let dir = tempfile::tempdir().unwrap();
        let invocation = Invocation {
            program: "sh".to_string(),
            args: vec!["-c".into(), "sleep 5".into()],
            working_dir: Some(dir.path().to_path_buf()),
        };
        let started = std::time::Instant::now();
        SystemLauncher.launch(&invocation).unwrap();
        assert!(started.elapsed() < std::time::Duration::from_secs(5));
    }
}
