use super::ToolError;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

#[cfg(not(windows))]
fn shell_command(command_line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(command_line);
    command
}

#[cfg(windows)]
fn shell_command(command_line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(command_line);
    command
}

/// Runs a shell command line, interleaving its output into a log sink.
///
/// The command line is echoed to the sink first so a log file replays the
/// run. The child's stdout and stderr share the sink's file descriptor, so
/// their interleaving matches what the tool emitted; with no sink both
/// streams inherit this process's stdio. The command line is interpreted by
/// the platform shell — the caller is responsible for quoting untrusted
/// input.
///
/// Blocks until the child exits. A non-zero exit is a
/// [`ToolError::CommandFailed`]; callers that cannot continue map it to a
/// pipeline abort.
pub fn run_logged(
    command_line: &str,
    cwd: Option<&Path>,
    sink: Option<&File>,
) -> Result<ExitStatus, ToolError> {
    debug!("Running command: {}", command_line);

    let mut command = shell_command(command_line);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    match sink {
        Some(file) => {
            let mut echo = file;
            writeln!(echo, "{}", command_line)?;
            command
                .stdout(Stdio::from(file.try_clone()?))
                .stderr(Stdio::from(file.try_clone()?));
        }
        None => {
            println!("{}", command_line);
        }
    }

    let status = command.status().map_err(|source| ToolError::Launch {
        command: command_line.to_string(),
        source,
    })?;

    if !status.success() {
        return Err(ToolError::CommandFailed {
            command: command_line.to_string(),
            status,
        });
    }
    Ok(status)
}
