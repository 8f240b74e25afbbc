//! External command execution.
//!
//! Lines that are not built-ins run through the user's shell with captured
//! stdout/stderr; every captured line becomes a scrollback row. Failures
//! are reported as scrollback rows too, never as process aborts — a typo'd
//! command must not take the session down.

use std::process::{Command, Stdio};

/// Run `line` through the shell and collect its output, one scrollback row
/// per line, stdout first.
pub fn run(line: &str) -> Vec<String> {
    let shell = detect_shell();
    tracing::debug!(command = %line, shell = %shell, "running external command");

    let output = match Command::new(&shell)
        .args(["-c", line])
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            tracing::warn!(command = %line, error = %e, "failed to spawn shell");
            return vec![format!("brine: failed to run command: {e}")];
        }
    };

    let mut lines: Vec<String> = Vec::new();
    lines.extend(text_lines(&output.stdout));
    lines.extend(text_lines(&output.stderr));

    if !output.status.success() && lines.is_empty() {
        tracing::warn!(command = %line, status = ?output.status.code(), "command failed silently");
        lines.push(format!(
            "brine: command exited with status {}",
            output
                .status
                .code()
                .map_or_else(|| "unknown".to_string(), |c| c.to_string())
        ));
    }

    lines
}

/// Split captured bytes into lines, tolerating non-UTF-8 output.
fn text_lines(bytes: &[u8]) -> Vec<String> {
    if bytes.is_empty() {
        return Vec::new();
    }
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_string)
        .collect()
}

/// The shell used for external commands: `$SHELL`, then common fallbacks.
pub fn detect_shell() -> String {
    if let Ok(shell) = std::env::var("SHELL") {
        if !shell.is_empty() {
            return shell;
        }
    }

    #[cfg(unix)]
    {
        if std::path::Path::new("/bin/bash").exists() {
            return "/bin/bash".to_string();
        }
        if std::path::Path::new("/bin/sh").exists() {
            return "/bin/sh".to_string();
        }
    }

    #[cfg(windows)]
    {
        if let Ok(comspec) = std::env::var("COMSPEC") {
            return comspec;
        }
        return "cmd.exe".to_string();
    }

    "sh".to_string()
}
