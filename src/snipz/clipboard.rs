use crate::error::{Result, SnipzError};
use std::io::Write;
use std::process::{Command, Stdio};

/// A clipboard helper program and its arguments.
struct ClipboardTool {
    program: &'static str,
    args: &'static [&'static str],
}

#[cfg(target_os = "macos")]
const TOOLS: &[ClipboardTool] = &[ClipboardTool {
    program: "pbcopy",
    args: &[],
}];

#[cfg(target_os = "linux")]
const TOOLS: &[ClipboardTool] = &[
    ClipboardTool {
        program: "wl-copy",
        args: &[],
    },
    ClipboardTool {
        program: "xclip",
        args: &["-selection", "clipboard"],
    },
    ClipboardTool {
        program: "xsel",
        args: &["--clipboard", "--input"],
    },
];

#[cfg(target_os = "windows")]
const TOOLS: &[ClipboardTool] = &[ClipboardTool {
    program: "clip",
    args: &[],
}];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const TOOLS: &[ClipboardTool] = &[];

/// Copies text to the system clipboard, exactly as given.
///
/// - macOS: pbcopy
/// - Linux: wl-copy, then xclip, then xsel
/// - Windows: clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    if TOOLS.is_empty() {
        return Err(SnipzError::Clipboard(
            "not supported on this platform".to_string(),
        ));
    }

    let mut last_error = String::new();
    for tool in TOOLS {
        match pipe_to(tool, text) {
            Ok(()) => {
                tracing::debug!(program = tool.program, bytes = text.len(), "copied to clipboard");
                return Ok(());
            }
            Err(e) => {
                tracing::debug!(program = tool.program, error = %e, "clipboard tool failed");
                last_error = e;
            }
        }
    }

    Err(SnipzError::Clipboard(format!(
        "{} (install one of: {})",
        last_error,
        tool_names()
    )))
}

fn tool_names() -> String {
    TOOLS
        .iter()
        .map(|t| t.program)
        .collect::<Vec<_>>()
        .join(", ")
}

fn pipe_to(tool: &ClipboardTool, text: &str) -> std::result::Result<(), String> {
    let mut child = Command::new(tool.program)
        .args(tool.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("failed to spawn {}: {}", tool.program, e))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| format!("failed to write to {}: {}", tool.program, e))?;
    }

    let status = child
        .wait()
        .map_err(|e| format!("failed to wait for {}: {}", tool.program, e))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("{} exited with {}", tool.program, status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_an_error() {
        let tool = ClipboardTool {
            program: "snipz-no-such-clipboard-tool",
            args: &[],
        };
        let err = pipe_to(&tool, "x").unwrap_err();
        assert!(err.contains("failed to spawn snipz-no-such-clipboard-tool"));
    }

    #[cfg(unix)]
    #[test]
    fn failing_program_reports_status() {
        let tool = ClipboardTool {
            program: "false",
            args: &[],
        };
        let err = pipe_to(&tool, "").unwrap_err();
        assert!(err.contains("false exited with"));
    }

    #[cfg(unix)]
    #[test]
    fn accepting_program_succeeds() {
        let tool = ClipboardTool {
            program: "cat",
            args: &[],
        };
        assert!(pipe_to(&tool, "payload").is_ok());
    }
}
