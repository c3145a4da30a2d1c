//! Subprocess execution with live output relay.
//!
//! The upload tool can run for minutes on a large sync, so its stdout and
//! stderr are inherited rather than captured: the operator watches the tool's
//! own progress output directly. Only the exit status is interpreted.

use std::process::Stdio;
use tokio::process::Command;

use crate::error::SubprocessError;

/// Run an external command to completion, relaying its output.
///
/// Resolves on exit code 0; any other exit carries the code in the error.
pub async fn run_command(program: &str, args: &[String]) -> Result<(), SubprocessError> {
    let rendered = render_command(program, args);
    log::debug!("running: {rendered}");

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .status()
        .await
        .map_err(|source| SubprocessError::Spawn {
            command: rendered.clone(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(SubprocessError::ExitStatus {
            command: rendered,
            code: status.code(),
        })
    }
}

/// Render a command line for logs and error messages.
///
/// Display only; execution never goes through a shell.
fn render_command(program: &str, args: &[String]) -> String {
    let mut rendered = String::from(program);
    for arg in args {
        rendered.push(' ');
        if arg.contains(char::is_whitespace) {
            rendered.push('"');
            rendered.push_str(arg);
            rendered.push('"');
        } else {
            rendered.push_str(arg);
        }
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell_args(script: &str) -> Vec<String> {
        vec!["-c".to_string(), script.to_string()]
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn zero_exit_code_resolves() {
        run_command("sh", &shell_args("exit 0")).await.expect("exit 0");
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn non_zero_exit_code_carries_the_code() {
        let err = run_command("sh", &shell_args("exit 3")).await.unwrap_err();
        match err {
            SubprocessError::ExitStatus { code, .. } => assert_eq!(code, Some(3)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_binary_is_a_spawn_error() {
        let err = run_command("definitely-not-a-real-binary", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, SubprocessError::Spawn { .. }));
    }

    #[test]
    fn rendering_quotes_arguments_with_spaces() {
        let rendered = render_command(
            "ucd",
            &["releases".to_string(), "create".to_string(), "--notes".to_string(), "weekly build".to_string()],
        );
        assert_eq!(rendered, "ucd releases create --notes \"weekly build\"");
    }
}
