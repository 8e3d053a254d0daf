//! Child-process execution for CAD file conversions.
//!
//! Executes the external conversion tool with timeout management,
//! output capturing, and output-file validation.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing;

use crate::error::ConversionError;

/// Parameters for executing a conversion.
#[derive(Debug, Clone)]
pub struct ExecutionParams {
    /// The command to execute.
    pub command: String,
    /// Arguments (after placeholder substitution).
    pub args: Vec<String>,
    /// Timeout in seconds.
    pub timeout_seconds: u64,
    /// Path to the input file.
    pub input_path: PathBuf,
    /// Path where output must be written.
    pub output_path: PathBuf,
}

/// Substitute template placeholders in arguments.
///
/// `{input}` and `{output}` are replaced with the source and target
/// paths.
pub fn substitute_args(template_args: &[String], input: &Path, output: &Path) -> Vec<String> {
    let input_str = input.to_string_lossy();
    let output_str = output.to_string_lossy();

    template_args
        .iter()
        .map(|arg| {
            arg.replace("{input}", &input_str)
                .replace("{output}", &output_str)
        })
        .collect()
}

/// Execute a conversion command and validate its output file.
pub async fn execute(params: &ExecutionParams) -> Result<(), ConversionError> {
    let start = std::time::Instant::now();

    tracing::info!(
        command = %params.command,
        input = %params.input_path.display(),
        output = %params.output_path.display(),
        "Executing conversion"
    );

    let mut cmd = Command::new(&params.command);
    cmd.args(&params.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let timeout = Duration::from_secs(params.timeout_seconds);

    let output = match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConversionError::CommandNotFound(params.command.clone()));
        }
        Ok(Err(e)) => return Err(ConversionError::Io(e)),
        Err(_) => {
            tracing::error!(
                command = %params.command,
                timeout_seconds = params.timeout_seconds,
                "Conversion timed out"
            );
            return Err(ConversionError::Timeout {
                timeout_seconds: params.timeout_seconds,
            });
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let code = match output.status.code() {
            Some(code) => code,
            None => return Err(ConversionError::Killed),
        };
        tracing::error!(
            command = %params.command,
            exit_code = code,
            stderr = %stderr.chars().take(500).collect::<String>(),
            "Conversion failed"
        );
        return Err(ConversionError::ProcessFailed {
            code,
            stderr: stderr.chars().take(2000).collect(),
        });
    }

    let output_size = match tokio::fs::metadata(&params.output_path).await {
        Ok(meta) => meta.len(),
        Err(_) => {
            return Err(ConversionError::OutputNotCreated {
                path: params.output_path.clone(),
            });
        }
    };
    if output_size == 0 {
        return Err(ConversionError::OutputEmpty {
            path: params.output_path.clone(),
        });
    }

    tracing::info!(
        command = %params.command,
        duration_ms = start.elapsed().as_millis() as u64,
        output_size,
        "Conversion completed"
    );

    Ok(())
}
