//! # yt-dlp Module
//!
//! The seam between the adapter and the external extraction tool. The tool is
//! treated as a black box with a command-line contract: every invocation is a
//! list of arguments in, a fully buffered [`ProcessResult`] out.
//!
//! [`ToolRunner`] is the trait the actions depend on; [`SystemRunner`] is the
//! real implementation spawning the configured binary. The argument builders
//! in [`args`] are pure so the exact command lines can be asserted in tests.
//!
//! No timeout is applied. An unresponsive tool blocks the invocation until it
//! exits or the caller kills the process.

pub mod args;

use std::io::ErrorKind;

use async_trait::async_trait;
use tokio::process::Command;

use crate::{config::Config, error::AppError, types::ProcessResult};

#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Name of the program, used when rendering commands for diagnostics.
    fn binary(&self) -> &str;

    /// Runs the tool to completion with both streams captured.
    async fn run(&self, args: &[String]) -> Result<ProcessResult, AppError>;
}

/// Spawns the real binary through the search path.
pub struct SystemRunner {
    binary: String,
}

impl SystemRunner {
    pub fn new(config: &Config) -> Self {
        Self {
            binary: config.binary.clone(),
        }
    }
}

#[async_trait]
impl ToolRunner for SystemRunner {
    fn binary(&self) -> &str {
        &self.binary
    }

    async fn run(&self, args: &[String]) -> Result<ProcessResult, AppError> {
        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => AppError::ToolNotFound {
                    binary: self.binary.clone(),
                },
                _ => AppError::Spawn {
                    binary: self.binary.clone(),
                    source: e,
                },
            })?;

        Ok(ProcessResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
