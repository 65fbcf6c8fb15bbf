//! Common test utilities for integration tests.
//!
//! Runs the playfetch binary with a clean environment and captures its
//! output.

use std::path::Path;
use std::process::Command;

/// Captured result of one binary invocation.
pub(crate) struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Builder for a playfetch invocation.
pub(crate) struct CliRun {
    command: Command,
}

impl CliRun {
    pub(crate) fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let mut command = Command::new(env!("CARGO_BIN_EXE_playfetch"));
        command
            .args(args)
            .env_remove("PLAYFETCH_ENDPOINT")
            .env_remove("RUST_LOG");
        Self { command }
    }

    /// Points the binary at a configuration file.
    #[allow(dead_code)] // Only used by the config tests
    pub(crate) fn config(mut self, path: &Path) -> Self {
        self.command.arg("--config").arg(path);
        self
    }

    #[allow(dead_code)] // Only used by the endpoint tests
    pub(crate) fn env(mut self, key: &str, value: &str) -> Self {
        self.command.env(key, value);
        self
    }

    pub(crate) fn run(mut self) -> CliOutput {
        let output = self
            .command
            .output()
            .expect("Failed to run playfetch binary");

        CliOutput {
            status: output.status.code().expect("process terminated by signal"),
            stdout: String::from_utf8(output.stdout).expect("stdout is not UTF-8"),
            stderr: String::from_utf8(output.stderr).expect("stderr is not UTF-8"),
        }
    }
}
