//! External command execution behind a replaceable seam.
//!
//! The drive substitution query and the external extractor backend are the
//! only places winfs spawns processes. Both go through [`CommandRunner`].

use std::io;
use std::process::Command;

/// Runs a program synchronously and returns its standard output.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// A non-zero exit status is reported as an error carrying the program's
    /// standard error text.
    fn run(&self, program: &str, args: &[String]) -> io::Result<String>;
}

/// Spawns real processes with `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdCommandRunner;

impl CommandRunner for StdCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<String> {
        log::debug!("running {program} {}", args.join(" "));
        let output = Command::new(program).args(args).output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(io::Error::other(format!(
                "{program} exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
