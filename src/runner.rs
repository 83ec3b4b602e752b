//! Process execution and host probing
//!
//! The dispatcher talks to the outside world through [`ProcessRunner`]; the
//! shipped implementation executes the `ipmitool` binary found on `PATH`
//! and pings the host for the construction-time liveness check.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::config::IpmiConfig;
use crate::error::{IpmiError, Result};

/// Seam between the dispatcher and the external tool
pub trait ProcessRunner {
    /// Run one sub-command with the connection parameters applied and
    /// return raw stdout.
    ///
    /// Implementations report [`IpmiError::Execution`] when the process
    /// cannot be run at all or exits nonzero with nothing on stdout;
    /// otherwise stdout is handed back for parsing regardless of the exit
    /// status.
    fn run(&self, config: &IpmiConfig, command: &str, args: &[String]) -> Result<String>;

    /// Reachability probe for the construction-time host check
    fn ping(&self, host: &str) -> bool;
}

/// Runner that executes the real `ipmitool` binary
#[derive(Debug, Clone)]
pub struct IpmitoolRunner {
    binary: PathBuf,
}

impl IpmitoolRunner {
    /// Locate `ipmitool` on `PATH`
    pub fn discover() -> Result<Self> {
        env::var_os("PATH")
            .and_then(|paths| find_in_path("ipmitool", env::split_paths(&paths)))
            .map(|binary| Self { binary })
            .ok_or_else(|| IpmiError::Construction("Missing ipmitool".to_string()))
    }

    /// Use an explicit binary path instead of searching `PATH`
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// The resolved binary path
    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

/// First `dirs` entry containing a file named `name`
fn find_in_path(name: &str, dirs: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    dirs.into_iter()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

impl ProcessRunner for IpmitoolRunner {
    fn run(&self, config: &IpmiConfig, command: &str, args: &[String]) -> Result<String> {
        let mut cmd = Command::new(&self.binary);
        for (flag, value) in &config.extra_flags {
            cmd.arg(format!("-{}", flag)).arg(value);
        }
        cmd.args(["-H", config.host.as_str()]);
        cmd.args(["-U", config.user.as_str()]);
        cmd.args(["-P", config.password.as_str()]);
        cmd.arg(command);
        cmd.args(args);

        debug!(host = %config.host, command = %command, args = ?args, "running ipmitool");

        let output = cmd.output().map_err(|e| IpmiError::Execution {
            status: None,
            detail: format!("failed to run ipmitool: {}", e),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if stdout.is_empty() && !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                host = %config.host,
                command = %command,
                status = ?output.status.code(),
                "ipmitool failed with no output"
            );
            return Err(IpmiError::Execution {
                status: output.status.code(),
                detail: stderr.trim().to_string(),
            });
        }
        Ok(stdout)
    }

    fn ping(&self, host: &str) -> bool {
        Command::new("ping")
            .args(["-q", "-c", "2", host])
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_in_path_hit() {
        let dir = tempfile::tempdir().unwrap();
        let other = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ipmitool"), b"").unwrap();

        let found = find_in_path(
            "ipmitool",
            vec![other.path().to_path_buf(), dir.path().to_path_buf()],
        );
        assert_eq!(found, Some(dir.path().join("ipmitool")));
    }

    #[test]
    fn test_find_in_path_miss() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(find_in_path("ipmitool", vec![dir.path().to_path_buf()]), None);
    }

    #[test]
    fn test_find_in_path_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("ipmitool")).unwrap();

        assert_eq!(find_in_path("ipmitool", vec![dir.path().to_path_buf()]), None);
    }

    #[test]
    fn test_with_binary() {
        let runner = IpmitoolRunner::with_binary("/usr/local/bin/ipmitool");
        assert_eq!(runner.binary(), Path::new("/usr/local/bin/ipmitool"));
    }
}
