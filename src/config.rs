//! Connection parameters for one BMC

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{IpmiError, Result};

/// Connection parameters for one BMC.
///
/// `host`, `user`, and `password` are required and must be non-empty;
/// [`IpmiClient`](crate::IpmiClient) refuses construction otherwise. Extra
/// flags are appended to every invocation as `-<flag> <value>` pairs, in
/// flag order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpmiConfig {
    /// BMC address (hostname or IP)
    pub host: String,
    /// Username
    pub user: String,
    /// Password
    pub password: String,
    /// Ping the host before first use (default true)
    #[serde(default = "default_check_host")]
    pub check_host: bool,
    /// Extra CLI flags, e.g. `("I", "lanplus")`
    #[serde(default)]
    pub extra_flags: BTreeMap<String, String>,
}

fn default_check_host() -> bool {
    true
}

impl IpmiConfig {
    /// Create a new config with host checking enabled and no extra flags
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            password: password.into(),
            check_host: true,
            extra_flags: BTreeMap::new(),
        }
    }

    /// Enable or disable the construction-time liveness probe
    pub fn with_check_host(mut self, check_host: bool) -> Self {
        self.check_host = check_host;
        self
    }

    /// Append an extra CLI flag to every invocation
    pub fn with_flag(mut self, flag: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_flags.insert(flag.into(), value.into());
        self
    }

    /// Check the required-field invariant
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(IpmiError::Construction("Host is required".to_string()));
        }
        if self.user.is_empty() {
            return Err(IpmiError::Construction("User is required".to_string()));
        }
        if self.password.is_empty() {
            return Err(IpmiError::Construction("Password is required".to_string()));
        }
        Ok(())
    }
}
