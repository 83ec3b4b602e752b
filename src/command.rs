//! Sub-command action names, fixed at the API boundary
//!
//! Raw action strings convert into these enumerations before any dispatch;
//! an unknown name is rejected with `InvalidArgument` and never reaches the
//! external tool.

use std::fmt;
use std::str::FromStr;

use crate::error::IpmiError;

/// `chassis` sub-command actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChassisAction {
    /// Query chassis status
    Status,
    /// Query the cause of the last restart
    RestartCause,
    /// Query the power-on hours counter
    Poh,
    /// Query self-test results
    Selftest,
    /// Power control (on, off, cycle, reset, soft, ...)
    Power,
    /// Power restore policy (list, always-on, always-off, previous)
    Policy,
    /// Override the boot device for the next boot
    Bootdev,
}

impl ChassisAction {
    /// The literal token passed to the tool
    pub fn as_str(&self) -> &'static str {
        match self {
            ChassisAction::Status => "status",
            ChassisAction::RestartCause => "restart_cause",
            ChassisAction::Poh => "poh",
            ChassisAction::Selftest => "selftest",
            ChassisAction::Power => "power",
            ChassisAction::Policy => "policy",
            ChassisAction::Bootdev => "bootdev",
        }
    }
}

impl fmt::Display for ChassisAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChassisAction {
    type Err = IpmiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" => Ok(ChassisAction::Status),
            "restart_cause" => Ok(ChassisAction::RestartCause),
            "poh" => Ok(ChassisAction::Poh),
            "selftest" => Ok(ChassisAction::Selftest),
            "power" => Ok(ChassisAction::Power),
            "policy" => Ok(ChassisAction::Policy),
            "bootdev" => Ok(ChassisAction::Bootdev),
            _ => Err(IpmiError::InvalidArgument(
                "Invalid Chassis Command".to_string(),
            )),
        }
    }
}

/// `channel` sub-command actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelAction {
    /// Query authentication capabilities
    Authcap,
    /// Query a user's access on a channel
    Getaccess,
    /// Set a user's access on a channel
    Setaccess,
    /// Query channel info
    Info,
    /// List supported cipher suites
    Getciphers,
}

impl ChannelAction {
    /// The literal token passed to the tool
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelAction::Authcap => "authcap",
            ChannelAction::Getaccess => "getaccess",
            ChannelAction::Setaccess => "setaccess",
            ChannelAction::Info => "info",
            ChannelAction::Getciphers => "getciphers",
        }
    }
}

impl fmt::Display for ChannelAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChannelAction {
    type Err = IpmiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "authcap" => Ok(ChannelAction::Authcap),
            "getaccess" => Ok(ChannelAction::Getaccess),
            "setaccess" => Ok(ChannelAction::Setaccess),
            "info" => Ok(ChannelAction::Info),
            "getciphers" => Ok(ChannelAction::Getciphers),
            _ => Err(IpmiError::InvalidArgument(
                "Invalid Channel Command".to_string(),
            )),
        }
    }
}

/// `user` sub-command actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// List users on a channel
    List,
    /// Rename a user
    SetName,
    /// Change a user's password
    SetPassword,
    /// Change a user's privilege level
    Priv,
    /// Disable a user
    Disable,
    /// Enable a user
    Enable,
}

impl UserAction {
    /// The literal token(s) passed to the tool; the two-word actions are
    /// split into separate argv entries at invocation time
    pub fn as_str(&self) -> &'static str {
        match self {
            UserAction::List => "list",
            UserAction::SetName => "set name",
            UserAction::SetPassword => "set password",
            UserAction::Priv => "priv",
            UserAction::Disable => "disable",
            UserAction::Enable => "enable",
        }
    }
}

impl fmt::Display for UserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserAction {
    type Err = IpmiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(UserAction::List),
            "set name" => Ok(UserAction::SetName),
            "set password" => Ok(UserAction::SetPassword),
            "priv" => Ok(UserAction::Priv),
            "disable" => Ok(UserAction::Disable),
            "enable" => Ok(UserAction::Enable),
            _ => Err(IpmiError::InvalidArgument(
                "Invalid User Command".to_string(),
            )),
        }
    }
}
