//! Typed client over the `ipmitool` CLI
//!
//! This crate wraps the UNIX `ipmitool` command for common BMC management
//! tasks and turns its loosely structured, delimiter-separated output into
//! structured [`Record`]s addressable by normalized field keys. Every
//! operation maps to one tool invocation; the parsing rules per sub-command
//! family (delimiter, line filter, value shape) live in [`schema`].
//!
//! For the meaning of individual output fields, see the ipmitool man page.
//!
//! # Example
//!
//! ```no_run
//! use ipmiclient::{IpmiClient, IpmiConfig};
//!
//! fn main() -> ipmiclient::Result<()> {
//!     let config = IpmiConfig::new("192.168.1.1", "admin", "password");
//!     let client = IpmiClient::new(config)?;
//!
//!     let status = client.chassis("status", &[])?;
//!     println!("power: {:?}", status.text("system_power"));
//!
//!     let sensors = client.sensor()?;
//!     if let Some(fan) = sensors.values("fan1_rpm") {
//!         println!("fan1: {:?}", fan);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Power control
//!
//! ```no_run
//! use ipmiclient::{IpmiClient, IpmiConfig};
//!
//! # fn main() -> ipmiclient::Result<()> {
//! let config = IpmiConfig::new("192.168.1.1", "admin", "password")
//!     .with_flag("I", "lanplus")
//!     .with_check_host(false);
//! let client = IpmiClient::new(config)?;
//!
//! client.power("on")?;
//! client.chassis("bootdev", &["pxe"])?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod parse;
pub mod record;
pub mod runner;
pub mod schema;

pub use client::IpmiClient;
pub use command::{ChassisAction, ChannelAction, UserAction};
pub use config::IpmiConfig;
pub use error::{IpmiError, Result};
pub use record::{Record, Value};
pub use runner::{IpmitoolRunner, ProcessRunner};
pub use schema::{LineFilter, Schema, ValueMode};
