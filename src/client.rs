//! Client dispatcher: argument validation, invocation, and schema routing

use tracing::debug;

use crate::command::{ChassisAction, ChannelAction, UserAction};
use crate::config::IpmiConfig;
use crate::error::{IpmiError, Result};
use crate::parse::{parse_rows, parse_table};
use crate::record::{Record, Value};
use crate::runner::{IpmitoolRunner, ProcessRunner};
use crate::schema;

/// Typed client over the `ipmitool` CLI.
///
/// Each operation validates its arguments, performs at most one tool
/// invocation (plus one auxiliary `user list` query for the channel access
/// operations), and parses the output synchronously into a [`Record`].
/// Validation failures surface before anything is invoked; nothing retries.
///
/// The client holds no mutable state between calls, so independent clients
/// are safe to use from separate threads.
#[derive(Debug)]
pub struct IpmiClient<R = IpmitoolRunner> {
    config: IpmiConfig,
    runner: R,
}

impl IpmiClient<IpmitoolRunner> {
    /// Connect with the shipped runner: locates `ipmitool` on `PATH`,
    /// checks the required connection fields, and pings the host unless
    /// `check_host` is off.
    pub fn new(config: IpmiConfig) -> Result<Self> {
        let runner = IpmitoolRunner::discover()?;
        Self::with_runner(config, runner)
    }
}

impl<R: ProcessRunner> IpmiClient<R> {
    /// Construct over a custom runner, with the same construction-time
    /// checks as [`IpmiClient::new`]
    pub fn with_runner(config: IpmiConfig, runner: R) -> Result<Self> {
        config.validate()?;
        if config.check_host && !runner.ping(&config.host) {
            return Err(IpmiError::Construction(
                "Host is down or invalid".to_string(),
            ));
        }
        Ok(Self { config, runner })
    }

    /// The connection parameters this client was built with
    pub fn config(&self) -> &IpmiConfig {
        &self.config
    }

    /// Current sensor readings, one multi-valued entry per sensor.
    ///
    /// Keys are normalized sensor names; values keep the remaining columns
    /// (reading, status, thresholds) in order.
    pub fn sensor(&self) -> Result<Record> {
        let output = self.invoke("sensor", Vec::new())?;
        Ok(parse_table(&output, &schema::SENSOR))
    }

    /// Sensor data records, shaped like [`sensor`](Self::sensor)
    pub fn sdr(&self) -> Result<Record> {
        let output = self.invoke("sdr", Vec::new())?;
        Ok(parse_table(&output, &schema::SENSOR))
    }

    /// System event log summary
    pub fn sel(&self) -> Result<Record> {
        let output = self.invoke("sel", Vec::new())?;
        Ok(parse_table(&output, &schema::EVENT_LOG))
    }

    /// Query or control the chassis.
    ///
    /// `status`, `restart_cause`, `poh`, and `selftest` take no arguments
    /// and return colon tables. `power` and `bootdev` need at least one
    /// argument and return a single `result` field holding the tool's
    /// acknowledgement. `policy` needs a state; the state `list` returns a
    /// colon table, anything else is a set action with a `result` field.
    pub fn chassis(&self, action: &str, args: &[&str]) -> Result<Record> {
        let action: ChassisAction = action.parse()?;
        match action {
            ChassisAction::Status
            | ChassisAction::RestartCause
            | ChassisAction::Poh
            | ChassisAction::Selftest => {
                let output = self.invoke("chassis", vec![action.as_str().to_string()])?;
                Ok(parse_table(&output, &schema::CHASSIS))
            }
            ChassisAction::Power | ChassisAction::Bootdev => {
                require_args(
                    args,
                    1,
                    &format!("{} requires an additional argument", action),
                )?;
                let output = self.invoke("chassis", with_action(action.as_str(), args))?;
                Ok(result_record(&output))
            }
            ChassisAction::Policy => {
                require_args(args, 1, "Policy requires a state")?;
                let output = self.invoke("chassis", with_action(action.as_str(), args))?;
                if args == ["list"] {
                    Ok(parse_table(&output, &schema::CHASSIS))
                } else {
                    Ok(result_record(&output))
                }
            }
        }
    }

    /// Shortcut for [`chassis`](Self::chassis) with the `power` action
    pub fn power(&self, state: &str) -> Result<Record> {
        self.chassis("power", &[state])
    }

    /// Channel configuration and authentication.
    ///
    /// `authcap` and `info` return colon tables; `getciphers` returns rows
    /// keyed `id<n>`. `getaccess` and `setaccess` re-query the user list on
    /// the given channel and refuse a uid that is not present. `setaccess`
    /// rewrites its privilege argument to `privilege=<value>` and returns
    /// an empty record, since the tool prints nothing for it.
    pub fn channel(&self, action: &str, args: &[&str]) -> Result<Record> {
        let action: ChannelAction = action.parse()?;
        match action {
            ChannelAction::Authcap => {
                require_args(args, 1, "Authcap requires a channel number and privilege")?;
                let output = self.invoke("channel", with_action(action.as_str(), args))?;
                Ok(parse_table(&output, &schema::CHANNEL))
            }
            ChannelAction::Info => {
                require_args(args, 1, "Info requires a channel number")?;
                let output = self.invoke("channel", with_action(action.as_str(), args))?;
                Ok(parse_table(&output, &schema::CHANNEL))
            }
            ChannelAction::Getciphers => {
                require_args(args, 1, "getciphers requires a protocol and channel number")?;
                let output = self.invoke("channel", with_action(action.as_str(), args))?;
                Ok(parse_rows(&output, "id"))
            }
            ChannelAction::Getaccess => {
                require_args(args, 2, "getaccess requires a channel number and uid")?;
                self.check_user(args[0], args[1])?;
                let output = self.invoke("channel", with_action(action.as_str(), args))?;
                Ok(parse_table(&output, &schema::CHANNEL))
            }
            ChannelAction::Setaccess => {
                require_args(
                    args,
                    3,
                    "setaccess requires a channel number, uid, and privilege level",
                )?;
                self.check_user(args[0], args[1])?;
                let mut argv = vec![
                    action.as_str().to_string(),
                    args[0].to_string(),
                    args[1].to_string(),
                    format!("privilege={}", args[2]),
                ];
                argv.extend(args[3..].iter().map(|s| s.to_string()));
                self.invoke("channel", argv)?;
                Ok(Record::new())
            }
        }
    }

    /// User management.
    ///
    /// `list` needs a channel number and returns rows keyed `uid<n>`. The
    /// set actions (`set name`, `set password`, `priv`) and the toggles
    /// (`disable`, `enable`) print nothing and return an empty record.
    pub fn user(&self, action: &str, args: &[&str]) -> Result<Record> {
        let action: UserAction = action.parse()?;
        match action {
            UserAction::List => {
                require_args(args, 1, "List requires a channel number")?;
                let output = self.invoke("user", with_action(action.as_str(), args))?;
                Ok(parse_rows(&output, "uid"))
            }
            UserAction::SetName | UserAction::SetPassword | UserAction::Priv => {
                require_args(args, 2, &format!("{} requires 2 arguments", action))?;
                self.invoke("user", with_action(action.as_str(), args))?;
                Ok(Record::new())
            }
            UserAction::Disable | UserAction::Enable => {
                require_args(args, 1, &format!("{} requires a UID", action))?;
                self.invoke("user", with_action(action.as_str(), args))?;
                Ok(Record::new())
            }
        }
    }

    /// Re-query the user listing and confirm the uid exists on the channel
    fn check_user(&self, channel: &str, uid: &str) -> Result<()> {
        let users = self.user("list", &[channel])?;
        if users.contains_key(&format!("uid{}", uid)) {
            Ok(())
        } else {
            debug!(channel = %channel, uid = %uid, "uid absent from user list");
            Err(IpmiError::InvalidArgument("Invalid user specified".to_string()))
        }
    }

    fn invoke(&self, command: &str, args: Vec<String>) -> Result<String> {
        self.runner.run(&self.config, command, &args)
    }
}

/// The action token(s) followed by the caller-supplied arguments, one argv
/// entry each
fn with_action(action: &str, args: &[&str]) -> Vec<String> {
    action
        .split_whitespace()
        .map(str::to_string)
        .chain(args.iter().map(|s| s.to_string()))
        .collect()
}

fn require_args(args: &[&str], min: usize, message: &str) -> Result<()> {
    if args.len() < min {
        return Err(IpmiError::InvalidArgument(message.to_string()));
    }
    Ok(())
}

/// Single `result` field holding the tool's acknowledgement, newlines
/// stripped
fn result_record(output: &str) -> Record {
    let mut record = Record::new();
    record.insert("result".to_string(), Value::Text(output.replace('\n', "")));
    record
}
