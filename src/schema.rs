//! Per-command-family parsing rules
//!
//! `ipmitool` sub-commands disagree on output shape: `sensor` emits
//! pipe-separated multi-column rows, the `chassis` queries emit colon
//! tables, `channel info` interleaves headers with its colon rows, and the
//! id-keyed listings (`channel getciphers`, `user list`) are parsed as rows
//! rather than label/value pairs. Each family's rules live here, defined
//! once and shared by every call.

/// How the value portion of a data row is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueMode {
    /// One trimmed value per key
    Single,
    /// Value split on whitespace-delimiter-whitespace into ordered sub-values
    Split,
}

/// Which output lines count as data rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFilter {
    /// Every line with non-whitespace content
    NonBlank,
    /// Lines containing the delimiter
    Delimited,
    /// Lines containing the delimiter, trimmed, minus bare `Header:` rows
    /// with nothing after the delimiter
    DelimitedTrimmed,
    /// Lines whose first character is an ASCII digit
    LeadingDigit,
}

/// Parsing rules for one sub-command family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// Character separating label from value
    pub delimiter: char,
    /// Which lines are data rows
    pub filter: LineFilter,
    /// How values are stored
    pub values: ValueMode,
}

/// `sensor` and `sdr`: pipe-separated, every non-blank line is a data row,
/// values keep their remaining columns as an ordered list
pub const SENSOR: Schema = Schema {
    delimiter: '|',
    filter: LineFilter::NonBlank,
    values: ValueMode::Split,
};

/// `chassis status`/`restart_cause`/`poh`/`selftest` and `chassis policy
/// list`: colon-separated single values
pub const CHASSIS: Schema = Schema {
    delimiter: ':',
    filter: LineFilter::NonBlank,
    values: ValueMode::Single,
};

/// `channel authcap`/`getaccess`/`info`: colon rows interleaved with
/// headers, so only delimited lines survive and bare `Header:` rows drop
pub const CHANNEL: Schema = Schema {
    delimiter: ':',
    filter: LineFilter::DelimitedTrimmed,
    values: ValueMode::Single,
};

/// `sel`: colon-separated log fields
pub const EVENT_LOG: Schema = Schema {
    delimiter: ':',
    filter: LineFilter::Delimited,
    values: ValueMode::Single,
};
