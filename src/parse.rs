//! Output parsing: field-label normalization, delimited-record splitting,
//! line filtering, and record assembly

use crate::record::{Record, Value};
use crate::schema::{LineFilter, Schema, ValueMode};

/// Normalize a raw field label into a canonical key.
///
/// Whitespace runs collapse to single underscores, periods are dropped, a
/// leading `#` becomes the literal `number`, and the result is folded to
/// lowercase: `"Fan 1 RPM"` and `"Fan  1 RPM"` both map to `fan_1_rpm`,
/// `"# User Name"` maps to `number_user_name`. Total over any input; the
/// empty label maps to the empty key.
pub fn normalize_key(label: &str) -> String {
    let mut key = String::with_capacity(label.len());
    let mut prev_ws = false;
    for ch in label.chars() {
        if ch.is_whitespace() {
            if !prev_ws {
                key.push('_');
            }
            prev_ws = true;
        } else {
            prev_ws = false;
            if ch == '.' {
                continue;
            }
            key.extend(ch.to_lowercase());
        }
    }
    match key.strip_prefix('#') {
        Some(rest) => format!("number{}", rest),
        None => key,
    }
}

/// Split one output line into a normalized key and trimmed value at the
/// first delimiter occurrence, whitespace around the delimiter absorbed.
///
/// Lines without the delimiter degrade to a key for the whole trimmed line
/// with an empty value; callers are expected to have filtered such lines
/// out when they are not meaningful. Never fails.
pub fn split_line(line: &str, delimiter: char) -> (String, String) {
    match line.find(delimiter) {
        Some(at) => {
            let label = &line[..at];
            let value = &line[at + delimiter.len_utf8()..];
            (normalize_key(label.trim()), value.trim().to_string())
        }
        None => (normalize_key(line.trim()), String::new()),
    }
}

/// Split a multi-valued field on delimiter occurrences that have whitespace
/// on both sides: `"3000 RPM | ok"` with `|` yields `["3000 RPM", "ok"]`.
/// A bare delimiter inside a sub-value (`"a|b"`) is left alone. The empty
/// value yields no sub-values.
pub fn split_values(value: &str, delimiter: char) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    let chars: Vec<(usize, char)> = value.char_indices().collect();
    let mut parts = Vec::new();
    let mut start = 0;
    for i in 1..chars.len().saturating_sub(1) {
        let (at, ch) = chars[i];
        if ch == delimiter && chars[i - 1].1.is_whitespace() && chars[i + 1].1.is_whitespace() {
            parts.push(value[start..at].trim().to_string());
            start = at + ch.len_utf8();
        }
    }
    parts.push(value[start..].trim().to_string());
    parts
}

/// Select the data rows from raw output before splitting
pub fn filter_lines(raw: &str, filter: LineFilter, delimiter: char) -> Vec<&str> {
    match filter {
        LineFilter::NonBlank => raw.lines().filter(|line| !line.trim().is_empty()).collect(),
        LineFilter::Delimited => raw.lines().filter(|line| line.contains(delimiter)).collect(),
        LineFilter::DelimitedTrimmed => raw
            .lines()
            .filter(|line| line.contains(delimiter))
            .map(str::trim)
            .filter(|line| !line.ends_with(delimiter))
            .collect(),
        LineFilter::LeadingDigit => raw
            .lines()
            .filter(|line| line.starts_with(|c: char| c.is_ascii_digit()))
            .collect(),
    }
}

/// Parse delimiter-separated output into a record per the given schema
pub fn parse_table(raw: &str, schema: &Schema) -> Record {
    let mut record = Record::new();
    for line in filter_lines(raw, schema.filter, schema.delimiter) {
        let (key, value) = split_line(line, schema.delimiter);
        let value = match schema.values {
            ValueMode::Single => Value::Text(value),
            ValueMode::Split => Value::List(split_values(&value, schema.delimiter)),
        };
        record.insert(key, value);
    }
    record
}

/// Parse id-keyed row output (`channel getciphers`, `user list`): each data
/// row is keyed by `<prefix><first token>` and valued by the remaining
/// whitespace-separated tokens in order
pub fn parse_rows(raw: &str, prefix: &str) -> Record {
    let mut record = Record::new();
    for line in filter_lines(raw, LineFilter::LeadingDigit, ' ') {
        let mut tokens = line.split_whitespace();
        let Some(id) = tokens.next() else { continue };
        record.insert(
            format!("{}{}", prefix, id),
            Value::List(tokens.map(str::to_string).collect()),
        );
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_key("Fan 1 RPM"), "fan_1_rpm");
        assert_eq!(normalize_key("Fan  1 RPM"), "fan_1_rpm");
        assert_eq!(normalize_key("Fan \t 1  RPM"), "fan_1_rpm");
    }

    #[test]
    fn test_normalize_drops_periods() {
        assert_eq!(normalize_key("Sensor ID"), "sensor_id");
        assert_eq!(normalize_key("Firmware Rev. 1"), "firmware_rev_1");
        assert_eq!(normalize_key("IPMI v1.5"), "ipmi_v15");
    }

    #[test]
    fn test_normalize_leading_hash() {
        assert_eq!(normalize_key("#1"), "number1");
        assert_eq!(normalize_key("#User"), "numberuser");
        assert_eq!(normalize_key("# User Name"), "number_user_name");
        // only a leading hash is rewritten
        assert_eq!(normalize_key("User #1"), "user_#1");
    }

    #[test]
    fn test_normalize_is_total_and_idempotent() {
        for label in ["", "  ", "Fan 1 RPM", "# User Name", "a.b.c", "FAN1"] {
            let key = normalize_key(label);
            assert_eq!(normalize_key(&key), key, "not idempotent for {:?}", label);
        }
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn test_split_line_round_trip() {
        let (key, value) = split_line("Label : Value", ':');
        assert_eq!(key, normalize_key("Label"));
        assert_eq!(value, "Value");
    }

    #[test]
    fn test_split_line_first_delimiter_wins() {
        let (key, value) = split_line("SEL Record : 12:34:56", ':');
        assert_eq!(key, "sel_record");
        assert_eq!(value, "12:34:56");
    }

    #[test]
    fn test_split_line_without_delimiter_degrades() {
        let (key, value) = split_line("SEL Information", ':');
        assert_eq!(key, "sel_information");
        assert_eq!(value, "");
    }

    #[test]
    fn test_split_values_preserves_order() {
        let parts = split_values("3000 RPM | ok", '|');
        assert_eq!(parts, vec!["3000 RPM", "ok"]);

        let parts = split_values("0x01 | 42 degrees C | ok | na | 5.00 | 10.00", '|');
        assert_eq!(parts.len(), 6);
        assert_eq!(parts[1], "42 degrees C");
        assert_eq!(parts[5], "10.00");
    }

    #[test]
    fn test_split_values_needs_surrounding_whitespace() {
        assert_eq!(split_values("a|b", '|'), vec!["a|b"]);
        assert_eq!(split_values("on", '|'), vec!["on"]);
        assert!(split_values("", '|').is_empty());
    }

    #[test]
    fn test_filter_non_blank() {
        let raw = "Fan1 | 3000 | ok\n\n   \nCPU Temp | 42 | ok\n";
        let lines = filter_lines(raw, LineFilter::NonBlank, '|');
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_filter_delimited_trimmed_drops_bare_headers() {
        let raw = "Channel 0x1 info:\n  Channel Medium Type   : 802.3 LAN\n  Alerting              :\n  Per-message Auth      : enabled\n";
        let lines = filter_lines(raw, LineFilter::DelimitedTrimmed, ':');
        assert_eq!(
            lines,
            vec![
                "Channel Medium Type   : 802.3 LAN",
                "Per-message Auth      : enabled"
            ]
        );
    }

    #[test]
    fn test_filter_leading_digit() {
        let raw = "ID  Name  Callin\n2   root  true\n3   ops   false\nTotal: 2\n";
        let lines = filter_lines(raw, LineFilter::LeadingDigit, ' ');
        assert_eq!(lines, vec!["2   root  true", "3   ops   false"]);
    }

    #[test]
    fn test_parse_table_chassis_status() {
        let raw = "System Power         : on\nPower Overload       : false\nLast Power Event     : command\n";
        let record = parse_table(raw, &crate::schema::CHASSIS);

        assert_eq!(record.len(), 3);
        assert_eq!(record.text("system_power"), Some("on"));
        assert_eq!(record.text("last_power_event"), Some("command"));
    }

    #[test]
    fn test_parse_table_sensor_multivalued() {
        let raw = "Fan1 RPM | 3000 RPM | ok\nCPU Temp | 42 degrees C | ok\n";
        let record = parse_table(raw, &crate::schema::SENSOR);

        let fan = record.values("fan1_rpm").unwrap();
        assert!(fan.len() >= 2);
        assert_eq!(fan[0], "3000 RPM");
        assert_eq!(fan[1], "ok");
        assert_eq!(record.values("cpu_temp").unwrap()[0], "42 degrees C");
    }

    #[test]
    fn test_parse_table_duplicate_keys_keep_last() {
        let raw = "Fan 1 RPM : 3000\nFan  1 RPM : 2800\n";
        let record = parse_table(raw, &crate::schema::CHASSIS);

        assert_eq!(record.len(), 1);
        assert_eq!(record.text("fan_1_rpm"), Some("2800"));
    }

    #[test]
    fn test_parse_rows_uid_keyed() {
        let raw = "ID  Name  Callin  Link Auth  IPMI Msg  Channel Priv Limit\n2   root  true    true       true      ADMINISTRATOR\n3   ops   false   true       true      USER\n";
        let record = parse_rows(raw, "uid");

        assert_eq!(record.len(), 2);
        let root = record.values("uid2").unwrap();
        assert_eq!(root[0], "root");
        assert_eq!(*root.last().unwrap(), "ADMINISTRATOR");
        assert!(record.contains_key("uid3"));
    }

    #[test]
    fn test_parse_rows_id_keyed_ciphers() {
        let raw = "ID   IANA    Auth Alg        Integrity Alg   Confidentiality Alg\n3    N/A     hmac_sha1       hmac_sha1_96    aes_cbc_128\n";
        let record = parse_rows(raw, "id");

        assert_eq!(record.len(), 1);
        assert_eq!(
            record.values("id3").unwrap(),
            &[
                "N/A".to_string(),
                "hmac_sha1".to_string(),
                "hmac_sha1_96".to_string(),
                "aes_cbc_128".to_string()
            ][..]
        );
    }
}
