use std::io;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use serde_json::{Map, Value};

/// Rebuild `value` with every object's keys in ascending order, whatever map
/// ordering serde_json was compiled with.
pub fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let sorted: Map<String, Value> = entries
                .into_iter()
                .map(|(k, v)| (k, sort_keys(v)))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// Two-space indented JSON with sorted keys.
pub fn to_pretty_sorted<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let value = sort_keys(serde_json::to_value(value)?);
    serde_json::to_string_pretty(&value)
}

/// Compact JSON in field order with every non-ASCII character written as a
/// `\uXXXX` escape, so the output is safe to paste into any terminal.
pub fn to_compact_ascii<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, AsciiFormatter);
    value.serialize(&mut ser)?;
    // Only ASCII bytes are ever written.
    Ok(String::from_utf8_lossy(&out).into_owned())
}

struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..idx].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}
