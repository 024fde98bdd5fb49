use anyhow::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Render `value` as JSON with sorted keys and a four-space indent.
/// `None` renders as `null`.
pub fn render<T: Serialize>(value: &T) -> Result<String> {
    // serde_json::Map is ordered by key, so going through Value sorts every level
    let value = serde_json::to_value(value)?;
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}
