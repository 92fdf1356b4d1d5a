//! Display pass over a compile response tree.
//!
//! Produces an indented, human-readable rendering. Long primitive values are
//! truncated for display only; persistence always sees the full value.

use serde_json::Value;

use super::malformed_hex_chars;

/// Characters of a primitive value shown before truncation.
const DISPLAY_LIMIT: usize = 3000;

/// Marker appended to a truncated value.
const TRUNCATION_MARKER: &str = " ...";

/// Marker for a node kind the walk does not expect. The rendering exists for
/// inspection, so the walk degrades instead of failing.
const UNEXPECTED_MARKER: &str = "<!!!>";

/// Render the tree as an indented listing.
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    render_node(&mut out, "", value, "");
    out
}

fn render_node(out: &mut String, key: &str, value: &Value, indent: &str) {
    match value {
        Value::String(s) => {
            warn_on_malformed_hex(key, s);
            push_line(out, indent, key, &display_value(s));
        }
        Value::Number(n) => push_line(out, indent, key, &n.to_string()),
        Value::Bool(b) => push_line(out, indent, key, &b.to_string()),
        Value::Object(members) => {
            push_line(out, indent, key, "{");
            let deeper = format!("{indent}  ");
            for (member_key, member) in members {
                render_node(out, member_key, member, &deeper);
            }
            out.push_str(indent);
            out.push_str("}\n");
        }
        Value::Array(elements) => {
            push_line(out, indent, key, "[");
            let deeper = format!("{indent}  ");
            for element in elements {
                render_node(out, "", element, &deeper);
            }
            out.push_str(indent);
            out.push_str("]\n");
        }
        Value::Null => push_line(out, indent, key, &format!("{UNEXPECTED_MARKER} null")),
    }
}

fn push_line(out: &mut String, indent: &str, key: &str, rendered: &str) {
    out.push_str(indent);
    if !key.is_empty() {
        out.push_str(key);
        out.push_str(": ");
    }
    out.push_str(rendered);
    out.push('\n');
}

/// Truncate a value for display, appending the marker when shortened.
fn display_value(value: &str) -> String {
    let mut chars = value.char_indices();
    match chars.nth(DISPLAY_LIMIT) {
        None => value.to_string(),
        Some((cut, _)) => format!("{}{}", &value[..cut], TRUNCATION_MARKER),
    }
}

fn warn_on_malformed_hex(key: &str, value: &str) {
    if let Some(count) = malformed_hex_chars(value) {
        if count > 0 {
            tracing::warn!(key, count, "hex payload contains non-hex characters");
        }
    }
}
