use std::fmt::Write;

use serde_json::Value;

/// Join path segments with exactly one `/` between neighbours.
///
/// Only the slashes at the seams are touched: a leading slash on the first
/// segment and a trailing slash on the last one survive.
pub fn join(parts: &[&str]) -> String {
    let Some((first, rest)) = parts.split_first() else {
        return String::new();
    };
    rest.iter().fold(first.to_string(), |mut acc, part| {
        if acc.ends_with('/') {
            acc.pop();
        }
        acc.push('/');
        acc.push_str(part.strip_prefix('/').unwrap_or(*part));
        acc
    })
}

fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&b)
}

/// Percent-encode `s` the way JavaScript's `encodeURIComponent` does.
pub fn encode_uri_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        if is_unreserved(b) {
            out.push(b as char);
        } else {
            let _ = write!(out, "%{b:02X}");
        }
    }
    out
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Flatten a JSON object into escaped `(key, value)` query pairs.
///
/// Arrays produce one pair per element, nulls are skipped and anything but
/// an object yields no pairs.
pub fn value_to_pairs(value: &Value) -> Vec<(String, String)> {
    let Some(obj) = value.as_object() else {
        return Vec::new();
    };

    let mut pairs = Vec::new();
    for (key, v) in obj {
        let key = encode_uri_component(key);
        let items: &[Value] = match v {
            Value::Array(items) => items,
            single => std::slice::from_ref(single),
        };
        for item in items {
            if let Some(s) = scalar_to_string(item) {
                pairs.push((key.clone(), encode_uri_component(&s)));
            }
        }
    }
    pairs
}
