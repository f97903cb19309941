//! String coercion at the storage boundary
//!
//! The config store only holds strings. Every conversion between typed
//! setting values and stored strings goes through this module.

use serde_json::Value;

pub const TRUE: &str = "1";
pub const FALSE: &str = "0";

const GROUP_SEPARATOR: &str = ",";

pub fn encode_bool(value: bool) -> &'static str {
	if value { TRUE } else { FALSE }
}

/// Stored strings are false when empty or `"0"`, true otherwise
pub fn decode_bool(stored: &str) -> bool {
	!(stored.is_empty() || stored == FALSE)
}

/// Boolean through integer conversion, as applied to incoming calendar toggles
pub fn to_int_bool(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => {
			if let Some(i) = n.as_i64() {
				i != 0
			} else if let Some(u) = n.as_u64() {
				u != 0
			} else {
				n.as_f64().is_some_and(|f| f.trunc() != 0.0)
			}
		}
		Value::String(s) => leading_int(s) != 0,
		Value::Array(items) => !items.is_empty(),
		Value::Object(map) => !map.is_empty(),
	}
}

/// Value of the leading integer prefix of a string (0 if there is none)
fn leading_int(s: &str) -> i64 {
	let s = s.trim_start();
	let (negative, digits) = match s.as_bytes().first() {
		Some(b'-') => (true, &s[1..]),
		Some(b'+') => (false, &s[1..]),
		_ => (false, s),
	};
	let mut value: i64 = 0;
	for c in digits.chars() {
		let Some(d) = c.to_digit(10) else { break };
		value = value.saturating_mul(10).saturating_add(i64::from(d));
	}
	if negative { -value } else { value }
}

/// Stored form of a board value written verbatim
pub fn encode_verbatim(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		Value::Bool(b) => encode_bool(*b).to_string(),
		Value::Number(n) => n.to_string(),
		Value::Array(_) | Value::Object(_) => value.to_string(),
	}
}

pub fn encode_group_ids<S: AsRef<str>>(ids: &[S]) -> String {
	ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(GROUP_SEPARATOR)
}

/// Split a stored group limit. An empty string is an empty list.
pub fn decode_group_ids(stored: &str) -> Vec<&str> {
	if stored.is_empty() {
		return Vec::new();
	}
	stored.split(GROUP_SEPARATOR).collect()
}

/// Whether a group id survives a join/split round through storage
pub fn is_storable_group_id(id: &str) -> bool {
	!id.is_empty() && !id.contains(GROUP_SEPARATOR)
}


// vim: ts=4
