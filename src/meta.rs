//! Tracked entry points into the host property system.

use crate::host::HostObject;
use crate::{tracker, Error, Result, Tag, Value};

/// Reads `key` off `value`, reporting the property tag to the current
/// tracker. A string's `length` is its character count; any other read
/// through a non-object yields `undefined`.
pub fn get(value: &Value, key: &str) -> Result<Value> {
	match value {
		Value::Object(object) => {
			tracker::consume(object.tag_for_property(key));
			object.get(key)
		}
		// Strings are immutable, their length needs no tracking.
		Value::String(s) if key == "length" => Ok(s.chars().count().into()),
		_ => Ok(Value::Undefined),
	}
}

/// Writes `key` on `value`.
pub fn set(value: &Value, key: &str, new: Value) -> Result<()> {
	match value {
		Value::Object(object) => {
			#[cfg(feature = "debug")]
			crate::diagnostics::did_write(object, key);

			object.set(key, new)
		}
		other => Err(Error::NotAnObject {
			key: key.to_string(),
			type_name: other.type_name(),
		}),
	}
}

/// Tag for the identity of `value`. Primitives never change.
pub fn tag_for(value: &Value) -> Tag {
	match value {
		Value::Object(object) => object.tag(),
		_ => Tag::Constant,
	}
}

pub fn tag_for_property(value: &Value, key: &str) -> Tag {
	match value {
		Value::Object(object) => object.tag_for_property(key),
		_ => Tag::Constant,
	}
}

pub fn watch_key(value: &Value, key: &str) {
	if let Value::Object(object) = value {
		object.watch_key(key);
	}
}

pub fn is_proxy(value: &Value) -> bool {
	matches!(value, Value::Object(object) if object.is_proxy())
}

pub fn is_array(value: &Value) -> bool {
	matches!(value, Value::Object(object) if object.is_array())
}
