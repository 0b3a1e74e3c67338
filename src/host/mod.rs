//! The host object model the references read through.
//!
//! References never touch host objects directly, they go through
//! [`crate::meta`], which records dependency tags on the way.

mod dict;
mod proxy;

pub use dict::Dict;
pub use proxy::Proxy;

use crate::{Result, Tag, Value};

/// Name of the property proxies expose their truthiness under.
pub const TRUTHY_KEY: &str = "isTruthy";

pub trait HostObject: 'static {
	/// Reads a property without recording anything.
	fn get(&self, key: &str) -> Result<Value>;

	fn set(&self, key: &str, value: Value) -> Result<()>;

	/// Tag that advances whenever anything on the object changes.
	fn tag(&self) -> Tag;

	/// Tag that advances whenever `key` changes.
	fn tag_for_property(&self, key: &str) -> Tag;

	/// Whether truthiness has to be read through [`TRUTHY_KEY`].
	fn is_proxy(&self) -> bool {
		false
	}

	/// Whether truthiness is decided by the `length` property.
	fn is_array(&self) -> bool {
		false
	}

	/// Registration hook called before a reference starts reading `key`.
	fn watch_key(&self, _key: &str) {}

	fn type_name(&self) -> &'static str {
		"object"
	}
}
