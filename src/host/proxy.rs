use std::cell::RefCell;
use std::rc::Rc;

use crate::host::{HostObject, TRUTHY_KEY};
use crate::{combine, meta, DirtyableTag, Result, Tag, Value};

const CONTENT_KEY: &str = "content";

/// A host object standing in for its `content`.
///
/// Truthiness is exposed as [`TRUTHY_KEY`]; every other key is read from
/// and written to the content.
pub struct Proxy {
	content: RefCell<Value>,
	content_tag: DirtyableTag,
	tag: DirtyableTag,
}

impl Proxy {
	pub fn new(content: impl Into<Value>) -> Rc<Self> {
		Rc::new(Proxy {
			content: RefCell::new(content.into()),
			content_tag: DirtyableTag::new(),
			tag: DirtyableTag::new(),
		})
	}

	pub fn content(&self) -> Value {
		self.content.borrow().clone()
	}

	pub fn set_content(&self, content: impl Into<Value>) {
		let content = content.into();
		let previous = self.content.replace(content.clone());
		if previous != content {
			self.content_tag.dirty();
			self.tag.dirty();
		}
	}
}

impl HostObject for Proxy {
	fn get(&self, key: &str) -> Result<Value> {
		match key {
			CONTENT_KEY => Ok(self.content()),
			TRUTHY_KEY => Ok(Value::Bool(self.content.borrow().is_truthy())),
			_ => meta::get(&self.content(), key),
		}
	}

	fn set(&self, key: &str, value: Value) -> Result<()> {
		match key {
			CONTENT_KEY => {
				self.set_content(value);
				Ok(())
			}
			_ => meta::set(&self.content(), key, value),
		}
	}

	fn tag(&self) -> Tag {
		self.tag.clone().into()
	}

	fn tag_for_property(&self, key: &str) -> Tag {
		match key {
			CONTENT_KEY | TRUTHY_KEY => self.content_tag.clone().into(),
			_ => combine([
				self.content_tag.clone().into(),
				meta::tag_for_property(&self.content(), key),
			]),
		}
	}

	fn is_proxy(&self) -> bool {
		true
	}

	fn type_name(&self) -> &'static str {
		"Proxy"
	}
}
