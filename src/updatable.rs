use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

use crate::{tracker, DirtyableTag, PathRef, PropertyReference, Reference, Result, Tag, Value};

/// A root the embedder writes to directly.
pub struct UpdatableReference {
	value: RefCell<Value>,
	tag: DirtyableTag,
}

impl UpdatableReference {
	pub fn new(value: impl Into<Value>) -> Rc<Self> {
		Rc::new(UpdatableReference {
			value: RefCell::new(value.into()),
			tag: DirtyableTag::new(),
		})
	}

	pub fn get_once(&self) -> Value {
		self.value.borrow().clone()
	}

	/// Replaces the value, dirtying the tag only if it actually changed.
	pub fn update(&self, value: impl Into<Value>) {
		let _ = self.replace(value);
	}

	pub fn replace(&self, value: impl Into<Value>) -> Value {
		let value = value.into();
		let old = self.value.replace(value.clone());
		if old != value {
			tracing::trace!(from = ?old, to = ?value, "updatable reference changed");
			self.tag.dirty();
		}

		old
	}
}

impl Reference for UpdatableReference {
	fn tag(&self) -> Tag {
		self.tag.clone().into()
	}

	fn value(&self) -> Result<Value> {
		tracker::consume(self.tag());
		Ok(self.get_once())
	}

	fn get(self: Rc<Self>, key: &str) -> Result<PathRef> {
		PropertyReference::create(self, key).map(PathRef::from)
	}
}

impl Debug for UpdatableReference {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.value.borrow().fmt(f)
	}
}
