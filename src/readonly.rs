use std::rc::Rc;

use crate::{tracker, Cache, Function, PathRef, Reference, Result, Tag, Value};

/// View of a reference that never exposes its update channel.
pub struct ReadonlyReference {
	inner: PathRef,
	cache: Cache,
}

impl ReadonlyReference {
	pub fn new(inner: PathRef) -> Rc<Self> {
		Rc::new(ReadonlyReference {
			inner,
			cache: Cache::new(),
		})
	}
}

impl Reference for ReadonlyReference {
	fn tag(&self) -> Tag {
		self.inner.tag()
	}

	fn value(&self) -> Result<Value> {
		let tag = self.inner.tag();
		let value = self.cache.value(&tag, || self.inner.value())?;
		tracker::consume(tag);
		Ok(value)
	}

	fn get(self: Rc<Self>, key: &str) -> Result<PathRef> {
		self.inner.clone().get(key)
	}

	fn invoke(&self) -> Option<Function> {
		self.inner.invoke()
	}
}
