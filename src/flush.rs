//! Two-way flush detection, compiled only with the `debug` feature.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::{diagnostics, Revision, Tag, Value};

/// Identifies the reference a flush-detection tag belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReferenceId(u64);

thread_local! {
	static NEXT_ID: Cell<u64> = Cell::new(0);
}

impl ReferenceId {
	fn next() -> Self {
		NEXT_ID.with(|n| {
			let id = n.get();
			n.set(id + 1);
			ReferenceId(id)
		})
	}
}

/// Wraps a property reference's tag and reports every read of the
/// property it represents to the render diagnostics.
pub struct FlushDetectionTag {
	tag: Tag,
	key: Rc<str>,
	reference: ReferenceId,
	parent: RefCell<Option<Value>>,
}

impl FlushDetectionTag {
	pub fn new(tag: Tag, key: Rc<str>) -> Rc<Self> {
		Rc::new(FlushDetectionTag {
			tag,
			key,
			reference: ReferenceId::next(),
			parent: RefCell::new(None),
		})
	}

	pub fn inner(&self) -> &Tag {
		&self.tag
	}

	pub fn validate(&self, snapshot: Revision) -> bool {
		let is_valid = self.tag.validate(snapshot);

		if is_valid {
			if let Some(Value::Object(parent)) = &*self.parent.borrow() {
				diagnostics::did_render(parent, &self.key, self.reference);
			}
		}

		is_valid
	}

	/// Called at the start of every compute of the owning reference.
	pub fn did_compute(&self, parent: &Value) {
		*self.parent.borrow_mut() = Some(parent.clone());

		if let Value::Object(parent) = parent {
			diagnostics::did_render(parent, &self.key, self.reference);
		}
	}
}

impl From<Rc<FlushDetectionTag>> for Tag {
	fn from(tag: Rc<FlushDetectionTag>) -> Self {
		Tag::FlushDetection(tag)
	}
}
