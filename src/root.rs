use std::cell::RefCell;
use std::rc::Rc;

use fxhash::FxHashMap;

use crate::{PathRef, Reference, Result, RootPropertyReference, Tag, Value};

/// Constant reference to a host object.
///
/// Property references created through [`Reference::get`] are kept by
/// key, so every read of `root.key` in a render pass shares one node.
pub struct RootReference {
	value: Value,
	children: RefCell<FxHashMap<Rc<str>, Rc<RootPropertyReference>>>,
}

impl RootReference {
	pub fn new(value: impl Into<Value>) -> Rc<Self> {
		Rc::new(RootReference {
			value: value.into(),
			children: RefCell::new(FxHashMap::default()),
		})
	}

	pub fn child(&self, key: &str) -> Rc<RootPropertyReference> {
		if let Some(child) = self.children.borrow().get(key) {
			return child.clone();
		}

		let child = RootPropertyReference::new(self.value.clone(), key);
		self.children
			.borrow_mut()
			.insert(key.into(), child.clone());
		child
	}
}

impl Reference for RootReference {
	fn tag(&self) -> Tag {
		Tag::Constant
	}

	fn value(&self) -> Result<Value> {
		Ok(self.value.clone())
	}

	fn get(self: Rc<Self>, key: &str) -> Result<PathRef> {
		Ok(self.child(key))
	}
}
