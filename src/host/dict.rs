use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fxhash::{FxHashMap, FxHashSet};

use crate::host::HostObject;
use crate::{DirtyableTag, Error, Result, Tag, Value};

/// A plain host object with one tag per property.
#[derive(Default)]
pub struct Dict {
	props: RefCell<FxHashMap<Rc<str>, Value>>,
	tags: RefCell<FxHashMap<Rc<str>, DirtyableTag>>,
	watched: RefCell<FxHashSet<Rc<str>>>,
	tag: DirtyableTag,
	frozen: Cell<bool>,
}

impl Dict {
	pub fn new() -> Rc<Self> {
		Rc::new(Dict::default())
	}

	pub fn with<K, V>(props: impl IntoIterator<Item = (K, V)>) -> Rc<Self>
	where
		K: Into<Rc<str>>,
		V: Into<Value>,
	{
		let dict = Dict::default();
		dict.props
			.borrow_mut()
			.extend(props.into_iter().map(|(k, v)| (k.into(), v.into())));
		Rc::new(dict)
	}

	/// Rejects every later write.
	pub fn freeze(&self) {
		self.frozen.set(true);
	}

	pub fn is_frozen(&self) -> bool {
		self.frozen.get()
	}

	pub fn is_watched(&self, key: &str) -> bool {
		self.watched.borrow().contains(key)
	}

	fn property_tag(&self, key: &str) -> DirtyableTag {
		let mut tags = self.tags.borrow_mut();
		if let Some(tag) = tags.get(key) {
			return tag.clone();
		}

		let tag = DirtyableTag::new();
		tags.insert(key.into(), tag.clone());
		tag
	}
}

impl HostObject for Dict {
	fn get(&self, key: &str) -> Result<Value> {
		Ok(self.props.borrow().get(key).cloned().unwrap_or_default())
	}

	fn set(&self, key: &str, value: Value) -> Result<()> {
		if self.frozen.get() {
			return Err(Error::Frozen {
				key: key.to_string(),
				type_name: self.type_name(),
			});
		}

		let previous = self.props.borrow_mut().insert(key.into(), value.clone());
		if previous.as_ref() != Some(&value) {
			self.property_tag(key).dirty();
			self.tag.dirty();
		}

		Ok(())
	}

	fn tag(&self) -> Tag {
		self.tag.clone().into()
	}

	fn tag_for_property(&self, key: &str) -> Tag {
		self.property_tag(key).into()
	}

	fn watch_key(&self, key: &str) {
		self.watched.borrow_mut().insert(key.into());
	}

	fn type_name(&self) -> &'static str {
		"Dict"
	}
}
