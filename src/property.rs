use std::rc::Rc;

#[cfg(feature = "debug")]
use crate::flush::FlushDetectionTag;
use crate::{
	combine, meta, tracker, Cache, PathRef, Reference, Result, Tag, UpdatableTag, Update, Value,
};

/// Reference to `parent.key`.
///
/// Created through [`PropertyReference::create`], which picks the variant
/// from the parent: a constant parent can never invalidate, so its value
/// is captured once ([`RootPropertyReference`]); anything else is read
/// through on every compute ([`NestedPropertyReference`]).
#[derive(Clone)]
pub enum PropertyReference {
	Root(Rc<RootPropertyReference>),
	Nested(Rc<NestedPropertyReference>),
}

impl PropertyReference {
	pub fn create(parent: PathRef, key: &str) -> Result<PropertyReference> {
		if parent.is_const() {
			let value = parent.value()?;
			Ok(PropertyReference::Root(RootPropertyReference::new(value, key)))
		} else {
			Ok(PropertyReference::Nested(NestedPropertyReference::new(parent, key)))
		}
	}

	pub fn into_ref(self) -> PathRef {
		match self {
			PropertyReference::Root(reference) => reference,
			PropertyReference::Nested(reference) => reference,
		}
	}
}

impl From<PropertyReference> for PathRef {
	fn from(reference: PropertyReference) -> Self {
		reference.into_ref()
	}
}

/// Tag plumbing shared by both variants.
///
/// `property` holds whatever tag the host reported for the last read,
/// `base` is the validity of the reference and `tag` is what dependents
/// see (`base` behind a flush-detection wrapper in debug builds).
struct PropertyTag {
	property: UpdatableTag,
	base: Tag,
	tag: Tag,
	#[cfg(feature = "debug")]
	flush: Rc<FlushDetectionTag>,
}

impl PropertyTag {
	#[cfg(feature = "debug")]
	fn new(base: Tag, property: UpdatableTag, key: &Rc<str>) -> Self {
		let flush = FlushDetectionTag::new(base.clone(), key.clone());
		PropertyTag {
			property,
			base,
			tag: flush.clone().into(),
			flush,
		}
	}

	#[cfg(not(feature = "debug"))]
	fn new(base: Tag, property: UpdatableTag, _key: &Rc<str>) -> Self {
		PropertyTag {
			property,
			tag: base.clone(),
			base,
		}
	}

	#[cfg(feature = "debug")]
	fn did_compute(&self, parent: &Value) {
		self.flush.did_compute(parent);
	}

	#[cfg(not(feature = "debug"))]
	fn did_compute(&self, _parent: &Value) {}

	/// Reads `key` off `parent` with a fresh tracker and installs the
	/// tag it discovered.
	fn read(&self, parent: &Value, key: &str) -> Result<Value> {
		let (result, tag) = tracker::track(|| meta::get(parent, key));
		self.property.update(tag);
		result
	}
}

/// `value.key` where `value` was captured from a constant parent.
pub struct RootPropertyReference {
	parent_value: Value,
	key: Rc<str>,
	tags: PropertyTag,
	cache: Cache,
}

impl RootPropertyReference {
	pub fn new(parent_value: Value, key: &str) -> Rc<Self> {
		let key: Rc<str> = key.into();
		let property = UpdatableTag::new(Tag::Constant);
		let tags = PropertyTag::new(property.clone().into(), property, &key);

		#[cfg(feature = "debug")]
		meta::watch_key(&parent_value, &key);

		Rc::new(RootPropertyReference {
			parent_value,
			key,
			tags,
			cache: Cache::new(),
		})
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	fn compute(&self) -> Result<Value> {
		self.tags.did_compute(&self.parent_value);
		self.tags.read(&self.parent_value, &self.key)
	}
}

impl Reference for RootPropertyReference {
	fn tag(&self) -> Tag {
		self.tags.tag.clone()
	}

	fn value(&self) -> Result<Value> {
		let value = self.cache.value(&self.tags.tag, || self.compute())?;
		tracker::consume(self.tags.base.clone());
		Ok(value)
	}

	fn get(self: Rc<Self>, key: &str) -> Result<PathRef> {
		Ok(NestedPropertyReference::new(self, key))
	}

	fn as_update(&self) -> Option<&dyn Update> {
		Some(self)
	}
}

impl Update for RootPropertyReference {
	fn update(&self, value: Value) -> Result<()> {
		meta::set(&self.parent_value, &self.key, value)
	}
}

/// `parent.key` where `parent` is itself a live reference.
///
/// Valid only while both the parent's tag and the tag of the last
/// property read validate.
pub struct NestedPropertyReference {
	parent: PathRef,
	key: Rc<str>,
	tags: PropertyTag,
	cache: Cache,
}

impl NestedPropertyReference {
	pub fn new(parent: PathRef, key: &str) -> Rc<Self> {
		let key: Rc<str> = key.into();
		let property = UpdatableTag::new(Tag::Constant);
		let tag = combine([parent.tag(), property.clone().into()]);
		let tags = PropertyTag::new(tag, property, &key);

		Rc::new(NestedPropertyReference {
			parent,
			key,
			tags,
			cache: Cache::new(),
		})
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn parent(&self) -> &PathRef {
		&self.parent
	}

	fn compute(&self) -> Result<Value> {
		let parent = self.parent.value()?;

		match &parent {
			Value::Object(_) | Value::Function(_) => {
				#[cfg(feature = "debug")]
				meta::watch_key(&parent, &self.key);

				self.tags.did_compute(&parent);
				self.tags.read(&parent, &self.key)
			}
			_ => meta::get(&parent, &self.key),
		}
	}
}

impl Reference for NestedPropertyReference {
	fn tag(&self) -> Tag {
		self.tags.tag.clone()
	}

	fn value(&self) -> Result<Value> {
		let value = self.cache.value(&self.tags.tag, || self.compute())?;
		tracker::consume(self.tags.base.clone());
		Ok(value)
	}

	fn get(self: Rc<Self>, key: &str) -> Result<PathRef> {
		Ok(NestedPropertyReference::new(self, key))
	}

	fn as_update(&self) -> Option<&dyn Update> {
		Some(self)
	}
}

impl Update for NestedPropertyReference {
	fn update(&self, value: Value) -> Result<()> {
		let parent = self.parent.value()?;
		meta::set(&parent, &self.key, value)
	}
}
