use std::rc::Rc;

use crate::host::TRUTHY_KEY;
use crate::{
	combine, config, meta, tracker, Cache, PathRef, PrimitiveReference, PropertyReference, Reference,
	Result, RootPropertyReference, Tag, UpdatableTag, Value,
};

/// Boolean view of another reference.
///
/// Besides the source reference's tag it tracks `object_tag`, the tag of
/// whatever deciding truthiness depended on: the proxy's truthiness
/// property, or the identity of the value itself.
pub struct ConditionalReference {
	inner: PathRef,
	object_tag: UpdatableTag,
	tag: Tag,
	cache: Cache,
}

impl ConditionalReference {
	pub fn create(reference: PathRef) -> Result<PathRef> {
		if reference.is_const() {
			let value = reference.value()?;

			if meta::is_proxy(&value) {
				return Ok(RootPropertyReference::new(value, TRUTHY_KEY));
			}

			return Ok(PrimitiveReference::new(config::truthy(&value)?.into()));
		}

		Ok(ConditionalReference::new(reference))
	}

	pub fn new(inner: PathRef) -> Rc<Self> {
		let object_tag = UpdatableTag::new(Tag::Constant);
		let tag = combine([inner.tag(), object_tag.clone().into()]);

		Rc::new(ConditionalReference {
			inner,
			object_tag,
			tag,
			cache: Cache::new(),
		})
	}

	pub fn to_bool(&self, value: &Value) -> Result<bool> {
		if meta::is_proxy(value) {
			self.object_tag
				.update(meta::tag_for_property(value, TRUTHY_KEY));
			return Ok(meta::get(value, TRUTHY_KEY)?.is_truthy());
		}

		self.object_tag.update(meta::tag_for(value));
		config::truthy(value)
	}
}

impl Reference for ConditionalReference {
	fn tag(&self) -> Tag {
		self.tag.clone()
	}

	fn value(&self) -> Result<Value> {
		let value = self.cache.value(&self.tag, || {
			let value = self.inner.value()?;
			self.to_bool(&value).map(Value::Bool)
		})?;
		tracker::consume(self.tag.clone());
		Ok(value)
	}

	fn get(self: Rc<Self>, key: &str) -> Result<PathRef> {
		PropertyReference::create(self, key).map(PathRef::from)
	}
}
