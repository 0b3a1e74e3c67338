use std::rc::Rc;

use crate::{meta, value_to_ref, Function, PathRef, Reference, Result, Tag, Value};

/// Constant reference to a primitive.
pub struct PrimitiveReference {
	value: Value,
}

impl PrimitiveReference {
	pub fn new(value: Value) -> Rc<Self> {
		Rc::new(PrimitiveReference { value })
	}
}

impl Reference for PrimitiveReference {
	fn tag(&self) -> Tag {
		Tag::Constant
	}

	fn value(&self) -> Result<Value> {
		Ok(self.value.clone())
	}

	fn get(self: Rc<Self>, key: &str) -> Result<PathRef> {
		Ok(PrimitiveReference::new(meta::get(&self.value, key)?))
	}
}

/// Constant reference to a value that must never be observed.
///
/// Everything read through it is classified as unbound again.
pub struct UnboundReference {
	value: Value,
}

impl UnboundReference {
	pub fn new(value: Value) -> Rc<Self> {
		Rc::new(UnboundReference { value })
	}

	pub fn create(value: Value) -> Result<PathRef> {
		value_to_ref(value, false)
	}
}

impl Reference for UnboundReference {
	fn tag(&self) -> Tag {
		Tag::Constant
	}

	fn value(&self) -> Result<Value> {
		Ok(self.value.clone())
	}

	fn get(self: Rc<Self>, key: &str) -> Result<PathRef> {
		value_to_ref(meta::get(&self.value, key)?, false)
	}

	fn invoke(&self) -> Option<Function> {
		self.value.as_function().cloned()
	}
}
