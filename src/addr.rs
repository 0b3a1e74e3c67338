use std::hash::{Hash, Hasher};
use std::ops::Deref;

use crate::Object;

/// Keys a host object by identity while keeping it alive.
#[derive(Clone)]
pub struct ObjectAddr {
	object: Object,
}

impl ObjectAddr {
	pub fn new(object: Object) -> Self {
		ObjectAddr { object }
	}
}

impl Deref for ObjectAddr {
	type Target = Object;
	fn deref(&self) -> &Self::Target {
		&self.object
	}
}

impl PartialEq for ObjectAddr {
	fn eq(&self, other: &Self) -> bool {
		self.object.addr() == other.object.addr()
	}
}

impl Eq for ObjectAddr {}

impl Hash for ObjectAddr {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.object.addr().hash(state)
	}
}
