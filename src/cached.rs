use std::cell::RefCell;

use crate::{Result, Revision, Tag, Value};

/// Memo cell of a cached reference.
///
/// Holds the last computed value next to the revision it was computed
/// at. Only the owning reference writes it.
#[derive(Default)]
pub struct Cache {
	last: RefCell<Option<(Revision, Value)>>,
}

impl Cache {
	pub fn new() -> Self {
		Cache {
			last: RefCell::new(None),
		}
	}

	/// Returns the memoized value while `tag` still validates it, and
	/// runs `compute` otherwise. A failed compute leaves the cell as is.
	///
	/// `compute` must not read the reference that owns this cache.
	pub fn value(&self, tag: &Tag, compute: impl FnOnce() -> Result<Value>) -> Result<Value> {
		if let Some((revision, value)) = &*self.last.borrow() {
			if tag.validate(*revision) {
				return Ok(value.clone());
			}
		}

		tracing::trace!(revision = tag.value(), "recomputing reference");

		let value = compute()?;
		*self.last.borrow_mut() = Some((tag.value(), value.clone()));
		Ok(value)
	}
}
