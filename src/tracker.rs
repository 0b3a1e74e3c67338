use std::cell::RefCell;

use smallvec::SmallVec;

use crate::tag::{combine, Tag};

thread_local! {
	static CURRENT: RefCell<Option<Tracker>> = RefCell::new(None);
}

/// Collects the tags of everything read while it is the current tracker.
#[derive(Default)]
pub struct Tracker {
	tags: SmallVec<[Tag; 4]>,
}

impl Tracker {
	pub fn new() -> Self {
		Tracker {
			tags: SmallVec::new(),
		}
	}

	pub fn add(&mut self, tag: Tag) {
		if tag.is_const() || self.tags.iter().any(|t| t.same(&tag)) {
			return;
		}
		self.tags.push(tag);
	}

	pub fn combine(self) -> Tag {
		combine(self.tags)
	}
}

/// Restores the enclosing tracker when a tracked read finishes or unwinds.
struct Restore {
	parent: Option<Option<Tracker>>,
}

impl Restore {
	fn finish(mut self) -> Option<Tracker> {
		let parent = self.parent.take().flatten();
		CURRENT.with(|c| c.replace(parent))
	}
}

impl Drop for Restore {
	fn drop(&mut self) {
		if let Some(parent) = self.parent.take() {
			CURRENT.with(|c| *c.borrow_mut() = parent);
		}
	}
}

/// Runs `func` with a fresh tracker installed and returns the combined
/// tag of everything it read. The tag is also reported to the enclosing
/// tracker, so an outer read accumulates what nested reads discovered.
pub fn track<R>(func: impl FnOnce() -> R) -> (R, Tag) {
	let parent = CURRENT.with(|c| c.replace(Some(Tracker::new())));
	let restore = Restore {
		parent: Some(parent),
	};

	let result = func();

	let tag = restore
		.finish()
		.map(Tracker::combine)
		.unwrap_or(Tag::Constant);

	consume(tag.clone());
	(result, tag)
}

/// Reports `tag` to the current tracker, if any.
pub fn consume(tag: Tag) {
	CURRENT.with(|c| {
		if let Some(tracker) = c.borrow_mut().as_mut() {
			tracker.add(tag);
		}
	});
}

pub fn is_tracking() -> bool {
	CURRENT.with(|c| c.borrow().is_some())
}
