use std::cell::{Cell, RefCell};
use std::fmt::Debug;
use std::rc::Rc;

use smallvec::SmallVec;

#[cfg(feature = "debug")]
use crate::flush::FlushDetectionTag;

/// A point in the global revision timeline.
pub type Revision = u64;

/// Revision reported by tags that never change.
pub const CONSTANT: Revision = 0;

/// Revision of the timeline before anything was dirtied.
pub const INITIAL: Revision = 1;

thread_local! {
	static REVISION: Cell<Revision> = Cell::new(INITIAL);
}

/// The current global revision.
pub fn current() -> Revision {
	REVISION.with(|r| r.get())
}

fn bump() -> Revision {
	REVISION.with(|r| {
		let next = r.get() + 1;
		r.set(next);
		next
	})
}

/// A validity stamp.
///
/// A value computed while the global revision was `r` stays valid
/// for as long as `tag.validate(r)` holds. Tags never notify anybody,
/// dependents pull and compare.
#[derive(Clone)]
pub enum Tag {
	Constant,
	Dirtyable(DirtyableTag),
	Updatable(UpdatableTag),
	Combinator(Rc<[Tag]>),
	#[cfg(feature = "debug")]
	FlushDetection(Rc<FlushDetectionTag>),
}

impl Tag {
	/// Snapshot to store next to a computed value.
	pub fn value(&self) -> Revision {
		match self {
			Tag::Constant => CONSTANT,
			_ => current(),
		}
	}

	pub fn validate(&self, snapshot: Revision) -> bool {
		match self {
			Tag::Constant => true,
			#[cfg(feature = "debug")]
			Tag::FlushDetection(tag) => tag.validate(snapshot),
			_ => self.last_changed() <= snapshot,
		}
	}

	/// Latest revision at which anything behind this tag changed.
	pub fn last_changed(&self) -> Revision {
		match self {
			Tag::Constant => CONSTANT,
			Tag::Dirtyable(tag) => tag.last_changed(),
			Tag::Updatable(tag) => tag.last_changed(),
			Tag::Combinator(tags) => tags.iter().map(Tag::last_changed).max().unwrap_or(CONSTANT),
			#[cfg(feature = "debug")]
			Tag::FlushDetection(tag) => tag.inner().last_changed(),
		}
	}

	pub fn is_const(&self) -> bool {
		matches!(self, Tag::Constant)
	}

	/// Identity comparison.
	pub fn same(&self, other: &Tag) -> bool {
		match (self, other) {
			(Tag::Constant, Tag::Constant) => true,
			(Tag::Dirtyable(a), Tag::Dirtyable(b)) => Rc::ptr_eq(&a.0, &b.0),
			(Tag::Updatable(a), Tag::Updatable(b)) => Rc::ptr_eq(&a.0, &b.0),
			(Tag::Combinator(a), Tag::Combinator(b)) => Rc::ptr_eq(a, b),
			#[cfg(feature = "debug")]
			(Tag::FlushDetection(a), Tag::FlushDetection(b)) => Rc::ptr_eq(a, b),
			_ => false,
		}
	}
}

impl Default for Tag {
	fn default() -> Self {
		Tag::Constant
	}
}

impl Debug for Tag {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let kind = match self {
			Tag::Constant => "Constant",
			Tag::Dirtyable(_) => "Dirtyable",
			Tag::Updatable(_) => "Updatable",
			Tag::Combinator(_) => "Combinator",
			#[cfg(feature = "debug")]
			Tag::FlushDetection(_) => "FlushDetection",
		};

		f.debug_struct(kind)
			.field("last_changed", &self.last_changed())
			.finish()
	}
}

/// Combines tags into one that is invalid as soon as any of them is.
///
/// Constant tags are dropped, so combining only constants yields
/// [`Tag::Constant`] and a single live tag is returned as is.
pub fn combine<I>(tags: I) -> Tag
where
	I: IntoIterator<Item = Tag>,
{
	let mut live: SmallVec<[Tag; 4]> = SmallVec::new();

	for tag in tags {
		match tag {
			Tag::Constant => {}
			// Flatten so long chains stay shallow.
			Tag::Combinator(inner) => live.extend(inner.iter().cloned()),
			tag => live.push(tag),
		}
	}

	match live.len() {
		0 => Tag::Constant,
		1 => live.pop().unwrap_or_default(),
		_ => Tag::Combinator(live.into_iter().collect()),
	}
}

/// A tag its owner bumps by hand.
#[derive(Clone)]
pub struct DirtyableTag(Rc<Cell<Revision>>);

impl DirtyableTag {
	pub fn new() -> Self {
		DirtyableTag(Rc::new(Cell::new(current())))
	}

	pub fn dirty(&self) {
		self.0.set(bump());
	}

	pub fn last_changed(&self) -> Revision {
		self.0.get()
	}
}

impl Default for DirtyableTag {
	fn default() -> Self {
		DirtyableTag::new()
	}
}

impl From<DirtyableTag> for Tag {
	fn from(tag: DirtyableTag) -> Self {
		Tag::Dirtyable(tag)
	}
}

/// An indirection cell whose inner tag can be swapped.
#[derive(Clone)]
pub struct UpdatableTag(Rc<UpdatableInner>);

struct UpdatableInner {
	tag: RefCell<Tag>,
	last_updated: Cell<Revision>,
}

impl UpdatableTag {
	pub fn new(tag: Tag) -> Self {
		UpdatableTag(Rc::new(UpdatableInner {
			tag: RefCell::new(tag),
			last_updated: Cell::new(INITIAL),
		}))
	}

	/// Swaps the inner tag. Installing the same tag again is a no-op.
	pub fn update(&self, tag: Tag) {
		let mut current_tag = self.0.tag.borrow_mut();
		if !current_tag.same(&tag) {
			*current_tag = tag;
			self.0.last_updated.set(current());
		}
	}

	pub fn last_changed(&self) -> Revision {
		let inner = self.0.tag.borrow().last_changed();
		inner.max(self.0.last_updated.get())
	}
}

impl From<UpdatableTag> for Tag {
	fn from(tag: UpdatableTag) -> Self {
		Tag::Updatable(tag)
	}
}
