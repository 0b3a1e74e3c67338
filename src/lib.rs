pub mod config;
pub mod host;
pub mod macros;
pub mod meta;
pub mod tracker;

#[cfg(feature = "debug")]
mod addr;
mod cached;
mod capture;
mod classify;
mod conditional;
mod r#const;
#[cfg(feature = "debug")]
pub mod diagnostics;
mod error;
#[cfg(feature = "debug")]
mod flush;
mod helper;
mod property;
mod readonly;
mod root;
mod tag;
mod updatable;
mod value;

use std::rc::Rc;

pub use cached::Cache;
pub use capture::{CapturedArguments, CapturedNamed, CapturedPositional};
pub use classify::{reference_from_parts, value_to_ref};
pub use conditional::ConditionalReference;
pub use error::{Error, Result};
#[cfg(feature = "debug")]
pub use flush::{FlushDetectionTag, ReferenceId};
pub use helper::{
	ClassBasedHelperReference, HelperFunction, HelperInstance, InternalHelper,
	InternalHelperReference, SimpleHelperReference,
};
pub use host::HostObject;
pub use property::{NestedPropertyReference, PropertyReference, RootPropertyReference};
pub use r#const::{PrimitiveReference, UnboundReference};
pub use readonly::ReadonlyReference;
pub use root::RootReference;
pub use tag::{combine, DirtyableTag, Revision, Tag, UpdatableTag, CONSTANT, INITIAL};
pub use tracker::Tracker;
pub use updatable::UpdatableReference;
pub use value::{Function, NamedValues, Object, Symbol, Value};

/// Shared handle to a reference node.
pub type PathRef = Rc<dyn Reference>;

pub trait Reference: 'static {
	/// Tag guarding the current value.
	fn tag(&self) -> Tag;

	/// The current value, recomputed only if the tag moved.
	fn value(&self) -> Result<Value>;

	/// Reference to property `key` of this reference's value.
	fn get(self: Rc<Self>, key: &str) -> Result<PathRef>;

	fn is_const(&self) -> bool {
		self.tag().is_const()
	}

	/// The two-way update channel, for references that can write back.
	fn as_update(&self) -> Option<&dyn Update> {
		None
	}

	/// The invoke channel, for references to callable values.
	fn invoke(&self) -> Option<Function> {
		None
	}
}

/// Writes a value back to where a reference reads it from.
pub trait Update {
	fn update(&self, value: Value) -> Result<()>;
}
