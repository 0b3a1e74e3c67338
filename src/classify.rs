use crate::{PathRef, PrimitiveReference, Result, RootReference, UnboundReference, Value};

/// Picks the smallest reference that can represent `value`.
///
/// Objects become a [`RootReference`] when `bound`, an
/// [`UnboundReference`] otherwise. Functions are never observed and are
/// always unbound. Primitives become constants.
pub fn value_to_ref(value: Value, bound: bool) -> Result<PathRef> {
	match value {
		Value::Object(_) if bound => Ok(RootReference::new(value)),
		Value::Object(_) | Value::Function(_) => Ok(UnboundReference::new(value)),
		Value::Undefined
		| Value::Null
		| Value::Bool(_)
		| Value::Number(_)
		| Value::String(_) => Ok(PrimitiveReference::new(value)),
		other => unexpected(other),
	}
}

#[cfg(feature = "debug")]
fn unexpected(value: Value) -> Result<PathRef> {
	let type_name = value.type_name();
	let output = value.to_string();

	tracing::error!(type_name, %output, "cannot create a reference");

	Err(crate::Error::Unexpected {
		type_name,
		output: (!output.is_empty()).then_some(output),
	})
}

#[cfg(not(feature = "debug"))]
fn unexpected(value: Value) -> Result<PathRef> {
	Ok(PrimitiveReference::new(value))
}

/// Walks `parts` from `root`, one [`crate::Reference::get`] per segment.
pub fn reference_from_parts<S>(root: PathRef, parts: &[S]) -> Result<PathRef>
where
	S: AsRef<str>,
{
	parts
		.iter()
		.try_fold(root, |reference, part| reference.get(part.as_ref()))
}
