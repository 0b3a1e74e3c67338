use std::rc::Rc;

use crate::{combine, NamedValues, PathRef, Result, Tag, Value};

/// Positional helper arguments as references.
#[derive(Clone)]
pub struct CapturedPositional {
	references: Vec<PathRef>,
	tag: Tag,
}

impl CapturedPositional {
	pub fn new(references: Vec<PathRef>) -> Self {
		let tag = combine(references.iter().map(|r| r.tag()));
		CapturedPositional { references, tag }
	}

	pub fn empty() -> Self {
		CapturedPositional::new(Vec::new())
	}

	pub fn tag(&self) -> Tag {
		self.tag.clone()
	}

	pub fn at(&self, index: usize) -> Option<&PathRef> {
		self.references.get(index)
	}

	pub fn len(&self) -> usize {
		self.references.len()
	}

	pub fn is_empty(&self) -> bool {
		self.references.is_empty()
	}

	pub fn value(&self) -> Result<Vec<Value>> {
		self.references.iter().map(|r| r.value()).collect()
	}
}

/// Named helper arguments as references.
#[derive(Clone)]
pub struct CapturedNamed {
	references: Vec<(Rc<str>, PathRef)>,
	tag: Tag,
}

impl CapturedNamed {
	pub fn new<K>(references: impl IntoIterator<Item = (K, PathRef)>) -> Self
	where
		K: Into<Rc<str>>,
	{
		let references: Vec<(Rc<str>, PathRef)> = references
			.into_iter()
			.map(|(name, reference)| (name.into(), reference))
			.collect();
		let tag = combine(references.iter().map(|(_, r)| r.tag()));
		CapturedNamed { references, tag }
	}

	pub fn empty() -> Self {
		CapturedNamed::new(Vec::<(Rc<str>, PathRef)>::new())
	}

	pub fn tag(&self) -> Tag {
		self.tag.clone()
	}

	pub fn get(&self, name: &str) -> Option<&PathRef> {
		self.references
			.iter()
			.find(|(n, _)| &**n == name)
			.map(|(_, r)| r)
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.references.iter().map(|(n, _)| &**n)
	}

	pub fn value(&self) -> Result<NamedValues> {
		self.references
			.iter()
			.map(|(name, r)| Ok((name.clone(), r.value()?)))
			.collect()
	}
}

/// Arguments of a helper invocation.
#[derive(Clone)]
pub struct CapturedArguments {
	pub positional: CapturedPositional,
	pub named: CapturedNamed,
	tag: Tag,
}

impl CapturedArguments {
	pub fn new(positional: CapturedPositional, named: CapturedNamed) -> Self {
		let tag = combine([positional.tag(), named.tag()]);
		CapturedArguments {
			positional,
			named,
			tag,
		}
	}

	pub fn positional(references: Vec<PathRef>) -> Self {
		CapturedArguments::new(CapturedPositional::new(references), CapturedNamed::empty())
	}

	pub fn tag(&self) -> Tag {
		self.tag.clone()
	}

	/// True when no argument can ever change.
	pub fn is_const(&self) -> bool {
		self.tag.is_const()
	}
}
