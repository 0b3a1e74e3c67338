use std::rc::Rc;

use crate::{
	combine, tracker, value_to_ref, Cache, CapturedArguments, NamedValues, PathRef, PropertyReference,
	Reference, Result, Tag, Value,
};

/// A pure helper over evaluated arguments.
///
/// Arguments are lent as shared slices, so a helper cannot mutate the
/// argument lists it was given.
pub type HelperFunction = Rc<dyn Fn(&[Value], &NamedValues) -> Result<Value>>;

/// A helper that works on the captured argument references themselves.
pub type InternalHelper = Rc<dyn Fn(&CapturedArguments) -> Result<Value>>;

/// A stateful helper.
///
/// Besides argument changes, the instance can ask to be recomputed by
/// advancing its recompute tag.
pub trait HelperInstance: 'static {
	fn recompute_tag(&self) -> Tag;

	fn compute(&self, positional: &[Value], named: &NamedValues) -> Result<Value>;
}

fn evaluate(args: &CapturedArguments) -> Result<(Vec<Value>, NamedValues)> {
	Ok((args.positional.value()?, args.named.value()?))
}

pub struct SimpleHelperReference {
	helper: HelperFunction,
	args: CapturedArguments,
	cache: Cache,
}

impl SimpleHelperReference {
	/// Constant arguments are evaluated right away and folded into the
	/// smallest reference for the result; nothing is cached.
	pub fn create(helper: HelperFunction, args: CapturedArguments) -> Result<PathRef> {
		if args.is_const() {
			let (positional, named) = evaluate(&args)?;
			let result = helper(&positional, &named)?;
			return value_to_ref(result, true);
		}

		Ok(Rc::new(SimpleHelperReference {
			helper,
			args,
			cache: Cache::new(),
		}))
	}

	fn compute(&self) -> Result<Value> {
		let (positional, named) = evaluate(&self.args)?;
		(self.helper)(&positional, &named)
	}
}

impl Reference for SimpleHelperReference {
	fn tag(&self) -> Tag {
		self.args.tag()
	}

	fn value(&self) -> Result<Value> {
		let tag = self.args.tag();
		let value = self.cache.value(&tag, || self.compute())?;
		tracker::consume(tag);
		Ok(value)
	}

	fn get(self: Rc<Self>, key: &str) -> Result<PathRef> {
		PropertyReference::create(self, key).map(PathRef::from)
	}
}

pub struct ClassBasedHelperReference {
	instance: Rc<dyn HelperInstance>,
	args: CapturedArguments,
	tag: Tag,
	cache: Cache,
}

impl ClassBasedHelperReference {
	pub fn create(instance: Rc<dyn HelperInstance>, args: CapturedArguments) -> PathRef {
		let tag = combine([instance.recompute_tag(), args.tag()]);

		Rc::new(ClassBasedHelperReference {
			instance,
			args,
			tag,
			cache: Cache::new(),
		})
	}

	fn compute(&self) -> Result<Value> {
		let (positional, named) = evaluate(&self.args)?;
		self.instance.compute(&positional, &named)
	}
}

impl Reference for ClassBasedHelperReference {
	fn tag(&self) -> Tag {
		self.tag.clone()
	}

	fn value(&self) -> Result<Value> {
		let value = self.cache.value(&self.tag, || self.compute())?;
		tracker::consume(self.tag.clone());
		Ok(value)
	}

	fn get(self: Rc<Self>, key: &str) -> Result<PathRef> {
		PropertyReference::create(self, key).map(PathRef::from)
	}
}

pub struct InternalHelperReference {
	helper: InternalHelper,
	args: CapturedArguments,
	cache: Cache,
}

impl InternalHelperReference {
	pub fn new(helper: InternalHelper, args: CapturedArguments) -> Rc<Self> {
		Rc::new(InternalHelperReference {
			helper,
			args,
			cache: Cache::new(),
		})
	}
}

impl Reference for InternalHelperReference {
	fn tag(&self) -> Tag {
		self.args.tag()
	}

	fn value(&self) -> Result<Value> {
		let tag = self.args.tag();
		let value = self.cache.value(&tag, || (self.helper)(&self.args))?;
		tracker::consume(tag);
		Ok(value)
	}

	fn get(self: Rc<Self>, key: &str) -> Result<PathRef> {
		PropertyReference::create(self, key).map(PathRef::from)
	}
}
