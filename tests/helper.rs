use std::rc::Rc;

use pathref::host::Dict;
use pathref::{
	helper, CapturedArguments, CapturedNamed, CapturedPositional, ClassBasedHelperReference,
	DirtyableTag, Error, HelperInstance, HostObject, InternalHelperReference, NamedValues,
	PathRef, PrimitiveReference, Reference, Result, RootReference, SimpleHelperReference, Tag,
	UpdatableReference, Value,
};


use mock::{SharedMock, Spy};

fn constant(value: impl Into<Value>) -> PathRef {
	PrimitiveReference::new(value.into())
}

fn sum(positional: &[Value]) -> f64 {
	positional.iter().filter_map(Value::as_number).sum()
}

#[test]
fn constant_arguments_are_folded() {
	let mock = SharedMock::new();
	mock.get().expect_trigger().times(1).return_const(());

	let add = helper!((mock) positional, _named => {
		mock.get().trigger(positional.len() as u64);
		Ok(Value::from(sum(positional)))
	});

	let args = CapturedArguments::positional(vec![constant(1), constant(2)]);
	assert!(args.is_const());

	let reference = SimpleHelperReference::create(add, args).unwrap();
	assert!(reference.is_const());

	Dict::with([("x", 1)]).set("x", 2.into()).unwrap();

	assert_eq!(reference.value().unwrap(), Value::from(3));
	assert_eq!(reference.value().unwrap(), Value::from(3));

	mock.get().checkpoint();
}

#[test]
fn folded_objects_become_root_references() {
	let dict = Dict::with([("name", "folded")]);
	let make = helper!((dict) _positional, _named => Ok(Value::from(dict.clone())));

	let reference = SimpleHelperReference::create(make, CapturedArguments::positional(vec![])).unwrap();
	let name = reference.get("name").unwrap();

	assert_eq!(name.value().unwrap(), Value::from("folded"));
}

#[test]
fn live_arguments_are_cached_by_tag() {
	let mock = SharedMock::new();
	mock.get().expect_trigger().times(1).return_const(());

	let add = helper!((mock) positional, _named => {
		mock.get().trigger(positional.len() as u64);
		Ok(Value::from(sum(positional)))
	});

	let a = UpdatableReference::new(1);
	let args = CapturedArguments::positional(vec![a.clone() as PathRef, constant(2)]);
	let reference = SimpleHelperReference::create(add, args).unwrap();
	assert!(!reference.is_const());

	assert_eq!(reference.value().unwrap(), Value::from(3));
	assert_eq!(reference.value().unwrap(), Value::from(3));
	mock.get().checkpoint();

	mock.get().expect_trigger().times(1).return_const(());
	a.update(10);
	assert_eq!(reference.value().unwrap(), Value::from(12));
	assert_eq!(reference.value().unwrap(), Value::from(12));
	mock.get().checkpoint();
}

#[test]
fn named_arguments_reach_the_helper() {
	let greet = helper!(_positional, named => {
		let name = named.get("name").cloned().unwrap_or_default();
		Ok(Value::from(format!("hello {name}")))
	});

	let name = UpdatableReference::new("zoey");
	let args = CapturedArguments::new(
		CapturedPositional::empty(),
		CapturedNamed::new([("name", name.clone() as PathRef)]),
	);
	let reference = SimpleHelperReference::create(greet, args).unwrap();

	assert_eq!(reference.value().unwrap(), Value::from("hello zoey"));
	name.update("tomster");
	assert_eq!(reference.value().unwrap(), Value::from("hello tomster"));
}

#[test]
fn helper_errors_propagate() {
	let fail = helper!(_positional, _named => Err(Error::Helper("boom".to_string())));
	let args = CapturedArguments::positional(vec![UpdatableReference::new(1) as PathRef]);
	let reference = SimpleHelperReference::create(fail, args).unwrap();

	assert_eq!(reference.value().unwrap_err(), Error::Helper("boom".to_string()));
}

struct Counter {
	recompute: DirtyableTag,
	mock: SharedMock,
}

impl HelperInstance for Counter {
	fn recompute_tag(&self) -> Tag {
		self.recompute.clone().into()
	}

	fn compute(&self, positional: &[Value], _named: &NamedValues) -> Result<Value> {
		self.mock.get().trigger(0);
		Ok(Value::from(sum(positional)))
	}
}

#[test]
fn class_based_helper_recomputes_on_demand() {
	let mock = SharedMock::new();
	let recompute = DirtyableTag::new();
	let counter = Rc::new(Counter {
		recompute: recompute.clone(),
		mock: mock.clone(),
	});

	let args = CapturedArguments::positional(vec![constant(4)]);
	let reference = ClassBasedHelperReference::create(counter, args);

	mock.get().expect_trigger().times(1).return_const(());
	assert_eq!(reference.value().unwrap(), Value::from(4));
	assert_eq!(reference.value().unwrap(), Value::from(4));
	mock.get().checkpoint();

	mock.get().expect_trigger().times(1).return_const(());
	recompute.dirty();
	assert_eq!(reference.value().unwrap(), Value::from(4));
	mock.get().checkpoint();
}

#[test]
fn class_based_helper_tracks_arguments() {
	let counter = Rc::new(Counter {
		recompute: DirtyableTag::new(),
		mock: SharedMock::new(),
	});
	counter.mock.get().expect_trigger().return_const(());

	let a = UpdatableReference::new(1);
	let args = CapturedArguments::positional(vec![a.clone() as PathRef]);
	let reference = ClassBasedHelperReference::create(counter, args);

	assert_eq!(reference.value().unwrap(), Value::from(1));
	a.update(5);
	assert_eq!(reference.value().unwrap(), Value::from(5));
}

#[test]
fn internal_helper_sees_captured_references() {
	let a = UpdatableReference::new(2);
	let args = CapturedArguments::positional(vec![a.clone() as PathRef]);

	let double = Rc::new(|args: &CapturedArguments| -> Result<Value> {
		let first = match args.positional.at(0) {
			Some(reference) => reference.value()?,
			None => Value::Undefined,
		};
		Ok(Value::from(first.as_number().unwrap_or_default() * 2.0))
	});

	let reference = InternalHelperReference::new(double, args);
	assert_eq!(reference.value().unwrap(), Value::from(4));

	a.update(21);
	assert_eq!(reference.value().unwrap(), Value::from(42));
}

#[test]
fn helper_results_can_be_traversed() {
	let dict = Dict::with([("b", "inside")]);
	let source = UpdatableReference::new(dict);
	let identity = helper!(positional, _named => Ok(positional[0].clone()));

	let args = CapturedArguments::positional(vec![source as PathRef]);
	let reference = SimpleHelperReference::create(identity, args).unwrap();
	let b = reference.get("b").unwrap();

	assert_eq!(b.value().unwrap(), Value::from("inside"));
}

#[test]
fn captured_arguments_combine_tags() {
	let a = UpdatableReference::new(1);
	let b = UpdatableReference::new(2);
	let args = CapturedArguments::new(
		CapturedPositional::new(vec![a.clone() as PathRef]),
		CapturedNamed::new([("b", b.clone() as PathRef)]),
	);

	let snapshot = args.tag().value();
	assert!(args.tag().validate(snapshot));

	b.update(3);
	assert!(!args.tag().validate(snapshot));
	assert_eq!(args.named.names().collect::<Vec<_>>(), vec!["b"]);
	assert_eq!(args.positional.len(), 1);
	assert!(RootReference::new(Dict::new()).is_const());
}
