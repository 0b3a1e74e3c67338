use pathref::config::{self, Config};
use pathref::host::{Dict, Proxy};
use pathref::{
	ConditionalReference, DirtyableTag, HostObject, Object, PathRef, PrimitiveReference,
	Reference, Result, RootReference, Tag, UpdatableReference, Value,
};


use mock::MockHost;

#[test]
fn constant_values_fold_to_a_boolean() {
	let truthy = ConditionalReference::create(PrimitiveReference::new("yes".into())).unwrap();
	assert!(truthy.is_const());
	assert_eq!(truthy.value().unwrap(), Value::Bool(true));

	let falsy = ConditionalReference::create(PrimitiveReference::new(0.into())).unwrap();
	assert!(falsy.is_const());
	assert_eq!(falsy.value().unwrap(), Value::Bool(false));
}

#[test]
fn constant_proxy_stays_live() {
	let proxy = Proxy::new(Value::Null);
	let reference = ConditionalReference::create(RootReference::new(proxy.clone())).unwrap();

	assert!(!reference.is_const());
	assert_eq!(reference.value().unwrap(), Value::Bool(false));

	proxy.set_content("content");
	assert_eq!(reference.value().unwrap(), Value::Bool(true));
}

#[test]
fn live_references_are_wrapped() {
	let source = UpdatableReference::new(Value::Null);
	let reference = ConditionalReference::create(source.clone()).unwrap();

	assert_eq!(reference.value().unwrap(), Value::Bool(false));

	source.update("now");
	assert_eq!(reference.value().unwrap(), Value::Bool(true));

	source.update("");
	assert_eq!(reference.value().unwrap(), Value::Bool(false));
}

#[test]
fn truthiness_toggles_between_proxy_and_plain_values() {
	let proxy = Proxy::new(Value::from("content"));
	let source = UpdatableReference::new(proxy.clone());
	let reference = ConditionalReference::create(source.clone()).unwrap();

	assert_eq!(reference.value().unwrap(), Value::Bool(true));
	let snapshot = reference.tag().value();

	proxy.set_content(Value::Null);
	assert!(!reference.tag().validate(snapshot));
	assert_eq!(reference.value().unwrap(), Value::Bool(false));

	source.update(0);
	assert_eq!(reference.value().unwrap(), Value::Bool(false));
	let snapshot = reference.tag().value();

	// The proxy no longer matters once the source moved away from it.
	proxy.set_content("again");
	assert!(reference.tag().validate(snapshot));

	source.update(proxy);
	assert_eq!(reference.value().unwrap(), Value::Bool(true));
}

#[test]
fn same_value_is_not_reevaluated() {
	let dict = Dict::with([("a", 1)]);
	let source = UpdatableReference::new(dict.clone());
	let reference = ConditionalReference::create(source.clone()).unwrap();

	assert_eq!(reference.value().unwrap(), Value::Bool(true));
	let snapshot = reference.tag().value();

	source.update(dict.clone());
	assert!(reference.tag().validate(snapshot));

	// Plain objects are tagged by identity, so changing them invalidates.
	dict.set("a", 2.into()).unwrap();
	assert!(!reference.tag().validate(snapshot));
}

#[test]
fn arrays_are_truthy_when_not_empty() {
	let length = std::rc::Rc::new(std::cell::Cell::new(0));
	let tag = DirtyableTag::new();

	let mut host = MockHost::new();
	host.expect_is_array().return_const(true);
	let object_tag = tag.clone();
	host.expect_tag().returning_st(move || object_tag.clone().into());
	host.expect_tag_for_property().returning_st({
		let tag = tag.clone();
		move |_| tag.clone().into()
	});
	host.expect_get().withf(|key| key == "length").returning_st({
		let length = length.clone();
		move |_| Ok(Value::from(length.get()))
	});

	let source: PathRef = UpdatableReference::new(Object::new(host));
	let reference = ConditionalReference::create(source).unwrap();
	assert_eq!(reference.value().unwrap(), Value::Bool(false));

	length.set(2);
	tag.dirty();
	assert_eq!(reference.value().unwrap(), Value::Bool(true));
}

fn never(_: &Value) -> Result<bool> {
	Ok(false)
}

#[test]
fn truthiness_predicate_is_configurable() {
	let previous = config::configure(Config { truthiness: never });

	let reference = ConditionalReference::create(PrimitiveReference::new(true.into())).unwrap();
	assert_eq!(reference.value().unwrap(), Value::Bool(false));

	config::configure(previous);
	let reference = ConditionalReference::create(PrimitiveReference::new(true.into())).unwrap();
	assert_eq!(reference.value().unwrap(), Value::Bool(true));
}

#[test]
fn conditional_tag_includes_the_source() {
	let source = UpdatableReference::new(1);
	let reference = ConditionalReference::create(source.clone()).unwrap();
	reference.value().unwrap();

	let snapshot = reference.tag().value();
	source.update(2);
	assert!(!reference.tag().validate(snapshot));
	assert!(!matches!(reference.tag(), Tag::Constant));
}
