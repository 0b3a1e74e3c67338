use std::rc::Rc;

use pathref::host::Dict;
use pathref::{
	value_to_ref, Error, Function, HostObject, PathRef, ReadonlyReference, Reference,
	RootReference, Symbol, UnboundReference, UpdatableReference, Value,
};

#[test]
fn primitives_become_constants() {
	for value in [
		Value::Undefined,
		Value::Null,
		Value::from(true),
		Value::from(1.5),
		Value::from("text"),
	] {
		let reference = value_to_ref(value.clone(), true).unwrap();
		assert!(reference.is_const());
		assert_eq!(reference.value().unwrap(), value);
	}
}

#[test]
fn bound_objects_become_root_references() {
	let dict = Dict::with([("a", 1)]);
	let reference = value_to_ref(dict.clone().into(), true).unwrap();

	let first = reference.clone().get("a").unwrap();
	let second = reference.get("a").unwrap();
	assert!(Rc::ptr_eq(&first, &second));

	dict.set("a", 2.into()).unwrap();
	assert_eq!(first.value().unwrap(), Value::from(2));
}

#[test]
fn unbound_objects_are_read_once() {
	let dict = Dict::with([("a", 1)]);
	let reference = value_to_ref(dict.clone().into(), false).unwrap();

	let a = reference.get("a").unwrap();
	assert!(a.is_const());

	dict.set("a", 2.into()).unwrap();
	assert_eq!(a.value().unwrap(), Value::from(1));
}

#[test]
fn functions_are_never_bound() {
	let function = Function::new(|args| Ok(Value::from(args.len())));
	let reference = value_to_ref(function.clone().into(), true).unwrap();

	assert!(reference.is_const());
	let invoke = reference.invoke().unwrap();
	assert!(invoke == function);
	assert_eq!(invoke.call(&[Value::Null]).unwrap(), Value::from(1));
}

#[test]
fn actions_keep_their_marker() {
	let action = Function::action(|_| Ok(Value::Undefined));
	let reference = UnboundReference::create(action.into()).unwrap();

	assert!(reference.invoke().unwrap().is_action());
}

#[cfg(feature = "debug")]
#[test]
fn unknown_values_are_a_defect() {
	let error = value_to_ref(Value::Symbol(Symbol::new("token")), true)
		.err()
		.unwrap();

	assert_eq!(
		error,
		Error::Unexpected {
			type_name: "symbol",
			output: Some("Symbol(token)".to_string()),
		}
	);
	assert_eq!(error.to_string(), "[BUG] Unexpected symbol (Symbol(token))");
}

#[cfg(not(feature = "debug"))]
#[test]
fn unknown_values_are_wrapped_without_checks() {
	let reference = value_to_ref(Value::Symbol(Symbol::new("token")), true).unwrap();
	assert!(reference.is_const());
}

#[test]
fn readonly_references_hide_the_update_channel() {
	let dict = Dict::with([("a", 1)]);
	let a = RootReference::new(dict.clone()).get("a").unwrap();
	assert!(a.as_update().is_some());

	let readonly: PathRef = ReadonlyReference::new(a.clone());
	assert!(readonly.as_update().is_none());
	assert_eq!(readonly.value().unwrap(), Value::from(1));

	dict.set("a", 2.into()).unwrap();
	assert_eq!(readonly.value().unwrap(), Value::from(2));
}

#[test]
fn readonly_references_forward_invoke_and_get() {
	let function = Function::new(|_| Ok(Value::Null));
	let inner = value_to_ref(function.clone().into(), true).unwrap();
	let readonly = ReadonlyReference::new(inner);
	assert!(readonly.invoke().unwrap() == function);

	let source = UpdatableReference::new(Dict::with([("b", "x")]));
	let readonly = ReadonlyReference::new(source);
	assert_eq!(readonly.get("b").unwrap().value().unwrap(), Value::from("x"));
}

#[test]
fn primitive_strings_expose_length() {
	let reference = value_to_ref("four".into(), true).unwrap();
	assert_eq!(reference.clone().get("length").unwrap().value().unwrap(), Value::from(4));
	assert_eq!(reference.get("other").unwrap().value().unwrap(), Value::Undefined);
}
