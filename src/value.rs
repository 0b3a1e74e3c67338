use std::fmt::{self, Debug, Display};
use std::rc::Rc;

use fxhash::FxHashMap;

use crate::host::HostObject;
use crate::Result;

/// Named helper arguments after evaluation.
pub type NamedValues = FxHashMap<Rc<str>, Value>;

/// A dynamic host value.
///
/// Primitives compare by value, everything else by identity.
#[derive(Clone, Default)]
pub enum Value {
	#[default]
	Undefined,
	Null,
	Bool(bool),
	Number(f64),
	String(Rc<str>),
	Object(Object),
	Function(Function),
	Symbol(Symbol),
}

impl Value {
	pub fn type_name(&self) -> &'static str {
		match self {
			Value::Undefined => "undefined",
			Value::Null => "null",
			Value::Bool(_) => "boolean",
			Value::Number(_) => "number",
			Value::String(_) => "string",
			Value::Object(_) => "object",
			Value::Function(_) => "function",
			Value::Symbol(_) => "symbol",
		}
	}

	/// Host truthiness: `undefined`, `null`, `false`, `0`, `NaN` and `""`
	/// are falsy.
	pub fn is_truthy(&self) -> bool {
		match self {
			Value::Undefined | Value::Null => false,
			Value::Bool(b) => *b,
			Value::Number(n) => *n != 0.0 && !n.is_nan(),
			Value::String(s) => !s.is_empty(),
			Value::Object(_) | Value::Function(_) | Value::Symbol(_) => true,
		}
	}

	pub fn as_object(&self) -> Option<&Object> {
		match self {
			Value::Object(object) => Some(object),
			_ => None,
		}
	}

	pub fn as_function(&self) -> Option<&Function> {
		match self {
			Value::Function(function) => Some(function),
			_ => None,
		}
	}

	pub fn as_number(&self) -> Option<f64> {
		match self {
			Value::Number(n) => Some(*n),
			_ => None,
		}
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
			(Value::Bool(a), Value::Bool(b)) => a == b,
			(Value::Number(a), Value::Number(b)) => a == b,
			(Value::String(a), Value::String(b)) => a == b,
			(Value::Object(a), Value::Object(b)) => a == b,
			(Value::Function(a), Value::Function(b)) => a == b,
			(Value::Symbol(a), Value::Symbol(b)) => a == b,
			_ => false,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Null => f.write_str("null"),
			Value::Bool(b) => write!(f, "{b}"),
			Value::Number(n) => write!(f, "{n}"),
			Value::String(s) => f.write_str(s),
			Value::Object(object) => write!(f, "[object {}]", object.type_name()),
			Value::Function(_) => f.write_str("function"),
			Value::Symbol(symbol) => write!(f, "Symbol({})", symbol.description()),
		}
	}
}

impl Debug for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::String(s) => write!(f, "{s:?}"),
			other => Display::fmt(other, f),
		}
	}
}

impl From<bool> for Value {
	fn from(b: bool) -> Self {
		Value::Bool(b)
	}
}

impl From<f64> for Value {
	fn from(n: f64) -> Self {
		Value::Number(n)
	}
}

impl From<i32> for Value {
	fn from(n: i32) -> Self {
		Value::Number(n.into())
	}
}

impl From<usize> for Value {
	fn from(n: usize) -> Self {
		Value::Number(n as f64)
	}
}

impl From<&str> for Value {
	fn from(s: &str) -> Self {
		Value::String(s.into())
	}
}

impl From<String> for Value {
	fn from(s: String) -> Self {
		Value::String(s.into())
	}
}

impl From<Object> for Value {
	fn from(object: Object) -> Self {
		Value::Object(object)
	}
}

impl From<Function> for Value {
	fn from(function: Function) -> Self {
		Value::Function(function)
	}
}

impl<T: HostObject> From<Rc<T>> for Value {
	fn from(object: Rc<T>) -> Self {
		Value::Object(object.into())
	}
}

/// Identity handle to a host object.
#[derive(Clone)]
pub struct Object(Rc<dyn HostObject>);

impl Object {
	pub fn new(object: impl HostObject) -> Self {
		Object(Rc::new(object))
	}

	pub(crate) fn addr(&self) -> *const () {
		Rc::as_ptr(&self.0) as *const ()
	}
}

impl std::ops::Deref for Object {
	type Target = dyn HostObject;

	fn deref(&self) -> &Self::Target {
		&*self.0
	}
}

impl PartialEq for Object {
	fn eq(&self, other: &Self) -> bool {
		self.addr() == other.addr()
	}
}

impl Eq for Object {}

impl<T: HostObject> From<Rc<T>> for Object {
	fn from(object: Rc<T>) -> Self {
		Object(object)
	}
}

impl Debug for Object {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[object {}]", self.type_name())
	}
}

type Callable = dyn Fn(&[Value]) -> Result<Value>;

/// A callable host value.
///
/// Functions are never observed, they only travel through references.
#[derive(Clone)]
pub struct Function {
	func: Rc<Callable>,
	action: bool,
}

impl Function {
	pub fn new(func: impl Fn(&[Value]) -> Result<Value> + 'static) -> Self {
		Function {
			func: Rc::new(func),
			action: false,
		}
	}

	/// A function marked as an action.
	pub fn action(func: impl Fn(&[Value]) -> Result<Value> + 'static) -> Self {
		Function {
			func: Rc::new(func),
			action: true,
		}
	}

	pub fn is_action(&self) -> bool {
		self.action
	}

	pub fn call(&self, args: &[Value]) -> Result<Value> {
		(self.func)(args)
	}
}

impl PartialEq for Function {
	fn eq(&self, other: &Self) -> bool {
		Rc::as_ptr(&self.func) as *const () == Rc::as_ptr(&other.func) as *const ()
	}
}

/// A unique runtime token. References never wrap symbols.
#[derive(Clone)]
pub struct Symbol(Rc<str>);

impl Symbol {
	pub fn new(description: &str) -> Self {
		Symbol(description.into())
	}

	pub fn description(&self) -> &str {
		&self.0
	}
}

impl PartialEq for Symbol {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}
