pub use enclose::*;

/// Builds a [`HelperFunction`](crate::HelperFunction).
///
/// ```
/// use pathref::{helper, Value};
///
/// let greeting = String::from("hello");
/// let greet = helper!((greeting) positional, _named => {
///     Ok(Value::from(format!("{greeting} {}", positional[0])))
/// });
/// ```
#[macro_export]
macro_rules! helper {
    (( $($d_tt:tt)* ) $positional:ident, $named:ident => $($b:tt)*) => {
        $crate::macros::enclose!(($( $d_tt )*) ::std::rc::Rc::new(
            move |$positional: &[$crate::Value], $named: &$crate::NamedValues| -> $crate::Result<$crate::Value> { $($b)* }
        )) as $crate::HelperFunction
    };
    ($positional:ident, $named:ident => $($b:tt)*) => {
        ::std::rc::Rc::new(
            move |$positional: &[$crate::Value], $named: &$crate::NamedValues| -> $crate::Result<$crate::Value> { $($b)* }
        ) as $crate::HelperFunction
    };
}
