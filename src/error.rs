use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
	/// Raised by a host object while reading or writing a property.
	#[error("{0}")]
	Host(String),

	#[error("cannot assign to `{key}` on a frozen {type_name}")]
	Frozen { key: String, type_name: &'static str },

	#[error("cannot set `{key}` on {type_name}")]
	NotAnObject { key: String, type_name: &'static str },

	/// A value of a type the reference layer does not know about.
	#[error("[BUG] Unexpected {}", describe(.type_name, .output))]
	Unexpected {
		type_name: &'static str,
		output: Option<String>,
	},

	#[error("helper failed: {0}")]
	Helper(String),
}

fn describe(type_name: &str, output: &Option<String>) -> String {
	match output {
		Some(output) => format!("{type_name} ({output})"),
		None => type_name.to_string(),
	}
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
