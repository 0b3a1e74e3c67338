use std::cell::Cell;

use crate::{meta, Result, Value};

/// Decides whether a value counts as true in a conditional.
pub type Truthiness = fn(&Value) -> Result<bool>;

#[derive(Clone, Copy)]
pub struct Config {
	pub truthiness: Truthiness,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			truthiness: to_bool,
		}
	}
}

thread_local! {
	static CONFIG: Cell<Config> = Cell::new(Config::default());
}

pub fn current() -> Config {
	CONFIG.with(|c| c.get())
}

/// Installs `config` and returns the previous one.
pub fn configure(config: Config) -> Config {
	CONFIG.with(|c| c.replace(config))
}

/// Applies the configured truthiness predicate.
pub fn truthy(value: &Value) -> Result<bool> {
	(current().truthiness)(value)
}

/// Default predicate: arrays are true when non empty, everything else
/// follows host truthiness.
pub fn to_bool(value: &Value) -> Result<bool> {
	if meta::is_array(value) {
		let length = meta::get(value, "length")?;
		return Ok(length != Value::Number(0.0));
	}

	Ok(value.is_truthy())
}
