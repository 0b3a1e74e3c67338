//! Render pass diagnostics, compiled only with the `debug` feature.
//!
//! Within one render transaction every property read by a reference and
//! every property written through [`crate::meta::set`] is recorded. A
//! property that is both read and written in the same pass is reported
//! once as a [`BindingConflict`]. Nothing here changes a computed value.

use std::cell::RefCell;
use std::rc::Rc;

use fxhash::{FxHashMap, FxHashSet};

use crate::addr::ObjectAddr;
use crate::flush::ReferenceId;
use crate::Object;

type Path = (ObjectAddr, Rc<str>);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindingConflict {
	pub object_type: &'static str,
	pub key: Rc<str>,
	/// The reference that read the property, when the read came first.
	pub reference: Option<ReferenceId>,
}

#[derive(Default)]
struct Transaction {
	rendered: FxHashMap<Path, ReferenceId>,
	written: FxHashSet<Path>,
	reported: FxHashSet<Path>,
	conflicts: Vec<BindingConflict>,
}

impl Transaction {
	fn report(&mut self, path: Path, reference: Option<ReferenceId>) {
		if !self.reported.insert(path.clone()) {
			return;
		}

		let (object, key) = path;
		tracing::warn!(
			object = object.type_name(),
			key = %key,
			"property was read and written in the same render pass"
		);

		self.conflicts.push(BindingConflict {
			object_type: object.type_name(),
			key,
			reference,
		});
	}
}

thread_local! {
	static TRANSACTION: RefCell<Option<Transaction>> = RefCell::new(None);
}

/// Runs `func` as one render pass and returns the conflicts it produced.
///
/// A nested call joins the running pass and returns no conflicts of its
/// own; the outermost call reports them.
pub fn run_in_transaction<R>(func: impl FnOnce() -> R) -> (R, Vec<BindingConflict>) {
	if in_transaction() {
		return (func(), Vec::new());
	}

	struct Close;

	impl Drop for Close {
		fn drop(&mut self) {
			TRANSACTION.with(|t| t.borrow_mut().take());
		}
	}

	TRANSACTION.with(|t| *t.borrow_mut() = Some(Transaction::default()));
	let close = Close;

	let result = func();

	let conflicts = TRANSACTION
		.with(|t| t.borrow_mut().take())
		.map(|t| t.conflicts)
		.unwrap_or_default();

	drop(close);
	(result, conflicts)
}

pub fn in_transaction() -> bool {
	TRANSACTION.with(|t| t.borrow().is_some())
}

pub(crate) fn did_render(object: &Object, key: &Rc<str>, reference: ReferenceId) {
	with_transaction(|t| {
		let path = (ObjectAddr::new(object.clone()), key.clone());
		if t.written.contains(&path) {
			t.report(path.clone(), None);
		}
		t.rendered.entry(path).or_insert(reference);
	});
}

pub(crate) fn did_write(object: &Object, key: &str) {
	with_transaction(|t| {
		let path = (ObjectAddr::new(object.clone()), Rc::from(key));
		if let Some(reference) = t.rendered.get(&path).copied() {
			t.report(path.clone(), Some(reference));
		}
		t.written.insert(path);
	});
}

fn with_transaction(func: impl FnOnce(&mut Transaction)) {
	TRANSACTION.with(|t| {
		if let Some(transaction) = t.borrow_mut().as_mut() {
			func(transaction);
		}
	});
}
