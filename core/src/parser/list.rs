//! Collection reconstruction.
use std::hash::Hash;

use hashbrown::HashSet;
use indexmap::IndexSet;

use super::Parser;
use crate::{ListShape, NodeId, Predicate, Tree};

/// Outcome of a [`Parser::flush`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
	/// Reconstructed collections.
	pub lists: usize,

	/// Collections not terminated by `rdf:nil`.
	pub open: usize,

	/// Collections looping onto themselves.
	pub cyclic: usize,
}

impl Summary {
	fn add(&mut self, shape: ListShape) {
		self.lists += 1;
		match shape {
			ListShape::Closed => (),
			ListShape::Open => self.open += 1,
			ListShape::Cyclic => self.cyclic += 1,
		}
	}

	pub fn malformed(&self) -> usize {
		self.open + self.cyclic
	}
}

impl<T: Clone + Eq + Hash> Parser<T> {
	/// Reconstructs collections.
	///
	/// Every chain of list items is walked back to its root, whose items are
	/// then collected by following `rdf:rest` edges. Predicates pointing to
	/// a root record it as a list. Finally, every `rdf:first` object is
	/// marked as a list value.
	///
	/// Calling this function again recomputes the same items, so it can be
	/// called after more quads have been added.
	///
	/// List items are visited in the order they were first seen, so the
	/// result depends on it when a chain is also referenced from outside.
	/// Such an item becomes a root of its own only if it is seen before its
	/// predecessors, in which case it is also part of the enclosing list.
	pub fn flush(&mut self) -> Summary {
		for &id in &self.list_items {
			let node = self.tree.node_mut(id);
			node.items = None;
			node.list_shape = None;
		}

		let mut visited = HashSet::new();
		let mut summary = Summary::default();

		for &id in &self.list_items {
			if visited.contains(&id) {
				continue;
			}

			let root = find_root(&self.tree, id, &mut visited);
			let (items, shape) = collect_items(&self.tree, root, &mut visited);
			log::trace!("list {root} has {} items ({shape})", items.len());
			tag_referencing_predicates(&mut self.tree, root);

			let node = self.tree.node_mut(root);
			node.items = Some(items);
			node.list_shape = Some(shape);
			summary.add(shape)
		}

		for &id in &self.list_values {
			self.tree.node_mut(id).is_list_value = true
		}

		log::debug!(
			"reconstructed {} lists from {} list items ({} malformed)",
			summary.lists,
			self.list_items.len(),
			summary.malformed()
		);

		summary
	}
}

/// Finds the list item linking to `id` through `rdf:rest`.
///
/// `id` must be referenced by exactly one quad, whose subject is a list item
/// with `id` as sole `rdf:rest` object. A node referenced twice, even by the
/// same subject, starts its own list.
fn previous_item<T: Clone + Eq + Hash>(tree: &Tree<T>, id: NodeId) -> Option<NodeId> {
	let candidate = match tree.node(id).refs() {
		[r] => *r,
		_ => return None,
	};

	let previous = tree.node(candidate);
	if !previous.is_list_item() {
		return None;
	}

	let rest = previous.predicate(&tree.keywords().rest)?;
	(rest.sole_object() == Some(id)).then_some(candidate)
}

/// Walks back from `id` to the root of its list.
///
/// Stops on the first node already visited, which happens when the chain is
/// circular.
fn find_root<T: Clone + Eq + Hash>(
	tree: &Tree<T>,
	mut id: NodeId,
	visited: &mut HashSet<NodeId>,
) -> NodeId {
	visited.insert(id);

	while let Some(previous) = previous_item(tree, id) {
		if !visited.insert(previous) {
			log::trace!("circular list through {previous}");
			break;
		}

		id = previous
	}

	id
}

/// Collects the items of the list starting at `root`.
fn collect_items<T: Clone + Eq + Hash>(
	tree: &Tree<T>,
	root: NodeId,
	visited: &mut HashSet<NodeId>,
) -> (Vec<NodeId>, ListShape) {
	let keywords = tree.keywords();
	let mut items = Vec::new();
	let mut in_list = HashSet::new();
	let mut current = root;

	loop {
		visited.insert(current);
		in_list.insert(current);
		items.push(current);

		let next = tree
			.node(current)
			.predicate(&keywords.rest)
			.and_then(Predicate::sole_object);

		match next {
			None => break (items, ListShape::Open),
			Some(next) if keywords.is_nil(tree.node(next).term()) => {
				break (items, ListShape::Closed)
			}
			Some(next) if in_list.contains(&next) => break (items, ListShape::Cyclic),
			Some(next) => current = next,
		}
	}
}

/// Records `root` as a list in every predicate pointing to it.
fn tag_referencing_predicates<T: Clone + Eq + Hash>(tree: &mut Tree<T>, root: NodeId) {
	let term = tree.node(root).term().clone();
	let refs: IndexSet<NodeId> = tree.node(root).refs().iter().copied().collect();

	for r in refs {
		for predicate in tree.node_mut(r).predicates.values_mut() {
			if predicate.contains(&term) {
				predicate.insert_list(term.clone());
			}
		}
	}
}
