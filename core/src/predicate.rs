use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use crate::{NodeId, Quad};

/// Edge group.
///
/// All the edges labeled with the same predicate leaving one subject node.
#[derive(Debug, Clone)]
pub struct Predicate<T> {
	term: T,

	/// Target nodes, by object term.
	objects: IndexMap<T, NodeId>,

	/// Every contributing quad, in arrival order, duplicates included.
	quads: Vec<Quad<T>>,

	is_type: bool,

	/// List roots (or `rdf:nil`) found among the objects.
	lists: IndexSet<T>,
}

impl<T> Predicate<T> {
	pub fn term(&self) -> &T {
		&self.term
	}

	/// Checks if this is the `rdf:type` predicate.
	pub fn is_type(&self) -> bool {
		self.is_type
	}

	/// Number of distinct objects.
	pub fn len(&self) -> usize {
		self.objects.len()
	}

	pub fn is_empty(&self) -> bool {
		self.objects.is_empty()
	}

	pub fn objects(&self) -> impl '_ + DoubleEndedIterator<Item = (&T, NodeId)> {
		self.objects.iter().map(|(term, id)| (term, *id))
	}

	pub fn object_ids(&self) -> impl '_ + DoubleEndedIterator<Item = NodeId> {
		self.objects.values().copied()
	}

	/// Returns the object node if there is exactly one.
	pub fn sole_object(&self) -> Option<NodeId> {
		if self.objects.len() == 1 {
			self.objects.get_index(0).map(|(_, id)| *id)
		} else {
			None
		}
	}

	pub fn quads(&self) -> &[Quad<T>] {
		&self.quads
	}

	pub fn lists(&self) -> impl '_ + DoubleEndedIterator<Item = &T> {
		self.lists.iter()
	}

	/// Checks if at least one object of this predicate is a collection.
	pub fn is_list(&self) -> bool {
		!self.lists.is_empty()
	}
}

impl<T: Eq + Hash> Predicate<T> {
	pub(crate) fn new(term: T, is_type: bool, object_term: T, object: NodeId, quad: Quad<T>) -> Self {
		let mut objects = IndexMap::new();
		objects.insert(object_term, object);

		Self {
			term,
			objects,
			quads: vec![quad],
			is_type,
			lists: IndexSet::new(),
		}
	}

	/// Adds an edge to the group.
	///
	/// Returns `true` if the object is new to the group. The quad is
	/// recorded either way.
	pub(crate) fn insert(&mut self, object_term: T, object: NodeId, quad: Quad<T>) -> bool {
		self.quads.push(quad);
		self.objects.insert(object_term, object).is_none()
	}

	pub(crate) fn insert_list(&mut self, term: T) -> bool {
		self.lists.insert(term)
	}

	pub fn contains(&self, object_term: &T) -> bool {
		self.objects.contains_key(object_term)
	}

	pub fn get(&self, object_term: &T) -> Option<NodeId> {
		self.objects.get(object_term).copied()
	}

	/// Checks if the given term was identified as a collection referenced
	/// by this predicate.
	pub fn has_list(&self, term: &T) -> bool {
		self.lists.contains(term)
	}
}

#[cfg(test)]
mod tests {
	use rdf_types::Quad;

	use super::*;

	fn predicate() -> Predicate<&'static str> {
		Predicate::new(
			"ex:p",
			false,
			"ex:a",
			NodeId(1),
			Quad("ex:s", "ex:p", "ex:a", None),
		)
	}

	#[test]
	fn duplicate_objects() {
		let mut p = predicate();
		assert!(!p.insert("ex:a", NodeId(1), Quad("ex:s", "ex:p", "ex:a", None)));
		assert!(p.insert("ex:b", NodeId(2), Quad("ex:s", "ex:p", "ex:b", None)));
		assert_eq!(p.len(), 2);
		assert_eq!(p.quads().len(), 3);
		assert_eq!(p.sole_object(), None);
		assert_eq!(
			p.objects().collect::<Vec<_>>(),
			[(&"ex:a", NodeId(1)), (&"ex:b", NodeId(2))]
		)
	}

	#[test]
	fn sole_object() {
		let p = predicate();
		assert_eq!(p.sole_object(), Some(NodeId(1)));
		assert!(p.contains(&"ex:a"));
		assert!(!p.is_list())
	}
}
