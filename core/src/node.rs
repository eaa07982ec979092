use std::{fmt, hash::Hash};

use indexmap::{map::Entry, IndexMap};

use crate::{NodeId, Predicate, Quad};

/// Shape of a reconstructed collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListShape {
	/// The `rdf:rest` chain ends on `rdf:nil`.
	Closed,

	/// The chain stops before `rdf:nil`, on a missing or branching
	/// `rdf:rest`.
	Open,

	/// The chain loops back onto one of its own items.
	Cyclic,
}

impl ListShape {
	pub fn is_closed(&self) -> bool {
		matches!(self, Self::Closed)
	}

	/// Checks if the collection is malformed (open or cyclic).
	pub fn is_malformed(&self) -> bool {
		!self.is_closed()
	}
}

impl fmt::Display for ListShape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Closed => write!(f, "closed"),
			Self::Open => write!(f, "open"),
			Self::Cyclic => write!(f, "cyclic"),
		}
	}
}

/// Graph node.
///
/// There is exactly one node per distinct term in a [`Tree`](crate::Tree).
#[derive(Debug, Clone)]
pub struct Node<T> {
	id: NodeId,
	term: T,
	pub(crate) is_subject: bool,
	pub(crate) is_object: bool,

	/// Outgoing edges grouped by predicate.
	pub(crate) predicates: IndexMap<T, Predicate<T>>,

	/// Subject nodes pointing to this node, one entry per quad.
	pub(crate) refs: Vec<NodeId>,

	/// Quads where this node is the subject.
	pub(crate) quads: Vec<Quad<T>>,

	/// Index of the `rdf:type` entry in `predicates`.
	pub(crate) ty: Option<usize>,

	pub(crate) is_list_item: bool,
	pub(crate) is_list_value: bool,

	/// Collection items, for list roots.
	pub(crate) items: Option<Vec<NodeId>>,
	pub(crate) list_shape: Option<ListShape>,
}

impl<T> Node<T> {
	pub(crate) fn new(id: NodeId, term: T) -> Self {
		Self {
			id,
			term,
			is_subject: false,
			is_object: false,
			predicates: IndexMap::new(),
			refs: Vec::new(),
			quads: Vec::new(),
			ty: None,
			is_list_item: false,
			is_list_value: false,
			items: None,
			list_shape: None,
		}
	}

	pub fn id(&self) -> NodeId {
		self.id
	}

	pub fn term(&self) -> &T {
		&self.term
	}

	pub fn is_subject(&self) -> bool {
		self.is_subject
	}

	pub fn is_object(&self) -> bool {
		self.is_object
	}

	pub fn predicates(&self) -> impl '_ + DoubleEndedIterator<Item = &Predicate<T>> {
		self.predicates.values()
	}

	pub fn predicate_count(&self) -> usize {
		self.predicates.len()
	}

	/// Back-references: the subject nodes of every quad targeting this node.
	pub fn refs(&self) -> &[NodeId] {
		&self.refs
	}

	pub fn quads(&self) -> &[Quad<T>] {
		&self.quads
	}

	/// Returns the `rdf:type` edge group, if any.
	pub fn ty(&self) -> Option<&Predicate<T>> {
		self.ty
			.and_then(|i| self.predicates.get_index(i))
			.map(|(_, p)| p)
	}

	/// Checks if the node has an outgoing `rdf:first` or `rdf:rest` edge.
	pub fn is_list_item(&self) -> bool {
		self.is_list_item
	}

	/// Checks if the node is the value (`rdf:first` object) of a list item.
	pub fn is_list_value(&self) -> bool {
		self.is_list_value
	}

	pub fn is_list_root(&self) -> bool {
		self.items.is_some()
	}

	/// Items of the collection starting at this node, in order.
	///
	/// Only list roots have items, including the root itself.
	pub fn items(&self) -> Option<&[NodeId]> {
		self.items.as_deref()
	}

	pub fn list_shape(&self) -> Option<ListShape> {
		self.list_shape
	}
}

impl<T: Clone + Eq + Hash> Node<T> {
	pub fn predicate(&self, term: &T) -> Option<&Predicate<T>> {
		self.predicates.get(term)
	}

	/// Adds an outgoing edge to `object`, returning the index of its
	/// predicate entry.
	pub(crate) fn insert_edge(&mut self, quad: Quad<T>, object: NodeId, is_type: bool) -> usize {
		let predicate = quad.1.clone();
		let object_term = quad.2.clone();
		self.quads.push(quad.clone());

		match self.predicates.entry(predicate) {
			Entry::Occupied(entry) => {
				let i = entry.index();
				entry.into_mut().insert(object_term, object, quad);
				i
			}
			Entry::Vacant(entry) => {
				let i = entry.index();
				let term = entry.key().clone();
				entry.insert(Predicate::new(term, is_type, object_term, object, quad));
				i
			}
		}
	}
}
