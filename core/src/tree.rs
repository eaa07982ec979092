use std::hash::Hash;

use hashbrown::HashMap;
use indexmap::IndexSet;

use crate::{Keywords, Node, NodeId, Parser, Quad};

/// Graph index.
///
/// Owns every node of the graph, indexed by term, along with two views
/// listing the nodes acting as subjects and as objects. A node may appear
/// in both views.
#[derive(Debug, Clone)]
pub struct Tree<T> {
	keywords: Keywords<T>,
	nodes: Vec<Node<T>>,
	by_term: HashMap<T, NodeId>,
	subjects: IndexSet<NodeId>,
	objects: IndexSet<NodeId>,
}

impl<T> Tree<T> {
	pub fn keywords(&self) -> &Keywords<T> {
		&self.keywords
	}

	/// Number of nodes, which is also the number of distinct terms.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn subject_count(&self) -> usize {
		self.subjects.len()
	}

	pub fn object_count(&self) -> usize {
		self.objects.len()
	}

	/// Returns the node with the given identifier.
	///
	/// # Panics
	///
	/// Panics if `id` was not produced by this tree.
	pub fn node(&self, id: NodeId) -> &Node<T> {
		&self.nodes[id.index()]
	}

	pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
		&mut self.nodes[id.index()]
	}

	pub fn nodes(&self) -> std::slice::Iter<'_, Node<T>> {
		self.nodes.iter()
	}

	/// Nodes acting as subjects, in first-seen order.
	pub fn subjects(&self) -> impl '_ + DoubleEndedIterator<Item = &Node<T>> {
		self.subjects.iter().map(|id| self.node(*id))
	}

	/// Nodes acting as objects, in first-seen order.
	pub fn objects(&self) -> impl '_ + DoubleEndedIterator<Item = &Node<T>> {
		self.objects.iter().map(|id| self.node(*id))
	}

	/// Nodes heading a reconstructed collection.
	pub fn list_roots(&self) -> impl '_ + Iterator<Item = &Node<T>> {
		self.nodes.iter().filter(|n| n.is_list_root())
	}

	/// Sets the subject flag of a node and registers it in the subject view.
	pub fn promote_to_subject(&mut self, id: NodeId) {
		self.node_mut(id).is_subject = true;
		self.subjects.insert(id);
	}

	/// Clears the subject flag of a node and removes it from the subject view.
	pub fn demote_from_subject(&mut self, id: NodeId) {
		self.node_mut(id).is_subject = false;
		self.subjects.shift_remove(&id);
	}

	/// Sets the object flag of a node and registers it in the object view.
	pub fn promote_to_object(&mut self, id: NodeId) {
		self.node_mut(id).is_object = true;
		self.objects.insert(id);
	}

	/// Clears the object flag of a node and removes it from the object view.
	pub fn demote_from_object(&mut self, id: NodeId) {
		self.node_mut(id).is_object = false;
		self.objects.shift_remove(&id);
	}

	/// Item nodes of the collection rooted at `id`.
	///
	/// Empty if `id` is not a list root.
	pub fn items(&self, id: NodeId) -> impl '_ + DoubleEndedIterator<Item = &Node<T>> {
		self.node(id)
			.items()
			.unwrap_or_default()
			.iter()
			.map(|i| self.node(*i))
	}
}

impl<T: Clone + Eq + Hash> Tree<T> {
	pub fn new(keywords: Keywords<T>) -> Self {
		Self {
			keywords,
			nodes: Vec::new(),
			by_term: HashMap::new(),
			subjects: IndexSet::new(),
			objects: IndexSet::new(),
		}
	}

	/// Builds a tree from the given quads, reconstructing collections.
	pub fn from_quads(keywords: Keywords<T>, quads: impl IntoIterator<Item = Quad<T>>) -> Self {
		Parser::new(Self::new(keywords)).parse(quads)
	}

	pub fn id_of(&self, term: &T) -> Option<NodeId> {
		self.by_term.get(term).copied()
	}

	pub fn get(&self, term: &T) -> Option<&Node<T>> {
		self.id_of(term).map(|id| self.node(id))
	}

	/// Returns the node of `term` if it acts as a subject.
	pub fn subject(&self, term: &T) -> Option<&Node<T>> {
		self.get(term).filter(|n| n.is_subject())
	}

	/// Returns the node of `term` if it acts as an object.
	pub fn object(&self, term: &T) -> Option<&Node<T>> {
		self.get(term).filter(|n| n.is_object())
	}

	/// Value of a list item: the single `rdf:first` object of the node.
	pub fn item(&self, id: NodeId) -> Option<&Node<T>> {
		self.node(id)
			.predicate(&self.keywords.first)
			.and_then(|p| p.sole_object())
			.map(|i| self.node(i))
	}

	/// Values of the collection rooted at `id`, in order.
	///
	/// An item without a single `rdf:first` object yields `None`.
	pub fn list_values(&self, id: NodeId) -> impl '_ + DoubleEndedIterator<Item = Option<&Node<T>>> {
		self.items(id).map(|n| self.item(n.id()))
	}

	/// Returns the node of `term`, creating it if necessary.
	///
	/// # Panics
	///
	/// Panics if the tree already holds `u32::MAX + 1` nodes.
	fn insert_node(&mut self, term: T) -> NodeId {
		let nodes = &mut self.nodes;
		*self.by_term.entry(term).or_insert_with_key(|term| {
			let id = NodeId::new(nodes.len());
			nodes.push(Node::new(id, term.clone()));
			id
		})
	}

	pub(crate) fn insert_subject(&mut self, term: T) -> NodeId {
		let id = self.insert_node(term);
		self.promote_to_subject(id);
		id
	}

	pub(crate) fn insert_object(&mut self, term: T) -> NodeId {
		let id = self.insert_node(term);
		self.promote_to_object(id);
		id
	}
}
