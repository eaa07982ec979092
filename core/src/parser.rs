//! Tree construction.
use std::hash::Hash;

use indexmap::IndexSet;

use crate::{NodeId, Quad, Tree};

mod list;

pub use list::Summary;

/// Tree builder.
///
/// Quads are added one at a time with [`Parser::add_quad`], updating the
/// tree incrementally. Collections (`rdf:first`/`rdf:rest` chains) can only
/// be reconstructed once every quad is known, by calling [`Parser::flush`].
#[derive(Debug, Clone)]
pub struct Parser<T> {
	tree: Tree<T>,

	/// Nodes with an outgoing `rdf:first` or `rdf:rest` edge.
	list_items: IndexSet<NodeId>,

	/// Objects of `rdf:first` edges.
	list_values: IndexSet<NodeId>,
}

impl<T> Parser<T> {
	pub fn tree(&self) -> &Tree<T> {
		&self.tree
	}

	pub fn into_tree(self) -> Tree<T> {
		self.tree
	}

	/// Number of list items seen so far.
	pub fn pending_list_items(&self) -> usize {
		self.list_items.len()
	}
}

impl<T: Clone + Eq + Hash> Parser<T> {
	pub fn new(tree: Tree<T>) -> Self {
		Self {
			tree,
			list_items: IndexSet::new(),
			list_values: IndexSet::new(),
		}
	}

	pub fn add_quad(&mut self, quad: Quad<T>) {
		let keywords = self.tree.keywords();
		let is_type = keywords.is_type(&quad.1);
		let is_first = keywords.is_first(&quad.1);
		let is_rest = keywords.is_rest(&quad.1);
		let is_nil = keywords.is_nil(&quad.2);

		let subject = self.tree.insert_subject(quad.0.clone());
		let object = self.tree.insert_object(quad.2.clone());
		self.tree.node_mut(object).refs.push(subject);

		let object_term = quad.2.clone();
		let node = self.tree.node_mut(subject);
		let i = node.insert_edge(quad, object, is_type);

		if is_type {
			node.ty = Some(i)
		}

		if is_first || is_rest {
			node.is_list_item = true;
			self.list_items.insert(subject);

			if is_first {
				self.list_values.insert(object);
			}
		} else if is_nil {
			if let Some((_, predicate)) = node.predicates.get_index_mut(i) {
				predicate.insert_list(object_term);
			}
		}
	}

	pub fn add_quads(&mut self, quads: impl IntoIterator<Item = Quad<T>>) {
		for quad in quads {
			self.add_quad(quad)
		}
	}

	/// Adds the given quads, reconstructs collections and returns the tree.
	pub fn parse(mut self, quads: impl IntoIterator<Item = Quad<T>>) -> Tree<T> {
		self.add_quads(quads);
		self.flush();
		self.tree
	}
}
