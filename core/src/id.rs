/// Position of a node in the arena of the [`Tree`](crate::Tree) that created
/// it.
///
/// Nodes are numbered in the order their term was first seen, starting
/// from zero. Since nodes are never removed, a tree with `n` nodes uses
/// exactly the identifiers `0..n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
	/// Identifier of the node stored at `index`.
	///
	/// # Panics
	///
	/// Panics if `index` does not fit in a `u32`.
	pub(crate) fn new(index: usize) -> Self {
		match u32::try_from(index) {
			Ok(i) => Self(i),
			Err(_) => panic!("node arena overflow ({index} nodes)"),
		}
	}

	pub fn index(&self) -> usize {
		self.0 as usize
	}
}

impl std::fmt::Display for NodeId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{}", self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn arena_index() {
		let id = NodeId::new(42);
		assert_eq!(id, NodeId(42));
		assert_eq!(id.index(), 42);
		assert_eq!(id.to_string(), "#42")
	}

	#[test]
	#[should_panic]
	fn arena_overflow() {
		NodeId::new(u32::MAX as usize + 1);
	}
}
