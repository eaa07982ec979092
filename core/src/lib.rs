//! In-memory RDF graph index.
//!
//! A [`Tree`] groups the outgoing edges of every node by predicate, tracks
//! whether each node acts as a subject, an object or both, and reconstructs
//! RDF collections (`rdf:first`/`rdf:rest` chains) into ordered item lists.
//!
//! The tree is generic over its term type: any `Clone + Eq + Hash` type
//! works, such as [`rdf_types::Term`] or the interned terms of an
//! [`rdf_types::IndexVocabulary`] (see [`uninterpreted`]).
//!
//! ```
//! use rdftree::{Keywords, Tree};
//!
//! let tree = Tree::from_quads(
//! 	Keywords::new("rdf:type", "rdf:first", "rdf:rest", "rdf:nil"),
//! 	[
//! 		rdf_types::Quad("ex:a", "ex:list", "_:l", None),
//! 		rdf_types::Quad("_:l", "rdf:first", "ex:b", None),
//! 		rdf_types::Quad("_:l", "rdf:rest", "rdf:nil", None),
//! 	],
//! );
//!
//! let root = tree.get(&"_:l").unwrap();
//! let values: Vec<_> = tree.list_values(root.id()).map(|n| *n.unwrap().term()).collect();
//! assert_eq!(values, ["ex:b"]);
//! ```
mod id;
pub mod node;
pub mod parser;
pub mod predicate;
pub mod tree;
pub mod uninterpreted;
pub mod vocab;

pub use id::*;
pub use node::{ListShape, Node};
pub use parser::{Parser, Summary};
pub use predicate::Predicate;
pub use tree::Tree;
pub use vocab::Keywords;

pub type Quad<T> = rdf_types::Quad<T, T, T, T>;
