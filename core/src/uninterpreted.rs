//! Trees over terms interned in an `rdf_types` vocabulary.
use rdf_types::{BlankIdVocabulary, IriVocabulary, LiteralVocabulary};

/// Term whose IRIs, blank node identifiers and literals are interned in `V`.
pub type Term<V> = rdf_types::Term<
	rdf_types::Id<<V as IriVocabulary>::Iri, <V as BlankIdVocabulary>::BlankId>,
	<V as LiteralVocabulary>::Literal,
>;

pub type Quad<V> = crate::Quad<Term<V>>;

/// RDF vocabulary terms interned in `V`, see
/// [`Keywords::in_vocabulary`](crate::Keywords::in_vocabulary).
pub type Keywords<V> = crate::Keywords<Term<V>>;

pub type Tree<V> = crate::Tree<Term<V>>;

pub type Parser<V> = crate::Parser<Term<V>>;
