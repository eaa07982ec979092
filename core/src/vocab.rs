//! RDF vocabulary recognized by the parser.
use iref::Iri;
use rdf_types::{BlankIdVocabulary, IriVocabularyMut, LiteralVocabulary};
use static_iref::iri;

pub const RDF_TYPE: &Iri = iri!("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
pub const RDF_FIRST: &Iri = iri!("http://www.w3.org/1999/02/22-rdf-syntax-ns#first");
pub const RDF_REST: &Iri = iri!("http://www.w3.org/1999/02/22-rdf-syntax-ns#rest");
pub const RDF_NIL: &Iri = iri!("http://www.w3.org/1999/02/22-rdf-syntax-ns#nil");

/// Terms given a special meaning while building a tree.
///
/// The tree is generic over its term type, so it cannot build those terms
/// by itself. They are provided once, when the tree is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keywords<T> {
	/// `rdf:type`.
	pub ty: T,

	/// `rdf:first`.
	pub first: T,

	/// `rdf:rest`.
	pub rest: T,

	/// `rdf:nil`.
	pub nil: T,
}

impl<T> Keywords<T> {
	pub fn new(ty: T, first: T, rest: T, nil: T) -> Self {
		Self {
			ty,
			first,
			rest,
			nil,
		}
	}

	pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Keywords<U> {
		Keywords {
			ty: f(self.ty),
			first: f(self.first),
			rest: f(self.rest),
			nil: f(self.nil),
		}
	}
}

impl Keywords<&'static Iri> {
	/// Lexical IRIs of the keywords.
	pub fn iris() -> Self {
		Self::new(RDF_TYPE, RDF_FIRST, RDF_REST, RDF_NIL)
	}
}

impl<T: PartialEq> Keywords<T> {
	pub fn is_type(&self, term: &T) -> bool {
		self.ty == *term
	}

	pub fn is_first(&self, term: &T) -> bool {
		self.first == *term
	}

	pub fn is_rest(&self, term: &T) -> bool {
		self.rest == *term
	}

	pub fn is_nil(&self, term: &T) -> bool {
		self.nil == *term
	}
}

impl Default for Keywords<rdf_types::Term> {
	fn default() -> Self {
		Keywords::iris().map(|iri| rdf_types::Term::Id(rdf_types::Id::Iri(iri.to_owned())))
	}
}

impl<I, B, L> Keywords<rdf_types::Term<rdf_types::Id<I, B>, L>> {
	/// Interns the keywords into the given vocabulary.
	pub fn in_vocabulary<V>(vocabulary: &mut V) -> Self
	where
		V: IriVocabularyMut<Iri = I> + BlankIdVocabulary<BlankId = B> + LiteralVocabulary<Literal = L>,
	{
		Keywords::iris().map(|iri| {
			let v_iri = vocabulary.insert_owned(iri.to_owned());
			rdf_types::Term::Id(rdf_types::Id::Iri(v_iri))
		})
	}
}
