use iref::Iri;
use nquads_syntax::Parse;
use rdf_types::{IndexVocabulary, InsertIntoVocabulary, IriVocabularyMut, MapLiteral};
use rdftree::{uninterpreted, Keywords, ListShape, Tree};
use static_iref::iri;

fn load(vocabulary: &mut IndexVocabulary, input: &str) -> Vec<uninterpreted::Quad<IndexVocabulary>> {
	let buffer = std::fs::read_to_string(input).unwrap();
	let quads = nquads_syntax::Document::parse_str(&buffer, |_| ()).unwrap();

	quads
		.into_value()
		.into_iter()
		.map(|quad| {
			quad.into_value()
				.strip_all_but_predicate()
				.map_literal(|l| l.insert_type_into_vocabulary(vocabulary))
				.insert_into_vocabulary(vocabulary)
				.into_grdf()
		})
		.collect()
}

fn iri(vocabulary: &mut IndexVocabulary, iri: &Iri) -> uninterpreted::Term<IndexVocabulary> {
	rdf_types::Term::Id(rdf_types::Id::Iri(vocabulary.insert_owned(iri.to_owned())))
}

#[test]
fn lists() {
	let mut vocabulary = IndexVocabulary::default();
	let keywords = Keywords::in_vocabulary(&mut vocabulary);
	let quads = load(&mut vocabulary, "tests/inputs/lists.nq");
	let tree: uninterpreted::Tree<IndexVocabulary> = Tree::from_quads(keywords.clone(), quads);

	let resource = tree
		.subject(&iri(&mut vocabulary, iri!("http://example.org/resource")))
		.unwrap();
	assert_eq!(resource.predicate_count(), 4);
	assert!(resource.ty().is_some());
	assert_eq!(resource.quads().len(), 4);

	let property_a = resource
		.predicate(&iri(&mut vocabulary, iri!("http://example.org/propertyA")))
		.unwrap();
	let a1 = property_a.sole_object().unwrap();
	assert!(property_a.has_list(tree.node(a1).term()));
	assert_eq!(tree.node(a1).list_shape(), Some(ListShape::Closed));
	assert_eq!(tree.items(a1).count(), 2);
	assert!(tree
		.list_values(a1)
		.all(|v| v.map(|v| v.is_list_value()).unwrap_or(false)));

	let property_b = resource
		.predicate(&iri(&mut vocabulary, iri!("http://example.org/propertyB")))
		.unwrap();
	assert_eq!(property_b.lists().collect::<Vec<_>>(), [&keywords.nil]);

	let property_c = resource
		.predicate(&iri(&mut vocabulary, iri!("http://example.org/propertyC")))
		.unwrap();
	let c1 = property_c.sole_object().unwrap();
	assert_eq!(tree.node(c1).list_shape(), Some(ListShape::Cyclic));
	assert_eq!(tree.items(c1).count(), 2);

	assert_eq!(tree.list_roots().count(), 2);
	assert_eq!(tree.nodes().filter(|n| n.is_list_value()).count(), 4)
}
