use clap::Parser;
use codespan_reporting::{
	diagnostic::{Diagnostic, Label},
	files::SimpleFiles,
	term::{
		self,
		termcolor::{ColorChoice, StandardStream},
	},
};
use contextual::WithContext;
use locspan::Meta;
use nquads_syntax::Parse;
use rdf_types::{IndexVocabulary, InsertIntoVocabulary, MapLiteral, RdfDisplay};
use rdftree::{uninterpreted, Node};
use std::{
	fs,
	io::{self, BufWriter, Write},
	path::{Path, PathBuf},
	process::ExitCode,
};
use yansi::Paint;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Input N-Quads files.
	inputs: Vec<PathBuf>,

	/// Only report collections.
	#[arg(short, long)]
	lists_only: bool,

	/// Turn debugging information on.
	#[arg(short, long = "verbose", action = clap::ArgAction::Count)]
	verbosity: u8,
}

#[derive(Debug, thiserror::Error)]
enum Error {
	#[error("unable to read `{}`: {1}", .0.display())]
	Read(PathBuf, io::Error),

	#[error("invalid N-Quads document `{}`", .0.display())]
	Parse(PathBuf),

	#[error(transparent)]
	Output(#[from] io::Error),
}

type Quad = uninterpreted::Quad<IndexVocabulary>;
type Tree = uninterpreted::Tree<IndexVocabulary>;

fn main() -> ExitCode {
	let args = Args::parse();

	stderrlog::new()
		.verbosity(args.verbosity as usize)
		.init()
		.expect("unable to initialize logger");

	match run(args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			log::error!("{e}");
			ExitCode::FAILURE
		}
	}
}

fn run(args: Args) -> Result<(), Error> {
	let mut vocabulary: IndexVocabulary = Default::default();
	let mut files = SimpleFiles::new();

	let keywords = uninterpreted::Keywords::<IndexVocabulary>::in_vocabulary(&mut vocabulary);
	let mut parser = rdftree::Parser::new(Tree::new(keywords));

	for input in &args.inputs {
		let quads = load(&mut vocabulary, &mut files, input)?;
		log::debug!("{} quads in `{}`", quads.len(), input.display());
		parser.add_quads(quads)
	}

	let summary = parser.flush();
	if summary.malformed() > 0 {
		log::info!(
			"{} malformed lists ({} open, {} cyclic)",
			summary.malformed(),
			summary.open,
			summary.cyclic
		)
	}

	let tree = parser.into_tree();
	let mut output = BufWriter::new(io::stdout().lock());

	for node in tree.subjects() {
		if !args.lists_only || node.is_list_root() {
			report(&vocabulary, &tree, node, &mut output)?
		}
	}

	output.flush()?;
	Ok(())
}

fn load(
	vocabulary: &mut IndexVocabulary,
	files: &mut SimpleFiles<String, String>,
	path: &Path,
) -> Result<Vec<Quad>, Error> {
	let buffer = fs::read_to_string(path).map_err(|e| Error::Read(path.to_owned(), e))?;

	match nquads_syntax::Document::parse_str(&buffer, |span| span) {
		Ok(quads) => Ok(quads
			.into_value()
			.into_iter()
			.map(|quad| {
				quad.into_value()
					.strip_all_but_predicate()
					.map_literal(|l| l.insert_type_into_vocabulary(vocabulary))
					.insert_into_vocabulary(vocabulary)
					.into_grdf()
			})
			.collect()),
		Err(Meta(e, span)) => {
			let file_id = files.add(path.to_string_lossy().into_owned(), buffer);
			let diagnostic = Diagnostic::error()
				.with_message(e.to_string())
				.with_labels(vec![Label::primary(file_id, span.range())]);

			let writer = StandardStream::stderr(ColorChoice::Auto);
			let config = term::Config::default();
			if let Err(e) = term::emit(&mut writer.lock(), &config, &*files, &diagnostic) {
				log::warn!("unable to report diagnostic: {e}")
			}

			Err(Error::Parse(path.to_owned()))
		}
	}
}

/// Writes the edges of a subject node, and its items if it heads a list.
fn report(
	vocabulary: &IndexVocabulary,
	tree: &Tree,
	node: &Node<uninterpreted::Term<IndexVocabulary>>,
	output: &mut impl Write,
) -> io::Result<()> {
	writeln!(
		output,
		"{}",
		Paint::new(node.term().with(vocabulary).rdf_display()).bold()
	)?;

	for predicate in node.predicates() {
		write!(output, "\t{}", predicate.term().with(vocabulary).rdf_display())?;
		for (object, _) in predicate.objects() {
			write!(output, " {}", object.with(vocabulary).rdf_display())?;
		}
		writeln!(output)?;

		for list in predicate.lists() {
			writeln!(
				output,
				"\t\t{} {}",
				Paint::cyan("list"),
				list.with(vocabulary).rdf_display()
			)?;
		}
	}

	if let Some(shape) = node.list_shape() {
		write!(output, "\t{} ({shape}):", Paint::green("items"))?;
		for value in tree.list_values(node.id()) {
			match value {
				Some(value) => write!(output, " {}", value.term().with(vocabulary).rdf_display())?,
				None => write!(output, " {}", Paint::red("?"))?,
			}
		}
		writeln!(output)?;
	}

	Ok(())
}
